//! AIS binary message decoding
//!
//! [`AisMessage::decode()`] turns a reassembled bitstream into a
//! typed message. Types that share a wire layout share a variant of
//! [`MessageData`]; the concrete type number is preserved on the
//! envelope. Field offsets follow ITU-R M.1371-4.

use thiserror::Error;

use crate::appdata::{ApplicationData, OpaqueBits};
use crate::sixbit::{BitBuffer, BitReader};

/// Speed-over-ground sentinel: not available
pub const SPEED_NOT_AVAILABLE: u32 = 1023;
/// Speed-over-ground sentinel: 102.2 knots or higher
pub const SPEED_FAST_MOVER: u32 = 1022;
/// Rate-of-turn sentinel: not available
pub const TURN_NOT_AVAILABLE: i32 = -128;
/// Rate-of-turn sentinel: turning left faster than 5 deg / 30 s
pub const TURN_FAST_LEFT: i32 = -127;
/// Rate-of-turn sentinel: turning right faster than 5 deg / 30 s
pub const TURN_FAST_RIGHT: i32 = 127;
/// SAR altitude sentinel: not available
pub const ALT_NOT_AVAILABLE: u32 = 4095;
/// SAR altitude sentinel: 4094 metres or higher
pub const ALT_HIGH: u32 = 4094;

/// MID prefix marking an auxiliary craft MMSI (98MIDXXXX)
const AUXILIARY_MMSI_PREFIX: u32 = 98;

/// Bitstreams that do not decode to any AIS message
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Type tag outside `1..=27`
    #[error("unrecognized AIS message type {0}")]
    UnknownType(u8),

    /// Fewer bits than the type's mandatory fields
    #[error("AIS message type {msgtype} needs at least {need} bits, got {got}")]
    TooShort {
        msgtype: u8,
        need: usize,
        got: usize,
    },

    /// Type 24 part number other than A (0) or B (1)
    #[error("AIS message type 24 carries invalid part number {0}")]
    BadPartNumber(u32),
}

/// One decoded AIS message
#[derive(Clone, Debug, PartialEq)]
pub struct AisMessage {
    /// Message type, `1..=27`
    pub msgtype: u8,
    /// Repeat indicator
    pub repeat: u8,
    /// Source MMSI
    pub mmsi: u32,
    /// Type-specific payload
    pub data: MessageData,
}

/// Ship dimensions relative to the position reference point, metres
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub to_bow: u32,
    pub to_stern: u32,
    pub to_port: u32,
    pub to_starboard: u32,
}

/// Types 1-3: Class A position report
#[derive(Clone, Debug, PartialEq)]
pub struct PositionReport {
    pub status: u32,
    /// Rate of turn, AIS-encoded; see the `TURN_*` sentinels
    pub turn: i32,
    /// Speed over ground, 1/10 knot
    pub speed: u32,
    pub accuracy: bool,
    /// Longitude, 1/10000 arc-minutes
    pub lon: i32,
    /// Latitude, 1/10000 arc-minutes
    pub lat: i32,
    /// Course over ground, 1/10 degree
    pub course: u32,
    /// True heading, degrees
    pub heading: u32,
    /// UTC second of position fix
    pub second: u32,
    pub maneuver: u32,
    pub raim: bool,
    pub radio: u32,
}

/// Types 4 and 11: base station report / UTC date response
#[derive(Clone, Debug, PartialEq)]
pub struct BaseStationReport {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub accuracy: bool,
    pub lon: i32,
    pub lat: i32,
    pub epfd: u32,
    pub raim: bool,
    pub radio: u32,
}

/// Type 5: Class A static and voyage related data
#[derive(Clone, Debug, PartialEq)]
pub struct StaticVoyageData {
    pub ais_version: u32,
    pub imo: u32,
    pub callsign: String,
    pub shipname: String,
    pub shiptype: u32,
    pub dim: Dimensions,
    pub epfd: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Draught, 1/10 metre
    pub draught: u32,
    pub destination: String,
    pub dte: u32,
}

/// Type 6: addressed binary message
#[derive(Clone, Debug, PartialEq)]
pub struct AddressedBinary {
    pub seqno: u32,
    pub dest_mmsi: u32,
    pub retransmit: bool,
    pub dac: u32,
    pub fid: u32,
    pub app: ApplicationData,
}

/// Type 9: SAR aircraft position report
#[derive(Clone, Debug, PartialEq)]
pub struct SarAircraftReport {
    /// Altitude, metres; see the `ALT_*` sentinels
    pub alt: u32,
    pub speed: u32,
    pub accuracy: bool,
    pub lon: i32,
    pub lat: i32,
    pub course: u32,
    pub second: u32,
    pub regional: u32,
    pub dte: u32,
    pub raim: bool,
    pub radio: u32,
}

/// Type 15: interrogation for up to two stations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interrogation {
    pub mmsi1: u32,
    pub type1_1: u32,
    pub offset1_1: u32,
    pub type1_2: u32,
    pub offset1_2: u32,
    pub mmsi2: u32,
    pub type2_1: u32,
    pub offset2_1: u32,
}

/// Type 16: assignment mode command
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentCommand {
    pub mmsi1: u32,
    pub offset1: u32,
    pub increment1: u32,
    pub mmsi2: u32,
    pub offset2: u32,
    pub increment2: u32,
}

/// Type 18: standard Class B position report
#[derive(Clone, Debug, PartialEq)]
pub struct StandardClassB {
    pub reserved: u32,
    pub speed: u32,
    pub accuracy: bool,
    pub lon: i32,
    pub lat: i32,
    pub course: u32,
    pub heading: u32,
    pub second: u32,
    pub regional: u32,
    pub cs: bool,
    pub display: bool,
    pub dsc: bool,
    pub band: bool,
    pub msg22: bool,
    pub assigned: bool,
    pub raim: bool,
    pub radio: u32,
}

/// Type 19: extended Class B position report
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendedClassB {
    pub reserved: u32,
    pub speed: u32,
    pub accuracy: bool,
    pub lon: i32,
    pub lat: i32,
    pub course: u32,
    pub heading: u32,
    pub second: u32,
    pub regional: u32,
    pub shipname: String,
    pub shiptype: u32,
    pub dim: Dimensions,
    pub epfd: u32,
    pub raim: bool,
    pub dte: u32,
    pub assigned: bool,
}

/// One slot reservation of a type 20 report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinkReservation {
    pub offset: u32,
    pub number: u32,
    pub timeout: u32,
    pub increment: u32,
}

/// Type 21: aid-to-navigation report
#[derive(Clone, Debug, PartialEq)]
pub struct AidToNavigation {
    pub aid_type: u32,
    pub name: String,
    pub accuracy: bool,
    pub lon: i32,
    pub lat: i32,
    pub dim: Dimensions,
    pub epfd: u32,
    pub second: u32,
    pub off_position: bool,
    pub regional: u32,
    pub raim: bool,
    pub virtual_aid: bool,
    pub assigned: bool,
}

/// Addressing of a type 22 channel management command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelTarget {
    /// Broadcast to a rectangular area, 1/10 arc-minute corners
    Area {
        ne_lon: i32,
        ne_lat: i32,
        sw_lon: i32,
        sw_lat: i32,
    },
    /// Addressed to two stations
    Addressed { dest1: u32, dest2: u32 },
}

/// Type 22: channel management
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelManagement {
    pub channel_a: u32,
    pub channel_b: u32,
    pub txrx: u32,
    pub power: bool,
    pub target: ChannelTarget,
    pub addressed: bool,
    pub band_a: bool,
    pub band_b: bool,
    pub zonesize: u32,
}

/// Type 23: group assignment command
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupAssignment {
    pub ne_lon: i32,
    pub ne_lat: i32,
    pub sw_lon: i32,
    pub sw_lat: i32,
    pub stationtype: u32,
    pub shiptype: u32,
    pub txrx: u32,
    pub interval: u32,
    pub quiet: u32,
}

/// Hull geometry of a type 24 Part B: own dimensions, or the
/// mothership for an auxiliary craft (MMSI prefix 98)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullReference {
    Dimensions(Dimensions),
    Mothership(u32),
}

/// Static fields of a type 24 Part B
#[derive(Clone, Debug, PartialEq)]
pub struct ClassBStatic {
    pub shiptype: u32,
    pub vendorid: String,
    pub model: u32,
    pub serial: u32,
    pub callsign: String,
    pub hull: HullReference,
}

/// Type 24: static data report, in halves
///
/// `Merged` is produced by the session when a Part B finds its
/// Part A in the cache; a bare decode never yields it.
#[derive(Clone, Debug, PartialEq)]
pub enum StaticDataReport {
    PartA { shipname: String },
    PartB(ClassBStatic),
    Merged { shipname: String, statics: ClassBStatic },
}

/// Types 25 and 26: slot binary message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotBinary {
    pub addressed: bool,
    pub structured: bool,
    pub dest_mmsi: Option<u32>,
    pub app_id: Option<u32>,
    pub data: OpaqueBits,
}

/// Type 27: long-range broadcast position report
#[derive(Clone, Debug, PartialEq)]
pub struct LongRangeReport {
    pub accuracy: bool,
    pub raim: bool,
    pub status: u32,
    /// Longitude, 1/1000 arc-minutes (wire precision is 1/10)
    pub lon: i32,
    /// Latitude, 1/1000 arc-minutes (wire precision is 1/10)
    pub lat: i32,
    /// Speed over ground, knots
    pub speed: u32,
    /// Course over ground, degrees
    pub course: u32,
    pub gnss: bool,
}

/// Payload of one decoded message
#[derive(Clone, Debug, PartialEq)]
pub enum MessageData {
    /// Types 1-3
    Position(PositionReport),
    /// Types 4 and 11
    BaseStation(BaseStationReport),
    /// Type 5
    StaticVoyage(Box<StaticVoyageData>),
    /// Type 6
    AddressedBinary(AddressedBinary),
    /// Types 7 and 13
    Acknowledge {
        mmsi1: u32,
        mmsi2: u32,
        mmsi3: u32,
        mmsi4: u32,
    },
    /// Type 8
    BroadcastBinary {
        dac: u32,
        fid: u32,
        app: ApplicationData,
    },
    /// Type 9
    SarAircraft(SarAircraftReport),
    /// Type 10
    UtcInquiry { dest_mmsi: u32 },
    /// Type 12
    SafetyAddressed {
        seqno: u32,
        dest_mmsi: u32,
        retransmit: bool,
        text: String,
    },
    /// Type 14
    SafetyBroadcast { text: String },
    /// Type 15
    Interrogation(Interrogation),
    /// Type 16
    Assignment(AssignmentCommand),
    /// Type 17
    GnssBroadcast {
        /// 1/10 arc-minutes
        lon: i32,
        lat: i32,
        data: OpaqueBits,
    },
    /// Type 18
    StandardClassB(StandardClassB),
    /// Type 19
    ExtendedClassB(Box<ExtendedClassB>),
    /// Type 20
    LinkManagement {
        reservations: [LinkReservation; 4],
    },
    /// Type 21
    AidToNavigation(Box<AidToNavigation>),
    /// Type 22
    ChannelManagement(ChannelManagement),
    /// Type 23
    GroupAssignment(GroupAssignment),
    /// Type 24
    StaticDataReport(StaticDataReport),
    /// Type 25
    SingleSlotBinary(SlotBinary),
    /// Type 26
    MultiSlotBinary { payload: SlotBinary, radio: u32 },
    /// Type 27
    LongRange(LongRangeReport),
}

/// Mandatory bit count per message type
fn required_bits(msgtype: u8) -> usize {
    match msgtype {
        1..=3 => 149,
        4 | 11 => 149,
        5 => 420,
        6 => 88,
        7 | 13 => 72,
        8 => 56,
        9 => 148,
        10 => 70,
        12 => 72,
        14 => 40,
        15 => 88,
        16 => 92,
        17 => 80,
        18 => 148,
        19 => 308,
        20 => 72,
        21 => 272,
        22 => 145,
        23 => 154,
        24 => 40,
        25 => 40,
        26 => 60,
        27 => 95,
        _ => unreachable!("type validated before length check"),
    }
}

impl AisMessage {
    /// Decode a reassembled, pad-trimmed bitstream
    pub fn decode(buf: &BitBuffer) -> Result<AisMessage, MessageError> {
        let rd = buf.reader();

        let msgtype = rd.u(0, 6) as u8;
        if !(1..=27).contains(&msgtype) {
            return Err(MessageError::UnknownType(msgtype));
        }

        let need = required_bits(msgtype);
        if rd.bit_len() < need {
            return Err(MessageError::TooShort {
                msgtype,
                need,
                got: rd.bit_len(),
            });
        }

        let data = match msgtype {
            1..=3 => position_report(&rd),
            4 | 11 => base_station(&rd),
            5 => static_voyage(&rd),
            6 => addressed_binary(&rd),
            7 | 13 => acknowledge(&rd),
            8 => broadcast_binary(&rd),
            9 => sar_aircraft(&rd),
            10 => MessageData::UtcInquiry {
                dest_mmsi: rd.u(40, 30),
            },
            12 => safety_addressed(&rd),
            14 => MessageData::SafetyBroadcast {
                text: rd.string(40, rd.bit_len().saturating_sub(40).min(966)),
            },
            15 => interrogation(&rd),
            16 => assignment(&rd),
            17 => gnss_broadcast(&rd),
            18 => standard_class_b(&rd),
            19 => extended_class_b(&rd),
            20 => link_management(&rd),
            21 => aid_to_navigation(&rd),
            22 => channel_management(&rd),
            23 => group_assignment(&rd),
            24 => static_data_report(&rd)?,
            25 => MessageData::SingleSlotBinary(slot_binary(&rd, rd.bit_len())),
            26 => multi_slot_binary(&rd),
            27 => long_range(&rd),
            _ => unreachable!(),
        };

        Ok(AisMessage {
            msgtype,
            repeat: rd.u(6, 2) as u8,
            mmsi: rd.u(8, 30),
            data,
        })
    }
}

fn position_report(rd: &BitReader<'_>) -> MessageData {
    MessageData::Position(PositionReport {
        status: rd.u(38, 4),
        turn: rd.i(42, 8),
        speed: rd.u(50, 10),
        accuracy: rd.flag(60),
        lon: rd.i(61, 28),
        lat: rd.i(89, 27),
        course: rd.u(116, 12),
        heading: rd.u(128, 9),
        second: rd.u(137, 6),
        maneuver: rd.u(143, 2),
        raim: rd.flag(148),
        radio: rd.u(149, 19),
    })
}

fn base_station(rd: &BitReader<'_>) -> MessageData {
    MessageData::BaseStation(BaseStationReport {
        year: rd.u(38, 14),
        month: rd.u(52, 4),
        day: rd.u(56, 5),
        hour: rd.u(61, 5),
        minute: rd.u(66, 6),
        second: rd.u(72, 6),
        accuracy: rd.flag(78),
        lon: rd.i(79, 28),
        lat: rd.i(107, 27),
        epfd: rd.u(134, 4),
        raim: rd.flag(148),
        radio: rd.u(149, 19),
    })
}

fn static_voyage(rd: &BitReader<'_>) -> MessageData {
    MessageData::StaticVoyage(Box::new(StaticVoyageData {
        ais_version: rd.u(38, 2),
        imo: rd.u(40, 30),
        callsign: rd.string(70, 42),
        shipname: rd.string(112, 120),
        shiptype: rd.u(232, 8),
        dim: Dimensions {
            to_bow: rd.u(240, 9),
            to_stern: rd.u(249, 9),
            to_port: rd.u(258, 6),
            to_starboard: rd.u(264, 6),
        },
        epfd: rd.u(270, 4),
        month: rd.u(274, 4),
        day: rd.u(278, 5),
        hour: rd.u(283, 5),
        minute: rd.u(288, 6),
        draught: rd.u(294, 8),
        destination: rd.string(302, 120),
        dte: rd.u(422, 1),
    }))
}

fn addressed_binary(rd: &BitReader<'_>) -> MessageData {
    let dac = rd.u(72, 10);
    let fid = rd.u(82, 6);
    MessageData::AddressedBinary(AddressedBinary {
        seqno: rd.u(38, 2),
        dest_mmsi: rd.u(40, 30),
        retransmit: rd.flag(70),
        dac,
        fid,
        app: ApplicationData::decode(6, dac, fid, rd, 88),
    })
}

fn acknowledge(rd: &BitReader<'_>) -> MessageData {
    MessageData::Acknowledge {
        mmsi1: rd.u(40, 30),
        mmsi2: rd.u(72, 30),
        mmsi3: rd.u(104, 30),
        mmsi4: rd.u(136, 30),
    }
}

fn broadcast_binary(rd: &BitReader<'_>) -> MessageData {
    let dac = rd.u(40, 10);
    let fid = rd.u(50, 6);
    MessageData::BroadcastBinary {
        dac,
        fid,
        app: ApplicationData::decode(8, dac, fid, rd, 56),
    }
}

fn sar_aircraft(rd: &BitReader<'_>) -> MessageData {
    MessageData::SarAircraft(SarAircraftReport {
        alt: rd.u(38, 12),
        speed: rd.u(50, 10),
        accuracy: rd.flag(60),
        lon: rd.i(61, 28),
        lat: rd.i(89, 27),
        course: rd.u(116, 12),
        second: rd.u(128, 6),
        regional: rd.u(134, 8),
        dte: rd.u(142, 1),
        raim: rd.flag(147),
        radio: rd.u(148, 20),
    })
}

fn safety_addressed(rd: &BitReader<'_>) -> MessageData {
    MessageData::SafetyAddressed {
        seqno: rd.u(38, 2),
        dest_mmsi: rd.u(40, 30),
        retransmit: rd.flag(70),
        text: rd.string(72, rd.bit_len().saturating_sub(72).min(936)),
    }
}

fn interrogation(rd: &BitReader<'_>) -> MessageData {
    MessageData::Interrogation(Interrogation {
        mmsi1: rd.u(40, 30),
        type1_1: rd.u(70, 6),
        offset1_1: rd.u(76, 12),
        type1_2: rd.u(90, 6),
        offset1_2: rd.u(96, 12),
        mmsi2: rd.u(110, 30),
        type2_1: rd.u(140, 6),
        offset2_1: rd.u(146, 12),
    })
}

fn assignment(rd: &BitReader<'_>) -> MessageData {
    MessageData::Assignment(AssignmentCommand {
        mmsi1: rd.u(40, 30),
        offset1: rd.u(70, 12),
        increment1: rd.u(82, 10),
        mmsi2: rd.u(92, 30),
        offset2: rd.u(122, 12),
        increment2: rd.u(134, 10),
    })
}

fn gnss_broadcast(rd: &BitReader<'_>) -> MessageData {
    MessageData::GnssBroadcast {
        lon: rd.i(40, 18),
        lat: rd.i(58, 17),
        data: OpaqueBits::capture(rd, 80, rd.bit_len().min(80 + 736)),
    }
}

fn standard_class_b(rd: &BitReader<'_>) -> MessageData {
    MessageData::StandardClassB(StandardClassB {
        reserved: rd.u(38, 8),
        speed: rd.u(46, 10),
        accuracy: rd.flag(56),
        lon: rd.i(57, 28),
        lat: rd.i(85, 27),
        course: rd.u(112, 12),
        heading: rd.u(124, 9),
        second: rd.u(133, 6),
        regional: rd.u(139, 2),
        cs: rd.flag(141),
        display: rd.flag(142),
        dsc: rd.flag(143),
        band: rd.flag(144),
        msg22: rd.flag(145),
        assigned: rd.flag(146),
        raim: rd.flag(147),
        radio: rd.u(148, 20),
    })
}

fn extended_class_b(rd: &BitReader<'_>) -> MessageData {
    MessageData::ExtendedClassB(Box::new(ExtendedClassB {
        reserved: rd.u(38, 8),
        speed: rd.u(46, 10),
        accuracy: rd.flag(56),
        lon: rd.i(57, 28),
        lat: rd.i(85, 27),
        course: rd.u(112, 12),
        heading: rd.u(124, 9),
        second: rd.u(133, 6),
        regional: rd.u(139, 4),
        shipname: rd.string(143, 120),
        shiptype: rd.u(263, 8),
        dim: Dimensions {
            to_bow: rd.u(271, 9),
            to_stern: rd.u(280, 9),
            to_port: rd.u(289, 6),
            to_starboard: rd.u(295, 6),
        },
        epfd: rd.u(301, 4),
        raim: rd.flag(305),
        dte: rd.u(306, 1),
        assigned: rd.flag(307),
    }))
}

fn link_management(rd: &BitReader<'_>) -> MessageData {
    let mut reservations = [LinkReservation::default(); 4];
    for (n, slot) in reservations.iter_mut().enumerate() {
        let b = 40 + 30 * n;
        if b + 30 > rd.bit_len() {
            break;
        }
        *slot = LinkReservation {
            offset: rd.u(b, 12),
            number: rd.u(b + 12, 4),
            timeout: rd.u(b + 16, 3),
            increment: rd.u(b + 19, 11),
        };
    }
    MessageData::LinkManagement { reservations }
}

fn aid_to_navigation(rd: &BitReader<'_>) -> MessageData {
    // the name may continue in an extension field at bit 272
    let mut name = rd.string_raw(43, 120);
    if rd.bit_len() > 272 {
        name.push_str(&rd.string_raw(272, (rd.bit_len() - 272).min(88)));
    }
    let trimmed = name.trim_end_matches(' ').len();
    name.truncate(trimmed);

    MessageData::AidToNavigation(Box::new(AidToNavigation {
        aid_type: rd.u(38, 5),
        name,
        accuracy: rd.flag(163),
        lon: rd.i(164, 28),
        lat: rd.i(192, 27),
        dim: Dimensions {
            to_bow: rd.u(219, 9),
            to_stern: rd.u(228, 9),
            to_port: rd.u(237, 6),
            to_starboard: rd.u(243, 6),
        },
        epfd: rd.u(249, 4),
        second: rd.u(253, 6),
        off_position: rd.flag(259),
        regional: rd.u(260, 8),
        raim: rd.flag(268),
        virtual_aid: rd.flag(269),
        assigned: rd.flag(270),
    }))
}

fn channel_management(rd: &BitReader<'_>) -> MessageData {
    let addressed = rd.flag(139);
    let target = if addressed {
        ChannelTarget::Addressed {
            dest1: rd.u(69, 30),
            dest2: rd.u(104, 30),
        }
    } else {
        ChannelTarget::Area {
            ne_lon: rd.i(69, 18),
            ne_lat: rd.i(87, 17),
            sw_lon: rd.i(104, 18),
            sw_lat: rd.i(121, 17),
        }
    };
    MessageData::ChannelManagement(ChannelManagement {
        channel_a: rd.u(40, 12),
        channel_b: rd.u(52, 12),
        txrx: rd.u(64, 4),
        power: rd.flag(68),
        target,
        addressed,
        band_a: rd.flag(140),
        band_b: rd.flag(141),
        zonesize: rd.u(142, 3),
    })
}

fn group_assignment(rd: &BitReader<'_>) -> MessageData {
    MessageData::GroupAssignment(GroupAssignment {
        ne_lon: rd.i(40, 18),
        ne_lat: rd.i(58, 17),
        sw_lon: rd.i(75, 18),
        sw_lat: rd.i(93, 17),
        stationtype: rd.u(110, 4),
        shiptype: rd.u(114, 8),
        txrx: rd.u(144, 2),
        interval: rd.u(146, 4),
        quiet: rd.u(150, 4),
    })
}

fn static_data_report(rd: &BitReader<'_>) -> Result<MessageData, MessageError> {
    let report = match rd.u(38, 2) {
        0 => StaticDataReport::PartA {
            shipname: rd.string(40, 120),
        },
        1 => {
            let mmsi = rd.u(8, 30);
            let hull = if mmsi / 10_000_000 == AUXILIARY_MMSI_PREFIX {
                HullReference::Mothership(rd.u(132, 30))
            } else {
                HullReference::Dimensions(Dimensions {
                    to_bow: rd.u(132, 9),
                    to_stern: rd.u(141, 9),
                    to_port: rd.u(150, 6),
                    to_starboard: rd.u(156, 6),
                })
            };
            StaticDataReport::PartB(ClassBStatic {
                shiptype: rd.u(40, 8),
                vendorid: rd.string(48, 18),
                model: rd.u(66, 4),
                serial: rd.u(70, 20),
                callsign: rd.string(90, 42),
                hull,
            })
        }
        part => return Err(MessageError::BadPartNumber(part)),
    };
    Ok(MessageData::StaticDataReport(report))
}

fn slot_binary(rd: &BitReader<'_>, end: usize) -> SlotBinary {
    let addressed = rd.flag(38);
    let structured = rd.flag(39);
    let mut cursor = 40;

    let dest_mmsi = addressed.then(|| {
        let mmsi = rd.u(cursor, 30);
        cursor += 30;
        mmsi
    });
    let app_id = structured.then(|| {
        let id = rd.u(cursor, 16);
        cursor += 16;
        id
    });

    SlotBinary {
        addressed,
        structured,
        dest_mmsi,
        app_id,
        data: OpaqueBits::capture(rd, cursor, end),
    }
}

fn multi_slot_binary(rd: &BitReader<'_>) -> MessageData {
    // the final 20 bits are the radio status
    let radio_start = rd.bit_len() - 20;
    MessageData::MultiSlotBinary {
        payload: slot_binary(rd, radio_start),
        radio: rd.u(radio_start, 20),
    }
}

fn long_range(rd: &BitReader<'_>) -> MessageData {
    MessageData::LongRange(LongRangeReport {
        accuracy: rd.flag(38),
        raim: rd.flag(39),
        status: rd.u(40, 4),
        // stored at 1/1000 arc-minutes to share the renderer's
        // coarse-position divisor
        lon: rd.i(44, 18) * 100,
        lat: rd.i(62, 17) * 100,
        speed: rd.u(79, 6),
        course: rd.u(85, 9),
        gnss: rd.flag(94),
    })
}
