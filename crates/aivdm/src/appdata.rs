//! Binary application payloads for message types 6 and 8
//!
//! Types 6 and 8 wrap an application-specific bitstream tagged by a
//! Designated Area Code and Functional Identifier. The `(dac, fid)`
//! pairs decoded here are the international (DAC 1), inland European
//! (DAC 200) and AtoN monitoring (DAC 235/250) formats; everything
//! else degrades to an [`OpaqueBits`] blob rather than failing the
//! message.
//!
//! Bit offsets follow the IMO SN.1/Circ.236 and Circ.289 tables and
//! the Inland AIS (ERI) specification, relative to the end of the
//! `(dac, fid)` envelope.

use crate::sixbit::BitReader;

/// An undecoded payload, captured for hex rendering
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpaqueBits {
    /// Number of valid bits
    pub bit_count: usize,
    /// The bits, MSB first, zero-padded in the final byte
    pub bytes: Vec<u8>,
}

impl OpaqueBits {
    pub(crate) fn capture(rd: &BitReader<'_>, start: usize, end: usize) -> Self {
        let end = end.min(rd.bit_len());
        let bit_count = end.saturating_sub(start);
        OpaqueBits {
            bit_count,
            bytes: rd.raw(start, end),
        }
    }
}

/// IMO 236 dangerous cargo indication (type 6, DAC 1, FID 12)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DangerousCargo {
    pub lastport: String,
    pub lmonth: u32,
    pub lday: u32,
    pub lhour: u32,
    pub lminute: u32,
    pub nextport: String,
    pub nmonth: u32,
    pub nday: u32,
    pub nhour: u32,
    pub nminute: u32,
    pub dangerous: String,
    pub imdcat: String,
    pub unid: u32,
    pub amount: u32,
    pub unit: u32,
}

/// IMO 289 clearance time to enter port (type 6, DAC 1, FID 18)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClearanceTime {
    pub linkage: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub portname: String,
    pub destination: String,
    pub lon: i32,
    pub lat: i32,
}

/// IMO 289 berthing data (type 6, DAC 1, FID 20)
///
/// The 26 service fields are two-bit availability codes, in the
/// order the wire format lists them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BerthingData {
    pub linkage: u32,
    pub berth_length: u32,
    /// Berth water depth, 1/10 metre
    pub berth_depth: u32,
    pub position: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub availability: u32,
    pub agent: u32,
    pub fuel: u32,
    pub chandler: u32,
    pub stevedore: u32,
    pub electrical: u32,
    pub water: u32,
    pub customs: u32,
    pub cartage: u32,
    pub crane: u32,
    pub lift: u32,
    pub medical: u32,
    pub navrepair: u32,
    pub provisions: u32,
    pub shiprepair: u32,
    pub surveyor: u32,
    pub steam: u32,
    pub tugs: u32,
    pub solidwaste: u32,
    pub liquidwaste: u32,
    pub hazardouswaste: u32,
    pub ballast: u32,
    pub additional: u32,
    pub regional1: u32,
    pub regional2: u32,
    pub future1: u32,
    pub future2: u32,
    pub berth_name: String,
    /// Berth longitude, 1/1000 arc-minutes
    pub berth_lon: i32,
    /// Berth latitude, 1/1000 arc-minutes
    pub berth_lat: i32,
}

/// One entry of an IMO 289 dangerous cargo list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CargoEntry {
    pub code: u32,
    pub subtype: u32,
}

/// Route waypoint in 1/10000 arc-minutes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Waypoint {
    pub lon: i32,
    pub lat: i32,
}

/// IMO 289 route information (type 6 FID 28, type 8 FID 27)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteInfo {
    pub linkage: u32,
    pub sender: u32,
    pub route_type: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub duration: u32,
    pub waypoints: Vec<Waypoint>,
}

/// One reading of an IMO 289 tidal window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TidalReading {
    pub lon: i32,
    pub lat: i32,
    pub from_hour: u32,
    pub from_minute: u32,
    pub to_hour: u32,
    pub to_minute: u32,
    pub cdir: u32,
    pub cspeed: u32,
}

/// IMO 236 meteorological and hydrological data (type 8, DAC 1, FID 11)
///
/// All fields raw; offsets and divisors apply at render time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetHydro236 {
    pub lat: i32,
    pub lon: i32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub wspeed: u32,
    pub wgust: u32,
    pub wdir: u32,
    pub wgustdir: u32,
    pub airtemp: u32,
    pub humidity: u32,
    pub dewpoint: u32,
    pub pressure: u32,
    pub pressuretend: u32,
    pub visibility: u32,
    pub waterlevel: u32,
    pub leveltrend: u32,
    pub cspeed: u32,
    pub cdir: u32,
    pub cspeed2: u32,
    pub cdir2: u32,
    pub cdepth2: u32,
    pub cspeed3: u32,
    pub cdir3: u32,
    pub cdepth3: u32,
    pub waveheight: u32,
    pub waveperiod: u32,
    pub wavedir: u32,
    pub swellheight: u32,
    pub swellperiod: u32,
    pub swelldir: u32,
    pub seastate: u32,
    pub watertemp: u32,
    pub preciptype: u32,
    pub salinity: u32,
    pub ice: u32,
}

/// IMO 289 meteorological and hydrological data (type 8, DAC 1, FID 31)
///
/// Differs from the 236 edition in position precision, an accuracy
/// flag, and signed temperatures and water level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetHydro289 {
    pub lon: i32,
    pub lat: i32,
    pub accuracy: bool,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub wspeed: u32,
    pub wgust: u32,
    pub wdir: u32,
    pub wgustdir: u32,
    pub airtemp: i32,
    pub humidity: u32,
    pub dewpoint: i32,
    pub pressure: u32,
    pub pressuretend: u32,
    pub visgreater: bool,
    pub visibility: u32,
    pub waterlevel: i32,
    pub leveltrend: u32,
    pub cspeed: u32,
    pub cdir: u32,
    pub cspeed2: u32,
    pub cdir2: u32,
    pub cdepth2: u32,
    pub cspeed3: u32,
    pub cdir3: u32,
    pub cdepth3: u32,
    pub waveheight: u32,
    pub waveperiod: u32,
    pub wavedir: u32,
    pub swellheight: u32,
    pub swellperiod: u32,
    pub swelldir: u32,
    pub seastate: u32,
    pub watertemp: i32,
    pub preciptype: u32,
    pub salinity: u32,
    pub ice: u32,
}

/// IMO 236 fairway closed (type 8, DAC 1, FID 13)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FairwayClosed {
    pub reason: String,
    pub closefrom: String,
    pub closeto: String,
    pub radius: u32,
    pub extunit: u32,
    pub fday: u32,
    pub fmonth: u32,
    pub fhour: u32,
    pub fminute: u32,
    pub tday: u32,
    pub tmonth: u32,
    pub thour: u32,
    pub tminute: u32,
}

/// Identity carried by a VTS pseudo-target
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetId {
    Mmsi(u64),
    Imo(u64),
    Callsign(String),
    Other(String),
}

/// IMO 236 VTS-generated synthetic target (type 8, DAC 1, FID 17)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VtsTarget {
    pub idtype: u32,
    pub id: TargetId,
    pub lat: i32,
    pub lon: i32,
    pub course: u32,
    pub second: u32,
    pub speed: u32,
}

/// IMO 236 marine traffic signal (type 8, DAC 1, FID 19)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarineTrafficSignal {
    pub linkage: u32,
    pub station: String,
    pub lon: i32,
    pub lat: i32,
    pub status: u32,
    pub signal: u32,
    pub hour: u32,
    pub minute: u32,
    pub nextsignal: u32,
}

/// Inland static and voyage data (type 8, DAC 200, FID 10)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlandStaticVoyage {
    pub vin: String,
    pub length: u32,
    pub beam: u32,
    pub shiptype: u32,
    pub hazard: u32,
    pub draught: u32,
    pub loaded: u32,
    pub speed_q: bool,
    pub course_q: bool,
    pub heading_q: bool,
}

/// Inland ETA at lock/bridge/terminal (type 6, DAC 200, FID 21)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlandEta {
    pub country: String,
    pub locode: String,
    pub section: String,
    pub terminal: String,
    pub hectometre: String,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub tugs: u32,
    pub airdraught: u32,
}

/// Inland RTA at lock/bridge/terminal (type 6, DAC 200, FID 22)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlandRta {
    pub country: String,
    pub locode: String,
    pub section: String,
    pub terminal: String,
    pub hectometre: String,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub status: u32,
}

/// EMMA weather warning (type 8, DAC 200, FID 23)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmmaWarning {
    pub start_year: u32,
    pub start_month: u32,
    pub start_day: u32,
    pub start_hour: u32,
    pub start_minute: u32,
    pub end_year: u32,
    pub end_month: u32,
    pub end_day: u32,
    pub end_hour: u32,
    pub end_minute: u32,
    pub lon1: i32,
    pub lat1: i32,
    pub lon2: i32,
    pub lat2: i32,
    pub wtype: u32,
    pub min: i32,
    pub max: i32,
    pub class: u32,
    pub wind: u32,
}

/// One water level gauge reading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gauge {
    pub id: u32,
    pub level: i32,
}

/// AtoN monitoring data (type 6, DAC 235/250, FID 10)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AtonMonitoring {
    pub ana_int: u32,
    pub ana_ext1: u32,
    pub ana_ext2: u32,
    pub racon: u32,
    pub light: u32,
    pub alarm: bool,
    pub stat_ext: u32,
    pub off_position: bool,
}

/// Decoded application payload of a type 6 or type 8 message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplicationData {
    DangerousCargo(DangerousCargo),
    AirDraught { airdraught: u32 },
    PersonsOnBoard { persons: u32 },
    ClearanceTime(ClearanceTime),
    BerthingData(Box<BerthingData>),
    CargoList { unit: u32, amount: u32, cargos: Vec<CargoEntry> },
    RouteInfo(RouteInfo),
    Text { linkage: u32, text: String },
    TidalWindow { month: u32, day: u32, readings: Vec<TidalReading> },
    MetHydro236(Box<MetHydro236>),
    MetHydro289(Box<MetHydro289>),
    FairwayClosed(FairwayClosed),
    VtsTargets(Vec<VtsTarget>),
    MarineTrafficSignal(MarineTrafficSignal),
    InlandStaticVoyage(InlandStaticVoyage),
    InlandEta(InlandEta),
    InlandRta(InlandRta),
    InlandPersons { crew: u32, passengers: u32, personnel: u32 },
    EmmaWarning(EmmaWarning),
    WaterLevels { country: String, gauges: Vec<Gauge> },
    SignalStatus { lon: i32, lat: i32, form: u32, facing: u32, direction: u32, status: u32 },
    AtonMonitoring(AtonMonitoring),
    /// Unknown or truncated `(dac, fid)`: kept as raw bits
    Opaque(OpaqueBits),
}

impl ApplicationData {
    /// Dispatch on `(msgtype, dac, fid)`
    ///
    /// `base` is the first bit past the envelope. Unknown pairs, and
    /// known pairs whose payload is shorter than the format minimum,
    /// come back as [`ApplicationData::Opaque`].
    pub(crate) fn decode(msgtype: u8, dac: u32, fid: u32, rd: &BitReader<'_>, base: usize) -> Self {
        let structured = match (msgtype, dac, fid) {
            (6, 1, 12) => dangerous_cargo(rd, base),
            (6, 1, 16) | (8, 1, 16) => persons_on_board(rd, base),
            (6, 1, 18) => clearance_time(rd, base),
            (6, 1, 20) => berthing_data(rd, base),
            (6, 1, 25) => cargo_list(rd, base),
            (6, 1, 28) | (8, 1, 27) => route_info(rd, base),
            (6, 1, 30) | (8, 1, 29) => text_message(rd, base),
            (6, 1, 32) => tidal_window(rd, base),
            (6, 200, 21) => inland_eta(rd, base),
            (6, 200, 22) => inland_rta(rd, base),
            (6, 200, 55) => inland_persons(rd, base),
            (6, 235, 10) | (6, 250, 10) => aton_monitoring(rd, base),
            (8, 1, 11) => met_hydro_236(rd, base),
            (8, 1, 13) => fairway_closed(rd, base),
            (8, 1, 15) => air_draught(rd, base),
            (8, 1, 17) => vts_targets(rd, base),
            (8, 1, 19) => marine_traffic_signal(rd, base),
            (8, 1, 31) => met_hydro_289(rd, base),
            (8, 200, 10) => inland_static_voyage(rd, base),
            (8, 200, 23) => emma_warning(rd, base),
            (8, 200, 24) => water_levels(rd, base),
            (8, 200, 40) => signal_status(rd, base),
            _ => None,
        };

        structured.unwrap_or_else(|| {
            ApplicationData::Opaque(OpaqueBits::capture(rd, base, rd.bit_len()))
        })
    }
}

fn remaining(rd: &BitReader<'_>, base: usize) -> usize {
    rd.bit_len().saturating_sub(base)
}

fn dangerous_cargo(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 269 {
        return None;
    }
    Some(ApplicationData::DangerousCargo(DangerousCargo {
        lastport: rd.string(b, 30),
        lmonth: rd.u(b + 30, 4),
        lday: rd.u(b + 34, 5),
        lhour: rd.u(b + 39, 5),
        lminute: rd.u(b + 44, 6),
        nextport: rd.string(b + 50, 30),
        nmonth: rd.u(b + 80, 4),
        nday: rd.u(b + 84, 5),
        nhour: rd.u(b + 89, 5),
        nminute: rd.u(b + 94, 6),
        dangerous: rd.string(b + 100, 120),
        imdcat: rd.string(b + 220, 24),
        unid: rd.u(b + 244, 13),
        amount: rd.u(b + 257, 10),
        unit: rd.u(b + 267, 2),
    }))
}

fn persons_on_board(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 13 {
        return None;
    }
    Some(ApplicationData::PersonsOnBoard {
        persons: rd.u(b, 13),
    })
}

fn air_draught(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 11 {
        return None;
    }
    Some(ApplicationData::AirDraught {
        airdraught: rd.u(b, 11),
    })
}

fn clearance_time(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 229 {
        return None;
    }
    Some(ApplicationData::ClearanceTime(ClearanceTime {
        linkage: rd.u(b, 10),
        month: rd.u(b + 10, 4),
        day: rd.u(b + 14, 5),
        hour: rd.u(b + 19, 5),
        minute: rd.u(b + 24, 6),
        portname: rd.string(b + 30, 120),
        destination: rd.string(b + 150, 30),
        lon: rd.i(b + 180, 25),
        lat: rd.i(b + 205, 24),
    }))
}

fn berthing_data(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 272 {
        return None;
    }
    Some(ApplicationData::BerthingData(Box::new(BerthingData {
        linkage: rd.u(b, 10),
        berth_length: rd.u(b + 10, 9),
        berth_depth: rd.u(b + 19, 8),
        position: rd.u(b + 27, 3),
        month: rd.u(b + 30, 4),
        day: rd.u(b + 34, 5),
        hour: rd.u(b + 39, 5),
        minute: rd.u(b + 44, 6),
        availability: rd.u(b + 50, 1),
        agent: rd.u(b + 51, 2),
        fuel: rd.u(b + 53, 2),
        chandler: rd.u(b + 55, 2),
        stevedore: rd.u(b + 57, 2),
        electrical: rd.u(b + 59, 2),
        water: rd.u(b + 61, 2),
        customs: rd.u(b + 63, 2),
        cartage: rd.u(b + 65, 2),
        crane: rd.u(b + 67, 2),
        lift: rd.u(b + 69, 2),
        medical: rd.u(b + 71, 2),
        navrepair: rd.u(b + 73, 2),
        provisions: rd.u(b + 75, 2),
        shiprepair: rd.u(b + 77, 2),
        surveyor: rd.u(b + 79, 2),
        steam: rd.u(b + 81, 2),
        tugs: rd.u(b + 83, 2),
        solidwaste: rd.u(b + 85, 2),
        liquidwaste: rd.u(b + 87, 2),
        hazardouswaste: rd.u(b + 89, 2),
        ballast: rd.u(b + 91, 2),
        additional: rd.u(b + 93, 2),
        regional1: rd.u(b + 95, 2),
        regional2: rd.u(b + 97, 2),
        future1: rd.u(b + 99, 2),
        future2: rd.u(b + 101, 2),
        berth_name: rd.string(b + 103, 120),
        berth_lon: rd.i(b + 223, 25),
        berth_lat: rd.i(b + 248, 24),
    })))
}

const CARGO_ENTRY_BITS: usize = 13;
const CARGO_LIST_MAX: usize = 36;

fn cargo_list(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 12 + CARGO_ENTRY_BITS {
        return None;
    }
    let unit = rd.u(b, 2);
    let amount = rd.u(b + 2, 10);
    let mut cargos = Vec::new();
    let mut cursor = b + 12;
    while cursor + CARGO_ENTRY_BITS <= rd.bit_len() && cargos.len() < CARGO_LIST_MAX {
        cargos.push(CargoEntry {
            code: rd.u(cursor, 4),
            subtype: rd.u(cursor + 4, 9),
        });
        cursor += CARGO_ENTRY_BITS;
    }
    Some(ApplicationData::CargoList { unit, amount, cargos })
}

const WAYPOINT_BITS: usize = 55;

fn route_info(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 61 {
        return None;
    }
    let waycount = rd.u(b + 56, 5) as usize;
    let mut waypoints = Vec::new();
    let mut cursor = b + 61;
    while waypoints.len() < waycount && cursor + WAYPOINT_BITS <= rd.bit_len() {
        waypoints.push(Waypoint {
            lon: rd.i(cursor, 28),
            lat: rd.i(cursor + 28, 27),
        });
        cursor += WAYPOINT_BITS;
    }
    Some(ApplicationData::RouteInfo(RouteInfo {
        linkage: rd.u(b, 10),
        sender: rd.u(b + 10, 3),
        route_type: rd.u(b + 13, 5),
        month: rd.u(b + 18, 4),
        day: rd.u(b + 22, 5),
        hour: rd.u(b + 27, 5),
        minute: rd.u(b + 32, 6),
        duration: rd.u(b + 38, 18),
        waypoints,
    }))
}

const TEXT_MAX_BITS: usize = 960;

fn text_message(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 16 {
        return None;
    }
    let nbits = (remaining(rd, b) - 10).min(TEXT_MAX_BITS);
    Some(ApplicationData::Text {
        linkage: rd.u(b, 10),
        text: rd.string(b + 10, nbits),
    })
}

const TIDAL_READING_BITS: usize = 88;
const TIDAL_READINGS_MAX: usize = 3;

fn tidal_window(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 9 + TIDAL_READING_BITS {
        return None;
    }
    let month = rd.u(b, 4);
    let day = rd.u(b + 4, 5);
    let mut readings = Vec::new();
    let mut cursor = b + 9;
    while cursor + TIDAL_READING_BITS <= rd.bit_len() && readings.len() < TIDAL_READINGS_MAX {
        readings.push(TidalReading {
            lon: rd.i(cursor, 25),
            lat: rd.i(cursor + 25, 24),
            from_hour: rd.u(cursor + 49, 5),
            from_minute: rd.u(cursor + 54, 6),
            to_hour: rd.u(cursor + 60, 5),
            to_minute: rd.u(cursor + 65, 6),
            cdir: rd.u(cursor + 71, 9),
            cspeed: rd.u(cursor + 80, 8),
        });
        cursor += TIDAL_READING_BITS;
    }
    Some(ApplicationData::TidalWindow { month, day, readings })
}

fn met_hydro_236(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 290 {
        return None;
    }
    Some(ApplicationData::MetHydro236(Box::new(MetHydro236 {
        lat: rd.i(b, 24),
        lon: rd.i(b + 24, 25),
        day: rd.u(b + 49, 5),
        hour: rd.u(b + 54, 5),
        minute: rd.u(b + 59, 6),
        wspeed: rd.u(b + 65, 7),
        wgust: rd.u(b + 72, 7),
        wdir: rd.u(b + 79, 9),
        wgustdir: rd.u(b + 88, 9),
        airtemp: rd.u(b + 97, 11),
        humidity: rd.u(b + 108, 7),
        dewpoint: rd.u(b + 115, 10),
        pressure: rd.u(b + 125, 9),
        pressuretend: rd.u(b + 134, 2),
        visibility: rd.u(b + 136, 8),
        waterlevel: rd.u(b + 144, 9),
        leveltrend: rd.u(b + 153, 2),
        cspeed: rd.u(b + 155, 8),
        cdir: rd.u(b + 163, 9),
        cspeed2: rd.u(b + 172, 8),
        cdir2: rd.u(b + 180, 9),
        cdepth2: rd.u(b + 189, 5),
        cspeed3: rd.u(b + 194, 8),
        cdir3: rd.u(b + 202, 9),
        cdepth3: rd.u(b + 211, 5),
        waveheight: rd.u(b + 216, 8),
        waveperiod: rd.u(b + 224, 6),
        wavedir: rd.u(b + 230, 9),
        swellheight: rd.u(b + 239, 8),
        swellperiod: rd.u(b + 247, 6),
        swelldir: rd.u(b + 253, 9),
        seastate: rd.u(b + 262, 4),
        watertemp: rd.u(b + 266, 10),
        preciptype: rd.u(b + 276, 3),
        salinity: rd.u(b + 279, 9),
        ice: rd.u(b + 288, 2),
    })))
}

fn met_hydro_289(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 294 {
        return None;
    }
    Some(ApplicationData::MetHydro289(Box::new(MetHydro289 {
        lon: rd.i(b, 25),
        lat: rd.i(b + 25, 24),
        accuracy: rd.flag(b + 49),
        day: rd.u(b + 50, 5),
        hour: rd.u(b + 55, 5),
        minute: rd.u(b + 60, 6),
        wspeed: rd.u(b + 66, 7),
        wgust: rd.u(b + 73, 7),
        wdir: rd.u(b + 80, 9),
        wgustdir: rd.u(b + 89, 9),
        airtemp: rd.i(b + 98, 11),
        humidity: rd.u(b + 109, 7),
        dewpoint: rd.i(b + 116, 10),
        pressure: rd.u(b + 126, 9),
        pressuretend: rd.u(b + 135, 2),
        visgreater: rd.flag(b + 137),
        visibility: rd.u(b + 138, 7),
        waterlevel: rd.i(b + 145, 12),
        leveltrend: rd.u(b + 157, 2),
        cspeed: rd.u(b + 159, 8),
        cdir: rd.u(b + 167, 9),
        cspeed2: rd.u(b + 176, 8),
        cdir2: rd.u(b + 184, 9),
        cdepth2: rd.u(b + 193, 5),
        cspeed3: rd.u(b + 198, 8),
        cdir3: rd.u(b + 206, 9),
        cdepth3: rd.u(b + 215, 5),
        waveheight: rd.u(b + 220, 8),
        waveperiod: rd.u(b + 228, 6),
        wavedir: rd.u(b + 234, 9),
        swellheight: rd.u(b + 243, 8),
        swellperiod: rd.u(b + 251, 6),
        swelldir: rd.u(b + 257, 9),
        seastate: rd.u(b + 266, 4),
        watertemp: rd.i(b + 270, 10),
        preciptype: rd.u(b + 280, 3),
        salinity: rd.u(b + 283, 9),
        ice: rd.u(b + 292, 2),
    })))
}

fn fairway_closed(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 412 {
        return None;
    }
    Some(ApplicationData::FairwayClosed(FairwayClosed {
        reason: rd.string(b, 120),
        closefrom: rd.string(b + 120, 120),
        closeto: rd.string(b + 240, 120),
        radius: rd.u(b + 360, 10),
        extunit: rd.u(b + 370, 2),
        fday: rd.u(b + 372, 5),
        fmonth: rd.u(b + 377, 4),
        fhour: rd.u(b + 381, 5),
        fminute: rd.u(b + 386, 6),
        tday: rd.u(b + 392, 5),
        tmonth: rd.u(b + 397, 4),
        thour: rd.u(b + 401, 5),
        tminute: rd.u(b + 406, 6),
    }))
}

const VTS_TARGET_BITS: usize = 122;
const VTS_TARGETS_MAX: usize = 4;

fn vts_targets(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < VTS_TARGET_BITS {
        return None;
    }
    let mut targets = Vec::new();
    let mut cursor = b;
    while cursor + VTS_TARGET_BITS <= rd.bit_len() && targets.len() < VTS_TARGETS_MAX {
        let idtype = rd.u(cursor, 2);
        let id = match idtype {
            0 => TargetId::Mmsi(rd.wide(cursor + 2, 42)),
            1 => TargetId::Imo(rd.wide(cursor + 2, 42)),
            2 => TargetId::Callsign(rd.string(cursor + 2, 42)),
            _ => TargetId::Other(rd.string(cursor + 2, 42)),
        };
        targets.push(VtsTarget {
            idtype,
            id,
            lat: rd.i(cursor + 48, 24),
            lon: rd.i(cursor + 72, 25),
            course: rd.u(cursor + 97, 9),
            second: rd.u(cursor + 106, 6),
            speed: rd.u(cursor + 112, 10),
        });
        cursor += VTS_TARGET_BITS;
    }
    Some(ApplicationData::VtsTargets(targets))
}

fn marine_traffic_signal(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 202 {
        return None;
    }
    Some(ApplicationData::MarineTrafficSignal(MarineTrafficSignal {
        linkage: rd.u(b, 10),
        station: rd.string(b + 10, 120),
        lon: rd.i(b + 130, 25),
        lat: rd.i(b + 155, 24),
        status: rd.u(b + 179, 2),
        signal: rd.u(b + 181, 5),
        hour: rd.u(b + 186, 5),
        minute: rd.u(b + 191, 6),
        nextsignal: rd.u(b + 197, 5),
    }))
}

fn inland_static_voyage(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 104 {
        return None;
    }
    Some(ApplicationData::InlandStaticVoyage(InlandStaticVoyage {
        vin: rd.string(b, 48),
        length: rd.u(b + 48, 13),
        beam: rd.u(b + 61, 10),
        shiptype: rd.u(b + 71, 14),
        hazard: rd.u(b + 85, 3),
        draught: rd.u(b + 88, 11),
        loaded: rd.u(b + 99, 2),
        speed_q: rd.flag(b + 101),
        course_q: rd.flag(b + 102),
        heading_q: rd.flag(b + 103),
    }))
}

fn inland_eta(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 155 {
        return None;
    }
    Some(ApplicationData::InlandEta(InlandEta {
        country: rd.string(b, 12),
        locode: rd.string(b + 12, 18),
        section: rd.string(b + 30, 30),
        terminal: rd.string(b + 60, 30),
        hectometre: rd.string(b + 90, 30),
        month: rd.u(b + 120, 4),
        day: rd.u(b + 124, 5),
        hour: rd.u(b + 129, 5),
        minute: rd.u(b + 134, 6),
        tugs: rd.u(b + 140, 3),
        airdraught: rd.u(b + 143, 12),
    }))
}

fn inland_rta(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 142 {
        return None;
    }
    Some(ApplicationData::InlandRta(InlandRta {
        country: rd.string(b, 12),
        locode: rd.string(b + 12, 18),
        section: rd.string(b + 30, 30),
        terminal: rd.string(b + 60, 30),
        hectometre: rd.string(b + 90, 30),
        month: rd.u(b + 120, 4),
        day: rd.u(b + 124, 5),
        hour: rd.u(b + 129, 5),
        minute: rd.u(b + 134, 6),
        status: rd.u(b + 140, 2),
    }))
}

fn inland_persons(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 29 {
        return None;
    }
    Some(ApplicationData::InlandPersons {
        crew: rd.u(b, 8),
        passengers: rd.u(b + 8, 13),
        personnel: rd.u(b + 21, 8),
    })
}

fn emma_warning(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 194 {
        return None;
    }
    Some(ApplicationData::EmmaWarning(EmmaWarning {
        start_year: rd.u(b, 8),
        start_month: rd.u(b + 8, 4),
        start_day: rd.u(b + 12, 5),
        start_hour: rd.u(b + 17, 5),
        start_minute: rd.u(b + 22, 6),
        end_year: rd.u(b + 28, 8),
        end_month: rd.u(b + 36, 4),
        end_day: rd.u(b + 40, 5),
        end_hour: rd.u(b + 45, 5),
        end_minute: rd.u(b + 50, 6),
        lon1: rd.i(b + 56, 28),
        lat1: rd.i(b + 84, 27),
        lon2: rd.i(b + 111, 28),
        lat2: rd.i(b + 139, 27),
        wtype: rd.u(b + 166, 4),
        min: rd.i(b + 170, 9),
        max: rd.i(b + 179, 9),
        class: rd.u(b + 188, 2),
        wind: rd.u(b + 190, 4),
    }))
}

const GAUGE_BITS: usize = 25;
const GAUGES_MAX: usize = 4;

fn water_levels(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 12 + GAUGE_BITS {
        return None;
    }
    let country = rd.string(b, 12);
    let mut gauges = Vec::new();
    let mut cursor = b + 12;
    while cursor + GAUGE_BITS <= rd.bit_len() && gauges.len() < GAUGES_MAX {
        gauges.push(Gauge {
            id: rd.u(cursor, 11),
            level: rd.i(cursor + 11, 14),
        });
        cursor += GAUGE_BITS;
    }
    Some(ApplicationData::WaterLevels { country, gauges })
}

fn signal_status(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 74 {
        return None;
    }
    Some(ApplicationData::SignalStatus {
        lon: rd.i(b, 28),
        lat: rd.i(b + 28, 27),
        form: rd.u(b + 55, 4),
        facing: rd.u(b + 59, 9),
        direction: rd.u(b + 68, 3),
        status: rd.u(b + 71, 3),
    })
}

fn aton_monitoring(rd: &BitReader<'_>, b: usize) -> Option<ApplicationData> {
    if remaining(rd, b) < 44 {
        return None;
    }
    Some(ApplicationData::AtonMonitoring(AtonMonitoring {
        ana_int: rd.u(b, 10),
        ana_ext1: rd.u(b + 10, 10),
        ana_ext2: rd.u(b + 20, 10),
        racon: rd.u(b + 30, 2),
        light: rd.u(b + 32, 2),
        alarm: rd.flag(b + 34),
        stat_ext: rd.u(b + 35, 8),
        off_position: rd.flag(b + 43),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sixbit::BitBuffer;
    use crate::testutil::BitPacker;

    fn reader_for(packer: &BitPacker) -> BitBuffer {
        let (payload, pad) = packer.armor();
        let mut buf = BitBuffer::new();
        buf.push_armored(&payload).unwrap();
        buf.trim_pad(pad);
        buf
    }

    #[test]
    fn text_broadcast_decodes() {
        let mut packer = BitPacker::new();
        packer.push(17, 10); // linkage
        packer.push_str6("SAILING SOON", 12);
        let buf = reader_for(&packer);

        let decoded = ApplicationData::decode(8, 1, 29, &buf.reader(), 0);
        assert_eq!(
            decoded,
            ApplicationData::Text {
                linkage: 17,
                text: "SAILING SOON".to_owned()
            }
        );
    }

    #[test]
    fn berthing_data_decodes() {
        let mut packer = BitPacker::new();
        packer.push(42, 10); // linkage
        packer.push(180, 9); // berth_length
        packer.push(85, 8); // berth_depth, 8.5 m
        packer.push(2, 3); // position
        packer.push(6, 4); // month
        packer.push(14, 5); // day
        packer.push(20, 5); // hour
        packer.push(30, 6); // minute
        packer.push(1, 1); // availability
        packer.push(1, 2); // agent
        packer.push(2, 2); // fuel
        for _ in 0..24 {
            packer.push(0, 2); // remaining services
        }
        packer.push_str6("PIER 7", 20);
        packer.push(-73500i64 as u64 & 0x1ff_ffff, 25); // berth_lon
        packer.push(22950, 24); // berth_lat
        let buf = reader_for(&packer);

        let decoded = ApplicationData::decode(6, 1, 20, &buf.reader(), 0);
        let ApplicationData::BerthingData(bd) = decoded else {
            panic!("expected berthing data, got {decoded:?}");
        };
        assert_eq!(bd.linkage, 42);
        assert_eq!(bd.berth_length, 180);
        assert_eq!(bd.berth_depth, 85);
        assert_eq!(bd.position, 2);
        assert_eq!((bd.month, bd.day, bd.hour, bd.minute), (6, 14, 20, 30));
        assert_eq!(bd.availability, 1);
        assert_eq!(bd.agent, 1);
        assert_eq!(bd.fuel, 2);
        assert_eq!(bd.chandler, 0);
        assert_eq!(bd.berth_name, "PIER 7");
        assert_eq!(bd.berth_lon, -73500);
        assert_eq!(bd.berth_lat, 22950);
    }

    #[test]
    fn berthing_data_too_short_is_opaque() {
        let mut packer = BitPacker::new();
        packer.push(42, 10);
        packer.push(0, 60);
        let buf = reader_for(&packer);

        let decoded = ApplicationData::decode(6, 1, 20, &buf.reader(), 0);
        assert!(matches!(decoded, ApplicationData::Opaque(_)));
    }

    #[test]
    fn water_levels_bounded_by_payload() {
        let mut packer = BitPacker::new();
        packer.push_str6("DE", 2);
        // two gauges, the second with a negative level
        packer.push(42, 11);
        packer.push(250, 14);
        packer.push(43, 11);
        packer.push((-3i64 as u64) & 0x3fff, 14);
        let buf = reader_for(&packer);

        match ApplicationData::decode(8, 200, 24, &buf.reader(), 0) {
            ApplicationData::WaterLevels { country, gauges } => {
                assert_eq!(country, "DE");
                assert_eq!(
                    gauges,
                    vec![Gauge { id: 42, level: 250 }, Gauge { id: 43, level: -3 }]
                );
            }
            other => panic!("unexpected decode: {other:?}"),
        }
    }

    #[test]
    fn unknown_pair_degrades_to_opaque() {
        let mut packer = BitPacker::new();
        packer.push(0xDEAD, 16);
        let buf = reader_for(&packer);

        match ApplicationData::decode(8, 366, 5, &buf.reader(), 0) {
            ApplicationData::Opaque(blob) => {
                assert_eq!(blob.bit_count, 16);
                assert_eq!(blob.bytes, vec![0xde, 0xad]);
            }
            other => panic!("unexpected decode: {other:?}"),
        }
    }

    #[test]
    fn truncated_structured_payload_degrades_to_opaque() {
        let mut packer = BitPacker::new();
        packer.push(1, 10); // far short of a met/hydro report
        let buf = reader_for(&packer);

        assert!(matches!(
            ApplicationData::decode(8, 1, 31, &buf.reader(), 0),
            ApplicationData::Opaque(_)
        ));
    }

    #[test]
    fn inland_persons_decodes() {
        let mut packer = BitPacker::new();
        packer.push(8, 8);
        packer.push(120, 13);
        packer.push(2, 8);
        let buf = reader_for(&packer);

        assert_eq!(
            ApplicationData::decode(6, 200, 55, &buf.reader(), 0),
            ApplicationData::InlandPersons {
                crew: 8,
                passengers: 120,
                personnel: 2
            }
        );
    }
}
