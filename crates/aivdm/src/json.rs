//! JSON report rendering
//!
//! Each decoded message becomes one JSON object terminated by
//! `\r\n`. Raw mode emits wire values untouched; scaled mode divides
//! out the AIS fixed-point units. Coded fields carry `*_text` legends
//! in both modes.

use std::fmt::Write;

use crate::appdata::*;
use crate::legends;
use crate::legends::{EpfdSource, NavigationStatus};
use crate::message::*;

/// 1/10000 arc-minute positions (most position reports)
const LATLON_DIV: f64 = 600_000.0;
/// 1/1000 arc-minute positions (IMO 289 regional formats, type 27)
const LATLON3_DIV: f64 = 60_000.0;
/// 1/10 arc-minute positions (type 17, types 22/23 area corners)
const COARSE_LATLON_DIV: f64 = 600.0;

/// Met/hydro air temperature offset, 1/10 degree C
const AIRTEMP_OFFSET: f64 = 600.0;
/// Met/hydro dew point offset, 1/10 degree C
const DEWPOINT_OFFSET: f64 = 200.0;
/// Met/hydro barometric pressure offset, hPa
const PRESSURE_OFFSET: u32 = 799;
/// Met/hydro water level offset, 1/10 metre
const WATERLEVEL_OFFSET: f64 = 100.0;
/// Met/hydro water temperature offset, 1/10 degree C
const WATERTEMP_OFFSET: f64 = 100.0;

macro_rules! put {
    ($w:expr, $($arg:tt)*) => {
        $w.put(format_args!($($arg)*))
    };
}

/// Accumulates one report
///
/// Render paths append fields with a trailing `,`; the separator is
/// trimmed when a bracket closes, so optional fields need no
/// look-ahead.
struct JsonWriter {
    buf: String,
}

impl JsonWriter {
    fn new() -> Self {
        JsonWriter {
            buf: String::with_capacity(256),
        }
    }

    fn put(&mut self, args: std::fmt::Arguments<'_>) {
        // formatting into a String cannot fail
        let _ = self.buf.write_fmt(args);
    }

    fn trim_separator(&mut self) {
        if self.buf.ends_with(',') {
            self.buf.pop();
        }
    }

    fn finish(mut self) -> String {
        self.trim_separator();
        self.buf.push_str("}\r\n");
        self.buf
    }
}

/// Escape text for embedding in a JSON string
fn stringify(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x20 || !ch.is_ascii() => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            ch => out.push(ch),
        }
    }
    out
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 * bytes.len());
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

fn deg4(value: i32) -> String {
    format!("{:.4}", f64::from(value) / LATLON_DIV)
}

fn deg3(value: i32) -> String {
    format!("{:.3}", f64::from(value) / LATLON3_DIV)
}

fn deg1(value: i32) -> String {
    format!("{:.1}", f64::from(value) / LATLON3_DIV)
}

fn deg1_coarse(value: i32) -> String {
    format!("{:.1}", f64::from(value) / COARSE_LATLON_DIV)
}

fn tenth(value: u32) -> String {
    format!("{:.1}", f64::from(value) / 10.0)
}

fn tenth_i(value: i32) -> String {
    format!("{:.1}", f64::from(value) / 10.0)
}

fn turn_legend(turn: i32) -> String {
    match turn {
        TURN_NOT_AVAILABLE => "\"nan\"".to_owned(),
        TURN_FAST_LEFT => "\"fastleft\"".to_owned(),
        TURN_FAST_RIGHT => "\"fastright\"".to_owned(),
        turn => {
            let rot = f64::from(turn) / 4.733;
            format!("{:.0}", rot * rot)
        }
    }
}

fn speed_legend(speed: u32) -> String {
    match speed {
        SPEED_NOT_AVAILABLE => "\"nan\"".to_owned(),
        SPEED_FAST_MOVER => "\"fast\"".to_owned(),
        speed => tenth(speed),
    }
}

fn sar_speed_legend(speed: u32) -> String {
    match speed {
        SPEED_NOT_AVAILABLE => "\"nan\"".to_owned(),
        SPEED_FAST_MOVER => "\"fast\"".to_owned(),
        speed => speed.to_string(),
    }
}

fn alt_legend(alt: u32) -> String {
    match alt {
        ALT_NOT_AVAILABLE => "\"nan\"".to_owned(),
        ALT_HIGH => "\"high\"".to_owned(),
        alt => alt.to_string(),
    }
}

/// `MM-DDTHH:MMZ` ETA-style token
fn eta_token(month: u32, day: u32, hour: u32, minute: u32) -> String {
    format!("{month:02}-{day:02}T{hour:02}:{minute:02}Z")
}

/// Render one message as a JSON record
///
/// `device` is an optional source label included verbatim (escaped)
/// in every record.
pub fn render_json(msg: &AisMessage, device: Option<&str>, scaled: bool) -> String {
    let mut w = JsonWriter::new();
    put!(w, "{{\"class\":\"AIS\",");
    if let Some(device) = device.filter(|label| !label.is_empty()) {
        put!(w, "\"device\":\"{}\",", stringify(device));
    }
    put!(
        w,
        "\"type\":{},\"repeat\":{},\"mmsi\":{},\"scaled\":{},",
        msg.msgtype,
        msg.repeat,
        msg.mmsi,
        scaled
    );

    match &msg.data {
        MessageData::Position(p) => position(&mut w, p, scaled),
        MessageData::BaseStation(b) => base_station(&mut w, b, scaled),
        MessageData::StaticVoyage(sv) => static_voyage(&mut w, sv, scaled),
        MessageData::AddressedBinary(ab) => {
            put!(
                w,
                "\"seqno\":{},\"dest_mmsi\":{},\"retransmit\":{},\"dac\":{},\"fid\":{},",
                ab.seqno,
                ab.dest_mmsi,
                ab.retransmit,
                ab.dac,
                ab.fid
            );
            application(&mut w, &ab.app, scaled);
        }
        MessageData::Acknowledge {
            mmsi1,
            mmsi2,
            mmsi3,
            mmsi4,
        } => {
            put!(
                w,
                "\"mmsi1\":{mmsi1},\"mmsi2\":{mmsi2},\"mmsi3\":{mmsi3},\"mmsi4\":{mmsi4},"
            );
        }
        MessageData::BroadcastBinary { dac, fid, app } => {
            put!(w, "\"dac\":{dac},\"fid\":{fid},");
            application(&mut w, app, scaled);
        }
        MessageData::SarAircraft(sar) => sar_aircraft(&mut w, sar, scaled),
        MessageData::UtcInquiry { dest_mmsi } => {
            put!(w, "\"dest_mmsi\":{dest_mmsi},");
        }
        MessageData::SafetyAddressed {
            seqno,
            dest_mmsi,
            retransmit,
            text,
        } => {
            put!(
                w,
                "\"seqno\":{},\"dest_mmsi\":{},\"retransmit\":{},\"text\":\"{}\",",
                seqno,
                dest_mmsi,
                retransmit,
                stringify(text)
            );
        }
        MessageData::SafetyBroadcast { text } => {
            put!(w, "\"text\":\"{}\",", stringify(text));
        }
        MessageData::Interrogation(inter) => {
            put!(
                w,
                "\"mmsi1\":{},\"type1_1\":{},\"offset1_1\":{},\"type1_2\":{},\"offset1_2\":{},\"mmsi2\":{},\"type2_1\":{},\"offset2_1\":{},",
                inter.mmsi1,
                inter.type1_1,
                inter.offset1_1,
                inter.type1_2,
                inter.offset1_2,
                inter.mmsi2,
                inter.type2_1,
                inter.offset2_1
            );
        }
        MessageData::Assignment(cmd) => {
            put!(
                w,
                "\"mmsi1\":{},\"offset1\":{},\"increment1\":{},\"mmsi2\":{},\"offset2\":{},\"increment2\":{},",
                cmd.mmsi1,
                cmd.offset1,
                cmd.increment1,
                cmd.mmsi2,
                cmd.offset2,
                cmd.increment2
            );
        }
        MessageData::GnssBroadcast { lon, lat, data } => {
            if scaled {
                put!(
                    w,
                    "\"lon\":{},\"lat\":{},",
                    deg1_coarse(*lon),
                    deg1_coarse(*lat)
                );
            } else {
                put!(w, "\"lon\":{lon},\"lat\":{lat},");
            }
            opaque(&mut w, data);
        }
        MessageData::StandardClassB(b) => standard_class_b(&mut w, b, scaled),
        MessageData::ExtendedClassB(b) => extended_class_b(&mut w, b, scaled),
        MessageData::LinkManagement { reservations } => {
            for (n, slot) in reservations.iter().enumerate() {
                let n = n + 1;
                put!(
                    w,
                    "\"offset{}\":{},\"number{}\":{},\"timeout{}\":{},\"increment{}\":{},",
                    n,
                    slot.offset,
                    n,
                    slot.number,
                    n,
                    slot.timeout,
                    n,
                    slot.increment
                );
            }
        }
        MessageData::AidToNavigation(aton) => aid_to_navigation(&mut w, aton, scaled),
        MessageData::ChannelManagement(cm) => channel_management(&mut w, cm, scaled),
        MessageData::GroupAssignment(ga) => group_assignment(&mut w, ga, scaled),
        MessageData::StaticDataReport(report) => static_data_report(&mut w, report),
        MessageData::SingleSlotBinary(slot) => {
            slot_binary(&mut w, slot);
        }
        MessageData::MultiSlotBinary { payload, radio } => {
            slot_binary(&mut w, payload);
            put!(w, "\"radio\":{radio},");
        }
        MessageData::LongRange(lr) => long_range(&mut w, lr, scaled),
    }

    w.finish()
}

fn position(w: &mut JsonWriter, p: &PositionReport, scaled: bool) {
    if scaled {
        put!(
            w,
            "\"status\":{},\"status_text\":\"{}\",\"turn\":{},\"speed\":{},\"accuracy\":{},\"lon\":{},\"lat\":{},\"course\":{},\"heading\":{},\"second\":{},\"maneuver\":{},\"raim\":{},\"radio\":{},",
            p.status,
            NavigationStatus::display(p.status),
            turn_legend(p.turn),
            speed_legend(p.speed),
            p.accuracy,
            deg4(p.lon),
            deg4(p.lat),
            tenth(p.course),
            p.heading,
            p.second,
            p.maneuver,
            p.raim,
            p.radio
        );
    } else {
        put!(
            w,
            "\"status\":{},\"status_text\":\"{}\",\"turn\":{},\"speed\":{},\"accuracy\":{},\"lon\":{},\"lat\":{},\"course\":{},\"heading\":{},\"second\":{},\"maneuver\":{},\"raim\":{},\"radio\":{},",
            p.status,
            NavigationStatus::display(p.status),
            p.turn,
            p.speed,
            p.accuracy,
            p.lon,
            p.lat,
            p.course,
            p.heading,
            p.second,
            p.maneuver,
            p.raim,
            p.radio
        );
    }
}

fn base_station(w: &mut JsonWriter, b: &BaseStationReport, scaled: bool) {
    put!(
        w,
        "\"timestamp\":\"{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z\",\"accuracy\":{},",
        b.year,
        b.month,
        b.day,
        b.hour,
        b.minute,
        b.second,
        b.accuracy
    );
    if scaled {
        put!(w, "\"lon\":{},\"lat\":{},", deg4(b.lon), deg4(b.lat));
    } else {
        put!(w, "\"lon\":{},\"lat\":{},", b.lon, b.lat);
    }
    put!(
        w,
        "\"epfd\":{},\"epfd_text\":\"{}\",",
        b.epfd,
        EpfdSource::display(b.epfd)
    );
    put!(w, "\"raim\":{},\"radio\":{},", b.raim, b.radio);
}

fn static_voyage(w: &mut JsonWriter, sv: &StaticVoyageData, scaled: bool) {
    put!(
        w,
        "\"imo\":{},\"ais_version\":{},\"callsign\":\"{}\",\"shipname\":\"{}\",",
        sv.imo,
        sv.ais_version,
        stringify(&sv.callsign),
        stringify(&sv.shipname)
    );
    put!(
        w,
        "\"shiptype\":{},\"shiptype_text\":\"{}\",",
        sv.shiptype,
        legends::ship_type(sv.shiptype)
    );
    dimensions(w, &sv.dim);
    put!(
        w,
        "\"epfd\":{},\"epfd_text\":\"{}\",",
        sv.epfd,
        EpfdSource::display(sv.epfd)
    );
    put!(
        w,
        "\"eta\":\"{}\",",
        eta_token(sv.month, sv.day, sv.hour, sv.minute)
    );
    if scaled {
        put!(w, "\"draught\":{},", tenth(sv.draught));
    } else {
        put!(w, "\"draught\":{},", sv.draught);
    }
    put!(
        w,
        "\"destination\":\"{}\",\"dte\":{},",
        stringify(&sv.destination),
        sv.dte
    );
}

fn dimensions(w: &mut JsonWriter, dim: &Dimensions) {
    put!(
        w,
        "\"to_bow\":{},\"to_stern\":{},\"to_port\":{},\"to_starboard\":{},",
        dim.to_bow,
        dim.to_stern,
        dim.to_port,
        dim.to_starboard
    );
}

fn sar_aircraft(w: &mut JsonWriter, sar: &SarAircraftReport, scaled: bool) {
    if scaled {
        put!(
            w,
            "\"alt\":{},\"speed\":{},\"accuracy\":{},\"lon\":{},\"lat\":{},\"course\":{},",
            alt_legend(sar.alt),
            sar_speed_legend(sar.speed),
            sar.accuracy,
            deg4(sar.lon),
            deg4(sar.lat),
            tenth(sar.course)
        );
    } else {
        put!(
            w,
            "\"alt\":{},\"speed\":{},\"accuracy\":{},\"lon\":{},\"lat\":{},\"course\":{},",
            sar.alt,
            sar.speed,
            sar.accuracy,
            sar.lon,
            sar.lat,
            sar.course
        );
    }
    put!(
        w,
        "\"second\":{},\"regional\":{},\"dte\":{},\"raim\":{},\"radio\":{},",
        sar.second,
        sar.regional,
        sar.dte,
        sar.raim,
        sar.radio
    );
}

fn standard_class_b(w: &mut JsonWriter, b: &StandardClassB, scaled: bool) {
    put!(w, "\"reserved\":{},", b.reserved);
    if scaled {
        put!(
            w,
            "\"speed\":{},\"accuracy\":{},\"lon\":{},\"lat\":{},\"course\":{},",
            speed_legend(b.speed),
            b.accuracy,
            deg4(b.lon),
            deg4(b.lat),
            tenth(b.course)
        );
    } else {
        put!(
            w,
            "\"speed\":{},\"accuracy\":{},\"lon\":{},\"lat\":{},\"course\":{},",
            b.speed,
            b.accuracy,
            b.lon,
            b.lat,
            b.course
        );
    }
    put!(
        w,
        "\"heading\":{},\"second\":{},\"regional\":{},\"cs\":{},\"display\":{},\"dsc\":{},\"band\":{},\"msg22\":{},\"assigned\":{},\"raim\":{},\"radio\":{},",
        b.heading,
        b.second,
        b.regional,
        b.cs,
        b.display,
        b.dsc,
        b.band,
        b.msg22,
        b.assigned,
        b.raim,
        b.radio
    );
}

fn extended_class_b(w: &mut JsonWriter, b: &ExtendedClassB, scaled: bool) {
    put!(w, "\"reserved\":{},", b.reserved);
    if scaled {
        put!(
            w,
            "\"speed\":{},\"accuracy\":{},\"lon\":{},\"lat\":{},\"course\":{},",
            speed_legend(b.speed),
            b.accuracy,
            deg4(b.lon),
            deg4(b.lat),
            tenth(b.course)
        );
    } else {
        put!(
            w,
            "\"speed\":{},\"accuracy\":{},\"lon\":{},\"lat\":{},\"course\":{},",
            b.speed,
            b.accuracy,
            b.lon,
            b.lat,
            b.course
        );
    }
    put!(
        w,
        "\"heading\":{},\"second\":{},\"regional\":{},\"shipname\":\"{}\",",
        b.heading,
        b.second,
        b.regional,
        stringify(&b.shipname)
    );
    put!(
        w,
        "\"shiptype\":{},\"shiptype_text\":\"{}\",",
        b.shiptype,
        legends::ship_type(b.shiptype)
    );
    dimensions(w, &b.dim);
    put!(
        w,
        "\"epfd\":{},\"epfd_text\":\"{}\",",
        b.epfd,
        EpfdSource::display(b.epfd)
    );
    put!(
        w,
        "\"raim\":{},\"dte\":{},\"assigned\":{},",
        b.raim,
        b.dte,
        b.assigned
    );
}

fn aid_to_navigation(w: &mut JsonWriter, aton: &AidToNavigation, scaled: bool) {
    put!(
        w,
        "\"aid_type\":{},\"aid_type_text\":\"{}\",",
        aton.aid_type,
        legends::navaid_type(aton.aid_type)
    );
    put!(
        w,
        "\"name\":\"{}\",\"accuracy\":{},",
        stringify(&aton.name),
        aton.accuracy
    );
    if scaled {
        put!(w, "\"lon\":{},\"lat\":{},", deg4(aton.lon), deg4(aton.lat));
    } else {
        put!(w, "\"lon\":{},\"lat\":{},", aton.lon, aton.lat);
    }
    dimensions(w, &aton.dim);
    put!(
        w,
        "\"epfd\":{},\"epfd_text\":\"{}\",",
        aton.epfd,
        EpfdSource::display(aton.epfd)
    );
    put!(
        w,
        "\"second\":{},\"regional\":{},\"off_position\":{},\"raim\":{},\"virtual_aid\":{},\"assigned\":{},",
        aton.second,
        aton.regional,
        aton.off_position,
        aton.raim,
        aton.virtual_aid,
        aton.assigned
    );
}

fn channel_management(w: &mut JsonWriter, cm: &ChannelManagement, scaled: bool) {
    put!(
        w,
        "\"channel_a\":{},\"channel_b\":{},\"txrx\":{},\"power\":{},",
        cm.channel_a,
        cm.channel_b,
        cm.txrx,
        cm.power
    );
    match cm.target {
        ChannelTarget::Addressed { dest1, dest2 } => {
            put!(w, "\"dest1\":{dest1},\"dest2\":{dest2},");
        }
        ChannelTarget::Area {
            ne_lon,
            ne_lat,
            sw_lon,
            sw_lat,
        } => {
            if scaled {
                put!(
                    w,
                    "\"ne_lon\":{},\"ne_lat\":{},\"sw_lon\":{},\"sw_lat\":{},",
                    deg1_coarse(ne_lon),
                    deg1_coarse(ne_lat),
                    deg1_coarse(sw_lon),
                    deg1_coarse(sw_lat)
                );
            } else {
                put!(
                    w,
                    "\"ne_lon\":{ne_lon},\"ne_lat\":{ne_lat},\"sw_lon\":{sw_lon},\"sw_lat\":{sw_lat},"
                );
            }
        }
    }
    put!(
        w,
        "\"addressed\":{},\"band_a\":{},\"band_b\":{},\"zonesize\":{},",
        cm.addressed,
        cm.band_a,
        cm.band_b,
        cm.zonesize
    );
}

fn group_assignment(w: &mut JsonWriter, ga: &GroupAssignment, scaled: bool) {
    if scaled {
        put!(
            w,
            "\"ne_lon\":{},\"ne_lat\":{},\"sw_lon\":{},\"sw_lat\":{},",
            deg1_coarse(ga.ne_lon),
            deg1_coarse(ga.ne_lat),
            deg1_coarse(ga.sw_lon),
            deg1_coarse(ga.sw_lat)
        );
    } else {
        put!(
            w,
            "\"ne_lon\":{},\"ne_lat\":{},\"sw_lon\":{},\"sw_lat\":{},",
            ga.ne_lon,
            ga.ne_lat,
            ga.sw_lon,
            ga.sw_lat
        );
    }
    put!(
        w,
        "\"stationtype\":{},\"stationtype_text\":\"{}\",",
        ga.stationtype,
        legends::station_type(ga.stationtype)
    );
    put!(
        w,
        "\"shiptype\":{},\"shiptype_text\":\"{}\",",
        ga.shiptype,
        legends::ship_type(ga.shiptype)
    );
    put!(
        w,
        "\"txrx\":{},\"interval\":{},\"quiet\":{},",
        ga.txrx,
        ga.interval,
        ga.quiet
    );
}

fn static_data_report(w: &mut JsonWriter, report: &StaticDataReport) {
    match report {
        StaticDataReport::PartA { shipname } => {
            put!(
                w,
                "\"part\":\"A\",\"shipname\":\"{}\",",
                stringify(shipname)
            );
        }
        StaticDataReport::PartB(statics) => {
            put!(w, "\"part\":\"B\",");
            class_b_static(w, statics);
        }
        StaticDataReport::Merged { shipname, statics } => {
            put!(w, "\"shipname\":\"{}\",", stringify(shipname));
            class_b_static(w, statics);
        }
    }
}

fn class_b_static(w: &mut JsonWriter, statics: &ClassBStatic) {
    put!(
        w,
        "\"shiptype\":{},\"shiptype_text\":\"{}\",",
        statics.shiptype,
        legends::ship_type(statics.shiptype)
    );
    put!(
        w,
        "\"vendorid\":\"{}\",\"model\":{},\"serial\":{},\"callsign\":\"{}\",",
        stringify(&statics.vendorid),
        statics.model,
        statics.serial,
        stringify(&statics.callsign)
    );
    match statics.hull {
        HullReference::Mothership(mmsi) => {
            put!(w, "\"mothership_mmsi\":{mmsi},");
        }
        HullReference::Dimensions(ref dim) => dimensions(w, dim),
    }
}

fn slot_binary(w: &mut JsonWriter, slot: &SlotBinary) {
    put!(
        w,
        "\"addressed\":{},\"structured\":{},",
        slot.addressed,
        slot.structured
    );
    if let Some(dest_mmsi) = slot.dest_mmsi {
        put!(w, "\"dest_mmsi\":{dest_mmsi},");
    }
    if let Some(app_id) = slot.app_id {
        put!(w, "\"app_id\":{app_id},");
    }
    opaque(w, &slot.data);
}

fn long_range(w: &mut JsonWriter, lr: &LongRangeReport, scaled: bool) {
    put!(
        w,
        "\"accuracy\":{},\"raim\":{},\"status\":{},\"status_text\":\"{}\",",
        lr.accuracy,
        lr.raim,
        lr.status,
        NavigationStatus::display(lr.status)
    );
    if scaled {
        put!(w, "\"lon\":{},\"lat\":{},", deg1(lr.lon), deg1(lr.lat));
    } else {
        put!(w, "\"lon\":{},\"lat\":{},", lr.lon, lr.lat);
    }
    put!(
        w,
        "\"speed\":{},\"course\":{},\"gnss\":{},",
        lr.speed,
        lr.course,
        lr.gnss
    );
}

fn opaque(w: &mut JsonWriter, blob: &OpaqueBits) {
    put!(w, "\"data\":\"{}:{}\",", blob.bit_count, hex(&blob.bytes));
}

fn application(w: &mut JsonWriter, app: &ApplicationData, scaled: bool) {
    match app {
        ApplicationData::DangerousCargo(dc) => {
            put!(
                w,
                "\"lastport\":\"{}\",\"lmonth\":{},\"lday\":{},\"lhour\":{},\"lminute\":{},",
                stringify(&dc.lastport),
                dc.lmonth,
                dc.lday,
                dc.lhour,
                dc.lminute
            );
            put!(
                w,
                "\"nextport\":\"{}\",\"nmonth\":{},\"nday\":{},\"nhour\":{},\"nminute\":{},",
                stringify(&dc.nextport),
                dc.nmonth,
                dc.nday,
                dc.nhour,
                dc.nminute
            );
            put!(
                w,
                "\"dangerous\":\"{}\",\"imdcat\":\"{}\",\"unid\":{},\"amount\":{},\"unit\":{},",
                stringify(&dc.dangerous),
                stringify(&dc.imdcat),
                dc.unid,
                dc.amount,
                dc.unit
            );
        }
        ApplicationData::AirDraught { airdraught } => {
            put!(w, "\"airdraught\":{airdraught},");
        }
        ApplicationData::PersonsOnBoard { persons } => {
            put!(w, "\"persons\":{persons},");
        }
        ApplicationData::ClearanceTime(ct) => {
            put!(
                w,
                "\"linkage\":{},\"month\":{},\"day\":{},\"hour\":{},\"minute\":{},\"portname\":\"{}\",\"destination\":\"{}\",",
                ct.linkage,
                ct.month,
                ct.day,
                ct.hour,
                ct.minute,
                stringify(&ct.portname),
                stringify(&ct.destination)
            );
            if scaled {
                put!(w, "\"lon\":{},\"lat\":{},", deg3(ct.lon), deg3(ct.lat));
            } else {
                put!(w, "\"lon\":{},\"lat\":{},", ct.lon, ct.lat);
            }
        }
        ApplicationData::BerthingData(bd) => {
            put!(
                w,
                "\"linkage\":{},\"berth_length\":{},\"position\":{},\"position_text\":\"{}\",",
                bd.linkage,
                bd.berth_length,
                bd.position,
                legends::mooring_position(bd.position)
            );
            put!(
                w,
                "\"arrival\":\"{}-{}T{}:{}\",\"availability\":{},",
                bd.month,
                bd.day,
                bd.hour,
                bd.minute,
                bd.availability
            );
            put!(
                w,
                "\"agent\":{},\"fuel\":{},\"chandler\":{},\"stevedore\":{},\"electrical\":{},\"water\":{},\"customs\":{},",
                bd.agent,
                bd.fuel,
                bd.chandler,
                bd.stevedore,
                bd.electrical,
                bd.water,
                bd.customs
            );
            put!(
                w,
                "\"cartage\":{},\"crane\":{},\"lift\":{},\"medical\":{},\"navrepair\":{},\"provisions\":{},",
                bd.cartage,
                bd.crane,
                bd.lift,
                bd.medical,
                bd.navrepair,
                bd.provisions
            );
            put!(
                w,
                "\"shiprepair\":{},\"surveyor\":{},\"steam\":{},\"tugs\":{},\"solidwaste\":{},\"liquidwaste\":{},",
                bd.shiprepair,
                bd.surveyor,
                bd.steam,
                bd.tugs,
                bd.solidwaste,
                bd.liquidwaste
            );
            put!(
                w,
                "\"hazardouswaste\":{},\"ballast\":{},\"additional\":{},\"regional1\":{},\"regional2\":{},\"future1\":{},\"future2\":{},",
                bd.hazardouswaste,
                bd.ballast,
                bd.additional,
                bd.regional1,
                bd.regional2,
                bd.future1,
                bd.future2
            );
            put!(w, "\"berth_name\":\"{}\",", stringify(&bd.berth_name));
            if scaled {
                put!(
                    w,
                    "\"berth_lon\":{},\"berth_lat\":{},\"berth_depth\":{},",
                    deg3(bd.berth_lon),
                    deg3(bd.berth_lat),
                    tenth(bd.berth_depth)
                );
            } else {
                put!(
                    w,
                    "\"berth_lon\":{},\"berth_lat\":{},\"berth_depth\":{},",
                    bd.berth_lon,
                    bd.berth_lat,
                    bd.berth_depth
                );
            }
        }
        ApplicationData::CargoList { unit, amount, cargos } => {
            put!(w, "\"unit\":{unit},\"amount\":{amount},\"cargos\":[");
            for cargo in cargos {
                put!(
                    w,
                    "{{\"code\":{},\"subtype\":{}}},",
                    cargo.code,
                    cargo.subtype
                );
            }
            w.trim_separator();
            put!(w, "],");
        }
        ApplicationData::RouteInfo(route) => {
            put!(w, "\"linkage\":{},\"sender\":{},", route.linkage, route.sender);
            put!(
                w,
                "\"rtype\":{},\"rtype_text\":\"{}\",",
                route.route_type,
                legends::route_type(route.route_type)
            );
            put!(
                w,
                "\"start\":\"{}\",\"duration\":{},\"waypoints\":[",
                eta_token(route.month, route.day, route.hour, route.minute),
                route.duration
            );
            for wp in &route.waypoints {
                if scaled {
                    put!(w, "{{\"lon\":{},\"lat\":{}}},", deg4(wp.lon), deg4(wp.lat));
                } else {
                    put!(w, "{{\"lon\":{},\"lat\":{}}},", wp.lon, wp.lat);
                }
            }
            w.trim_separator();
            put!(w, "],");
        }
        ApplicationData::Text { linkage, text } => {
            put!(w, "\"linkage\":{},\"text\":\"{}\",", linkage, stringify(text));
        }
        ApplicationData::TidalWindow { month, day, readings } => {
            put!(w, "\"month\":{month},\"day\":{day},\"tidals\":[");
            for tw in readings {
                if scaled {
                    put!(
                        w,
                        "{{\"lon\":{},\"lat\":{},\"from_hour\":{},\"from_min\":{},\"to_hour\":{},\"to_min\":{},\"cdir\":{},\"cspeed\":{}}},",
                        deg3(tw.lon),
                        deg3(tw.lat),
                        tw.from_hour,
                        tw.from_minute,
                        tw.to_hour,
                        tw.to_minute,
                        tw.cdir,
                        tenth(tw.cspeed)
                    );
                } else {
                    put!(
                        w,
                        "{{\"lon\":{},\"lat\":{},\"from_hour\":{},\"from_min\":{},\"to_hour\":{},\"to_min\":{},\"cdir\":{},\"cspeed\":{}}},",
                        tw.lon,
                        tw.lat,
                        tw.from_hour,
                        tw.from_minute,
                        tw.to_hour,
                        tw.to_minute,
                        tw.cdir,
                        tw.cspeed
                    );
                }
            }
            w.trim_separator();
            put!(w, "],");
        }
        ApplicationData::MetHydro236(mh) => met_hydro_236(w, mh, scaled),
        ApplicationData::MetHydro289(mh) => met_hydro_289(w, mh, scaled),
        ApplicationData::FairwayClosed(fc) => {
            put!(
                w,
                "\"reason\":\"{}\",\"closefrom\":\"{}\",\"closeto\":\"{}\",\"radius\":{},\"extunit\":{},",
                stringify(&fc.reason),
                stringify(&fc.closefrom),
                stringify(&fc.closeto),
                fc.radius,
                fc.extunit
            );
            put!(
                w,
                "\"from\":\"{}\",\"to\":\"{}\",",
                eta_token(fc.fmonth, fc.fday, fc.fhour, fc.fminute),
                eta_token(fc.tmonth, fc.tday, fc.thour, fc.tminute)
            );
        }
        ApplicationData::VtsTargets(targets) => {
            put!(w, "\"targets\":[");
            for target in targets {
                put!(
                    w,
                    "{{\"idtype\":{},\"idtype_text\":\"{}\",",
                    target.idtype,
                    legends::target_id_type(target.idtype)
                );
                match &target.id {
                    TargetId::Mmsi(id) | TargetId::Imo(id) => put!(w, "\"id\":{id},"),
                    TargetId::Callsign(id) | TargetId::Other(id) => {
                        put!(w, "\"id\":\"{}\",", stringify(id));
                    }
                }
                if scaled {
                    put!(
                        w,
                        "\"lat\":{},\"lon\":{},\"course\":{},",
                        deg3(target.lat),
                        deg3(target.lon),
                        target.course
                    );
                } else {
                    put!(
                        w,
                        "\"lat\":{},\"lon\":{},\"course\":{},",
                        target.lat,
                        target.lon,
                        target.course
                    );
                }
                put!(
                    w,
                    "\"second\":{},\"speed\":{}}},",
                    target.second,
                    target.speed
                );
            }
            w.trim_separator();
            put!(w, "],");
        }
        ApplicationData::MarineTrafficSignal(mts) => {
            put!(
                w,
                "\"linkage\":{},\"station\":\"{}\",",
                mts.linkage,
                stringify(&mts.station)
            );
            if scaled {
                put!(w, "\"lon\":{},\"lat\":{},", deg3(mts.lon), deg3(mts.lat));
            } else {
                put!(w, "\"lon\":{},\"lat\":{},", mts.lon, mts.lat);
            }
            put!(
                w,
                "\"status\":{},\"signal\":{},\"signal_text\":\"{}\",",
                mts.status,
                mts.signal,
                legends::traffic_signal(mts.signal)
            );
            put!(
                w,
                "\"hour\":{},\"minute\":{},\"nextsignal\":{},\"nextsignal_text\":\"{}\",",
                mts.hour,
                mts.minute,
                mts.nextsignal,
                legends::traffic_signal(mts.nextsignal)
            );
        }
        ApplicationData::InlandStaticVoyage(isv) => {
            put!(
                w,
                "\"vin\":\"{}\",\"length\":{},\"beam\":{},\"shiptype\":{},",
                stringify(&isv.vin),
                isv.length,
                isv.beam,
                isv.shiptype
            );
            put!(
                w,
                "\"shiptype_text\":\"{}\",\"hazard\":{},\"hazard_text\":\"{}\",",
                legends::inland_ship_type(isv.shiptype),
                isv.hazard,
                legends::inland_hazard(isv.hazard)
            );
            put!(
                w,
                "\"draught\":{},\"loaded\":{},\"loaded_text\":\"{}\",",
                isv.draught,
                isv.loaded,
                legends::load_status(isv.loaded)
            );
            put!(
                w,
                "\"speed_q\":{},\"course_q\":{},\"heading_q\":{},",
                isv.speed_q,
                isv.course_q,
                isv.heading_q
            );
        }
        ApplicationData::InlandEta(eta) => {
            put!(
                w,
                "\"country\":\"{}\",\"locode\":\"{}\",\"section\":\"{}\",\"terminal\":\"{}\",\"hectometre\":\"{}\",",
                stringify(&eta.country),
                stringify(&eta.locode),
                stringify(&eta.section),
                stringify(&eta.terminal),
                stringify(&eta.hectometre)
            );
            put!(
                w,
                "\"eta\":\"{}\",\"tugs\":{},\"airdraught\":{},",
                eta_token(eta.month, eta.day, eta.hour, eta.minute),
                eta.tugs,
                eta.airdraught
            );
        }
        ApplicationData::InlandRta(rta) => {
            put!(
                w,
                "\"country\":\"{}\",\"locode\":\"{}\",\"section\":\"{}\",\"terminal\":\"{}\",\"hectometre\":\"{}\",",
                stringify(&rta.country),
                stringify(&rta.locode),
                stringify(&rta.section),
                stringify(&rta.terminal),
                stringify(&rta.hectometre)
            );
            put!(
                w,
                "\"rta\":\"{}\",\"status\":{},\"status_text\":\"{}\",",
                eta_token(rta.month, rta.day, rta.hour, rta.minute),
                rta.status,
                legends::rta_status(rta.status)
            );
        }
        ApplicationData::InlandPersons {
            crew,
            passengers,
            personnel,
        } => {
            put!(
                w,
                "\"crew\":{crew},\"passengers\":{passengers},\"personnel\":{personnel},"
            );
        }
        ApplicationData::EmmaWarning(ew) => emma_warning(w, ew, scaled),
        ApplicationData::WaterLevels { country, gauges } => {
            put!(w, "\"country\":\"{}\",\"gauges\":[", stringify(country));
            for gauge in gauges {
                if scaled {
                    put!(
                        w,
                        "{{\"id\":{},\"level\":{}}},",
                        gauge.id,
                        format!("{:.2}", f64::from(gauge.level) / 100.0)
                    );
                } else {
                    put!(w, "{{\"id\":{},\"level\":{}}},", gauge.id, gauge.level);
                }
            }
            w.trim_separator();
            put!(w, "],");
        }
        ApplicationData::SignalStatus {
            lon,
            lat,
            form,
            facing,
            direction,
            status,
        } => {
            if scaled {
                put!(w, "\"lon\":{},\"lat\":{},", deg4(*lon), deg4(*lat));
            } else {
                put!(w, "\"lon\":{lon},\"lat\":{lat},");
            }
            put!(
                w,
                "\"form\":{},\"facing\":{},\"direction\":{},\"direction_text\":\"{}\",\"status\":{},\"status_text\":\"{}\",",
                form,
                facing,
                direction,
                legends::signal_direction(*direction),
                status,
                legends::signal_light_status(*status)
            );
        }
        ApplicationData::AtonMonitoring(aton) => {
            put!(
                w,
                "\"ana_int\":{},\"ana_ext1\":{},\"ana_ext2\":{},\"racon\":{},",
                aton.ana_int,
                aton.ana_ext1,
                aton.ana_ext2,
                aton.racon
            );
            put!(
                w,
                "\"racon_text\":\"{}\",\"light\":{},\"light_text\":\"{}\",",
                legends::racon_status(aton.racon),
                aton.light,
                legends::light_status(aton.light)
            );
            put!(
                w,
                "\"alarm\":{},\"stat_ext\":{},\"off_position\":{},",
                aton.alarm,
                aton.stat_ext,
                aton.off_position
            );
        }
        ApplicationData::Opaque(blob) => opaque(w, blob),
    }
}

fn met_hydro_236(w: &mut JsonWriter, mh: &MetHydro236, scaled: bool) {
    if scaled {
        put!(
            w,
            "\"lat\":{},\"lon\":{},\"day\":{},\"hour\":{},\"minute\":{},",
            deg3(mh.lat),
            deg3(mh.lon),
            mh.day,
            mh.hour,
            mh.minute
        );
        put!(
            w,
            "\"wspeed\":{},\"wgust\":{},\"wdir\":{},\"wgustdir\":{},",
            mh.wspeed,
            mh.wgust,
            mh.wdir,
            mh.wgustdir
        );
        put!(
            w,
            "\"airtemp\":{:.1},\"humidity\":{},\"dewpoint\":{:.1},\"pressure\":{},",
            (f64::from(mh.airtemp) - AIRTEMP_OFFSET) / 10.0,
            mh.humidity,
            (f64::from(mh.dewpoint) - DEWPOINT_OFFSET) / 10.0,
            mh.pressure + PRESSURE_OFFSET
        );
        put!(
            w,
            "\"pressuretend\":\"{}\",\"visibility\":{},",
            legends::trend(mh.pressuretend),
            tenth(mh.visibility)
        );
        put!(
            w,
            "\"waterlevel\":{:.1},\"leveltrend\":\"{}\",",
            (f64::from(mh.waterlevel) - WATERLEVEL_OFFSET) / 10.0,
            legends::trend(mh.leveltrend)
        );
        put!(
            w,
            "\"cspeed\":{},\"cdir\":{},\"cspeed2\":{},\"cdir2\":{},\"cdepth2\":{},\"cspeed3\":{},\"cdir3\":{},\"cdepth3\":{},",
            tenth(mh.cspeed),
            mh.cdir,
            tenth(mh.cspeed2),
            mh.cdir2,
            mh.cdepth2,
            tenth(mh.cspeed3),
            mh.cdir3,
            mh.cdepth3
        );
        put!(
            w,
            "\"waveheight\":{},\"waveperiod\":{},\"wavedir\":{},\"swellheight\":{},\"swellperiod\":{},\"swelldir\":{},\"seastate\":{},",
            tenth(mh.waveheight),
            mh.waveperiod,
            mh.wavedir,
            tenth(mh.swellheight),
            mh.swellperiod,
            mh.swelldir,
            mh.seastate
        );
        put!(
            w,
            "\"watertemp\":{:.1},\"preciptype\":{},\"preciptype_text\":\"{}\",\"salinity\":{},\"ice\":{},\"ice_text\":\"{}\",",
            (f64::from(mh.watertemp) - WATERTEMP_OFFSET) / 10.0,
            mh.preciptype,
            legends::precipitation(mh.preciptype),
            tenth(mh.salinity),
            mh.ice,
            legends::ice(mh.ice)
        );
    } else {
        put!(
            w,
            "\"lat\":{},\"lon\":{},\"day\":{},\"hour\":{},\"minute\":{},",
            mh.lat,
            mh.lon,
            mh.day,
            mh.hour,
            mh.minute
        );
        put!(
            w,
            "\"wspeed\":{},\"wgust\":{},\"wdir\":{},\"wgustdir\":{},",
            mh.wspeed,
            mh.wgust,
            mh.wdir,
            mh.wgustdir
        );
        put!(
            w,
            "\"airtemp\":{},\"humidity\":{},\"dewpoint\":{},\"pressure\":{},\"pressuretend\":{},\"visibility\":{},",
            mh.airtemp,
            mh.humidity,
            mh.dewpoint,
            mh.pressure,
            mh.pressuretend,
            mh.visibility
        );
        put!(
            w,
            "\"waterlevel\":{},\"leveltrend\":{},",
            mh.waterlevel,
            mh.leveltrend
        );
        put!(
            w,
            "\"cspeed\":{},\"cdir\":{},\"cspeed2\":{},\"cdir2\":{},\"cdepth2\":{},\"cspeed3\":{},\"cdir3\":{},\"cdepth3\":{},",
            mh.cspeed,
            mh.cdir,
            mh.cspeed2,
            mh.cdir2,
            mh.cdepth2,
            mh.cspeed3,
            mh.cdir3,
            mh.cdepth3
        );
        put!(
            w,
            "\"waveheight\":{},\"waveperiod\":{},\"wavedir\":{},\"swellheight\":{},\"swellperiod\":{},\"swelldir\":{},\"seastate\":{},",
            mh.waveheight,
            mh.waveperiod,
            mh.wavedir,
            mh.swellheight,
            mh.swellperiod,
            mh.swelldir,
            mh.seastate
        );
        put!(
            w,
            "\"watertemp\":{},\"preciptype\":{},\"preciptype_text\":\"{}\",\"salinity\":{},\"ice\":{},\"ice_text\":\"{}\",",
            mh.watertemp,
            mh.preciptype,
            legends::precipitation(mh.preciptype),
            mh.salinity,
            mh.ice,
            legends::ice(mh.ice)
        );
    }
}

fn met_hydro_289(w: &mut JsonWriter, mh: &MetHydro289, scaled: bool) {
    if scaled {
        put!(
            w,
            "\"lon\":{},\"lat\":{},\"accuracy\":{},\"day\":{},\"hour\":{},\"minute\":{},",
            deg3(mh.lon),
            deg3(mh.lat),
            mh.accuracy,
            mh.day,
            mh.hour,
            mh.minute
        );
        put!(
            w,
            "\"wspeed\":{},\"wgust\":{},\"wdir\":{},\"wgustdir\":{},",
            mh.wspeed,
            mh.wgust,
            mh.wdir,
            mh.wgustdir
        );
        put!(
            w,
            "\"airtemp\":{},\"humidity\":{},\"dewpoint\":{},\"pressure\":{},",
            tenth_i(mh.airtemp),
            mh.humidity,
            tenth_i(mh.dewpoint),
            mh.pressure + PRESSURE_OFFSET
        );
        put!(
            w,
            "\"pressuretend\":\"{}\",\"visgreater\":{},\"visibility\":{},",
            legends::trend(mh.pressuretend),
            mh.visgreater,
            tenth(mh.visibility)
        );
        put!(
            w,
            "\"waterlevel\":{:.1},\"leveltrend\":\"{}\",",
            (f64::from(mh.waterlevel) - WATERLEVEL_OFFSET) / 10.0,
            legends::trend(mh.leveltrend)
        );
        put!(
            w,
            "\"cspeed\":{},\"cdir\":{},\"cspeed2\":{},\"cdir2\":{},\"cdepth2\":{},\"cspeed3\":{},\"cdir3\":{},\"cdepth3\":{},",
            tenth(mh.cspeed),
            mh.cdir,
            tenth(mh.cspeed2),
            mh.cdir2,
            mh.cdepth2,
            tenth(mh.cspeed3),
            mh.cdir3,
            mh.cdepth3
        );
        put!(
            w,
            "\"waveheight\":{},\"waveperiod\":{},\"wavedir\":{},\"swellheight\":{},\"swellperiod\":{},\"swelldir\":{},\"seastate\":{},",
            tenth(mh.waveheight),
            mh.waveperiod,
            mh.wavedir,
            tenth(mh.swellheight),
            mh.swellperiod,
            mh.swelldir,
            mh.seastate
        );
        put!(
            w,
            "\"watertemp\":{},\"preciptype\":{},\"preciptype_text\":\"{}\",\"salinity\":{},\"ice\":{},\"ice_text\":\"{}\",",
            tenth_i(mh.watertemp),
            mh.preciptype,
            legends::precipitation(mh.preciptype),
            tenth(mh.salinity),
            mh.ice,
            legends::ice(mh.ice)
        );
    } else {
        put!(
            w,
            "\"lon\":{},\"lat\":{},\"accuracy\":{},\"day\":{},\"hour\":{},\"minute\":{},",
            mh.lon,
            mh.lat,
            mh.accuracy,
            mh.day,
            mh.hour,
            mh.minute
        );
        put!(
            w,
            "\"wspeed\":{},\"wgust\":{},\"wdir\":{},\"wgustdir\":{},",
            mh.wspeed,
            mh.wgust,
            mh.wdir,
            mh.wgustdir
        );
        put!(
            w,
            "\"airtemp\":{},\"humidity\":{},\"dewpoint\":{},\"pressure\":{},\"pressuretend\":{},\"visgreater\":{},\"visibility\":{},",
            mh.airtemp,
            mh.humidity,
            mh.dewpoint,
            mh.pressure,
            mh.pressuretend,
            mh.visgreater,
            mh.visibility
        );
        put!(
            w,
            "\"waterlevel\":{},\"leveltrend\":{},",
            mh.waterlevel,
            mh.leveltrend
        );
        put!(
            w,
            "\"cspeed\":{},\"cdir\":{},\"cspeed2\":{},\"cdir2\":{},\"cdepth2\":{},\"cspeed3\":{},\"cdir3\":{},\"cdepth3\":{},",
            mh.cspeed,
            mh.cdir,
            mh.cspeed2,
            mh.cdir2,
            mh.cdepth2,
            mh.cspeed3,
            mh.cdir3,
            mh.cdepth3
        );
        put!(
            w,
            "\"waveheight\":{},\"waveperiod\":{},\"wavedir\":{},\"swellheight\":{},\"swellperiod\":{},\"swelldir\":{},\"seastate\":{},",
            mh.waveheight,
            mh.waveperiod,
            mh.wavedir,
            mh.swellheight,
            mh.swellperiod,
            mh.swelldir,
            mh.seastate
        );
        put!(
            w,
            "\"watertemp\":{},\"preciptype\":{},\"preciptype_text\":\"{}\",\"salinity\":{},\"ice\":{},\"ice_text\":\"{}\",",
            mh.watertemp,
            mh.preciptype,
            legends::precipitation(mh.preciptype),
            mh.salinity,
            mh.ice,
            legends::ice(mh.ice)
        );
    }
}

fn emma_warning(w: &mut JsonWriter, ew: &EmmaWarning, scaled: bool) {
    put!(
        w,
        "\"start\":\"20{:02}-{:02}-{:02}T{:02}:{:02}\",\"end\":\"20{:02}-{:02}-{:02}T{:02}:{:02}\",",
        ew.start_year,
        ew.start_month,
        ew.start_day,
        ew.start_hour,
        ew.start_minute,
        ew.end_year,
        ew.end_month,
        ew.end_day,
        ew.end_hour,
        ew.end_minute
    );
    if scaled {
        put!(
            w,
            "\"lon1\":{},\"lat1\":{},\"lon2\":{},\"lat2\":{},",
            deg4(ew.lon1),
            deg4(ew.lat1),
            deg4(ew.lon2),
            deg4(ew.lat2)
        );
    } else {
        put!(
            w,
            "\"lon1\":{},\"lat1\":{},\"lon2\":{},\"lat2\":{},",
            ew.lon1,
            ew.lat1,
            ew.lon2,
            ew.lat2
        );
    }
    put!(
        w,
        "\"type\":{},\"type_text\":\"{}\",\"min\":{},\"max\":{},",
        ew.wtype,
        legends::emma_type(ew.wtype),
        ew.min,
        ew.max
    );
    put!(
        w,
        "\"class\":{},\"class_text\":\"{}\",\"wind\":{},\"wind_text\":\"{}\",",
        ew.class,
        legends::emma_class(ew.class),
        ew.wind,
        legends::emma_wind(ew.wind)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn position_message() -> AisMessage {
        AisMessage {
            msgtype: 1,
            repeat: 0,
            mmsi: 477550900,
            data: MessageData::Position(PositionReport {
                status: 0,
                turn: 4,
                speed: 118,
                accuracy: true,
                lon: -47402144,
                lat: -8372335,
                course: 2917,
                heading: 289,
                second: 7,
                maneuver: 0,
                raim: false,
                radio: 25320,
            }),
        }
    }

    #[test]
    fn record_framing() {
        let report = render_json(&position_message(), None, false);
        assert!(report.starts_with("{\"class\":\"AIS\","));
        assert!(report.ends_with("}\r\n"));
        assert!(!report.contains(",}"));
    }

    #[test]
    fn raw_mode_passes_wire_values() {
        let report = render_json(&position_message(), None, false);
        assert!(report.contains("\"scaled\":false,"));
        assert!(report.contains("\"speed\":118,"));
        assert!(report.contains("\"lon\":-47402144,"));
        assert!(report.contains("\"course\":2917,"));
        // legend strings accompany the numeric codes in both modes
        assert!(report.contains("\"status\":0,\"status_text\":\"Under way using engine\","));
    }

    #[test]
    fn scaled_mode_divides_and_legends() {
        let report = render_json(&position_message(), None, true);
        assert!(report.contains("\"scaled\":true,"));
        assert!(report.contains("\"status\":0,\"status_text\":\"Under way using engine\","));
        assert!(report.contains("\"speed\":11.8,"));
        assert!(report.contains("\"lon\":-79.0036,"));
        assert!(report.contains("\"lat\":-13.9539,"));
        assert!(report.contains("\"course\":291.7,"));
        assert_approx_eq!(-47402144.0 / LATLON_DIV, -79.0036, 0.0001);
    }

    #[test]
    fn turn_sentinels() {
        let mut msg = position_message();
        if let MessageData::Position(ref mut p) = msg.data {
            p.turn = TURN_NOT_AVAILABLE;
        }
        let report = render_json(&msg, None, true);
        assert!(report.contains("\"turn\":\"nan\","));

        if let MessageData::Position(ref mut p) = msg.data {
            p.turn = TURN_FAST_RIGHT;
        }
        let report = render_json(&msg, None, true);
        assert!(report.contains("\"turn\":\"fastright\","));

        // raw mode carries the sentinel through untouched
        let report = render_json(&msg, None, false);
        assert!(report.contains("\"turn\":127,"));
    }

    #[test]
    fn device_label_is_escaped() {
        let report = render_json(&position_message(), Some("ais\"0\""), false);
        assert!(report.contains("\"device\":\"ais\\\"0\\\"\","));

        // empty labels are dropped entirely
        let report = render_json(&position_message(), Some(""), false);
        assert!(!report.contains("device"));
    }

    #[test]
    fn stringify_escapes() {
        assert_eq!(stringify("PLAIN TEXT"), "PLAIN TEXT");
        assert_eq!(stringify("A\"B\\C"), "A\\\"B\\\\C");
        assert_eq!(stringify("tab\there"), "tab\\there");
        assert_eq!(stringify("\x01"), "\\u0001");
    }

    #[test]
    fn opaque_payload_renders_bitcount_and_hex() {
        let msg = AisMessage {
            msgtype: 8,
            repeat: 0,
            mmsi: 366999712,
            data: MessageData::BroadcastBinary {
                dac: 366,
                fid: 56,
                app: ApplicationData::Opaque(OpaqueBits {
                    bit_count: 12,
                    bytes: vec![0xde, 0xa0],
                }),
            },
        };
        let report = render_json(&msg, None, false);
        assert!(report.contains("\"dac\":366,\"fid\":56,\"data\":\"12:dea0\""));
    }

    #[test]
    fn empty_arrays_have_no_dangling_separator() {
        let msg = AisMessage {
            msgtype: 8,
            repeat: 0,
            mmsi: 2300001,
            data: MessageData::BroadcastBinary {
                dac: 1,
                fid: 27,
                app: ApplicationData::RouteInfo(RouteInfo {
                    linkage: 1,
                    sender: 0,
                    route_type: 2,
                    month: 5,
                    day: 9,
                    hour: 12,
                    minute: 0,
                    duration: 60,
                    waypoints: Vec::new(),
                }),
            },
        };
        let report = render_json(&msg, None, false);
        assert!(report.contains("\"waypoints\":[]"));
        assert!(!report.contains(",]"));
    }

    #[test]
    fn berthing_report_renders_services_and_position() {
        let msg = AisMessage {
            msgtype: 6,
            repeat: 0,
            mmsi: 366999712,
            data: MessageData::AddressedBinary(AddressedBinary {
                seqno: 0,
                dest_mmsi: 538003913,
                retransmit: false,
                dac: 1,
                fid: 20,
                app: ApplicationData::BerthingData(Box::new(BerthingData {
                    linkage: 42,
                    berth_length: 180,
                    berth_depth: 85,
                    position: 2,
                    month: 6,
                    day: 14,
                    hour: 20,
                    minute: 30,
                    availability: 1,
                    agent: 1,
                    fuel: 2,
                    chandler: 0,
                    stevedore: 0,
                    electrical: 0,
                    water: 0,
                    customs: 0,
                    cartage: 0,
                    crane: 0,
                    lift: 0,
                    medical: 0,
                    navrepair: 0,
                    provisions: 0,
                    shiprepair: 0,
                    surveyor: 0,
                    steam: 0,
                    tugs: 0,
                    solidwaste: 0,
                    liquidwaste: 0,
                    hazardouswaste: 0,
                    ballast: 0,
                    additional: 0,
                    regional1: 0,
                    regional2: 0,
                    future1: 0,
                    future2: 0,
                    berth_name: "PIER 7".to_owned(),
                    berth_lon: -73500,
                    berth_lat: 22980,
                })),
            }),
        };

        let report = render_json(&msg, None, true);
        assert!(report.contains("\"position\":2,\"position_text\":\"Starboard-side to\","));
        assert!(report.contains("\"arrival\":\"6-14T20:30\",\"availability\":1,"));
        assert!(report.contains("\"agent\":1,\"fuel\":2,"));
        assert!(report.contains("\"berth_name\":\"PIER 7\","));
        assert!(report.contains("\"berth_lon\":-1.225,\"berth_lat\":0.383,\"berth_depth\":8.5"));

        let raw = render_json(&msg, None, false);
        assert!(raw.contains("\"position_text\":\"Starboard-side to\","));
        assert!(raw.contains("\"berth_lon\":-73500,\"berth_lat\":22980,\"berth_depth\":85"));
    }

    #[test]
    fn signal_status_renders_legends() {
        let msg = AisMessage {
            msgtype: 8,
            repeat: 0,
            mmsi: 2110001,
            data: MessageData::BroadcastBinary {
                dac: 200,
                fid: 40,
                app: ApplicationData::SignalStatus {
                    lon: -1_200_000,
                    lat: 30_600_000,
                    form: 2,
                    facing: 90,
                    direction: 2,
                    status: 4,
                },
            },
        };

        let report = render_json(&msg, None, false);
        assert!(report.contains("\"direction\":2,\"direction_text\":\"Downstream\","));
        assert!(report.contains("\"status\":4,\"status_text\":\"Green\","));
    }

    #[test]
    fn merged_static_report_has_no_part_key() {
        let statics = ClassBStatic {
            shiptype: 36,
            vendorid: "ACM".to_owned(),
            model: 2,
            serial: 12345,
            callsign: "WDA1234".to_owned(),
            hull: HullReference::Dimensions(Dimensions {
                to_bow: 4,
                to_stern: 8,
                to_port: 2,
                to_starboard: 2,
            }),
        };
        let msg = AisMessage {
            msgtype: 24,
            repeat: 0,
            mmsi: 338091445,
            data: MessageData::StaticDataReport(StaticDataReport::Merged {
                shipname: "SEA HUNTER".to_owned(),
                statics,
            }),
        };
        let report = render_json(&msg, None, true);
        assert!(!report.contains("\"part\""));
        assert!(report.contains("\"shipname\":\"SEA HUNTER\","));
        assert!(report.contains("\"shiptype\":36,\"shiptype_text\":\"Sailing\","));
        assert!(report.contains("\"callsign\":\"WDA1234\","));
        assert!(report.contains("\"to_bow\":4,"));
    }

    #[test]
    fn long_range_scaled_uses_coarse_divisor() {
        let msg = AisMessage {
            msgtype: 27,
            repeat: 0,
            mmsi: 366123456,
            data: MessageData::LongRange(LongRangeReport {
                accuracy: true,
                raim: false,
                status: 5,
                lon: -7_350_000,
                lat: 2_298_000,
                speed: 9,
                course: 204,
                gnss: true,
            }),
        };
        let report = render_json(&msg, None, true);
        assert!(report.contains("\"status\":5,\"status_text\":\"Moored\","));
        assert!(report.contains("\"lon\":-122.5,"));
        assert!(report.contains("\"lat\":38.3,"));
    }
}
