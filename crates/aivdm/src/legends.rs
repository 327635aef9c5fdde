//! Display legends for enumerated AIS fields
//!
//! Scaled-mode reports carry a `*_text` companion for most coded
//! fields. Every accessor here is bounds-checked and falls back to an
//! `INVALID <FIELD>` marker, so a corrupt code can never index out of
//! a table.

use phf::phf_map;
use strum::EnumMessage;

/// Navigation status for position reports (types 1-3 and 27)
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::EnumMessage, strum_macros::FromRepr)]
#[repr(u8)]
pub enum NavigationStatus {
    #[strum(detailed_message = "Under way using engine")]
    UnderWayEngine = 0,
    #[strum(detailed_message = "At anchor")]
    AtAnchor = 1,
    #[strum(detailed_message = "Not under command")]
    NotUnderCommand = 2,
    #[strum(detailed_message = "Restricted manoeuverability")]
    RestrictedManoeuverability = 3,
    #[strum(detailed_message = "Constrained by her draught")]
    ConstrainedByDraught = 4,
    #[strum(detailed_message = "Moored")]
    Moored = 5,
    #[strum(detailed_message = "Aground")]
    Aground = 6,
    #[strum(detailed_message = "Engaged in fishing")]
    Fishing = 7,
    #[strum(detailed_message = "Under way sailing")]
    UnderWaySailing = 8,
    #[strum(detailed_message = "Reserved for HSC")]
    ReservedHsc = 9,
    #[strum(detailed_message = "Reserved for WIG")]
    ReservedWig = 10,
    #[strum(detailed_message = "Reserved")]
    Reserved11 = 11,
    #[strum(detailed_message = "Reserved")]
    Reserved12 = 12,
    #[strum(detailed_message = "Reserved")]
    Reserved13 = 13,
    #[strum(detailed_message = "Reserved")]
    Reserved14 = 14,
    #[strum(detailed_message = "Not defined")]
    NotDefined = 15,
}

impl NavigationStatus {
    /// Human-readable legend
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// Legend for a raw status code
    pub fn display(code: u32) -> &'static str {
        u8::try_from(code)
            .ok()
            .and_then(Self::from_repr)
            .map(|status| status.as_display_str())
            .unwrap_or("INVALID NAVIGATION STATUS")
    }
}

/// Electronic position-fixing device types
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::EnumMessage, strum_macros::FromRepr)]
#[repr(u8)]
pub enum EpfdSource {
    #[strum(detailed_message = "Undefined")]
    Undefined = 0,
    #[strum(detailed_message = "GPS")]
    Gps = 1,
    #[strum(detailed_message = "GLONASS")]
    Glonass = 2,
    #[strum(detailed_message = "Combined GPS/GLONASS")]
    GpsGlonass = 3,
    #[strum(detailed_message = "Loran-C")]
    LoranC = 4,
    #[strum(detailed_message = "Chayka")]
    Chayka = 5,
    #[strum(detailed_message = "Integrated navigation system")]
    Integrated = 6,
    #[strum(detailed_message = "Surveyed")]
    Surveyed = 7,
    #[strum(detailed_message = "Galileo")]
    Galileo = 8,
}

impl EpfdSource {
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// Legend for a raw EPFD code
    pub fn display(code: u32) -> &'static str {
        u8::try_from(code)
            .ok()
            .and_then(Self::from_repr)
            .map(|epfd| epfd.as_display_str())
            .unwrap_or("INVALID EPFD")
    }
}

fn lookup(table: &'static [&'static str], code: u32, invalid: &'static str) -> &'static str {
    table.get(code as usize).copied().unwrap_or(invalid)
}

static SHIP_TYPE_LEGENDS: [&str; 100] = [
    "Not available",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Wing in ground (WIG) - all ships of this type",
    "Wing in ground (WIG) - Hazardous category A",
    "Wing in ground (WIG) - Hazardous category B",
    "Wing in ground (WIG) - Hazardous category C",
    "Wing in ground (WIG) - Hazardous category D",
    "Wing in ground (WIG) - Reserved for future use",
    "Wing in ground (WIG) - Reserved for future use",
    "Wing in ground (WIG) - Reserved for future use",
    "Wing in ground (WIG) - Reserved for future use",
    "Wing in ground (WIG) - Reserved for future use",
    "Fishing",
    "Towing",
    "Towing: length exceeds 200m or breadth exceeds 25m",
    "Dredging or underwater ops",
    "Diving ops",
    "Military ops",
    "Sailing",
    "Pleasure Craft",
    "Reserved",
    "Reserved",
    "High speed craft (HSC) - all ships of this type",
    "High speed craft (HSC) - Hazardous category A",
    "High speed craft (HSC) - Hazardous category B",
    "High speed craft (HSC) - Hazardous category C",
    "High speed craft (HSC) - Hazardous category D",
    "High speed craft (HSC) - Reserved for future use",
    "High speed craft (HSC) - Reserved for future use",
    "High speed craft (HSC) - Reserved for future use",
    "High speed craft (HSC) - Reserved for future use",
    "High speed craft (HSC) - No additional information",
    "Pilot Vessel",
    "Search and Rescue vessel",
    "Tug",
    "Port Tender",
    "Anti-pollution equipment",
    "Law Enforcement",
    "Spare - Local Vessel",
    "Spare - Local Vessel",
    "Medical Transport",
    "Ship according to RR Resolution No. 18",
    "Passenger - all ships of this type",
    "Passenger - Hazardous category A",
    "Passenger - Hazardous category B",
    "Passenger - Hazardous category C",
    "Passenger - Hazardous category D",
    "Passenger - Reserved for future use",
    "Passenger - Reserved for future use",
    "Passenger - Reserved for future use",
    "Passenger - Reserved for future use",
    "Passenger - No additional information",
    "Cargo - all ships of this type",
    "Cargo - Hazardous category A",
    "Cargo - Hazardous category B",
    "Cargo - Hazardous category C",
    "Cargo - Hazardous category D",
    "Cargo - Reserved for future use",
    "Cargo - Reserved for future use",
    "Cargo - Reserved for future use",
    "Cargo - Reserved for future use",
    "Cargo - No additional information",
    "Tanker - all ships of this type",
    "Tanker - Hazardous category A",
    "Tanker - Hazardous category B",
    "Tanker - Hazardous category C",
    "Tanker - Hazardous category D",
    "Tanker - Reserved for future use",
    "Tanker - Reserved for future use",
    "Tanker - Reserved for future use",
    "Tanker - Reserved for future use",
    "Tanker - No additional information",
    "Other Type - all ships of this type",
    "Other Type - Hazardous category A",
    "Other Type - Hazardous category B",
    "Other Type - Hazardous category C",
    "Other Type - Hazardous category D",
    "Other Type - Reserved for future use",
    "Other Type - Reserved for future use",
    "Other Type - Reserved for future use",
    "Other Type - Reserved for future use",
    "Other Type - no additional information",
];

pub(crate) fn ship_type(code: u32) -> &'static str {
    lookup(&SHIP_TYPE_LEGENDS, code, "INVALID SHIP TYPE")
}

static STATION_TYPE_LEGENDS: [&str; 16] = [
    "All types of mobiles",
    "Reserved for future use",
    "All types of Class B mobile stations",
    "SAR airborne mobile station",
    "Aid to navigation station",
    "Class B shipborne mobile station",
    "Regional use and inland waterways",
    "Regional use and inland waterways",
    "Regional use and inland waterways",
    "Regional use and inland waterways",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
];

pub(crate) fn station_type(code: u32) -> &'static str {
    lookup(&STATION_TYPE_LEGENDS, code, "INVALID STATION TYPE")
}

static NAVAID_TYPE_LEGENDS: [&str; 32] = [
    "Unspecified",
    "Reference point",
    "RACON",
    "Fixed offshore structure",
    "Spare, Reserved",
    "Light, without sectors",
    "Light, with sectors",
    "Leading Light Front",
    "Leading Light Rear",
    "Beacon, Cardinal N",
    "Beacon, Cardinal E",
    "Beacon, Cardinal S",
    "Beacon, Cardinal W",
    "Beacon, Port hand",
    "Beacon, Starboard hand",
    "Beacon, Preferred Channel port hand",
    "Beacon, Preferred Channel starboard hand",
    "Beacon, Isolated danger",
    "Beacon, Safe water",
    "Beacon, Special mark",
    "Cardinal Mark N",
    "Cardinal Mark E",
    "Cardinal Mark S",
    "Cardinal Mark W",
    "Port hand Mark",
    "Starboard hand Mark",
    "Preferred Channel Port hand",
    "Preferred Channel Starboard hand",
    "Isolated danger",
    "Safe Water",
    "Special Mark",
    "Light Vessel / LANBY / Rigs",
];

pub(crate) fn navaid_type(code: u32) -> &'static str {
    lookup(&NAVAID_TYPE_LEGENDS, code, "INVALID NAVAID TYPE")
}

static ROUTE_TYPE_LEGENDS: [&str; 32] = [
    "Undefined (default)",
    "Mandatory",
    "Recommended",
    "Alternative",
    "Recommended route through ice",
    "Ship route plan",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Cancellation",
];

pub(crate) fn route_type(code: u32) -> &'static str {
    lookup(&ROUTE_TYPE_LEGENDS, code, "INVALID ROUTE TYPE")
}

static SIGNAL_LEGENDS: [&str; 15] = [
    "N/A (default)",
    "Serious emergency - stop or divert according to instructions",
    "Vessels shall not proceed",
    "Vessels may proceed - one way traffic",
    "Vessels may proceed - two way traffic",
    "Vessels shall proceed on specific orders only",
    "Vessels in main channel shall not proceed",
    "Vessels in main channel shall proceed on specific orders only",
    "Vessels in main channel shall proceed on specific orders only",
    "I = \"in-bound\" only acceptable",
    "O = \"out-bound\" only acceptable",
    "F = both \"in- and out-bound\" acceptable",
    "XI = Code will shift to \"I\" in due time",
    "XO = Code will shift to \"O\" in due time",
    "X = Vessels shall proceed only on direction",
];

pub(crate) fn traffic_signal(code: u32) -> &'static str {
    lookup(&SIGNAL_LEGENDS, code, "INVALID SIGNAL")
}

static ID_TYPE_LEGENDS: [&str; 4] = ["mmsi", "imo", "callsign", "other"];

pub(crate) fn target_id_type(code: u32) -> &'static str {
    lookup(&ID_TYPE_LEGENDS, code, "INVALID ID TYPE")
}

static RACON_LEGENDS: [&str; 4] = [
    "No RACON installed",
    "RACON not monitored",
    "RACON operational",
    "RACON ERROR",
];

pub(crate) fn racon_status(code: u32) -> &'static str {
    lookup(&RACON_LEGENDS, code, "INVALID RACON STATUS")
}

static LIGHT_LEGENDS: [&str; 4] = [
    "No light or no monitoring",
    "Light ON",
    "Light OFF",
    "Light ERROR",
];

pub(crate) fn light_status(code: u32) -> &'static str {
    lookup(&LIGHT_LEGENDS, code, "INVALID LIGHT STATUS")
}

static RTA_LEGENDS: [&str; 4] = [
    "Operational",
    "Limited operation",
    "Out of order",
    "Not available",
];

pub(crate) fn rta_status(code: u32) -> &'static str {
    lookup(&RTA_LEGENDS, code, "INVALID RTA STATUS")
}

static MOORING_POSITION_LEGENDS: [&str; 8] = [
    "Not available",
    "Port-side to",
    "Starboard-side to",
    "Mediterranean (end-on) mooring",
    "Mooring buoy",
    "Anchorage",
    "Reserved for future use",
    "Reserved for future use",
];

pub(crate) fn mooring_position(code: u32) -> &'static str {
    lookup(&MOORING_POSITION_LEGENDS, code, "INVALID MOORING POSITION")
}

static SIGNAL_DIRECTION_LEGENDS: [&str; 5] = [
    "Unknown",
    "Upstream",
    "Downstream",
    "To left bank",
    "To right bank",
];

pub(crate) fn signal_direction(code: u32) -> &'static str {
    lookup(&SIGNAL_DIRECTION_LEGENDS, code, "INVALID DIRECTION")
}

static SIGNAL_LIGHT_LEGENDS: [&str; 8] = [
    "Unknown",
    "No light",
    "White",
    "Yellow",
    "Green",
    "Red",
    "White flashing",
    "Yellow flashing.",
];

pub(crate) fn signal_light_status(code: u32) -> &'static str {
    lookup(&SIGNAL_LIGHT_LEGENDS, code, "INVALID STATUS")
}

static TREND_LEGENDS: [&str; 4] = ["steady", "decreasing", "increasing", "N/A (default)"];

pub(crate) fn trend(code: u32) -> &'static str {
    lookup(&TREND_LEGENDS, code, "INVALID TREND")
}

static PRECIPITATION_LEGENDS: [&str; 8] = [
    "Reserved",
    "Rain",
    "Thunderstorm",
    "Freezing rain",
    "Mixed/ice",
    "Snow",
    "Reserved",
    "N/A (default)",
];

pub(crate) fn precipitation(code: u32) -> &'static str {
    lookup(&PRECIPITATION_LEGENDS, code, "INVALID PRECIPITATION TYPE")
}

static ICE_LEGENDS: [&str; 4] = ["No", "Yes", "Reserved", "Unknown (default)"];

pub(crate) fn ice(code: u32) -> &'static str {
    lookup(&ICE_LEGENDS, code, "INVALID ICE")
}

static HAZARD_LEGENDS: [&str; 6] = [
    "0 blue cones/lights",
    "1 blue cone/light",
    "2 blue cones/lights",
    "3 blue cones/lights",
    "4 B-Flag",
    "Unknown",
];

pub(crate) fn inland_hazard(code: u32) -> &'static str {
    lookup(&HAZARD_LEGENDS, code, "INVALID HAZARD")
}

static LOAD_LEGENDS: [&str; 3] = ["N/A (default)", "Unloaded", "Loaded"];

pub(crate) fn load_status(code: u32) -> &'static str {
    lookup(&LOAD_LEGENDS, code, "INVALID LOAD STATUS")
}

static EMMA_TYPE_LEGENDS: [&str; 10] = [
    "Default",
    "Wind",
    "Rain",
    "Snow and ice",
    "Thunderstorm",
    "Fog",
    "Low temperature",
    "High temperature",
    "Flood",
    "Fire in the forests",
];

pub(crate) fn emma_type(code: u32) -> &'static str {
    lookup(&EMMA_TYPE_LEGENDS, code, "INVALID EMMA TYPE")
}

static EMMA_CLASS_LEGENDS: [&str; 3] = ["Slight", "Medium", "Strong, heavy"];

pub(crate) fn emma_class(code: u32) -> &'static str {
    lookup(&EMMA_CLASS_LEGENDS, code, "INVALID EMMA CLASS")
}

static EMMA_WIND_LEGENDS: [&str; 9] = [
    "N/A (default)",
    "North",
    "North East",
    "East",
    "South East",
    "South",
    "South West",
    "West",
    "North West",
];

pub(crate) fn emma_wind(code: u32) -> &'static str {
    lookup(&EMMA_WIND_LEGENDS, code, "INVALID EMMA WIND")
}

/// Inland (DAC 200) ERI ship type codes
static INLAND_SHIP_TYPES: phf::Map<u32, &'static str> = phf_map! {
    1500u32 => "General cargo Vessel maritime",
    1510u32 => "Unit carrier maritime",
    1520u32 => "Bulk carrier maritime",
    1530u32 => "Tanker",
    1540u32 => "Liquified gas tanker",
    1850u32 => "Pleasure craft, longer than 20 metres",
    1900u32 => "Fast ship",
    1910u32 => "Hydrofoil",
    8000u32 => "Vessel, type unknown",
    8010u32 => "Motor freighter",
    8020u32 => "Motor tanker",
    8021u32 => "Motor tanker, liquid cargo, type N",
    8022u32 => "Motor tanker, liquid cargo, type C",
    8023u32 => "Motor tanker, dry cargo as if liquid (e.g. cement)",
    8030u32 => "Container vessel",
    8040u32 => "Gas tanker",
    8050u32 => "Motor freighter, tug",
    8060u32 => "Motor tanker, tug",
    8070u32 => "Motor freighter with one or more ships alongside",
    8080u32 => "Motor freighter with tanker",
    8090u32 => "Motor freighter pushing one or more freighters",
    8100u32 => "Motor freighter pushing at least one tank-ship",
    8110u32 => "Tug, freighter",
    8120u32 => "Tug, tanker",
    8130u32 => "Tug freighter, coupled",
    8140u32 => "Tug, freighter/tanker, coupled",
    8150u32 => "Freightbarge",
    8160u32 => "Tankbarge",
    8161u32 => "Tankbarge, liquid cargo, type N",
    8162u32 => "Tankbarge, liquid cargo, type C",
    8163u32 => "Tankbarge, dry cargo as if liquid (e.g. cement)",
    8170u32 => "Freightbarge with containers",
    8180u32 => "Tankbarge, gas",
    8210u32 => "Pushtow, one cargo barge",
    8220u32 => "Pushtow, two cargo barges",
    8230u32 => "Pushtow, three cargo barges",
    8240u32 => "Pushtow, four cargo barges",
    8250u32 => "Pushtow, five cargo barges",
    8260u32 => "Pushtow, six cargo barges",
    8270u32 => "Pushtow, seven cargo barges",
    8280u32 => "Pushtow, eight cargo barges",
    8290u32 => "Pushtow, nine or more barges",
    8310u32 => "Pushtow, one tank/gas barge",
    8320u32 => "Pushtow, two barges at least one tanker or gas barge",
    8330u32 => "Pushtow, three barges at least one tanker or gas barge",
    8340u32 => "Pushtow, four barges at least one tanker or gas barge",
    8350u32 => "Pushtow, five barges at least one tanker or gas barge",
    8360u32 => "Pushtow, six barges at least one tanker or gas barge",
    8370u32 => "Pushtow, seven barges at least one tanker or gas barge",
    8380u32 => "Pushtow, eight barges at least one tanker or gas barge",
    8390u32 => "Pushtow, nine or more barges at least one tanker or gas barge",
    8400u32 => "Tug, single",
    8410u32 => "Tug, one or more tows",
    8420u32 => "Tug, assisting a vessel or linked combination",
    8430u32 => "Pushboat, single",
    8440u32 => "Passenger ship, ferry, cruise ship, red cross ship",
    8441u32 => "Ferry",
    8442u32 => "Red cross ship",
    8443u32 => "Cruise ship",
    8444u32 => "Passenger ship without accommodation",
    8450u32 => "Service vessel, police patrol, port service",
    8460u32 => "Vessel, work maintenance craft, floating derrick, cable-ship, buoy-ship, dredge",
    8470u32 => "Object, towed, not otherwise specified",
    8480u32 => "Fishing boat",
    8500u32 => "Barge, tanker, chemical",
    8510u32 => "Object, not otherwise specified",
};

pub(crate) fn inland_ship_type(code: u32) -> &'static str {
    INLAND_SHIP_TYPES
        .get(&code)
        .copied()
        .unwrap_or("Illegal ship type value.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_status_display() {
        assert_eq!(NavigationStatus::display(0), "Under way using engine");
        assert_eq!(NavigationStatus::display(5), "Moored");
        assert_eq!(NavigationStatus::display(15), "Not defined");
        assert_eq!(NavigationStatus::display(16), "INVALID NAVIGATION STATUS");
        assert_eq!(NavigationStatus::display(u32::MAX), "INVALID NAVIGATION STATUS");
    }

    #[test]
    fn epfd_display() {
        assert_eq!(EpfdSource::display(1), "GPS");
        assert_eq!(EpfdSource::display(8), "Galileo");
        assert_eq!(EpfdSource::display(9), "INVALID EPFD");
    }

    #[test]
    fn out_of_range_codes_fall_back() {
        assert_eq!(ship_type(52), "Tug");
        assert_eq!(ship_type(100), "INVALID SHIP TYPE");
        assert_eq!(navaid_type(33), "INVALID NAVAID TYPE");
        assert_eq!(station_type(99), "INVALID STATION TYPE");
        assert_eq!(route_type(31), "Cancellation");
    }

    #[test]
    fn inland_ship_types_by_eri_code() {
        assert_eq!(inland_ship_type(8010), "Motor freighter");
        assert_eq!(inland_ship_type(8442), "Red cross ship");
        assert_eq!(inland_ship_type(42), "Illegal ship type value.");
    }
}
