// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Grammar tables.
//!
//! The token shapes of METAR and TAF groups and the fixed code tables used to
//! classify and describe them. All tables are read-only and shared by every
//! decode call.

/////////////////////////////////////////////////////////////////////////////
// Token Shapes
/////////////////////////////////////////////////////////////////////////////

patterns! {
    /// Day, hour and minute followed by Zulu, e.g. `071756Z`.
    TIME = r"^(\d{2})(\d{2})(\d{2})Z$";

    /// Surface wind `dddff(Gfmfm)KT`, optionally estimated with a leading `E`.
    WIND = r"^(E)?(VRB|\d{3})(\d{2,3})(?:G(\d{2,3}))?(KT|MPS)$";
    /// Calm wind reported only with zeros, where the speed is missing.
    WIND_CALM = r"^0+(?:G(\d{2,3}))?(KT|MPS)$";
    WIND_VARIATION = r"^(\d{3})V(\d{3})$";

    WIND_SHEAR_ALTITUDE = r"^WS(\d{3})/(\d{3})(\d{2,3})(?:G(\d{2,3}))?(KT|MPS)$";
    WIND_SHEAR_RUNWAY = r"^WS(?:R|RWY)(\d{2}[LCR]?)$";
    WIND_SHEAR_PHASE = r"^(TKOF|LDG|ALL)$";
    /// Runway of a three token wind shear group, `RWY` alone means all runways.
    WIND_SHEAR_RWY = r"^RWY(\d{2}[LCR]?)?$";
    /// Runway of a two token wind shear group.
    WIND_SHEAR_R = r"^R(?:WY)?(\d{2}[LCR]?)$";

    VISIBILITY_SM = r"^[MP]?\d+(?:/\d+)?SM$";
    VISIBILITY_WHOLE = r"^\d$";
    VISIBILITY_FRACTION = r"^\d/\d{1,2}SM$";
    VISIBILITY_METERS = r"^\d{4}$";
    VISIBILITY_DIRECTION = r"^(\d{4})([NESW]{1,2})$";
    VISIBILITY_NDV = r"^(\d{4,5})NDV$";

    VERTICAL_VISIBILITY = r"^VV(\d{3})$";

    RUNWAY_CLEARED = r"^R(\d{2}[LCR]?)/CLRD(\d{2})$";
    RUNWAY_RANGE = r"^R(\d{2}[LCR]?)/([MP])?(\d+)(?:V([MP])?(\d+))?(FT)?(?:/?([UDN]))?$";

    CLOUD = r"^(SKC|CLR|FEW|SCT|BKN|OVC)(\d{3})?(CB|TCU)?$";
    /// Cloud group with the type in front of the height, e.g. `BKNCB030`.
    CLOUD_TYPE_FIRST = r"^(FEW|SCT|BKN|OVC)(CB|TCU)(\d{3})$";

    TEMPERATURE = r"^(M?)(\d{2})/(M?)(\d{2})$";
    TEMPERATURE_ONLY = r"^(M?)(\d{2})/$";

    PRESSURE = r"^([QA])(\d{4})$";

    /// Validity of a TAF or change group `DDHH/DDHH`.
    VALIDITY = r"^(\d{2})(\d{2})/(\d{2})(\d{2})$";
    FROM = r"^FM(\d{2})(\d{2})(\d{2})$";
    /// Time of an `FM` keyword that is separated from its time.
    FROM_TIME = r"^(\d{2})(\d{2})(\d{2})$";
    PROBABILITY = r"^PROB(\d{2})$";
}

patterns! {
    PEAK_WIND = r"^PK WND (\d{3})(\d{2,3})/(\d{2})?(\d{2})$";
    SEA_LEVEL_PRESSURE = r"^SLP(\d{3})$";
    TEMPERATURE_TENTHS = r"^T(\d)(\d{3})(\d)(\d{3})$";
    PRECIPITATION_EVENT = r"^(SHSN|SHRA|SHPE|SHPL|SHGR|SHGS|RA|SN|DZ|GR|GS|PE|IC|PL|SG|TS|FG|FU|VA|DU|SA|HZ|PY|BR)(B|E)(\d{2})$";
    SIX_HOUR_MAX = r"^1(\d)(\d{3})$";
    SIX_HOUR_MIN = r"^2(\d)(\d{3})$";
    DAILY_TEMPERATURE = r"^4(\d)(\d{3})(\d)(\d{3})$";
    PRESSURE_CHANGE = r"^3(\d{4})$";
    PRESSURE_TENDENCY = r"^5(\d)(\d{3})$";
    HOURLY_PRECIPITATION = r"^P(\d{4})$";
    DAILY_PRECIPITATION = r"^7(\d{4})$";
    SNOW_DEPTH = r"^4/(\d{3})$";
    ICE_ACCRETION = r"^I([123])(\d{3})$";
    SNOW_INCREASE = r"^(\d+)/(\d+)$";
    CEILING = r"^\d+$";
}

/////////////////////////////////////////////////////////////////////////////
// Code Tables
/////////////////////////////////////////////////////////////////////////////

/// Weather phenomena, descriptors and qualifiers.
///
/// A token that contains any of these codes is a present weather group,
/// unless it is shaped like a cloud group.
pub const WEATHER_CODES: &[(&str, &str)] = &[
    ("WS", "wind shear"),
    ("VC", "in the vicinity"),
    ("+", "heavy"),
    ("-", "light"),
    ("MI", "shallow"),
    ("PR", "partial"),
    ("BC", "patches"),
    ("DR", "low drifting"),
    ("BL", "blowing"),
    ("SH", "showers"),
    ("TS", "thunderstorm"),
    ("FZ", "freezing"),
    ("DZ", "drizzle"),
    ("RA", "rain"),
    ("SN", "snow"),
    ("SG", "snow grains"),
    ("IC", "ice crystals"),
    ("PL", "ice pellets"),
    ("GR", "hail"),
    ("GS", "small hail"),
    ("UP", "unknown precipitation"),
    ("BR", "mist"),
    ("FG", "fog"),
    ("FU", "smoke"),
    ("VA", "volcanic ash"),
    ("DU", "widespread dust"),
    ("SA", "sand"),
    ("HZ", "haze"),
    ("PY", "spray"),
    ("PO", "dust whirls"),
    ("SQ", "squalls"),
    ("FC", "funnel cloud"),
    ("+FC", "tornado/waterspout"),
    ("SS", "sandstorm"),
    ("DS", "duststorm"),
];

pub const CLOUD_COVERAGE: &[(&str, &str)] = &[
    ("SKC", "sky clear"),
    ("CLR", "clear"),
    ("FEW", "few clouds"),
    ("SCT", "scattered clouds"),
    ("BKN", "broken clouds"),
    ("OVC", "overcast"),
];

pub const CLOUD_TYPES: &[(&str, &str)] = &[("CB", "cumulonimbus"), ("TCU", "towering cumulus")];

pub const SPECIAL_CONDITIONS: &[(&str, &str)] = &[
    ("NOSIG", "no significant changes expected"),
    ("AUTO", "automated observation"),
    ("COR", "corrected report"),
    ("CCA", "corrected report"),
    ("NSC", "no significant clouds"),
    ("NCD", "no clouds detected"),
    ("CAVOK", "ceiling and visibility OK"),
    ("RTD", "routine delayed (late) observation"),
];

pub const FORECAST_TYPES: &[(&str, &str)] = &[
    ("BASE", "base forecast"),
    ("FM", "from"),
    ("BECMG", "becoming"),
    ("TEMPO", "temporary"),
    ("PROB30", "30% probability of"),
    ("PROB40", "40% probability of"),
    ("PROB", "probability of"),
    ("INTER", "intermittent"),
];

/// Keywords that end the main body of a METAR.
pub const BODY_TERMINATORS: &[&str] = &["RMK", "TEMPO", "BECMG", "INTER"];

pub const REMARK_CODES: &[(&str, &str)] = &[
    ("AO1", "automated station without precipitation sensor"),
    ("AO2", "automated station with precipitation sensor"),
    ("AO1A", "automated station without precipitation sensor"),
    ("AO2A", "automated station with precipitation sensor"),
    ("SLP", "sea level pressure"),
    ("RMK", "remarks indicator"),
    ("PRESRR", "pressure rising rapidly"),
    ("PRESFR", "pressure falling rapidly"),
    ("NOSIG", "no significant changes expected"),
    ("TEMPO", "temporary"),
    ("BECMG", "becoming"),
    ("VIRGA", "precipitation not reaching ground"),
    ("FROPA", "frontal passage"),
    ("$", "weather observing equipment requires maintenance"),
];

/// Characteristic of the pressure tendency indexed by its code figure.
pub const PRESSURE_TENDENCIES: [&str; 9] = [
    "increasing, then decreasing",
    "increasing, then steady",
    "increasing steadily",
    "increasing, then increasing more rapidly",
    "steady",
    "decreasing, then increasing",
    "decreasing, then steady",
    "decreasing steadily",
    "decreasing, then decreasing more rapidly",
];

/// Phenomena that can begin or end within the hour.
pub const PRECIPITATION_EVENTS: &[(&str, &str)] = &[
    ("RA", "rain"),
    ("SN", "snow"),
    ("DZ", "drizzle"),
    ("GR", "hail"),
    ("GS", "small hail"),
    ("PE", "ice pellets"),
    ("IC", "ice crystals"),
    ("PL", "ice pellets"),
    ("SG", "snow grains"),
    ("TS", "thunderstorm"),
    ("FG", "fog"),
    ("FU", "smoke"),
    ("VA", "volcanic ash"),
    ("DU", "dust"),
    ("SA", "sand"),
    ("HZ", "haze"),
    ("PY", "spray"),
    ("BR", "mist"),
    ("SHSN", "snow shower"),
    ("SHRA", "rain shower"),
    ("SHPE", "ice pellet shower"),
    ("SHPL", "ice pellet shower"),
    ("SHGR", "hail shower"),
    ("SHGS", "small hail shower"),
];

pub const RECENT_WEATHER: &[(&str, &str)] = &[
    ("RA", "rain"),
    ("SN", "snow"),
    ("GR", "hail"),
    ("GS", "small hail"),
    ("TS", "thunderstorm"),
    ("FG", "fog"),
    ("SQ", "squall"),
    ("FC", "funnel cloud"),
];

/// Returns the description of `code` in a code table.
pub fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, description)| *description)
}

/// Returns `true` if the token is a present weather group.
///
/// Tokens starting with a cloud coverage are never weather, even though e.g.
/// `BKN` and `SCT` could contain a weather code in their height or type.
pub fn is_weather(token: &str) -> bool {
    if CLOUD_COVERAGE
        .iter()
        .any(|(coverage, _)| token.starts_with(coverage))
    {
        return false;
    }

    WEATHER_CODES.iter().any(|(code, _)| token.contains(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_excludes_cloud_shapes() {
        assert!(is_weather("-RA"));
        assert!(is_weather("VCTS"));
        assert!(is_weather("+FC"));
        assert!(is_weather("BR"));
        // SCT and OVC contain no code, but the exclusion has to hold for
        // any cloud shaped token regardless
        assert!(!is_weather("SCT020"));
        assert!(!is_weather("FEWSH"));
        assert!(!is_weather("BKN015TCU"));
        assert!(!is_weather("A2992"));
    }

    #[test]
    fn looks_up_codes() {
        assert_eq!(lookup(CLOUD_COVERAGE, "OVC"), Some("overcast"));
        assert_eq!(
            lookup(REMARK_CODES, "$"),
            Some("weather observing equipment requires maintenance")
        );
        assert_eq!(lookup(SPECIAL_CONDITIONS, "XXX"), None);
    }

    #[test]
    fn tendency_table_covers_all_codes() {
        assert_eq!(PRESSURE_TENDENCIES.len(), 9);
        assert_eq!(PRESSURE_TENDENCIES[4], "steady");
    }

    #[test]
    fn runway_range_captures_trend_with_and_without_slash() {
        let caps = RUNWAY_RANGE.captures("R21/1800V2000FT/U").unwrap();
        assert_eq!(&caps[1], "21");
        assert_eq!(&caps[7], "U");

        let caps = RUNWAY_RANGE.captures("R24C/P6000FTD").unwrap();
        assert_eq!(&caps[2], "P");
        assert_eq!(&caps[7], "D");
    }
}
