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

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use metar::source::{fetch_metar, fetch_taf, Fetcher, ReportKind};
use metar::*;

fn utc(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, minute, 0)
        .unwrap()
}

fn decoder() -> Decoder {
    Decoder::at(utc(3, 7, 18, 0))
}

#[test]
fn decodes_observation_with_remarks() {
    let metar = decoder().metar(
        "KSFO 071756Z 28015G25KT 10SM FEW008 BKN200 16/10 A2999 RMK AO2 SLP156 T01560100",
    );

    assert_eq!(metar.station.ident, "KSFO");
    assert_eq!(metar.observed_at, Some(utc(3, 7, 17, 56)));
    assert_eq!(
        metar.wind,
        Some(Wind {
            direction: WindDirection::Bearing(280),
            speed: Some(15),
            gust: Some(25),
            unit: SpeedUnit::Knots,
            variation: None,
            estimated: false,
        })
    );
    assert_eq!(metar.visibility.as_ref().map(Visibility::as_str), Some("10SM"));
    assert_eq!(
        metar.clouds,
        vec![
            Cloud {
                coverage: Coverage::Few,
                height: Some(800),
                cloud_type: None
            },
            Cloud {
                coverage: Coverage::Broken,
                height: Some(20_000),
                cloud_type: None
            },
        ]
    );
    assert_eq!(metar.temperature, Some(16));
    assert_eq!(metar.dew_point, Some(10));

    let pressure = metar.pressure.expect("pressure should be decoded");
    assert_eq!(pressure.unit, PressureUnit::InchesOfMercury);
    assert!((pressure.value - 29.99).abs() < 1e-9);

    let descriptions: Vec<&str> = metar
        .remarks
        .iter()
        .map(|remark| remark.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "automated station with precipitation sensor",
            "sea level pressure 1015.6 hPa",
            "temperature 15.6°C, dew point 10.0°C",
        ]
    );
    assert!(metar.unhandled.is_empty());
}

#[test]
fn decodes_forecast() {
    let decoder = Decoder::at(utc(5, 11, 6, 0));
    let taf = decoder.taf("TAF KBOS 110547Z 1106/1212 14012KT 4SM -RA BR OVC008");

    assert_eq!(taf.station.ident, "KBOS");
    assert_eq!(taf.issued_at, Some(utc(5, 11, 5, 47)));
    assert_eq!(taf.valid_from, Some(utc(5, 11, 6, 0)));
    assert_eq!(taf.valid_to, Some(utc(5, 12, 12, 0)));
    assert_eq!(taf.forecasts.len(), 1);

    let base = &taf.forecasts[0];
    assert_eq!(base.kind, ForecastKind::Base);
    assert_eq!(base.from, taf.valid_from);
    assert_eq!(base.to, taf.valid_to);

    let wind = base.wind.expect("wind should be decoded");
    assert_eq!(wind.direction, WindDirection::Bearing(140));
    assert_eq!(wind.speed, Some(12));
    assert_eq!(base.visibility.as_ref().map(Visibility::as_str), Some("4SM"));
    assert_eq!(base.weather, vec!["-RA", "BR"]);
    assert_eq!(
        base.clouds,
        vec![Cloud {
            coverage: Coverage::Overcast,
            height: Some(800),
            cloud_type: None
        }]
    );
}

#[test]
fn unknown_remark_is_kept() {
    let metar = decoder().metar("KSFO 071756Z 28015KT 10SM CLR 16/10 A2999 RMK XYZ123");
    assert_eq!(
        metar.remarks,
        vec![Remark {
            raw: "XYZ123".to_string(),
            description: "unknown remark code".to_string(),
            kind: RemarkKind::Unknown,
        }]
    );
}

#[test]
fn oversized_ceiling_is_unknown() {
    let metar = decoder().metar("KSFO 071756Z 28015KT 10SM CLR 16/10 A2999 RMK CIG 50000000");
    assert_eq!(metar.remarks.len(), 2);
    assert!(metar
        .remarks
        .iter()
        .all(|remark| remark.description == "unknown remark code"));
}

#[test]
fn decoding_is_deterministic() {
    let decoder = decoder();
    let raw = "KJFK 071751Z 31015G27KT 280V350 10SM FEW050 SCT250 M02/M18 A3012 RMK AO2 PK WND 30032/1715 SLP201 T10221178";
    assert_eq!(decoder.metar(raw), decoder.metar(raw));

    let raw = "TAF KJFK 071720Z 0718/0824 31015KT P6SM FEW050 FM080200 30010KT P6SM SKC";
    assert_eq!(decoder.taf(raw), decoder.taf(raw));
}

#[test]
fn well_formed_groups_are_all_handled() {
    let decoder = decoder();

    for raw in [
        "KJFK 071751Z 31015G27KT 280V350 10SM FEW050 SCT250 M02/M18 A3012 RMK AO2 PK WND 30032/1715 SLP201 T10221178",
        "EGLL 071750Z AUTO 24015KT 9999 4000NE R27L/1200V1800FT/U -SHRA BKN012CB 12/08 Q1008 NOSIG",
        "LOWI 071750Z VRB02KT 0800 R26/0600N FG VV002 M01/M01 Q1025",
        "KDEN 071753Z 00000KT 1 1/2SM BR OVC003 WS R12 04/03 A2992",
        "UUEE 071730Z 18003MPS CAVOK 15/09 Q1018 R24/CLRD70 NOSIG",
        "KORD 071751Z 27012KT 10SM WS020/05065KT SCT040 22/14 A2990",
        "METAR KLAX 071753Z 25008KT 6SM HZ SCT007 BKNCB015 19/14 A2991 RMK AO2",
    ] {
        let metar = decoder.metar(raw);
        assert!(metar.unhandled.is_empty(), "{raw}: {:?}", metar.unhandled);
        assert!(metar.observed_at.is_some(), "{raw}");
    }
}

#[test]
fn each_group_lands_in_one_place() {
    let metar = decoder().metar(
        "KDEN 071753Z 00000KT 1 1/2SM R35L/4500VP6000FT BR OVC003 WS ALL RWY 04/03 A2992 FOO",
    );

    assert!(metar.wind.is_some_and(|wind| wind.is_calm()));
    assert_eq!(metar.visibility.as_ref().map(Visibility::as_str), Some("1 1/2SM"));
    assert_eq!(metar.runway_conditions.len(), 1);
    assert_eq!(metar.weather, vec!["BR"]);
    assert_eq!(metar.clouds.len(), 1);
    assert_eq!(
        metar.wind_shear,
        vec![WindShear::Runway {
            phase: ShearPhase::All,
            runway: None
        }]
    );
    assert_eq!(metar.temperature, Some(4));
    assert!(metar.pressure.is_some());
    assert_eq!(metar.unhandled, vec!["FOO"]);
}

#[test]
fn only_first_pressure_is_kept() {
    let decoder = decoder();

    let metar = decoder.metar("KJFK 071751Z 31015KT 10SM CLR 10/M02 A2992 Q1013");
    let pressure = metar.pressure.expect("pressure should be decoded");
    assert_eq!(pressure.unit, PressureUnit::InchesOfMercury);
    assert!(metar.unhandled.is_empty());

    let metar = decoder.metar("EDDH 071750Z 27010KT 9999 FEW030 08/02 Q1013 A2992");
    let pressure = metar.pressure.expect("pressure should be decoded");
    assert_eq!(pressure.unit, PressureUnit::Hectopascal);
}

#[test]
fn forecast_periods_are_continuous() {
    let decoder = Decoder::at(utc(3, 7, 18, 0));
    let taf = decoder.taf(
        "TAF KJFK 071720Z 0718/0824 31015KT P6SM FEW050
         FM072200 30010KT P6SM SKC
         FM080600 VRB03KT P6SM SCT100
         FM081500 20008KT 5SM BR BKN015",
    );

    assert_eq!(taf.forecasts.len(), 4);

    for pair in taf.forecasts.windows(2) {
        assert!(pair[0].to.is_some());
        assert_eq!(pair[0].to, pair[1].from);
    }

    assert_eq!(taf.forecasts.last().and_then(|f| f.to), taf.valid_to);
    assert_eq!(taf.valid_to, Some(utc(3, 9, 0, 0)));
}

#[test]
fn trailing_interval_leaves_a_gap() {
    let decoder = Decoder::at(utc(5, 11, 6, 0));
    let taf = decoder.taf(
        "TAF KBOS 110547Z 1106/1212 14012KT P6SM SCT040
         FM111800 16010KT P6SM BKN030
         TEMPO 1120/1122 -RA",
    );

    let periods: Vec<_> = taf
        .forecasts
        .iter()
        .map(|f| (f.kind, f.from, f.to))
        .collect();
    assert_eq!(
        periods,
        vec![
            (ForecastKind::Base, Some(utc(5, 11, 6, 0)), Some(utc(5, 11, 18, 0))),
            (ForecastKind::From, Some(utc(5, 11, 18, 0)), Some(utc(5, 11, 20, 0))),
            (ForecastKind::Temporary, Some(utc(5, 11, 20, 0)), Some(utc(5, 11, 22, 0))),
        ]
    );

    // nothing covers the time between the interval and the end of validity
    assert_eq!(taf.valid_to, Some(utc(5, 12, 12, 0)));
    assert_eq!(taf.forecasts_at(utc(5, 11, 23, 0)).count(), 0);
    assert_eq!(taf.forecasts_at(utc(5, 12, 6, 0)).count(), 0);
    assert_eq!(taf.forecasts_at(utc(5, 11, 21, 0)).count(), 1);
}

#[test]
fn forecast_rolls_into_next_month() {
    let decoder = Decoder::at(utc(1, 31, 18, 0));
    let taf = decoder.taf("TAF KJFK 311720Z 3118/0124 31015KT P6SM FEW050 FM010600 VRB03KT P6SM SKC");

    assert_eq!(taf.issued_at, Some(utc(1, 31, 17, 20)));
    assert_eq!(taf.forecasts[1].from, Some(utc(2, 1, 6, 0)));
    assert_eq!(taf.valid_to, Some(utc(2, 2, 0, 0)));
}

#[test]
fn short_reports_keep_raw_text() {
    let decoder = decoder();

    let metar = decoder.metar("KSFO");
    assert_eq!(metar.raw, "KSFO");
    assert_eq!(metar, Metar {
        raw: "KSFO".to_string(),
        ..Default::default()
    });

    let taf = decoder.taf("TAF KBOS");
    assert_eq!(taf.raw, "TAF KBOS");
    assert!(taf.forecasts.is_empty());
}

#[test]
fn parses_from_str() {
    let metar: Metar = "KSFO 071756Z 28015G25KT 10SM FEW008 16/10 A2999"
        .parse()
        .unwrap();
    assert_eq!(metar.station.ident, "KSFO");

    let taf: Taf = "TAF KBOS 110547Z 1106/1212 14012KT 4SM -RA BR OVC008"
        .parse()
        .unwrap();
    assert_eq!(taf.forecasts.len(), 1);
}

/////////////////////////////////////////////////////////////////////////////
// Sources
/////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct Reports {
    reports: HashMap<(ReportKind, String), String>,
}

impl Reports {
    fn with(mut self, kind: ReportKind, station: &str, raw: &str) -> Self {
        self.reports
            .insert((kind, station.to_string()), raw.to_string());
        self
    }
}

impl Fetcher for Reports {
    fn fetch(&self, kind: ReportKind, station: &str) -> Result<String, Error> {
        if station == "XXXX" {
            return Err(Error::Fetch("connection refused".to_string()));
        }

        Ok(self
            .reports
            .get(&(kind, station.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

#[test]
fn fetches_and_decodes_reports() {
    let reports = Reports::default()
        .with(
            ReportKind::Metar,
            "KSFO",
            "KSFO 071756Z 28015G25KT 10SM FEW008 16/10 A2999\n",
        )
        .with(
            ReportKind::Taf,
            "KBOS",
            "TAF KBOS 071720Z 0718/0824 14012KT 4SM -RA BR OVC008",
        );
    let decoder = decoder();

    let metar = fetch_metar(&reports, &decoder, "ksfo").expect("METAR should be fetched");
    assert_eq!(metar.station.ident, "KSFO");
    assert_eq!(metar.raw, "KSFO 071756Z 28015G25KT 10SM FEW008 16/10 A2999");

    let taf = fetch_taf(&reports, &decoder, "KBOS").expect("TAF should be fetched");
    assert_eq!(taf.forecasts.len(), 1);
}

#[test]
fn fetching_reports_errors() {
    let reports = Reports::default();
    let decoder = decoder();

    assert_eq!(
        fetch_metar(&reports, &decoder, "SFO"),
        Err(Error::InvalidStation("SFO".to_string()))
    );
    assert_eq!(
        fetch_taf(&reports, &decoder, "KBOS"),
        Err(Error::NotFound {
            kind: ReportKind::Taf,
            station: "KBOS".to_string()
        })
    );
    assert_eq!(
        fetch_metar(&reports, &decoder, "XXXX"),
        Err(Error::Fetch("connection refused".to_string()))
    );
}
