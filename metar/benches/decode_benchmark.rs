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

use std::hint::black_box;

use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use metar::Decoder;

const METAR: &str = "KSFO 071756Z 28015G25KT 250V310 1 1/2SM R28L/2600FT -RA BR FEW008 BKN200 16/10 A2999 RMK AO2 PK WND 28045/1715 SLP156 T01560100 10172 21044 58033";
const TAF: &str = "TAF KBOS 071720Z 0718/0824 14012KT 4SM -RA BR OVC008
    TEMPO 0718/0722 2SM RA OVC005
    FM072200 16010KT P6SM BKN030 PROB30 TSRA BKN020CB
    FM080600 VRB03KT P6SM SKC
    BECMG 0812/0814 31015G25KT";

fn decoder() -> Decoder {
    Decoder::at(
        Utc.with_ymd_and_hms(2024, 3, 7, 18, 0, 0)
            .single()
            .expect("reference time should be valid"),
    )
}

/// Benchmark decoding single reports
fn bench_reports(c: &mut Criterion) {
    let decoder = decoder();

    c.bench_function("metar", |b| b.iter(|| decoder.metar(black_box(METAR))));
    c.bench_function("taf", |b| b.iter(|| decoder.taf(black_box(TAF))));
}

/// Benchmark decoding an archive of reports
fn bench_archive(c: &mut Criterion) {
    let decoder = decoder();
    let archive: Vec<&str> = std::iter::repeat(METAR).take(1_000).collect();
    let mut group = c.benchmark_group("archive");

    // Tell Criterion the throughput for reports/s measurement
    group.throughput(Throughput::Elements(archive.len() as u64));

    group.bench_function("metars", |b| {
        b.iter(|| {
            let unhandled: usize = archive
                .iter()
                .map(|raw| decoder.metar(raw).unhandled.len())
                .sum();
            black_box(unhandled)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_reports, bench_archive);
criterion_main!(benches);
