// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! Decoded values of the groups of a report.

mod cloud;
mod pressure;
mod runway;
mod special;
mod station;
mod visibility;
mod wind;

pub use cloud::{Cloud, CloudType, Coverage};
pub use pressure::{Pressure, PressureUnit};
pub use runway::{RangePrefix, RangeUnit, RunwayCondition, RunwayReport, Trend};
pub use special::SpecialCode;
pub use station::{SiteInfo, Station};
pub use visibility::{VerticalVisibility, Visibility, VisibilityKind};
pub use wind::{ShearPhase, SpeedUnit, Wind, WindDirection, WindShear, WindVariation};
