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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grammar::PRESSURE;
use crate::Error;

const HPA_PER_INHG: f64 = 33.8639;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureUnit {
    Hectopascal,
    InchesOfMercury,
}

/// Altimeter setting (QNH).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pressure {
    pub value: f64,
    pub unit: PressureUnit,
}

impl Pressure {
    pub fn hpa(&self) -> f64 {
        match self.unit {
            PressureUnit::Hectopascal => self.value,
            PressureUnit::InchesOfMercury => self.value * HPA_PER_INHG,
        }
    }

    pub fn inhg(&self) -> f64 {
        match self.unit {
            PressureUnit::Hectopascal => self.value / HPA_PER_INHG,
            PressureUnit::InchesOfMercury => self.value,
        }
    }
}

impl FromStr for Pressure {
    type Err = Error;

    /// Parses `Qnnnn` in hectopascal or `Annnn` in hundredths of inches of
    /// mercury.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = PRESSURE
            .captures(s)
            .ok_or_else(|| Error::unexpected("pressure", s))?;

        let value = digits!(caps, 2) as f64;

        match &caps[1] {
            "Q" => Ok(Self {
                value,
                unit: PressureUnit::Hectopascal,
            }),
            _ => Ok(Self {
                value: value / 100.0,
                unit: PressureUnit::InchesOfMercury,
            }),
        }
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            PressureUnit::Hectopascal => write!(f, "{:.0} hPa", self.value),
            PressureUnit::InchesOfMercury => write!(f, "{:.2} inHg", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inches_of_mercury() {
        let altimeter = "A2992".parse::<Pressure>().unwrap();
        assert_eq!(altimeter.unit, PressureUnit::InchesOfMercury);
        assert!((altimeter.value - 29.92).abs() < 1e-9);
        assert!((altimeter.hpa() - 1013.2).abs() < 0.1);
        assert_eq!(altimeter.to_string(), "29.92 inHg");
    }

    #[test]
    fn parses_hectopascal() {
        let qnh = "Q1013".parse::<Pressure>().unwrap();
        assert_eq!(qnh.unit, PressureUnit::Hectopascal);
        assert_eq!(qnh.value, 1013.0);
        assert!((qnh.inhg() - 29.91).abs() < 0.01);
        assert_eq!(qnh.to_string(), "1013 hPa");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!("A299".parse::<Pressure>().is_err());
        assert!("Q10130".parse::<Pressure>().is_err());
        assert!("SLP132".parse::<Pressure>().is_err());
    }
}
