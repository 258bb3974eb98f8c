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

use crate::grammar::*;
use crate::Error;

/// Report modifiers and condition codes that stand on their own.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpecialCode {
    NoSignificantChange,
    Automated,
    Corrected,
    CorrectedFirst,
    NoSignificantClouds,
    NoCloudsDetected,
    Cavok,
    RoutineDelayed,
}

impl SpecialCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoSignificantChange => "NOSIG",
            Self::Automated => "AUTO",
            Self::Corrected => "COR",
            Self::CorrectedFirst => "CCA",
            Self::NoSignificantClouds => "NSC",
            Self::NoCloudsDetected => "NCD",
            Self::Cavok => "CAVOK",
            Self::RoutineDelayed => "RTD",
        }
    }

    pub fn description(&self) -> &'static str {
        lookup(SPECIAL_CONDITIONS, self.code()).unwrap_or_default()
    }

    /// Returns `true` for the codes that mark a corrected report.
    pub fn is_correction(&self) -> bool {
        matches!(self, Self::Corrected | Self::CorrectedFirst)
    }
}

impl FromStr for SpecialCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOSIG" => Ok(Self::NoSignificantChange),
            "AUTO" => Ok(Self::Automated),
            "COR" => Ok(Self::Corrected),
            "CCA" => Ok(Self::CorrectedFirst),
            "NSC" => Ok(Self::NoSignificantClouds),
            "NCD" => Ok(Self::NoCloudsDetected),
            "CAVOK" => Ok(Self::Cavok),
            "RTD" => Ok(Self::RoutineDelayed),
            _ => Err(Error::unexpected("special condition", s)),
        }
    }
}

impl fmt::Display for SpecialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_description() {
        for (code, description) in SPECIAL_CONDITIONS {
            let special = code.parse::<SpecialCode>().unwrap();
            assert_eq!(special.code(), *code);
            assert_eq!(special.description(), *description);
        }
    }

    #[test]
    fn corrections() {
        assert!(SpecialCode::Corrected.is_correction());
        assert!(SpecialCode::CorrectedFirst.is_correction());
        assert!(!SpecialCode::Automated.is_correction());
        assert!("AMD".parse::<SpecialCode>().is_err());
    }
}
