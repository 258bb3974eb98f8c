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

//! Group classification.
//!
//! Many groups of a report share letters and digits, e.g. `WS020/05065KT` is
//! a wind shear and not a wind, `BKNCB030` is a cloud and not a weather
//! phenomenon. Thus the tokens are classified by an ordered list of [rules]
//! where the first matching rule wins:
//!
//! 1. special codes (`AUTO`, `NOSIG`, `CAVOK`, ...)
//! 2. wind, including a direction variation that follows (`24010KT 200V270`)
//! 3. wind shear (`WS ALL RWY`, `WS R12`, `WS020/05065KT`)
//! 4. visibility, including split fractions (`1 1/2SM`)
//! 5. vertical visibility (`VV003`)
//! 6. runway visual range and state (`R28L/2600FT`, `R27/CLRD70`)
//! 7. weather phenomena (`-RA`, `VCTS`) that aren't shaped like a cloud
//! 8. clouds (`BKN200`)
//! 9. temperature and dew point (`16/10`, `M02/`)
//! 10. pressure (`A2992`, `Q1013`), in observations only
//!
//! A rule can span up to three tokens and reports how many it consumed.
//!
//! [rules]: GroupKind

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fields::*;
use crate::grammar::*;

/// A classified group.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Group {
    Special(SpecialCode),
    Wind(Wind),
    /// A direction variation that doesn't follow a wind group.
    WindVariation(WindVariation),
    WindShear(WindShear),
    Visibility(Visibility),
    VerticalVisibility(VerticalVisibility),
    Runway(RunwayCondition),
    Weather(String),
    Cloud(Cloud),
    /// Temperature and dew point in degrees Celsius.
    Temperature {
        temperature: i8,
        dew_point: Option<i8>,
    },
    Pressure(Pressure),
}

impl Group {
    pub fn kind(&self) -> GroupKind {
        match self {
            Self::Special(_) => GroupKind::Special,
            Self::Wind(_) | Self::WindVariation(_) => GroupKind::Wind,
            Self::WindShear(_) => GroupKind::WindShear,
            Self::Visibility(_) => GroupKind::Visibility,
            Self::VerticalVisibility(_) => GroupKind::VerticalVisibility,
            Self::Runway(_) => GroupKind::Runway,
            Self::Weather(_) => GroupKind::Weather,
            Self::Cloud(_) => GroupKind::Cloud,
            Self::Temperature { .. } => GroupKind::Temperature,
            Self::Pressure(_) => GroupKind::Pressure,
        }
    }
}

/// The kinds of groups in the order they are tried.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupKind {
    Special,
    Wind,
    WindShear,
    Visibility,
    VerticalVisibility,
    Runway,
    Weather,
    Cloud,
    Temperature,
    Pressure,
}

/// The part of a report the tokens are classified in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Context {
    /// The main body of a METAR.
    Observation,
    /// The body of a TAF period.
    Forecast,
}

/// The result of classifying the tokens at the cursor.
#[derive(Clone, PartialEq, Debug)]
pub enum Classified<'a> {
    Group(Group),
    /// A token no rule matches.
    Unhandled(&'a str),
}

type Recognizer = fn(&[&str]) -> Option<(Group, usize)>;

struct Rule {
    kind: GroupKind,
    contexts: &'static [Context],
    recognize: Recognizer,
}

const ANY: &[Context] = &[Context::Observation, Context::Forecast];

static RULES: &[Rule] = &[
    Rule {
        kind: GroupKind::Special,
        contexts: ANY,
        recognize: special,
    },
    Rule {
        kind: GroupKind::Wind,
        contexts: ANY,
        recognize: wind,
    },
    Rule {
        kind: GroupKind::WindShear,
        contexts: ANY,
        recognize: |tokens| {
            WindShear::recognize(tokens).map(|(ws, n)| (Group::WindShear(ws), n))
        },
    },
    Rule {
        kind: GroupKind::Visibility,
        contexts: ANY,
        recognize: |tokens| {
            Visibility::recognize(tokens).map(|(vis, n)| (Group::Visibility(vis), n))
        },
    },
    Rule {
        kind: GroupKind::VerticalVisibility,
        contexts: ANY,
        recognize: |tokens| single(tokens, Group::VerticalVisibility),
    },
    Rule {
        kind: GroupKind::Runway,
        contexts: ANY,
        recognize: |tokens| single(tokens, Group::Runway),
    },
    Rule {
        kind: GroupKind::Weather,
        contexts: ANY,
        recognize: weather,
    },
    Rule {
        kind: GroupKind::Cloud,
        contexts: ANY,
        recognize: |tokens| single(tokens, Group::Cloud),
    },
    Rule {
        kind: GroupKind::Temperature,
        contexts: ANY,
        recognize: temperature,
    },
    Rule {
        kind: GroupKind::Pressure,
        contexts: &[Context::Observation],
        recognize: |tokens| single(tokens, Group::Pressure),
    },
];

/// Classifies the tokens at the start of `tokens`.
///
/// Returns the group of the first matching rule and the number of tokens it
/// spans, or `None` if no rule of the context matches.
pub fn classify(tokens: &[&str], context: Context) -> Option<(Group, usize)> {
    RULES
        .iter()
        .filter(|rule| rule.contexts.contains(&context))
        .find_map(|rule| (rule.recognize)(tokens))
}

/// Iterator that classifies a sequence of tokens.
///
/// Every token is part of exactly one item, either as part of a group or as
/// unhandled token.
pub struct Groups<'a, 't> {
    tokens: &'t [&'a str],
    context: Context,
    pos: usize,
}

impl<'a, 't> Groups<'a, 't> {
    pub fn new(tokens: &'t [&'a str], context: Context) -> Self {
        Self {
            tokens,
            context,
            pos: 0,
        }
    }
}

impl<'a> Iterator for Groups<'a, '_> {
    type Item = Classified<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.tokens.get(self.pos..).filter(|t| !t.is_empty())?;

        match classify(remaining, self.context) {
            Some((group, n)) => {
                trace!("{:?} group {:?}", group.kind(), &remaining[..n]);
                self.pos += n.max(1);
                Some(Classified::Group(group))
            }
            None => {
                self.pos += 1;
                Some(Classified::Unhandled(remaining[0]))
            }
        }
    }
}

/////////////////////////////////////////////////////////////////////////////
// Recognizers
/////////////////////////////////////////////////////////////////////////////

fn single<T, F>(tokens: &[&str], group: F) -> Option<(Group, usize)>
where
    T: std::str::FromStr,
    F: Fn(T) -> Group,
{
    tokens
        .first()
        .and_then(|token| token.parse::<T>().ok())
        .map(|value| (group(value), 1))
}

fn special(tokens: &[&str]) -> Option<(Group, usize)> {
    single(tokens, Group::Special)
}

fn wind(tokens: &[&str]) -> Option<(Group, usize)> {
    Wind::recognize(tokens)
        .map(|(wind, n)| (Group::Wind(wind), n))
        .or_else(|| single(tokens, Group::WindVariation))
}

fn weather(tokens: &[&str]) -> Option<(Group, usize)> {
    tokens
        .first()
        .filter(|token| is_weather(token))
        .map(|token| (Group::Weather(token.to_string()), 1))
}

fn temperature(tokens: &[&str]) -> Option<(Group, usize)> {
    let token = tokens.first()?;

    fn celsius(sign: &str, value: &str) -> i8 {
        let value = value.parse::<i8>().unwrap_or_default();
        if sign == "M" {
            -value
        } else {
            value
        }
    }

    if let Some(caps) = TEMPERATURE.captures(token) {
        return Some((
            Group::Temperature {
                temperature: celsius(&caps[1], &caps[2]),
                dew_point: Some(celsius(&caps[3], &caps[4])),
            },
            1,
        ));
    }

    TEMPERATURE_ONLY.captures(token).map(|caps| {
        (
            Group::Temperature {
                temperature: celsius(&caps[1], &caps[2]),
                dew_point: None,
            },
            1,
        )
    })
}
