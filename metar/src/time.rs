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

//! Resolution of the day and time groups of a report.
//!
//! Reports carry only the day of the month, thus year and month are taken
//! from a reference time. Observations and issue times lie in the past of the
//! reference, forecast times in the future of the issue time.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeDelta, TimeZone, Utc};

use crate::grammar::*;

/// Day of the month, hour and minute of a time group.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct DayTime {
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl DayTime {
    fn new(day: u32, hour: u32, minute: u32) -> Option<Self> {
        // hour 24 is valid and means midnight of the next day
        if (1..=31).contains(&day) && hour <= 24 && minute < 60 {
            Some(Self { day, hour, minute })
        } else {
            None
        }
    }

    /// Parses an observation or issue time `DDHHMMZ`.
    pub fn issue(token: &str) -> Option<Self> {
        let caps = TIME.captures(token)?;
        Self::new(digits!(caps, 1), digits!(caps, 2), digits!(caps, 3))
    }

    /// Parses the time of a change group `FMDDHHMM`.
    pub fn from_group(token: &str) -> Option<Self> {
        let caps = FROM.captures(token)?;
        Self::new(digits!(caps, 1), digits!(caps, 2), digits!(caps, 3))
    }

    /// Parses the time `DDHHMM` that follows a separated `FM`.
    pub fn from_time(token: &str) -> Option<Self> {
        let caps = FROM_TIME.captures(token)?;
        Self::new(digits!(caps, 1), digits!(caps, 2), digits!(caps, 3))
    }

    /// Parses a validity `DDHH/DDHH` into its start and end.
    pub fn validity(token: &str) -> Option<(Self, Self)> {
        let caps = VALIDITY.captures(token)?;
        Some((
            Self::new(digits!(caps, 1), digits!(caps, 2), 0)?,
            Self::new(digits!(caps, 3), digits!(caps, 4), 0)?,
        ))
    }

    /// Resolves a time that lies before the reference.
    ///
    /// If the reference day is before the parsed day, the time belongs to the
    /// previous month.
    pub fn past(&self, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let month = first_of_month(reference)?;

        if reference.day() < self.day {
            self.resolve(month.checked_sub_months(Months::new(1))?)
        } else {
            self.resolve(month)
        }
    }

    /// Resolves a time that lies after the anchor.
    ///
    /// If the anchor day is after the parsed day, the time belongs to the
    /// next month.
    pub fn future(&self, anchor: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let month = first_of_month(anchor)?;

        if anchor.day() > self.day {
            self.resolve(month.checked_add_months(Months::new(1))?)
        } else {
            self.resolve(month)
        }
    }

    // Adds the offsets to the first of the month so that hour 24 and days
    // beyond the end of a short month roll over into the next day or month.
    fn resolve(&self, month: NaiveDate) -> Option<DateTime<Utc>> {
        let offset = TimeDelta::try_days(self.day as i64 - 1)?
            + TimeDelta::try_hours(self.hour as i64)?
            + TimeDelta::try_minutes(self.minute as i64)?;

        let datetime = month.and_hms_opt(0, 0, 0)?.checked_add_signed(offset)?;
        Some(Utc.from_utc_datetime(&datetime))
    }
}

fn first_of_month(reference: DateTime<Utc>) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1)
}
