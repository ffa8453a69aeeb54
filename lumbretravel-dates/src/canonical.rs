/*
 * Copyright LumbreTravel Contributors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *      https://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, TimeDelta, Utc};
use serde::{Serialize, Serializer};

use crate::instant::INSTANT_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A validated calendar date whose text is always `DD-MM-YYYY`.
///
/// Only [`normalize_date`](crate::normalize_date) produces values of this type.
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    pub(crate) fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the calendar date
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Get the instant at 03:00:00.000 UTC on this date.
    ///
    /// This is what [`to_utc_instant_at_hour3`](crate::to_utc_instant_at_hour3) returns for the
    /// text of this date, without the round trip through a string.
    pub fn instant_at_hour3(&self) -> InstantWithOffset {
        let time = NaiveTime::default() + TimeDelta::hours(i64::from(INSTANT_HOUR));
        InstantWithOffset(self.0.and_time(time).and_utc())
    }
}

impl std::fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%d-%m-%Y"))
    }
}

impl From<CanonicalDate> for String {
    fn from(date: CanonicalDate) -> Self {
        date.to_string()
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A UTC instant at 03:00:00.000 on a canonical date.
///
/// Its text is ISO-8601 with millisecond precision and a `Z` suffix, e.g.
/// `2024-03-20T03:00:00.000Z`. The fixed hour keeps the calendar day stable when a consumer
/// reinterprets the instant in a timezone up to three hours behind UTC.
pub struct InstantWithOffset(DateTime<Utc>);

impl InstantWithOffset {
    /// Get the instant
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl std::fmt::Display for InstantWithOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<InstantWithOffset> for String {
    fn from(instant: InstantWithOffset) -> Self {
        instant.to_string()
    }
}

impl Serialize for InstantWithOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
