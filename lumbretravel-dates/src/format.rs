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

//! The strict textual date formats accepted in tool arguments.
//!
//! Each format is matched by hand rather than through a general purpose parser: every numeric
//! field has a fixed width, the whole input must be consumed, and no component is ever rolled
//! over into its neighbour (`2024-13-20` is rejected, not read as January 2025).

use crate::err::{Component, ParseFailure};
use chrono::NaiveDate;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A textual date format.
pub enum DateFormat {
    /// `YYYY-MM-DD`
    IsoDate,
    /// `MM/DD/YYYY`
    UsSlashed,
    /// `DD MonthName YYYY`, with an English month name
    DayMonthName,
    /// `YYYY-MM-DDTHH:mm:ss.sssZ`
    IsoInstant,
    /// `DD-MM-YYYY`, the canonical form
    Canonical,
}

impl DateFormat {
    /// Every accepted format, in the order they are tried. The first strict match wins.
    pub const ORDERED: [DateFormat; 5] = [
        DateFormat::IsoDate,
        DateFormat::UsSlashed,
        DateFormat::DayMonthName,
        DateFormat::IsoInstant,
        DateFormat::Canonical,
    ];

    /// The human readable pattern of this format
    pub fn pattern(self) -> &'static str {
        match self {
            Self::IsoDate => "YYYY-MM-DD",
            Self::UsSlashed => "MM/DD/YYYY",
            Self::DayMonthName => "DD MonthName YYYY",
            Self::IsoInstant => "YYYY-MM-DDTHH:mm:ss.sssZ",
            Self::Canonical => "DD-MM-YYYY",
        }
    }

    /// Strictly match `input` against this format and return the calendar date it denotes.
    ///
    /// Time of day and offset, when the format has them, are validated and then discarded.
    pub fn parse_strict(self, input: &str) -> Result<NaiveDate, ParseFailure> {
        let mut scanner = Scanner::new(input, self.pattern());
        let (year, month, day) = match self {
            Self::IsoDate => {
                let year = scanner.digits(4)?;
                scanner.literal('-')?;
                let month = scanner.digits(2)?;
                scanner.literal('-')?;
                let day = scanner.digits(2)?;
                (year, month, day)
            }
            Self::UsSlashed => {
                let month = scanner.digits(2)?;
                scanner.literal('/')?;
                let day = scanner.digits(2)?;
                scanner.literal('/')?;
                let year = scanner.digits(4)?;
                (year, month, day)
            }
            Self::DayMonthName => {
                let day = scanner.digits(2)?;
                scanner.literal(' ')?;
                let month = scanner.month_name()?;
                scanner.literal(' ')?;
                let year = scanner.digits(4)?;
                (year, month, day)
            }
            Self::IsoInstant => {
                let year = scanner.digits(4)?;
                scanner.literal('-')?;
                let month = scanner.digits(2)?;
                scanner.literal('-')?;
                let day = scanner.digits(2)?;
                scanner.literal('T')?;
                let hour = scanner.digits(2)?;
                scanner.literal(':')?;
                let minute = scanner.digits(2)?;
                scanner.literal(':')?;
                let second = scanner.digits(2)?;
                scanner.literal('.')?;
                let _millis = scanner.digits(3)?;
                scanner.zero_offset()?;
                check_range(Component::Hour, hour, 0, 23)?;
                check_range(Component::Minute, minute, 0, 59)?;
                check_range(Component::Second, second, 0, 59)?;
                (year, month, day)
            }
            Self::Canonical => {
                let day = scanner.digits(2)?;
                scanner.literal('-')?;
                let month = scanner.digits(2)?;
                scanner.literal('-')?;
                let year = scanner.digits(4)?;
                (year, month, day)
            }
        };
        scanner.finish()?;
        calendar_date(year, month, day)
    }
}

impl std::fmt::Display for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern())
    }
}

fn check_range(component: Component, value: u32, min: u32, max: u32) -> Result<(), ParseFailure> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParseFailure::OutOfRange { component, value })
    }
}

fn calendar_date(year: u32, month: u32, day: u32) -> Result<NaiveDate, ParseFailure> {
    check_range(Component::Month, month, 1, 12)?;
    check_range(Component::Day, day, 1, 31)?;
    // A four digit year always fits in an `i32`
    let year = i32::try_from(year).unwrap_or(i32::MAX);
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ParseFailure::NonexistentDay { year, month, day })
}

/// Consumes an input from the left, one fixed-shape piece at a time.
struct Scanner<'a> {
    rest: &'a str,
    pattern: &'static str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, pattern: &'static str) -> Self {
        Self {
            rest: input,
            pattern,
        }
    }

    fn mismatch(&self) -> ParseFailure {
        ParseFailure::PatternMismatch {
            pattern: self.pattern,
        }
    }

    /// Exactly `width` ASCII digits. No sign, no whitespace.
    fn digits(&mut self, width: usize) -> Result<u32, ParseFailure> {
        let (head, tail) = self
            .rest
            .split_at_checked(width)
            .ok_or_else(|| self.mismatch())?;
        if !head.bytes().all(|b| b.is_ascii_digit()) {
            return Err(self.mismatch());
        }
        let value = head.parse().map_err(|_| self.mismatch())?;
        self.rest = tail;
        Ok(value)
    }

    fn literal(&mut self, c: char) -> Result<(), ParseFailure> {
        self.rest = self.rest.strip_prefix(c).ok_or_else(|| self.mismatch())?;
        Ok(())
    }

    /// A full English month name, ignoring ASCII case.
    fn month_name(&mut self) -> Result<u32, ParseFailure> {
        for (month, name) in (1..).zip(MONTH_NAMES) {
            if let Some((head, tail)) = self.rest.split_at_checked(name.len()) {
                if head.eq_ignore_ascii_case(name) {
                    self.rest = tail;
                    return Ok(month);
                }
            }
        }
        Err(self.mismatch())
    }

    /// `Z` in either case, or a numeric offset (`+HH`, `+HH:MM` or `+HHMM`) that denotes UTC.
    fn zero_offset(&mut self) -> Result<(), ParseFailure> {
        if let Some(tail) = self.rest.strip_prefix(['Z', 'z']) {
            self.rest = tail;
            return Ok(());
        }
        let start = self.rest;
        self.rest = start
            .strip_prefix(['+', '-'])
            .ok_or_else(|| self.mismatch())?;
        let hours = self.digits(2)?;
        let mut minutes_scanner = Scanner::new(
            self.rest.strip_prefix(':').unwrap_or(self.rest),
            self.pattern,
        );
        // Minutes are optional; a dangling `:` is left for `finish` to reject
        let minutes = match minutes_scanner.digits(2) {
            Ok(minutes) => {
                self.rest = minutes_scanner.rest;
                minutes
            }
            Err(_) => 0,
        };
        if hours == 0 && minutes == 0 {
            Ok(())
        } else {
            let consumed = start.len() - self.rest.len();
            Err(ParseFailure::NonZeroOffset {
                offset: start.get(..consumed).unwrap_or(start).to_string(),
            })
        }
    }

    fn finish(self) -> Result<(), ParseFailure> {
        if self.rest.is_empty() {
            Ok(())
        } else {
            Err(self.mismatch())
        }
    }
}
