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

use super::input::ValueKind;
use miette::Diagnostic;
use thiserror::Error;

/// The category of a [`DateError`].
///
/// Every date failure is caused by malformed caller input, so there is a single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied a value that is not an acceptable date
    InvalidArgument,
}

impl ErrorKind {
    /// The JSON-RPC error code an MCP server reports for this kind (`InvalidParams`).
    pub fn json_rpc_code(self) -> i32 {
        match self {
            Self::InvalidArgument => -32602,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}

/// The type of errors that may be encountered while normalizing or encoding a date
#[derive(Error, Debug, Diagnostic)]
pub enum DateError {
    /// The input was not a string
    #[error(transparent)]
    #[diagnostic(
        code(date_error::not_a_string),
        help("Found a value of type {}. Pass the date as a string, e.g. \"20-03-2024\".", .0.found)
    )]
    NotAString(NotAStringError),

    /// The input string did not strictly match any accepted date format
    #[error("Invalid date format: {}", .0.literal)]
    #[diagnostic(
        code(date_error::invalid_date_format),
        help("Accepted formats are YYYY-MM-DD, MM/DD/YYYY, DD MonthName YYYY, YYYY-MM-DDTHH:mm:ss.sssZ and DD-MM-YYYY")
    )]
    InvalidFormat(InvalidLiteralError),

    /// The input string could not be converted into an instant
    #[error("Error converting date: '{literal}'")]
    #[diagnostic(
        code(date_error::conversion),
        help("Expected a date in DD-MM-YYYY format")
    )]
    Conversion {
        literal: String,
        #[source]
        cause: ParseFailure,
    },
}

impl DateError {
    pub(crate) fn not_a_string(found: ValueKind, expected_format: Option<&'static str>) -> Self {
        Self::NotAString(NotAStringError {
            found,
            expected_format,
        })
    }

    pub(crate) fn invalid_format(literal: &str) -> Self {
        Self::InvalidFormat(InvalidLiteralError {
            literal: literal.to_string(),
        })
    }

    pub(crate) fn conversion(literal: &str, cause: ParseFailure) -> Self {
        Self::Conversion {
            literal: literal.to_string(),
            cause,
        }
    }

    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }

    /// The rejected input, when the input was a string
    pub fn offending_value(&self) -> Option<&str> {
        match self {
            Self::NotAString(_) => None,
            Self::InvalidFormat(e) => Some(&e.literal),
            Self::Conversion { literal, .. } => Some(literal),
        }
    }
}

#[derive(Debug)]
pub struct NotAStringError {
    found: ValueKind,
    expected_format: Option<&'static str>,
}

impl NotAStringError {
    /// The kind of value found instead of a string
    pub fn found(&self) -> ValueKind {
        self.found
    }
}

impl std::fmt::Display for NotAStringError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.expected_format {
            Some(format) => write!(f, "Date must be a string in {format} format"),
            None => write!(f, "Date must be a string"),
        }
    }
}

impl std::error::Error for NotAStringError {}

#[derive(Debug)]
pub struct InvalidLiteralError {
    literal: String,
}

/// A calendar or clock component of a parsed date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Day,
    Month,
    Hour,
    Minute,
    Second,
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Month => write!(f, "month"),
            Self::Hour => write!(f, "hour"),
            Self::Minute => write!(f, "minute"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Why a single strict format did not accept an input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The input does not have the shape of the pattern
    #[error("input does not match `{pattern}`")]
    PatternMismatch { pattern: &'static str },
    /// A component has the right shape but is outside its range
    #[error("{component} {value} is out of range")]
    OutOfRange { component: Component, value: u32 },
    /// Day and month are in range but the day does not exist in that month and year
    #[error("{day:02}-{month:02}-{year:04} is not a calendar day")]
    NonexistentDay { year: i32, month: u32, day: u32 },
    /// An ISO instant carries an offset other than UTC
    #[error("offset `{offset}` is not UTC")]
    NonZeroOffset { offset: String },
}
