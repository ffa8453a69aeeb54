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

//! This library normalizes the dates carried by LumbreTravel MCP tool arguments.
//!
//! Tool arguments come from an AI assistant and may spell the same calendar day in several
//! ways. [`normalize_date`] accepts a fixed, ordered set of strict textual formats and produces a
//! [`CanonicalDate`], whose text is always `DD-MM-YYYY`, the form the LumbreTravel API expects in
//! program and activity payloads.
//!
//! [`to_utc_instant_at_hour3`] turns a `DD-MM-YYYY` string into an [`InstantWithOffset`]: the
//! ISO-8601 instant at `03:00:00.000Z` on that day, used by day-bucketed queries that expect a
//! timestamp rather than a bare date.
//!
//! Inputs are accepted as a [`RawDateInput`], a tagged view over whatever the caller received
//! (a JSON value, a plain string, or nothing at all). Every failure is a [`DateError`] of kind
//! [`ErrorKind::InvalidArgument`].

pub mod canonical;
pub mod err;
pub mod format;
pub mod input;
mod instant;
mod normalize;

pub use canonical::{CanonicalDate, InstantWithOffset};
pub use err::{DateError, ErrorKind};
pub use format::DateFormat;
pub use input::{RawDateInput, ValueKind};
pub use instant::{to_utc_instant_at_hour3, INSTANT_HOUR};
pub use normalize::normalize_date;
