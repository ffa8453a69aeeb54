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

use crate::canonical::{CanonicalDate, InstantWithOffset};
use crate::err::DateError;
use crate::format::DateFormat;
use crate::input::RawDateInput;

/// The UTC hour of day every [`InstantWithOffset`] is fixed at.
pub const INSTANT_HOUR: u32 = 3;

/// Encode a `DD-MM-YYYY` date as the instant at 03:00:00.000 UTC on that day.
///
/// Only the canonical format is accepted; the other formats [`normalize_date`](crate::normalize_date)
/// understands are rejected here.
///
/// # Errors
///
/// - [`DateError::NotAString`] if `raw` is not a string
/// - [`DateError::Conversion`] if the string is not a valid `DD-MM-YYYY` date
pub fn to_utc_instant_at_hour3<'a>(
    raw: impl Into<RawDateInput<'a>>,
) -> Result<InstantWithOffset, DateError> {
    let raw = raw.into();
    let text = raw
        .as_text()
        .map_err(|found| DateError::not_a_string(found, Some(DateFormat::Canonical.pattern())))?;

    let date = DateFormat::Canonical
        .parse_strict(text)
        .map_err(|cause| DateError::conversion(text, cause))?;
    let instant = CanonicalDate::new(date).instant_at_hour3();
    tracing::debug!(input = text, %instant, "encoded date as instant");
    Ok(instant)
}
