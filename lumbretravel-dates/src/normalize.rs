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

use chrono::Datelike;

use crate::canonical::CanonicalDate;
use crate::err::DateError;
use crate::format::DateFormat;
use crate::input::RawDateInput;

/// Normalize a caller-supplied date into a [`CanonicalDate`].
///
/// The input must be a string matching one of [`DateFormat::ORDERED`] exactly; the first format
/// that matches wins. Time of day and offset are discarded.
///
/// # Errors
///
/// - [`DateError::NotAString`] if `raw` is not a string (including a missing argument)
/// - [`DateError::InvalidFormat`] if no format matches, or the date is not on the calendar
pub fn normalize_date<'a>(raw: impl Into<RawDateInput<'a>>) -> Result<CanonicalDate, DateError> {
    let raw = raw.into();
    let text = raw
        .as_text()
        .map_err(|found| DateError::not_a_string(found, None))?;

    let (format, date) = DateFormat::ORDERED
        .into_iter()
        .find_map(|format| match format.parse_strict(text) {
            Ok(date) => Some((format, date)),
            Err(reason) => {
                tracing::trace!(%format, %reason, input = text, "date format did not match");
                None
            }
        })
        .ok_or_else(|| DateError::invalid_format(text))?;

    // Checked again here so the canonical form never depends on the matcher's own range checks
    if !(1..=12).contains(&date.month()) || !(1..=31).contains(&date.day()) {
        return Err(DateError::invalid_format(text));
    }

    let canonical = CanonicalDate::new(date);
    tracing::debug!(%format, input = text, %canonical, "normalized date");
    Ok(canonical)
}
