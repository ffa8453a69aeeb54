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

//! This library prepares the arguments of LumbreTravel MCP tool calls before they are forwarded to
//! the LumbreTravel API.
//!
//! Some tools take dates (program ranges, activity days, the day of a daily activities query).
//! The assistant may spell those dates in several formats; the API only understands `DD-MM-YYYY`
//! in payloads and a fixed-offset UTC instant for the daily activities query. The [`plan`] module
//! lists which arguments of which tools are dates, and an [`ArgumentPreparer`] rewrites them in
//! place using `lumbretravel-dates`.

pub mod err;
pub mod plan;
mod prepare;

#[cfg(feature = "cli")]
mod cli;

pub use err::ArgumentError;
pub use plan::{plan_for, plans, DateEncoding, DateField, FieldPath, ToolDatePlan};
pub use prepare::{ArgumentPreparer, PrepareConfig, Rewrite};

#[cfg(feature = "cli")]
pub use cli::{CliArgs, CliError, ErrorFormat};

pub use lumbretravel_dates as dates;
