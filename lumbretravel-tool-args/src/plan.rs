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

//! Which arguments of which LumbreTravel tools carry dates, and how each one is sent upstream.

/// How a date argument is encoded before it is forwarded to the LumbreTravel API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateEncoding {
    /// `DD-MM-YYYY`, for program and activity payloads
    Canonical,
    /// `YYYY-MM-DDT03:00:00.000Z`, for the daily activities query
    Instant,
}

impl std::fmt::Display for DateEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canonical => write!(f, "canonical"),
            Self::Instant => write!(f, "instant"),
        }
    }
}

/// Where a date lives inside a tool's arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    /// A top-level argument
    Argument(&'static str),
    /// A field of every object in an array argument
    EachElement {
        array: &'static str,
        field: &'static str,
    },
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Argument(name) => write!(f, "{name}"),
            Self::EachElement { array, field } => write!(f, "{array}[].{field}"),
        }
    }
}

/// A single date-bearing argument of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateField {
    path: FieldPath,
    encoding: DateEncoding,
}

impl DateField {
    const fn argument(name: &'static str, encoding: DateEncoding) -> Self {
        Self {
            path: FieldPath::Argument(name),
            encoding,
        }
    }

    const fn each_element(array: &'static str, field: &'static str, encoding: DateEncoding) -> Self {
        Self {
            path: FieldPath::EachElement { array, field },
            encoding,
        }
    }

    /// Get the location of this date in the tool arguments
    pub fn path(&self) -> FieldPath {
        self.path
    }

    /// Get how this date is encoded upstream
    pub fn encoding(&self) -> DateEncoding {
        self.encoding
    }
}

/// The date-bearing arguments of one tool
#[derive(Debug)]
pub struct ToolDatePlan {
    tool: &'static str,
    fields: &'static [DateField],
}

impl ToolDatePlan {
    /// Get the name of the tool
    pub fn tool(&self) -> &'static str {
        self.tool
    }

    /// Get the date-bearing arguments of the tool, in the order they are prepared
    pub fn fields(&self) -> &'static [DateField] {
        self.fields
    }
}

const PROGRAM_DATES: &[DateField] = &[
    DateField::argument("startDate", DateEncoding::Canonical),
    DateField::argument("endDate", DateEncoding::Canonical),
];

const ACTIVITY_DATES: &[DateField] = &[DateField::each_element(
    "activities",
    "date",
    DateEncoding::Canonical,
)];

const DAILY_ACTIVITIES_DATE: &[DateField] =
    &[DateField::argument("date", DateEncoding::Instant)];

static PLANS: [ToolDatePlan; 6] = [
    ToolDatePlan {
        tool: "get_programs_by_date_range",
        fields: PROGRAM_DATES,
    },
    ToolDatePlan {
        tool: "daily_activities",
        fields: DAILY_ACTIVITIES_DATE,
    },
    ToolDatePlan {
        tool: "create_program",
        fields: PROGRAM_DATES,
    },
    ToolDatePlan {
        tool: "update_program",
        fields: PROGRAM_DATES,
    },
    ToolDatePlan {
        tool: "add_activities",
        fields: ACTIVITY_DATES,
    },
    ToolDatePlan {
        tool: "update_activities",
        fields: ACTIVITY_DATES,
    },
];

/// Get the date plan of `tool`, or `None` if the tool takes no dates.
pub fn plan_for(tool: &str) -> Option<&'static ToolDatePlan> {
    PLANS.iter().find(|plan| plan.tool == tool)
}

/// Iterate over the date plans of every tool that takes dates.
pub fn plans() -> impl Iterator<Item = &'static ToolDatePlan> {
    PLANS.iter()
}
