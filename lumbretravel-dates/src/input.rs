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

use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The shape of a value received where a date was expected.
pub enum ValueKind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Get the `ValueKind` of a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// A borrowed view of a caller-supplied value that should hold a date.
///
/// Tool arguments are untyped, so a date argument may be missing, or may be any JSON value.
/// `RawDateInput` keeps that distinction explicit until the string check at the boundary.
pub enum RawDateInput<'a> {
    /// The argument was absent
    Undefined,
    /// The argument was a JSON value
    Json(&'a Value),
    /// The argument was already known to be text
    Text(&'a str),
}

impl<'a> RawDateInput<'a> {
    /// The shape of this input
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Json(v) => ValueKind::of(v),
            Self::Text(_) => ValueKind::String,
        }
    }

    /// Returns `Ok(s)` if this input is a string; otherwise returns the `ValueKind` found.
    pub fn as_text(&self) -> Result<&'a str, ValueKind> {
        match *self {
            Self::Text(s) => Ok(s),
            Self::Json(Value::String(s)) => Ok(s.as_str()),
            _ => Err(self.kind()),
        }
    }
}

impl<'a> From<&'a str> for RawDateInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for RawDateInput<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s.as_str())
    }
}

impl<'a> From<&'a Value> for RawDateInput<'a> {
    fn from(v: &'a Value) -> Self {
        Self::Json(v)
    }
}

impl<'a> From<Option<&'a Value>> for RawDateInput<'a> {
    fn from(v: Option<&'a Value>) -> Self {
        v.map_or(Self::Undefined, Self::Json)
    }
}
