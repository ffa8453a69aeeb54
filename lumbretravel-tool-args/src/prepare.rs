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

use crate::err::ArgumentError;
use crate::plan::{plan_for, DateEncoding, FieldPath};

use lumbretravel_dates::{
    normalize_date, to_utc_instant_at_hour3, DateError, RawDateInput, ValueKind,
};

use serde_json::{Map, Value};
use smol_str::SmolStr;

/// A type reserved to configure how tool arguments are prepared
#[derive(Debug, Clone, Default)]
pub struct PrepareConfig {
    normalize_instant_inputs: bool,
}

impl PrepareConfig {
    /// Updates config to set `normalize_instant_inputs` to `val` (default: false)
    /// If `normalize_instant_inputs` is `false`, arguments sent upstream as an instant must
    /// already be `DD-MM-YYYY`. If it is `true`, they may use any format accepted by
    /// `normalize_date` and are normalized before being encoded.
    pub fn normalize_instant_inputs(self, val: bool) -> Self {
        Self {
            normalize_instant_inputs: val,
        }
    }
}

/// A record of one date argument rewritten in place
#[derive(Debug, Clone, PartialEq)]
pub struct Rewrite {
    path: String,
    original: Value,
    rewritten: String,
}

impl Rewrite {
    /// Get the location of the rewritten argument, e.g. `activities[2].date`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the value the caller supplied
    pub fn original(&self) -> &Value {
        &self.original
    }

    /// Get the value that replaced it
    pub fn rewritten(&self) -> &str {
        &self.rewritten
    }
}

/// Where a staged rewrite will be written
#[derive(Debug, Clone, Copy)]
enum Slot {
    Argument(&'static str),
    Element {
        array: &'static str,
        index: usize,
        field: &'static str,
    },
}

/// Rewrites the date arguments of tool calls according to the tool's date plan.
#[derive(Debug, Clone, Default)]
pub struct ArgumentPreparer {
    config: PrepareConfig,
}

impl ArgumentPreparer {
    /// Create a new `ArgumentPreparer`
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Rewrite every planned date argument of `tool` in `args`.
    ///
    /// Either every planned date is rewritten or, on error, `args` is left untouched.
    /// Tools without a date plan are accepted as they are.
    pub fn prepare_arguments(
        &self,
        tool: &str,
        args: &mut Map<String, Value>,
    ) -> Result<Vec<Rewrite>, ArgumentError> {
        let Some(plan) = plan_for(tool) else {
            tracing::trace!(tool, "no date arguments to prepare");
            return Ok(Vec::new());
        };

        let mut staged = Vec::new();
        for field in plan.fields() {
            match field.path() {
                FieldPath::Argument(name) => {
                    let raw = args.get(name);
                    let rewritten = self
                        .encode(raw.into(), field.encoding())
                        .map_err(|e| ArgumentError::invalid_date(tool, name.to_string(), e))?;
                    staged.push((
                        Slot::Argument(name),
                        Rewrite {
                            path: name.to_string(),
                            original: raw.cloned().unwrap_or(Value::Null),
                            rewritten,
                        },
                    ));
                }
                FieldPath::EachElement {
                    array,
                    field: inner,
                } => {
                    let items = match args.get(array) {
                        Some(Value::Array(items)) => items,
                        other => {
                            return Err(ArgumentError::not_an_array(
                                tool,
                                array.to_string(),
                                other.map_or(ValueKind::Undefined, ValueKind::of),
                            ))
                        }
                    };
                    for (index, item) in items.iter().enumerate() {
                        let Value::Object(element) = item else {
                            return Err(ArgumentError::not_an_object(
                                tool,
                                format!("{array}[{index}]"),
                                ValueKind::of(item),
                            ));
                        };
                        let path = format!("{array}[{index}].{inner}");
                        let raw = element.get(inner);
                        let rewritten = match self.encode(raw.into(), field.encoding()) {
                            Ok(rewritten) => rewritten,
                            Err(e) => return Err(ArgumentError::invalid_date(tool, path, e)),
                        };
                        staged.push((
                            Slot::Element {
                                array,
                                index,
                                field: inner,
                            },
                            Rewrite {
                                path,
                                original: raw.cloned().unwrap_or(Value::Null),
                                rewritten,
                            },
                        ));
                    }
                }
            }
        }

        let mut rewrites = Vec::with_capacity(staged.len());
        for (slot, rewrite) in staged {
            let (target, key) = match slot {
                Slot::Argument(name) => (Some(&mut *args), name),
                Slot::Element {
                    array,
                    index,
                    field,
                } => (
                    args.get_mut(array)
                        .and_then(Value::as_array_mut)
                        .and_then(|items| items.get_mut(index))
                        .and_then(Value::as_object_mut),
                    field,
                ),
            };
            // Every slot was located while staging
            if let Some(target) = target {
                target.insert(key.to_string(), Value::String(rewrite.rewritten.clone()));
                tracing::debug!(
                    tool,
                    path = rewrite.path(),
                    original = %rewrite.original(),
                    rewritten = rewrite.rewritten(),
                    "prepared date argument"
                );
            }
            rewrites.push(rewrite);
        }
        Ok(rewrites)
    }

    /// Rewrite the date arguments of an MCP `tools/call` params object
    /// (`{"name": ..., "arguments": {...}}`) in place.
    ///
    /// A request without `arguments` is prepared as if it had an empty argument object.
    pub fn prepare_call(&self, call: &mut Value) -> Result<Vec<Rewrite>, ArgumentError> {
        let found = ValueKind::of(call);
        let Value::Object(call) = call else {
            return Err(ArgumentError::MalformedCall { found });
        };
        let tool: SmolStr = call
            .get("name")
            .and_then(Value::as_str)
            .ok_or(ArgumentError::MissingToolName)?
            .into();

        match call.get_mut("arguments") {
            Some(Value::Object(args)) => self.prepare_arguments(&tool, args),
            Some(other) => Err(ArgumentError::not_an_object(
                &tool,
                "arguments".to_string(),
                ValueKind::of(other),
            )),
            None => self.prepare_arguments(&tool, &mut Map::new()),
        }
    }

    fn encode(&self, raw: RawDateInput<'_>, encoding: DateEncoding) -> Result<String, DateError> {
        match encoding {
            DateEncoding::Canonical => normalize_date(raw).map(String::from),
            DateEncoding::Instant if self.config.normalize_instant_inputs => {
                normalize_date(raw).map(|date| date.instant_at_hour3().to_string())
            }
            DateEncoding::Instant => to_utc_instant_at_hour3(raw).map(String::from),
        }
    }
}
