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

use crate::cli::{CliArgs, CliError, Command, ConfigOptions, DateArgs, ErrorFormat};
use crate::plan::{plan_for, plans, DateField, ToolDatePlan};
use crate::{ArgumentError, ArgumentPreparer, PrepareConfig};

use lumbretravel_dates::{normalize_date, to_utc_instant_at_hour3, ValueKind};

use serde::Serialize;
use serde_json::Value;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn get_config(config_options: &ConfigOptions) -> PrepareConfig {
    PrepareConfig::default().normalize_instant_inputs(config_options.normalize_instant_inputs)
}

/// Run `f` on the date named by `args`, either as text or as a JSON value
fn with_date<T>(
    args: &DateArgs,
    f: impl FnOnce(&Value) -> Result<T, lumbretravel_dates::DateError>,
) -> Result<T, CliError> {
    let value = if args.json {
        serde_json::from_str(&args.date).map_err(|e| CliError::date_literal(&args.date, e))?
    } else {
        Value::String(args.date.clone())
    };
    Ok(f(&value)?)
}

fn read_input(file: Option<&Path>) -> Result<Value, CliError> {
    let text = match file {
        Some(file) => std::fs::read_to_string(file)
            .map_err(|e| CliError::input_file_open(file.to_path_buf(), e))?,
        None => std::io::read_to_string(std::io::stdin())
            .map_err(|e| CliError::input_file_open(PathBuf::from("stdin"), e))?,
    };
    serde_json::from_str(&text).map_err(CliError::InputJson)
}

fn write_output(text: &str, output_location: Option<&Path>) -> Result<(), CliError> {
    let mut writer: Box<dyn std::io::Write> = match output_location {
        None => Box::new(std::io::stdout()),
        Some(file) => match std::fs::File::create(file) {
            Ok(fs) => Box::new(fs),
            Err(e) => return Err(CliError::output_file_open(file.to_path_buf(), e)),
        },
    };
    writeln!(writer, "{text}").map_err(|e| {
        CliError::write_output(
            output_location.map_or_else(|| PathBuf::from("stdout"), Path::to_path_buf),
            e,
        )
    })
}

fn prepare(input: &mut Value, tool: Option<&str>, config: PrepareConfig) -> Result<(), CliError> {
    let preparer = ArgumentPreparer::new(config);
    let rewrites = match (tool, input) {
        (None, call) => preparer.prepare_call(call)?,
        (Some(tool), Value::Object(args)) => preparer.prepare_arguments(tool, args)?,
        (Some(tool), other) => {
            return Err(ArgumentError::not_an_object(
                tool,
                "arguments".to_string(),
                ValueKind::of(other),
            )
            .into())
        }
    };
    tracing::debug!(rewritten = rewrites.len(), "prepared tool call");
    Ok(())
}

/// One date argument of one tool, as printed by `plan`
#[derive(Debug, Serialize)]
struct PlanRow {
    tool: &'static str,
    path: String,
    encoding: String,
}

impl PlanRow {
    fn new(plan: &ToolDatePlan, field: &DateField) -> Self {
        Self {
            tool: plan.tool(),
            path: field.path().to_string(),
            encoding: field.encoding().to_string(),
        }
    }
}

impl std::fmt::Display for PlanRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.tool, self.path, self.encoding)
    }
}

fn plan_rows<'a>(selected: impl IntoIterator<Item = &'a ToolDatePlan>) -> Vec<PlanRow> {
    selected
        .into_iter()
        .flat_map(|plan| plan.fields().iter().map(move |field| PlanRow::new(plan, field)))
        .collect()
}

fn render_plan(rows: &[PlanRow], json: bool) -> Result<String, CliError> {
    if json {
        serde_json::to_string_pretty(rows).map_err(CliError::JsonSerialize)
    } else {
        Ok(rows
            .iter()
            .map(PlanRow::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

impl CliArgs {
    pub fn exec(&self) -> Result<(), CliError> {
        match &self.command {
            Command::Normalize { date } => {
                let date = with_date(date, |v| normalize_date(v))?;
                write_output(&date.to_string(), None)
            }
            Command::Instant { date } => {
                let instant = with_date(date, |v| to_utc_instant_at_hour3(v))?;
                write_output(&instant.to_string(), None)
            }
            Command::Prepare {
                input,
                tool,
                output,
                config,
            } => {
                let mut request = read_input(input.as_deref())?;
                prepare(&mut request, tool.as_deref(), get_config(config))?;
                let text = serde_json::to_string_pretty(&request).map_err(CliError::JsonSerialize)?;
                write_output(&text, output.as_deref())
            }
            Command::Plan { tool, json } => {
                let rows = match tool {
                    Some(tool) => plan_rows([plan_for(tool)
                        .ok_or_else(|| CliError::NoDatePlan { tool: tool.clone() })?]),
                    None => plan_rows(plans()),
                };
                write_output(&render_plan(&rows, *json)?, None)
            }
        }
    }

    pub fn get_error_format(&self) -> ErrorFormat {
        self.error_format
    }

    /// Install the miette report handler selected by `--error-format`. Call once, before any
    /// error is reported.
    pub fn install_error_hook(&self) {
        let err_hook: miette::ErrorHook = match self.get_error_format() {
            ErrorFormat::Human => return,
            ErrorFormat::Plain => Box::new(|_| Box::new(miette::NarratableReportHandler::new())),
            ErrorFormat::Json => Box::new(|_| Box::new(miette::JSONReportHandler::new())),
        };
        #[expect(
            clippy::expect_used,
            reason = "`set_hook` only fails if a hook is already installed, and this is called once from `main`."
        )]
        miette::set_hook(err_hook).expect("failed to install error-reporting hook");
    }

    /// Install a `tracing` subscriber writing to stderr. `RUST_LOG` takes precedence over `-v`.
    pub fn init_logging(&self) {
        let default = match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
        // Fails only if a global subscriber is already installed
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use cool_asserts::assert_matches;
    use lumbretravel_dates::DateError;
    use serde_json::json;

    fn date_args(date: &str, json: bool) -> DateArgs {
        DateArgs {
            date: date.to_string(),
            json,
        }
    }

    #[test]
    fn json_dates_keep_their_type() {
        assert_matches!(
            with_date(&date_args("20240320", true), |v| normalize_date(v)),
            Err(CliError::Date(DateError::NotAString(_)))
        );
        assert_matches!(
            with_date(&date_args("\"2024-03-20\"", true), |v| normalize_date(v)),
            Ok(date) => {
                assert_eq!(date.to_string(), "20-03-2024");
            }
        );
        assert_matches!(
            with_date(&date_args("2024-03-20", true), |v| normalize_date(v)),
            Err(CliError::DateLiteral { .. })
        );
    }

    #[test]
    fn plain_dates_are_strings() {
        assert_matches!(
            with_date(&date_args("20240320", false), |v| normalize_date(v)),
            Err(CliError::Date(DateError::InvalidFormat(_)))
        );
    }

    #[test]
    fn bare_arguments_need_an_object() {
        let mut input = json!(["2024-03-20"]);
        assert_matches!(
            prepare(&mut input, Some("create_program"), PrepareConfig::default()),
            Err(CliError::Argument(ArgumentError::NotAnObject(_)))
        );
    }

    #[test]
    fn bare_arguments_are_prepared() {
        let mut input = json!({ "date": "2024-03-20" });
        prepare(
            &mut input,
            Some("daily_activities"),
            PrepareConfig::default().normalize_instant_inputs(true),
        )
        .unwrap();
        assert_eq!(input, json!({ "date": "2024-03-20T03:00:00.000Z" }));
    }

    #[test]
    fn plans_are_tab_separated() {
        let rows = plan_rows(plan_for("create_program"));
        assert_eq!(
            render_plan(&rows, false).unwrap(),
            "create_program\tstartDate\tcanonical\ncreate_program\tendDate\tcanonical"
        );
    }

    #[test]
    fn plans_render_as_json() {
        let rows = plan_rows(plan_for("daily_activities"));
        let rendered: Value = serde_json::from_str(&render_plan(&rows, true).unwrap()).unwrap();
        assert_eq!(
            rendered,
            json!([{ "tool": "daily_activities", "path": "date", "encoding": "instant" }])
        );
    }

    #[test]
    fn every_plan_field_has_a_row() {
        let rows = plan_rows(plans());
        assert_eq!(rows.len(), 9);
        assert!(rows
            .iter()
            .any(|row| row.tool == "update_activities" && row.path == "activities[].date"));
    }
}
