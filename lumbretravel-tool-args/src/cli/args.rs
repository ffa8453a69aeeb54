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

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// This struct contains the arguments that together specify a single date.
#[derive(Args, Clone, Debug)]
pub(crate) struct DateArgs {
    /// The date to convert, e.g., 2024-03-20 or "20 March 2024"
    #[clap(required = true)]
    pub(crate) date: String,
    /// Parse DATE as a JSON value instead of a plain string, e.g., `"20-03-2024"`, `20240320` or `null`.
    #[arg(long, default_value_t = false)]
    pub(crate) json: bool,
}

#[derive(Args, Clone, Debug)]
#[clap(next_help_heading = "Configuration Options")]
pub(crate) struct ConfigOptions {
    /// Whether to accept any supported date format for arguments sent upstream as an instant (default: false).
    ///
    /// By default the `date` argument of `daily_activities` must already be `DD-MM-YYYY`.
    #[arg(long, default_value_t = false)]
    pub(crate) normalize_instant_inputs: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ErrorFormat {
    /// Human-readable error messages with terminal graphics.
    #[default]
    Human,
    /// Plain-text error messages without fancy graphics or colors, suitable for screen readers.
    Plain,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Clone, Debug, Subcommand)]
pub(crate) enum Command {
    /// Normalize a date to `DD-MM-YYYY`.
    Normalize {
        #[clap(flatten)]
        date: DateArgs,
    },
    /// Convert a `DD-MM-YYYY` date to the UTC instant at 03:00 of that day.
    Instant {
        #[clap(flatten)]
        date: DateArgs,
    },
    /// Rewrite the date arguments of a `tools/call` request.
    ///
    /// The input is a `{"name": ..., "arguments": {...}}` object, or a bare arguments object when
    /// `--tool` is given.
    Prepare {
        /// A JSON file holding the request (default: stdin).
        input: Option<PathBuf>,
        /// Treat the input as the arguments of this tool.
        #[arg(long, value_name = "NAME")]
        tool: Option<String>,
        /// The location to save the rewritten request (default: stdout).
        #[arg(long, value_name = "OUTPUT_FILE")]
        output: Option<PathBuf>,
        #[clap(flatten)]
        config: ConfigOptions,
    },
    /// List the date arguments of every tool, or of a single tool.
    Plan {
        /// The tool to describe.
        tool: Option<String>,
        /// Print the plan as a JSON array instead of tab separated rows.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Command Line Interface for LumbreTravel tool argument preparation
#[derive(Parser, Debug)]
#[clap(name = "lumbretravel-tool-args", version)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub(crate) command: Command,
    #[arg(long, global = true, default_value = "human")]
    pub(crate) error_format: ErrorFormat,
    /// Log more detail to stderr (-v for debug, -vv for trace). Ignored when RUST_LOG is set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}
