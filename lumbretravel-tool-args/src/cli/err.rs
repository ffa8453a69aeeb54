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

use lumbretravel_dates::DateError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::ArgumentError;

#[derive(Debug, Error)]
#[error("Could not open file `{}`: {}", .file.display(), .error)]
pub struct FileOpenError {
    file: PathBuf,
    error: std::io::Error,
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("Could not read input `{}`: {}", .0.file.display(), .0.error)]
    #[diagnostic(code(cli_error::file_open_error), help("Make sure {} exists and you have permissions to read it.", .0.file.display()))]
    InputFileOpen(FileOpenError),
    #[error("Error while parsing the tool call: {}", .0)]
    #[diagnostic(
        code(cli_error::input_json),
        help("The input must be a single JSON object")
    )]
    InputJson(#[source] serde_json::Error),
    #[error("Could not parse `{literal}` as a JSON value: {error}")]
    #[diagnostic(
        code(cli_error::date_literal),
        help("With --json, quote string dates, e.g., '\"20-03-2024\"'")
    )]
    DateLiteral {
        literal: String,
        #[source]
        error: serde_json::Error,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Date(#[from] DateError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Argument(#[from] ArgumentError),
    #[error("Tool `{tool}` takes no date arguments")]
    #[diagnostic(
        code(cli_error::no_date_plan),
        help("Calls to `{tool}` are forwarded unchanged. Run `plan` without a tool to list the tools that take dates.")
    )]
    NoDatePlan { tool: String },
    #[error("Error while trying to serialize the tool call to JSON: {}", .0)]
    #[diagnostic(code(cli_error::serialize_output))]
    JsonSerialize(#[source] serde_json::Error),
    #[error("Error trying to create file for writing {}: {}", .0.file.display(), .0.error)]
    #[diagnostic(code(cli_error::file_open_error), help("Make sure to write to/create {}.", .0.file.display()))]
    OpeningOutputFile(FileOpenError),
    #[error("Error trying to write output to {}: {}", .0.file.display(), .0.error)]
    #[diagnostic(code(cli_error::file_write_error), help("Make sure to write to {}.", .0.file.display()))]
    WritingOutput(FileOpenError),
}

impl CliError {
    pub(crate) fn input_file_open(file: PathBuf, error: std::io::Error) -> Self {
        Self::InputFileOpen(FileOpenError { file, error })
    }

    pub(crate) fn output_file_open(file: PathBuf, error: std::io::Error) -> Self {
        Self::OpeningOutputFile(FileOpenError { file, error })
    }

    pub(crate) fn write_output(file: PathBuf, error: std::io::Error) -> Self {
        Self::WritingOutput(FileOpenError { file, error })
    }

    pub(crate) fn date_literal(literal: &str, error: serde_json::Error) -> Self {
        Self::DateLiteral {
            literal: literal.to_string(),
            error,
        }
    }
}
