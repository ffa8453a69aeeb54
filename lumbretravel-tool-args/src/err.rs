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

use lumbretravel_dates::{DateError, ErrorKind, ValueKind};
use miette::Diagnostic;
use smol_str::SmolStr;
use thiserror::Error;

/// Prefix of the text returned to the assistant when a tool call fails
pub const TOOL_ERROR_PREFIX: &str = "LumbreTravel Tool API error";

/// The type of errors that may be encountered while preparing the arguments of a tool call
#[derive(Error, Debug, Diagnostic)]
pub enum ArgumentError {
    /// A planned date argument could not be normalized or encoded
    #[error("Invalid date in argument `{path}` of tool `{tool}`")]
    #[diagnostic(code(argument_error::invalid_date))]
    InvalidDate {
        tool: SmolStr,
        path: String,
        #[source]
        #[diagnostic_source]
        source: DateError,
    },

    /// An argument that should hold a list of objects does not
    #[error("Argument `{}` of tool `{}` must be an array, found {}", .0.path, .0.tool, .0.found)]
    #[diagnostic(
        code(argument_error::not_an_array),
        help("Pass `{}` as a JSON array of objects", .0.path)
    )]
    NotAnArray(UnexpectedShapeError),

    /// A value that should be a JSON object is not
    #[error("Argument `{}` of tool `{}` must be an object, found {}", .0.path, .0.tool, .0.found)]
    #[diagnostic(code(argument_error::not_an_object))]
    NotAnObject(UnexpectedShapeError),

    /// A `tools/call` request is not a JSON object
    #[error("`tools/call` params must be an object, found {found}")]
    #[diagnostic(
        code(argument_error::malformed_call),
        help("Expected an object of the form {{\"name\": ..., \"arguments\": {{...}}}}")
    )]
    MalformedCall { found: ValueKind },

    /// A `tools/call` request has no tool name
    #[error("Missing tool name in `tools/call` request")]
    #[diagnostic(
        code(argument_error::missing_tool_name),
        help("The request must have a string `name` attribute")
    )]
    MissingToolName,
}

impl ArgumentError {
    pub(crate) fn invalid_date(tool: &str, path: String, source: DateError) -> Self {
        Self::InvalidDate {
            tool: tool.into(),
            path,
            source,
        }
    }

    pub(crate) fn not_an_array(tool: &str, path: String, found: ValueKind) -> Self {
        Self::NotAnArray(UnexpectedShapeError {
            tool: tool.into(),
            path,
            found,
        })
    }

    pub(crate) fn not_an_object(tool: &str, path: String, found: ValueKind) -> Self {
        Self::NotAnObject(UnexpectedShapeError {
            tool: tool.into(),
            path,
            found,
        })
    }

    /// Every preparation failure is an invalid argument
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDate { source, .. } => source.kind(),
            _ => ErrorKind::InvalidArgument,
        }
    }

    /// The message shown to the assistant
    pub fn tool_message(&self) -> String {
        match self {
            Self::InvalidDate { path, source, .. } => format!("{source} (argument `{path}`)"),
            _ => self.to_string(),
        }
    }

    /// Render this error as an MCP `tools/call` result flagged with `isError`
    pub fn to_tool_result(&self) -> serde_json::Value {
        serde_json::json!({
            "content": [{
                "type": "text",
                "text": format!("{TOOL_ERROR_PREFIX}: {}", self.tool_message()),
            }],
            "isError": true
        })
    }

    /// Render this error as a JSON-RPC error object
    pub fn to_json_rpc_error(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.kind().json_rpc_code(),
            "message": self.tool_message(),
        })
    }
}

#[derive(Debug)]
pub struct UnexpectedShapeError {
    tool: SmolStr,
    path: String,
    found: ValueKind,
}
