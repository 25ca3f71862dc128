// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.


//! Image details error types

use std::error;
use std::fmt::{Display, Formatter};
use std::result;

/// The message carried by every envelope validation failure. Callers match on
/// this exact string.
pub const VALIDATION_FAILED: &str = "Event object failed validation";

/// Result type for operations that could result in an [ImageDetailsError]
pub type Result<T> = result::Result<T, ImageDetailsError>;

/// Image details error
#[derive(Debug)]
pub enum ImageDetailsError {
    /// The inbound event does not have the shape of an SNS notification
    /// envelope.
    Validation,
    /// The message body was decoded but breaks an invariant of the image
    /// details payload, e.g. an empty image id.
    InvalidPayload(String),
    /// Error returned when serde_json failed to serialize or deserialize data.
    SerdeJson(serde_json::Error),
    /// Error returned when the configuration is missing or malformed.
    Config(String),
    /// Error returned when accessing the AWS services fails.
    AWS(String),
    /// Error returned when an item read back from the record store cannot be
    /// decoded into an image record.
    Store(String),
    /// Error associated to Lambda runtime execution.
    LambdaError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<serde_json::Error> for ImageDetailsError {
    fn from(e: serde_json::Error) -> Self {
        ImageDetailsError::SerdeJson(e)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for ImageDetailsError {
    fn from(e: Box<dyn std::error::Error + Send + Sync>) -> Self {
        ImageDetailsError::LambdaError(e)
    }
}

impl Display for ImageDetailsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            ImageDetailsError::Validation => write!(f, "{}", VALIDATION_FAILED),
            ImageDetailsError::InvalidPayload(ref desc) => {
                write!(f, "Invalid image details: {}", desc)
            }
            ImageDetailsError::SerdeJson(ref desc) => write!(f, "serde_json error: {:?}", desc),
            ImageDetailsError::Config(ref desc) => write!(f, "Configuration error: {}", desc),
            ImageDetailsError::AWS(ref desc) => write!(f, "AWS error: {}", desc),
            ImageDetailsError::Store(ref desc) => write!(f, "Record store error: {}", desc),
            ImageDetailsError::LambdaError(ref desc) => write!(f, "Lambda error: {}", desc),
        }
    }
}

impl error::Error for ImageDetailsError {}
