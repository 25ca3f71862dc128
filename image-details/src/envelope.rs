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


//! Validation of the SNS notification envelope.
//!
//! Amazon SNS delivers a notification to a Lambda function as a list of
//! records, each of which wraps the published message as an opaque string:
//!
//! ```json
//! {
//!     "Records": [
//!         {
//!             "EventSource": "aws:sns",
//!             "Sns": {
//!                 "Message": "{\"imageId\":\"abc-123\",\"description\":\"Hello World\"}"
//!             }
//!         }
//!     ]
//! }
//! ```
//!
//! Deliveries from SNS carry more fields than these (`EventVersion`,
//! `Sns.MessageId`, `Sns.Timestamp`, ...). They are accepted and ignored.

use crate::error::{ImageDetailsError, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The event source tag SNS puts on every record it delivers.
pub const SNS_EVENT_SOURCE: &str = "aws:sns";

/// A validated notification envelope.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Envelope {
    #[serde(rename = "Records")]
    records: Vec<Record>,
}

/// A single delivery record of the envelope.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Record {
    #[serde(rename = "EventSource")]
    event_source: String,
    #[serde(rename = "Sns")]
    sns:          Notification,
}

/// The SNS part of a delivery record.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Notification {
    /// The published message, still serialized.
    #[serde(rename = "Message")]
    pub message: String,
}

impl Envelope {
    /// Checks that `event` is a notification envelope with at least one
    /// record, each carrying an event source and a string message body.
    ///
    /// Every mismatch yields [`ImageDetailsError::Validation`].
    pub fn validate(event: &Value) -> Result<Envelope> {
        let envelope = Envelope::deserialize(event).map_err(|e| {
            debug!("Event object failed validation: {}", e);
            ImageDetailsError::Validation
        })?;

        if envelope.records.is_empty() {
            debug!("Event object failed validation: no records");
            return Err(ImageDetailsError::Validation);
        }

        envelope
            .records
            .iter()
            .filter(|r| r.event_source != SNS_EVENT_SOURCE)
            .for_each(|r| warn!("Unexpected event source: {}", r.event_source));

        Ok(envelope)
    }

    /// Returns the delivery records in the order they were received.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl Record {
    /// Returns a new delivery record.
    pub fn new(event_source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            event_source: event_source.into(),
            sns:          Notification {
                message: message.into(),
            },
        }
    }

    /// Returns the event source tag, normally `aws:sns`.
    pub fn event_source(&self) -> &str {
        &self.event_source
    }

    /// Returns the serialized message body.
    pub fn message(&self) -> &str {
        &self.sns.message
    }
}
