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


//! The image details published by the upload service, and the record they
//! become in the image table.

use crate::error::{ImageDetailsError, Result};
use rusoto_dynamodb::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Partition key of the image table.
pub const IMAGE_ID_ATTRIBUTE: &str = "ImageId";
/// Attribute holding the image description.
pub const DESCRIPTION_ATTRIBUTE: &str = "Description";

/// The payload carried in the SNS message body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetails {
    /// Unique identifier of the uploaded image.
    pub image_id:    String,
    /// Free-form description supplied by the uploader.
    pub description: String,
}

impl ImageDetails {
    /// Returns new image details.
    pub fn new(image_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            image_id:    image_id.into(),
            description: description.into(),
        }
    }

    /// Decodes the image details from a serialized SNS message body.
    pub fn from_message(message: &str) -> Result<Self> {
        let details: ImageDetails = serde_json::from_str(message)?;
        if details.image_id.is_empty() {
            return Err(ImageDetailsError::InvalidPayload(
                "imageId must not be empty".to_string(),
            ));
        }
        Ok(details)
    }
}

/// A row of the image table, keyed by `ImageId`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageRecord {
    /// The partition key.
    pub image_id:    String,
    /// The image description.
    pub description: String,
}

impl From<ImageDetails> for ImageRecord {
    fn from(details: ImageDetails) -> Self {
        Self {
            image_id:    details.image_id,
            description: details.description,
        }
    }
}

impl ImageRecord {
    /// Converts the record into a DynamoDB item.
    pub fn to_item(&self) -> HashMap<String, AttributeValue> {
        let mut item = HashMap::with_capacity(2);
        item.insert(IMAGE_ID_ATTRIBUTE.to_owned(), string_value(&self.image_id));
        item.insert(
            DESCRIPTION_ATTRIBUTE.to_owned(),
            string_value(&self.description),
        );
        item
    }

    /// Decodes a record from a DynamoDB item. Attributes other than the image
    /// id and the description are ignored.
    pub fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Self> {
        Ok(Self {
            image_id:    string_attribute(item, IMAGE_ID_ATTRIBUTE)?,
            description: string_attribute(item, DESCRIPTION_ATTRIBUTE)?,
        })
    }
}

/// Returns a DynamoDB string attribute.
pub(crate) fn string_value(s: &str) -> AttributeValue {
    AttributeValue {
        s: Some(s.to_owned()),
        ..Default::default()
    }
}

fn string_attribute(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String> {
    item.get(name)
        .and_then(|value| value.s.clone())
        .ok_or_else(|| ImageDetailsError::Store(format!("missing string attribute {}", name)))
}
