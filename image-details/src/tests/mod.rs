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


//! Common unit test utility methods

use crate::error::{ImageDetailsError, Result};
use crate::model::{ImageDetails, ImageRecord};
use crate::store::ImageStore;
use async_trait::async_trait;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use serde_json::{json, Value};
use uuid::Uuid;

/// Returns image details with a random image id and description.
pub(crate) fn random_image_details() -> ImageDetails {
    ImageDetails::new(Uuid::new_v4().to_string(), Sentence(3..8).fake::<String>())
}

/// Wraps the image details into an SNS notification event.
///
/// # Example
///
/// ```json
/// {
///     "Records": [
///         {
///             "EventSource": "aws:sns",
///             "Sns": {
///                 "Message": "{\"imageId\":\"abc-123\",\"description\":\"Hello World\"}"
///             }
///         }
///     ]
/// }
/// ```
pub(crate) fn sns_event(details: &[ImageDetails]) -> Value {
    let records = details
        .iter()
        .map(|d| {
            json!({
                "EventSource": "aws:sns",
                "Sns": { "Message": serde_json::to_string(d).unwrap() }
            })
        })
        .collect::<Vec<_>>();
    json!({ "Records": records })
}

/// A record store that rejects every request.
pub(crate) struct FailingStore;

#[async_trait]
impl ImageStore for FailingStore {
    async fn put(&self, record: &ImageRecord) -> Result<()> {
        Err(ImageDetailsError::AWS(format!(
            "ResourceNotFoundException: cannot put {}",
            record.image_id
        )))
    }

    async fn query(&self, image_id: &str) -> Result<Option<ImageRecord>> {
        Err(ImageDetailsError::AWS(format!(
            "ResourceNotFoundException: cannot query {}",
            image_id
        )))
    }
}
