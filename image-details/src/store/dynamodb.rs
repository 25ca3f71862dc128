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


//! This crate contains the DynamoDB-backed image store.

use super::ImageStore;
use crate::config::Config;
use crate::error::{ImageDetailsError, Result};
use crate::model::{string_value, ImageRecord, IMAGE_ID_ATTRIBUTE};
use async_trait::async_trait;
use log::debug;
use rusoto_dynamodb::{DynamoDb, DynamoDbClient, PutItemInput, QueryInput};
use std::collections::HashMap;

/// Image records stored in an Amazon DynamoDB table.
pub struct DynamoImageStore {
    client:     DynamoDbClient,
    table_name: String,
}

impl DynamoImageStore {
    /// Returns a store for the table and region in `config`.
    pub fn new(config: &Config) -> Self {
        Self::with_client(
            DynamoDbClient::new(config.region.clone()),
            config.table_name.clone(),
        )
    }

    /// Returns a store that issues its requests through `client`.
    pub fn with_client(client: DynamoDbClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Returns the name of the backing table.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ImageStore for DynamoImageStore {
    /// Puts the record into the table. `PutItem` replaces any item with the
    /// same key.
    async fn put(&self, record: &ImageRecord) -> Result<()> {
        let request = PutItemInput {
            table_name: self.table_name.clone(),
            item: record.to_item(),
            ..Default::default()
        };
        self.client
            .put_item(request)
            .await
            .map_err(|e| ImageDetailsError::AWS(e.to_string()))
            .map(|_| ())
    }

    /// Queries the table for the item with the given partition key.
    async fn query(&self, image_id: &str) -> Result<Option<ImageRecord>> {
        let mut values = HashMap::new();
        values.insert(":id".to_owned(), string_value(image_id));

        let request = QueryInput {
            table_name: self.table_name.clone(),
            key_condition_expression: Some(format!("{} = :id", IMAGE_ID_ATTRIBUTE)),
            expression_attribute_values: Some(values),
            limit: Some(1),
            ..Default::default()
        };
        let output = self
            .client
            .query(request)
            .await
            .map_err(|e| ImageDetailsError::AWS(e.to_string()))?;

        debug!(
            "Query on {} = {} returned {:?} item(s)",
            IMAGE_ID_ATTRIBUTE, image_id, output.count
        );

        match output.items.as_ref().and_then(|items| items.first()) {
            Some(item) => Ok(Some(ImageRecord::from_item(item)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ImageDetails;
    use crate::tests::random_image_details;
    use rusoto_core::Region;

    /// Talks to DynamoDB Local (`docker run -p 8000:8000 amazon/dynamodb-local`)
    /// with a table `Test` whose partition key is the string `ImageId`.
    #[tokio::test]
    #[ignore]
    async fn dynamodb_local_round_trip() -> Result<()> {
        let config = Config::new(
            "Test",
            Region::Custom {
                name:     "us-east-1".to_owned(),
                endpoint: "http://0.0.0.0:8000".to_owned(),
            },
        );
        let store = DynamoImageStore::new(&config);
        assert_eq!(store.table_name(), "Test");

        let details = random_image_details();
        store.put(&ImageRecord::from(details.clone())).await?;
        assert_eq!(
            store.query(&details.image_id).await?,
            Some(ImageRecord::from(details.clone()))
        );

        let updated = ImageDetails::new(details.image_id.clone(), "Updated");
        store.put(&ImageRecord::from(updated.clone())).await?;
        assert_eq!(
            store.query(&details.image_id).await?,
            Some(ImageRecord::from(updated))
        );
        Ok(())
    }
}
