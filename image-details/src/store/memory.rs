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


use super::ImageStore;
use crate::error::Result;
use crate::model::ImageRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Image records kept in process memory. Useful for tests and local runs.
#[derive(Debug, Default)]
pub struct MemoryImageStore {
    records: RwLock<HashMap<String, ImageRecord>>,
}

impl MemoryImageStore {
    /// Returns an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if nothing has been stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn put(&self, record: &ImageRecord) -> Result<()> {
        self.records
            .write()
            .await
            .insert(record.image_id.clone(), record.clone());
        Ok(())
    }

    async fn query(&self, image_id: &str) -> Result<Option<ImageRecord>> {
        Ok(self.records.read().await.get(image_id).cloned())
    }
}
