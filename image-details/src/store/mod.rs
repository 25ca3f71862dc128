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


//! The record store that image records are saved to.

mod dynamodb;
mod memory;

pub use self::dynamodb::DynamoImageStore;
pub use self::memory::MemoryImageStore;

use crate::error::Result;
use crate::model::ImageRecord;
use async_trait::async_trait;

/// A key-value table of image records, keyed by `ImageId`.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Saves the record. An existing record with the same image id is
    /// overwritten.
    async fn put(&self, record: &ImageRecord) -> Result<()>;

    /// Returns the record whose image id matches `image_id` exactly, if any.
    async fn query(&self, image_id: &str) -> Result<Option<ImageRecord>>;
}
