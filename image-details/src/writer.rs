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


//! The image detail writer saves the image details of every record in a
//! validated envelope to the record store.

use crate::envelope::Envelope;
use crate::error::Result;
use crate::model::{ImageDetails, ImageRecord};
use crate::store::ImageStore;
use log::info;

/// Writes image details into a record store.
pub struct ImageDetailWriter<S> {
    store: S,
}

impl<S: ImageStore> ImageDetailWriter<S> {
    /// Returns a writer that saves into `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saves the image details carried by each record of the envelope, in
    /// order, and returns the records written.
    ///
    /// The first record that fails to decode or to persist aborts the write
    /// and its error is returned. Records before it stay written.
    pub async fn write(&self, envelope: &Envelope) -> Result<Vec<ImageRecord>> {
        let mut written = Vec::with_capacity(envelope.records().len());
        for record in envelope.records() {
            let image = ImageRecord::from(ImageDetails::from_message(record.message())?);
            self.store.put(&image).await?;
            info!("Saved image details for {}", image.image_id);
            written.push(image);
        }
        Ok(written)
    }

    /// Looks up the record saved under `image_id`.
    pub async fn find(&self, image_id: &str) -> Result<Option<ImageRecord>> {
        self.store.query(image_id).await
    }
}
