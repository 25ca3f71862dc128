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


//! The entry point for a single SNS invocation.

use crate::envelope::Envelope;
use crate::error::Result;
use crate::store::ImageStore;
use crate::writer::ImageDetailWriter;
use log::info;
use serde_json::Value;

/// Validates the inbound event and saves the image details it carries.
///
/// An event that is not a notification envelope fails with
/// [`ImageDetailsError::Validation`](crate::error::ImageDetailsError::Validation)
/// before anything is written. Store failures are returned as they are.
pub async fn handle<S: ImageStore>(writer: &ImageDetailWriter<S>, event: Value) -> Result<()> {
    let envelope = Envelope::validate(&event)?;
    info!("Received {} SNS record(s)", envelope.records().len());

    let written = writer.write(&envelope).await?;
    info!("Saved {} image record(s)", written.len());
    Ok(())
}
