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


//! The main entry point for the image details lambda function.
//!
//! The function is subscribed to the SNS topic the upload service publishes
//! image details to. Every notification is validated and its image details
//! are saved into the DynamoDB table named by `TABLE_NAME`.

use image_details::prelude::*;
use lambda_runtime::{service_fn, LambdaEvent};
use log::info;
use serde_json::Value;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    info!(
        "Saving image details to table {} ({:?})",
        config.table_name, config.region
    );

    let writer = Arc::new(ImageDetailWriter::new(DynamoImageStore::new(&config)));
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let writer = writer.clone();
        async move { handle(&*writer, event.payload).await }
    }))
    .await?;
    Ok(())
}
