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


//! A "prelude" for users of the image-details crate.
//!
//! Like the standard library's prelude, this module simplifies importing of
//! common items. Unlike the standard prelude, the contents of this module must
//! be imported manually:
//!
//! ```
//! use image_details::prelude::*;
//! ```

pub use crate::config::{Config, IMAGE_DETAILS_CONF};
pub use crate::envelope::{Envelope, Notification, Record};
pub use crate::error::{ImageDetailsError, Result, VALIDATION_FAILED};
pub use crate::handler::handle;
pub use crate::model::{ImageDetails, ImageRecord};
pub use crate::store::{DynamoImageStore, ImageStore, MemoryImageStore};
pub use crate::writer::ImageDetailWriter;
