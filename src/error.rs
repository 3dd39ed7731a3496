// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the conversion pipeline

use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a conversion
///
/// Per-component anomalies (missing contour hierarchy, degenerate rings,
/// under-sized components) are not errors; those components are silently
/// excluded from the output set.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to decode input image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to write archive: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Failed to encode archive: {0}")]
    Archive(#[from] zip::result::ZipError),
}
