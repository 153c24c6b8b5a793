// Copyright 2026 the Ringchart Authors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors surfaced by chart rendering.
///
/// A missing container is the only fatal render condition; everything
/// else (oversized stroke widths, out-of-range percentages, missing
/// colors) is corrected or defaulted.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The target container does not exist. Raised before any output is
    /// produced.
    #[error("no element found for selector: {selector}")]
    ContainerNotFound { selector: String },

    #[error("failed to write chart output")]
    Io(#[from] std::io::Error),
}
