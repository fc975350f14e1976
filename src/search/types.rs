// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search service errors

use thiserror::Error;

use crate::store::StoreError;

/// Errors that surface from the search path
///
/// Remote search failures never appear here; they degrade to the
/// loosened local match. Only cache-store faults propagate.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
