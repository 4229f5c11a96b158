// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Failure modes shared by every container.
//!
//! All of these are raised before any mutation happens, so a container that
//! returns an error is left exactly as it was.

use thiserror::Error;

/// Error type for container operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// Removal or peek on an empty sequence or heap.
    #[error("container is empty")]
    EmptyContainer,
    /// Index outside the valid range for the operation.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// Map lookup or removal of a key that is not present.
    #[error("no such key")]
    NoSuchKey,
    /// Element rejected on insertion.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Iterator advanced past its last element.
    #[error("iterator exhausted")]
    Exhausted,
}

pub type Result<T> = std::result::Result<T, ContainerError>;
