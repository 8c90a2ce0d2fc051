// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors raised at the adapter seams (slices, buffer casts, provider install).
//!
//! The arithmetic itself never fails; IEEE-754 semantics cover division by
//! zero and friends.

use thiserror::Error;

use crate::provider::ProviderKind;

/// Errors produced by tuple adapters and provider installation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TupleError {
    /// A slice had fewer elements than the tuple dimension requires.
    #[error("slice too short: need {expected} components, got {actual}")]
    SliceTooShort {
        /// Required number of components.
        expected: usize,
        /// Length of the slice that was supplied.
        actual: usize,
    },

    /// A flat `f32` buffer could not be viewed as a slice of vectors.
    #[error("cast error: {0}")]
    Cast(#[from] bytemuck::PodCastError),

    /// A different default provider was already installed for this process.
    #[error("default math provider already installed: {current:?}")]
    ProviderAlreadyInstalled {
        /// The provider that is currently active.
        current: ProviderKind,
    },
}

/// Returns `Ok(())` when `actual >= expected`, otherwise [`TupleError::SliceTooShort`].
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), TupleError> {
    if actual < expected {
        return Err(TupleError::SliceTooShort { expected, actual });
    }
    Ok(())
}
