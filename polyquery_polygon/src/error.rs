// Copyright 2025 the Polyquery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context misuse errors.

/// Misuse of a [`PolygonContext`](crate::PolygonContext).
///
/// These are programming errors on the caller's side. They are logged at `error` level
/// before being returned; hosts that want the process to stop can `expect` the result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// The context was destroyed before this operation.
    #[error("polygon context is not initialized")]
    Uninitialized,
    /// Parallel coordinate arrays have different lengths.
    #[error("coordinate arrays differ in length: {x} x values, {y} y values")]
    LengthMismatch {
        /// Number of x coordinates.
        x: usize,
        /// Number of y coordinates.
        y: usize,
    },
    /// The output slice does not have one slot per query point.
    #[error("output holds {actual} slots for {expected} query points")]
    OutputLengthMismatch {
        /// Number of query points.
        expected: usize,
        /// Length of the output slice.
        actual: usize,
    },
}

/// Result alias for context operations.
pub type Result<T> = core::result::Result<T, ContextError>;
