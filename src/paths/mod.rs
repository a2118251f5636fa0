//! Path counting and enumeration engines.
//!
//! Each module is a self-contained solution working on the shared grid model:
//! - [`dense`]    : full-table DP over a [`Grid`](crate::grid::Grid).
//! - [`stride`]   : rolling-array DP over a [`BlockedSet`](crate::blocked::BlockedSet).
//! - [`monotone`] : explicit-stack enumeration of right/down paths.
//! - [`simple`]   : explicit-stack enumeration of 4-directional simple paths.

pub mod dense;
pub mod monotone;
pub mod simple;
pub mod stride;
