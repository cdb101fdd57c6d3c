//! Compatibility checks for on-disk Zarr stores.
//!
//! The binaries in this crate open stores written by other Zarr
//! implementations and report the outcome through a fixed exit-code
//! contract (see [`outcome`]) for CI consumption.

#[cfg(feature = "zarrs")]
pub mod check;
#[cfg(feature = "zarrs")]
pub mod coords;
#[cfg(feature = "zarrs")]
pub mod dataset;
mod error;
pub mod outcome;

#[cfg(feature = "zarrs")]
pub use zarrs;

pub use error::{Error, Result};
