//! Aircraft models and payload calculations live here.
//!
//! The library hosts the validated airframe record, its passenger and cargo
//! specializations, and the fleet catalog loader. Keeping this logic in a
//! library crate lets multiple front-ends share it.

pub mod catalog;
pub mod vehicle;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
