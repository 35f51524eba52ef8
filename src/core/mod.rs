//! Core building blocks: run parameters, the table locator and grid builder,
//! and output target resolution. Consumed by the high-level `api` module.
pub mod grid;
pub mod params;
pub mod target;
