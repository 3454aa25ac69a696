//! # Services
//!
//! The fridge registry and temperature log recorder. Both take their stores
//! as an optional handle: no handle means the service runs in demo mode.

pub mod fridge_registry;
pub mod temp_log_recorder;

pub use fridge_registry::FridgeRegistry;
pub use temp_log_recorder::{NewTempLog, TemperatureLogRecorder, start_of_day};
