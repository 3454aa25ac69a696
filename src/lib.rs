//! # Fridge Logbook Library
//!
//! Fridge registry and temperature compliance logging for commercial
//! kitchens, with a demo mode that keeps the API usable without a database.

pub mod availability;
pub mod compliance;
pub mod config;
pub mod db;
pub mod demo;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod telemetry;
pub mod voice_config;
pub use migration;
