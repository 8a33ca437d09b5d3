pub mod api;
pub mod config;
pub mod loadgen;
pub mod probe;
pub mod state;
pub mod store;
pub mod telemetry;
