pub mod format;
pub mod telemetry;
