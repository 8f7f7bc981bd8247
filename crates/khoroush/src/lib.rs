pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod site;
pub mod telemetry;
