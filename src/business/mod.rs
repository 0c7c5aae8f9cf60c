pub mod reminder_service;
pub mod run_config;
pub mod writer;

pub use reminder_service::*;
pub use run_config::*;
pub use writer::*;
