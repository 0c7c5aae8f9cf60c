pub mod client;
pub mod error;
pub mod models;
pub mod xml;

pub use client::*;
pub use error::*;
pub use models::*;
