pub mod business;
pub mod cli;
pub mod config;
pub mod domain;
pub mod ebay;
pub mod error;
pub mod logging;
