// src/source/mod.rs
pub mod client;
pub mod config;

pub use config::FetchConfig;
