pub mod config;
pub mod geo;
mod header_tools;
pub mod i18n;
pub mod sender;
pub mod service;
