pub mod app;
pub mod claims;
pub mod config;
pub mod intake;
pub mod utils;
