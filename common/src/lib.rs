pub mod config;
mod macros;
pub mod network;
pub mod report;
pub mod scanning;
pub mod vendors;
