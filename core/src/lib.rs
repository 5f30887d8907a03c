pub mod capture;
pub mod engine;
pub mod network;
pub mod scan;
pub mod vendors;
