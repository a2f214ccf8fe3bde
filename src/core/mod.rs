pub mod assistant_service;
pub mod config;
pub mod constants;
pub mod message;
pub mod persona;
pub mod session;
pub mod transport;
