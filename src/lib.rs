pub mod compute;
pub mod config;
pub mod console;
pub mod entities;
pub mod error;
pub mod session;
