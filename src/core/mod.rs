pub mod board;
pub mod config;
pub mod error;
pub mod layout;
pub mod models;
pub mod services;
