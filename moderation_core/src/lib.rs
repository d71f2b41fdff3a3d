pub mod config;
pub mod error;
pub mod helpers;
pub mod image;
pub mod render;
pub mod services;
pub mod session;
