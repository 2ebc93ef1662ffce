pub mod config;
pub mod download;
mod session;
pub mod upload;
mod workspace;
