pub mod binder;
pub mod cli;
pub mod config;
pub mod models;
pub mod services;


pub use binder::Binder;
pub use config::Config;
