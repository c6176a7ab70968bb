pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod service;
pub mod session;

pub use error::XteamError;
pub use session::Session;
