//! Domain layer for the static grants plugin.

mod client;
pub mod service;

pub use service::Service;
