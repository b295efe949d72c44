pub mod builder;
pub mod error;
pub mod fs_secure;
pub mod item;
pub mod ports;
pub mod secret;
pub mod service;
