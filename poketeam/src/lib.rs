extern crate alloc;

pub mod codec;
pub mod common;
pub mod config;
pub mod error;
pub mod store;
pub mod teams;
