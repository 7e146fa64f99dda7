// src/core/mod.rs

pub mod net;
pub mod response;
pub mod xml;

pub use net::{Transport, TransportError, UreqClient};
