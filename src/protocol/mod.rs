//! Protocol facade shared by all resource endpoints.
//!
//! [`ScimProtocol`] owns the codec registry and the endpoint URL registry for one
//! server. It is constructed once at startup, usually through
//! [`ScimProtocolBuilder`], and handed to every request handler behind an `Arc`.
//!
//! # Module Organization
//!
//! * [`core`] - The ScimProtocol struct, codec negotiation and error responses
//! * [`builder`] - Endpoint configuration and the fluent builder

pub mod builder;
pub mod core;

pub use builder::{EndpointConfig, ScimProtocolBuilder};
pub use core::ScimProtocol;
