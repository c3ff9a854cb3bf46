//! Agent invocation envelope for the Taxa category store.
//!
//! Automated agents invoke the store with a structured envelope: an API
//! path naming the operation plus a flat array of name/value parameters
//! extracted elsewhere from natural-language input. This crate is the edge
//! glue between that envelope and the typed operations in
//! [`taxa_taxonomy`]:
//!
//! - [`params`] — flat parameter arrays folded into a [`ParamMap`] and
//!   converted into typed requests, once, before anything reaches the store
//! - [`envelope`] — serde models of the wire request and response
//! - [`outcome`] — the tri-part `{success, message, data?}` result body
//! - [`dispatch`] — [`AgentDispatcher`] routing API paths to operations and
//!   mapping error kinds to HTTP status codes
//!
//! The dispatcher is the outermost layer of the repository; hosting it
//! behind an actual transport is the embedder's concern.

pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod outcome;
pub mod params;

pub use config::AgentConfig;
pub use dispatch::{status_for, AgentDispatcher};
pub use envelope::{AgentRequest, AgentResponse, Parameter};
pub use outcome::Outcome;
pub use params::ParamMap;
