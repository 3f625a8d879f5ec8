//! Stockroom HTTP service: router, handlers and request logging.
//!
//! `main.rs` wires configuration and storage; tests build the same router via
//! [`app::build_app`] over any [`stockroom_infra::Store`].

pub mod app;
pub mod middleware;
