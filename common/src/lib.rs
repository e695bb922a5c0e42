//! Types shared by the roster frontend and its static host.
//!
//! - `model`: records exchanged with the remote student API.
//! - `config`: the client configuration served by the backend and consumed
//!   by the frontend component as properties.

pub mod config;
pub mod model;
