//! Chat client
//!
//! Event-driven client state machine for a plain-text WebSocket chat.
//! Maintains an append-only message log and mirrors connection lifecycle
//! events into it.
//!
//! # Architecture
//!
//! The client follows a Sans-IO, action-based pattern. It receives tagged
//! connection events ([`ClientEvent`]), processes them through pure state
//! machine logic, and returns actions ([`ClientAction`]) for the caller to
//! execute. No I/O happens inside the state machine.
//!
//! # Components
//!
//! - [`ChatClient`]: state machine owning the message log
//! - [`ClientEvent`]: events fed into the client
//! - [`ClientAction`]: actions produced by the client
//! - [`SendPolicy`]: guard applied to outgoing drafts
//!
//! # Transport (optional)
//!
//! With the `transport` feature enabled, this crate also provides:
//! - [`transport::ConnectedClient`]: channel handle to a WebSocket connection
//! - [`transport::connect`]: open a connection to a server

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;
mod event;

#[cfg(feature = "transport")]
pub mod transport;

pub use client::{ChatClient, ConnectionState, SendPolicy, STATUS_CONNECTED, STATUS_EXITING};
pub use event::{ClientAction, ClientEvent};
