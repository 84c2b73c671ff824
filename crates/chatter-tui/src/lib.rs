//! Terminal UI for chatter
//!
//! A thin shell over [`chatter_client::ChatClient`] that provides
//! terminal-specific I/O. The orchestration loop lives in the generic
//! [`Runtime`], which is driven through the [`Driver`] trait so the same
//! loop runs against the real terminal and against scripted test drivers.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod input;
mod runtime;
mod terminal;
pub mod ui;

pub use driver::{Driver, UiEvent};
pub use input::{InputState, KeyInput};
pub use runtime::Runtime;
pub use terminal::{TerminalDriver, TerminalError};
