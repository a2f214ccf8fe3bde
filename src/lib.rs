//! Portfolio Assistant is a terminal rendition of the chat widget embedded in a
//! personal portfolio site.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation session, persona latch, backend transport
//!   and configuration.
//! - [`ui`] renders the chat window and runs the interactive event loop.
//! - [`cli`] parses arguments and dispatches to the chat window or the
//!   one-shot `say` command.
//! - [`api`] defines the request/reply payloads exchanged with the backend.
//!
//! The binary (`src/main.rs`) routes straight through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
