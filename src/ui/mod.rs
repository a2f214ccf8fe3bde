//! Terminal UI layer for the chat window.
//!
//! - [`widget`]: window state and key handling around the conversation.
//! - [`renderer`] and [`theme`]: frame composition and per-mode styling.
//! - [`text_wrapping`]: word wrapping that keeps transcript row counts exact.
//! - [`chat_loop`] and [`lifecycle`]: the draw/poll loop and terminal setup.
//!
//! Ownership boundary: this layer presents and captures interaction state, while
//! [`crate::core`] owns the conversation and backend coordination.

pub mod chat_loop;
pub mod lifecycle;
pub mod renderer;
pub mod text_wrapping;
pub mod theme;
pub mod widget;
