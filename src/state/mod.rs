//! Client-side view state.
//!
//! DESIGN
//! ======
//! Each model is a plain struct held in an `RwSignal` and provided through
//! context (`auth`) or owned by a single page (`chat`). Mutations are plain
//! methods so they can be tested without a reactive runtime.

pub mod auth;
pub mod chat;
