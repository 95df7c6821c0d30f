//! psedit runtime: the blocking read-dispatch-render loop.
//!
//! The binary wires it to crossterm; tests drive it with scripted keys and an
//! in-memory surface.

pub mod runtime;

pub use runtime::{EditorRuntime, ShutdownReason};
