//! Internal traversal building blocks.
//!
//! This module is `pub(crate)` so the traversal engine and the extension
//! algorithms share one visited-set implementation without exposing it as
//! part of the public API surface.

pub(crate) mod visited;
