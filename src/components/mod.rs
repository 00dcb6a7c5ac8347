//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are purely presentational: they render what they are given and
//! forward interactions through callback props supplied by their callers.

pub mod button;
pub mod post_card;
