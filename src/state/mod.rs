//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `feed`) so individual views can depend
//! on small focused models. Structs are plain data; the root app provides
//! them as `RwSignal` contexts and views read them without mutating.

pub mod auth;
pub mod feed;
