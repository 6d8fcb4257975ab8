//! `act-rs` is a library for reading, editing and writing ACT image files,
//! the multi-frame paletted backdrop and explosion artwork used by a family
//! of mid-1990s LucasArts space-combat games.
//!
//! All functionality lives in [`act_types`]; this crate only re-exports it
//! under one roof.

pub use act_internal::*;
