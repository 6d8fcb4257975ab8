//! Internal crate for `act-rs`.
//!
//! This module exists so the `act-rs` facade crate has a single place to
//! re-export from, and should not be used directly.
//!
//! # Examples
//!
//! ```rust
//! use act_internal::prelude::*;
//!
//! // All commonly used types are available
//! let palette = Palette::grayscale();
//! ```

/// `use act_internal::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export act_types for convenience
pub use act_types;
