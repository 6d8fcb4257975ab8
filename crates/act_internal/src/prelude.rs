//! Prelude module for `act_internal`.
//!
//! Forwards the `act_types` prelude so downstream users of the facade crate
//! can write `use act_rs::prelude::*;`.

#[doc(inline)]
pub use act_types::prelude::*;
