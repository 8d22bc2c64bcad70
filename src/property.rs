//! Typed message properties and the per-message environment.
//!
//! This module provides:
//! - The tagged `Value` type with SQL-style comparison and arithmetic
//! - Three-valued booleans (`BoolOrNone`)
//! - The `Env` lookup trait that selectors are evaluated against

pub mod env;
pub mod value;

pub use env::{Env, Properties};
pub use value::{BoolOrNone, Value};
