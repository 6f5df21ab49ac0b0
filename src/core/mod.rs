//! Core data model.
//!
//! This module contains the pure building blocks of an evaluation:
//! - Ordered state snapshots via `States`, with `StateEnum` ordinals
//! - Condition coercion via the `Truthy` trait, and computed-value
//!   conversion via `IntoFlagValue`
//! - The three flag resolvers and the `FlagsSpec` that names them
//! - The `DriverResult` produced by an evaluation
//!
//! Nothing here keeps state between calls; every value is an immutable
//! snapshot owned by the caller.

mod flags;
mod resolver;
mod result;
mod states;
mod truthy;
mod value;

pub use flags::FlagsSpec;
pub use resolver::{ComputedFn, Resolver};
pub use result::DriverResult;
pub use states::{ActiveState, StateEnum, States};
pub use truthy::Truthy;
pub use value::IntoFlagValue;
