//! state-flags: derive UI flags from prioritized boolean states
//!
//! Instead of nesting conditionals to compute a button's disabled state or
//! label, declare the mutually exclusive conditions once, in priority
//! order, and describe each derived value by how it depends on whichever
//! condition is active.
//!
//! # Core Concepts
//!
//! - **States**: an ordered snapshot of named conditions; the first one
//!   that holds is the active state
//! - **Resolvers**: membership lists, per-state lookups, or computed
//!   functions of the snapshot
//! - **Evaluation**: a pure, one-shot reduction producing a `DriverResult`
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use state_flags::{evaluate, flags, states};
//!
//! let flags = flags! {
//!     isDisabled => [isNotRecorded, isUploading],
//!     text => {
//!         isNotRecorded: "Demo Disabled",
//!         isUploading: "Demo Uploading...",
//!         isUploaded: "Download Demo",
//!     },
//! };
//!
//! let states = states! {
//!     isNotRecorded: true,
//!     isUploading: false,
//!     isUploaded: false,
//! };
//!
//! let result = evaluate(&states, &flags);
//! assert_eq!(result.to_json(), json!({ "isDisabled": true, "text": "Demo Disabled" }));
//! ```

pub mod builder;
pub mod core;
pub mod declaration;
pub mod evaluator;

// Re-export commonly used types
pub use self::core::{
    ActiveState, ComputedFn, DriverResult, FlagsSpec, IntoFlagValue, Resolver, StateEnum, States,
    Truthy,
};
pub use declaration::{evaluate_value, Declaration, DeclarationError, DriverError};
pub use evaluator::evaluate;
pub use serde_json::Value;
