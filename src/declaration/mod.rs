//! Dynamic `{ states, flags }` configurations.
//!
//! This is the loosely typed entry point: a JSON configuration whose flag
//! resolvers are recognized by shape rather than by an explicit tag.
//!
//! - an array of strings is a membership resolver,
//! - an object is a lookup resolver keyed by state name,
//! - anything else is rejected with [`DriverError::InvalidFlagResolver`].
//!
//! Computed resolvers cannot be written in JSON. Attach them to a parsed
//! declaration with [`Declaration::with_computed`].
//!
//! Validation uses Stillwater's `Validation` to report every problem in
//! one pass instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use state_flags::declaration::evaluate_value;
//!
//! let result = evaluate_value(&json!({
//!     "states": { "isNotRecorded": false, "isUploading": true, "isUploaded": false },
//!     "flags": {
//!         "isDisabled": ["isNotRecorded", "isUploading"],
//!         "text": {
//!             "isNotRecorded": "Demo Disabled",
//!             "isUploading": "Demo Uploading...",
//!             "isUploaded": "Download Demo"
//!         }
//!     }
//! }))
//! .unwrap();
//!
//! assert_eq!(result.to_json(), json!({ "isDisabled": true, "text": "Demo Uploading..." }));
//! ```

pub mod error;

pub use error::{DeclarationError, DriverError};

use crate::core::{DriverResult, FlagsSpec, IntoFlagValue, Resolver, StateEnum, States};
use crate::evaluator::evaluate;
use serde_json::{Map, Value};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

type Parsed<T> = Validation<T, NonEmptyVec<DriverError>>;

const STATES: &str = "states";
const FLAGS: &str = "flags";

/// A validated configuration, ready to evaluate.
#[derive(Clone, Debug, Default)]
pub struct Declaration {
    states: States,
    flags: FlagsSpec<Value>,
}

impl Declaration {
    pub fn new(states: States, flags: FlagsSpec<Value>) -> Self {
        Self { states, flags }
    }

    /// Validate a `{ states, flags }` configuration object.
    ///
    /// Either every check passes and a full declaration is returned, or
    /// all problems are reported together.
    pub fn from_value(config: &Value) -> Result<Self, DeclarationError> {
        match validate(config) {
            Validation::Success(declaration) => Ok(declaration),
            Validation::Failure(errors) => {
                let errors: Vec<DriverError> = errors.iter().cloned().collect();
                debug!(problems = errors.len(), "rejected declaration");
                Err(DeclarationError { errors })
            }
        }
    }

    /// Add or replace a computed flag.
    ///
    /// A closure returning `None` leaves the flag absent from the result.
    pub fn with_computed<F, R>(mut self, name: impl Into<String>, compute: F) -> Self
    where
        F: Fn(&States, &StateEnum, Option<usize>) -> R + Send + Sync + 'static,
        R: IntoFlagValue,
    {
        self.flags.insert(name, Resolver::computed_value(compute));
        self
    }

    /// Add or replace a computed flag that may resolve to nothing.
    pub fn with_computed_optional<F>(mut self, name: impl Into<String>, compute: F) -> Self
    where
        F: Fn(&States, &StateEnum, Option<usize>) -> Option<Value> + Send + Sync + 'static,
    {
        self.flags.insert(name, Resolver::computed_optional(compute));
        self
    }

    /// Replace the state snapshot, keeping the flags.
    pub fn with_states(mut self, states: States) -> Self {
        self.states = states;
        self
    }

    pub fn states(&self) -> &States {
        &self.states
    }

    pub fn flags(&self) -> &FlagsSpec<Value> {
        &self.flags
    }

    pub fn evaluate(&self) -> DriverResult<Value> {
        evaluate(&self.states, &self.flags)
    }
}

impl TryFrom<&Value> for Declaration {
    type Error = DeclarationError;

    fn try_from(config: &Value) -> Result<Self, Self::Error> {
        Declaration::from_value(config)
    }
}

/// Validate and evaluate a configuration in one call.
pub fn evaluate_value(config: &Value) -> Result<DriverResult<Value>, DeclarationError> {
    Declaration::from_value(config).map(|declaration| declaration.evaluate())
}

fn validate(config: &Value) -> Parsed<Declaration> {
    let Some(object) = config.as_object() else {
        return Validation::fail(DriverError::InvalidConfig {
            found: shape(config).to_string(),
        });
    };

    Validation::all_vec(vec![
        parse_states(object).map(Section::States),
        parse_flags(object).map(Section::Flags),
    ])
    .map(assemble)
}

/// A validated top-level option.
enum Section {
    States(States),
    Flags(FlagsSpec<Value>),
}

fn parse_states(object: &Map<String, Value>) -> Parsed<States> {
    option_object(object, STATES).map(|states| States::from(states.clone()))
}

fn parse_flags(object: &Map<String, Value>) -> Parsed<FlagsSpec<Value>> {
    match option_object(object, FLAGS) {
        Validation::Success(flags) => {
            let parsed: Vec<Parsed<(String, Resolver<Value>)>> = flags
                .iter()
                .map(|(name, value)| parse_flag(name, value))
                .collect();
            Validation::all_vec(parsed).map(|entries| entries.into_iter().collect())
        }
        Validation::Failure(errors) => Validation::Failure(errors),
    }
}

fn option_object<'a>(
    object: &'a Map<String, Value>,
    option: &'static str,
) -> Parsed<&'a Map<String, Value>> {
    match object.get(option) {
        None => Validation::fail(DriverError::MissingOption { option }),
        Some(Value::Object(inner)) => Validation::success(inner),
        Some(other) => Validation::fail(DriverError::InvalidOption {
            option,
            found: shape(other).to_string(),
        }),
    }
}

fn parse_flag(name: &str, value: &Value) -> Parsed<(String, Resolver<Value>)> {
    match resolver_from_value(value) {
        Ok(resolver) => Validation::success((name.to_string(), resolver)),
        Err(found) => Validation::fail(DriverError::InvalidFlagResolver {
            flag: name.to_string(),
            found,
        }),
    }
}

fn assemble(sections: Vec<Section>) -> Declaration {
    sections
        .into_iter()
        .fold(Declaration::default(), |mut declaration, section| {
            match section {
                Section::States(states) => declaration.states = states,
                Section::Flags(flags) => declaration.flags = flags,
            }
            declaration
        })
}

/// Dispatch on JSON shape. The error describes what was found instead.
fn resolver_from_value(value: &Value) -> Result<Resolver<Value>, String> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| format!("array containing {}", shape(item)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Resolver::Membership),
        Value::Object(table) => Ok(Resolver::Lookup(
            table
                .iter()
                .map(|(state, value)| (state.clone(), value.clone()))
                .collect(),
        )),
        other => Err(shape(other).to_string()),
    }
}

fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn upload_config(states: Value) -> Value {
        json!({
            "states": states,
            "flags": {
                "isDisabled": ["isNotRecorded", "isUploading"],
                "text": {
                    "isNotRecorded": "Demo Disabled",
                    "isUploading": "Demo Uploading...",
                    "isUploaded": "Download Demo"
                }
            }
        })
    }

    #[test]
    fn shapes_map_to_resolver_kinds() {
        let declaration = Declaration::from_value(&upload_config(json!({}))).unwrap();

        let kinds: Vec<_> = declaration
            .flags()
            .iter()
            .map(|(name, resolver)| (name, resolver.kind()))
            .collect();
        assert_eq!(kinds, vec![("isDisabled", "membership"), ("text", "lookup")]);
    }

    #[test]
    fn evaluates_uploaded_state() {
        let result = evaluate_value(&upload_config(json!({
            "isNotRecorded": false,
            "isUploading": false,
            "isUploaded": true
        })))
        .unwrap();

        assert_eq!(result.get_bool("isDisabled"), Some(false));
        assert_eq!(result.get_str("text"), Some("Download Demo"));
    }

    #[test]
    fn states_are_coerced_with_javascript_truthiness() {
        let result = evaluate_value(&upload_config(json!({
            "isNotRecorded": 0,
            "isUploading": "",
            "isUploaded": "yes"
        })))
        .unwrap();

        assert_eq!(result.get_str("text"), Some("Download Demo"));
    }

    #[test]
    fn number_resolver_is_rejected() {
        let error = evaluate_value(&json!({
            "states": { "a": true },
            "flags": { "x": 42 }
        }))
        .unwrap_err();

        assert_eq!(
            error.errors,
            vec![DriverError::InvalidFlagResolver {
                flag: "x".to_string(),
                found: "number".to_string(),
            }]
        );
    }

    #[test]
    fn non_string_list_item_is_rejected() {
        let error = Declaration::from_value(&json!({
            "states": { "a": true },
            "flags": { "x": ["a", 1] }
        }))
        .unwrap_err();

        assert!(error.concerns_flag("x"));
        assert!(error.to_string().contains("array containing number"));
    }

    #[test]
    fn every_invalid_flag_is_reported() {
        let error = Declaration::from_value(&json!({
            "states": { "a": true },
            "flags": {
                "ok": ["a"],
                "n": null,
                "b": true,
                "s": "a"
            }
        }))
        .unwrap_err();

        assert_eq!(error.errors.len(), 3);
        assert!(error.concerns_flag("n"));
        assert!(error.concerns_flag("b"));
        assert!(error.concerns_flag("s"));
        assert!(!error.concerns_flag("ok"));
    }

    #[test]
    fn missing_and_malformed_options_are_reported_together() {
        let error = Declaration::from_value(&json!({ "states": [true] })).unwrap_err();

        assert_eq!(error.errors.len(), 2);
        assert!(error.errors.contains(&DriverError::InvalidOption {
            option: "states",
            found: "array".to_string(),
        }));
        assert!(error
            .errors
            .contains(&DriverError::MissingOption { option: "flags" }));
    }

    #[test]
    fn non_object_config_is_rejected() {
        let error = Declaration::from_value(&json!("states")).unwrap_err();

        assert_eq!(
            error.errors,
            vec![DriverError::InvalidConfig {
                found: "string".to_string()
            }]
        );
    }

    #[test]
    fn unknown_top_level_options_are_ignored() {
        let mut config = upload_config(json!({ "isNotRecorded": true }));
        config["theme"] = json!("dark");

        let result = evaluate_value(&config).unwrap();
        assert_eq!(result.get_str("text"), Some("Demo Disabled"));
    }

    #[test]
    fn empty_list_and_empty_map_are_distinct() {
        let declaration = Declaration::from_value(&json!({
            "states": { "a": true },
            "flags": { "list": [], "map": {} }
        }))
        .unwrap();

        let result = declaration.evaluate();
        assert_eq!(result.get_bool("list"), Some(false));
        assert_eq!(result.get("map"), None);
        assert!(result.contains("map"));
    }

    #[test]
    fn computed_flags_attach_after_parsing() {
        let declaration = Declaration::from_value(&upload_config(json!({
            "isNotRecorded": false,
            "isUploading": true,
            "isUploaded": false
        })))
        .unwrap()
        .with_computed("showWarning", |_: &States, order: &StateEnum, index| {
            order.is_before(index, "isUploaded")
        })
        .with_computed_optional("position", |_: &States, _: &StateEnum, index| {
            index.map(Value::from)
        });

        let result = declaration.evaluate();
        assert_eq!(result.get_bool("showWarning"), Some(true));
        assert_eq!(result.get("position"), Some(&json!(1)));
        assert_eq!(result.len(), 4);
    }

    #[test]
    fn computed_none_is_omitted_from_output() {
        let declaration = Declaration::from_value(&upload_config(json!({})))
            .unwrap()
            .with_computed("position", |_: &States, _: &StateEnum, index: Option<usize>| {
                index.map(Value::from)
            });

        let result = declaration.evaluate();
        assert!(result.contains("position"));
        assert_eq!(result.get("position"), None);
        assert_eq!(result.to_json(), json!({ "isDisabled": false }));

        let result = declaration
            .with_states(States::new().with("isUploaded", true))
            .evaluate();
        assert_eq!(result.get("position"), Some(&json!(0)));
    }

    #[test]
    fn flags_keep_document_order_after_validation() {
        let declaration = Declaration::from_value(&json!({
            "flags": { "z": ["a"], "m": {}, "a": [] },
            "states": { "a": true }
        }))
        .unwrap();

        let names: Vec<_> = declaration.flags().iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["z", "m", "a"]);
        assert_eq!(declaration.states().active_index(), Some(0));
    }

    #[test]
    fn invalid_flags_are_reported_alongside_missing_states() {
        let error = Declaration::from_value(&json!({ "flags": { "x": 1, "y": "s" } })).unwrap_err();

        assert_eq!(error.errors.len(), 3);
        assert_eq!(error.errors[0], DriverError::MissingOption { option: "states" });
        assert!(error.concerns_flag("x"));
        assert!(error.concerns_flag("y"));
    }

    #[test]
    fn declaration_can_be_reevaluated_with_new_states() {
        let declaration = Declaration::from_value(&upload_config(json!({}))).unwrap();
        assert_eq!(declaration.evaluate().get_str("text"), None);

        let declaration =
            declaration.with_states(States::new().with("isUploaded", true));
        assert_eq!(declaration.evaluate().get_str("text"), Some("Download Demo"));
    }

    #[test]
    fn try_from_matches_from_value() {
        let config = upload_config(json!({ "isUploading": true }));
        let declaration = Declaration::try_from(&config).unwrap();

        assert_eq!(declaration.states().active_index(), Some(0));
    }
}
