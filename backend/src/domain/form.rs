//! Validated form state handed back to the rendering layer.
//!
//! Every form action echoes the submitted values (minus secrets) together with
//! per-field messages so the page can re-render without losing input.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use utoipa::ToSchema;

/// Field name → messages, for every field that failed a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed rule for `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    /// Record `message` unless `ok` holds.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for one field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// `Ok(())` when no rule failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// State of one form after (or before) validation.
///
/// # Examples
/// ```
/// use serde::Serialize;
/// use tripfront::domain::{FieldErrors, FormState};
///
/// #[derive(Default, Serialize)]
/// struct Search { query: String }
///
/// let initial = FormState::initial("search", &Search::default());
/// assert!(!initial.valid);
///
/// let mut errors = FieldErrors::new();
/// errors.add("query", "required");
/// let state = FormState::rejected("search", &Search::default(), errors);
/// assert_eq!(state.errors.get("query"), Some(&["required".to_owned()][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Stable form identifier (for example `signIn`).
    pub id: String,
    /// Whether the submitted data passed every rule.
    pub valid: bool,
    /// Echo of the submitted values; secret fields are never included.
    #[schema(value_type = Object)]
    pub data: Value,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
}

impl FormState {
    /// Blank form for a page load.
    pub fn initial<T: Serialize>(id: &str, defaults: &T) -> Self {
        Self::build(id, defaults, false, FieldErrors::new())
    }

    /// Form whose data passed validation.
    pub fn accepted<T: Serialize>(id: &str, data: &T) -> Self {
        Self::build(id, data, true, FieldErrors::new())
    }

    /// Form whose data failed validation.
    pub fn rejected<T: Serialize>(id: &str, data: &T, errors: FieldErrors) -> Self {
        Self::build(id, data, false, errors)
    }

    fn build<T: Serialize>(id: &str, data: &T, valid: bool, errors: FieldErrors) -> Self {
        let data = serde_json::to_value(data).unwrap_or_else(|error| {
            warn!(form = id, %error, "form data could not be echoed");
            Value::Null
        });
        Self {
            id: id.to_owned(),
            valid,
            data,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        title: String,
    }

    #[test]
    fn rejected_form_lists_errors_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("title", "Nome da viagem é obrigatório");
        errors.add("title", "second");
        let state = FormState::rejected(
            "createTrip",
            &Sample {
                title: String::new(),
            },
            errors,
        );
        let value = serde_json::to_value(&state).expect("serialise");
        assert_eq!(
            value,
            json!({
                "id": "createTrip",
                "valid": false,
                "data": { "title": "" },
                "errors": { "title": ["Nome da viagem é obrigatório", "second"] }
            })
        );
    }

    #[test]
    fn accepted_form_omits_errors() {
        let state = FormState::accepted(
            "createTrip",
            &Sample {
                title: "Lisboa".into(),
            },
        );
        let value = serde_json::to_value(&state).expect("serialise");
        assert!(value.get("errors").is_none());
        assert_eq!(value["valid"], json!(true));
    }
}
