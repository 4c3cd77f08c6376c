//! Planned activities within a trip.

use serde::Serialize;
use utoipa::ToSchema;

use super::validation::{RecordValidationError, finite};

/// Activity row from `GET /app/Activities/listActivities`.
///
/// ## Invariants
/// - `cost` is finite and not negative.
///
/// # Examples
/// ```
/// use tripfront::domain::Activity;
///
/// assert!(Activity::new(None, "t-1", "Museu", None, -1.0).is_err());
/// let activity = Activity::new(None, "t-1", "Museu", None, 25.0).expect("valid");
/// assert_eq!(activity.cost(), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    trip_id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    cost: f64,
}

impl Activity {
    /// Validate and build an activity.
    pub fn new(
        id: Option<String>,
        trip_id: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
        cost: f64,
    ) -> Result<Self, RecordValidationError> {
        let cost = non_negative_cost(cost)?;
        Ok(Self {
            id,
            trip_id: trip_id.into(),
            name: name.into(),
            description,
            cost,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn trip_id(&self) -> &str {
        self.trip_id.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Validated payload for `POST /app/Activities/create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub trip_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cost: f64,
}

pub(crate) fn non_negative_cost(cost: f64) -> Result<f64, RecordValidationError> {
    let cost = finite(cost, "cost")?;
    if cost < 0.0 {
        return Err(RecordValidationError::Negative { field: "cost" });
    }
    Ok(cost)
}
