//! Test utilities for the crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`). Only
//! compiled for tests or with the `test-support` feature.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use uuid::Uuid;

use crate::domain::{Activity, Member, Trip, UserProfile};

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixtureClock {
    pub utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Instant every fixture clock starts at.
pub fn fixture_now() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(2025, 3, 10, 9, 30, 0).single() {
        Some(now) => now,
        None => panic!("fixture timestamp must be unambiguous"),
    }
}

pub fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: fixture_now(),
    })
}

pub fn sample_profile() -> UserProfile {
    let id = Uuid::from_u128(0x3fa8_5f64_5717_4562_b3fc_2c96_3f66_afa6);
    match UserProfile::new(id, "Ada", "ada@example.com", None, fixture_now()) {
        Ok(profile) => profile,
        Err(error) => panic!("fixture profile must validate: {error}"),
    }
}

pub fn sample_trip(id: &str) -> Trip {
    Trip {
        id: Some(id.to_owned()),
        user_owner_id: sample_profile().id().to_string(),
        title: format!("Trip {id}"),
        destination: "Lisboa".to_owned(),
        start_date: "2025-05-01".to_owned(),
        end_date: "2025-05-10".to_owned(),
        description: None,
        budget: Some(1200.0),
    }
}

pub fn sample_member(id: &str, trip_id: &str) -> Member {
    Member {
        id: id.to_owned(),
        trip_id: trip_id.to_owned(),
        name: "Grace".to_owned(),
        email: "grace@example.com".to_owned(),
        invite_status: 0,
        access_token: "magic".to_owned(),
        token_life_time: "2025-05-01T00:00:00Z".to_owned(),
        trip_balance: 0.0,
    }
}

pub fn sample_activity(trip_id: &str) -> Activity {
    match Activity::new(Some("act-1".to_owned()), trip_id, "Museu", None, 25.0) {
        Ok(activity) => activity,
        Err(error) => panic!("fixture activity must validate: {error}"),
    }
}
