//! User profile and activity stream operations

use super::{Client, Paging};
use crate::error::Result;
use crate::resource::{Descriptor, ResourceKind};
use crate::types::{JsonValue, Method, Query};
use chrono::{DateTime, Utc};
use serde_json::json;

/// Filters for the activity stream.
///
/// Team activity streams can run to tens of thousands of records; pair
/// these filters with a record ceiling in the client configuration when
/// traversing them whole.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilters {
    /// Restrict to one team's activity
    pub team: Option<String>,
    /// Activity type discriminator
    pub activity_type: Option<u32>,
    /// Language code
    pub language: Option<String>,
    /// Only activity strictly before this instant
    pub before: Option<DateTime<Utc>>,
    /// Only activity strictly after this instant
    pub after: Option<DateTime<Utc>>,
    /// Paging window
    pub paging: Paging,
}

impl ActivityFilters {
    /// Filter by team
    #[must_use]
    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Filter by activity type
    #[must_use]
    pub fn activity_type(mut self, activity_type: u32) -> Self {
        self.activity_type = Some(activity_type);
        self
    }

    /// Filter by language code
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Only activity before this instant
    #[must_use]
    pub fn before(mut self, before: DateTime<Utc>) -> Self {
        self.before = Some(before);
        self
    }

    /// Only activity after this instant
    #[must_use]
    pub fn after(mut self, after: DateTime<Utc>) -> Self {
        self.after = Some(after);
        self
    }

    /// Set the paging window
    #[must_use]
    pub fn paging(mut self, paging: Paging) -> Self {
        self.paging = paging;
        self
    }

    fn to_query(&self) -> Query {
        let mut query = Query::new();
        if let Some(team) = &self.team {
            query.insert("team".to_string(), json!(team));
        }
        if let Some(activity_type) = self.activity_type {
            query.insert("type".to_string(), json!(activity_type));
        }
        if let Some(language) = &self.language {
            query.insert("language".to_string(), json!(language));
        }
        if let Some(before) = self.before {
            query.insert("before".to_string(), json!(before.timestamp()));
        }
        if let Some(after) = self.after {
            query.insert("after".to_string(), json!(after.timestamp()));
        }
        self.paging.apply(&mut query);
        query
    }
}

impl Client {
    /// Fetch a user's public profile
    pub async fn get_user(&self, username: &str) -> Result<JsonValue> {
        let descriptor = Descriptor::new(ResourceKind::Users).param("username", username);
        self.fetch_object(Method::Get, &descriptor, Query::new(), None)
            .await
    }

    /// List activity records matching the filters, traversing all pages
    pub async fn get_activities(&self, filters: &ActivityFilters) -> Result<Vec<JsonValue>> {
        let descriptor = Descriptor::new(ResourceKind::Activities);
        self.fetch_list(&descriptor, filters.to_query()).await
    }

    /// Fetch one activity record
    pub async fn get_activity(&self, activity_id: u64) -> Result<JsonValue> {
        let descriptor =
            Descriptor::new(ResourceKind::Activity).param("activity_id", activity_id.to_string());
        self.fetch_object(Method::Get, &descriptor, Query::new(), None)
            .await
    }
}
