//! Team membership operations

use super::Client;
use crate::error::Result;
use crate::resource::{Descriptor, ResourceKind};
use crate::types::{JsonValue, Method, Query};
use serde_json::json;

impl Client {
    /// List a team's members, traversing all pages
    pub async fn get_members(&self, team: &str) -> Result<Vec<JsonValue>> {
        let descriptor = Descriptor::new(ResourceKind::Members).param("team", team);
        self.fetch_list(&descriptor, Query::new()).await
    }

    /// Fetch one member record
    pub async fn get_member(&self, team: &str, username: &str) -> Result<JsonValue> {
        let descriptor = Descriptor::new(ResourceKind::Member)
            .param("team", team)
            .param("username", username);
        self.fetch_object(Method::Get, &descriptor, Query::new(), None)
            .await
    }

    /// Add a member to a team.
    ///
    /// Additions go through the safe-members endpoint, which invites
    /// rather than force-joins; direct member creation is reserved for
    /// the platform itself.
    pub async fn add_member(
        &self,
        team: &str,
        username: &str,
        role: Option<&str>,
    ) -> Result<JsonValue> {
        let mut body = serde_json::Map::new();
        body.insert("username".to_string(), json!(username));
        if let Some(role) = role {
            body.insert("role".to_string(), json!(role));
        }

        let descriptor = Descriptor::new(ResourceKind::SafeMembers).param("team", team);
        self.fetch_object(
            Method::Post,
            &descriptor,
            Query::new(),
            Some(&JsonValue::Object(body)),
        )
        .await
    }

    /// Remove a member from a team
    pub async fn remove_member(&self, team: &str, username: &str) -> Result<JsonValue> {
        let descriptor = Descriptor::new(ResourceKind::Member)
            .param("team", team)
            .param("username", username);
        self.fetch_object(Method::Delete, &descriptor, Query::new(), None)
            .await
    }
}
