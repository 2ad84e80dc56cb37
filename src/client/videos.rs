//! Video and language operations

use super::{is_valid_video_id, Client, Paging};
use crate::error::{Error, Result};
use crate::resource::{Descriptor, ResourceKind};
use crate::types::{JsonValue, Method, Query};
use serde_json::json;

/// Filters for listing videos
#[derive(Debug, Clone, Default)]
pub struct VideoFilters {
    /// Restrict to one team's videos
    pub team: Option<String>,
    /// Restrict to one project within the team
    pub project: Option<String>,
    /// Paging window
    pub paging: Paging,
}

impl VideoFilters {
    /// Filter by team
    #[must_use]
    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// Filter by project
    #[must_use]
    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
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
        if let Some(project) = &self.project {
            query.insert("project".to_string(), json!(project));
        }
        self.paging.apply(&mut query);
        query
    }
}

impl Client {
    /// List videos matching the filters, traversing all pages
    pub async fn get_videos(&self, filters: &VideoFilters) -> Result<Vec<JsonValue>> {
        let descriptor = Descriptor::new(ResourceKind::Videos);
        self.fetch_list(&descriptor, filters.to_query()).await
    }

    /// Fetch one video's record. A malformed identifier is an explicit
    /// no-result; no request is attempted for it.
    pub async fn get_video_info(&self, video_id: &str) -> Result<Option<JsonValue>> {
        if !is_valid_video_id(video_id) {
            return Ok(None);
        }
        let descriptor = Descriptor::new(ResourceKind::Video).param("video_id", video_id);
        let value = self
            .fetch_object(Method::Get, &descriptor, Query::new(), None)
            .await?;
        Ok(Some(value))
    }

    /// Register a video by URL, optionally under a team/project
    pub async fn add_video(
        &self,
        video_url: &str,
        team: Option<&str>,
        project: Option<&str>,
    ) -> Result<JsonValue> {
        let mut body = serde_json::Map::new();
        body.insert("video_url".to_string(), json!(video_url));
        if let Some(team) = team {
            body.insert("team".to_string(), json!(team));
        }
        if let Some(project) = project {
            body.insert("project".to_string(), json!(project));
        }

        let descriptor = Descriptor::new(ResourceKind::Videos);
        self.fetch_object(
            Method::Post,
            &descriptor,
            Query::new(),
            Some(&JsonValue::Object(body)),
        )
        .await
    }

    /// Update fields on a video record
    pub async fn update_video(&self, video_id: &str, fields: &JsonValue) -> Result<JsonValue> {
        let descriptor = self.video_descriptor(video_id)?;
        self.fetch_object(Method::Put, &descriptor, Query::new(), Some(fields))
            .await
    }

    /// Remove a video
    pub async fn delete_video(&self, video_id: &str) -> Result<JsonValue> {
        let descriptor = self.video_descriptor(video_id)?;
        self.fetch_object(Method::Delete, &descriptor, Query::new(), None)
            .await
    }

    /// List the subtitle languages available for a video
    pub async fn get_video_languages(&self, video_id: &str) -> Result<Option<Vec<JsonValue>>> {
        if !is_valid_video_id(video_id) {
            return Ok(None);
        }
        let descriptor = Descriptor::new(ResourceKind::Languages).param("video_id", video_id);
        let records = self.fetch_list(&descriptor, Query::new()).await?;
        Ok(Some(records))
    }

    /// Fetch one language record (including its `versions` history)
    pub async fn get_video_language(
        &self,
        video_id: &str,
        language_code: &str,
    ) -> Result<Option<JsonValue>> {
        if !is_valid_video_id(video_id) {
            return Ok(None);
        }
        let descriptor = Descriptor::new(ResourceKind::Language)
            .param("video_id", video_id)
            .param("language_code", language_code);
        let value = self
            .fetch_object(Method::Get, &descriptor, Query::new(), None)
            .await?;
        Ok(Some(value))
    }

    /// Create a subtitle language on a video
    pub async fn create_language(
        &self,
        video_id: &str,
        language_code: &str,
    ) -> Result<JsonValue> {
        if !is_valid_video_id(video_id) {
            return Err(Error::config(format!("invalid video id: {video_id}")));
        }
        let descriptor = Descriptor::new(ResourceKind::Languages).param("video_id", video_id);
        let body = json!({ "language_code": language_code });
        self.fetch_object(Method::Post, &descriptor, Query::new(), Some(&body))
            .await
    }

    /// Descriptor for a single video, failing fast on a malformed id
    /// (mutations are loud, unlike read lookups)
    fn video_descriptor(&self, video_id: &str) -> Result<Descriptor> {
        if !is_valid_video_id(video_id) {
            return Err(Error::config(format!("invalid video id: {video_id}")));
        }
        Ok(Descriptor::new(ResourceKind::Video).param("video_id", video_id))
    }
}
