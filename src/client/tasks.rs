//! Team task operations

use super::{is_valid_video_id, Client, Paging};
use crate::error::{Error, Result};
use crate::resource::{Descriptor, ResourceKind};
use crate::types::{JsonValue, Method, Query};
use serde_json::json;

/// Filters for listing a team's tasks
#[derive(Debug, Clone, Default)]
pub struct TaskFilters {
    /// Task type (e.g. "Subtitle", "Translate", "Review", "Approve")
    pub task_type: Option<String>,
    /// Assignee username
    pub assignee: Option<String>,
    /// Language code
    pub language: Option<String>,
    /// Video identifier
    pub video_id: Option<String>,
    /// Paging window
    pub paging: Paging,
}

impl TaskFilters {
    /// Filter by task type
    #[must_use]
    pub fn task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    /// Filter by assignee
    #[must_use]
    pub fn assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Filter by language code
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Filter by video
    #[must_use]
    pub fn video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = Some(video_id.into());
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
        if let Some(task_type) = &self.task_type {
            query.insert("type".to_string(), json!(task_type));
        }
        if let Some(assignee) = &self.assignee {
            query.insert("assignee".to_string(), json!(assignee));
        }
        if let Some(language) = &self.language {
            query.insert("language".to_string(), json!(language));
        }
        if let Some(video_id) = &self.video_id {
            query.insert("video_id".to_string(), json!(video_id));
        }
        self.paging.apply(&mut query);
        query
    }
}

impl Client {
    /// List a team's tasks matching the filters, traversing all pages
    pub async fn get_tasks(&self, team: &str, filters: &TaskFilters) -> Result<Vec<JsonValue>> {
        let descriptor = Descriptor::new(ResourceKind::Tasks).param("team", team);
        self.fetch_list(&descriptor, filters.to_query()).await
    }

    /// Fetch one task
    pub async fn get_task(&self, team: &str, task_id: u64) -> Result<JsonValue> {
        let descriptor = Descriptor::new(ResourceKind::Task)
            .param("team", team)
            .param("task_id", task_id.to_string());
        self.fetch_object(Method::Get, &descriptor, Query::new(), None)
            .await
    }

    /// Create a task on a team.
    ///
    /// Review/approve-style tasks reference the subtitle version they
    /// apply to; the version number comes from `language_info` when
    /// supplied, otherwise from a language lookup.
    pub async fn create_task(
        &self,
        team: &str,
        video_id: &str,
        task_type: &str,
        language_code: &str,
        assignee: Option<&str>,
        language_info: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        if !is_valid_video_id(video_id) {
            return Err(Error::config(format!("invalid video id: {video_id}")));
        }

        let version = match language_info {
            Some(info) => super::last_version_number(info),
            None => self
                .get_video_language(video_id, language_code)
                .await?
                .as_ref()
                .and_then(super::last_version_number),
        };

        let mut body = serde_json::Map::new();
        body.insert("type".to_string(), json!(task_type));
        body.insert("video_id".to_string(), json!(video_id));
        body.insert("language".to_string(), json!(language_code));
        if let Some(assignee) = assignee {
            body.insert("assignee".to_string(), json!(assignee));
        }
        if let Some(version) = version {
            body.insert("version_no".to_string(), json!(version));
        }

        let descriptor = Descriptor::new(ResourceKind::Tasks).param("team", team);
        self.fetch_object(
            Method::Post,
            &descriptor,
            Query::new(),
            Some(&JsonValue::Object(body)),
        )
        .await
    }

    /// Delete a task
    pub async fn delete_task(&self, team: &str, task_id: u64) -> Result<JsonValue> {
        let descriptor = Descriptor::new(ResourceKind::Task)
            .param("team", team)
            .param("task_id", task_id.to_string());
        self.fetch_object(Method::Delete, &descriptor, Query::new(), None)
            .await
    }
}
