//! Resource kinds and descriptors

use crate::error::{Error, Result};
use crate::types::PathParams;
use serde::{Deserialize, Serialize};

/// One endpoint category in the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Videos,
    Video,
    Languages,
    Language,
    Subtitles,
    Tasks,
    Task,
    Members,
    SafeMembers,
    Member,
    Users,
    Activities,
    Activity,
}

impl ResourceKind {
    /// Wire name of the resource kind
    pub fn name(self) -> &'static str {
        match self {
            Self::Videos => "videos",
            Self::Video => "video",
            Self::Languages => "languages",
            Self::Language => "language",
            Self::Subtitles => "subtitles",
            Self::Tasks => "tasks",
            Self::Task => "task",
            Self::Members => "members",
            Self::SafeMembers => "safe-members",
            Self::Member => "member",
            Self::Users => "users",
            Self::Activities => "activities",
            Self::Activity => "activity",
        }
    }

    /// Look up a kind by wire name. Unknown names yield `None`; callers
    /// treat that as "cannot build request" before any network call.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "videos" => Some(Self::Videos),
            "video" => Some(Self::Video),
            "languages" => Some(Self::Languages),
            "language" => Some(Self::Language),
            "subtitles" => Some(Self::Subtitles),
            "tasks" => Some(Self::Tasks),
            "task" => Some(Self::Task),
            "members" => Some(Self::Members),
            "safe-members" => Some(Self::SafeMembers),
            "member" => Some(Self::Member),
            "users" => Some(Self::Users),
            "activities" => Some(Self::Activities),
            "activity" => Some(Self::Activity),
            _ => None,
        }
    }

    /// Like [`ResourceKind::from_name`], but as an error value for
    /// callers that want the failure, not the option
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| Error::unknown_resource(name))
    }

    /// URL template for this kind. `{host}` is the API root; the other
    /// placeholders are filled from the descriptor's path parameters.
    pub fn template(self) -> &'static str {
        match self {
            Self::Videos => "{host}videos/",
            Self::Video => "{host}videos/{video_id}/",
            Self::Languages => "{host}videos/{video_id}/languages/",
            Self::Language => "{host}videos/{video_id}/languages/{language_code}/",
            Self::Subtitles => "{host}videos/{video_id}/languages/{language_code}/subtitles/",
            Self::Tasks => "{host}teams/{team}/tasks/",
            Self::Task => "{host}teams/{team}/tasks/{task_id}/",
            Self::Members => "{host}teams/{team}/members/",
            Self::SafeMembers => "{host}teams/{team}/safe-members/",
            Self::Member => "{host}teams/{team}/members/{username}/",
            Self::Users => "{host}users/{username}/",
            Self::Activities => "{host}activity/",
            Self::Activity => "{host}activity/{activity_id}/",
        }
    }
}

/// Content negotiation for one endpoint shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// JSON request/response bodies with Accept/Content-Type headers
    #[default]
    Json,
    /// Opaque payload returned verbatim (e.g. raw subtitle text)
    Raw,
}

impl ContentType {
    /// Whether JSON content negotiation headers are sent
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Structured identification of one endpoint instance.
///
/// Immutable once built: the builder methods consume and return `self`,
/// and the engine only ever reads from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    kind: ResourceKind,
    params: PathParams,
    content_type: ContentType,
}

impl Descriptor {
    /// Create a descriptor with no path parameters
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            params: PathParams::new(),
            content_type: ContentType::default(),
        }
    }

    /// Add a path parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the content type
    #[must_use]
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// The resource kind
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Path parameters for template substitution
    pub fn params(&self) -> &PathParams {
        &self.params
    }

    /// Content negotiation for this endpoint
    pub fn content(&self) -> ContentType {
        self.content_type
    }
}
