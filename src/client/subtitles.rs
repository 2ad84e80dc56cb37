//! Subtitle track operations

use super::{is_valid_video_id, Client};
use crate::engine::Payload;
use crate::error::{Error, Result};
use crate::resource::{ContentType, Descriptor, ResourceKind};
use crate::types::{JsonValue, Method, Query};
use serde_json::json;

/// Latest version number from a language record.
///
/// Index 0 of `versions` is always the most recent version. The number
/// itself is not an array index: versions can be deleted out of order,
/// so it must be read from the record, never derived from positions.
pub fn last_version_number(language_info: &JsonValue) -> Option<u64> {
    language_info
        .get("versions")?
        .get(0)?
        .get("version_no")?
        .as_u64()
}

impl Client {
    /// Fetch a subtitle track.
    ///
    /// `format` selects the wire format; anything other than JSON comes
    /// back as a raw passthrough payload. When `language_info` is
    /// supplied, the latest version number is read from it instead of
    /// being looked up with an extra request.
    pub async fn get_subtitle(
        &self,
        video_id: &str,
        language_code: &str,
        format: Option<&str>,
        language_info: Option<&JsonValue>,
    ) -> Result<Option<Payload>> {
        if !is_valid_video_id(video_id) {
            return Ok(None);
        }

        let version = self
            .resolve_version(video_id, language_code, language_info)
            .await?;

        let content = match format {
            Some(f) if f != "json" => ContentType::Raw,
            _ => ContentType::Json,
        };
        let descriptor = Descriptor::new(ResourceKind::Subtitles)
            .param("video_id", video_id)
            .param("language_code", language_code)
            .content_type(content);

        let mut query = Query::new();
        if let Some(format) = format {
            query.insert("format".to_string(), json!(format));
        }
        if let Some(version) = version {
            query.insert("version_no".to_string(), json!(version));
        }

        let payload = self.fetch(Method::Get, &descriptor, query, None).await?;
        Ok(Some(payload))
    }

    /// Fetch subtitle metadata as JSON, optionally pinned to a version
    pub async fn get_subtitle_info(
        &self,
        video_id: &str,
        language_code: &str,
        version: Option<u64>,
    ) -> Result<Option<JsonValue>> {
        if !is_valid_video_id(video_id) {
            return Ok(None);
        }

        let descriptor = Descriptor::new(ResourceKind::Subtitles)
            .param("video_id", video_id)
            .param("language_code", language_code);

        let mut query = Query::new();
        query.insert("format".to_string(), json!("json"));
        if let Some(version) = version {
            query.insert("version_no".to_string(), json!(version));
        }

        let value = self
            .fetch_object(Method::Get, &descriptor, query, None)
            .await?;
        Ok(Some(value))
    }

    /// Upload a subtitle track.
    ///
    /// The upstream protocol models uploads as updates, so this is a PUT
    /// even though it conceptually creates content. The latest version
    /// number is taken from `language_info` when given, otherwise looked
    /// up first.
    #[allow(clippy::too_many_arguments)]
    pub async fn upload_subtitle(
        &self,
        video_id: &str,
        language_code: &str,
        subtitles: &str,
        sub_format: Option<&str>,
        title: Option<&str>,
        description: Option<&str>,
        language_info: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        if !is_valid_video_id(video_id) {
            return Err(Error::config(format!("invalid video id: {video_id}")));
        }

        let version = self
            .resolve_version(video_id, language_code, language_info)
            .await?;

        let mut body = serde_json::Map::new();
        body.insert("subtitles".to_string(), json!(subtitles));
        body.insert(
            "sub_format".to_string(),
            json!(sub_format.unwrap_or("srt")),
        );
        if let Some(title) = title {
            body.insert("title".to_string(), json!(title));
        }
        if let Some(description) = description {
            body.insert("description".to_string(), json!(description));
        }
        if let Some(version) = version {
            body.insert("version_no".to_string(), json!(version));
        }

        let descriptor = Descriptor::new(ResourceKind::Subtitles)
            .param("video_id", video_id)
            .param("language_code", language_code);
        self.fetch_object(
            Method::Put,
            &descriptor,
            Query::new(),
            Some(&JsonValue::Object(body)),
        )
        .await
    }

    /// Latest version number, from the supplied record or a lookup.
    ///
    /// A language with no versions yet resolves to `None`; that is a
    /// normal state for a freshly created language, not an error.
    async fn resolve_version(
        &self,
        video_id: &str,
        language_code: &str,
        language_info: Option<&JsonValue>,
    ) -> Result<Option<u64>> {
        if let Some(info) = language_info {
            return Ok(last_version_number(info));
        }
        let fetched = self.get_video_language(video_id, language_code).await?;
        Ok(fetched.as_ref().and_then(last_version_number))
    }
}
