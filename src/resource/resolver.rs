//! URL resolution
//!
//! Renders a resource kind's URL template with percent-encoded path
//! parameters and appends the non-null query parameters.

use crate::error::{Error, Result};
use crate::types::Query;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use url::Url;

use super::types::Descriptor;

/// Regex for matching template placeholders: {param_name}
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").expect("static regex"));

/// Everything except unreserved characters is escaped in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Resolve a descriptor plus optional query parameters into a request URL.
///
/// `host` is the API root from the account credentials and is substituted
/// verbatim; every other placeholder value is percent-encoded. A
/// placeholder with no matching path parameter is an error, reported
/// before any network activity. Null query values are skipped.
pub fn resolve(host: &str, descriptor: &Descriptor, query: &Query) -> Result<Url> {
    let template = descriptor.kind().template();
    let mut rendered = String::with_capacity(template.len() + host.len());
    let mut last_end = 0;

    for cap in PLACEHOLDER_REGEX.captures_iter(template) {
        let full = cap.get(0).expect("capture 0 always present");
        let name = cap.get(1).expect("capture 1 always present").as_str();

        rendered.push_str(&template[last_end..full.start()]);
        if name == "host" {
            rendered.push_str(host);
        } else {
            let value = descriptor
                .params()
                .get(name)
                .ok_or_else(|| Error::missing_param(descriptor.kind().name(), name))?;
            rendered.extend(utf8_percent_encode(value, PATH_SEGMENT));
        }
        last_end = full.end();
    }
    rendered.push_str(&template[last_end..]);

    let mut url = Url::parse(&rendered)?;

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            if value.is_null() {
                continue;
            }
            pairs.append_pair(key, &query_value_to_string(value));
        }
        drop(pairs);
    }
    // An all-null query must not leave a dangling '?'
    if url.query() == Some("") {
        url.set_query(None);
    }

    Ok(url)
}

/// Convert a query value to its wire representation
fn query_value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
