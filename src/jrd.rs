use axum::{response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

/// Media type of a WebFinger response body
pub const JRD_CONTENT_TYPE: &str = "application/jrd+json";

/// A link entry of a JSON Resource Descriptor.
///
/// Members other than `rel`, `type` and `href` (`titles`, `properties`,
/// `template`, ...) are carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Link {
    pub fn new(rel: impl Into<String>) -> Self {
        Link {
            rel: Some(rel.into()),
            media_type: None,
            href: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// What a resolver knows about a resource. Either list may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    #[serde(default)]
    pub aliases: Option<Vec<String>>,
    #[serde(default)]
    pub links: Option<Vec<Link>>,
}

/// The response document.
///
/// Absent aliases or links from the resolver are serialized as `[]`, so
/// clients always find both arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Jrd {
    pub subject: String,
    pub aliases: Vec<String>,
    pub links: Vec<Link>,
}

impl Jrd {
    pub fn new(subject: &str, descriptor: ResourceDescriptor) -> Self {
        Jrd {
            subject: subject.to_string(),
            aliases: descriptor.aliases.unwrap_or_default(),
            links: descriptor.links.unwrap_or_default(),
        }
    }
}

impl IntoResponse for Jrd {
    fn into_response(self) -> axum::response::Response {
        ([("content-type", JRD_CONTENT_TYPE)],
         Json(self)).into_response()
    }
}
