use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 클라이언트가 보내는 일기 한 편
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub date: String,
    pub weather: String,
    pub mood: String,
    #[serde(default)]
    pub answers: Vec<Option<String>>,
    pub free_note: String,
}

impl Submission {
    /// Answer at `index`, or `""` when the slot is absent or null.
    pub fn answer(&self, index: usize) -> &str {
        self.answers
            .get(index)
            .and_then(|a| a.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalPage {
    pub parent: Parent,
    pub properties: PageProperties,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parent {
    pub database_id: String,
}

/// The nine database columns every journal page carries. Field order is the
/// serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageProperties {
    #[serde(rename = "제목")]
    pub title: TitleProperty,
    #[serde(rename = "날짜")]
    pub date: DateProperty,
    #[serde(rename = "날씨")]
    pub weather: RichTextProperty,
    #[serde(rename = "기분")]
    pub mood: RichTextProperty,
    #[serde(rename = "답변1")]
    pub answer1: RichTextProperty,
    #[serde(rename = "답변2")]
    pub answer2: RichTextProperty,
    #[serde(rename = "답변3")]
    pub answer3: RichTextProperty,
    #[serde(rename = "답변4")]
    pub answer4: RichTextProperty,
    #[serde(rename = "자유노트")]
    pub free_note: RichTextProperty,
}

impl PageProperties {
    pub const NAMES: [&'static str; 9] = [
        "제목", "날짜", "날씨", "기분", "답변1", "답변2", "답변3", "답변4", "자유노트",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleProperty {
    pub title: Vec<TextObject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateProperty {
    pub date: DateValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateValue {
    pub start: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichTextProperty {
    pub rich_text: Vec<TextObject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextObject {
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub content: String,
}

impl TextObject {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

impl TitleProperty {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            title: vec![TextObject::plain(content)],
        }
    }
}

impl RichTextProperty {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            rich_text: vec![TextObject::plain(content)],
        }
    }
}

/// Notion's answer to a successful page creation. Only the id is used.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPage {
    pub id: String,
}

/// Hosting-agnostic inbound request, shaped like a gateway / Netlify function
/// event so the Lambda host can deserialize it directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRequest {
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    /// Set when the raw body could not be decoded as text. Never repaired.
    #[serde(skip)]
    pub body_error: Option<String>,
}

impl InboundRequest {
    pub fn new(method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            http_method: method.into(),
            body,
            is_base64_encoded: false,
            body_error: None,
        }
    }

    /// Builds a request from raw body bytes. Invalid UTF-8 is recorded, not
    /// replaced, so the handler fails the request instead of saving altered
    /// text.
    pub fn from_bytes(method: impl Into<String>, bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::new(method, None);
        }

        match std::str::from_utf8(bytes) {
            Ok(text) => Self::new(method, Some(text.to_string())),
            Err(e) => Self {
                body_error: Some(format!("request body is not valid UTF-8: {}", e)),
                ..Self::new(method, None)
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl InboundResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
