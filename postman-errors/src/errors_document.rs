use crate::url::longest_common_prefix;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorsDocument {
    pub errors: Vec<ErrorGroup>,
}

/// One request's URL and method paired with its recorded error responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorGroup {
    pub request: ErrorRequest,
    pub responses: Vec<ErrorResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRequest {
    pub url: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub body: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<ErrorHeader>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorHeader {
    pub name: String,
    pub value: String,
}

impl ErrorsDocument {
    /// Orders the groups so that the longest, most specific URLs come first.
    pub fn new(mut errors: Vec<ErrorGroup>) -> Self {
        errors.sort_by(|a, b| b.request.url_length().cmp(&a.request.url_length()));
        Self { errors }
    }

    /// The common prefix of every group's URL followed by a wildcard, `None` without groups.
    pub fn watch_pattern(&self) -> Option<String> {
        longest_common_prefix(self.errors.iter().map(|group| group.request.url.as_str()))
            .map(|prefix| format!("{}*", prefix))
    }
}

impl ErrorRequest {
    fn url_length(&self) -> usize {
        self.url.chars().count()
    }
}
