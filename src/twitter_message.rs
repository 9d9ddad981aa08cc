use serde::Deserialize;

/// A post as returned by recent search, before any cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPost {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub data: Vec<SearchItem>,
    pub meta: Option<SearchMeta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchMeta {
    #[serde(default)]
    pub result_count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: Option<String>,
}

/// v2 problem body: `{"title": ..., "detail": ...}`, or the v1.1 `{"errors": [...]}` shape.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub title: Option<String>,
    pub detail: Option<String>,
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorItem {
    pub message: Option<String>,
}
