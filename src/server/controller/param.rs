use serde::Deserialize;
use utoipa::IntoParams;

/// Sort order and page selection for player listings.
///
/// Values are kept raw here; `PageRequest::from_query` validates them.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PlayerPageParam {
    /// Sort field: `ID`, `NAME`, `EXPERIENCE`, `BIRTHDAY` or `LEVEL` (default: `ID`)
    #[serde(default = "default_order")]
    pub order: String,
    /// Zero-based page number (default: 0)
    #[serde(default)]
    pub page_number: i64,
    /// Players per page (default: 3)
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_order() -> String {
    "ID".to_string()
}

fn default_page_size() -> i64 {
    3
}
