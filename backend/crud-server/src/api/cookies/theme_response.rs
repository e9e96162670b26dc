use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: String,
}
