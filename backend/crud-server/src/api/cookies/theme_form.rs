use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    #[serde(default)]
    pub theme: String,
}
