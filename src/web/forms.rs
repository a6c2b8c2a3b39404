use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize, Default)]
pub struct BlogQuery {
    pub q: Option<String>,
    pub tag: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct AdminQuery {
    pub tab: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct ThemeForm {
    /// Page to return to after toggling.
    pub back: Option<String>,
}
