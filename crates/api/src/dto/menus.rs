use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct MenuQuery {
    #[serde(default)]
    pub refresh: bool,
}

#[derive(Deserialize, Debug, Default)]
pub struct ActiveMenuQuery {
    pub path: Option<String>,
}
