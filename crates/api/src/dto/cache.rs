use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Default)]
pub struct InvalidateCacheQuery {
    pub prefix: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct InvalidateCacheResponse {
    pub removed: usize,
}
