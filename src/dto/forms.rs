use super::{Direction, SortKey};
use serde::Deserialize;

/// POST /config
#[derive(Debug, Deserialize)]
pub struct ConfigForm {
    pub api_base_url: String,
}

/// POST /sort
#[derive(Debug, Deserialize)]
pub struct SortForm {
    pub sort: SortKey,
    #[serde(default)]
    pub direction: Direction,
}
