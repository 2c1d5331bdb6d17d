use serde::{Deserialize, Serialize};

/// A blog entry as the remote API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String, // YYYY-MM-DD
}
