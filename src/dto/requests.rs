use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Values typed into the "add post" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostDraft {
    /// Stamps the draft with `today`, producing the body of `POST /posts`.
    pub fn dated(self, today: NaiveDate) -> NewPostRequest {
        NewPostRequest {
            title: self.title,
            content: self.content,
            author: self.author,
            date: today.format("%Y-%m-%d").to_string(),
        }
    }
}

/// POST /posts
/// Body: { "title": "...", "content": "...", "author": "...", "date": "YYYY-MM-DD" }
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: String,
}

/// Fields to replace on an existing post. `None` means "leave unchanged".
///
/// Built with [`PostPatch::from_fields`], an empty string is never sent: the
/// server cannot be asked to clear a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl PostPatch {
    pub fn from_fields(title: &str, content: &str, author: &str, date: &str) -> Self {
        Self {
            title: non_empty(title),
            content: non_empty(content),
            author: non_empty(author),
            date: non_empty(date),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author.is_none() && self.date.is_none()
    }
}

/// PUT /posts/{id}
/// Body: { "id": 1, ...only the fields being changed }
#[derive(Debug, Serialize)]
pub struct UpdatePostRequest<'a> {
    pub id: i64,
    #[serde(flatten)]
    pub patch: &'a PostPatch,
}

/// GET /posts/search?title=..&content=..&author=..&date=..
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
}

impl SearchQuery {
    /// Query pairs for the filters that were filled in.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("title", self.title.as_str()),
            ("content", self.content.as_str()),
            ("author", self.author.as_str()),
            ("date", self.date.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Title,
    Content,
    Author,
    Date,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Content => "content",
            SortKey::Author => "author",
            SortKey::Date => "date",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
