use crate::dto::PostPatch;
use serde::Deserialize;

/// What the user has typed into the edit modal so far.
/// An empty field means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EditDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
}

impl EditDraft {
    pub fn to_patch(&self) -> PostPatch {
        PostPatch::from_fields(&self.title, &self.content, &self.author, &self.date)
    }
}

/// The edit modal. At most one draft exists at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Closed,
    Open { post_id: i64, draft: EditDraft },
}

impl EditSession {
    /// Opens the modal for `post_id` with a blank draft. Opening while
    /// already open re-targets and clears the draft.
    pub fn open(&mut self, post_id: i64) {
        *self = EditSession::Open {
            post_id,
            draft: EditDraft::default(),
        };
    }

    /// Discards the draft without submitting.
    pub fn close(&mut self) {
        *self = EditSession::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Open { .. })
    }

    pub fn target(&self) -> Option<i64> {
        match self {
            EditSession::Open { post_id, .. } => Some(*post_id),
            EditSession::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditSession::Open { draft, .. } => Some(draft),
            EditSession::Closed => None,
        }
    }

    /// Overwrites the draft fields. Ignored while closed.
    pub fn set_draft(&mut self, fields: EditDraft) {
        if let EditSession::Open { draft, .. } = self {
            *draft = fields;
        }
    }

    /// Closes the modal and hands back the update to send, if it was open.
    pub fn confirm(&mut self) -> Option<(i64, PostPatch)> {
        match std::mem::take(self) {
            EditSession::Open { post_id, draft } => Some((post_id, draft.to_patch())),
            EditSession::Closed => None,
        }
    }
}
