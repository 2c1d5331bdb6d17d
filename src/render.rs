//! Turns a list of posts into the blocks shown on the page.

use crate::models::Post;
use askama::Template;

/// Something the user can do to a single rendered post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    /// Delete the post, then refresh the list.
    Delete(i64),
    /// Open the edit modal targeting the post.
    Update(i64),
}

impl PostAction {
    /// The route whose form submission performs this action.
    pub fn route(self) -> String {
        match self {
            PostAction::Delete(id) => format!("/posts/{}/delete", id),
            PostAction::Update(id) => format!("/posts/{}/edit", id),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostAction::Delete(_) => "Delete",
            PostAction::Update(_) => "Update",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            PostAction::Delete(_) => "delete-btn",
            PostAction::Update(_) => "update-btn",
        }
    }
}

/// One rendered post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBlock {
    pub post_id: i64,
    pub title: String,
    pub author: String,
    pub date: String,
    pub content: String,
    pub actions: [PostAction; 2],
}

impl From<&Post> for PostBlock {
    fn from(post: &Post) -> Self {
        Self {
            post_id: post.id,
            title: post.title.clone(),
            author: post.author.clone(),
            date: post.date.clone(),
            content: post.content.clone(),
            actions: [PostAction::Delete(post.id), PostAction::Update(post.id)],
        }
    }
}

/// The display list posts are rendered into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Template)]
#[template(path = "posts.html")]
pub struct PostContainer {
    blocks: Vec<PostBlock>,
}

impl PostContainer {
    pub fn blocks(&self) -> &[PostBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Replaces everything in `container` with one block per post, in the order
/// given. Rendering the same posts twice leaves the same container.
pub fn render(container: &mut PostContainer, posts: &[Post]) {
    container.blocks.clear();
    container.blocks.extend(posts.iter().map(PostBlock::from));
}
