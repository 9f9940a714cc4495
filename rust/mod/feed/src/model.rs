use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Post: one item of the video feed
// ---------------------------------------------------------------------------

/// A video post as served by the feed API and as stored in preference lists.
///
/// `post_id` is the identity for every list operation. `is_liked` and
/// `is_saved` are derived locally by reconciliation; they are stored with
/// the snapshot for compatibility but never trusted on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub post_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creator: Creator,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: Comment,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reaction: Reaction,
    #[serde(default, deserialize_with = "null_as_default")]
    pub submission: Submission,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_saved: bool,
}

impl Post {
    /// The form a post takes inside a preference list: same record,
    /// derived flags cleared.
    pub fn snapshot(&self) -> Post {
        Post {
            is_liked: false,
            is_saved: false,
            ..self.clone()
        }
    }

    /// Title for display: the submission title, falling back to the
    /// creator name when the title is blank.
    pub fn display_title(&self) -> &str {
        if self.submission.title.trim().is_empty() {
            &self.creator.name
        } else {
            &self.submission.title
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Creator {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub handle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pic: String,
}

/// Server-side comment counter. Read-only here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    pub count: u32,
    pub commenting_allowed: bool,
}

/// Server-side reaction counter. Read-only here; local likes never touch it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reaction {
    pub count: u32,
    pub voted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submission {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub media_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hyperlink: String,
    #[serde(deserialize_with = "null_as_default")]
    pub placeholder_url: String,
}

// ---------------------------------------------------------------------------
// FeedPage: one fetched page
// ---------------------------------------------------------------------------

/// One page of the remote feed after boundary validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    /// Always >= 1.
    pub total_pages: u32,
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
