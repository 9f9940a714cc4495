//! Like / save toggles.

use videoclone_flux::Request;

/// Like the post if it is not liked, unlike it otherwise.
#[derive(Debug, Clone)]
pub struct ToggleLikeReq {
    pub post_id: String,
}

impl ToggleLikeReq {
    pub fn new(post_id: impl Into<String>) -> Self {
        Self { post_id: post_id.into() }
    }
}

impl Request for ToggleLikeReq {
    const PATH: &'static str = "post/like";
}

/// Save the post if it is not saved, unsave it otherwise.
#[derive(Debug, Clone)]
pub struct ToggleSaveReq {
    pub post_id: String,
}

impl ToggleSaveReq {
    pub fn new(post_id: impl Into<String>) -> Self {
        Self { post_id: post_id.into() }
    }
}

impl Request for ToggleSaveReq {
    const PATH: &'static str = "post/save";
}
