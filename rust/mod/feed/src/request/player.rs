//! Player modal requests.

use videoclone_flux::Request;

#[derive(Debug, Clone)]
pub struct OpenPlayerReq {
    pub post_id: String,
}

impl OpenPlayerReq {
    pub fn new(post_id: impl Into<String>) -> Self {
        Self { post_id: post_id.into() }
    }
}

impl Request for OpenPlayerReq {
    const PATH: &'static str = "player/open";
}

#[derive(Debug, Clone, Default)]
pub struct ClosePlayerReq;

impl Request for ClosePlayerReq {
    const PATH: &'static str = "player/close";
}
