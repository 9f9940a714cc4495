//! Player modal state: stored at `player/modal`.

use videoclone_flux::State;

use crate::model::Post;

/// The single-video modal. `None` means closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerModal {
    pub post: Option<Post>,
}

impl PlayerModal {
    pub fn is_open(&self) -> bool {
        self.post.is_some()
    }
}

impl State for PlayerModal {
    const PATH: &'static str = "player/modal";
}
