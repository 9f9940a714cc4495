//! Feed page state: stored at `feed/state`.

use videoclone_flux::State;

use crate::model::Post;

/// The paginated feed as currently displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    /// Requested page, >= 1. Set as soon as a load is issued.
    pub page: u32,
    /// Last server-reported page count, >= 1.
    pub total_pages: u32,
    pub loading: bool,
    /// Posts of the last applied page, reconciled against preferences.
    pub posts: Vec<Post>,
    /// Ticket of the most recently issued fetch. Only a result carrying
    /// this ticket may be applied.
    pub ticket: u64,
    /// Description of the last failed fetch, for diagnostics.
    pub error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
            loading: false,
            posts: Vec::new(),
            ticket: 0,
            error: None,
        }
    }
}

impl State for FeedState {
    const PATH: &'static str = "feed/state";
}

impl FeedState {
    /// The page "next" would move to, or `None` at the last page.
    pub fn next_page(&self) -> Option<u32> {
        (self.page < self.total_pages).then(|| self.page + 1)
    }

    /// The page "previous" would move to, or `None` at page 1.
    pub fn prev_page(&self) -> Option<u32> {
        (self.page > 1).then(|| self.page - 1)
    }

    pub fn find(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.post_id == post_id)
    }
}
