//! Text rendering of the Flux state.
//!
//! Everything here is a pure function of a [`Screen`] snapshot; the
//! browse loop and the one-shot commands only decide when to print.

use std::fmt::Write;

use videoclone_feed::Post;
use videoclone_feed::state::*;
use videoclone_flux::Flux;

const DARK_ON: &str = "\x1b[97;40m";
const RESET: &str = "\x1b[0m";

/// Snapshot of every state path the view reads.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub route: Route,
    pub feed: FeedState,
    pub liked: Vec<Post>,
    pub saved: Vec<Post>,
    pub dark: bool,
    pub toast: Option<String>,
    pub player: Option<Post>,
}

impl Screen {
    pub fn capture(flux: &Flux) -> Self {
        Self {
            route: flux.read::<AppRoute>().unwrap_or_default().0,
            feed: flux.read::<FeedState>().unwrap_or_default(),
            liked: flux.read::<LikedPosts>().unwrap_or_default().0,
            saved: flux.read::<SavedPosts>().unwrap_or_default().0,
            dark: flux.read::<ThemeState>().unwrap_or_default().dark,
            toast: flux.read::<ToastState>().unwrap_or_default().message,
            player: flux.read::<PlayerModal>().unwrap_or_default().post,
        }
    }

    /// Posts shown by the current route, in grid order.
    pub fn visible(&self) -> &[Post] {
        match self.route {
            Route::Feed => self.feed.posts.as_slice(),
            Route::Liked => self.liked.as_slice(),
            Route::Saved => self.saved.as_slice(),
            Route::NotFound(_) => &[],
        }
    }
}

/// Render the whole screen: current view, then the player and toast.
pub fn render(screen: &Screen) -> String {
    let mut out = match &screen.route {
        Route::Feed => render_feed(&screen.feed),
        Route::Liked => render_list("Liked Posts", "No liked posts found", &screen.liked),
        Route::Saved => render_list("Saved Posts", "No saved posts found", &screen.saved),
        Route::NotFound(path) => render_not_found(path),
    };
    if let Some(post) = &screen.player {
        out.push('\n');
        out.push_str(&render_player(post));
    }
    if let Some(message) = &screen.toast {
        let _ = writeln!(out, "\n  >> {}", message);
    }
    paint(&out, screen.dark)
}

pub fn render_feed(feed: &FeedState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "VideoClone  |  page {} of {}", feed.page, feed.total_pages);
    if feed.loading {
        out.push_str("Loading.....\n");
        return out;
    }
    if feed.posts.is_empty() {
        out.push_str("No videos on this page\n");
    } else {
        render_grid(&mut out, &feed.posts);
    }
    let prev = if feed.prev_page().is_some() { "[p] prev" } else { "        " };
    let next = if feed.next_page().is_some() { "[n] next" } else { "" };
    let _ = writeln!(out, "{}  {}", prev, next);
    out
}

pub fn render_list(title: &str, empty: &str, posts: &[Post]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    if posts.is_empty() {
        let _ = writeln!(out, "{}", empty);
    } else {
        render_grid(&mut out, posts);
    }
    out
}

pub fn render_not_found(path: &str) -> String {
    format!("404  Page not found: {}\nGo back home with `g /`\n", path)
}

pub fn render_player(post: &Post) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "+-- Now playing ----------------------------");
    let _ = writeln!(out, "| {}", post.display_title());
    let _ = writeln!(out, "| by {} (@{})", post.creator.name, post.creator.handle);
    if !post.submission.description.is_empty() {
        let _ = writeln!(out, "| {}", post.submission.description);
    }
    let _ = writeln!(out, "| {}", post.submission.media_url);
    let _ = writeln!(
        out,
        "| {} reactions, {} comments  {}{}",
        post.reaction.count,
        post.comment.count,
        if post.is_liked { "[liked] " } else { "" },
        if post.is_saved { "[saved]" } else { "" },
    );
    let _ = writeln!(out, "+-- [c] close ------------------------------");
    out
}

fn render_grid(out: &mut String, posts: &[Post]) {
    for (i, post) in posts.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} {}  {}  ({})",
            i + 1,
            if post.is_liked { '♥' } else { '·' },
            if post.is_saved { '★' } else { '·' },
            post.display_title(),
            post.creator.name,
        );
    }
}

fn paint(text: &str, dark: bool) -> String {
    if dark {
        format!("{}{}{}", DARK_ON, text, RESET)
    } else {
        text.to_string()
    }
}
