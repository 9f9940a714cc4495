//! Mirrors of the persisted preferences: `liked/posts`, `saved/posts`,
//! `app/theme`.
//!
//! The Preference Store is authoritative; these are refreshed right after
//! every successful write.

use videoclone_flux::State;

use crate::model::Post;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LikedPosts(pub Vec<Post>);

impl State for LikedPosts {
    const PATH: &'static str = "liked/posts";
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedPosts(pub Vec<Post>);

impl State for SavedPosts {
    const PATH: &'static str = "saved/posts";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl State for ThemeState {
    const PATH: &'static str = "app/theme";
}
