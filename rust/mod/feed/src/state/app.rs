//! App-level state: `app/route` and `app/toast`.

use videoclone_flux::State;

/// Client-side view selected by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Feed,
    Liked,
    Saved,
    NotFound(String),
}

impl Route {
    /// Map a path to its view. A trailing slash is ignored; everything
    /// unknown is `NotFound`.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };
        match normalized {
            "/" => Self::Feed,
            "/liked" => Self::Liked,
            "/saved" => Self::Saved,
            _ => Self::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Feed => "/",
            Self::Liked => "/liked",
            Self::Saved => "/saved",
            Self::NotFound(path) => path,
        }
    }
}

/// Navigation route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppRoute(pub Route);

impl State for AppRoute {
    const PATH: &'static str = "app/route";
}

/// Transient confirmation shown after a successful like/save toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    pub message: Option<String>,
    /// Bumped on every new toast so a repeated message still registers.
    pub seq: u64,
}

impl ToastState {
    pub fn show(&self, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            seq: self.seq + 1,
        }
    }

    pub fn dismissed(&self) -> Self {
        Self {
            message: None,
            seq: self.seq,
        }
    }
}

impl State for ToastState {
    const PATH: &'static str = "app/toast";
}
