//! App lifecycle and navigation requests.

use videoclone_flux::Request;

/// Load persisted preferences into state, then fetch `page` if set.
#[derive(Debug, Clone)]
pub struct InitializeReq {
    pub page: Option<u32>,
}

impl InitializeReq {
    /// Restore preferences without touching the network.
    pub fn offline() -> Self {
        Self { page: None }
    }

    pub fn at_page(page: u32) -> Self {
        Self { page: Some(page) }
    }
}

impl Default for InitializeReq {
    fn default() -> Self {
        Self::at_page(1)
    }
}

impl Request for InitializeReq {
    const PATH: &'static str = "app/initialize";
}

/// Switch view by path (`/`, `/liked`, `/saved`, anything else).
#[derive(Debug, Clone)]
pub struct NavigateReq {
    pub path: String,
}

impl NavigateReq {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Request for NavigateReq {
    const PATH: &'static str = "app/navigate";
}

/// Flip the persisted dark-mode flag.
#[derive(Debug, Clone, Default)]
pub struct ToggleThemeReq;

impl Request for ToggleThemeReq {
    const PATH: &'static str = "app/toggle-theme";
}

#[derive(Debug, Clone, Default)]
pub struct DismissToastReq;

impl Request for DismissToastReq {
    const PATH: &'static str = "app/dismiss-toast";
}
