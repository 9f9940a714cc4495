//! Feed pagination requests.

use videoclone_flux::Request;

/// Load a specific page. Page 0 is ignored; pages past the last known page
/// are still requested and the server's answer decides.
#[derive(Debug, Clone)]
pub struct LoadPageReq {
    pub page: u32,
}

impl Request for LoadPageReq {
    const PATH: &'static str = "feed/load";
}

/// Advance one page; a no-op on the last page.
#[derive(Debug, Clone, Default)]
pub struct NextPageReq;

impl Request for NextPageReq {
    const PATH: &'static str = "feed/next";
}

/// Go back one page; a no-op on page 1.
#[derive(Debug, Clone, Default)]
pub struct PrevPageReq;

impl Request for PrevPageReq {
    const PATH: &'static str = "feed/prev";
}
