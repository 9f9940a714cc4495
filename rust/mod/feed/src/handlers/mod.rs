//! Handler implementations and Flux wiring.
//!
//! `register_handlers` binds each request type to its handler. Handlers
//! get the shared [`FeedContext`] plus the state store, and are the only
//! code that writes state.

pub mod app_handlers;
pub mod feed_handlers;
pub mod player_handlers;
pub mod post_handlers;

use std::sync::Arc;

use videoclone_flux::Flux;

use crate::client::FeedSource;
use crate::prefs::Preferences;
use crate::request::*;

/// Collaborators the handlers need: where pages come from and where
/// preferences live.
pub struct FeedContext {
    pub source: Arc<dyn FeedSource>,
    pub prefs: Arc<Preferences>,
}

impl FeedContext {
    pub fn new(source: Arc<dyn FeedSource>, prefs: Arc<Preferences>) -> Self {
        Self { source, prefs }
    }
}

/// Register all handlers with a Flux instance.
pub fn register_handlers(flux: &Flux, ctx: Arc<FeedContext>) {
    // app/initialize
    {
        let ctx = ctx.clone();
        flux.handle(move |req: Arc<InitializeReq>, store| {
            let ctx = ctx.clone();
            async move { app_handlers::handle_initialize(&req, &store, &ctx).await }
        });
    }

    // app/navigate
    flux.handle(|req: Arc<NavigateReq>, store| async move {
        app_handlers::handle_navigate(&req, &store);
    });

    // app/toggle-theme
    {
        let ctx = ctx.clone();
        flux.handle(move |_: Arc<ToggleThemeReq>, store| {
            let ctx = ctx.clone();
            async move { app_handlers::handle_toggle_theme(&store, &ctx.prefs) }
        });
    }

    // app/dismiss-toast
    flux.handle(|_: Arc<DismissToastReq>, store| async move {
        app_handlers::handle_dismiss_toast(&store);
    });

    // feed/load
    {
        let ctx = ctx.clone();
        flux.handle(move |req: Arc<LoadPageReq>, store| {
            let ctx = ctx.clone();
            async move { feed_handlers::handle_load(req.page, &store, &ctx).await }
        });
    }

    // feed/next
    {
        let ctx = ctx.clone();
        flux.handle(move |_: Arc<NextPageReq>, store| {
            let ctx = ctx.clone();
            async move { feed_handlers::handle_next(&store, &ctx).await }
        });
    }

    // feed/prev
    {
        let ctx = ctx.clone();
        flux.handle(move |_: Arc<PrevPageReq>, store| {
            let ctx = ctx.clone();
            async move { feed_handlers::handle_prev(&store, &ctx).await }
        });
    }

    // post/like
    {
        let ctx = ctx.clone();
        flux.handle(move |req: Arc<ToggleLikeReq>, store| {
            let ctx = ctx.clone();
            async move { post_handlers::handle_toggle_like(&req, &store, &ctx.prefs) }
        });
    }

    // post/save
    {
        let ctx = ctx.clone();
        flux.handle(move |req: Arc<ToggleSaveReq>, store| {
            let ctx = ctx.clone();
            async move { post_handlers::handle_toggle_save(&req, &store, &ctx.prefs) }
        });
    }

    // player/open
    {
        let ctx = ctx.clone();
        flux.handle(move |req: Arc<OpenPlayerReq>, store| {
            let ctx = ctx.clone();
            async move { player_handlers::handle_open(&req, &store, &ctx.prefs) }
        });
    }

    // player/close
    flux.handle(|_: Arc<ClosePlayerReq>, store| async move {
        player_handlers::handle_close(&store);
    });
}
