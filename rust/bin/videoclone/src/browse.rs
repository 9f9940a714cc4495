//! Interactive browse loop.
//!
//! Reads one command per stdin line, emits the matching request and
//! redraws whenever any state path changes. Page loads run on spawned
//! tasks so a slow fetch never blocks input; the ticket check in the feed
//! handlers decides which load wins. Every other request completes before
//! the next line is read.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;
use videoclone_feed::request::*;
use videoclone_flux::{Flux, Request};

use crate::view::{self, Screen};

const HELP: &str = "\
commands:
  n | next          next page
  p | prev          previous page
  r | reload        reload current page
  l <i>             like / unlike post i
  s <i>             save / unsave post i
  o <i>             open post i in the player
  c | close         close the player
  t | theme         toggle dark mode
  g <path>          go to / , /liked or /saved
  h | help          this help
  q | quit          exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Reload,
    Like(String),
    Save(String),
    Open(String),
    Close,
    Theme,
    Goto(String),
    Help,
    Quit,
}

/// Parse one input line against what is currently on screen. Grid
/// indices are 1-based and resolve to post ids of the current view.
pub fn parse_command(line: &str, screen: &Screen) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(String::new());
    };
    let arg = words.next();

    let post_at = |arg: Option<&str>| -> Result<String, String> {
        let raw = arg.ok_or_else(|| format!("`{}` needs a post number", verb))?;
        let index: usize = raw
            .parse()
            .map_err(|_| format!("not a post number: {}", raw))?;
        screen
            .visible()
            .get(index.wrapping_sub(1))
            .map(|p| p.post_id.clone())
            .ok_or_else(|| format!("no post {} on screen", index))
    };

    match verb {
        "n" | "next" => Ok(Command::Next),
        "p" | "prev" => Ok(Command::Prev),
        "r" | "reload" => Ok(Command::Reload),
        "l" | "like" => post_at(arg).map(Command::Like),
        "s" | "save" => post_at(arg).map(Command::Save),
        "o" | "open" => post_at(arg).map(Command::Open),
        "c" | "close" => Ok(Command::Close),
        "t" | "theme" => Ok(Command::Theme),
        "g" | "go" => Ok(Command::Goto(arg.unwrap_or("/").to_string())),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{}`; `h` for help", other)),
    }
}

fn spawn_emit<R: Request>(flux: &Arc<Flux>, req: R) {
    let flux = Arc::clone(flux);
    tokio::spawn(async move { flux.emit(req).await });
}

/// Emit the request for `cmd`. A visible toast is dismissed first, so a
/// toast raised by `cmd` itself survives.
pub async fn dispatch(flux: &Arc<Flux>, screen: &Screen, cmd: Command) {
    if screen.toast.is_some() {
        flux.emit(DismissToastReq).await;
    }
    match cmd {
        Command::Next => spawn_emit(flux, NextPageReq),
        Command::Prev => spawn_emit(flux, PrevPageReq),
        Command::Reload => spawn_emit(flux, LoadPageReq { page: screen.feed.page }),
        Command::Like(id) => flux.emit(ToggleLikeReq::new(id)).await,
        Command::Save(id) => flux.emit(ToggleSaveReq::new(id)).await,
        Command::Open(id) => flux.emit(OpenPlayerReq::new(id)).await,
        Command::Close => flux.emit(ClosePlayerReq).await,
        Command::Theme => flux.emit(ToggleThemeReq).await,
        Command::Goto(path) => flux.emit(NavigateReq::new(path)).await,
        Command::Help | Command::Quit => {}
    }
}

fn draw(flux: &Flux) {
    println!("\n{}", view::render(&Screen::capture(flux)));
    println!("(h for help) > ");
}

/// Run until `q` or end of input.
pub async fn run(flux: Arc<Flux>) -> anyhow::Result<()> {
    let (tx, mut changes) = mpsc::unbounded_channel::<()>();
    let sub = flux.subscribe("#", move |_, _| {
        let _ = tx.send(());
    });

    spawn_emit(&flux, InitializeReq::default());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let screen = Screen::capture(&flux);
                match parse_command(&line, &screen) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(cmd) => {
                        debug!(?cmd, "command");
                        dispatch(&flux, &screen, cmd).await;
                    }
                    Err(msg) if msg.is_empty() => draw(&flux),
                    Err(msg) => println!("{}", msg),
                }
            }
            Some(()) = changes.recv() => {
                // Coalesce a burst of writes into one redraw.
                while changes.try_recv().is_ok() {}
                draw(&flux);
            }
        }
    }

    flux.unsubscribe(sub);
    Ok(())
}
