//! Host harness: replays a touch and click session against the folio core
//! with a simulated frame clock and logs what the page container does.

use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use folio_core::{
    app::{AppConfig, PortfolioApp, TickResult},
    catalog::{ContentBlock, PageId},
    input::ScriptedPointer,
};
use log::{error, info};

use host::{LogSurface, RevealHooks};
use script::{DEMO_SCRIPT, Script};

#[path = "main/host.rs"]
mod host;
#[path = "main/pages.rs"]
mod pages;
#[path = "main/script.rs"]
mod script;

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Replays a portfolio browsing session")]
struct Cli {
    /// Session script; the built-in demo runs when omitted.
    script: Option<PathBuf>,
    /// The swipe hint was already shown earlier in this browser session.
    #[arg(long)]
    hint_seen: bool,
}

const FRAME_MS: u64 = 16;
/// Time the loading splash stays up before the site is interactive.
const LOADER_MS: u64 = 2_300;
/// Frames kept running after the last scripted input.
const SETTLE_MS: u64 = 1_500;

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().filter_or("FOLIO_LOG", "info")).init();

    match run(&cli) {
        Ok(page) => {
            info!("folio: finished on page={page}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("folio: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PageId> {
    let script_text = match &cli.script {
        Some(path) => {
            info!("folio: replaying script path={}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("reading script {}", path.display()))?
        }
        None => {
            info!("folio: replaying built-in demo");
            DEMO_SCRIPT.to_owned()
        }
    };
    let script = Script::parse(&script_text)?;

    let config = AppConfig::default().with_touch_capable(!script.pointer.is_empty());
    let mut app = PortfolioApp::new(
        pages::catalog()?,
        ScriptedPointer::new(&script.pointer),
        RevealHooks::default(),
        config,
        cli.hint_seen,
    )?;
    app.attach_surface(LogSurface::default());

    let mut clicks = script.clicks.iter().peekable();
    let mut shown: Option<PageId> = None;
    let mut hint_shown = false;
    let mut loaded = false;
    let end_ms = script.end_ms().max(LOADER_MS) + SETTLE_MS;

    let mut now_ms = 0;
    while now_ms <= end_ms {
        if !loaded && now_ms >= LOADER_MS {
            loaded = true;
            app.finish_loading(now_ms);
            info!("folio: loader done");
        }

        while let Some(&&(at_ms, command)) = clicks.peek() {
            if at_ms > now_ms {
                break;
            }
            clicks.next();
            let outcome = app.click(command, now_ms);
            info!("input: click {command:?} -> {outcome:?}");
        }

        if app.tick(now_ms) == TickResult::RenderRequested {
            app.with_view(now_ms, |view| {
                if shown != Some(view.page.id) {
                    shown = Some(view.page.id);
                    render_page(&view);
                }
                let hint_visible = view.hint.is_some();
                if hint_visible != hint_shown {
                    hint_shown = hint_visible;
                    info!("hint: swipe to navigate visible={hint_visible}");
                }
            });
        }

        now_ms += FRAME_MS;
    }

    if let Some(surface) = app.nav().surface() {
        info!(
            "folio: surface writes={} final={:?}",
            surface.writes(),
            surface.current()
        );
    }
    info!(
        "folio: reveal releases={} hint_seen={}",
        app.nav().hooks().released(),
        app.hint().is_seen()
    );
    Ok(app.active_page())
}

fn render_page(view: &folio_core::app::PageView<'_>) {
    let tabs = view
        .tabs
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[/ {}]", tab.label)
            } else {
                format!(" / {} ", tab.label)
            }
        })
        .collect::<Vec<_>>()
        .join("");
    info!("view: {tabs}");

    for block in view.page.blocks {
        match block {
            ContentBlock::Heading(text) => info!("view:   ## {text}"),
            ContentBlock::Paragraph(text) => info!("view:   {text}"),
            ContentBlock::Item(text) => info!("view:   - {text}"),
            ContentBlock::Link { label, target } => info!("view:   <{label}> -> {target}"),
        }
    }
}
