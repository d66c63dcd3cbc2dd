//! Terminal Snake runner (default binary).
//!
//! crossterm for input, the framebuffer renderer for output, and a background
//! commentary client. The loop sleeps until the next tick, commentary expiry,
//! or key press, whichever comes first.

use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_snake::commentary::{CommentaryClient, CommentaryConfig};
use tui_snake::core::GameSnapshot;
use tui_snake::engine::{AudioSink, Commentator, Session, SessionConfig};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{BellSink, FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};

/// Upper bound on a single input wait, so resizes are picked up promptly.
const MAX_WAIT: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    init_logging()?;

    let config = SessionConfig::from_env();
    let commentary = CommentaryClient::from_config(&CommentaryConfig::from_env())?;
    let audio = sound_enabled().then(BellSink::stdout);
    info!(
        seed = config.seed,
        initial_speed_ms = config.initial_speed_ms,
        commentary = commentary.is_some(),
        "starting"
    );
    let mut session = Session::new(&config, commentary, audio);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<C: Commentator, A: AudioSink>(
    term: &mut TerminalRenderer,
    session: &mut Session<C, A>,
) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        let now = Instant::now();
        if session.advance(now) {
            dirty = true;
        }

        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            session.snapshot_into(&mut snap);
            let hud = HudView {
                commentary: session.commentary(),
                debrief: session.debrief(),
                initial_speed_ms: session.initial_speed_ms(),
            };
            view.render_into_with_hud(&snap, &hud, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let timeout = session
            .next_deadline(Instant::now())
            .map_or(MAX_WAIT, |d| d.min(MAX_WAIT));

        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    info!(high_score = session.state().high_score(), "quit");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    if session.handle_action(action, Instant::now()) {
                        dirty = true;
                    }
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}

/// Log to `SNAKE_LOG_PATH` when set. Stdout belongs to the game screen.
fn init_logging() -> Result<()> {
    let Ok(path) = std::env::var("SNAKE_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("cannot open log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// `SNAKE_SOUND=0` or `false` mutes the bell.
fn sound_enabled() -> bool {
    !matches!(
        std::env::var("SNAKE_SOUND")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref(),
        Ok("0" | "false" | "off" | "no")
    )
}
