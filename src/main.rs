//! Terminal OFC client (default binary).
//!
//! Renders both boards, lets the player move cards with the mouse or the
//! keyboard pan cursor, and drives rounds against the remote service.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::info;

use tui_ofc::client::{ClientConfig, HttpRoundService, RoundController, RoundLink, RoundOutcome};
use tui_ofc::core::{GestureHandler, Table};
use tui_ofc::input::{handle_key_event, should_quit, PanAdapter, PointerAdapter};
use tui_ofc::telemetry::init_tracing;
use tui_ofc::term::{FrameBuffer, TableLayout, TableView, TerminalRenderer, Viewport};

const FRAME: Duration = Duration::from_millis(33);

fn main() -> Result<()> {
    let config = ClientConfig::from_env();
    init_tracing(config.log_path.as_deref())?;
    info!(server = %config.server_url, "client starting");

    let service = HttpRoundService::new(&config).context("building HTTP client")?;
    let link = RoundLink::start(Arc::new(service)).context("starting tokio runtime")?;
    let mut controller = RoundController::new(link);
    let mut table = Table::new(config.line_capacity);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut controller, &mut table);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, controller: &mut RoundController, table: &mut Table) -> Result<()> {
    let view = TableView::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut pointer = PointerAdapter::new();
    let mut pan: Option<PanAdapter> = None;

    loop {
        // Replies, applied in arrival order.
        for outcome in controller.poll(table) {
            let cancelled_drag = match outcome {
                RoundOutcome::StateReplaced { cancelled_drag, .. }
                | RoundOutcome::ResultShown { cancelled_drag } => cancelled_drag,
                RoundOutcome::Failed { .. } => continue,
            };
            if cancelled_drag.is_some() {
                pointer.reset();
            }
            // Fresh deal or final boards: park the idle keyboard cursor on the cards.
            if !table.is_dragging() {
                pan = None;
            }
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let layout = TableLayout::compute(table, Viewport::new(w, h));
        let pan = pan.get_or_insert_with(|| PanAdapter::new(layout.home()));
        view.render_into(table, &layout, Some(pan.cursor()), &mut fb);
        term.draw(&fb)?;

        if !event::poll(FRAME)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if table.dismiss_alert() {
                    continue;
                }
                if pan.handle_key(key.code, &layout, table).is_some() {
                    if !table.is_dragging() {
                        pointer.reset();
                    }
                    continue;
                }
                if key.code == KeyCode::Esc && table.is_dragging() {
                    table.gesture_cancel();
                    pointer.reset();
                    continue;
                }
                if let Some(action) = handle_key_event(key) {
                    controller.request(action, table);
                }
            }
            Event::Mouse(mouse) => {
                // A press still held when the alert opened must be able to release.
                if table.alert().is_some() && !pointer.is_pressed() {
                    continue;
                }
                pointer.handle(mouse, &layout, table);
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
