//! Glue code tying content loading, the board session, and the terminal UI
//! together.

use std::time::Duration;

use anyhow::{Context as _, Result};
use ratatui::layout::Rect;
use tokio::time;

use game_content::{CatalogLoader, SpriteLoader};
use game_core::{BoardSession, PieceRegistry, SpriteLibrary, TickReport};

use crate::config::ClientConfig;
use crate::input::InputAdapter;
use crate::presentation::{self, TerminalGuard, Tui, ui};
use crate::presentation::ui::FrameView;

/// Frame pacing for the ~60 Hz loop.
const FRAME_INTERVAL_MS: u64 = 16;

pub struct App {
    session: BoardSession,
    sprites: SpriteLibrary,
    input: InputAdapter,
}

impl App {
    /// Loads the catalog and sprite table and builds the starting session.
    /// Failures surface here, before the terminal is touched.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let board = config.board();

        let templates = CatalogLoader::load(&config.catalog_path())?;
        let sprites = SpriteLoader::load(&config.sprites_path())?;
        SpriteLoader::validate_coverage(&sprites, &templates)?;
        tracing::info!(
            templates = templates.len(),
            sprites = sprites.len(),
            grid_cell = board.grid_cell,
            "content loaded"
        );

        let input = InputAdapter::new(&board);
        let registry = PieceRegistry::new(templates, board);
        let session = BoardSession::new(registry, Some(&config.initial_piece))
            .context("starting the session")?;

        Ok(Self {
            session,
            sprites,
            input,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        tracing::info!("sandtable client starting");

        let mut terminal = presentation::init()?;
        let _guard = TerminalGuard;

        let result = self.frame_loop(&mut terminal).await;

        presentation::restore()?;
        tracing::info!("sandtable client exiting");

        result
    }

    async fn frame_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut frames = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));

        loop {
            frames.tick().await;

            let size = terminal.size()?;
            let total = Rect::new(0, 0, size.width, size.height);
            let snapshot = self.input.poll(ui::board_interior(total))?;

            let report = self.session.tick(&snapshot);
            log_report(&report);

            let scene = self.session.scene();
            let view = FrameView {
                scene: &scene,
                sprites: &self.sprites,
                state: self.session.state(),
                registry: self.session.registry(),
                stats: self.session.stats(),
            };
            ui::render(terminal, &view)?;

            if report.quit {
                break;
            }
        }

        Ok(())
    }
}

fn log_report(report: &TickReport) {
    if let Some(name) = &report.selected {
        tracing::info!(template = %name, "template picked from the palette");
    }
    if let Some(id) = report.placed {
        tracing::info!(%id, "piece placed");
    }
    if let Some(shot) = report.shot {
        tracing::info!(hit = %shot.target, start = %shot.start, end = %shot.end, "shot detected");
    }
    if report.deselected {
        tracing::info!("carried piece discarded");
    }
    if let Some(id) = report.dragged {
        tracing::trace!(%id, "dragging piece");
    }
    if let Some(id) = report.inspected {
        tracing::debug!(%id, "inspecting piece");
    }
    if report.quit {
        tracing::info!("quit requested");
    }
}
