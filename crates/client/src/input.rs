//! Translates terminal events into per-tick input snapshots.
//!
//! Mouse buttons are level signals carried across frames, matching how the
//! engine expects raw held state. Bound keys become pulses that live for a
//! single snapshot, and only on their press event, so terminal autorepeat
//! never reaches the engine as extra edges.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use game_core::{BoardConfig, InputSnapshot, Point};

pub struct InputAdapter {
    board_width: i32,
    board_height: i32,
    cursor: Point,
    primary: bool,
    secondary: bool,
}

impl InputAdapter {
    pub fn new(board: &BoardConfig) -> Self {
        Self {
            board_width: board.width,
            board_height: board.height,
            cursor: Point::ORIGIN,
            primary: false,
            secondary: false,
        }
    }

    /// Drains every pending terminal event and folds them into this tick's
    /// snapshot. `interior` is the canvas interior from the current frame
    /// layout, used to map terminal cells into logical board pixels.
    pub fn poll(&mut self, interior: Rect) -> Result<InputSnapshot> {
        let mut snapshot = self.level_snapshot();

        while event::poll(Duration::from_millis(0))? {
            self.apply(event::read()?, interior, &mut snapshot);
        }

        Ok(snapshot)
    }

    /// Snapshot seeded with the held state from previous frames.
    fn level_snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            primary: self.primary,
            secondary: self.secondary,
            ..InputSnapshot::at(self.cursor)
        }
    }

    fn apply(&mut self, event: Event, interior: Rect, snapshot: &mut InputSnapshot) {
        match event {
            Event::Mouse(mouse) => self.apply_mouse(mouse, interior, snapshot),
            Event::Key(key) if key.kind == KeyEventKind::Press => apply_key(key.code, snapshot),
            _ => {}
        }
    }

    fn apply_mouse(&mut self, mouse: MouseEvent, interior: Rect, snapshot: &mut InputSnapshot) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.cursor = self.to_logical(interior, mouse.column, mouse.row);
            }
            MouseEventKind::Down(button) => {
                self.cursor = self.to_logical(interior, mouse.column, mouse.row);
                self.set_button(button, true);
            }
            MouseEventKind::Up(button) => self.set_button(button, false),
            _ => {}
        }

        snapshot.cursor = self.cursor;
        snapshot.primary = self.primary;
        snapshot.secondary = self.secondary;
    }

    fn set_button(&mut self, button: MouseButton, down: bool) {
        match button {
            MouseButton::Left => self.primary = down,
            MouseButton::Right => self.secondary = down,
            MouseButton::Middle => {}
        }
    }

    /// Maps a terminal cell onto the logical board through the canvas
    /// interior. Cells outside the interior clamp to the nearest edge.
    fn to_logical(&self, interior: Rect, column: u16, row: u16) -> Point {
        if interior.width == 0 || interior.height == 0 {
            return self.cursor;
        }

        let dx = i32::from(column.saturating_sub(interior.x));
        let dy = i32::from(row.saturating_sub(interior.y));
        let x = dx * self.board_width / i32::from(interior.width);
        let y = dy * self.board_height / i32::from(interior.height);

        Point::new(x.min(self.board_width), y.min(self.board_height))
    }
}

fn apply_key(code: KeyCode, snapshot: &mut InputSnapshot) {
    match code {
        KeyCode::Char('r') => snapshot.rotate_cw = true,
        KeyCode::Char('e') => snapshot.rotate_ccw = true,
        KeyCode::Esc => snapshot.deselect = true,
        KeyCode::Char('q') => snapshot.quit = true,
        _ => {}
    }
}
