//! Frame rendering with Ratatui.
//!
//! The engine's logical board space has y growing down; the canvas widget's y
//! grows up, so every logical coordinate is flipped against the board height
//! when it is painted.

use std::rc::Rc;

use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
    },
};

use game_core::{
    InspectBox, MotionStats, PieceRegistry, Scene, SelectionState, SpriteCommand, SpriteLibrary,
};

use crate::presentation::Tui;

/// Everything the renderer needs for one frame.
pub struct FrameView<'a> {
    pub scene: &'a Scene,
    pub sprites: &'a SpriteLibrary,
    pub state: &'a SelectionState,
    pub registry: &'a PieceRegistry,
    pub stats: Option<MotionStats>,
}

pub fn render(terminal: &mut Tui, view: &FrameView<'_>) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, view))?;
    Ok(())
}

/// The board chunk of the frame layout.
///
/// The input adapter maps terminal cells through the same rectangle, so the
/// cursor lands where the canvas actually painted.
pub fn board_area(total: Rect) -> Rect {
    layout(total)[1]
}

/// Interior of the board chunk, inside the block borders.
pub fn board_interior(total: Rect) -> Rect {
    board_area(total).inner(Margin::new(1, 1))
}

fn layout(total: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(total)
}

fn render_frame(frame: &mut Frame, view: &FrameView<'_>) {
    let chunks = layout(frame.area());
    render_header(frame, chunks[0], view);
    render_board(frame, chunks[1], view);
    render_footer(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect, view: &FrameView<'_>) {
    let mut spans = vec![
        Span::styled("State: ", Style::default().fg(Color::White)),
        Span::styled(
            view.state.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(piece) = view.registry.carried() {
        spans.push(Span::styled(" | Carried: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!("{} ({:.1}\u{b0})", piece.name(), piece.display_angle()),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(" | Placed: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        view.registry.placed().len().to_string(),
        Style::default().fg(Color::LightGreen),
    ));

    if let Some(stats) = view.stats {
        spans.push(Span::styled(" | Motion: ", Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!("{:.1}", stats.mean_magnitude),
            Style::default().fg(Color::Magenta),
        ));
    }

    let header = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).title("Sandtable"));
    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, area: Rect, view: &FrameView<'_>) {
    let board = view.registry.config();
    let width = f64::from(board.width);
    let height = f64::from(board.height);

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Board"))
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| paint_scene(ctx, view, height));

    frame.render_widget(canvas, area);
}

fn paint_scene(ctx: &mut Context<'_>, view: &FrameView<'_>, height: f64) {
    paint_palette_rules(ctx, view, height);

    for command in &view.scene.sprites {
        paint_sprite(ctx, command, view.sprites, height);
    }

    if let Some(trace) = &view.scene.trace {
        ctx.draw(&CanvasLine {
            x1: f64::from(trace.start.x),
            y1: height - f64::from(trace.start.y),
            x2: f64::from(trace.end.x),
            y2: height - f64::from(trace.end.y),
            color: Color::Red,
        });
    }

    if let Some(overlay) = &view.scene.inspect {
        paint_inspect(ctx, overlay, height);
    }
}

/// Separates the palette column from the board and rules off one cell per
/// catalog row.
fn paint_palette_rules(ctx: &mut Context<'_>, view: &FrameView<'_>, height: f64) {
    let board = view.registry.config();
    let column_x = f64::from(board.width - board.menu_cell());

    ctx.draw(&CanvasLine {
        x1: column_x,
        y1: 0.0,
        x2: column_x,
        y2: height,
        color: Color::DarkGray,
    });

    for row in 0..=view.registry.templates().len() {
        let y = height - f64::from(row as i32 * board.menu_cell());
        ctx.draw(&CanvasLine {
            x1: column_x,
            y1: y,
            x2: f64::from(board.width),
            y2: y,
            color: Color::DarkGray,
        });
    }
}

fn paint_sprite(
    ctx: &mut Context<'_>,
    command: &SpriteCommand,
    sprites: &SpriteLibrary,
    height: f64,
) {
    let Some(sprite) = sprites.get(&command.key) else {
        return;
    };
    let color = terminal_color(&sprite.color);

    let w = f64::from(command.size.0);
    let h = f64::from(command.size.1);
    let x = f64::from(command.origin.x);
    // Rectangles anchor at their bottom-left corner in canvas space.
    let y = height - f64::from(command.origin.y) - h;

    ctx.draw(&Rectangle {
        x,
        y,
        width: w,
        height: h,
        color,
    });
    ctx.print(
        x + w / 2.0,
        y + h / 2.0,
        Span::styled(sprite.glyph.to_string(), Style::default().fg(color)),
    );
}

fn paint_inspect(ctx: &mut Context<'_>, overlay: &InspectBox, height: f64) {
    let x = f64::from(overlay.anchor.x);
    let y = height - f64::from(overlay.anchor.y);
    let box_height = f64::from(InspectBox::HEIGHT);

    ctx.draw(&Rectangle {
        x,
        y,
        width: f64::from(InspectBox::WIDTH),
        height: box_height,
        color: Color::White,
    });

    let style = Style::default().fg(Color::White);
    ctx.print(
        x + 10.0,
        y + box_height - 25.0,
        Span::styled(overlay.name.clone(), style.add_modifier(Modifier::BOLD)),
    );
    ctx.print(
        x + 10.0,
        y + box_height / 2.0,
        Span::styled(format!("health: {}", overlay.health), style),
    );
    ctx.print(
        x + 10.0,
        y + 15.0,
        Span::styled(format!("armor: {}", overlay.armor), style),
    );
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let bindings = Line::from(vec![
        Span::styled("[Click palette]", Style::default().fg(Color::Yellow)),
        Span::raw(" Pick | "),
        Span::styled("[Click board]", Style::default().fg(Color::Yellow)),
        Span::raw(" Place | "),
        Span::styled("[r/e]", Style::default().fg(Color::Yellow)),
        Span::raw(" Rotate | "),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::raw(" Drop | "),
        Span::styled("[Hold left]", Style::default().fg(Color::Yellow)),
        Span::raw(" Drag | "),
        Span::styled("[Hold right]", Style::default().fg(Color::Yellow)),
        Span::raw(" Inspect | "),
        Span::styled("[q]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ]);

    let footer = Paragraph::new(vec![bindings])
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(footer, area);
}

/// Maps the sprite table's palette names onto terminal colors.
fn terminal_color(name: &str) -> Color {
    match name {
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" => Color::Gray,
        _ => Color::DarkGray,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_chunk_sits_between_header_and_footer() {
        let total = Rect::new(0, 0, 120, 40);

        let board = board_area(total);
        assert_eq!(board, Rect::new(0, 3, 120, 34));

        let interior = board_interior(total);
        assert_eq!(interior, Rect::new(1, 4, 118, 32));
    }

    #[test]
    fn unknown_palette_names_fall_back() {
        assert_eq!(terminal_color("yellow"), Color::Yellow);
        assert_eq!(terminal_color("chartreuse"), Color::DarkGray);
    }
}
