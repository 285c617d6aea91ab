//! Frontend-neutral render description assembled after each tick.
//!
//! The engine never touches a render target; it describes one frame as an
//! ordered command list the frontend replays. Later commands overdraw earlier
//! ones, so the palette paints first, placed pieces next, and the carried
//! piece last, with the shot trace and inspect overlay on top of everything.

use crate::catalog::SpriteKey;
use crate::geometry::Point;
use crate::registry::{PieceInstance, PieceRegistry};

/// Paint layer of a sprite command, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Layer {
    Palette,
    Placed,
    Carried,
}

/// One sprite to draw: which image, where, how large, at what angle.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteCommand {
    pub key: SpriteKey,
    /// Top-left anchor in logical pixels.
    pub origin: Point,
    /// Pixel size per axis.
    pub size: (i32, i32),
    /// Display angle in degrees, normalized to `[0, 360)`.
    pub angle: f32,
    pub layer: Layer,
}

/// Endpoints of the latest shot sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceSegment {
    pub start: Point,
    pub end: Point,
}

/// Read-only overlay describing a placed piece under inspection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectBox {
    /// Bottom-left corner of the box; it extends up and to the right.
    pub anchor: Point,
    pub name: String,
    pub health: i32,
    pub armor: i32,
}

impl InspectBox {
    /// Horizontal extent of the box in logical pixels.
    pub const WIDTH: i32 = 250;
    /// Vertical extent of the box in logical pixels.
    pub const HEIGHT: i32 = 100;
    /// Anchor offset from the cursor, right and up.
    pub const CURSOR_OFFSET: i32 = 25;

    /// Builds the overlay for a piece, anchored relative to the cursor.
    pub fn for_piece(piece: &PieceInstance, cursor: Point) -> Self {
        Self {
            anchor: Point::new(
                cursor.x + Self::CURSOR_OFFSET,
                cursor.y - Self::CURSOR_OFFSET,
            ),
            name: piece.name().to_owned(),
            health: piece.template().health,
            armor: piece.template().armor,
        }
    }
}

/// Everything the frontend needs to draw one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub sprites: Vec<SpriteCommand>,
    pub trace: Option<TraceSegment>,
    pub inspect: Option<InspectBox>,
}

impl Scene {
    /// Assembles the frame: palette previews in catalog order, placed pieces
    /// in registration order, then the carried piece.
    pub fn compose(
        registry: &PieceRegistry,
        trace: Option<TraceSegment>,
        inspect: Option<InspectBox>,
    ) -> Self {
        let mut sprites =
            Vec::with_capacity(registry.previews().len() + registry.placed().len() + 1);
        sprites.extend(
            registry
                .previews()
                .iter()
                .map(|piece| sprite_command(piece, Layer::Palette)),
        );
        sprites.extend(
            registry
                .placed()
                .iter()
                .map(|piece| sprite_command(piece, Layer::Placed)),
        );
        sprites.extend(
            registry
                .carried()
                .map(|piece| sprite_command(piece, Layer::Carried)),
        );

        Self {
            sprites,
            trace,
            inspect,
        }
    }
}

fn sprite_command(piece: &PieceInstance, layer: Layer) -> SpriteCommand {
    SpriteCommand {
        key: piece.sprite_key(),
        origin: piece.origin(),
        size: piece.size(),
        angle: piece.display_angle(),
        layer,
    }
}
