/// Board configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    /// Board width in logical pixels.
    pub width: i32,
    /// Board height in logical pixels.
    pub height: i32,
    /// Edge length of one grid cell in logical pixels.
    /// Piece footprints are multiples of this value.
    pub grid_cell: i32,
}

impl BoardConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum cursor samples retained by the motion window.
    pub const MAX_MOTION_SAMPLES: usize = 5;
    /// Per-step deltas in a saturated motion window (one fewer than samples).
    pub const MOTION_DELTA_WINDOW: usize = 4;

    // ===== detection and interaction tuning =====
    /// Mean step magnitude (units per tick) above which a sweep counts as a shot.
    pub const SHOT_THRESHOLD: f32 = 5.0;
    /// Rotation applied per rotate-key press, in degrees.
    pub const ROTATION_STEP_DEGREES: f32 = 22.5;
    /// Palette cells are this many grid cells on a side.
    pub const PALETTE_CELL_FACTOR: i32 = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOARD_WIDTH: i32 = 800;
    pub const DEFAULT_BOARD_HEIGHT: i32 = 800;
    pub const DEFAULT_GRID_CELL: i32 = 12;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_BOARD_WIDTH,
            height: Self::DEFAULT_BOARD_HEIGHT,
            grid_cell: Self::DEFAULT_GRID_CELL,
        }
    }

    pub fn with_grid_cell(grid_cell: i32) -> Self {
        Self {
            grid_cell,
            ..Self::new()
        }
    }

    /// Edge length of one palette cell in logical pixels.
    pub fn menu_cell(&self) -> i32 {
        self.grid_cell * Self::PALETTE_CELL_FACTOR
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}
