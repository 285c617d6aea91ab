//! Top-level per-tick controller tying hover, gesture, and selection together.
//!
//! `BoardSession` owns the registry, the gesture detector, and the input edge
//! detector. Each tick runs three phases in a fixed order: resolve the hovered
//! placed piece, feed the gesture detector, then apply the selection
//! transitions. Later phases consume the hover result computed at the top of
//! the same tick, so the order is fixed.

use crate::config::BoardConfig;
use crate::gesture::{GestureDetector, MotionStats, ShotEvent};
use crate::hover;
use crate::input::{EdgeDetector, InputEdges, InputSnapshot};
use crate::registry::{InstanceId, PieceInstance, PieceRegistry, RegistryError};
use crate::scene::{InspectBox, Scene, TraceSegment};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The configured starting template cannot be carried.
    #[error("initial piece unavailable: {0}")]
    InitialPiece(#[from] RegistryError),
}

/// Selection machine state. `Carrying` names the template the carried copy
/// was made from, so a later placement re-copies the template line rather
/// than any placed instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SelectionState {
    /// Nothing in hand; placed pieces can be dragged and inspected.
    #[default]
    Idle,
    /// A reference copy of the named template follows the cursor.
    Carrying { template: String },
}

/// Observable outcomes of one tick, for the caller to log or display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Quit was requested; the loop should end after this tick.
    pub quit: bool,
    /// A shot sweep fired this tick.
    pub shot: Option<ShotEvent>,
    /// A carried copy was committed to the board under this id.
    pub placed: Option<InstanceId>,
    /// A palette click picked up this template.
    pub selected: Option<String>,
    /// A carried piece was discarded.
    pub deselected: bool,
    /// A placed piece was dragged to the cursor.
    pub dragged: Option<InstanceId>,
    /// A placed piece is under inspection.
    pub inspected: Option<InstanceId>,
}

/// Per-tick reducer over the whole interactive state.
#[derive(Clone, Debug)]
pub struct BoardSession {
    registry: PieceRegistry,
    detector: GestureDetector,
    edges: EdgeDetector,
    state: SelectionState,
    inspect: Option<InspectBox>,
}

impl BoardSession {
    /// Builds a session over a loaded registry. When `initial` names a
    /// template, the session starts in `Carrying` with a copy of it in hand;
    /// an unknown name is a startup error, not a silent fallback.
    pub fn new(registry: PieceRegistry, initial: Option<&str>) -> Result<Self, SessionError> {
        let mut session = Self {
            registry,
            detector: GestureDetector::new(),
            edges: EdgeDetector::new(),
            state: SelectionState::Idle,
            inspect: None,
        };

        if let Some(name) = initial {
            session.registry.carry_named(name)?;
            session.state = SelectionState::Carrying {
                template: name.to_owned(),
            };
        }

        Ok(session)
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn registry(&self) -> &PieceRegistry {
        &self.registry
    }

    /// Motion statistics over the current gesture window, when saturated.
    pub fn stats(&self) -> Option<MotionStats> {
        self.detector.stats()
    }

    /// Advances the session by one tick. Total over well-formed state: every
    /// anomaly (empty palette row, rotation with nothing carried) is a
    /// consumed no-op, so the interactive loop has no error path.
    pub fn tick(&mut self, input: &InputSnapshot) -> TickReport {
        let mut report = TickReport::default();
        self.inspect = None;
        let cursor = input.cursor;

        // Phase 1: hover. Resolved once, before any mutation; the gesture
        // and selection phases both consume this tick's result.
        let hovered = hover::hit_test(self.registry.placed(), cursor).map(PieceInstance::id);

        // Phase 2: gesture.
        report.shot = self.detector.observe(cursor, self.registry.placed());

        // Phase 3: selection.
        let edges = self.edges.advance(input);
        report.quit = edges.contains(InputEdges::QUIT);

        // The piece in hand follows the cursor before any commit, so a
        // placement lands centered on the click point.
        self.registry.center_carried_on(cursor);

        if edges.contains(InputEdges::PRIMARY) {
            match hover::palette_row(self.registry.config(), cursor) {
                // Palette click: pick up the template at that row. A rowless
                // click is consumed with no effect.
                Some(row) => {
                    let picked = self
                        .registry
                        .carry_row(row)
                        .map(|piece| piece.name().to_owned());
                    if let Some(template) = picked {
                        self.registry.center_carried_on(cursor);
                        self.state = SelectionState::Carrying {
                            template: template.clone(),
                        };
                        report.selected = Some(template);
                    }
                }
                // Board click while carrying: stamp a copy. The state stays
                // Carrying, so the same template can be placed again.
                None => {
                    if matches!(self.state, SelectionState::Carrying { .. }) {
                        report.placed = self.registry.place().ok();
                    }
                }
            }
        }

        if edges.contains(InputEdges::DESELECT) {
            report.deselected = self.registry.drop_carried().is_some();
            self.state = SelectionState::Idle;
        }

        if edges.contains(InputEdges::ROTATE_CW) {
            self.registry
                .rotate_carried(-BoardConfig::ROTATION_STEP_DEGREES);
        }
        if edges.contains(InputEdges::ROTATE_CCW) {
            self.registry
                .rotate_carried(BoardConfig::ROTATION_STEP_DEGREES);
        }

        if matches!(self.state, SelectionState::Idle) {
            // Free-form drag: level-triggered, re-centers the hovered piece
            // on the cursor every tick of the hold.
            if input.primary {
                if let Some(id) = hovered {
                    self.registry.center_placed_on(id, cursor);
                    report.dragged = Some(id);
                }
            }
            // Inspect: level-triggered, read-only, yields to an active drag.
            if report.dragged.is_none() && input.secondary {
                if let Some(id) = hovered {
                    if let Some(piece) = self.registry.placed_by_id(id) {
                        self.inspect = Some(InspectBox::for_piece(piece, cursor));
                        report.inspected = Some(id);
                    }
                }
            }
        }

        report
    }

    /// Renders the current state into a frame description.
    pub fn scene(&self) -> Scene {
        let trace = self.detector.latest_shot().map(|shot| TraceSegment {
            start: shot.start,
            end: shot.end,
        });
        Scene::compose(&self.registry, trace, self.inspect.clone())
    }
}
