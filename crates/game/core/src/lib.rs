//! Interaction engine for the sandtable board: gesture detection, hover
//! resolution, piece bookkeeping, and the per-tick selection machine.
//!
//! `game-core` is pure logic with no I/O and no rendering types. A frontend
//! feeds it an [`input::InputSnapshot`] once per tick through
//! [`session::BoardSession::tick`] and draws the [`scene::Scene`] it exposes
//! afterward; loading catalogs and sprite tables lives in supporting crates.
pub mod catalog;
pub mod config;
pub mod geometry;
pub mod gesture;
pub mod hover;
pub mod input;
pub mod registry;
pub mod scene;
pub mod session;

pub use catalog::{CategoryTag, PieceTemplate, Sprite, SpriteKey, SpriteLibrary};
pub use config::BoardConfig;
pub use geometry::{PixelRect, Point};
pub use gesture::{GestureDetector, MotionStats, MotionWindow, ShotEvent};
pub use input::{EdgeDetector, InputChannel, InputEdges, InputSnapshot};
pub use registry::{InstanceId, PieceInstance, PieceRegistry, RegistryError};
pub use scene::{InspectBox, Layer, Scene, SpriteCommand, TraceSegment};
pub use session::{BoardSession, SelectionState, SessionError, TickReport};
