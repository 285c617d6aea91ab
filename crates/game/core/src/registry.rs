//! Live piece instances and the registry that owns them.
//!
//! The registry holds four collections with distinct lifecycles: the immutable
//! template list, one palette preview per template, the zero-or-one carried
//! piece following the cursor, and the ordered list of placed pieces. Only
//! placed pieces receive real identifiers; previews and the carried copy are
//! reference pieces tagged with the sentinel id and replaced wholesale.

use std::fmt;

use crate::catalog::{CategoryTag, PieceTemplate, SpriteKey};
use crate::config::BoardConfig;
use crate::geometry::{PixelRect, Point};

/// Identifier for a placed piece instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Reserved identifier for reference copies (palette previews and the
    /// carried piece). Reference copies never join the placed list, so the
    /// sentinel never collides with an allocated id.
    pub const REFERENCE: Self = Self(0);

    #[inline]
    pub const fn is_reference(self) -> bool {
        self.0 == Self::REFERENCE.0
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No catalog entry matches the requested template name.
    #[error("unknown template: {0:?}")]
    UnknownTemplate(String),

    /// A placement was requested while nothing is carried.
    #[error("no carried piece to place")]
    NothingCarried,
}

/// Live copy of a template: a stat block plus board presentation state.
///
/// The embedded template is a value copy, so mutating the registry's catalog
/// is never observable through an instance. Presentation consists of the
/// top-left anchor, the pixel footprint, and the accumulated rotation angle;
/// the displayed image is always derived fresh from the unrotated base sprite
/// at [`display_angle`](Self::display_angle), never resampled cumulatively.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceInstance {
    id: InstanceId,
    template: PieceTemplate,
    origin: Point,
    size: (i32, i32),
    angle: f32,
}

impl PieceInstance {
    fn new(id: InstanceId, template: PieceTemplate, grid_cell: i32) -> Self {
        let size = template.footprint_px(grid_cell);
        Self {
            id,
            template,
            origin: Point::ORIGIN,
            size,
            angle: 0.0,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn template(&self) -> &PieceTemplate {
        &self.template
    }

    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn category(&self) -> &CategoryTag {
        &self.template.category
    }

    pub fn sprite_key(&self) -> SpriteKey {
        self.template.sprite_key()
    }

    /// Top-left anchor in logical pixels.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Pixel footprint per axis.
    pub fn size(&self) -> (i32, i32) {
        self.size
    }

    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(self.origin.x, self.origin.y, self.size.0, self.size.1)
    }

    /// Accumulated rotation in degrees, unbounded.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Rotation normalized into `[0, 360)` for display.
    pub fn display_angle(&self) -> f32 {
        self.angle.rem_euclid(360.0)
    }

    /// Absolute move of the top-left anchor. No clamping: off-board positions
    /// are legal and simply render off-screen.
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.origin = Point::new(x, y);
    }

    /// Relative move of the top-left anchor.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.origin.x += dx;
        self.origin.y += dy;
    }

    /// Moves the piece so its footprint is centered on `point`.
    pub fn center_on(&mut self, point: Point) {
        self.move_to(point.x - self.size.0 / 2, point.y - self.size.1 / 2);
    }

    /// Accumulates a rotation. The display image is recomputed from the base
    /// sprite at the new angle, so repeated rotation loses no quality.
    pub fn rotate(&mut self, delta_degrees: f32) {
        self.angle += delta_degrees;
    }

    /// Overrides the pixel footprint. Used for palette previews, which draw
    /// at the menu cell size regardless of their grid footprint.
    pub fn scale_to(&mut self, width: i32, height: i32) {
        self.size = (width, height);
    }

    /// Copies the source's stat block and position into `self`, re-deriving
    /// the unrotated base presentation (grid footprint, zero angle) and then
    /// re-applying the source's accumulated angle through [`rotate`]
    /// (Self::rotate). The id is untouched.
    pub fn copy_from(&mut self, source: &PieceInstance, grid_cell: i32) {
        self.template = source.template.clone();
        self.size = self.template.footprint_px(grid_cell);
        self.origin = source.origin;
        self.angle = 0.0;
        self.rotate(source.angle);
    }
}

/// Owner of all piece state: templates, palette previews, the carried piece,
/// and the ordered placed list.
#[derive(Clone, Debug)]
pub struct PieceRegistry {
    config: BoardConfig,
    templates: Vec<PieceTemplate>,
    previews: Vec<PieceInstance>,
    carried: Option<PieceInstance>,
    placed: Vec<PieceInstance>,
    next_id: u32,
}

impl PieceRegistry {
    /// Builds the registry from a loaded catalog. Palette previews are laid
    /// out in catalog order in a vertical column on the board's right edge,
    /// one menu cell per row.
    pub fn new(templates: Vec<PieceTemplate>, config: BoardConfig) -> Self {
        let menu_cell = config.menu_cell();
        let previews = templates
            .iter()
            .enumerate()
            .map(|(row, template)| {
                let mut preview =
                    PieceInstance::new(InstanceId::REFERENCE, template.clone(), config.grid_cell);
                preview.scale_to(menu_cell, menu_cell);
                preview.move_to(config.width - menu_cell, row as i32 * menu_cell);
                preview
            })
            .collect();

        Self {
            config,
            templates,
            previews,
            carried: None,
            placed: Vec::new(),
            next_id: 1,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn templates(&self) -> &[PieceTemplate] {
        &self.templates
    }

    /// Template shown at the given palette row, if the catalog has one there.
    pub fn template_at_row(&self, row: usize) -> Option<&PieceTemplate> {
        self.templates.get(row)
    }

    pub fn template_named(&self, name: &str) -> Result<&PieceTemplate, RegistryError> {
        self.templates
            .iter()
            .find(|template| template.name == name)
            .ok_or_else(|| RegistryError::UnknownTemplate(name.to_owned()))
    }

    pub fn previews(&self) -> &[PieceInstance] {
        &self.previews
    }

    pub fn carried(&self) -> Option<&PieceInstance> {
        self.carried.as_ref()
    }

    pub fn placed(&self) -> &[PieceInstance] {
        &self.placed
    }

    pub fn placed_by_id(&self, id: InstanceId) -> Option<&PieceInstance> {
        self.placed.iter().find(|piece| piece.id == id)
    }

    /// Fresh reference copy of a template: origin position, zero angle,
    /// grid-derived footprint.
    pub fn instantiate(&self, template: &PieceTemplate) -> PieceInstance {
        PieceInstance::new(InstanceId::REFERENCE, template.clone(), self.config.grid_cell)
    }

    /// Replaces the carried piece with a copy of the template at a palette
    /// row. Returns the new carried piece, or `None` when the row has no
    /// template.
    pub fn carry_row(&mut self, row: usize) -> Option<&PieceInstance> {
        let template = self.templates.get(row)?.clone();
        let instance = self.instantiate(&template);
        Some(&*self.carried.insert(instance))
    }

    /// Replaces the carried piece with a copy of the named template.
    pub fn carry_named(&mut self, name: &str) -> Result<&PieceInstance, RegistryError> {
        let template = self.template_named(name)?.clone();
        let instance = self.instantiate(&template);
        Ok(&*self.carried.insert(instance))
    }

    /// Discards the carried piece, returning it if there was one.
    pub fn drop_carried(&mut self) -> Option<PieceInstance> {
        self.carried.take()
    }

    /// Centers the carried piece on the cursor. No-op when nothing is carried.
    pub fn center_carried_on(&mut self, cursor: Point) {
        if let Some(carried) = self.carried.as_mut() {
            carried.center_on(cursor);
        }
    }

    /// Rotates the carried piece. Returns false when nothing is carried.
    pub fn rotate_carried(&mut self, delta_degrees: f32) -> bool {
        match self.carried.as_mut() {
            Some(carried) => {
                carried.rotate(delta_degrees);
                true
            }
            None => false,
        }
    }

    /// Centers a placed piece on the cursor (free-form drag).
    pub fn center_placed_on(&mut self, id: InstanceId, cursor: Point) {
        if let Some(piece) = self.placed.iter_mut().find(|piece| piece.id == id) {
            piece.center_on(cursor);
        }
    }

    /// Commits a copy of the carried piece to the placed list under the next
    /// sequential id. The carried piece itself stays in hand.
    pub fn place(&mut self) -> Result<InstanceId, RegistryError> {
        let source = self.carried.as_ref().ok_or(RegistryError::NothingCarried)?;

        let id = InstanceId(self.next_id);
        self.next_id += 1;

        let mut unit = PieceInstance::new(id, source.template.clone(), self.config.grid_cell);
        unit.copy_from(source, self.config.grid_cell);
        self.placed.push(unit);
        Ok(id)
    }
}
