//! Grid layout of segmented phrases and the grid-to-render transform.
//!
//! Each phrase occupies one grid row (row = phrase index, column = token
//! index). The render transform centers the whole block at the origin and
//! flips the row axis so increasing row moves downward in presentation
//! space.

pub mod periodic;

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::options::LayoutOptions;
use crate::segment::{PhraseSegmenter, Token};

/// Zero-based (row, column) cell in the phrase grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    /// Phrase index among the phrases laid out together.
    pub row: usize,
    /// Token index within the phrase.
    pub col: usize,
}

impl GridPosition {
    /// Construct a grid cell.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Grid cells for one or more segmented phrases, bucketed by token kind.
///
/// Element cells are keyed by atomic number, literal cells by (lowercased)
/// character. Cell lists keep segmentation order within each key.
#[derive(Debug, Default)]
pub struct PhraseLayout {
    element_cells: FxHashMap<u32, Vec<GridPosition>>,
    literal_cells: FxHashMap<char, Vec<GridPosition>>,
    rows: usize,
    max_cols: usize,
}

impl PhraseLayout {
    /// Segment each phrase and record a grid cell per token.
    pub fn compute(segmenter: &mut PhraseSegmenter, phrases: &[&str]) -> Self {
        let mut layout = Self {
            rows: phrases.len(),
            ..Self::default()
        };
        for (row, phrase) in phrases.iter().enumerate() {
            let assignment = segmenter.segment(phrase);
            layout.max_cols = layout.max_cols.max(assignment.len());
            for (col, token) in assignment.iter().enumerate() {
                let cell = GridPosition::new(row, col);
                match *token {
                    Token::Element(z) => {
                        layout.element_cells.entry(z).or_default().push(cell);
                    }
                    Token::Literal(c) => {
                        layout.literal_cells.entry(c).or_default().push(cell);
                    }
                }
            }
        }
        layout
    }

    /// Grid cells per atomic number.
    #[must_use]
    pub fn element_cells(&self) -> &FxHashMap<u32, Vec<GridPosition>> {
        &self.element_cells
    }

    /// Grid cells per leftover literal character.
    #[must_use]
    pub fn literal_cells(&self) -> &FxHashMap<char, Vec<GridPosition>> {
        &self.literal_cells
    }

    /// Number of grid rows (phrases laid out together).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Longest segmented phrase length, in tokens.
    #[must_use]
    pub fn max_cols(&self) -> usize {
        self.max_cols
    }

    /// Render positions per atomic number under the given transform.
    #[must_use]
    pub fn element_positions(
        &self,
        transform: &RenderTransform,
    ) -> FxHashMap<u32, Vec<Vec3>> {
        map_cells(&self.element_cells, transform)
    }

    /// Render positions per literal character under the given transform.
    #[must_use]
    pub fn literal_positions(
        &self,
        transform: &RenderTransform,
    ) -> FxHashMap<char, Vec<Vec3>> {
        map_cells(&self.literal_cells, transform)
    }
}

fn map_cells<K: Copy + Eq + std::hash::Hash>(
    cells: &FxHashMap<K, Vec<GridPosition>>,
    transform: &RenderTransform,
) -> FxHashMap<K, Vec<Vec3>> {
    cells
        .iter()
        .map(|(&key, positions)| {
            (
                key,
                positions
                    .iter()
                    .map(|&cell| transform.render_position(cell))
                    .collect(),
            )
        })
        .collect()
}

/// Grid-to-render-space transform: centers the text block at the origin
/// and scales by the unit tile footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTransform {
    scale: Vec3,
    row_offset: f32,
    col_offset: f32,
}

impl RenderTransform {
    /// Transform for a block of `rows` x `max_cols` cells.
    #[must_use]
    pub fn new(options: &LayoutOptions, rows: usize, max_cols: usize) -> Self {
        Self {
            scale: options.tile_scale(),
            row_offset: centering_offset(rows),
            col_offset: centering_offset(max_cols),
        }
    }

    /// Transform sized to a computed layout.
    #[must_use]
    pub fn for_layout(options: &LayoutOptions, layout: &PhraseLayout) -> Self {
        Self::new(options, layout.rows(), layout.max_cols())
    }

    /// Presentation-space position of a grid cell.
    ///
    /// `(col - col_offset, -(row - row_offset), 0) * scale`: x grows
    /// rightward along columns, y shrinks downward along rows.
    #[must_use]
    pub fn render_position(&self, cell: GridPosition) -> Vec3 {
        self.fractional_position(cell.col as f32, cell.row as f32)
    }

    /// [`Self::render_position`] over fractional cells, for arrangements
    /// with half-row slots (see [`periodic`]).
    #[must_use]
    pub fn fractional_position(&self, col: f32, row: f32) -> Vec3 {
        Vec3::new(col - self.col_offset, -(row - self.row_offset), 0.0)
            * self.scale
    }
}

/// Offset centering `n` cells around zero: `(n - 1) / 2`.
fn centering_offset(n: usize) -> f32 {
    (n.saturating_sub(1)) as f32 / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ElementCatalog;
    use crate::segment::PhraseSegmenter;

    fn layout_of(phrases: &[&str]) -> PhraseLayout {
        let catalog = ElementCatalog::builtin().unwrap();
        let mut segmenter = PhraseSegmenter::new(&catalog);
        PhraseLayout::compute(&mut segmenter, phrases)
    }

    #[test]
    fn test_rows_and_cols_track_phrases() {
        // "bacon" segments to 4 tokens, "o" to 1.
        let layout = layout_of(&["bacon", "o"]);
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.max_cols(), 4);
    }

    #[test]
    fn test_cells_are_bucketed_by_token_kind() {
        // "xo" -> literal 'x' at col 0, Oxygen at col 1.
        let layout = layout_of(&["xo"]);
        assert_eq!(
            layout.literal_cells()[&'x'],
            vec![GridPosition::new(0, 0)]
        );
        assert_eq!(
            layout.element_cells()[&8],
            vec![GridPosition::new(0, 1)]
        );
    }

    #[test]
    fn test_repeated_elements_collect_in_order() {
        // "oo" -> two Oxygen tiles on one row.
        let layout = layout_of(&["oo"]);
        assert_eq!(
            layout.element_cells()[&8],
            vec![GridPosition::new(0, 0), GridPosition::new(0, 1)]
        );
    }

    #[test]
    fn test_single_cell_renders_at_origin() {
        let layout = layout_of(&["o"]);
        let transform =
            RenderTransform::for_layout(&LayoutOptions::default(), &layout);
        assert_eq!(
            transform.render_position(GridPosition::new(0, 0)),
            Vec3::ZERO
        );
    }

    #[test]
    fn test_block_is_centered_and_rows_grow_downward() {
        let options = LayoutOptions {
            tile_width: 2.0,
            tile_height: 1.0,
            horizontal_scale: 1.0,
            vertical_scale: 1.0,
        };
        // 3 rows x 3 cols: the middle cell sits at the origin.
        let transform = RenderTransform::new(&options, 3, 3);
        assert_eq!(
            transform.render_position(GridPosition::new(1, 1)),
            Vec3::ZERO
        );
        let top_left = transform.render_position(GridPosition::new(0, 0));
        let bottom_left = transform.render_position(GridPosition::new(2, 0));
        assert_eq!(top_left, Vec3::new(-2.0, 1.0, 0.0));
        assert_eq!(bottom_left, Vec3::new(-2.0, -1.0, 0.0));
    }

    #[test]
    fn test_scale_factors_multiply_tile_footprint() {
        let options = LayoutOptions {
            tile_width: 2.0,
            tile_height: 2.0,
            horizontal_scale: 0.5,
            vertical_scale: 2.0,
        };
        let transform = RenderTransform::new(&options, 1, 2);
        // col_offset = 0.5, so col 1 sits half a cell right of center.
        assert_eq!(
            transform.render_position(GridPosition::new(0, 1)),
            Vec3::new(0.5, 0.0, 0.0)
        );
    }

    #[test]
    fn test_position_maps_match_cell_maps() {
        let layout = layout_of(&["xo", "ba"]);
        let transform =
            RenderTransform::for_layout(&LayoutOptions::default(), &layout);
        let elements = layout.element_positions(&transform);
        assert_eq!(elements.len(), layout.element_cells().len());
        let literals = layout.literal_positions(&transform);
        assert_eq!(literals[&'x'].len(), 1);
    }
}
