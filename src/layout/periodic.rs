//! The classic 18-column periodic-table arrangement.
//!
//! Slots are (column, row) cells in table coordinates; lanthanides and
//! actinides sit in detached half-rows below the main body (rows 7.5 and
//! 8.5). Render positions follow the same tile-footprint scale convention
//! as phrase layouts, centered on the table body.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::options::LayoutOptions;

/// Column offset centering the 18 table columns around zero.
const COL_OFFSET: f32 = 8.5;
/// Row offset centering the table (rows 0 through 8.5) around zero.
const ROW_OFFSET: f32 = 4.25;

/// (atomic number, column, row) for every element.
#[rustfmt::skip]
const SLOTS: [(u32, f32, f32); 118] = [
    // Period 1
    (1, 0.0, 0.0), (2, 17.0, 0.0),
    // Period 2
    (3, 0.0, 1.0), (4, 1.0, 1.0), (5, 12.0, 1.0), (6, 13.0, 1.0),
    (7, 14.0, 1.0), (8, 15.0, 1.0), (9, 16.0, 1.0), (10, 17.0, 1.0),
    // Period 3
    (11, 0.0, 2.0), (12, 1.0, 2.0), (13, 12.0, 2.0), (14, 13.0, 2.0),
    (15, 14.0, 2.0), (16, 15.0, 2.0), (17, 16.0, 2.0), (18, 17.0, 2.0),
    // Period 4
    (19, 0.0, 3.0), (20, 1.0, 3.0), (21, 2.0, 3.0), (22, 3.0, 3.0),
    (23, 4.0, 3.0), (24, 5.0, 3.0), (25, 6.0, 3.0), (26, 7.0, 3.0),
    (27, 8.0, 3.0), (28, 9.0, 3.0), (29, 10.0, 3.0), (30, 11.0, 3.0),
    (31, 12.0, 3.0), (32, 13.0, 3.0), (33, 14.0, 3.0), (34, 15.0, 3.0),
    (35, 16.0, 3.0), (36, 17.0, 3.0),
    // Period 5
    (37, 0.0, 4.0), (38, 1.0, 4.0), (39, 2.0, 4.0), (40, 3.0, 4.0),
    (41, 4.0, 4.0), (42, 5.0, 4.0), (43, 6.0, 4.0), (44, 7.0, 4.0),
    (45, 8.0, 4.0), (46, 9.0, 4.0), (47, 10.0, 4.0), (48, 11.0, 4.0),
    (49, 12.0, 4.0), (50, 13.0, 4.0), (51, 14.0, 4.0), (52, 15.0, 4.0),
    (53, 16.0, 4.0), (54, 17.0, 4.0),
    // Period 6 (lanthanides detached at row 7.5)
    (55, 0.0, 5.0), (56, 1.0, 5.0),
    (57, 2.0, 7.5), (58, 3.0, 7.5), (59, 4.0, 7.5), (60, 5.0, 7.5),
    (61, 6.0, 7.5), (62, 7.0, 7.5), (63, 8.0, 7.5), (64, 9.0, 7.5),
    (65, 10.0, 7.5), (66, 11.0, 7.5), (67, 12.0, 7.5), (68, 13.0, 7.5),
    (69, 14.0, 7.5), (70, 15.0, 7.5),
    (71, 2.0, 5.0), (72, 3.0, 5.0), (73, 4.0, 5.0), (74, 5.0, 5.0),
    (75, 6.0, 5.0), (76, 7.0, 5.0), (77, 8.0, 5.0), (78, 9.0, 5.0),
    (79, 10.0, 5.0), (80, 11.0, 5.0), (81, 12.0, 5.0), (82, 13.0, 5.0),
    (83, 14.0, 5.0), (84, 15.0, 5.0), (85, 16.0, 5.0), (86, 17.0, 5.0),
    // Period 7 (actinides detached at row 8.5)
    (87, 0.0, 6.0), (88, 1.0, 6.0),
    (89, 2.0, 8.5), (90, 3.0, 8.5), (91, 4.0, 8.5), (92, 5.0, 8.5),
    (93, 6.0, 8.5), (94, 7.0, 8.5), (95, 8.0, 8.5), (96, 9.0, 8.5),
    (97, 10.0, 8.5), (98, 11.0, 8.5), (99, 12.0, 8.5), (100, 13.0, 8.5),
    (101, 14.0, 8.5), (102, 15.0, 8.5),
    (103, 2.0, 6.0), (104, 3.0, 6.0), (105, 4.0, 6.0), (106, 5.0, 6.0),
    (107, 6.0, 6.0), (108, 7.0, 6.0), (109, 8.0, 6.0), (110, 9.0, 6.0),
    (111, 10.0, 6.0), (112, 11.0, 6.0), (113, 12.0, 6.0), (114, 13.0, 6.0),
    (115, 14.0, 6.0), (116, 15.0, 6.0), (117, 16.0, 6.0), (118, 17.0, 6.0),
];

/// Table slots as (atomic number, column, row) triples.
#[must_use]
pub fn slots() -> &'static [(u32, f32, f32)] {
    &SLOTS
}

/// Centered render position of every element's table slot.
#[must_use]
pub fn render_positions(options: &LayoutOptions) -> FxHashMap<u32, Vec3> {
    let scale = options.tile_scale();
    SLOTS
        .iter()
        .map(|&(z, col, row)| {
            let position =
                Vec3::new(col - COL_OFFSET, -(row - ROW_OFFSET), 0.0) * scale;
            (z, position)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_element_has_one_slot() {
        let mut seen = [false; 118];
        for &(z, _, _) in slots() {
            let idx = z as usize - 1;
            assert!(!seen[idx], "duplicate slot for atomic number {z}");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_columns_and_rows_stay_in_table_bounds() {
        for &(z, col, row) in slots() {
            assert!((0.0..=17.0).contains(&col), "element {z}");
            assert!((0.0..=8.5).contains(&row), "element {z}");
        }
    }

    #[test]
    fn test_hydrogen_and_helium_anchor_the_first_period() {
        let options = LayoutOptions {
            tile_width: 1.0,
            tile_height: 1.0,
            horizontal_scale: 1.0,
            vertical_scale: 1.0,
        };
        let positions = render_positions(&options);
        // Hydrogen top-left, Helium top-right, mirrored around center.
        assert_eq!(positions[&1], Vec3::new(-8.5, 4.25, 0.0));
        assert_eq!(positions[&2], Vec3::new(8.5, 4.25, 0.0));
    }

    #[test]
    fn test_lanthanides_sit_below_the_main_body() {
        let options = LayoutOptions::default();
        let positions = render_positions(&options);
        // Lanthanum (57) renders below Radium's row (88 sits in row 6).
        assert!(positions[&57].y < positions[&88].y);
    }
}
