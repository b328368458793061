// ── HUD text ────────────────────────────────────────────────────────────────
//
// A 3×5 block font covering the score line ("Score: " and digits). Each lit
// cell becomes one world-space box, so the text goes through the same box
// pipeline as the level and scrolls with the camera.

use glam::Vec2;

use crate::geometry::Aabb;

pub const GLYPH_WIDTH: usize = 3;
pub const GLYPH_HEIGHT: usize = 5;
/// Cursor advance in cells: glyph width plus one blank column.
pub const GLYPH_ADVANCE: usize = GLYPH_WIDTH + 1;

/// Rows top to bottom; `#` is lit.
fn glyph(ch: char) -> Option<[&'static str; GLYPH_HEIGHT]> {
    let rows = match ch {
        '0' => ["###", "#.#", "#.#", "#.#", "###"],
        '1' => [".#.", "##.", ".#.", ".#.", "###"],
        '2' => ["###", "..#", "###", "#..", "###"],
        '3' => ["###", "..#", "###", "..#", "###"],
        '4' => ["#.#", "#.#", "###", "..#", "..#"],
        '5' | 'S' => ["###", "#..", "###", "..#", "###"],
        '6' => ["###", "#..", "###", "#.#", "###"],
        '7' => ["###", "..#", ".#.", ".#.", ".#."],
        '8' => ["###", "#.#", "###", "#.#", "###"],
        '9' => ["###", "#.#", "###", "..#", "###"],
        'c' => ["...", "...", ".##", "#..", ".##"],
        'o' => ["...", "...", ".#.", "#.#", ".#."],
        'r' => ["...", "...", "##.", "#..", "#.."],
        'e' => ["...", ".#.", "###", "#..", ".##"],
        ':' => ["...", ".#.", "...", ".#.", "..."],
        ' ' => ["...", "...", "...", "...", "..."],
        _ => return None,
    };
    Some(rows)
}

/// Boxes for `text` with its bottom-left corner at `origin` (world space,
/// y-up). `cell` is the edge length of one font cell in world pixels.
/// Characters outside the font are skipped without advancing.
pub fn text_boxes(text: &str, origin: Vec2, cell: f32) -> Vec<Aabb> {
    let mut boxes = Vec::new();
    let mut cursor_x = origin.x;

    for ch in text.chars() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        for (row, line) in rows.iter().enumerate() {
            let bottom = origin.y + (GLYPH_HEIGHT - 1 - row) as f32 * cell;
            for (col, lit) in line.bytes().enumerate() {
                if lit == b'#' {
                    let left = cursor_x + col as f32 * cell;
                    boxes.push(Aabb::from_corner(left, bottom, cell, cell));
                }
            }
        }
        cursor_x += GLYPH_ADVANCE as f32 * cell;
    }
    boxes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_is_bottom_left() {
        let boxes = text_boxes("Score: 0", Vec2::new(-156.0, 10.0), 4.0);
        let left = boxes.iter().map(|b| b.left).fold(f32::INFINITY, f32::min);
        let bottom = boxes.iter().map(|b| b.bottom).fold(f32::INFINITY, f32::min);
        assert_eq!((left, bottom), (-156.0, 10.0));
    }

    #[test]
    fn test_digit_one_cell_count() {
        assert_eq!(text_boxes("1", Vec2::ZERO, 1.0).len(), 8);
    }

    #[test]
    fn test_unknown_chars_are_skipped() {
        assert_eq!(text_boxes("1?", Vec2::ZERO, 1.0), text_boxes("1", Vec2::ZERO, 1.0));
        assert!(text_boxes("  ", Vec2::ZERO, 1.0).is_empty());
    }

    #[test]
    fn test_cursor_advances_by_glyph() {
        let boxes = text_boxes("11", Vec2::ZERO, 2.0);
        let right = boxes.iter().map(|b| b.right).fold(f32::NEG_INFINITY, f32::max);
        // Second glyph starts at 4 cells, its widest row spans 3.
        assert_eq!(right, (GLYPH_ADVANCE + GLYPH_WIDTH) as f32 * 2.0);
    }
}
