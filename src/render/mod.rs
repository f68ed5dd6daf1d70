// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scene painting.
//!
//! The painter produces Unicode text plus per-element emphasis spans that the TUI uses for
//! cell-accurate colouring.

use std::fmt;

use thiserror::Error;

mod scene;
#[cfg(test)]
mod test_utils;
mod text;

pub use scene::{
    render_scene, render_scene_plain, AnnotatedScene, EmphasisSpan, SceneRenderError,
};

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';

pub const ARROW_RIGHT: char = '▶';
pub const ARROW_LEFT: char = '◀';
pub const ARROW_UP: char = '▲';
pub const ARROW_DOWN: char = '▼';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    fn is_horizontal(self) -> bool {
        !self.is_empty() && !self.contains(Self::UP) && !self.contains(Self::DOWN)
    }

    fn is_vertical(self) -> bool {
        !self.is_empty() && !self.contains(Self::LEFT) && !self.contains(Self::RIGHT)
    }
}

fn box_edges_from_char(ch: char) -> Option<BoxEdges> {
    match ch {
        UNICODE_BOX_HORIZONTAL => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT)),
        UNICODE_BOX_VERTICAL => Some(BoxEdges::UP.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::DOWN)),
        UNICODE_BOX_TOP_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::DOWN)),
        UNICODE_BOX_BOTTOM_LEFT => Some(BoxEdges::RIGHT.union(BoxEdges::UP)),
        UNICODE_BOX_BOTTOM_RIGHT => Some(BoxEdges::LEFT.union(BoxEdges::UP)),
        UNICODE_BOX_TEE_RIGHT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::RIGHT)),
        UNICODE_BOX_TEE_LEFT => Some(BoxEdges::UP.union(BoxEdges::DOWN).union(BoxEdges::LEFT)),
        UNICODE_BOX_TEE_DOWN => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::DOWN)),
        UNICODE_BOX_TEE_UP => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT).union(BoxEdges::UP)),
        UNICODE_BOX_CROSS => Some(
            BoxEdges::LEFT
                .union(BoxEdges::RIGHT)
                .union(BoxEdges::UP)
                .union(BoxEdges::DOWN),
        ),
        _ => None,
    }
}

/// The side an arrowhead attaches to its incoming line.
fn arrowhead_tail(ch: char) -> BoxEdges {
    match ch {
        ARROW_RIGHT => BoxEdges::LEFT,
        ARROW_LEFT => BoxEdges::RIGHT,
        ARROW_DOWN => BoxEdges::UP,
        ARROW_UP => BoxEdges::DOWN,
        _ => BoxEdges::NONE,
    }
}

fn box_char_from_edges(edges: BoxEdges) -> char {
    match edges.0 {
        0 => ' ',
        // Straight segments (including endpoints).
        1..=3 => UNICODE_BOX_HORIZONTAL,
        4 | 8 | 12 => UNICODE_BOX_VERTICAL,
        10 => UNICODE_BOX_TOP_LEFT,
        9 => UNICODE_BOX_TOP_RIGHT,
        6 => UNICODE_BOX_BOTTOM_LEFT,
        5 => UNICODE_BOX_BOTTOM_RIGHT,
        14 => UNICODE_BOX_TEE_RIGHT,
        13 => UNICODE_BOX_TEE_LEFT,
        11 => UNICODE_BOX_TEE_DOWN,
        7 => UNICODE_BOX_TEE_UP,
        _ => UNICODE_BOX_CROSS,
    }
}

/// A fixed-size, bounds-checked character grid.
///
/// Collision behavior is deterministic:
/// - plain characters overwrite (last writer wins)
/// - box-drawing characters merge into junctions instead of overwriting
/// - arrowheads count as connected on their tail side, so a line ending in `▼` keeps its stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    box_edges: Vec<BoxEdges>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces.
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
            box_edges: vec![BoxEdges::NONE; len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.render_at(x, y, idx))
    }

    /// True when `(x, y)` is in bounds and renders as a space.
    pub fn is_blank(&self, x: usize, y: usize) -> bool {
        self.get(x, y).map(|ch| ch == ' ').unwrap_or(false)
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        if let Some(edges) = box_edges_from_char(ch) {
            self.box_edges[idx] = self.box_edges[idx].union(edges);
        } else {
            self.cells[idx] = ch;
            self.box_edges[idx] = BoxEdges::NONE;
        }
        Ok(())
    }

    /// Merges raw line edges into `(x, y)`.
    fn add_edges(&mut self, x: usize, y: usize, edges: BoxEdges) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.box_edges[idx] = self.box_edges[idx].union(edges);
        Ok(())
    }

    /// Writes `text` left-to-right starting at `(x, y)`, clipping at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        if y >= self.height {
            return Err(self.out_of_bounds(x, y));
        }

        for (offset, ch) in text.chars().enumerate() {
            let cx = x + offset;
            if cx >= self.width {
                break;
            }
            self.set(cx, y, ch)?;
        }

        Ok(())
    }

    pub fn draw_hline(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), CanvasError> {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        if y >= self.height {
            return Err(self.out_of_bounds(min_x, y));
        }
        if max_x >= self.width {
            return Err(self.out_of_bounds(max_x, y));
        }

        for x in min_x..=max_x {
            self.set(x, y, UNICODE_BOX_HORIZONTAL)?;
        }
        Ok(())
    }

    pub fn draw_vline(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), CanvasError> {
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        if x >= self.width {
            return Err(self.out_of_bounds(x, min_y));
        }
        if max_y >= self.height {
            return Err(self.out_of_bounds(x, max_y));
        }

        for y in min_y..=max_y {
            self.set(x, y, UNICODE_BOX_VERTICAL)?;
        }
        Ok(())
    }

    /// Draws a single-line box with corners at `(x0, y0)` and `(x1, y1)`.
    ///
    /// Nothing is drawn when any corner is out of bounds.
    pub fn draw_box(
        &mut self,
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
    ) -> Result<(), CanvasError> {
        let (min_x, max_x) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

        if max_x >= self.width {
            return Err(self.out_of_bounds(max_x, min_y));
        }
        if max_y >= self.height {
            return Err(self.out_of_bounds(min_x, max_y));
        }

        if min_x == max_x && min_y == max_y {
            return self.set(min_x, min_y, UNICODE_BOX_CROSS);
        }
        if min_y == max_y {
            return self.draw_hline(min_x, max_x, min_y);
        }
        if min_x == max_x {
            return self.draw_vline(min_x, min_y, max_y);
        }

        for x in (min_x + 1)..max_x {
            self.set(x, min_y, UNICODE_BOX_HORIZONTAL)?;
            self.set(x, max_y, UNICODE_BOX_HORIZONTAL)?;
        }
        for y in (min_y + 1)..max_y {
            self.set(min_x, y, UNICODE_BOX_VERTICAL)?;
            self.set(max_x, y, UNICODE_BOX_VERTICAL)?;
        }

        self.set(min_x, min_y, UNICODE_BOX_TOP_LEFT)?;
        self.set(max_x, min_y, UNICODE_BOX_TOP_RIGHT)?;
        self.set(min_x, max_y, UNICODE_BOX_BOTTOM_LEFT)?;
        self.set(max_x, max_y, UNICODE_BOX_BOTTOM_RIGHT)?;

        Ok(())
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> CanvasError {
        CanvasError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok((y * self.width) + x)
    }

    fn render_at(&self, x: usize, y: usize, idx: usize) -> char {
        let edges = self.box_edges[idx];
        if edges.is_empty() {
            return self.cells[idx];
        }

        let connected = self.connected_box_edges(x, y, edges);
        box_char_from_edges(if connected.is_empty() { edges } else { connected })
    }

    fn edges_at(&self, idx: usize) -> BoxEdges {
        let edges = self.box_edges[idx];
        if edges.is_empty() {
            arrowhead_tail(self.cells[idx])
        } else {
            edges
        }
    }

    fn connected_box_edges(&self, x: usize, y: usize, edges: BoxEdges) -> BoxEdges {
        let mut connected = BoxEdges::NONE;

        if edges.contains(BoxEdges::LEFT)
            && x > 0
            && self.edges_at(y * self.width + x - 1).contains(BoxEdges::RIGHT)
        {
            connected = connected.union(BoxEdges::LEFT);
        }
        if edges.contains(BoxEdges::RIGHT)
            && x + 1 < self.width
            && self.edges_at(y * self.width + x + 1).contains(BoxEdges::LEFT)
        {
            connected = connected.union(BoxEdges::RIGHT);
        }
        if edges.contains(BoxEdges::UP)
            && y > 0
            && self.edges_at((y - 1) * self.width + x).contains(BoxEdges::DOWN)
        {
            connected = connected.union(BoxEdges::UP);
        }
        if edges.contains(BoxEdges::DOWN)
            && y + 1 < self.height
            && self.edges_at((y + 1) * self.width + x).contains(BoxEdges::UP)
        {
            connected = connected.union(BoxEdges::DOWN);
        }

        connected
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(self.render_at(x, y, (y * self.width) + x))?;
            }
            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("canvas area overflow: {width}*{height}")]
    AreaOverflow { width: usize, height: usize },
    #[error("out of bounds: ({x},{y}) for {width}x{height} canvas")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::{Canvas, CanvasError, ARROW_DOWN, ARROW_RIGHT};

    #[test]
    fn set_and_get_in_bounds() {
        let mut c = Canvas::new_filled(3, 2, '.').expect("canvas");
        c.set(1, 0, 'X').unwrap();
        assert_eq!(c.get(1, 0).unwrap(), 'X');
        assert_eq!(c.to_string(), ".X.\n...");
    }

    #[test]
    fn set_out_of_bounds_errors() {
        let mut c = Canvas::new(2, 2).expect("canvas");
        assert_eq!(
            c.set(2, 0, 'X').unwrap_err(),
            CanvasError::OutOfBounds { x: 2, y: 0, width: 2, height: 2 }
        );
        assert!(!c.is_blank(2, 0));
        assert!(c.is_blank(1, 1));
    }

    #[test]
    fn write_str_clips_at_right_edge() {
        let mut c = Canvas::new_filled(4, 1, '.').expect("canvas");
        c.write_str(2, 0, "abcdef").unwrap();
        assert_eq!(c.to_string(), "..ab");
    }

    #[test]
    fn rejects_area_overflow() {
        assert_eq!(
            Canvas::new_filled(usize::MAX, 2, '.').unwrap_err(),
            CanvasError::AreaOverflow { width: usize::MAX, height: 2 }
        );
    }

    #[test]
    fn draw_box_out_of_bounds_is_not_partial() {
        let mut c = Canvas::new_filled(4, 3, '.').expect("canvas");
        let err = c.draw_box(0, 0, 4, 2).unwrap_err();
        assert_eq!(err, CanvasError::OutOfBounds { x: 4, y: 0, width: 4, height: 3 });
        assert_eq!(c.to_string(), "....\n....\n....");
    }

    #[test]
    fn draw_box_draws_corners_and_edges() {
        let mut c = Canvas::new_filled(6, 5, '.').expect("canvas");
        c.draw_box(1, 1, 4, 3).unwrap();
        assert_eq!(c.to_string(), "......\n.┌──┐.\n.│..│.\n.└──┘.\n......");
    }

    #[test]
    fn crossing_lines_merge_into_junctions() {
        let mut c = Canvas::new_filled(5, 5, '.').expect("canvas");
        c.draw_hline(0, 4, 2).unwrap();
        c.draw_vline(2, 0, 4).unwrap();
        assert_eq!(c.to_string(), "..│..\n..│..\n──┼──\n..│..\n..│..");

        let mut c = Canvas::new_filled(5, 5, '.').expect("canvas");
        c.draw_vline(2, 0, 4).unwrap();
        c.draw_hline(2, 4, 2).unwrap();
        assert_eq!(c.to_string(), "..│..\n..│..\n..├──\n..│..\n..│..");
    }

    #[test]
    fn line_joins_box_border_as_tee() {
        let mut c = Canvas::new(5, 5).expect("canvas");
        c.draw_box(0, 0, 4, 2).unwrap();
        c.draw_vline(2, 2, 3).unwrap();
        c.set(2, 4, ARROW_DOWN).unwrap();
        assert_eq!(c.to_string(), "┌───┐\n│   │\n└─┬─┘\n  │  \n  ▼  ");
    }

    #[test]
    fn arrowhead_keeps_corner_connected() {
        let mut c = Canvas::new(3, 2).expect("canvas");
        c.draw_vline(0, 0, 1).unwrap();
        c.draw_hline(0, 2, 1).unwrap();
        c.set(2, 1, ARROW_RIGHT).unwrap();
        assert_eq!(c.to_string(), "│  \n└─▶");
    }
}
