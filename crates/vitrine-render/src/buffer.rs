#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The [`Buffer`] is a 2D grid of [`Cell`]s. Cells are stored in row-major
//! order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. Scissor stack intersection monotonically decreases on push
//! 4. The scissor stack always has at least one element

use crate::cell::Cell;
use smallvec::SmallVec;
use vitrine_core::geometry::Rect;

/// A 2D grid of cells with a scissor (clip) stack.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    scissor_stack: SmallVec<[Rect; 4]>,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// All cells start as the default blank cell.
    ///
    /// # Panics
    ///
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0, "buffer width must be > 0");
        assert!(height > 0, "buffer height must be > 0");

        let size = width as usize * height as usize;
        let mut scissor_stack = SmallVec::new();
        scissor_stack.push(Rect::from_size(width, height));

        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
            scissor_stack,
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bounding rect of the entire buffer.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a cell by position, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable cell by position, or `None` when out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Write a cell at a position.
    ///
    /// Writes outside the buffer or the current scissor region are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if !self.current_scissor().contains(x, y) {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill a rectangle with a cell, clipped to the buffer and scissor.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = rect
            .intersection(&self.bounds())
            .intersection(&self.current_scissor());
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(i) = self.index(x, y) {
                    self.cells[i] = cell;
                }
            }
        }
    }

    /// Reset every cell to the default blank cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Push a scissor region.
    ///
    /// The effective region is the intersection with the current one, so
    /// clipping only ever shrinks.
    pub fn push_scissor(&mut self, rect: Rect) {
        let merged = self.current_scissor().intersection(&rect);
        self.scissor_stack.push(merged);
    }

    /// Pop the most recent scissor region.
    ///
    /// The base region (the full buffer) is never popped.
    pub fn pop_scissor(&mut self) {
        if self.scissor_stack.len() > 1 {
            self.scissor_stack.pop();
        }
    }

    /// The scissor region currently in effect.
    #[inline]
    pub fn current_scissor(&self) -> Rect {
        *self
            .scissor_stack
            .last()
            .expect("scissor stack is never empty")
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Render one row's characters as a `String`.
    ///
    /// Out-of-range rows yield an empty string. Intended for tests and
    /// debugging output.
    pub fn row_string(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::PackedRgba;

    #[test]
    fn new_buffer_is_blank() {
        let buf = Buffer::new(4, 3);
        assert_eq!(buf.cells().len(), 12);
        assert_eq!(buf.row_string(0), "    ");
        assert_eq!(buf.row_string(3), "");
    }

    #[test]
    #[should_panic(expected = "width must be > 0")]
    fn zero_width_panics() {
        let _ = Buffer::new(0, 5);
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut buf = Buffer::new(4, 3);
        buf.set(1, 2, Cell::from_char('a'));
        assert_eq!(buf.get(1, 2).unwrap().ch, 'a');
        assert_eq!(buf.get(4, 0), None);
        assert_eq!(buf.get(0, 3), None);
    }

    #[test]
    fn out_of_bounds_set_is_dropped() {
        let mut buf = Buffer::new(2, 2);
        buf.set(5, 5, Cell::from_char('x'));
        assert!(buf.cells().iter().all(|c| c.ch == ' '));
    }

    #[test]
    fn scissor_clips_writes() {
        let mut buf = Buffer::new(6, 4);
        buf.push_scissor(Rect::new(1, 1, 2, 2));
        buf.set(0, 0, Cell::from_char('x'));
        buf.set(1, 1, Cell::from_char('y'));
        assert_eq!(buf.get(0, 0).unwrap().ch, ' ');
        assert_eq!(buf.get(1, 1).unwrap().ch, 'y');
        buf.pop_scissor();
        buf.set(0, 0, Cell::from_char('x'));
        assert_eq!(buf.get(0, 0).unwrap().ch, 'x');
    }

    #[test]
    fn scissor_intersection_shrinks() {
        let mut buf = Buffer::new(8, 8);
        buf.push_scissor(Rect::new(0, 0, 5, 5));
        buf.push_scissor(Rect::new(3, 3, 5, 5));
        assert_eq!(buf.current_scissor(), Rect::new(3, 3, 2, 2));
    }

    #[test]
    fn base_scissor_never_popped() {
        let mut buf = Buffer::new(3, 3);
        buf.pop_scissor();
        buf.pop_scissor();
        assert_eq!(buf.current_scissor(), buf.bounds());
    }

    #[test]
    fn fill_respects_bounds_and_scissor() {
        let mut buf = Buffer::new(4, 4);
        buf.push_scissor(Rect::new(0, 0, 2, 2));
        buf.fill(
            Rect::new(0, 0, 10, 10),
            Cell::styled('#', PackedRgba::WHITE, PackedRgba::BLACK),
        );
        assert_eq!(buf.row_string(0), "##  ");
        assert_eq!(buf.row_string(2), "    ");
    }

    #[test]
    fn clear_resets_cells() {
        let mut buf = Buffer::new(2, 2);
        buf.fill(buf.bounds(), Cell::from_char('z'));
        buf.clear();
        assert!(buf.cells().iter().all(|c| c.ch == ' '));
    }
}
