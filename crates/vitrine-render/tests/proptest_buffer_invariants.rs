//! Property-based invariant tests for the cell buffer:
//!
//! 1. In-bounds set/get round-trips; out-of-bounds reads are `None`.
//! 2. The scissor region only ever shrinks, and pops never remove the base.
//! 3. No write escapes the current scissor.
//! 4. No panics for arbitrary coordinates and fill rectangles.

use proptest::prelude::*;
use vitrine_core::geometry::Rect;
use vitrine_render::buffer::Buffer;
use vitrine_render::cell::Cell;

fn dims_strategy() -> impl Strategy<Value = (u16, u16)> {
    (1u16..=64, 1u16..=48)
}

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (0u16..=80, 0u16..=60, 0u16..=80, 0u16..=60).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn in_bounds_set_then_get_round_trips(
        (width, height) in dims_strategy(),
        x in 0u16..=80,
        y in 0u16..=60,
    ) {
        let mut buf = Buffer::new(width, height);
        buf.set(x, y, Cell::from_char('#'));
        match buf.get(x, y) {
            Some(cell) => {
                prop_assert!(x < width && y < height);
                prop_assert_eq!(cell.ch, '#');
            }
            None => prop_assert!(x >= width || y >= height),
        }
    }

    #[test]
    fn scissor_stack_only_shrinks(
        (width, height) in dims_strategy(),
        rects in prop::collection::vec(rect_strategy(), 0..6),
    ) {
        let mut buf = Buffer::new(width, height);
        let mut prev = buf.current_scissor();
        for rect in rects {
            buf.push_scissor(rect);
            let cur = buf.current_scissor();
            prop_assert_eq!(cur, cur.intersection(&prev), "scissor grew: {:?} -> {:?}", prev, cur);
            prev = cur;
        }
    }

    #[test]
    fn base_scissor_survives_excess_pops(
        (width, height) in dims_strategy(),
        pushes in 0usize..4,
        pops in 0usize..8,
    ) {
        let mut buf = Buffer::new(width, height);
        for i in 0..pushes {
            buf.push_scissor(Rect::new(0, 0, width / 2 + i as u16, height));
        }
        for _ in 0..pops {
            buf.pop_scissor();
        }
        if pops >= pushes {
            prop_assert_eq!(buf.current_scissor(), buf.bounds());
        }
    }

    #[test]
    fn writes_never_escape_the_scissor(
        (width, height) in dims_strategy(),
        scissor in rect_strategy(),
        fill in rect_strategy(),
    ) {
        let mut buf = Buffer::new(width, height);
        buf.push_scissor(scissor);
        buf.fill(fill, Cell::from_char('x'));

        let allowed = buf.current_scissor();
        for y in 0..height {
            for x in 0..width {
                if buf.get(x, y).unwrap().ch == 'x' {
                    prop_assert!(allowed.contains(x, y), "write at ({x},{y}) escaped {allowed:?}");
                }
            }
        }
    }
}
