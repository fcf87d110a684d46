//! Row/column layout of day tiles.
//!
//! Tiles are laid out row-major in rows of seven. All coordinates are in
//! terminal cells.

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// First column right of the rectangle.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// First row below the rectangle.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

// Coordinates saturate at u32::MAX instead of wrapping.
fn offset(origin: u32, steps: usize, step: u32) -> u32 {
    origin.saturating_add((steps as u32).saturating_mul(step))
}

pub fn frame_for(index: usize, tile_size: Size, origin: Point) -> Rect {
    let row = index / DAYS_PER_WEEK;
    let col = index % DAYS_PER_WEEK;

    Rect::new(
        offset(origin.x, col, tile_size.width),
        offset(origin.y, row, tile_size.height),
        tile_size.width,
        tile_size.height,
    )
}

pub fn grid_bounds(num_weeks: usize, tile_size: Size, origin: Point) -> Rect {
    Rect::new(
        origin.x,
        origin.y,
        offset(0, DAYS_PER_WEEK, tile_size.width),
        offset(0, num_weeks, tile_size.height),
    )
}

/// Slot index of the tile covering `point`, restricted to the first
/// `num_weeks` rows.
pub fn slot_at(point: Point, num_weeks: usize, tile_size: Size, origin: Point) -> Option<usize> {
    if tile_size.is_empty() || !grid_bounds(num_weeks, tile_size, origin).contains(point) {
        return None;
    }

    let col = ((point.x - origin.x) / tile_size.width) as usize;
    let row = ((point.y - origin.y) / tile_size.height) as usize;

    Some(row * DAYS_PER_WEEK + col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_walk_rows_of_seven() {
        let size = Size::new(4, 2);
        let origin = Point::new(10, 3);

        assert_eq!(frame_for(0, size, origin), Rect::new(10, 3, 4, 2));
        assert_eq!(frame_for(6, size, origin), Rect::new(34, 3, 4, 2));
        assert_eq!(frame_for(7, size, origin), Rect::new(10, 5, 4, 2));
        assert_eq!(frame_for(41, size, origin), Rect::new(34, 13, 4, 2));
    }

    #[test]
    fn frames_cover_bounds_without_overlap() {
        let size = Size::new(3, 2);
        let origin = Point::new(1, 1);

        for weeks in 4..=6 {
            let bounds = grid_bounds(weeks, size, origin);
            let frames: Vec<Rect> = (0..weeks * DAYS_PER_WEEK)
                .map(|i| frame_for(i, size, origin))
                .collect();

            let covered: u64 = frames.iter().map(Rect::area).sum();
            assert_eq!(covered, bounds.area());

            for (i, a) in frames.iter().enumerate() {
                assert!(a.x >= bounds.x && a.right() <= bounds.right());
                assert!(a.y >= bounds.y && a.bottom() <= bounds.bottom());
                for b in frames.iter().skip(i + 1) {
                    assert!(!a.intersects(b));
                }
            }
        }
    }

    #[test]
    fn slot_at_inverts_frame_for() {
        let size = Size::new(4, 1);
        let origin = Point::new(2, 1);

        for index in 0..35 {
            let frame = frame_for(index, size, origin);
            assert_eq!(slot_at(frame.origin(), 5, size, origin), Some(index));
            let inner = Point::new(frame.right() - 1, frame.bottom() - 1);
            assert_eq!(slot_at(inner, 5, size, origin), Some(index));
        }
    }

    #[test]
    fn oversized_tiles_do_not_overflow() {
        let size = Size::new(1_000_000_000, u32::MAX);
        let origin = Point::new(5, 2);

        let last = frame_for(41, size, origin);
        assert_eq!(last.x, u32::MAX);
        assert_eq!(last.y, u32::MAX);
        assert_eq!(last.right(), u32::MAX);

        let bounds = grid_bounds(6, size, origin);
        assert_eq!(bounds.width, u32::MAX);
        assert_eq!(bounds.bottom(), u32::MAX);
        assert_eq!(slot_at(Point::new(5, 2), 6, size, origin), Some(0));
    }

    #[test]
    fn slot_at_outside_active_rows() {
        let size = Size::new(4, 1);
        let origin = Point::new(2, 1);

        assert_eq!(slot_at(Point::new(0, 0), 5, size, origin), None);
        assert_eq!(slot_at(Point::new(2, 6), 5, size, origin), None);
        assert_eq!(slot_at(Point::new(30, 1), 5, size, origin), None);
        assert_eq!(slot_at(Point::new(2, 1), 5, Size::new(0, 1), origin), None);
    }
}
