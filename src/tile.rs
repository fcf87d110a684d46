use chrono::NaiveDate;

use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileRole {
    InMonth,
    Adjacent,
}

impl Default for TileRole {
    fn default() -> Self {
        TileRole::Adjacent
    }
}

/// A single day slot of a [`MonthGrid`](crate::grid::MonthGrid).
///
/// Tiles are owned by the grid and reused for every month it shows. Only
/// the grid mutates them; everybody else reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateTile {
    date: Option<NaiveDate>,
    role: TileRole,
    marked: bool,
    special: bool,
    selected: bool,
    today: bool,
    frame: Rect,
    accessibility_label: String,
}

impl DateTile {
    pub(crate) fn new(frame: Rect) -> Self {
        DateTile {
            frame,
            ..DateTile::default()
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn role(&self) -> TileRole {
        self.role
    }

    pub fn is_in_month(&self) -> bool {
        self.date.is_some() && self.role == TileRole::InMonth
    }

    pub fn is_adjacent(&self) -> bool {
        self.date.is_some() && self.role == TileRole::Adjacent
    }

    pub fn is_marked(&self) -> bool {
        self.marked
    }

    pub fn is_special(&self) -> bool {
        self.special
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_today(&self) -> bool {
        self.today
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn accessibility_label(&self) -> &str {
        &self.accessibility_label
    }

    pub(crate) fn assign(&mut self, date: NaiveDate, role: TileRole) {
        self.date = Some(date);
        self.role = role;
        self.marked = false;
        self.special = false;
        self.selected = false;
        self.today = false;
    }

    pub(crate) fn set_marked(&mut self, marked: bool) {
        self.marked = marked;
    }

    pub(crate) fn set_special(&mut self, special: bool) {
        self.special = special;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn set_today(&mut self, today: bool) {
        self.today = today;
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub(crate) fn set_accessibility_label(&mut self, label: String) {
        self.accessibility_label = label;
    }

    /// Clears everything but the frame.
    pub fn reset(&mut self) {
        self.date = None;
        self.role = TileRole::default();
        self.marked = false;
        self.special = false;
        self.selected = false;
        self.today = false;
        self.accessibility_label.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_keeps_frame() {
        let frame = Rect::new(4, 1, 4, 1);
        let mut tile = DateTile::new(frame);
        tile.assign(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(), TileRole::InMonth);
        tile.set_marked(true);
        tile.set_special(true);
        tile.set_selected(true);
        tile.set_today(true);
        tile.set_accessibility_label("Thursday, July 4, 2024".to_owned());

        tile.reset();

        assert_eq!(tile, DateTile::new(frame));
        assert!(!tile.is_in_month());
        assert!(!tile.is_adjacent());
        assert_eq!(tile.accessibility_label(), "");
    }

    #[test]
    fn assign_clears_previous_flags() {
        let mut tile = DateTile::new(Rect::default());
        tile.assign(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(), TileRole::Adjacent);
        tile.set_marked(true);
        tile.set_selected(true);

        tile.assign(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(), TileRole::InMonth);

        assert!(tile.is_in_month());
        assert!(!tile.is_marked());
        assert!(!tile.is_selected());
    }
}
