//! The month grid: a fixed pool of day tiles bound to the dates of one
//! month plus the adjacent days that complete its weeks.
//!
//! The grid owns [`MAX_SLOTS`] tiles for its whole lifetime. Populating it
//! with a month only rewrites tile contents, and of those tiles only the
//! first `num_weeks * 7` ("active" tiles) take part in lookups and marking.

use chrono::NaiveDate;
use log;
use std::collections::{HashMap, HashSet};

use crate::error::{Error, ErrorKind, Result};
use crate::geometry::{self, Point, Rect, Size, DAYS_PER_WEEK};
use crate::label::AccessibilityLabeler;
use crate::tile::{DateTile, TileRole};

pub const MIN_WEEKS: usize = 4;
pub const MAX_WEEKS: usize = 6;
pub const MAX_SLOTS: usize = MAX_WEEKS * DAYS_PER_WEEK;

pub struct MonthGrid<'a> {
    origin: Point,
    tile_size: Size,
    num_weeks: Option<usize>,
    slots: Vec<DateTile>,
    index: HashMap<NaiveDate, usize>,
    selected: Option<usize>,
    today: Option<NaiveDate>,
    labeler: &'a dyn AccessibilityLabeler,
}

impl<'a> MonthGrid<'a> {
    pub fn new(origin: Point, tile_size: Size, labeler: &'a dyn AccessibilityLabeler) -> Self {
        let slots = (0..MAX_SLOTS)
            .map(|i| DateTile::new(geometry::frame_for(i, tile_size, origin)))
            .collect();

        MonthGrid {
            origin,
            tile_size,
            num_weeks: None,
            slots,
            index: HashMap::with_capacity(MAX_SLOTS),
            selected: None,
            today: None,
            labeler,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    pub fn num_weeks(&self) -> Option<usize> {
        self.num_weeks
    }

    pub fn is_populated(&self) -> bool {
        self.num_weeks.is_some()
    }

    fn active_len(&self) -> usize {
        self.num_weeks.unwrap_or(0) * DAYS_PER_WEEK
    }

    fn ensure_populated(&self) -> Result<()> {
        if self.is_populated() {
            Ok(())
        } else {
            Err(Error::from(ErrorKind::NotPopulated))
        }
    }

    /// Binds the grid to a new set of dates.
    ///
    /// `leading`, `main` and `trailing` must together fill four to six
    /// whole weeks and be in strictly ascending order. On error the grid is
    /// left exactly as it was.
    pub fn populate(
        &mut self,
        leading: &[NaiveDate],
        main: &[NaiveDate],
        trailing: &[NaiveDate],
    ) -> Result<()> {
        let total = leading.len() + main.len() + trailing.len();

        if total % DAYS_PER_WEEK != 0
            || total < MIN_WEEKS * DAYS_PER_WEEK
            || total > MAX_SLOTS
        {
            log::warn!(
                "Rejecting layout of {}+{}+{} dates",
                leading.len(),
                main.len(),
                trailing.len()
            );
            return Err(Error::new(
                ErrorKind::InvalidLayout,
                &format!(
                    "{} dates do not fill {} to {} whole weeks",
                    total, MIN_WEEKS, MAX_WEEKS
                ),
            ));
        }

        let dates = || leading.iter().chain(main).chain(trailing);
        if let Some(pos) = dates().zip(dates().skip(1)).position(|(a, b)| a >= b) {
            log::warn!("Rejecting unordered dates at position {}", pos + 1);
            return Err(Error::new(
                ErrorKind::InvalidLayout,
                &format!("dates are not strictly ascending at position {}", pos + 1),
            ));
        }

        let num_weeks = total / DAYS_PER_WEEK;
        self.num_weeks = Some(num_weeks);
        self.selected = None;
        self.index.clear();

        let roles = std::iter::repeat(TileRole::Adjacent)
            .take(leading.len())
            .chain(std::iter::repeat(TileRole::InMonth).take(main.len()))
            .chain(std::iter::repeat(TileRole::Adjacent).take(trailing.len()));

        for (i, (&date, role)) in dates().zip(roles).enumerate() {
            let tile = &mut self.slots[i];
            tile.assign(date, role);
            tile.set_today(self.today == Some(date));
            tile.set_frame(geometry::frame_for(i, self.tile_size, self.origin));
            tile.set_accessibility_label(self.labeler.label(&date, role));
            self.index.insert(date, i);
        }

        for tile in &mut self.slots[total..] {
            tile.reset();
        }

        log::debug!(
            "Populated grid with {} weeks ({}+{}+{} dates)",
            num_weeks,
            leading.len(),
            main.len(),
            trailing.len()
        );

        Ok(())
    }

    /// Active tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &DateTile> {
        self.slots[..self.active_len()].iter()
    }

    /// Active tiles grouped into week rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[DateTile]> {
        self.slots[..self.active_len()].chunks(DAYS_PER_WEEK)
    }

    pub fn first_in_month_tile(&self) -> Result<Option<&DateTile>> {
        self.ensure_populated()?;
        Ok(self.tiles().find(|tile| tile.is_in_month()))
    }

    pub fn tile_for(&self, date: &NaiveDate) -> Result<Option<&DateTile>> {
        self.ensure_populated()?;
        Ok(self.index.get(date).map(|&i| &self.slots[i]))
    }

    /// Hit test against the frames of the active tiles.
    pub fn tile_at(&self, point: Point) -> Result<Option<&DateTile>> {
        self.ensure_populated()?;
        Ok(
            geometry::slot_at(point, self.active_len() / DAYS_PER_WEEK, self.tile_size, self.origin)
                .map(|i| &self.slots[i]),
        )
    }

    /// Overlays both highlight sets on the active tiles in one pass.
    /// Dates, roles, frames and the selection are untouched.
    pub fn mark(
        &mut self,
        marked: &HashSet<NaiveDate>,
        special: &HashSet<NaiveDate>,
    ) -> Result<()> {
        self.ensure_populated()?;

        let active = self.active_len();
        for tile in &mut self.slots[..active] {
            let (is_marked, is_special) = match tile.date() {
                Some(date) => (marked.contains(&date), special.contains(&date)),
                None => (false, false),
            };
            tile.set_marked(is_marked);
            tile.set_special(is_special);
        }

        Ok(())
    }

    /// Moves the selection to `date`. Dates outside the grid and `None`
    /// leave nothing selected.
    pub fn select(&mut self, date: Option<NaiveDate>) -> Result<()> {
        self.ensure_populated()?;

        if let Some(i) = self.selected.take() {
            self.slots[i].set_selected(false);
        }

        let found = date.and_then(|date| self.index.get(&date).copied());
        if let Some(i) = found {
            self.slots[i].set_selected(true);
            self.selected = Some(i);
        }

        Ok(())
    }

    pub fn selected_tile(&self) -> Option<&DateTile> {
        self.selected.map(|i| &self.slots[i])
    }

    pub fn today(&self) -> Option<NaiveDate> {
        self.today
    }

    /// Remembers the current day and flags its tile. Survives repopulation.
    pub fn set_today(&mut self, today: Option<NaiveDate>) {
        self.today = today;

        let active = self.active_len();
        for tile in &mut self.slots[..active] {
            let is_today = tile.date().is_some() && tile.date() == today;
            tile.set_today(is_today);
        }
    }

    /// Area covered by the active tiles.
    pub fn bounds(&self) -> Option<Rect> {
        self.num_weeks
            .map(|weeks| geometry::grid_bounds(weeks, self.tile_size, self.origin))
    }
}
