use chrono::Weekday;
use unsegen::base::*;
use unsegen::widget::*;

use super::{header_line, DayCell, Theme};
use crate::calendar::MonthIndex;
use crate::geometry::DAYS_PER_WEEK;
use crate::grid::MonthGrid;

/// Draws a populated [`MonthGrid`]: the month title, a weekday header and
/// every active tile at its frame. The grid's origin is taken relative to
/// the window, so grids are built with room for [`MonthPane::HEADER_ROWS`].
pub struct MonthPane<'a> {
    grid: &'a MonthGrid<'a>,
    theme: &'a Theme,
    month: MonthIndex,
    week_start: Weekday,
}

impl<'a> MonthPane<'a> {
    pub const HEADER_ROWS: u32 = 2;

    pub fn new(
        grid: &'a MonthGrid<'a>,
        theme: &'a Theme,
        month: MonthIndex,
        week_start: Weekday,
    ) -> Self {
        MonthPane {
            grid,
            theme,
            month,
            week_start,
        }
    }
}

impl Widget for MonthPane<'_> {
    fn space_demand(&self) -> Demand2D {
        let tile_size = self.grid.tile_size();
        let height = match self.grid.bounds() {
            Some(bounds) => bounds.bottom(),
            None => Self::HEADER_ROWS,
        };

        Demand2D {
            width: ColDemand::exact(
                self.grid.origin().x as usize + DAYS_PER_WEEK * tile_size.width as usize,
            ),
            height: RowDemand::exact(height as usize),
        }
    }

    fn draw(&self, mut window: Window, _hints: RenderingHints) {
        let theme = self.theme;
        let origin = self.grid.origin();
        let width = self.grid.tile_size().width as usize;

        let mut cursor = Cursor::new(&mut window).style_modifier(
            theme
                .month_header_style
                .format(theme.month_header_text_style),
        );

        cursor.move_to(ColIndex::new(origin.x as i32), RowIndex::new(0));
        cursor.write(&self.month.to_string());
        cursor.move_to(ColIndex::new(origin.x as i32), RowIndex::new(1));
        cursor.write(&header_line(self.week_start, width));

        for tile in self.grid.tiles() {
            let frame = tile.frame();
            let style = theme.tile_style(tile);
            cursor.set_style_modifier(style);

            // rows below the text line still carry the tile style
            for row in 1..frame.height {
                cursor.move_to(
                    ColIndex::new(frame.x as i32),
                    RowIndex::new((frame.y + row) as i32),
                );
                cursor.write(&" ".repeat(frame.width as usize));
            }

            cursor.move_to(ColIndex::new(frame.x as i32), RowIndex::new(frame.y as i32));
            cursor.write(&DayCell::new(tile, theme, frame.width as usize).to_string());
        }
    }
}
