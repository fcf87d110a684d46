mod app;
mod month_pane;

pub use app::App;
pub use month_pane::MonthPane;

use chrono::{Datelike, Weekday};
use itertools::Itertools;
use std::fmt::{self, Display};
use unsegen::base::style::*;

use crate::calendar::{weekday_headers, MonthIndex};
use crate::config::ThemeSpec;
use crate::grid::MonthGrid;
use crate::tile::DateTile;

#[derive(Clone, Debug)]
pub struct Theme {
    pub day_style: StyleModifier,
    pub day_text_style: TextFormatModifier,
    pub adjacent_day_style: StyleModifier,
    pub adjacent_day_text_style: TextFormatModifier,
    pub focus_day_style: StyleModifier,
    pub focus_day_text_style: TextFormatModifier,
    pub focus_day_char: Option<char>,
    pub today_day_style: StyleModifier,
    pub today_day_text_style: TextFormatModifier,
    pub today_day_char: Option<char>,
    pub marked_day_char: char,
    pub special_day_char: char,
    pub month_header_style: StyleModifier,
    pub month_header_text_style: TextFormatModifier,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from(&ThemeSpec::default())
    }
}

impl From<&ThemeSpec> for Theme {
    fn from(spec: &ThemeSpec) -> Self {
        Theme {
            day_style: StyleModifier::default(),
            day_text_style: TextFormatModifier::default(),
            adjacent_day_style: StyleModifier::default(),
            adjacent_day_text_style: TextFormatModifier::default().italic(true),
            focus_day_style: StyleModifier::default().bg_color(Color::Blue),
            focus_day_text_style: TextFormatModifier::default(),
            focus_day_char: spec.focus_char,
            today_day_style: StyleModifier::default().fg_color(Color::Green),
            today_day_text_style: TextFormatModifier::default().bold(true),
            today_day_char: spec.today_char,
            marked_day_char: spec.marked_char,
            special_day_char: spec.special_char,
            month_header_style: StyleModifier::default().fg_color(Color::Yellow),
            month_header_text_style: TextFormatModifier::default(),
        }
    }
}

impl Theme {
    /// Style of a tile; selection beats today beats adjacency.
    pub fn tile_style(&self, tile: &DateTile) -> StyleModifier {
        if tile.is_selected() {
            self.focus_day_style.format(self.focus_day_text_style)
        } else if tile.is_today() {
            self.today_day_style.format(self.today_day_text_style)
        } else if tile.is_adjacent() {
            self.adjacent_day_style.format(self.adjacent_day_text_style)
        } else {
            self.day_style.format(self.day_text_style)
        }
    }
}

/// Text of one tile: a today/focus column, a marker column and the
/// right-aligned day number, clipped to `width` columns.
pub struct DayCell<'a> {
    tile: &'a DateTile,
    theme: &'a Theme,
    width: usize,
}

impl<'a> DayCell<'a> {
    pub fn new(tile: &'a DateTile, theme: &'a Theme, width: usize) -> Self {
        DayCell { tile, theme, width }
    }
}

impl Display for DayCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let day = match self.tile.date() {
            Some(date) => date.day().to_string(),
            None => return write!(f, "{:width$}", "", width = self.width),
        };

        let arg_today = if self.tile.is_today() {
            self.theme.today_day_char.unwrap_or(' ')
        } else if self.tile.is_selected() {
            self.theme.focus_day_char.unwrap_or(' ')
        } else {
            ' '
        };

        let arg_marker = if self.tile.is_special() {
            self.theme.special_day_char
        } else if self.tile.is_marked() {
            self.theme.marked_day_char
        } else {
            ' '
        };

        let cell = format!(
            "{}{}{:>width$}",
            arg_today,
            arg_marker,
            day,
            width = self.width.saturating_sub(2)
        );

        f.write_str(&cell.chars().take(self.width).collect::<String>())
    }
}

fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

pub(crate) fn header_line(week_start: Weekday, width: usize) -> String {
    weekday_headers(week_start)
        .iter()
        .map(|&day| format!("{:>width$}", weekday_label(day), width = width))
        .join("")
}

/// Plain rendering of the active weeks, one line per week row.
pub fn render_text(grid: &MonthGrid, theme: &Theme, month: MonthIndex, week_start: Weekday) -> String {
    let width = grid.tile_size().width as usize;

    let weeks = grid.weeks().map(|week| {
        week.iter()
            .map(|tile| DayCell::new(tile, theme, width).to_string())
            .join("")
            .trim_end()
            .to_owned()
    });

    std::iter::once(month.to_string())
        .chain(std::iter::once(header_line(week_start, width)))
        .chain(weeks)
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};
    use crate::tile::TileRole;
    use chrono::{Month, NaiveDate};
    use std::collections::HashSet;

    fn label(date: &NaiveDate, _: TileRole) -> String {
        date.to_string()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn headers_follow_week_start() {
        assert_eq!(header_line(Weekday::Mon, 4), " Mon Tue Wed Thu Fri Sat Sun");
        assert_eq!(header_line(Weekday::Sun, 4), " Sun Mon Tue Wed Thu Fri Sat");
    }

    #[test]
    fn renders_month_rows() {
        let month = MonthIndex::new(Month::February, 2015);
        let dates = month.dates(Weekday::Sun).unwrap();
        let mut grid = MonthGrid::new(Point::new(0, 2), Size::new(4, 1), &label);
        grid.populate(&dates.leading, &dates.main, &dates.trailing)
            .unwrap();
        grid.set_today(Some(ymd(2015, 2, 3)));
        let marked: HashSet<NaiveDate> = [ymd(2015, 2, 1)].iter().copied().collect();
        let special: HashSet<NaiveDate> = [ymd(2015, 2, 14)].iter().copied().collect();
        grid.mark(&marked, &special).unwrap();

        let text = render_text(&grid, &Theme::default(), month, Weekday::Sun);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "February 2015");
        assert_eq!(lines[1], " Sun Mon Tue Wed Thu Fri Sat");
        assert_eq!(lines[2], " . 1   2*  3   4   5   6   7");
        assert_eq!(lines[3], "   8   9  10  11  12  13 !14");
        assert_eq!(lines[5], "  22  23  24  25  26  27  28");
    }

    #[test]
    fn empty_tile_is_blank() {
        let tile = DateTile::default();
        let theme = Theme::default();
        assert_eq!(DayCell::new(&tile, &theme, 4).to_string(), "    ");
    }

    #[test]
    fn narrow_cells_stay_inside_their_width() {
        let mut grid = MonthGrid::new(Point::new(0, 0), Size::new(2, 1), &label);
        let month = MonthIndex::new(Month::February, 2015);
        let dates = month.dates(Weekday::Sun).unwrap();
        grid.populate(&dates.leading, &dates.main, &dates.trailing)
            .unwrap();
        grid.set_today(Some(ymd(2015, 2, 14)));
        let theme = Theme::default();

        for width in 0..=3 {
            for tile in grid.tiles() {
                let text = DayCell::new(tile, &theme, width).to_string();
                assert!(text.chars().count() <= width, "{:?} wider than {}", text, width);
            }
        }

        let today = grid.tile_for(&ymd(2015, 2, 14)).unwrap().unwrap();
        assert_eq!(DayCell::new(today, &theme, 5).to_string(), "*  14");
    }
}
