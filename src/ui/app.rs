use chrono::{Datelike, Duration, Local, NaiveDate};
use log;
use std::collections::HashSet;

use crate::calendar::MonthIndex;
use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};
use crate::events::{Dispatcher, Event};
use crate::geometry::Point;
use crate::grid::MonthGrid;
use crate::label::AccessibilityLabeler;

use super::{render_text, MonthPane, Theme};

use unsegen::base::Terminal;
use unsegen::input::{Input, Key, Navigatable, NavigateBehavior, OperationResult};
use unsegen::widget::*;

/// Month controller: feeds the grid the dates around a cursor and pages
/// to another month whenever the cursor leaves the displayed one.
pub struct App<'a> {
    config: &'a Config,
    theme: Theme,
    grid: MonthGrid<'a>,
    month: MonthIndex,
    cursor: NaiveDate,
    marked: HashSet<NaiveDate>,
    special: HashSet<NaiveDate>,
}

impl<'a> App<'a> {
    pub fn new(
        config: &'a Config,
        labeler: &'a dyn AccessibilityLabeler,
        cursor: NaiveDate,
        marked: HashSet<NaiveDate>,
        special: HashSet<NaiveDate>,
    ) -> Result<App<'a>> {
        let origin = Point::new(0, MonthPane::HEADER_ROWS);
        let mut grid = MonthGrid::new(origin, config.tile_size(), labeler);
        grid.set_today(Some(Local::now().date_naive()));

        let mut app = App {
            config,
            theme: Theme::from(&config.theme),
            grid,
            month: MonthIndex::from(cursor),
            cursor,
            marked,
            special,
        };

        app.show_month(MonthIndex::from(cursor))?;
        app.grid.select(Some(cursor))?;

        Ok(app)
    }

    pub fn grid(&self) -> &MonthGrid<'a> {
        &self.grid
    }

    pub fn month(&self) -> MonthIndex {
        self.month
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    fn show_month(&mut self, month: MonthIndex) -> Result<()> {
        let dates = month.dates(self.config.week_start()).ok_or_else(|| {
            Error::new(
                ErrorKind::DateParse,
                &format!("{} is out of the supported date range", month),
            )
        })?;

        self.grid
            .populate(&dates.leading, &dates.main, &dates.trailing)?;
        self.grid.mark(&self.marked, &self.special)?;
        self.month = month;

        log::debug!("Showing {}", month);
        Ok(())
    }

    pub fn move_cursor(&mut self, date: NaiveDate) -> Result<()> {
        if !self.month.contains(&date) {
            self.show_month(MonthIndex::from(date))?;
        }

        self.cursor = date;
        self.grid.select(Some(date))
    }

    pub fn move_cursor_by(&mut self, duration: Duration) -> Result<()> {
        let target = self
            .cursor
            .checked_add_signed(duration)
            .ok_or_else(|| Error::new(ErrorKind::DateParse, "cursor out of range"))?;

        self.move_cursor(target)
    }

    /// Moves the cursor one month forward or back, keeping its day of month
    /// where the target month is long enough.
    pub fn page(&mut self, forward: bool) -> Result<()> {
        let month = if forward {
            self.month.next()
        } else {
            self.month.prev()
        };

        let day = std::cmp::min(self.cursor.day(), month.num_days());
        let target = month
            .first_day()
            .and_then(|first| first.checked_add_signed(Duration::days(day as i64 - 1)))
            .ok_or_else(|| Error::new(ErrorKind::DateParse, "cursor out of range"))?;

        self.move_cursor(target)
    }

    pub fn update_today(&mut self) {
        self.grid.set_today(Some(Local::now().date_naive()));
    }

    pub fn render_text(&self) -> String {
        render_text(&self.grid, &self.theme, self.month, self.config.week_start())
    }

    fn as_widget<'w>(&'w self) -> impl Widget + 'w
    where
        'a: 'w,
    {
        MonthPane::new(
            &self.grid,
            &self.theme,
            self.month,
            self.config.week_start(),
        )
    }

    fn handle_input(&mut self, input: Input) -> bool {
        let mut run = true;

        input
            .chain((Key::Char('q'), || run = false))
            .chain((Key::Char('t'), || {
                let today = Local::now().date_naive();
                log_failure(self.move_cursor(today));
            }))
            .chain((Key::Char('n'), || log_failure(self.page(true))))
            .chain((Key::Char('p'), || log_failure(self.page(false))))
            .chain(
                NavigateBehavior::new(&mut CursorBehaviour(self))
                    .down_on(Key::Char('j'))
                    .up_on(Key::Char('k'))
                    .left_on(Key::Char('h'))
                    .right_on(Key::Char('l')),
            )
            .finish();

        run
    }

    pub fn run(
        &mut self,
        dispatcher: Dispatcher,
        mut term: Terminal,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let mut run = true;

        while run {
            match dispatcher.next()? {
                Event::Update => self.update_today(),
                Event::Input(input) => run = self.handle_input(input),
            }

            let root = term.create_root_window();
            self.as_widget().draw(root, RenderingHints::new());
            term.present();
        }

        Ok(())
    }
}

fn log_failure(result: Result<()>) {
    if let Err(e) = result {
        log::error!("{}", e);
    }
}

struct CursorBehaviour<'a, 'c>(&'a mut App<'c>);

impl CursorBehaviour<'_, '_> {
    fn move_by(&mut self, duration: Duration) -> OperationResult {
        self.0.move_cursor_by(duration).map_err(|e| {
            log::error!("{}", e);
        })
    }
}

impl Navigatable for CursorBehaviour<'_, '_> {
    fn move_down(&mut self) -> OperationResult {
        self.move_by(Duration::weeks(1))
    }

    fn move_left(&mut self) -> OperationResult {
        self.move_by(Duration::days(-1))
    }

    fn move_right(&mut self) -> OperationResult {
        self.move_by(Duration::days(1))
    }

    fn move_up(&mut self) -> OperationResult {
        self.move_by(Duration::weeks(-1))
    }
}
