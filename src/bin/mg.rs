extern crate monthgrid as lib;

use chrono::{Local, NaiveDate};
use flexi_logger::{FileSpec, Logger};
use lib::calendar::MonthIndex;
use lib::events::Dispatcher;
use lib::terminal::{SavedTermios, STDIN};
use lib::ui::App;
use std::collections::HashSet;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Mutex;
use structopt::StructOpt;
use unsegen::base::Terminal;

fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

fn parse_month(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mg",
    author = "Julian Bigge <j.reedts@gmail.com>",
    about = "Shows a month as a grid of day tiles."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "m",
        long = "month",
        help = "month to show first (YYYY-MM)",
        parse(try_from_str = parse_month)
    )]
    pub month: Option<NaiveDate>,

    #[structopt(
        long = "select",
        help = "date to select (YYYY-MM-DD)",
        parse(try_from_str = parse_date)
    )]
    pub select: Option<NaiveDate>,

    #[structopt(
        long = "mark",
        help = "date carrying data, may be repeated",
        parse(try_from_str = parse_date)
    )]
    pub mark: Vec<NaiveDate>,

    #[structopt(
        long = "special",
        help = "date for the second highlight, may be repeated",
        parse(try_from_str = parse_date)
    )]
    pub special: Vec<NaiveDate>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only print the month non-interactively"
    )]
    pub show: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    let orig_attr = Mutex::new(SavedTermios::capture(STDIN));

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        if let Ok(orig_attr) = orig_attr.lock() {
            let _ = orig_attr.restore();
        }

        println!("monthgrid ran into a fatal error!");
        println!(
            "Consider filing an issue with a log file and the backtrace below at {}",
            env!("CARGO_PKG_REPOSITORY")
        );

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;
    let labeler = config.labeler()?;

    let cursor = match (args.select, args.month) {
        (Some(date), _) => date,
        (None, Some(month)) => month,
        (None, None) => Local::now().date_naive(),
    };

    let marked: HashSet<NaiveDate> = args.mark.into_iter().collect();
    let special: HashSet<NaiveDate> = args.special.into_iter().collect();

    let mut app = App::new(&config, &labeler, cursor, marked, special)?;

    if let Some(month) = args.month {
        let month = MonthIndex::from(month);
        if month != app.month() {
            log::warn!(
                "Selected date is not in {}, showing {}",
                month,
                app.month()
            );
        }
    }

    if args.show {
        println!("{}", app.render_text());
        return Ok(());
    }

    let dispatcher = Dispatcher::from_config(&config);
    // Setup unsegen terminal
    let stdout = stdout();
    let term = Terminal::new(stdout.lock())?;

    app.run(dispatcher, term)
}
