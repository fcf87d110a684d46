pub mod calendar;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod grid;
pub mod label;
pub mod terminal;
pub mod tile;
pub mod ui;

pub use error::{Error, ErrorKind, Result};
pub use grid::MonthGrid;
pub use label::AccessibilityLabeler;
pub use tile::{DateTile, TileRole};
