use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::error::{Error, ErrorKind, Result};
use crate::tile::TileRole;

pub const DEFAULT_IN_MONTH_FORMAT: &str = "%A, %B %-d, %Y";
pub const DEFAULT_ADJACENT_FORMAT: &str = "%A, %B %-d, %Y (%B)";

/// Produces the spoken description of a day tile.
pub trait AccessibilityLabeler {
    fn label(&self, date: &NaiveDate, role: TileRole) -> String;
}

impl<F> AccessibilityLabeler for F
where
    F: Fn(&NaiveDate, TileRole) -> String,
{
    fn label(&self, date: &NaiveDate, role: TileRole) -> String {
        self(date, role)
    }
}

#[derive(Debug, Clone)]
pub struct FormatLabeler {
    in_month: String,
    adjacent: String,
}

impl FormatLabeler {
    pub fn new(in_month: &str, adjacent: &str) -> Result<Self> {
        check_format(in_month)?;
        check_format(adjacent)?;

        Ok(FormatLabeler {
            in_month: in_month.to_owned(),
            adjacent: adjacent.to_owned(),
        })
    }
}

impl Default for FormatLabeler {
    fn default() -> Self {
        FormatLabeler {
            in_month: DEFAULT_IN_MONTH_FORMAT.to_owned(),
            adjacent: DEFAULT_ADJACENT_FORMAT.to_owned(),
        }
    }
}

impl AccessibilityLabeler for FormatLabeler {
    fn label(&self, date: &NaiveDate, role: TileRole) -> String {
        let format = match role {
            TileRole::InMonth => &self.in_month,
            TileRole::Adjacent => &self.adjacent,
        };

        date.format(format).to_string()
    }
}

// chrono panics when displaying a format containing errors
fn check_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        Err(Error::new(
            ErrorKind::ConfigError,
            &format!("Invalid label format '{}'", format),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels() {
        let labeler = FormatLabeler::default();
        let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();

        assert_eq!(
            labeler.label(&date, TileRole::InMonth),
            "Thursday, July 4, 2024"
        );
        assert_eq!(
            labeler.label(&date, TileRole::Adjacent),
            "Thursday, July 4, 2024 (July)"
        );
    }

    #[test]
    fn rejects_broken_format() {
        let err = FormatLabeler::new("%Q", DEFAULT_ADJACENT_FORMAT).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::ConfigError));

        assert!(FormatLabeler::new("%d.%m.%Y", "(%d.%m.)").is_ok());
    }

    #[test]
    fn closures_are_labelers() {
        let labeler = |date: &NaiveDate, _: TileRole| date.to_string();
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

        assert_eq!(labeler.label(&date, TileRole::InMonth), "2024-02-29");
    }
}
