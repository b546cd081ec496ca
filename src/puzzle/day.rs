use std::fmt;
use std::path::{Path, PathBuf};

use crate::consts::{FIRST_DAY, LAST_DAY};
use crate::error::AppError;

/// A puzzle day in `1..=25`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Day(u8);

impl Day {
    /// Parse an integer literal; anything that overflows `i64` is out of
    /// range like any other number outside `1..=25`.
    pub(crate) fn parse(input: &str) -> Result<Self, AppError> {
        let out_of_range = || AppError::DayOutOfRange {
            input: input.to_string(),
            min: FIRST_DAY,
            max: LAST_DAY,
        };
        let number: i64 = input.parse().map_err(|_| out_of_range())?;
        if !(FIRST_DAY..=LAST_DAY).contains(&number) {
            return Err(out_of_range());
        }
        Ok(Self(number as u8))
    }

    /// `<base>/<year>/day/<n>/input`
    pub(crate) fn input_url(self, base_url: &str, year: u16) -> String {
        format!(
            "{}/{}/day/{}/input",
            base_url.trim_end_matches('/'),
            year,
            self.0
        )
    }

    /// `<dir>/day<n>`
    pub(crate) fn output_path(self, input_dir: &Path) -> PathBuf {
        input_dir.join(format!("day{}", self.0))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
