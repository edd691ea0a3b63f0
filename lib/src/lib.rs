use parse_display::{Display, FromStr};
use polars::prelude::*;
use std::path::Path;

mod error;
pub mod contracts;
pub mod filter;
pub mod player;
pub mod report;
pub mod scoring;
pub mod stats;

pub use error::Error;
pub use player::{Player, PlayerDf, StatLine};
pub use scoring::{RatedPlayer, Scoring};

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Display, FromStr)]
#[display(style = "UPPERCASE")]
pub enum Position {
    Pg,
    Sg,
    Sf,
    Pf,
    C,
}

pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    Ok(df)
}

/// Checks a source for its required columns before projecting, so a schema
/// problem surfaces before any join or scoring runs.
pub(crate) fn require_columns(
    df: &DataFrame,
    source_name: &'static str,
    required: &[&str],
) -> Result<()> {
    let names = df.get_column_names();
    for column in required {
        if !names.iter().any(|name| name == column) {
            return Err(Error::MissingColumn {
                source_name,
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}
