use crate::Result;
use derive_deref::Deref;
use polars::prelude::*;
use std::path::Path;

/// Contract spreadsheet export. Carries one salary column per contract year,
/// labeled with the season (e.g. "2022-23").
#[derive(Clone, Deref)]
#[derive(Debug)]
pub struct ContractsDf(DataFrame);

impl ContractsDf {
    pub fn new(df: DataFrame) -> Self {
        ContractsDf(df)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let df = crate::load_csv(path)?;
        Ok(ContractsDf(df))
    }

    /// Keeps only player, team, and the requested season's salary, renamed to
    /// stable column names. Any other contract years are dropped here.
    pub fn project(self, season: &str) -> Result<Self> {
        crate::require_columns(&self.0, "contracts", &["Player", "Tm", season])?;
        let df = self
            .0
            .lazy()
            .select([
                col("Player").alias("player"),
                col("Tm").alias("team"),
                col(season).cast(DataType::Float64).alias("salary"),
            ])
            .collect()?;
        Ok(ContractsDf(df))
    }

    /// Keeps the first contract row per player name. Traded players show up
    /// once per team in the export, with the current row listed first.
    pub fn unique_players(self) -> Result<Self> {
        let expr = col("player").is_first_distinct();
        let df = self.0.lazy().filter(expr).collect()?;
        Ok(ContractsDf(df))
    }
}
