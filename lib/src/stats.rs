use crate::Result;
use derive_deref::Deref;
use polars::prelude::*;
use std::path::Path;

/// Per-game box-score export, one row per player.
#[derive(Clone, Deref)]
#[derive(Debug)]
pub struct StatsDf(DataFrame);

impl StatsDf {
    pub fn new(df: DataFrame) -> Self {
        StatsDf(df)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let df = crate::load_csv(path)?;
        Ok(StatsDf(df))
    }

    /// Keeps position, games played, and the five box-score rates the value
    /// formula consumes; every other column (minutes, shooting splits, rank)
    /// is dropped before the join.
    pub fn project(self) -> Result<Self> {
        crate::require_columns(
            &self.0,
            "stats",
            &["Player", "Pos", "G", "TRB", "AST", "TOV", "PTS", "STL", "BLK"],
        )?;
        let df = self
            .0
            .lazy()
            .select([
                col("Player").alias("player"),
                col("Pos").alias("pos"),
                col("G").cast(DataType::Int64).alias("games"),
                col("TRB").cast(DataType::Float64).alias("trb"),
                col("AST").cast(DataType::Float64).alias("ast"),
                col("TOV").cast(DataType::Float64).alias("tov"),
                col("PTS").cast(DataType::Float64).alias("pts"),
                col("STL").cast(DataType::Float64).alias("stl"),
                col("BLK").cast(DataType::Float64).alias("blk"),
            ])
            .collect()?;
        Ok(StatsDf(df))
    }

    /// Keeps the first stat row per player name. The per-game export lists a
    /// season-total ("TOT") row before the per-team rows for traded players.
    pub fn unique_players(self) -> Result<Self> {
        let expr = col("player").is_first_distinct();
        let df = self.0.lazy().filter(expr).collect()?;
        Ok(StatsDf(df))
    }
}
