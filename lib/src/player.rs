use crate::contracts::ContractsDf;
use crate::filter::PlayerFilter;
use crate::stats::StatsDf;
use crate::Result;
use derive_deref::Deref;
use itertools::izip;
use polars::prelude::*;
use serde::Serialize;

/// At or below this many games a stat line is too small a sample to value.
/// The cut is strict: a player at exactly MIN_GAMES is dropped.
pub const MIN_GAMES: i64 = 5;

/// The joined contracts + stats frame the reports are built from.
#[derive(Clone, Deref)]
pub struct PlayerDf(DataFrame);

impl PlayerDf {
    /// Inner join on player name, exact string match. Players present in only
    /// one source fall out here.
    pub fn merge(contracts: ContractsDf, stats: StatsDf) -> Result<Self> {
        let join_args = JoinArgs::new(JoinType::Inner).with_coalesce(JoinCoalesce::CoalesceColumns);
        let merged_df = contracts.join(&stats, ["player"], ["player"], join_args)?;

        log::debug!("{} players matched across contracts and stats", merged_df.height());
        Ok(PlayerDf(merged_df))
    }

    pub fn filter(self, filter: Expr) -> Result<Self> {
        let df = self.0.lazy().filter(filter).collect()?;
        Ok(PlayerDf(df))
    }

    /// Drops rows with no usable salary (or any other missing cell) and rows
    /// with too few games played. Neither is an error, both are logged.
    /// An unresolvable salary can show up as a null or as NaN; both forms are
    /// dropped here so every surviving row is a clean finite number.
    pub fn drop_incomplete(self) -> Result<Self> {
        let before = self.0.height();
        let df = self
            .0
            .lazy()
            .drop_nulls(None)
            .filter(col("salary").is_not_nan())
            .filter(PlayerFilter::new().min_games(MIN_GAMES).build())
            .collect()?;
        log::debug!("dropped {} incomplete or low-sample rows", before - df.height());
        if df.height() == 0 {
            log::warn!("no players survived the merge and filters, reports will be empty");
        }
        Ok(PlayerDf(df))
    }

    /// Materializes the frame as one entity per row. Run `drop_incomplete`
    /// first; any row that still has a missing cell is skipped.
    pub fn players(&self) -> Result<Vec<Player>> {
        let df = &self.0;
        let name = df.column("player")?.str()?;
        let team = df.column("team")?.str()?;
        let salary = df.column("salary")?.f64()?;
        let pos = df.column("pos")?.str()?;
        let games = df.column("games")?.i64()?;
        let trb = df.column("trb")?.f64()?;
        let ast = df.column("ast")?.f64()?;
        let tov = df.column("tov")?.f64()?;
        let pts = df.column("pts")?.f64()?;
        let stl = df.column("stl")?.f64()?;
        let blk = df.column("blk")?.f64()?;

        let mut players = Vec::with_capacity(df.height());
        let rows = izip!(name, team, salary, pos, games, trb, ast, tov, pts, stl, blk);
        for (name, team, salary, pos, games, trb, ast, tov, pts, stl, blk) in rows {
            let (
                Some(name),
                Some(team),
                Some(salary),
                Some(pos),
                Some(games),
                Some(trb),
                Some(ast),
                Some(tov),
                Some(pts),
                Some(stl),
                Some(blk),
            ) = (name, team, salary, pos, games, trb, ast, tov, pts, stl, blk)
            else {
                continue;
            };
            players.push(Player {
                name: name.to_string(),
                team: team.to_string(),
                position: pos.to_string(),
                salary,
                games,
                stats: StatLine {
                    points: pts,
                    rebounds: trb,
                    assists: ast,
                    steals: stl,
                    blocks: blk,
                    turnovers: tov,
                },
            });
        }
        Ok(players)
    }
}

/// One joined row. Immutable and complete: there is no partially-initialized
/// state, derived numbers live on [`crate::RatedPlayer`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub team: String,
    /// As listed in the source, so combo listings like "SG-PG" come through.
    pub position: String,
    pub salary: f64,
    pub games: i64,
    pub stats: StatLine,
}

/// Per-game box-score rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatLine {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::ContractsDf;
    use crate::stats::StatsDf;

    fn contracts(rows: Vec<(&str, &str, Option<f64>)>) -> ContractsDf {
        let (players, teams, salaries): (Vec<_>, Vec<_>, Vec<_>) =
            itertools::multiunzip(rows);
        ContractsDf::new(
            df!("player" => players, "team" => teams, "salary" => salaries).unwrap(),
        )
    }

    fn stats(rows: Vec<(&str, i64)>) -> StatsDf {
        let (players, games): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
        let n = players.len();
        StatsDf::new(
            df!(
                "player" => players,
                "pos" => vec!["PG"; n],
                "games" => games,
                "trb" => vec![5.0; n],
                "ast" => vec![5.0; n],
                "tov" => vec![3.0; n],
                "pts" => vec![20.0; n],
                "stl" => vec![1.0; n],
                "blk" => vec![1.0; n],
            )
            .unwrap(),
        )
    }

    #[test]
    fn merge_joins_single_shared_player() {
        let contracts = contracts(vec![
            ("A. Shared", "LAL", Some(10_000_000.0)),
            ("B. ContractsOnly", "BOS", Some(5_000_000.0)),
        ]);
        let stats = stats(vec![("A. Shared", 60), ("C. StatsOnly", 70)]);

        let players = PlayerDf::merge(contracts, stats)
            .unwrap()
            .drop_incomplete()
            .unwrap()
            .players()
            .unwrap();

        assert_eq!(players.len(), 1);
        let player = &players[0];
        assert_eq!(player.name, "A. Shared");
        assert_eq!(player.team, "LAL");
        assert_eq!(player.position, "PG");
        assert_eq!(player.salary, 10_000_000.0);
        assert_eq!(player.games, 60);
        assert_eq!(player.stats.rebounds, 5.0);
    }

    #[test]
    fn games_cut_is_strict() {
        let contracts = contracts(vec![
            ("Five Games", "LAL", Some(1_000_000.0)),
            ("Six Games", "LAL", Some(1_000_000.0)),
        ]);
        let stats = stats(vec![("Five Games", 5), ("Six Games", 6)]);

        let players = PlayerDf::merge(contracts, stats)
            .unwrap()
            .drop_incomplete()
            .unwrap()
            .players()
            .unwrap();

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Six Games");
    }

    #[test]
    fn missing_salary_row_is_dropped() {
        let contracts = contracts(vec![
            ("Paid", "LAL", Some(1_000_000.0)),
            ("Unpaid", "LAL", None),
        ]);
        let stats = stats(vec![("Paid", 50), ("Unpaid", 50)]);

        let players = PlayerDf::merge(contracts, stats)
            .unwrap()
            .drop_incomplete()
            .unwrap()
            .players()
            .unwrap();

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Paid");
    }

    #[test]
    fn nan_salary_row_is_dropped() {
        let contracts = contracts(vec![
            ("Paid", "LAL", Some(1_000_000.0)),
            ("NaN Salary", "LAL", Some(f64::NAN)),
        ]);
        let stats = stats(vec![("Paid", 50), ("NaN Salary", 50)]);

        let players = PlayerDf::merge(contracts, stats)
            .unwrap()
            .drop_incomplete()
            .unwrap()
            .players()
            .unwrap();

        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Paid");

        // and nothing non-finite reaches the fit pairs downstream
        let rated = crate::scoring::rate_players(players, crate::Scoring::league_average());
        let pairs = crate::report::salary_value_pairs(&rated);
        assert!(pairs.iter().all(|(salary, value)| salary.is_finite() && value.is_finite()));
    }

    #[test]
    fn disjoint_sources_merge_to_nothing() {
        let contracts = contracts(vec![("Only Contracts", "LAL", Some(1_000_000.0))]);
        let stats = stats(vec![("Only Stats", 50)]);

        let players = PlayerDf::merge(contracts, stats)
            .unwrap()
            .drop_incomplete()
            .unwrap()
            .players()
            .unwrap();

        assert!(players.is_empty());
    }
}
