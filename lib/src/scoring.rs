use crate::error::Error;
use crate::player::{Player, StatLine};
use crate::Result;
use serde::Serialize;

/// Named scoring constants. The formula reads its weights from here rather
/// than inline literals so the weights can move without touching the scoring
/// logic.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scoring {
    /// Points a possession is worth.
    pub points_per_possession: f64,
    /// Share of blocked shots the defense actually recovers.
    pub defensive_rebound_rate: f64,
    /// Points credited per assist.
    pub assist_points: f64,
}

impl Scoring {
    /// League-average weights: 1.12 points per possession
    /// (stats.inpredictable.com), a 76% defensive rebound rate on blocked
    /// shots, and 2 points credited per assist.
    pub fn league_average() -> Self {
        Self {
            points_per_possession: 1.12,
            defensive_rebound_rate: 0.76,
            assist_points: 2.0,
        }
    }

    /// Composite per-game value. A player contributes through points (scored
    /// directly or assisted) and through possessions: rebounds, steals, and
    /// the recoverable share of blocks gain one, turnovers give one away,
    /// each worth the league-average points per possession.
    ///
    /// A high-turnover, low-production line can score negative. That is a
    /// valid value, not an error, and it is never clamped.
    pub fn value_score(&self, stats: &StatLine) -> f64 {
        stats.points
            + stats.assists * self.assist_points
            + (stats.rebounds + stats.steals + stats.blocks * self.defensive_rebound_rate
                - stats.turnovers)
                * self.points_per_possession
    }
}

/// A player with its derived numbers. Built in one step by [`rate_players`],
/// so a ratio can never exist without the score it was derived from.
#[derive(Debug, Clone, Serialize)]
pub struct RatedPlayer {
    pub player: Player,
    pub value_score: f64,
    /// None when the value score is exactly zero; such players sit out the
    /// ratio ranking but still appear in the value ranking and the fit pairs.
    pub salary_to_value: Option<f64>,
}

/// Salary divided by value score. Lower means more production per dollar,
/// higher means more overpaid.
pub fn salary_to_value(player: &Player, value_score: f64) -> Result<f64> {
    if value_score == 0.0 {
        return Err(Error::ZeroValueScore(player.name.clone()));
    }
    Ok(player.salary / value_score)
}

/// Scores every player and derives the salary-to-value ratio. A zero value
/// score only knocks that one player out of the ratio ranking.
pub fn rate_players(players: Vec<Player>, scoring: Scoring) -> Vec<RatedPlayer> {
    players
        .into_iter()
        .map(|player| {
            let value_score = scoring.value_score(&player.stats);
            let salary_to_value = match salary_to_value(&player, value_score) {
                Ok(ratio) => Some(ratio),
                Err(err) => {
                    log::warn!("{err}, excluding from ratio ranking");
                    None
                }
            };
            RatedPlayer {
                player,
                value_score,
                salary_to_value,
            }
        })
        .collect()
}
