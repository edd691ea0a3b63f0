use crate::Position;
use polars::prelude::*;

/// Builds row filters against the projected/joined frames, AND-ing each added
/// condition together.
#[derive(Clone)]
pub struct PlayerFilter {
    filter_expr: Option<Expr>,
}

impl PlayerFilter {
    pub fn new() -> Self {
        Self { filter_expr: None }
    }

    pub fn team(mut self, team_name: &str) -> Self {
        let expr = col("team").eq(lit(team_name));
        self.extend_filter(expr)
    }

    pub fn player_name(mut self, player_name: &str) -> Self {
        let expr = col("player").eq(lit(player_name));
        self.extend_filter(expr)
    }

    // Substring match, so "PG" also catches combo listings like "SG-PG"
    pub fn position(mut self, position: Position) -> Self {
        let expr = col("pos").str().contains_literal(lit(position.to_string()));
        self.extend_filter(expr)
    }

    pub fn min_games(mut self, games: i64) -> Self {
        let expr = col("games").gt(lit(games));
        self.extend_filter(expr)
    }

    // Combines the current filter with a new one using AND logic
    fn extend_filter(&mut self, new_expr: Expr) -> Self {
        self.filter_expr = match self.filter_expr.take() {
            Some(existing_expr) => Some(existing_expr.and(new_expr)),
            None => Some(new_expr),
        };
        self.clone()
    }

    // Builds the final filter expression
    pub fn build(self) -> Expr {
        self.filter_expr.unwrap_or_else(|| lit(true))
    }
}
