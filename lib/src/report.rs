use crate::scoring::RatedPlayer;
use itertools::Itertools;

/// Most valuable first, salary ignored. Ties keep input order.
pub fn rank_by_value(players: &[RatedPlayer]) -> Vec<(String, f64)> {
    let mut ranked = players
        .iter()
        .map(|rated| (rated.player.name.clone(), rated.value_score))
        .collect_vec();
    // sort_by is stable, so equal scores stay in input order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Most overpaid first. Players without a ratio (zero value score) sit this
/// ranking out.
pub fn rank_by_ratio(players: &[RatedPlayer]) -> Vec<(String, f64)> {
    let mut ranked = players
        .iter()
        .filter_map(|rated| {
            rated
                .salary_to_value
                .map(|ratio| (rated.player.name.clone(), ratio))
        })
        .collect_vec();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// (salary, value score) pairs for the plotting collaborator. Every pair is a
/// finite number: rows with missing cells never became players.
pub fn salary_value_pairs(players: &[RatedPlayer]) -> Vec<(f64, f64)> {
    players
        .iter()
        .map(|rated| (rated.player.salary, rated.value_score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Player, StatLine};

    fn rated(name: &str, salary: f64, value_score: f64) -> RatedPlayer {
        let player = Player {
            name: name.to_string(),
            team: "LAL".to_string(),
            position: "PG".to_string(),
            salary,
            games: 60,
            stats: StatLine {
                points: 0.0,
                rebounds: 0.0,
                assists: 0.0,
                steals: 0.0,
                blocks: 0.0,
                turnovers: 0.0,
            },
        };
        let salary_to_value = (value_score != 0.0).then(|| salary / value_score);
        RatedPlayer {
            player,
            value_score,
            salary_to_value,
        }
    }

    #[test]
    fn value_ranking_is_stable_on_ties() {
        let players = vec![
            rated("A", 1.0, 10.0),
            rated("B", 1.0, 30.0),
            rated("C", 1.0, 30.0),
            rated("D", 1.0, 5.0),
        ];
        let names = rank_by_value(&players)
            .into_iter()
            .map(|(name, _)| name)
            .collect_vec();
        assert_eq!(names, vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn ratio_ranking_skips_unratioed_players() {
        let players = vec![
            rated("Cheap", 1_000_000.0, 40.0),
            rated("Zero", 9_000_000.0, 0.0),
            rated("Pricey", 40_000_000.0, 20.0),
        ];
        let ranked = rank_by_ratio(&players);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0, "Pricey");
        assert_eq!(ranked[1].0, "Cheap");
    }

    #[test]
    fn empty_collection_reports_empty() {
        assert!(rank_by_value(&[]).is_empty());
        assert!(rank_by_ratio(&[]).is_empty());
        assert!(salary_value_pairs(&[]).is_empty());
    }

    #[test]
    fn pairs_follow_input_order() {
        let players = vec![rated("A", 2.0, 4.0), rated("B", 3.0, 6.0)];
        assert_eq!(salary_value_pairs(&players), vec![(2.0, 4.0), (3.0, 6.0)]);
    }
}
