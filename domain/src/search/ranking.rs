//! Result ordering policy

use super::value_objects::SpotResult;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// How search results are ordered before the display cap is applied
///
/// Popularity ordering is opt-in; the collaborator's own order is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// Keep the order the search collaborator returned
    #[default]
    CollaboratorOrder,
    /// Most-reviewed first; spots without a count go last
    Popularity,
}

impl RankingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingPolicy::CollaboratorOrder => "collaborator_order",
            RankingPolicy::Popularity => "popularity",
        }
    }

    /// Reorder in place. The sort is stable, so ties keep collaborator order.
    pub fn apply(&self, spots: &mut [SpotResult]) {
        if let RankingPolicy::Popularity = self {
            spots.sort_by_key(|s| Reverse(s.review_count));
        }
    }
}

/// Rank, then keep at most `display_cap` spots.
pub fn select_for_display(
    mut spots: Vec<SpotResult>,
    policy: RankingPolicy,
    display_cap: usize,
) -> Vec<SpotResult> {
    policy.apply(&mut spots);
    spots.truncate(display_cap);
    spots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::Coordinates;

    fn spot(name: &str, reviews: Option<u32>) -> SpotResult {
        let mut s = SpotResult::new(name, "addr", Coordinates::new(0.0, 0.0).unwrap());
        s.review_count = reviews;
        s
    }

    fn names(spots: &[SpotResult]) -> Vec<&str> {
        spots.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_collaborator_order_untouched() {
        let mut spots = vec![spot("a", Some(1)), spot("b", Some(50)), spot("c", None)];
        RankingPolicy::CollaboratorOrder.apply(&mut spots);
        assert_eq!(names(&spots), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_popularity_descending_missing_last() {
        let mut spots = vec![
            spot("a", Some(1)),
            spot("none", None),
            spot("b", Some(50)),
            spot("c", Some(50)),
        ];
        RankingPolicy::Popularity.apply(&mut spots);
        assert_eq!(names(&spots), vec!["b", "c", "a", "none"]);
    }

    #[test]
    fn test_select_for_display_caps_after_ranking() {
        let spots = vec![spot("a", Some(1)), spot("b", Some(9)), spot("c", Some(5))];

        let kept = select_for_display(spots.clone(), RankingPolicy::Popularity, 2);
        assert_eq!(names(&kept), vec!["b", "c"]);

        let kept = select_for_display(spots, RankingPolicy::CollaboratorOrder, 2);
        assert_eq!(names(&kept), vec!["a", "b"]);
    }

    #[test]
    fn test_policy_deserializes_snake_case() {
        let policy: RankingPolicy = serde_json::from_str("\"popularity\"").unwrap();
        assert_eq!(policy, RankingPolicy::Popularity);
        assert_eq!(RankingPolicy::default().as_str(), "collaborator_order");
    }
}
