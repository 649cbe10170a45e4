//! Item-by-item comparison and score derivation.

use prefs::{preference_at, Direction, ITEM_COUNT};
use wire::QuizResult;

/// How strongly a user felt about an item, derived from an up or down swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feeling {
    /// Swiped up.
    Loved,
    /// Swiped down.
    Hated,
}

impl Feeling {
    /// Derives a feeling from an extreme swipe; `Left`/`Right` carry none.
    #[must_use]
    const fn from_direction(direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => Some(Self::Loved),
            Direction::Down => Some(Self::Hated),
            Direction::Left | Direction::Right => None,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loved => "loved",
            Self::Hated => "hated",
        }
    }
}

/// An item both users independently loved or both hated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfectMatch {
    /// Label of the item.
    pub item: String,
    /// The shared feeling.
    pub feeling: Feeling,
}

/// An item one user loved and the other hated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigDisagree {
    /// Label of the item.
    pub item: String,
    /// How the first user felt.
    pub a_feels: Feeling,
    /// How the second user felt.
    pub b_feels: Feeling,
}

/// The outcome of comparing two quiz results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Compatibility score, clamped to 0..=100.
    pub score: u8,
    /// Number of items both users answered the same way.
    pub matches: u32,
    /// Number of items answered differently.
    pub mismatches: u32,
    /// Items where one user's favorite is the other's most-hated, in item order.
    pub big_disagrees: Vec<BigDisagree>,
    /// Items both users loved or both hated, in item order.
    pub perfect_matches: Vec<PerfectMatch>,
    /// Categorical one-liner for the score tier.
    pub flavor_text: &'static str,
}

/// Scoring weights. Matches contribute up to 60 points, a shared favorite
/// 20, a shared most-hated 10; each big disagreement costs 10.
const MATCH_WEIGHT: f64 = 60.0;
const FAVORITE_BONUS: f64 = 20.0;
const HATED_BONUS: f64 = 10.0;
const DISAGREE_PENALTY: f64 = 10.0;

/// Compares two quiz results item by item.
///
/// Preferences are read through the lenient single-index decode, so a short
/// buffer reads as all-`Left` rather than failing. `items` supplies the
/// 81 human-readable labels; missing labels fall back to an empty string.
#[must_use]
pub fn compare_results(a: &QuizResult, b: &QuizResult, items: &[&str]) -> Comparison {
    let mut matches = 0u32;
    let mut mismatches = 0u32;
    let mut big_disagrees = Vec::new();
    let mut perfect_matches = Vec::new();

    for index in 0..ITEM_COUNT {
        let pref_a = preference_at(&a.preferences, index);
        let pref_b = preference_at(&b.preferences, index);
        let label = || items.get(index).copied().unwrap_or_default().to_string();

        if pref_a == pref_b {
            matches += 1;
            if let Some(feeling) = Feeling::from_direction(pref_a) {
                perfect_matches.push(PerfectMatch {
                    item: label(),
                    feeling,
                });
            }
        } else {
            mismatches += 1;
            if let (Some(a_feels), Some(b_feels)) = (
                Feeling::from_direction(pref_a),
                Feeling::from_direction(pref_b),
            ) {
                big_disagrees.push(BigDisagree {
                    item: label(),
                    a_feels,
                    b_feels,
                });
            }
        }
    }

    let mut score = f64::from(matches) / (ITEM_COUNT as f64) * MATCH_WEIGHT;
    if a.favorite_index == b.favorite_index {
        score += FAVORITE_BONUS;
    }
    if a.hated_index == b.hated_index {
        score += HATED_BONUS;
    }
    score -= (big_disagrees.len() as f64) * DISAGREE_PENALTY;

    let score = score.clamp(0.0, 100.0).round() as u8;

    Comparison {
        score,
        matches,
        mismatches,
        big_disagrees,
        perfect_matches,
        flavor_text: flavor_text(score),
    }
}

/// Categorical one-liner for a score. Tier lower bounds are inclusive.
#[must_use]
pub const fn flavor_text(score: u8) -> &'static str {
    match score {
        95.. => "Soulmates? This is uncanny.",
        85.. => "You two are eerily aligned.",
        70.. => "Solid common ground here.",
        50.. => "Some good overlap, some spicy disagreements.",
        30.. => "Opposites attract... right?",
        _ => "Well, variety is the spice of life!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefs::{encode_preferences, PreferenceMap, PACKED_LEN};

    fn labels() -> Vec<String> {
        (0..ITEM_COUNT).map(|i| format!("item {i}")).collect()
    }

    fn result_with(map: &PreferenceMap, favorite: u8, hated: u8) -> QuizResult {
        QuizResult {
            quiz_id: "test".to_string(),
            preferences: encode_preferences(map),
            favorite_index: favorite,
            hated_index: hated,
            completed_at_ms: 0,
        }
    }

    fn compare_with_labels(a: &QuizResult, b: &QuizResult) -> Comparison {
        let labels = labels();
        let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
        compare_results(a, b, &refs)
    }

    #[test]
    fn identical_results_hit_the_ceiling() {
        let map = PreferenceMap::filled(Direction::Up);
        let a = result_with(&map, 7, 33);
        let comparison = compare_with_labels(&a, &a.clone());

        // 81/81 * 60 + 20 + 10: the scale tops out at 90
        assert_eq!(comparison.matches, 81);
        assert_eq!(comparison.mismatches, 0);
        assert!(comparison.big_disagrees.is_empty());
        assert_eq!(comparison.score, 90);
        assert_eq!(comparison.flavor_text, "You two are eerily aligned.");
    }

    #[test]
    fn fully_opposed_results_clamp_to_0() {
        let a = result_with(&PreferenceMap::filled(Direction::Up), 1, 2);
        let b = result_with(&PreferenceMap::filled(Direction::Down), 3, 4);
        let comparison = compare_with_labels(&a, &b);

        assert_eq!(comparison.matches, 0);
        assert_eq!(comparison.mismatches, 81);
        assert_eq!(comparison.big_disagrees.len(), 81);
        assert_eq!(comparison.score, 0);
        assert_eq!(
            comparison.flavor_text,
            "Well, variety is the spice of life!"
        );
    }

    #[test]
    fn perfect_matches_recorded_for_extremes_only() {
        let mut map = PreferenceMap::new();
        map.insert(0, Direction::Up);
        map.insert(1, Direction::Down);
        map.insert(2, Direction::Right);
        let a = result_with(&map, 0, 1);
        let comparison = compare_with_labels(&a, &a.clone());

        // Rights and Lefts match but only Up/Down agreements are "perfect"
        assert_eq!(comparison.matches, 81);
        assert_eq!(comparison.perfect_matches.len(), 2);
        assert_eq!(comparison.perfect_matches[0].item, "item 0");
        assert_eq!(comparison.perfect_matches[0].feeling, Feeling::Loved);
        assert_eq!(comparison.perfect_matches[1].item, "item 1");
        assert_eq!(comparison.perfect_matches[1].feeling, Feeling::Hated);
    }

    #[test]
    fn big_disagree_requires_up_down_pair() {
        let mut map_a = PreferenceMap::new();
        let mut map_b = PreferenceMap::new();
        // up vs down: big disagree
        map_a.insert(0, Direction::Up);
        map_b.insert(0, Direction::Down);
        // down vs up: big disagree, order reversed
        map_a.insert(1, Direction::Down);
        map_b.insert(1, Direction::Up);
        // up vs right: plain mismatch
        map_a.insert(2, Direction::Up);
        map_b.insert(2, Direction::Right);
        // right vs left: plain mismatch
        map_a.insert(3, Direction::Right);

        let a = result_with(&map_a, 0, 0);
        let b = result_with(&map_b, 0, 0);
        let comparison = compare_with_labels(&a, &b);

        assert_eq!(comparison.mismatches, 4);
        assert_eq!(comparison.big_disagrees.len(), 2);
        assert_eq!(comparison.big_disagrees[0].item, "item 0");
        assert_eq!(comparison.big_disagrees[0].a_feels, Feeling::Loved);
        assert_eq!(comparison.big_disagrees[0].b_feels, Feeling::Hated);
        assert_eq!(comparison.big_disagrees[1].item, "item 1");
        assert_eq!(comparison.big_disagrees[1].a_feels, Feeling::Hated);
        assert_eq!(comparison.big_disagrees[1].b_feels, Feeling::Loved);
    }

    #[test]
    fn favorite_and_hated_bonuses_are_independent() {
        let map = PreferenceMap::filled(Direction::Left);
        let base = f64::from(81u32) / 81.0 * 60.0; // 60

        let same_both = compare_with_labels(&result_with(&map, 1, 2), &result_with(&map, 1, 2));
        assert_eq!(same_both.score, (base + 30.0) as u8);

        let same_favorite = compare_with_labels(&result_with(&map, 1, 2), &result_with(&map, 1, 9));
        assert_eq!(same_favorite.score, (base + 20.0) as u8);

        let same_hated = compare_with_labels(&result_with(&map, 1, 2), &result_with(&map, 8, 2));
        assert_eq!(same_hated.score, (base + 10.0) as u8);

        let neither = compare_with_labels(&result_with(&map, 1, 2), &result_with(&map, 8, 9));
        assert_eq!(neither.score, base as u8);
    }

    #[test]
    fn each_big_disagree_costs_ten() {
        let mut map_a = PreferenceMap::new();
        let mut map_b = PreferenceMap::new();
        map_a.insert(0, Direction::Up);
        map_b.insert(0, Direction::Down);

        let comparison = compare_with_labels(&result_with(&map_a, 1, 2), &result_with(&map_b, 1, 2));
        // 80 matches: 80/81*60 = 59.26, +30 bonuses, -10 penalty = 79.26 -> 79
        assert_eq!(comparison.matches, 80);
        assert_eq!(comparison.score, 79);
    }

    #[test]
    fn score_rounds_to_nearest() {
        // 41 matches of 81: 41/81*60 = 30.37 -> 30 with no bonuses
        let mut map_a = PreferenceMap::new();
        for index in 0..41 {
            map_a.insert(index, Direction::Right);
        }
        let map_b = PreferenceMap::filled(Direction::Right);

        let comparison = compare_with_labels(&result_with(&map_a, 1, 2), &result_with(&map_b, 3, 4));
        assert_eq!(comparison.matches, 41);
        assert_eq!(comparison.score, 30);
    }

    #[test]
    fn short_buffer_reads_as_all_left() {
        let mut a = result_with(&PreferenceMap::filled(Direction::Left), 1, 2);
        let b = a.clone();
        a.preferences = [0u8; PACKED_LEN];
        let comparison = compare_with_labels(&a, &b);
        assert_eq!(comparison.matches, 81);
    }

    #[test]
    fn missing_labels_fall_back_to_empty() {
        let map = PreferenceMap::filled(Direction::Up);
        let a = result_with(&map, 0, 0);
        let comparison = compare_results(&a, &a.clone(), &[]);
        assert_eq!(comparison.perfect_matches.len(), 81);
        assert!(comparison.perfect_matches.iter().all(|m| m.item.is_empty()));
    }

    #[test]
    fn flavor_text_tier_boundaries() {
        assert_eq!(flavor_text(100), "Soulmates? This is uncanny.");
        assert_eq!(flavor_text(95), "Soulmates? This is uncanny.");
        assert_eq!(flavor_text(94), "You two are eerily aligned.");
        assert_eq!(flavor_text(85), "You two are eerily aligned.");
        assert_eq!(flavor_text(84), "Solid common ground here.");
        assert_eq!(flavor_text(70), "Solid common ground here.");
        assert_eq!(flavor_text(69), "Some good overlap, some spicy disagreements.");
        assert_eq!(flavor_text(50), "Some good overlap, some spicy disagreements.");
        assert_eq!(flavor_text(49), "Opposites attract... right?");
        assert_eq!(flavor_text(30), "Opposites attract... right?");
        assert_eq!(flavor_text(29), "Well, variety is the spice of life!");
        assert_eq!(flavor_text(0), "Well, variety is the spice of life!");
    }

    #[test]
    fn feeling_labels() {
        assert_eq!(Feeling::Loved.as_str(), "loved");
        assert_eq!(Feeling::Hated.as_str(), "hated");
    }
}
