//! Points-to-level conversion and level-up achievement labels.
//!
//! Every point award in the system flows through [`apply_points`], a pure
//! function of the old total and the delta. Levels are derived, never stored
//! authoritatively anywhere else: 100 points per level, progress is the
//! remainder within the current level.

/// Result of applying a point delta to a user's running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointAward {
    pub new_total: i64,
    pub new_level: i64,
    pub new_progress: i64,
    pub levelled_up: bool,
}

/// Points required to advance one academic level.
pub const POINTS_PER_LEVEL: i64 = 100;

/// Applies a positive point delta to the stored total.
///
/// The caller is responsible for rejecting non-positive deltas before
/// reaching this function; the conversion itself is total arithmetic with
/// no failure modes. Level 1 corresponds to totals 0..99.
pub fn apply_points(old_total: i64, old_level: i64, delta: i64) -> PointAward {
    let new_total = old_total + delta;
    let new_level = new_total / POINTS_PER_LEVEL + 1;
    let new_progress = new_total % POINTS_PER_LEVEL;

    PointAward {
        new_total,
        new_level,
        new_progress,
        levelled_up: new_level > old_level,
    }
}

/// Label recorded in the achievement set when a level boundary is crossed.
pub fn level_up_label(new_level: i64) -> String {
    format!("Reached Level {new_level}")
}

/// Appends `label` to the achievement list unless it is already present.
///
/// The list keeps insertion order; duplicates are suppressed rather than
/// treated as errors. Returns whether the list changed.
pub fn push_achievement(achievements: &mut Vec<String>, label: &str) -> bool {
    if achievements.iter().any(|a| a == label) {
        return false;
    }
    achievements.push(label.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_crossing_a_level_boundary() {
        let award = apply_points(95, 1, 10);
        assert_eq!(award.new_total, 105);
        assert_eq!(award.new_level, 2);
        assert_eq!(award.new_progress, 5);
        assert!(award.levelled_up);
    }

    #[test]
    fn award_within_the_same_level() {
        let award = apply_points(50, 1, 10);
        assert_eq!(award.new_total, 60);
        assert_eq!(award.new_level, 1);
        assert_eq!(award.new_progress, 60);
        assert!(!award.levelled_up);
    }

    #[test]
    fn award_landing_exactly_on_a_boundary() {
        // 100 total is the first point of level 2, with zero progress into it.
        let award = apply_points(90, 1, 10);
        assert_eq!(award.new_total, 100);
        assert_eq!(award.new_level, 2);
        assert_eq!(award.new_progress, 0);
        assert!(award.levelled_up);
    }

    #[test]
    fn award_is_deterministic_over_a_range_of_inputs() {
        for old_total in (0..500).step_by(7) {
            for delta in [1, 5, 50, 99, 100, 250] {
                let award = apply_points(old_total, old_total / 100 + 1, delta);
                assert_eq!(award.new_total, old_total + delta);
                assert_eq!(award.new_level, (old_total + delta) / 100 + 1);
                assert_eq!(award.new_progress, (old_total + delta) % 100);
            }
        }
    }

    #[test]
    fn multi_level_jump_only_records_the_final_level() {
        let award = apply_points(10, 1, 250);
        assert_eq!(award.new_level, 3);
        assert_eq!(award.new_progress, 60);
        assert_eq!(level_up_label(award.new_level), "Reached Level 3");
    }

    #[test]
    fn push_achievement_is_idempotent() {
        let mut list = vec!["Beginner".to_string()];
        assert!(push_achievement(&mut list, "Reached Level 2"));
        assert!(!push_achievement(&mut list, "Reached Level 2"));
        assert_eq!(list, vec!["Beginner", "Reached Level 2"]);
    }

    #[test]
    fn push_achievement_preserves_insertion_order() {
        let mut list = Vec::new();
        push_achievement(&mut list, "First Steps");
        push_achievement(&mut list, "Reached Level 2");
        push_achievement(&mut list, "First Steps");
        push_achievement(&mut list, "Quiz Master");
        assert_eq!(list, vec!["First Steps", "Reached Level 2", "Quiz Master"]);
    }
}
