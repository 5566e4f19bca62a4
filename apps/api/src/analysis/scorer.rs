//! ATS compatibility scoring — the one piece of local, deterministic
//! computation that must be reproducible without any network call.
//!
//! Base score is a weighted sum of per-tier match ratios (high 50, medium 30,
//! low 20), renormalized over the tiers that actually contain keywords so a
//! fully matched list scores 100 no matter which tiers appear. Then length
//! penalties, then round and clamp to [0, 100].

use crate::models::analysis::{Importance, KeywordMatch};

/// Returned when there is no keyword data to score against.
pub const NEUTRAL_SCORE: u8 = 50;

const TIER_WEIGHTS: [(Importance, f64); 3] = [
    (Importance::High, 50.0),
    (Importance::Medium, 30.0),
    (Importance::Low, 20.0),
];

const SPARSE_WORD_COUNT: usize = 100;
const VERBOSE_WORD_COUNT: usize = 1000;

/// Computes the 0–100 ATS compatibility score. Pure function of its inputs;
/// the job description is part of the contract but the current model scores
/// off the match list and resume length alone.
pub fn score(matches: &[KeywordMatch], resume_text: &str, _job_description: &str) -> u8 {
    if matches.is_empty() {
        return NEUTRAL_SCORE;
    }

    let mut weighted = 0.0_f64;
    let mut total_weight = 0.0_f64;
    for (tier, weight) in TIER_WEIGHTS {
        let total = matches.iter().filter(|m| m.importance == tier).count();
        if total == 0 {
            continue;
        }
        let found = matches
            .iter()
            .filter(|m| m.importance == tier && m.found)
            .count();
        weighted += found as f64 / total as f64 * weight;
        total_weight += weight;
    }

    let mut base = if total_weight > 0.0 {
        weighted / total_weight * 100.0
    } else {
        0.0
    };

    let word_count = resume_text.split_whitespace().count();
    if word_count < SPARSE_WORD_COUNT {
        base -= 10.0;
    }
    if word_count > VERBOSE_WORD_COUNT {
        base -= 5.0;
    }

    base.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(flags: &[(bool, Importance)]) -> Vec<KeywordMatch> {
        flags.iter()
            .enumerate()
            .map(|(i, (found, importance))| KeywordMatch {
                keyword: format!("kw{i}"),
                found: *found,
                importance: *importance,
            })
            .collect()
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_matches_scores_neutral_50() {
        assert_eq!(score(&[], "", ""), 50);
        assert_eq!(score(&[], &words(500), "any jd"), 50);
    }

    #[test]
    fn test_all_high_all_matched_scores_100() {
        let m = matches(&[(true, Importance::High), (true, Importance::High)]);
        assert_eq!(score(&m, &words(500), ""), 100);
    }

    #[test]
    fn test_fully_matched_mixed_tiers_scores_100() {
        let m = matches(&[
            (true, Importance::High),
            (true, Importance::Medium),
            (true, Importance::Low),
        ]);
        assert_eq!(score(&m, &words(500), ""), 100);
    }

    #[test]
    fn test_weighted_sum_renormalized_across_tiers() {
        // high 1/1, low 0/1: (50 + 0) / 70 * 100 = 71.43 → 71, no penalty at 150 words
        let m = matches(&[(true, Importance::High), (false, Importance::Low)]);
        assert_eq!(score(&m, &words(150), ""), 71);
    }

    #[test]
    fn test_absent_tiers_are_excluded_from_weighting() {
        // only medium present: 1/2 * 30 / 30 * 100 = 50
        let m = matches(&[(true, Importance::Medium), (false, Importance::Medium)]);
        assert_eq!(score(&m, &words(150), ""), 50);
    }

    #[test]
    fn test_sparse_resume_penalty() {
        let m = matches(&[(true, Importance::High)]);
        assert_eq!(score(&m, &words(50), ""), 90);
    }

    #[test]
    fn test_verbose_resume_penalty() {
        let m = matches(&[(true, Importance::High)]);
        assert_eq!(score(&m, &words(1500), ""), 95);
    }

    #[test]
    fn test_word_count_boundaries_are_exclusive() {
        let m = matches(&[(true, Importance::High)]);
        assert_eq!(score(&m, &words(100), ""), 100);
        assert_eq!(score(&m, &words(1000), ""), 100);
    }

    #[test]
    fn test_clamped_at_zero() {
        // nothing matched, sparse resume: 0 - 10 clamps to 0
        let m = matches(&[(false, Importance::High)]);
        assert_eq!(score(&m, "short", ""), 0);
    }

    #[test]
    fn test_rounds_to_nearest_integer() {
        // high only, 1/3 matched: 33.333… → 33
        let m = matches(&[
            (true, Importance::High),
            (false, Importance::High),
            (false, Importance::High),
        ]);
        assert_eq!(score(&m, &words(150), ""), 33);
    }

    #[test]
    fn test_monotonic_in_matched_count() {
        // flipping found=false → true never decreases the score
        let tiers = [Importance::High, Importance::Medium, Importance::Low];
        let resume = words(300);
        for flip in 0..tiers.len() * 2 {
            let mut flags: Vec<(bool, Importance)> = tiers
                .iter()
                .flat_map(|&t| [(false, t), (false, t)])
                .collect();
            let before = score(&matches(&flags), &resume, "");
            flags[flip].0 = true;
            let after = score(&matches(&flags), &resume, "");
            assert!(after >= before, "flip {flip}: {after} < {before}");
        }
    }

    #[test]
    fn test_always_within_bounds() {
        let cases = [
            matches(&[]),
            matches(&[(true, Importance::High), (true, Importance::Medium)]),
            matches(&[(false, Importance::Low)]),
        ];
        for m in &cases {
            for text in ["", "a few words only", &words(2000)] {
                let s = score(m, text, "");
                assert!(s <= 100);
            }
        }
    }
}
