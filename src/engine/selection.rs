//! Ranking and survivor selection.
//!
//! Survivors of a generation are the top quarter of the ranked population
//! plus a uniform sample, without replacement, of one more quarter drawn
//! from the remainder. Quarters are `len / 4`, truncated, so populations
//! not divisible by 4 keep fewer than half.

use rand::seq::index;
use rand::Rng;
use std::cmp::Reverse;

/// Population indices ordered by score, best first. Ties keep population
/// order.
pub fn rank_descending(scores: &[i32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by_key(|&i| Reverse(scores[i]));
    order
}

/// Picks survivor indices from a ranking: elites first, then the random
/// sample.
pub fn select_survivors<R: Rng>(ranked: &[usize], rng: &mut R) -> Vec<usize> {
    let quarter = ranked.len() / 4;
    let (elite, rest) = ranked.split_at(quarter);

    let mut survivors = elite.to_vec();
    survivors.extend(
        index::sample(rng, rest.len(), quarter)
            .into_iter()
            .map(|i| rest[i]),
    );
    survivors
}

/// Index of the first highest score.
pub fn first_best(scores: &[i32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .min_by_key(|&(_, &s)| Reverse(s))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_rank_is_stable() {
        let scores = [0, 100, 95, 100, 0];
        assert_eq!(rank_descending(&scores), vec![1, 3, 2, 0, 4]);
    }

    #[test]
    fn test_survivors_keep_elites() {
        let scores = [0, 0, 100, 0, 0, 0, 0, 95, 0, 0];
        let ranked = rank_descending(&scores);
        let mut rng = SmallRng::seed_from_u64(42);

        for _ in 0..20 {
            let survivors = select_survivors(&ranked, &mut rng);
            assert_eq!(survivors.len(), 4);
            assert_eq!(&survivors[..2], &[2, 7]);
            let distinct: HashSet<usize> = survivors.iter().copied().collect();
            assert_eq!(distinct.len(), 4);
        }
    }

    #[test]
    fn test_survivor_count_truncates() {
        let mut rng = SmallRng::seed_from_u64(1);
        let ranked: Vec<usize> = (0..7).collect();
        assert_eq!(select_survivors(&ranked, &mut rng).len(), 2);
        let ranked: Vec<usize> = (0..3).collect();
        assert!(select_survivors(&ranked, &mut rng).is_empty());
    }

    #[test]
    fn test_random_quarter_varies() {
        let ranked: Vec<usize> = (0..40).collect();
        let mut rng = SmallRng::seed_from_u64(3);
        let mut sampled = HashSet::new();
        for _ in 0..30 {
            for i in select_survivors(&ranked, &mut rng).into_iter().skip(10) {
                assert!(i >= 10);
                sampled.insert(i);
            }
        }
        assert!(sampled.len() > 10);
    }

    #[test]
    fn test_first_best() {
        assert_eq!(first_best(&[0, 95, 100, 100]), Some(2));
        assert_eq!(first_best(&[0, 0]), Some(0));
        assert_eq!(first_best(&[]), None);
    }
}
