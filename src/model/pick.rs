use rand::Rng;
use tracing::debug;

/// Picks a uniformly random value in `0..=max` that is not listed in `avoid`.
///
/// Returns `None` once every value of the range is avoided.
pub fn pick_index<R: Rng + ?Sized>(rng: &mut R, max: usize, avoid: &[usize]) -> Option<usize> {
    debug!(max, ?avoid, "picking random index");

    let candidates = (0..=max)
        .filter(|value| !avoid.contains(value))
        .collect::<Vec<_>>();
    if candidates.is_empty() {
        debug!(max, "every index in range is already taken");
        return None;
    }

    let picked = candidates[rng.random_range(0..candidates.len())];
    debug!(picked, "picked random index");
    Some(picked)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::pick_index;

    #[test]
    fn never_returns_an_avoided_value() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let picked = pick_index(&mut rng, 5, &[0, 2, 4]).unwrap();
            assert!(matches!(picked, 1 | 3 | 5));
        }
    }

    #[test]
    fn only_free_slot_is_chosen() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_index(&mut rng, 3, &[0, 1, 2]), Some(3));
    }

    #[test]
    fn exhausted_range_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_index(&mut rng, 1, &[0, 1]), None);
        assert_eq!(pick_index(&mut rng, 0, &[0]), None);
    }

    #[test]
    fn max_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_max = false;
        for _ in 0..200 {
            let picked = pick_index(&mut rng, 2, &[]).unwrap();
            assert!(picked <= 2);
            seen_max |= picked == 2;
        }
        assert!(seen_max);
    }
}
