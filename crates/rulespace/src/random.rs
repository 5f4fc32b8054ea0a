//! Stochastic rule construction and perturbation.
//!
//! Both operations take a caller-supplied [`rand::Rng`], so deterministic
//! seeds reproduce tables exactly.

use rand::Rng;

use crate::error::ValidationError;
use crate::infer::rule_length;
use crate::space::{validate_states, RuleSpace};

/// Default bias exponent toward the dead state.
pub const ZERO_BIAS: f64 = 0.5;

/// Probability that a randomly generated entry is the dead state.
///
/// `max(1 - states^-0.5, 0.5)`: biasing toward state 0 grows with the state
/// count. This is a heuristic against degenerate chaotic noise, not a derived
/// quantity.
#[inline]
#[must_use]
pub fn zero_chance(states: u8) -> f64 {
    (1.0 - f64::from(states).powf(-ZERO_BIAS)).max(ZERO_BIAS)
}

/// Generates a full random rule table for `states`.
///
/// Each of the `rule_length(states)` entries is independently the dead state
/// with probability [`zero_chance`], else uniform in `[0, states)`.
///
/// # Example
///
/// ```
/// use rand::{rngs::SmallRng, SeedableRng};
/// use rulespace::random::random_rule;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let rule = random_rule(3, &mut rng).unwrap();
/// assert_eq!(rule.len(), 135);
/// assert!(rule.iter().all(|&v| v < 3));
/// ```
pub fn random_rule<R: Rng + ?Sized>(states: u8, rng: &mut R) -> Result<Vec<u8>, ValidationError> {
    validate_states(states)?;
    let zero = zero_chance(states);
    let mut rule = vec![0u8; rule_length(states)];
    for entry in &mut rule {
        if rng.gen::<f64>() >= zero {
            *entry = rng.gen_range(0..states);
        }
    }
    Ok(rule)
}

/// Perturbs a rule space in place.
///
/// Performs `ceil(len / 20 * rate)` single-entry overwrites at uniformly
/// random indices with uniformly random values in `[0, states)`. Indices may
/// repeat, so fewer distinct entries can end up changed. Returns the number
/// of overwrites performed.
pub fn mutate<R: Rng + ?Sized>(space: &mut RuleSpace, rate: f64, rng: &mut R) -> usize {
    let len = space.len();
    let n_mutate = (len as f64 / 20.0 * rate).ceil() as usize;
    for _ in 0..n_mutate {
        let index = rng.gen_range(0..len);
        space.set(index, rng.gen_range(0..space.states()));
    }
    n_mutate
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_chance_bounds() {
        // Small state counts floor at the bias constant.
        assert_eq!(zero_chance(2), 0.5);
        assert!((zero_chance(4) - 0.5).abs() < 1e-12);
        // Larger state counts push harder toward the dead state.
        assert!(zero_chance(9) > 0.6);
        assert!(zero_chance(14) < 1.0);
        for states in 2..=14u8 {
            let p = zero_chance(states);
            assert!((0.5..1.0).contains(&p));
        }
    }

    #[test]
    fn test_random_rule_length_and_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for states in [2u8, 5, 14] {
            let rule = random_rule(states, &mut rng).unwrap();
            assert_eq!(rule.len(), rule_length(states));
            assert!(rule.iter().all(|&v| v < states));
        }
    }

    #[test]
    fn test_random_rule_rejects_bad_states() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(random_rule(1, &mut rng).is_err());
        assert!(random_rule(15, &mut rng).is_err());
    }

    #[test]
    fn test_random_rule_deterministic_per_seed() {
        let a = random_rule(3, &mut SmallRng::seed_from_u64(99)).unwrap();
        let b = random_rule(3, &mut SmallRng::seed_from_u64(99)).unwrap();
        let c = random_rule(3, &mut SmallRng::seed_from_u64(100)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_rule_biases_toward_dead_state() {
        let mut rng = SmallRng::seed_from_u64(1);
        let rule = random_rule(14, &mut rng).unwrap();
        let zeros = rule.iter().filter(|&&v| v == 0).count();
        // zero_chance(14) ~ 0.73; allow generous slack.
        assert!(zeros as f64 > rule.len() as f64 * 0.6);
    }

    #[test]
    fn test_mutate_budget_and_range() {
        let mut space = RuleSpace::new(3).unwrap();
        let before = space.as_slice().to_vec();
        let mut rng = SmallRng::seed_from_u64(5);
        let n = mutate(&mut space, 1.0, &mut rng);
        assert_eq!(n, (rule_length(3) as f64 / 20.0).ceil() as usize);

        let changed = space
            .as_slice()
            .iter()
            .zip(&before)
            .filter(|(a, b)| a != b)
            .count();
        assert!(changed <= n);
        assert!(space.as_slice().iter().all(|&v| v < 3));
    }

    #[test]
    fn test_mutate_rate_scales_budget() {
        let mut space = RuleSpace::new(3).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        let n = mutate(&mut space, 0.25, &mut rng);
        assert_eq!(n, (rule_length(3) as f64 / 20.0 * 0.25).ceil() as usize);
    }
}
