use rug::{Complete, Integer};

// Finds the smallest divisor of n that is greater than 1, or None if n is
// prime. n must be at least 2 and is never modified.
//
// Odd candidates are scanned in ascending order against a shrinking bound,
// ceil(n / candidate), recomputed from n on every iteration. The bound drops
// below the candidate once the candidate passes sqrt(n), so the scan stays
// within integer division without ever taking a square root.
pub fn find_divisor(n: &Integer) -> Option<Integer> {
    debug_assert!(*n >= 2);

    if *n == 2 {
        return None;
    }
    if n.is_even() {
        return Some(Integer::from(2));
    }

    let mut candidate = Integer::from(3);
    loop {
        let (bound, _) = n.div_rem_ceil_ref(&candidate).complete();
        if candidate > bound {
            return None;
        }
        if n.is_divisible(&candidate) {
            return Some(candidate);
        }
        candidate += 2;
    }
}

#[cfg(test)]
mod tests {
    use rug::rand::RandState;

    use super::*;

    #[test]
    fn test_two_has_no_divisor() {
        assert_eq!(find_divisor(&Integer::from(2)), None);
    }

    #[test]
    fn test_even_numbers_yield_two() {
        assert_eq!(find_divisor(&Integer::from(4)), Some(Integer::from(2)));
        assert_eq!(find_divisor(&Integer::from(360)), Some(Integer::from(2)));

        let huge_even = Integer::from_str_radix("123456789012345678901234567890", 10).unwrap();
        assert_eq!(find_divisor(&huge_even), Some(Integer::from(2)));
    }

    #[test]
    fn test_agrees_with_brute_force() {
        for n in 3u32..2000 {
            let expected = (2..n).find(|d| n % d == 0).map(Integer::from);
            assert_eq!(find_divisor(&Integer::from(n)), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_random_primes_have_no_divisor() {
        let mut rng = RandState::new();
        rng.seed(&Integer::from(42));
        for _ in 0..20 {
            let p = Integer::from(Integer::random_bits(24, &mut rng)).next_prime();
            assert_eq!(find_divisor(&p), None, "p = {}", p);
        }
    }

    #[test]
    fn test_semiprimes_yield_smaller_prime() {
        let mut rng = RandState::new();
        rng.seed(&Integer::from(42));
        for _ in 0..20 {
            let p = Integer::from(Integer::random_bits(20, &mut rng)).next_prime();
            let q = Integer::from(Integer::random_bits(24, &mut rng)).next_prime();
            let n = (&p * &q).complete();
            assert_eq!(find_divisor(&n), Some(p.clone().min(q.clone())), "n = {}", n);
        }
    }
}
