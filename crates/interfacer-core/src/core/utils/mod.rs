pub mod identifiers;

/// Rounds to `decimals` places, resolving exact halves to the even neighbour.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_keeps_requested_precision() {
        assert_eq!(round_to(2.0 / 3.0, 3), 0.667);
        assert_eq!(round_to(10.004, 2), 10.0);
        assert_eq!(round_to(-1.23456, 2), -1.23);
        assert_eq!(round_to(0.0, 3), 0.0);
    }

    #[test]
    fn round_to_sends_exact_halves_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(0.0625, 3), 0.062);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(-0.125, 2), -0.12);
    }
}
