//! Threshold advisory: turns raw present/total tallies into a percentage,
//! a standing against the configured target, and an actionable count
//! (how many more bunks are safe, or how many classes must be attended
//! back-to-back to climb over the target again).
//!
//! Pure and deterministic; no I/O, no rounding. Display-side rounding is a
//! presentation concern.

/// Attendance standing relative to the target fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    /// No sessions recorded yet; the ratio is undefined.
    NoData,
    /// At or above target.
    Meeting,
    /// Below target.
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advice {
    pub percentage: f64,
    pub standing: Standing,
    /// Meeting: further absences tolerable while staying at/above target.
    /// Below: consecutive attendances required to reach the target.
    pub advisory: u32,
}

/// Compute the advisory for `present` attended sessions out of `total`,
/// against a target fraction in `(0, 1]`.
pub fn advise(present: u32, total: u32, target: f64) -> Advice {
    if total == 0 {
        return Advice {
            percentage: 0.0,
            standing: Standing::NoData,
            advisory: 0,
        };
    }

    let percentage = 100.0 * present as f64 / total as f64;

    if meets(present, total, target) {
        // Largest k with present >= target * (total + k).
        let mut k = (present as f64 / target - total as f64).floor().max(0.0) as u32;
        // floating point can overshoot the boundary by one; back off until real
        while k > 0 && !meets(present, total + k, target) {
            k -= 1;
        }
        Advice {
            percentage,
            standing: Standing::Meeting,
            advisory: k,
        }
    } else if target >= 1.0 {
        // an absence against a 100% target can never be recovered
        Advice {
            percentage,
            standing: Standing::Below,
            advisory: u32::MAX,
        }
    } else {
        // Smallest non-negative k with (present + k) / (total + k) >= target,
        // i.e. k >= (target*total - present) / (1 - target).
        let mut k = ((target * total as f64 - present as f64) / (1.0 - target))
            .ceil()
            .max(0.0) as u32;
        while !meets(present + k, total + k, target) {
            k += 1;
        }
        while k > 0 && meets(present + k - 1, total + k - 1, target) {
            k -= 1;
        }
        Advice {
            percentage,
            standing: Standing::Below,
            advisory: k,
        }
    }
}

fn meets(present: u32, total: u32, target: f64) -> bool {
    present as f64 >= target * total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_is_no_data_not_a_division_error() {
        let a = advise(0, 0, 0.75);
        assert_eq!(a.percentage, 0.0);
        assert_eq!(a.standing, Standing::NoData);
        assert_eq!(a.advisory, 0);
    }

    #[test]
    fn six_of_eight_meets_with_zero_margin() {
        // exactly 75.0%: meeting the target, but no bunk to spare
        let a = advise(6, 8, 0.75);
        assert!((a.percentage - 75.0).abs() < 1e-9);
        assert_eq!(a.standing, Standing::Meeting);
        assert_eq!(a.advisory, 0);
    }

    #[test]
    fn five_of_eight_needs_four_straight() {
        // 62.5%: smallest k with (5+k)/(8+k) >= 0.75 is 4
        let a = advise(5, 8, 0.75);
        assert!((a.percentage - 62.5).abs() < 1e-9);
        assert_eq!(a.standing, Standing::Below);
        assert_eq!(a.advisory, 4);
    }

    #[test]
    fn meeting_advisory_is_a_tight_boundary() {
        for (present, total) in [(9u32, 10u32), (30, 40), (7, 8), (75, 100), (3, 4)] {
            let a = advise(present, total, 0.75);
            assert_eq!(a.standing, Standing::Meeting);
            let k = a.advisory;
            // k extra absences keep us at/above target
            assert_eq!(advise(present, total + k, 0.75).standing, Standing::Meeting);
            // one more drops below
            assert_eq!(advise(present, total + k + 1, 0.75).standing, Standing::Below);
        }
    }

    #[test]
    fn below_advisory_is_minimal() {
        for (present, total) in [(0u32, 1u32), (1, 4), (5, 8), (10, 20), (59, 80)] {
            let a = advise(present, total, 0.75);
            assert_eq!(a.standing, Standing::Below);
            let k = a.advisory;
            assert!(k > 0);
            assert_eq!(
                advise(present + k, total + k, 0.75).standing,
                Standing::Meeting
            );
            assert_eq!(
                advise(present + k - 1, total + k - 1, 0.75).standing,
                Standing::Below
            );
        }
    }

    #[test]
    fn advisory_never_negative_at_exact_target() {
        // floor of a true value at exactly target must be 0, not -1
        let a = advise(3, 4, 0.75);
        assert_eq!(a.standing, Standing::Meeting);
        assert_eq!(a.advisory, 0);
    }

    #[test]
    fn alternate_targets_are_not_hardcoded() {
        // target 0.5: 2 of 6 needs k=2 since (2+2)/(6+2) = 0.5
        let a = advise(2, 6, 0.5);
        assert_eq!(a.standing, Standing::Below);
        assert_eq!(a.advisory, 2);

        // target 0.9: 9 of 10 can bunk 0, 18 of 20 can bunk 0, 19 of 20 can bunk 1
        assert_eq!(advise(9, 10, 0.9).advisory, 0);
        assert_eq!(advise(19, 20, 0.9).advisory, 1);
    }

    #[test]
    fn full_target_is_unrecoverable_once_missed() {
        let a = advise(5, 6, 1.0);
        assert_eq!(a.standing, Standing::Below);
        assert_eq!(a.advisory, u32::MAX);
        // but perfect attendance still meets it
        assert_eq!(advise(6, 6, 1.0).standing, Standing::Meeting);
    }

    #[test]
    fn percentage_is_exact_and_unrounded() {
        let a = advise(1, 3, 0.75);
        assert!((a.percentage - 100.0 / 3.0).abs() < 1e-9);
    }
}
