//! Program rules as the dashboard displays them.
//!
//! These mirror constants the loyalty API enforces; nothing here decides
//! eligibility. The lookup banner and the rules cards read from this module
//! so the numbers shown stay in one place.

/// Minimum valid points for a redemption coupon.
pub const REDEMPTION_THRESHOLD_POINTS: u64 = 500;

pub const POINTS_PER_DOLLAR: u64 = 50;

/// Minimum purchase, in dollars, required to use a coupon.
pub const COUPON_MIN_PURCHASE: u64 = 80;

pub const POINTS_VALIDITY: &str = "1 año";

/// Number of recent transactions the lookup view lists.
pub const RECENT_TRANSACTIONS_SHOWN: usize = 10;

/// Dollar value of the smallest coupon.
pub fn threshold_coupon_value() -> u64 {
    REDEMPTION_THRESHOLD_POINTS / POINTS_PER_DOLLAR
}

/// State of the redemption banner in the customer lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RedemptionProgress {
    Eligible,
    Pending {
        /// Points still missing to reach the threshold.
        missing: u64,
        /// Unclamped progress, `valid / threshold * 100`.
        percent: f64,
    },
}

impl RedemptionProgress {
    pub fn for_valid_points(valid_points: u64) -> Self {
        if valid_points >= REDEMPTION_THRESHOLD_POINTS {
            return RedemptionProgress::Eligible;
        }
        RedemptionProgress::Pending {
            missing: REDEMPTION_THRESHOLD_POINTS - valid_points,
            percent: valid_points as f64 / REDEMPTION_THRESHOLD_POINTS as f64 * 100.0,
        }
    }

    /// Width of the progress bar, clamped to 0..=100.
    pub fn bar_width(&self) -> f64 {
        match self {
            RedemptionProgress::Eligible => 100.0,
            RedemptionProgress::Pending { percent, .. } => percent.clamp(0.0, 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(
            RedemptionProgress::for_valid_points(500),
            RedemptionProgress::Eligible
        );
        match RedemptionProgress::for_valid_points(499) {
            RedemptionProgress::Pending { missing, percent } => {
                assert_eq!(missing, 1);
                assert!((percent - 99.8).abs() < 1e-9);
            }
            other => panic!("expected pending, got {:?}", other),
        }
    }

    #[test]
    fn zero_points_is_zero_progress() {
        let progress = RedemptionProgress::for_valid_points(0);
        assert_eq!(progress.bar_width(), 0.0);
        assert!(matches!(
            progress,
            RedemptionProgress::Pending { missing: 500, .. }
        ));
    }

    #[test]
    fn smallest_coupon_is_ten_dollars() {
        assert_eq!(threshold_coupon_value(), 10);
    }
}
