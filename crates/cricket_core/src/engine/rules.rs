//! Fixed match rules.
//!
//! A whole match plays out in a couple of dozen deliveries.

/// Overs per innings.
pub const MAX_OVERS: u32 = 2;

/// Wickets that end an innings.
pub const MAX_WICKETS: u32 = 3;

/// Legal deliveries per over; extras are not counted.
pub const BALLS_PER_OVER: u32 = 6;

/// Legal deliveries per innings.
pub const MAX_BALLS: u32 = MAX_OVERS * BALLS_PER_OVER;

/// Team that bats in the first innings.
pub const FIRST_BATTING_INDEX: usize = 0;

/// Team that bats second and chases the first-innings total.
pub const CHASING_INDEX: usize = 1;

/// Format a legal-ball count as overs, e.g. 7 balls -> "1.1".
pub fn overs_display(balls: u32) -> String {
    format!("{}.{}", balls / BALLS_PER_OVER, balls % BALLS_PER_OVER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overs_display_splits_complete_overs_and_balls() {
        assert_eq!(overs_display(0), "0.0");
        assert_eq!(overs_display(5), "0.5");
        assert_eq!(overs_display(6), "1.0");
        assert_eq!(overs_display(7), "1.1");
        assert_eq!(overs_display(MAX_BALLS), "2.0");
    }

    #[test]
    fn one_side_bats_first_the_other_chases() {
        assert_ne!(FIRST_BATTING_INDEX, CHASING_INDEX);
        assert_eq!(FIRST_BATTING_INDEX + CHASING_INDEX, 1);
        assert_eq!(MAX_BALLS, 12);
    }
}
