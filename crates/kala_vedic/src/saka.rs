//! Saka era year.
//!
//! The Saka era begins in CE 78; the civil Saka year increments at the
//! Indian national calendar's new year (Chaitra 1, March 22 in common
//! years of the Gregorian calendar).

/// Saka year for a Gregorian civil date.
pub fn saka_year_for(year: i32, month: u32, day: u32) -> i32 {
    if (month, day) >= (3, 22) {
        year - 78
    } else {
        year - 79
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_new_year() {
        assert_eq!(saka_year_for(2026, 3, 22), 1948);
        assert_eq!(saka_year_for(2026, 12, 31), 1948);
    }

    #[test]
    fn before_new_year() {
        assert_eq!(saka_year_for(2026, 1, 20), 1947);
        assert_eq!(saka_year_for(2026, 3, 21), 1947);
    }

    #[test]
    fn era_origin() {
        // CE 78, on the new year itself, is Saka 0.
        assert_eq!(saka_year_for(78, 3, 22), 0);
    }
}
