//! Month and date text formatting
//!
//! The header band shows the month abbreviation and the day-of-month,
//! the latter space-padded to two characters like strftime `%e`.

use heapless::String;

/// Month abbreviations, January first
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Abbreviation for a 1-based month number
pub fn month_abbrev(month: u8) -> Option<&'static str> {
    MONTH_ABBREV.get(month.checked_sub(1)? as usize).copied()
}

/// Format a day-of-month as two characters, space-padded
pub fn format_day(day: u8) -> String<2> {
    let mut out = String::new();
    let (tens, units) = crate::bcd::split(day.min(99));
    let _ = out.push(if tens == 0 { ' ' } else { (b'0' + tens) as char });
    let _ = out.push((b'0' + units) as char);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_abbrev() {
        assert_eq!(month_abbrev(1), Some("Jan"));
        assert_eq!(month_abbrev(12), Some("Dec"));
        assert_eq!(month_abbrev(0), None);
        assert_eq!(month_abbrev(13), None);
    }

    #[test]
    fn test_day_is_space_padded() {
        assert_eq!(format_day(1).as_str(), " 1");
        assert_eq!(format_day(9).as_str(), " 9");
        assert_eq!(format_day(10).as_str(), "10");
        assert_eq!(format_day(31).as_str(), "31");
    }
}
