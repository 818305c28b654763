//! Display formatting helpers shared by every catalogue view.

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const SIZE_STEP: u64 = 1024;

/// Human-readable byte size.
///
/// Picks the largest unit (B through TB, step 1024) that keeps the value at
/// or above one, rounds to two decimals and strips trailing zeros.
///
/// ```
/// use core_library::format::format_byte_size;
///
/// assert_eq!(format_byte_size(0), "0 B");
/// assert_eq!(format_byte_size(4_294_967_296), "4 GB");
/// assert_eq!(format_byte_size(1_610_612_736), "1.5 GB");
/// ```
pub fn format_byte_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut divisor: u64 = 1;
    while unit + 1 < SIZE_UNITS.len() && bytes / divisor >= SIZE_STEP {
        divisor *= SIZE_STEP;
        unit += 1;
    }

    // Round half up on the exact quotient, in hundredths.
    let divisor = divisor as u128;
    let hundredths = (bytes as u128 * 200 + divisor) / (divisor * 2);
    let whole = hundredths / 100;
    let frac = hundredths % 100;

    let number = if frac == 0 {
        whole.to_string()
    } else if frac % 10 == 0 {
        format!("{}.{}", whole, frac / 10)
    } else {
        format!("{}.{:02}", whole, frac)
    };

    format!("{} {}", number, SIZE_UNITS[unit])
}

/// `"{h}h {m}m"` for an hour or more, otherwise `"{m}m"`.
pub fn format_duration(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_size_units() {
        assert_eq!(format_byte_size(1), "1 B");
        assert_eq!(format_byte_size(1023), "1023 B");
        assert_eq!(format_byte_size(1024), "1 KB");
        assert_eq!(format_byte_size(1536), "1.5 KB");
        assert_eq!(format_byte_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_byte_size(1024u64.pow(4)), "1 TB");
    }

    #[test]
    fn test_byte_size_rounding() {
        // 1100 / 1024 = 1.07421875
        assert_eq!(format_byte_size(1100), "1.07 KB");
        // 1152 / 1024 = 1.125 exactly, ties round up
        assert_eq!(format_byte_size(1152), "1.13 KB");
        // 2.5 GB keeps a single fractional digit
        assert_eq!(format_byte_size(2_684_354_560), "2.5 GB");
        // Just under 1 MB rounds up within the KB unit
        assert_eq!(format_byte_size(1024 * 1024 - 1), "1024 KB");
    }

    #[test]
    fn test_byte_size_caps_at_terabytes() {
        assert_eq!(format_byte_size(2048 * 1024u64.pow(4)), "2048 TB");
        assert_eq!(format_byte_size(u64::MAX), "16777216 TB");
    }

    #[test]
    fn test_duration() {
        assert_eq!(format_duration(0), "0m");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(136), "2h 16m");
        assert_eq!(format_duration(175), "2h 55m");
    }
}
