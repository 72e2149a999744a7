//! Human-readable size and time labels.

use std::time::SystemTime;

pub const KILOBYTE: u64 = 1024;
pub const MEGABYTE: u64 = KILOBYTE * 1024;
pub const GIGABYTE: u64 = MEGABYTE * 1024;
pub const TERABYTE: u64 = GIGABYTE * 1024;
pub const PETABYTE: u64 = TERABYTE * 1024;
pub const EXABYTE: u64 = PETABYTE * 1024;

/// Format a byte count so it fits the size column (at most 7 characters).
///
/// One decimal is kept below 10 units, whole units above.
pub fn format_size(bytes: u64) -> String {
    let (unit, divisor) = if bytes >= EXABYTE {
        ("EB", EXABYTE)
    } else if bytes >= PETABYTE {
        ("PB", PETABYTE)
    } else if bytes >= TERABYTE {
        ("TB", TERABYTE)
    } else if bytes >= GIGABYTE {
        ("GB", GIGABYTE)
    } else if bytes >= MEGABYTE {
        ("MB", MEGABYTE)
    } else if bytes >= KILOBYTE {
        ("KB", KILOBYTE)
    } else {
        return format!("{} B", bytes);
    };

    let value = bytes as f64 / divisor as f64;
    if value < 10.0 {
        format!("{:.1} {}", value, unit)
    } else {
        format!("{:.0} {}", value, unit)
    }
}

/// Format a modification time in YYYY-MM-DD HH:MM:SS (local time).
pub fn format_modified_time(time: SystemTime) -> String {
    let datetime: chrono::DateTime<chrono::Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(512 * KILOBYTE), "512 KB");
        assert_eq!(format_size(3 * MEGABYTE + MEGABYTE / 2), "3.5 MB");
        assert_eq!(format_size(20 * GIGABYTE), "20 GB");
        assert_eq!(format_size(2 * TERABYTE), "2.0 TB");
    }

    #[test]
    fn test_format_size_beyond_terabytes() {
        assert_eq!(format_size(10_000 * TERABYTE), "9.8 PB");
        assert_eq!(format_size(300 * PETABYTE), "300 PB");
        assert_eq!(format_size(2 * EXABYTE), "2.0 EB");
        assert_eq!(format_size(u64::MAX), "16 EB");
    }

    #[test]
    fn test_format_size_fits_column() {
        for bytes in [1023, KILOBYTE * 1023, MEGABYTE * 1023 + 1, PETABYTE * 1023, u64::MAX] {
            assert!(format_size(bytes).chars().count() <= 7, "{}", format_size(bytes));
        }
    }

    #[test]
    fn test_format_modified_time_shape() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let label = format_modified_time(time);
        assert_eq!(label.len(), 19);
        assert_eq!(&label[4..5], "-");
        assert_eq!(&label[13..14], ":");
    }
}
