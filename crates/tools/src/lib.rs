//! Shared helpers for the command-line harnesses that drive the level generator.

pub mod config_file;
pub mod preview;
pub mod seed;

/// Format a level fingerprint as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(fingerprint: u64) -> String {
    format!("0x{fingerprint:016x}")
}

#[cfg(test)]
mod tests {
    use super::format_fingerprint;

    #[test]
    fn fingerprint_is_zero_padded_hex() {
        assert_eq!(format_fingerprint(0xAB), "0x00000000000000ab");
    }
}
