pub mod datetime;

pub use crate::datetime::IemDateTime;

pub const UNKNOWN: &str = "unknown";

// Decode an iEM3000 DATETIME register block received as a HEXBYTES string.
// Returns "YYYY-MM-DD HH:MM", or "unknown" for anything that does not decode.
pub fn parse_datetime_hex(input: &str) -> String {
    match IemDateTime::from_hex(input) {
        Ok(datetime) => datetime.to_string(),
        Err(_) => UNKNOWN.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_clean_hex() {
        assert_eq!(parse_datetime_hex("00170B0F0E1E0000"), "2023-11-15 14:30");
    }

    #[test]
    fn separators_do_not_change_the_result() {
        let expected = "2023-11-15 14:30";
        assert_eq!(parse_datetime_hex("00 17 0B 0F 0E 1E 00 00"), expected);
        assert_eq!(parse_datetime_hex("00:17:0B:0F:0E:1E:00:00"), expected);
        assert_eq!(parse_datetime_hex("00.17.0b.0f.0e.1e.00.00"), expected);
    }

    #[test]
    fn empty_input_is_unknown() {
        assert_eq!(parse_datetime_hex(""), UNKNOWN);
    }

    #[test]
    fn short_input_is_unknown() {
        assert_eq!(parse_datetime_hex("1234"), UNKNOWN);
        // 15 digits is one short of the 8 bytes the block needs.
        assert_eq!(parse_datetime_hex("00170B0F0E1E000"), UNKNOWN);
        assert_eq!(parse_datetime_hex("not a datetime"), UNKNOWN);
    }

    #[test]
    fn out_of_range_fields_are_unknown() {
        // month 13
        assert_eq!(parse_datetime_hex("00170D0F0E1E0000"), UNKNOWN);
        // minute 60
        assert_eq!(parse_datetime_hex("00170B0F0E3C0000"), UNKNOWN);
    }

    #[test]
    fn dangling_digit_is_dropped() {
        assert_eq!(parse_datetime_hex("00170B0F0E1E00001"), "2023-11-15 14:30");
    }

    #[test]
    fn output_is_deterministic() {
        let input = "00 17 0B 0F 0E 1E 00 00";
        assert_eq!(parse_datetime_hex(input), parse_datetime_hex(input));
    }
}
