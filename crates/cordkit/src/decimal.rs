use crate::DecodeError;

/// Parses a strict unsigned decimal string (`^[0-9]+$`) into a `u64`.
///
/// The whole input is validated before any arithmetic happens, so a string
/// that is both malformed and too long reports
/// [`DecodeError::InvalidFormat`] rather than [`DecodeError::OutOfRange`].
/// Leading zeros are accepted.
pub(crate) const fn parse_u64(input: &str) -> Result<u64, DecodeError> {
    let bytes = input.as_bytes();
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return Err(DecodeError::InvalidFormat);
        }
        i += 1;
    }

    let mut acc: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let digit = (bytes[i] - b'0') as u64;
        acc = match acc.checked_mul(10) {
            Some(v) => v,
            None => return Err(DecodeError::OutOfRange),
        };
        acc = match acc.checked_add(digit) {
            Some(v) => v,
            None => return Err(DecodeError::OutOfRange),
        };
        i += 1;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_digit_strings() {
        assert_eq!(parse_u64("0"), Ok(0));
        assert_eq!(parse_u64("000"), Ok(0));
        assert_eq!(parse_u64("8"), Ok(8));
        assert_eq!(parse_u64("9007199254740993"), Ok(9_007_199_254_740_993));
        assert_eq!(parse_u64("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn rejects_non_digits() {
        for input in ["", " ", "-1", "+1", "1 ", " 1", "12a", "0x10", "1_000", "１"] {
            assert_eq!(
                parse_u64(input),
                Err(DecodeError::InvalidFormat),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn rejects_values_past_u64() {
        assert_eq!(
            parse_u64("18446744073709551616"),
            Err(DecodeError::OutOfRange)
        );
        assert_eq!(
            parse_u64("99999999999999999999999"),
            Err(DecodeError::OutOfRange)
        );
    }

    #[test]
    fn format_errors_win_over_overflow() {
        assert_eq!(
            parse_u64("99999999999999999999999x"),
            Err(DecodeError::InvalidFormat)
        );
    }
}
