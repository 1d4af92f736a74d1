//! Shorthands for building arbitrary-precision integers.

use rug::Integer;

/// Converts any primitive integer into an [`Integer`].
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Reads an integer literal: decimal digits with an optional leading `-`.
///
/// Literals come from the scanner, which only produces digit runs, so failing to read one is a
/// bug rather than a user error.
pub fn int_from_str(literal: &str) -> Integer {
    Integer::from_str_radix(literal, 10)
        .unwrap_or_else(|err| unreachable!("scanner produced the literal `{}`: {}", literal, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_wider_than_a_machine_word() {
        let n = int_from_str("-123456789012345678901234567890");
        assert_eq!(n.to_string(), "-123456789012345678901234567890");
        assert!(n < int(i64::MIN));
    }
}
