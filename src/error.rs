use thiserror::Error;

/// Result type used throughout the enumeration API.
pub type Result<T> = std::result::Result<T, EnumerateError>;

/// Errors surfaced by the enumerator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerateError {
    #[error("invalid argument `{0}`: N must be a positive integer")]
    InvalidArgument(String),
}

/// Parse a polyomino size, rejecting anything that is not a positive
/// integer.
///
/// Usable directly as a `clap` value parser.
pub fn parse_size(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(EnumerateError::InvalidArgument(value.to_string())),
    }
}

/// Check that `n` is a valid polyomino size.
pub fn check_size(n: usize) -> Result<usize> {
    if n == 0 {
        Err(EnumerateError::InvalidArgument(n.to_string()))
    } else {
        Ok(n)
    }
}

#[test]
pub fn parse_sizes() {
    assert_eq!(parse_size("5"), Ok(5));
    assert_eq!(parse_size(" 12 "), Ok(12));

    for invalid in ["0", "-3", "", "four", "2.5"] {
        assert_eq!(
            parse_size(invalid),
            Err(EnumerateError::InvalidArgument(invalid.to_string()))
        );
    }
}

#[test]
pub fn zero_is_rejected() {
    assert!(check_size(0).is_err());
    assert_eq!(check_size(1), Ok(1));
}
