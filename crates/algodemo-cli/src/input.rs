//! Parsing of console input lines

use crate::error::{CliError, CliResult};

/// Parses whitespace-separated integers; an empty line is an empty list
pub fn parse_integers(line: &str) -> CliResult<Vec<i64>> {
    line.split_whitespace().map(parse_integer).collect()
}

/// Parses a single integer, ignoring surrounding whitespace
pub fn parse_integer(text: &str) -> CliResult<i64> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| CliError::invalid_input(format!("'{trimmed}' is not an integer")))
}

/// Parses a single non-negative integer
pub fn parse_count(text: &str) -> CliResult<usize> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| CliError::invalid_input(format!("'{trimmed}' is not a non-negative integer")))
}

/// Parses a matrix written as rows separated by `;`
///
/// `"0 1 0; 1 0 1; 0 1 0"` gives three rows of three. Blank rows are
/// skipped so a trailing `;` is harmless.
pub fn parse_matrix(text: &str) -> CliResult<Vec<Vec<i64>>> {
    text.split(';')
        .filter(|row| !row.trim().is_empty())
        .map(parse_integers)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_integers(" 3 -1  42 ").unwrap(), vec![3, -1, 42]);
        assert!(parse_integers("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_integers_rejects_words() {
        let err = parse_integers("1 two 3").unwrap_err();
        assert!(err.to_string().contains("'two'"));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(" -7\n").unwrap(), -7);
        assert!(parse_integer("3.5").is_err());
        assert!(parse_integer("").is_err());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("4").unwrap(), 4);
        assert!(parse_count("-1").is_err());
    }

    #[test]
    fn test_parse_matrix() {
        assert_eq!(
            parse_matrix("0 1; 1 0;").unwrap(),
            vec![vec![0, 1], vec![1, 0]]
        );
        assert!(parse_matrix("0 x;1 0").is_err());
        assert!(parse_matrix("").unwrap().is_empty());
    }
}
