//! Clause list joining

/// Join items with a delimiter, leaving no trailing delimiter
///
/// Each item is written followed by the delimiter, then one trailing
/// delimiter is stripped. An empty input yields an empty string.
pub fn join_with_delimiter<I, S>(items: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for item in items {
        result.push_str(item.as_ref());
        result.push_str(delimiter);
    }
    if !delimiter.is_empty() && result.ends_with(delimiter) {
        result.truncate(result.len() - delimiter.len());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join_with_delimiter(["id", "name"], ","), "id,name");
        assert_eq!(join_with_delimiter(["a", "b", "c"], " and "), "a and b and c");
        assert_eq!(join_with_delimiter(["only"], ","), "only");
    }

    #[test]
    fn test_empty_items() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(join_with_delimiter(&empty, ","), "");
        assert_eq!(join_with_delimiter(&empty, ""), "");
    }

    #[test]
    fn test_empty_delimiter() {
        assert_eq!(join_with_delimiter(["ab", "cd"], ""), "abcd");
    }

    #[test]
    fn test_delimiter_count() {
        let items = vec!["x".to_string(); 5];
        let joined = join_with_delimiter(&items, ";");
        assert_eq!(joined.matches(';').count(), items.len() - 1);
        assert!(!joined.ends_with(';'));
    }

    #[test]
    fn test_only_one_trailing_delimiter_stripped() {
        // the last item itself ends with the delimiter text
        assert_eq!(join_with_delimiter(["a,", "b,"], ","), "a,,b,");
    }
}
