//! Name and price filters, and match highlighting.

/// Inclusive price bounds. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Parse the two price inputs. Blank or unparsable text leaves that
    /// side unbounded.
    pub fn from_inputs(min: &str, max: &str) -> Self {
        Self {
            min: parse_bound(min),
            max: parse_bound(max),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

fn parse_bound(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Case-insensitive substring test. An empty query matches everything.
pub fn matches_name(name: &str, query: &str) -> bool {
    query.is_empty() || find_match(name, query).is_some()
}

/// One run of text, either part of a match or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Split `text` into runs around every case-insensitive occurrence of
/// `query`, for rendering matches with `<mark>`.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    if query.is_empty() {
        if !text.is_empty() {
            segments.push(Segment { text, matched: false });
        }
        return segments;
    }

    let mut rest = text;
    while let Some((start, end)) = find_match(rest, query) {
        if start > 0 {
            segments.push(Segment { text: &rest[..start], matched: false });
        }
        segments.push(Segment { text: &rest[start..end], matched: true });
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        segments.push(Segment { text: rest, matched: false });
    }
    segments
}

/// Byte range of the first case-insensitive occurrence of `needle`.
fn find_match(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .char_indices()
        .find_map(|(start, _)| match_len(&haystack[start..], needle).map(|len| (start, start + len)))
}

fn match_len(haystack: &str, needle: &str) -> Option<usize> {
    let mut chars = haystack.char_indices();
    for n in needle.chars() {
        let (_, c) = chars.next()?;
        if !c.to_lowercase().eq(n.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map_or(haystack.len(), |(i, _)| i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_match_case_insensitive() {
        assert!(matches_name("Apple Watch", "app"));
        assert!(matches_name("Apple Watch", "WATCH"));
        assert!(!matches_name("Banana", "app"));
        assert!(matches_name("Banana", ""));
    }

    #[test]
    fn test_price_range_inclusive() {
        let range = PriceRange::new(Some(10.0), Some(20.0));
        assert!(range.contains(10.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(9.99));
        assert!(!range.contains(20.01));
    }

    #[test]
    fn test_price_range_open_ends() {
        assert!(PriceRange::new(None, Some(5.0)).contains(0.0));
        assert!(PriceRange::new(Some(5.0), None).contains(1e9));
        assert!(PriceRange::unbounded().contains(123.0));
    }

    #[test]
    fn test_price_range_from_inputs() {
        assert_eq!(
            PriceRange::from_inputs(" 5 ", ""),
            PriceRange::new(Some(5.0), None)
        );
        assert_eq!(PriceRange::from_inputs("abc", "NaN"), PriceRange::unbounded());
    }

    #[test]
    fn test_highlight_segments() {
        let segments = highlight("Pineapple apple", "APP");
        let rendered: Vec<(&str, bool)> = segments.iter().map(|s| (s.text, s.matched)).collect();
        assert_eq!(
            rendered,
            vec![
                ("Pine", false),
                ("app", true),
                ("le ", false),
                ("app", true),
                ("le", false),
            ]
        );
    }

    #[test]
    fn test_highlight_no_query_or_no_match() {
        assert_eq!(highlight("Banana", ""), vec![Segment { text: "Banana", matched: false }]);
        assert_eq!(highlight("Banana", "kiwi"), vec![Segment { text: "Banana", matched: false }]);
        assert!(highlight("", "x").is_empty());
    }

    #[test]
    fn test_highlight_non_ascii() {
        let segments = highlight("Crème Brûlée", "BRÛ");
        assert_eq!(segments[1], Segment { text: "Brû", matched: true });
    }
}
