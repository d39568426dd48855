//! Page window arithmetic for the listing endpoints.

use serde::Deserialize;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

/// `page`/`limit` query parameters, 1-indexed.
///
/// Values are kept raw so that unparsable input falls back to the default
/// instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    page: Option<String>,
    #[serde(default)]
    limit: Option<String>,
}

impl PageQuery {
    /// Inclusive `(start, stop)` offsets covering exactly `limit` items.
    pub fn window(&self) -> (isize, isize) {
        let page = parse_min_one(self.page.as_deref(), DEFAULT_PAGE);
        let limit = parse_min_one(self.limit.as_deref(), DEFAULT_LIMIT);
        let start = (page - 1) * limit;

        (start as isize, (start + limit - 1) as isize)
    }
}

/// Parse-or-default with an explicit minimum of 1.
fn parse_min_one(raw: Option<&str>, fallback: i64) -> i64 {
    raw.and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(fallback)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>, limit: Option<&str>) -> PageQuery {
        PageQuery {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults_cover_first_ten() {
        assert_eq!(PageQuery::default().window(), (0, 9));
    }

    #[test]
    fn test_second_page_of_five() {
        assert_eq!(query(Some("2"), Some("5")).window(), (5, 9));
    }

    #[test]
    fn test_first_page_of_two() {
        assert_eq!(query(Some("1"), Some("2")).window(), (0, 1));
    }

    #[test]
    fn test_zero_and_negative_clamped_to_one() {
        assert_eq!(query(Some("0"), Some("5")).window(), (0, 4));
        assert_eq!(query(Some("-3"), Some("-1")).window(), (0, 0));
    }

    #[test]
    fn test_unparsable_input_falls_back_to_defaults() {
        assert_eq!(query(Some("abc"), Some("many")).window(), (0, 9));
    }
}
