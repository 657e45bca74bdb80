//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method issues exactly one
//! statement; mutations that must respect ownership carry the owner in the
//! `WHERE` clause so the check and the write are atomic.

pub mod admin_repo;
pub mod product_repo;
pub mod variant_repo;

pub use admin_repo::AdminRepo;
pub use product_repo::ProductRepo;
pub use variant_repo::VariantRepo;

/// Build a case-insensitive substring pattern for `ILIKE`.
///
/// `%`, `_` and `\` in the user's input are escaped so they match literally.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Treat an empty filter as "no filter". Any other value, surrounding
/// whitespace included, is matched as a literal substring.
pub(crate) fn filter_pattern(filter: Option<&str>) -> Option<String> {
    filter.filter(|f| !f.is_empty()).map(contains_pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_needle_in_wildcards() {
        assert_eq!(contains_pattern("red"), "%red%");
    }

    #[test]
    fn escapes_like_metacharacters() {
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn blank_filter_is_ignored() {
        assert_eq!(filter_pattern(None), None);
        assert_eq!(filter_pattern(Some("")), None);
    }

    #[test]
    fn whitespace_is_part_of_the_filter() {
        assert_eq!(filter_pattern(Some("Red ")).as_deref(), Some("%Red %"));
        assert_eq!(filter_pattern(Some(" ")).as_deref(), Some("% %"));
    }
}
