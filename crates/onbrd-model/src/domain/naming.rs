//! Naming conventions shared by declarations and loaders.

/// Suffix appended to a snake-cased type name to form the conventional foreign key.
pub const FOREIGN_KEY_SUFFIX: &str = "_id";

/// Convert a type name to snake case: `"JobCategory"` -> `"job_category"`.
///
/// Namespaced names keep only the last segment (`"Public::Job"` -> `"job"`). An uppercase
/// run is treated as one word that ends before its last capital when a lowercase letter
/// follows (`"HTTPResource"` -> `"http_resource"`).
pub fn snake_case(type_name: &str) -> String {
    let base = type_name.rsplit("::").next().unwrap_or(type_name);

    let mut out = String::with_capacity(base.len() + 4);
    let mut prev: Option<char> = None;
    let mut chars = base.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch.is_uppercase() {
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => chars.peek().is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }
    out
}

/// Conventional foreign key pointing at `type_name`: `"Tag"` -> `"tag_id"`.
pub fn default_foreign_key(type_name: &str) -> String {
    format!("{}{FOREIGN_KEY_SUFFIX}", snake_case(type_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_handles_common_shapes() {
        assert_eq!(snake_case("Tag"), "tag");
        assert_eq!(snake_case("JobCategory"), "job_category");
        assert_eq!(snake_case("Public::Job"), "job");
        assert_eq!(snake_case("already_snake"), "already_snake");
        assert_eq!(snake_case("HTTPResource"), "http_resource");
        assert_eq!(snake_case("APIKey"), "api_key");
        assert_eq!(snake_case("JobURL"), "job_url");
    }

    #[test]
    fn default_foreign_key_appends_suffix() {
        assert_eq!(default_foreign_key("Tag"), "tag_id");
        assert_eq!(default_foreign_key("Company"), "company_id");
        assert_eq!(default_foreign_key("JobCategory"), "job_category_id");
        assert_eq!(default_foreign_key("HTTPResource"), "http_resource_id");
    }
}
