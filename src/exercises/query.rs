//! Listing query composition: visibility predicate, free-text filter and
//! whitelisted sort, assembled with bind parameters.

use sqlx::{Postgres, QueryBuilder};

/// Builds the listing query for the given caller.
///
/// Visibility: public rows, plus the caller's own private rows when
/// authenticated. A non-empty filter matches case-insensitively as a
/// substring against name, description and difficulty. The sort key must be
/// on the whitelist; anything else leaves the result in default order.
pub fn compose_list_query<'a>(
    caller: Option<i64>,
    filter: Option<&str>,
    sort: Option<&str>,
) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::new(
        "SELECT id, name, description, difficulty, is_public, created_by, created_at, updated_at \
         FROM exercises WHERE (is_public = TRUE",
    );

    if let Some(user_id) = caller {
        builder
            .push(" OR (created_by = ")
            .push_bind(user_id)
            .push(" AND is_public = FALSE)");
    }
    builder.push(")");

    if let Some(filter) = filter.filter(|f| !f.is_empty()) {
        let pattern = format!("%{filter}%");
        builder
            .push(" AND (name ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR description ILIKE ")
            .push_bind(pattern.clone())
            .push(" OR difficulty ILIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(column) = sort_column(sort) {
        builder.push(" ORDER BY ").push(column).push(" ASC");
    }

    builder
}

/// Maps a client-supplied sort key to a column. Unknown keys are ignored
/// rather than rejected; only ascending order exists.
fn sort_column(sort: Option<&str>) -> Option<&'static str> {
    match sort? {
        "difficulty" => Some("difficulty"),
        "name" => Some("name"),
        "createdAt" => Some("created_at"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_caller_sees_only_public_rows() {
        let builder = compose_list_query(None, None, None);
        let sql = builder.sql();
        assert!(sql.contains("WHERE (is_public = TRUE)"));
        assert!(!sql.contains("created_by ="));
        assert!(!sql.contains("ORDER BY"));
    }

    #[test]
    fn authenticated_caller_also_sees_own_private_rows() {
        let builder = compose_list_query(Some(5), None, None);
        let sql = builder.sql();
        assert!(sql.contains("OR (created_by = $1 AND is_public = FALSE)"));
    }

    #[test]
    fn filter_matches_all_three_text_fields() {
        let builder = compose_list_query(None, Some("abc"), None);
        let sql = builder.sql();
        assert!(sql.contains("name ILIKE $1"));
        assert!(sql.contains("description ILIKE $2"));
        assert!(sql.contains("difficulty ILIKE $3"));
    }

    #[test]
    fn empty_filter_behaves_as_absent() {
        let builder = compose_list_query(None, Some(""), None);
        assert!(!builder.sql().contains("ILIKE"));
    }

    #[test]
    fn filter_composes_with_visibility_for_authenticated_caller() {
        let builder = compose_list_query(Some(5), Some("abc"), None);
        let sql = builder.sql();
        assert!(sql.contains("OR (created_by = $1 AND is_public = FALSE)"));
        assert!(sql.contains("AND (name ILIKE $2"));
    }

    #[test]
    fn whitelisted_sort_keys_order_ascending() {
        let sql = compose_list_query(None, None, Some("difficulty"))
            .sql()
            .to_string();
        assert!(sql.ends_with("ORDER BY difficulty ASC"));

        let sql = compose_list_query(None, None, Some("name"))
            .sql()
            .to_string();
        assert!(sql.ends_with("ORDER BY name ASC"));

        let sql = compose_list_query(None, None, Some("createdAt"))
            .sql()
            .to_string();
        assert!(sql.ends_with("ORDER BY created_at ASC"));
    }

    #[test]
    fn unknown_sort_key_is_ignored() {
        let builder = compose_list_query(None, None, Some("bogus"));
        assert!(!builder.sql().contains("ORDER BY"));
    }

    #[test]
    fn sort_column_whitelist() {
        assert_eq!(sort_column(Some("createdAt")), Some("created_at"));
        assert_eq!(sort_column(Some("updatedAt")), None);
        assert_eq!(sort_column(Some("id; DROP TABLE exercises")), None);
        assert_eq!(sort_column(None), None);
    }
}
