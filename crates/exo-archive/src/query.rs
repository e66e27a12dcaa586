//! ADQL query construction for the archive's TAP sync endpoint.

use exo_core::record::ARCHIVE_COLUMNS;

/// NASA Exoplanet Archive TAP synchronous query endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";

/// Planetary-systems table; `default_flag = 1` selects one solution per planet.
const TABLE: &str = "ps";

/// A planet search against the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveQuery {
    search: String,
    limit: u32,
}

impl ArchiveQuery {
    /// Build a query. An empty or all-whitespace `search` applies no name
    /// filter. A `limit` of zero is raised to one.
    #[must_use]
    pub fn new(search: &str, limit: u32) -> Self {
        Self {
            search: search.trim().to_string(),
            limit: limit.max(1),
        }
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// The ADQL statement: fixed columns, optional case-insensitive name
    /// match, newest discoveries first.
    #[must_use]
    pub fn adql(&self) -> String {
        let mut sql = format!(
            "SELECT {} FROM {TABLE} WHERE default_flag = 1",
            ARCHIVE_COLUMNS.join(", ")
        );
        if !self.search.is_empty() {
            sql.push_str(&format!(
                " AND UPPER(pl_name) LIKE UPPER('%{}%')",
                escape_literal(&self.search)
            ));
        }
        sql.push_str(&format!(" ORDER BY disc_year DESC LIMIT {}", self.limit));
        sql
    }

    /// Full GET URL against `endpoint`, requesting JSON rows.
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{endpoint}?query={}&format=json",
            urlencoding::encode(&self.adql())
        )
    }
}

/// Escape a value for use inside a single-quoted ADQL string literal.
fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}
