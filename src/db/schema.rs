//! SQL DDL for the cat submissions table.

/// Three free-text columns; no id, no constraints, no indexes.
/// Rows keep insertion order through SQLite's implicit `rowid`.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS cats (
    name TEXT,
    coat TEXT,
    donut TEXT
);
"#;
