//! Listing store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable create/list/count/delete APIs over the `visualizations`
//!   table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Visualization::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Listing order is creation order: `created_at ASC, rowid ASC`.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::visualization::{VizId, VizType, VizValidationError, Visualization};
use rusqlite::{params, Connection, Row};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const LISTING_TABLE: &str = "visualizations";
const REQUIRED_COLUMNS: &[&str] = &["uuid", "type", "name", "created_at"];

const VIZ_SELECT_SQL: &str = "SELECT
    uuid,
    type,
    name,
    created_at
FROM visualizations";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for listing persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(VizValidationError),
    Db(DbError),
    InvalidData(String),
    /// Connection has no migrations applied (or is behind this binary).
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted visualization data: {message}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is behind required {expected_version}; \
                 open it through db::open_db so migrations run"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<VizValidationError> for RepoError {
    fn from(value: VizValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Listing store contract for visualization records.
pub trait ListingRepository {
    fn create_visualization(&self, viz: &Visualization) -> RepoResult<VizId>;
    fn get_visualization(&self, id: VizId) -> RepoResult<Option<Visualization>>;
    /// Fresh snapshot in creation order; repeated calls reflect current state.
    fn list_visualizations(&self) -> RepoResult<Vec<Visualization>>;
    /// Exact row count; always equals `list_visualizations().len()`.
    fn count_visualizations(&self) -> RepoResult<u64>;
    /// Hard delete. Returns whether the id existed; absence is not an error.
    fn delete_visualization(&self, id: VizId) -> RepoResult<bool>;
    /// Removes every row in one statement; idempotent. Returns rows removed.
    fn delete_all_visualizations(&self) -> RepoResult<usize>;
}

/// SQLite-backed listing repository.
pub struct SqliteListingRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteListingRepository<'conn> {
    /// Wraps a connection after verifying its schema is usable.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   was tampered with or created out-of-band.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version < expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: bool = conn.query_row(
            "SELECT EXISTS (
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
             );",
            [LISTING_TABLE],
            |row| row.get(0),
        )?;
        if !table_exists {
            return Err(RepoError::MissingRequiredTable(LISTING_TABLE));
        }

        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
        let existing_columns = stmt
            .query_map([LISTING_TABLE], |row| row.get::<_, String>(0))?
            .collect::<Result<HashSet<_>, _>>()?;
        for &column in REQUIRED_COLUMNS {
            if !existing_columns.contains(column) {
                return Err(RepoError::MissingRequiredColumn {
                    table: LISTING_TABLE,
                    column,
                });
            }
        }

        Ok(Self { conn })
    }
}

impl ListingRepository for SqliteListingRepository<'_> {
    fn create_visualization(&self, viz: &Visualization) -> RepoResult<VizId> {
        viz.validate()?;

        self.conn.execute(
            "INSERT INTO visualizations (uuid, type, name, created_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                viz.uuid.to_string(),
                viz_type_to_db(viz.kind),
                viz.name.as_str(),
                viz.created_at,
            ],
        )?;

        Ok(viz.uuid)
    }

    fn get_visualization(&self, id: VizId) -> RepoResult<Option<Visualization>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{VIZ_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_viz_row(row)?));
        }

        Ok(None)
    }

    fn list_visualizations(&self) -> RepoResult<Vec<Visualization>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{VIZ_SELECT_SQL} ORDER BY created_at ASC, rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_viz_row(row)?);
        }

        Ok(items)
    }

    fn count_visualizations(&self) -> RepoResult<u64> {
        let count: u64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM visualizations;", [], |row| row.get(0))?;
        Ok(count)
    }

    fn delete_visualization(&self, id: VizId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM visualizations WHERE uuid = ?1;",
            [id.to_string()],
        )?;
        Ok(changed > 0)
    }

    fn delete_all_visualizations(&self) -> RepoResult<usize> {
        let changed = self.conn.execute("DELETE FROM visualizations;", [])?;
        Ok(changed)
    }
}

fn parse_viz_row(row: &Row<'_>) -> RepoResult<Visualization> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{uuid_text}` in visualizations.uuid"
        ))
    })?;

    let type_text: String = row.get("type")?;
    let kind = parse_viz_type(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid visualization type `{type_text}` in visualizations.type"
        ))
    })?;

    let viz = Visualization {
        uuid,
        kind,
        name: row.get("name")?,
        created_at: row.get("created_at")?,
    };
    viz.validate()?;
    Ok(viz)
}

fn viz_type_to_db(kind: VizType) -> &'static str {
    match kind {
        VizType::Markdown => "markdown",
        VizType::Metric => "metric",
        VizType::Table => "table",
    }
}

fn parse_viz_type(value: &str) -> Option<VizType> {
    match value {
        "markdown" => Some(VizType::Markdown),
        "metric" => Some(VizType::Metric),
        "table" => Some(VizType::Table),
        _ => None,
    }
}
