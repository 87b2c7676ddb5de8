//! CSV bulk loader.
//!
//! # Responsibility
//! - Ensure the `automobiles` table exists.
//! - Insert one row per CSV record, sequentially and in file order.
//!
//! # Invariants
//! - Header names `make`, `model`, `year`, `vin` are matched case-sensitively;
//!   other columns are ignored.
//! - No transaction wraps the run: the first failing row aborts, and rows
//!   inserted before it stay.

use crate::db::migrations::apply_migrations;
use crate::db::DbError;
use csv::StringRecord;
use log::{error, info};
use rusqlite::{params, Connection};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use thiserror::Error;

const REQUIRED_COLUMNS: [&str; 4] = ["make", "model", "year", "vin"];

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open `{path}`: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}` in header")]
    MissingColumn(&'static str),
    #[error("line {line}: year `{value}` is not an integer")]
    InvalidYear { line: u64, value: String },
    #[error("{0}")]
    Db(#[from] DbError),
}

impl From<rusqlite::Error> for LoadError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Outcome of a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: u64,
}

/// Loads the CSV file at `path` into `conn`.
pub fn load_csv(conn: &mut Connection, path: impl AsRef<Path>) -> LoadResult<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;
    load_csv_reader(conn, file)
}

/// Loads CSV data from any reader into `conn`.
///
/// The first record is treated as the header row.
pub fn load_csv_reader<R: Read>(conn: &mut Connection, reader: R) -> LoadResult<LoadReport> {
    let started_at = Instant::now();
    info!("event=bulk_load module=loader status=start");

    match run_load(conn, reader) {
        Ok(report) => {
            info!(
                "event=bulk_load module=loader status=ok inserted={} duration_ms={}",
                report.inserted,
                started_at.elapsed().as_millis()
            );
            Ok(report)
        }
        Err(err) => {
            error!(
                "event=bulk_load module=loader status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn run_load<R: Read>(conn: &mut Connection, reader: R) -> LoadResult<LoadReport> {
    apply_migrations(conn)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let columns = ColumnIndexes::from_headers(csv_reader.headers()?)?;

    let mut stmt =
        conn.prepare("INSERT INTO automobiles (make, model, year, vin) VALUES (?1, ?2, ?3, ?4);")?;
    let mut inserted = 0_u64;
    let mut record = StringRecord::new();

    while csv_reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |pos| pos.line());
        let year = parse_year(record.get(columns.year), line)?;
        stmt.execute(params![
            record.get(columns.make),
            record.get(columns.model),
            year,
            record.get(columns.vin),
        ])?;
        inserted += 1;
    }

    Ok(LoadReport { inserted })
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndexes {
    make: usize,
    model: usize,
    year: usize,
    vin: usize,
}

impl ColumnIndexes {
    fn from_headers(headers: &StringRecord) -> LoadResult<Self> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        let [make, model, year, vin] = REQUIRED_COLUMNS;
        Ok(Self {
            make: position(make)?,
            model: position(model)?,
            year: position(year)?,
            vin: position(vin)?,
        })
    }
}

fn parse_year(value: Option<&str>, line: u64) -> LoadResult<Option<i32>> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| LoadError::InvalidYear {
            line,
            value: raw.to_string(),
        })
}
