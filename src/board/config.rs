//! Board configuration.
//!
//! Boards are described as an ordered list of columns. Column roles may be
//! declared explicitly through `states`; undeclared roles are inferred from
//! column order, names and the `closed` flag.
//!
//! # Examples
//!
//! ```
//! use boardsync::board::config::BoardConfig;
//! use boardsync::board::domain::ColumnState;
//!
//! let config = BoardConfig::from_json_str(
//!     r#"{ "columns": [
//!         { "name": "Inbox" },
//!         { "name": "In Progress", "label": "in progress" },
//!         { "name": "Done", "closed": true }
//!     ] }"#,
//! ).expect("valid board");
//!
//! let columns = config.into_columns().expect("consistent board");
//! assert!(columns[2].has_state(ColumnState::Done));
//! ```

use crate::board::domain::{BoardDomainError, Column, ColumnState};
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a board configuration.
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The configuration could not be read.
    #[error("failed to read board configuration {path}: {source}")]
    Read {
        /// Path relative to the configuration directory.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid JSON for a board.
    #[error("malformed board configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// The columns are inconsistent.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
}

/// Configuration for a single column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Display name, unique on the board.
    pub name: String,
    /// Exclusive board-managed label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether issues in the column are closed.
    #[serde(default)]
    pub closed: bool,
    /// Explicit roles; inferred when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<ColumnState>>,
}

impl ColumnConfig {
    fn open(name: &str, label: Option<&str>) -> Self {
        Self {
            name: name.to_owned(),
            label: label.map(str::to_owned),
            closed: false,
            states: None,
        }
    }
}

/// Ordered board layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Columns in board order.
    pub columns: Vec<ColumnConfig>,
}

impl Default for BoardConfig {
    /// The standard six-column board.
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnConfig::open("Inbox", None),
                ColumnConfig::open("Backlog", Some("backlog")),
                ColumnConfig::open("Ready", Some("ready")),
                ColumnConfig::open("In Progress", Some("in progress")),
                ColumnConfig::open("Needs Review", Some("needs review")),
                ColumnConfig {
                    closed: true,
                    ..ColumnConfig::open("Done", None)
                },
            ],
        }
    }
}

impl BoardConfig {
    /// Parses a board configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] for malformed input.
    pub fn from_json_str(raw: &str) -> Result<Self, BoardConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses a JSON board configuration from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Read`] when the file cannot be read and
    /// [`BoardConfigError::Parse`] for malformed content.
    pub fn load(dir: &Dir, path: &str) -> Result<Self, BoardConfigError> {
        let raw = dir
            .read_to_string(path)
            .map_err(|source| BoardConfigError::Read {
                path: path.to_owned(),
                source,
            })?;
        Self::from_json_str(&raw)
    }

    /// Validates the layout and resolves column roles.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] when the board is empty, a column name
    /// is blank, or names or labels repeat.
    pub fn into_columns(self) -> Result<Vec<Column>, BoardDomainError> {
        if self.columns.is_empty() {
            return Err(BoardDomainError::EmptyBoard);
        }

        let mut columns: Vec<Column> = Vec::with_capacity(self.columns.len());
        for config in &self.columns {
            let mut column = Column::new(config.name.as_str())?.with_closed(config.closed);
            if let Some(label) = &config.label {
                column = column.with_label(label.as_str());
            }
            ensure_unique(&columns, &column)?;
            columns.push(column);
        }

        let states = resolve_states(&self.columns, &columns);
        Ok(columns
            .into_iter()
            .zip(states)
            .map(|(column, column_states)| column.with_states(column_states))
            .collect())
    }
}

fn ensure_unique(existing: &[Column], candidate: &Column) -> Result<(), BoardDomainError> {
    if existing
        .iter()
        .any(|column| column.name().eq_ignore_ascii_case(candidate.name()))
    {
        return Err(BoardDomainError::DuplicateColumnName(
            candidate.name().to_owned(),
        ));
    }

    let Some(label) = candidate.label() else {
        return Ok(());
    };
    match existing.iter().find(|column| column.label() == Some(label)) {
        Some(first) => Err(BoardDomainError::DuplicateColumnLabel {
            label: label.to_owned(),
            first: first.name().to_owned(),
            second: candidate.name().to_owned(),
        }),
        None => Ok(()),
    }
}

fn resolve_states(configs: &[ColumnConfig], columns: &[Column]) -> Vec<Vec<ColumnState>> {
    let mut states: Vec<Vec<ColumnState>> = configs
        .iter()
        .map(|config| config.states.clone().unwrap_or_default())
        .collect();

    for state in ColumnState::ALL {
        if states.iter().any(|assigned| assigned.contains(&state)) {
            continue;
        }
        let inferred = match state {
            ColumnState::Default => Some(0),
            ColumnState::InProgress => position_by_name(columns, "in progress"),
            ColumnState::NeedsReview => position_by_name(columns, "needs review"),
            ColumnState::Done => columns.iter().position(Column::closed),
            ColumnState::ExternalContribution => states
                .iter()
                .position(|assigned| assigned.contains(&ColumnState::Default)),
        };
        if let Some(column_states) = inferred.and_then(|index| states.get_mut(index)) {
            column_states.push(state);
        }
    }

    states
}

fn position_by_name(columns: &[Column], name: &str) -> Option<usize> {
    columns
        .iter()
        .position(|column| column.name().eq_ignore_ascii_case(name))
}
