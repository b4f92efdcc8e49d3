//! In-memory column registry.

use crate::board::{
    config::BoardConfig,
    domain::{BoardDomainError, Column, ColumnState},
    ports::ColumnRegistry,
};

/// Column registry backed by a validated, immutable column list.
#[derive(Debug, Clone)]
pub struct InMemoryColumnRegistry {
    columns: Vec<Column>,
}

impl InMemoryColumnRegistry {
    /// Builds a registry from a board configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] when the configuration is inconsistent.
    pub fn from_config(config: BoardConfig) -> Result<Self, BoardDomainError> {
        Ok(Self {
            columns: config.into_columns()?,
        })
    }

    /// Builds a registry from already resolved columns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoard`] for an empty list.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, BoardDomainError> {
        if columns.is_empty() {
            return Err(BoardDomainError::EmptyBoard);
        }
        Ok(Self { columns })
    }

    /// Builds the registry for the standard board.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`BoardConfig::default`].
    pub fn standard() -> Result<Self, BoardDomainError> {
        Self::from_config(BoardConfig::default())
    }
}

impl ColumnRegistry for InMemoryColumnRegistry {
    fn get_all(&self) -> &[Column] {
        &self.columns
    }

    fn get_by_state(&self, state: ColumnState) -> Option<&Column> {
        self.columns.iter().find(|column| column.has_state(state))
    }
}
