//! Read-only column registry port.

use crate::board::domain::{Column, ColumnState};

/// Lookup contract for the board's configured columns.
///
/// Registries are immutable once built, so implementations are shared across
/// concurrent moves without locking.
pub trait ColumnRegistry: Send + Sync {
    /// Returns all columns in board order.
    fn get_all(&self) -> &[Column];

    /// Returns the column playing the given role.
    ///
    /// Returns `None` when no column is assigned the state.
    fn get_by_state(&self, state: ColumnState) -> Option<&Column>;

    /// Returns the column with the given name, compared case-insensitively.
    fn get_by_name(&self, name: &str) -> Option<&Column> {
        self.get_all()
            .iter()
            .find(|column| column.name().eq_ignore_ascii_case(name.trim()))
    }
}
