//! Per-view selection state
//!
//! The transient search/filter/sort parameters of a view. Reset to
//! defaults on view mount, mutated only by user input, never sent to the
//! gateway.

use shared::EmployeeStatus;

/// Sortable employee attribute
///
/// All sorts compare the string form of the attribute, case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Email,
    Position,
    Status,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Department filter selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(String),
}

/// Status filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EmployeeStatus),
}

/// Selection state owned by a single view
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub search: String,
    pub department: DepartmentFilter,
    pub status: StatusFilter,
    pub sort_field: SortField,
    pub direction: SortDirection,
}

impl SelectionState {
    /// Mount-time defaults: empty search, both filters wide open, name
    /// ascending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Column-header click: the active field flips direction, a new field
    /// resets to ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.direction = self.direction.flipped();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Ascending;
        }
    }
}
