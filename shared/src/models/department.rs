//! Department Model

use serde::{Deserialize, Serialize};

/// Department entity
///
/// Static reference set; not created or deleted by this core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: String,
    pub name: String,
}

/// The fixed department set served by the gateway
pub const DEPARTMENT_NAMES: [&str; 6] = [
    "HR",
    "Development",
    "Finance",
    "Marketing",
    "Operations",
    "Sales",
];

impl Department {
    /// The builtin six departments, used identically as filter options and
    /// form choices. Identifiers equal names in this set.
    pub fn builtin() -> Vec<Department> {
        DEPARTMENT_NAMES
            .iter()
            .map(|name| Department {
                id: (*name).to_string(),
                name: (*name).to_string(),
            })
            .collect()
    }
}
