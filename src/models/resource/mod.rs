// Resource module
// A schedulable row in the calendar grid

use serde::{Deserialize, Serialize};

/// A resource (a row in the grid) that events are scheduled against.
///
/// Resources are created via an explicit add action; there is no update or
/// delete lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
}

impl Resource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
