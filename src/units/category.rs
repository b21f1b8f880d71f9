use crate::units::table::{UnitTable, LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit categories served by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
}

impl UnitCategory {
    /// Resolve a route segment such as "length"
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "length" => Some(UnitCategory::Length),
            _ => None,
        }
    }

    pub fn all() -> &'static [UnitCategory] {
        &[UnitCategory::Length]
    }

    /// Route segment for this category
    pub fn segment(&self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
        }
    }

    /// Capitalised noun used at the start of messages
    pub fn label(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
        }
    }

    pub fn base_unit(&self) -> &'static str {
        match self {
            UnitCategory::Length => "meter",
        }
    }

    pub fn table(&self) -> &'static UnitTable {
        match self {
            UnitCategory::Length => &*LENGTH,
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segment())
    }
}
