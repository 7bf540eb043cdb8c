use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkLocation {
    Office,       // O
    WorkFromHome, // H
}

impl WorkLocation {
    pub fn code(&self) -> &str {
        match self {
            WorkLocation::Office => "O",
            WorkLocation::WorkFromHome => "H",
        }
    }

    /// Convert enum → wire string (what the backend expects in clock-in)
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            WorkLocation::Office => "office",
            WorkLocation::WorkFromHome => "work_from_home",
        }
    }

    /// Convert wire string → enum
    pub fn from_wire_str(s: &str) -> Option<Self> {
        match s {
            "office" => Some(WorkLocation::Office),
            "work_from_home" => Some(WorkLocation::WorkFromHome),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (short code or full name,
    /// case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "O" | "OFFICE" => Some(WorkLocation::Office),
            "H" | "HOME" | "WFH" | "WORK_FROM_HOME" => Some(WorkLocation::WorkFromHome),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkLocation::Office => "Office",
            WorkLocation::WorkFromHome => "Work From Home",
        }
    }
}
