//! Maintenance status of a repository

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const VALID_STATUSES: [&str; 5] = [
    "developed",
    "maintained",
    "unmaintained",
    "end-of-life",
    "orphaned",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Developed,
    Maintained,
    Unmaintained,
    EndOfLife,
    Orphaned,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Developed => "developed",
            Status::Maintained => "maintained",
            Status::Unmaintained => "unmaintained",
            Status::EndOfLife => "end-of-life",
            Status::Orphaned => "orphaned",
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "developed" => Ok(Status::Developed),
            "maintained" => Ok(Status::Maintained),
            "unmaintained" => Ok(Status::Unmaintained),
            "end-of-life" => Ok(Status::EndOfLife),
            "orphaned" => Ok(Status::Orphaned),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
