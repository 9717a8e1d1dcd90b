use std::{fmt::Display, str::FromStr};
use thiserror::Error;

mod var {
    edge_env_var::env_var!(
        pub struct EdgeRunMode;
    );
}

/// Where the function process is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Hosted by the edge runtime on a gateway
    Edge,
    /// Running on a developer machine
    Local,
}

impl RunMode {
    /// Read the mode from `EDGE_RUN_MODE`, falling back to [RunMode::Edge] if it is unset or invalid
    pub fn new_or_edge() -> Self {
        var::EdgeRunMode::new()
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(RunMode::Edge)
    }
}

impl Display for RunMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunMode::Edge => write!(f, "edge"),
            RunMode::Local => write!(f, "local"),
        }
    }
}

/// Represents a value which cannot be converted into a [RunMode]
#[derive(Debug, Error)]
#[error("Could not convert {0} into a run mode")]
pub struct UnknownRunMode(String);

impl FromStr for RunMode {
    type Err = UnknownRunMode;

    fn from_str(s: &str) -> Result<Self, UnknownRunMode> {
        match s {
            "edge" => Ok(RunMode::Edge),
            "local" => Ok(RunMode::Local),
            s => Err(UnknownRunMode(s.to_string())),
        }
    }
}
