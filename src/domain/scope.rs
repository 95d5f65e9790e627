//! Match and reset scopes
//!
//! [`MatchScope`] keeps the historical bit values (`NAMED = 1`, `HISTORY = 2`,
//! `BOTH = 3`) so scripts that pass raw numbers keep working.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

/// Which parts of the store a keyword search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchScope(u8);

impl MatchScope {
    pub const NAMED: Self = Self(1);
    pub const HISTORY: Self = Self(2);
    pub const BOTH: Self = Self(3);

    /// Builds a scope from its raw bits; `None` for anything outside 1..=3
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            1..=3 => Some(Self(bits)),
            _ => None,
        }
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn includes_named(self) -> bool {
        self.contains(Self::NAMED)
    }

    pub fn includes_history(self) -> bool {
        self.contains(Self::HISTORY)
    }
}

impl Default for MatchScope {
    fn default() -> Self {
        Self::BOTH
    }
}

impl BitOr for MatchScope {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for MatchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => write!(f, "named"),
            2 => write!(f, "history"),
            _ => write!(f, "both"),
        }
    }
}

impl FromStr for MatchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "named" | "name" | "1" => Ok(Self::NAMED),
            "history" | "hist" | "2" => Ok(Self::HISTORY),
            "both" | "all" | "3" => Ok(Self::BOTH),
            other => Err(format!(
                "unknown scope '{}', expected one of: named, history, both",
                other
            )),
        }
    }
}

/// Which parts of the store a reset clears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetScope {
    /// Named paths and history
    #[default]
    All,
    Named,
    History,
}

impl ResetScope {
    /// Maps the raw reset flag: 0 clears both, 1 named only, 2 and up history only
    pub fn from_flag(flag: u8) -> Self {
        match flag {
            0 => ResetScope::All,
            1 => ResetScope::Named,
            _ => ResetScope::History,
        }
    }

    pub fn flag(self) -> u8 {
        match self {
            ResetScope::All => 0,
            ResetScope::Named => 1,
            ResetScope::History => 2,
        }
    }

    pub fn clears_named(self) -> bool {
        matches!(self, ResetScope::All | ResetScope::Named)
    }

    pub fn clears_history(self) -> bool {
        matches!(self, ResetScope::All | ResetScope::History)
    }
}

impl From<MatchScope> for ResetScope {
    fn from(scope: MatchScope) -> Self {
        match scope {
            MatchScope::NAMED => ResetScope::Named,
            MatchScope::HISTORY => ResetScope::History,
            _ => ResetScope::All,
        }
    }
}
