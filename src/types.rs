// src/types.rs
use std::fmt;

/// `name=time` join key. Result pages only refer to other entrants by name and
/// finish time, so this is what ties a peer row back to that entrant's own page.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameTime(String);

impl NameTime {
    pub fn new(name: &str, time: &str) -> Self {
        Self(join!(name, "=", time))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NameTime {
    /// Wrap an already-joined `name=time` string.
    fn from(s: &str) -> Self {
        Self(s!(s))
    }
}

impl fmt::Display for NameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}
