use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::shared::validation::VERSION_REGEX;

/// Dotted numeric app version such as `2.2.0`.
///
/// Compared component by component; missing trailing components count as
/// zero, so `2.2` and `2.2.0` are equal.
#[derive(Debug, Clone)]
pub struct AppVersion {
    components: Vec<u64>,
}

impl AppVersion {
    fn component(&self, index: usize) -> u64 {
        self.components.get(index).copied().unwrap_or(0)
    }
}

impl FromStr for AppVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !VERSION_REGEX.is_match(s) {
            return Err(format!(
                "Invalid version '{}', expected dotted numbers like 2.2.0",
                s
            ));
        }

        let components = s
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| format!("Version component '{}' is out of range", part))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { components })
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

impl Ord for AppVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for AppVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for AppVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AppVersion {}
