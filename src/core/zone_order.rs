use crate::errors::{Error, Result};
use serde::Serialize;
use tracing::warn;

/// Zone order used when neither the caller nor the config file supplies one.
pub const DEFAULT_ZONE_ORDER: [&str; 8] = [
    "Infeed",
    "Wheel1",
    "Wheel2",
    "Wheel3",
    "Exit",
    "Stamp",
    "InnerLiner",
    "OuterLiner",
];

/// Ordered list of zone names that drives the sort order of output pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ZoneOrder {
    zones: Vec<String>,
}

impl ZoneOrder {
    /// Build a zone order from user input.
    ///
    /// Names are trimmed and blank entries dropped. A name repeated with
    /// different case keeps only its first position. An order with no zones
    /// left is rejected.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut zones: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if zones.iter().any(|z| z.eq_ignore_ascii_case(name)) {
                warn!(zone = name, "zone listed more than once; keeping first position");
                continue;
            }
            zones.push(name.to_string());
        }

        if zones.is_empty() {
            return Err(Error::config("zone order must contain at least one zone"));
        }
        Ok(Self { zones })
    }

    pub fn as_slice(&self) -> &[String] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(String::as_str)
    }
}

impl Default for ZoneOrder {
    fn default() -> Self {
        Self {
            zones: DEFAULT_ZONE_ORDER.iter().map(|z| z.to_string()).collect(),
        }
    }
}
