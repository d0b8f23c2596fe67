/// Route tables — loading, merging and counting the side-event data.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::Path;
use thiserror::Error;

use crate::schema::route::RouteKey;
use crate::schema::side_event::{OptionTriple, SideEvent};

/// The dataset compiled into the crate.
pub const EMBEDDED_TABLES: &str = include_str!("../../route_data/side_events.ron");

#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Output constants shared by every generated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Comment line written before the first event block.
    pub header: String,
    pub weight: u32,
    pub cooldown_weeks: u32,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            header: "    // ========= 支线随机（扩容） =========".to_string(),
            weight: 6,
            cooldown_weeks: 4,
        }
    }
}

// A present `settings` block is written bare, not as `Some(..)`, so the
// option only records whether the file had one.
mod settings_block {
    use super::*;

    pub fn serialize<S: Serializer>(
        settings: &Option<GeneratorSettings>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match settings {
            Some(s) => s.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<GeneratorSettings>, D::Error> {
        GeneratorSettings::deserialize(deserializer).map(Some)
    }
}

/// The events of one route, in authoring order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEvents {
    pub route: RouteKey,
    pub events: Vec<SideEvent>,
}

/// Everything the generator reads: per-route events and per-route
/// option pools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteTables {
    /// `None` when the data carried no `settings` block.
    #[serde(default, with = "settings_block", skip_serializing_if = "Option::is_none")]
    pub settings: Option<GeneratorSettings>,
    pub routes: Vec<RouteEvents>,
    pub option_pools: FxHashMap<RouteKey, Vec<OptionTriple>>,
}

impl RouteTables {
    /// Load route tables from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<RouteTables, TableError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse route tables from a RON string.
    pub fn parse_ron(input: &str) -> Result<RouteTables, TableError> {
        Ok(ron::from_str(input)?)
    }

    /// The dataset shipped with the crate.
    pub fn embedded() -> Result<RouteTables, TableError> {
        Self::parse_ron(EMBEDDED_TABLES)
    }

    /// Merge another set of tables into this one.
    ///
    /// A route present in both keeps its position here but takes its
    /// events from `other`; new routes are appended. Pools from `other`
    /// take precedence, and so do its settings if it has a block.
    pub fn merge(&mut self, other: RouteTables) {
        for incoming in other.routes {
            match self.routes.iter_mut().find(|r| r.route == incoming.route) {
                Some(existing) => existing.events = incoming.events,
                None => self.routes.push(incoming),
            }
        }
        for (route, pool) in other.option_pools {
            self.option_pools.insert(route, pool);
        }
        if other.settings.is_some() {
            self.settings = other.settings;
        }
    }

    /// The effective settings, defaults filled in.
    pub fn settings(&self) -> GeneratorSettings {
        self.settings.clone().unwrap_or_default()
    }

    pub fn events_for(&self, route: &RouteKey) -> Option<&[SideEvent]> {
        self.routes
            .iter()
            .find(|r| &r.route == route)
            .map(|r| r.events.as_slice())
    }

    pub fn pool_for(&self, route: &RouteKey) -> Option<&[OptionTriple]> {
        self.option_pools.get(route).map(Vec::as_slice)
    }

    /// Total number of events across all routes.
    pub fn event_count(&self) -> usize {
        self.routes.iter().map(|r| r.events.len()).sum()
    }

    /// Event count per route, in route order.
    pub fn route_counts(&self) -> Vec<(RouteKey, usize)> {
        self.routes
            .iter()
            .map(|r| (r.route.clone(), r.events.len()))
            .collect()
    }
}
