use serde::{Deserialize, Serialize};

use super::effect::EffectMap;
use super::gate::Gate;
use super::route::RouteKey;

/// A side event as authored: identity and flavor only.
/// Gates, tags and options are attached at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideEvent {
    pub id: String,
    pub title: String,
    pub text: String,
}

/// One selectable choice on an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOption {
    pub text: String,
    pub effects: EffectMap,
    pub note: String,
}

/// The three choices shown together on one event.
pub type OptionTriple = [EventOption; 3];

/// A fully assembled event, ready to serialize into the game data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub id: String,
    pub title: String,
    pub text: String,
    pub route: RouteKey,
    pub tags: Vec<String>,
    pub weight: u32,
    pub cooldown_weeks: u32,
    pub gates: Vec<Gate>,
    pub options: OptionTriple,
}
