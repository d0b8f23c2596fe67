use serde::{Deserialize, Serialize};

use super::route::RouteKey;

/// An eligibility window for a side event.
///
/// All bounds are inclusive and optional; an absent bound does not
/// restrict. The game evaluates gates against its own term, week and
/// active route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    pub route: RouteKey,
    pub term_min: Option<u32>,
    pub term_max: Option<u32>,
    pub week_min: Option<u32>,
    pub week_max: Option<u32>,
}

impl Gate {
    /// A gate open from `term_min` onward, any week.
    pub fn from_term(route: &RouteKey, term_min: u32) -> Self {
        Self {
            route: route.clone(),
            term_min: Some(term_min),
            term_max: None,
            week_min: None,
            week_max: None,
        }
    }

    /// A gate covering weeks `weeks.0..=weeks.1` of the single term `term`.
    pub fn term_weeks(route: &RouteKey, term: u32, weeks: (u32, u32)) -> Self {
        Self {
            route: route.clone(),
            term_min: Some(term),
            term_max: Some(term),
            week_min: Some(weeks.0),
            week_max: Some(weeks.1),
        }
    }
}

/// Gates for the event at `index` (zero-based) within `route`'s list.
///
/// Kaoyan and gongkao split their events between the seventh and eighth
/// terms by position; the other routes gate every event the same way.
pub fn route_gates(route: &RouteKey, index: usize) -> Vec<Gate> {
    match route {
        RouteKey::Pg => vec![Gate::term_weeks(route, 7, (1, 4))],
        RouteKey::Qiuzhao => vec![
            Gate::term_weeks(route, 7, (4, 16)),
            Gate::from_term(route, 8),
        ],
        RouteKey::Abroad => vec![
            Gate::term_weeks(route, 7, (1, 16)),
            Gate::term_weeks(route, 8, (1, 9)),
        ],
        RouteKey::Kaoyan if index < 12 => vec![Gate::term_weeks(route, 7, (1, 12))],
        RouteKey::Kaoyan => vec![Gate::term_weeks(route, 8, (1, 8))],
        RouteKey::Gongkao if index < 14 => vec![Gate::term_weeks(route, 7, (1, 11))],
        RouteKey::Gongkao => vec![Gate::term_weeks(route, 8, (1, 3))],
        RouteKey::Other(_) => vec![Gate::from_term(route, 7)],
    }
}
