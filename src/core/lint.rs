/// Route table linting — catches data mistakes before anything is written.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::hash_map::Entry;

use crate::core::tables::RouteTables;

/// Findings from a lint pass. Errors block generation; warnings do not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub fn lint(tables: &RouteTables) -> LintReport {
    let mut report = LintReport::default();

    // Where each id was first defined, for duplicate messages
    let mut first_seen: FxHashMap<&str, &str> = FxHashMap::default();
    let mut listed: FxHashSet<&str> = FxHashSet::default();

    for route in &tables.routes {
        let name = route.route.as_str();

        if !listed.insert(name) {
            report
                .errors
                .push(format!("Route '{}' appears more than once", name));
        }

        if !route.route.is_known() {
            report.warnings.push(format!(
                "Route '{}' has no dedicated gate window; its events use termMin 7",
                name
            ));
        }

        if route.events.is_empty() {
            report
                .warnings
                .push(format!("Route '{}' has no events", name));
        } else {
            match tables.pool_for(&route.route) {
                None => report
                    .errors
                    .push(format!("Route '{}' has events but no option pool", name)),
                Some([]) => report
                    .errors
                    .push(format!("Route '{}' has an empty option pool", name)),
                Some(_) => {}
            }
        }

        for (i, event) in route.events.iter().enumerate() {
            if event.id.trim().is_empty() {
                report
                    .errors
                    .push(format!("Route '{}' event #{} has an empty id", name, i + 1));
                continue;
            }
            match first_seen.entry(event.id.as_str()) {
                Entry::Occupied(other) => report.errors.push(format!(
                    "Event id '{}' in route '{}' is already used in route '{}'",
                    event.id,
                    name,
                    other.get()
                )),
                Entry::Vacant(slot) => {
                    slot.insert(name);
                }
            }
            if event.title.trim().is_empty() {
                report
                    .warnings
                    .push(format!("Event '{}' has an empty title", event.id));
            }
            if event.text.trim().is_empty() {
                report
                    .warnings
                    .push(format!("Event '{}' has an empty text", event.id));
            }
        }
    }

    let routes: FxHashSet<&str> = tables.routes.iter().map(|r| r.route.as_str()).collect();
    let mut pool_names: Vec<&str> = tables.option_pools.keys().map(|k| k.as_str()).collect();
    // Hash order is not stable across runs
    pool_names.sort_unstable();

    for name in pool_names {
        if !routes.contains(name) {
            report
                .warnings
                .push(format!("Option pool '{}' is not used by any route", name));
        }
        let Some(pool) = tables.pool_for(&name.into()) else {
            continue;
        };
        for (t, triple) in pool.iter().enumerate() {
            for option in triple {
                for stat in option.effects.repeated_stats() {
                    report.warnings.push(format!(
                        "Option '{}' in pool '{}' triple #{} sets '{}' more than once",
                        option.text,
                        name,
                        t + 1,
                        stat.key()
                    ));
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tables::RouteEvents;
    use crate::schema::effect::{EffectMap, Stat};
    use crate::schema::route::RouteKey;
    use crate::schema::side_event::SideEvent;

    #[test]
    fn embedded_tables_are_clean() {
        let report = lint(&RouteTables::embedded().unwrap());
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn duplicate_id_names_both_routes() {
        let mut tables = RouteTables::embedded().unwrap();
        tables.routes[1].events[3].id = "PG_SIDE_02".to_string();
        let report = lint(&tables);
        assert_eq!(
            report.errors,
            vec!["Event id 'PG_SIDE_02' in route 'kaoyan' is already used in route 'pg'".to_string()]
        );
    }

    #[test]
    fn missing_and_unused_pools() {
        let mut tables = RouteTables::embedded().unwrap();
        let pool = tables.option_pools.remove(&RouteKey::Pg).unwrap();
        tables.option_pools.insert(RouteKey::from("pgx"), pool);
        let report = lint(&tables);
        assert!(report.has_errors());
        assert!(report
            .errors
            .contains(&"Route 'pg' has events but no option pool".to_string()));
        assert!(report
            .warnings
            .contains(&"Option pool 'pgx' is not used by any route".to_string()));
    }

    #[test]
    fn unknown_and_empty_routes_warn() {
        let mut tables = RouteTables::embedded().unwrap();
        tables.routes.push(RouteEvents {
            route: RouteKey::from("startup"),
            events: Vec::new(),
        });
        let report = lint(&tables);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[1].contains("no events"));
    }

    #[test]
    fn split_route_is_an_error() {
        let mut tables = RouteTables::embedded().unwrap();
        let tail = tables.routes[1].events.split_off(12);
        tables.routes.push(RouteEvents {
            route: RouteKey::Kaoyan,
            events: tail,
        });
        let report = lint(&tables);
        assert_eq!(
            report.errors,
            vec!["Route 'kaoyan' appears more than once".to_string()]
        );
    }

    #[test]
    fn empty_id_and_blank_text() {
        let mut tables = RouteTables::embedded().unwrap();
        tables.routes[2].events[0] = SideEvent {
            id: " ".to_string(),
            title: "t".to_string(),
            text: "x".to_string(),
        };
        tables.routes[2].events[1].text = String::new();
        let report = lint(&tables);
        assert_eq!(report.errors, vec!["Route 'abroad' event #1 has an empty id".to_string()]);
        assert_eq!(
            report.warnings,
            vec!["Event 'AB_SIDE_02' has an empty text".to_string()]
        );
    }

    #[test]
    fn repeated_stat_in_effects() {
        let mut tables = RouteTables::embedded().unwrap();
        if let Some(pool) = tables.option_pools.get_mut(&RouteKey::Qiuzhao) {
            pool[1][0].effects = EffectMap::new([(Stat::Energy, -1), (Stat::Energy, -2)]);
        }
        let report = lint(&tables);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("'energy' more than once"));
    }
}
