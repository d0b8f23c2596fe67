/// The side-event generator: route tables → output records → text block.
///
/// Each event takes the option triple at its position modulo the route's
/// pool size and the gates its route assigns to that position.

use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::core::lint::{lint, LintReport};
use crate::core::render;
use crate::core::tables::{GeneratorSettings, RouteTables, TableError};
use crate::schema::gate::route_gates;
use crate::schema::route::RouteKey;
use crate::schema::side_event::OutputRecord;

/// File name the game's build step picks the block up from.
pub const DEFAULT_OUTPUT: &str = "event_route_block.txt";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("table error: {0}")]
    Tables(#[from] TableError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("route '{0}' has events but no option pool")]
    MissingOptionPool(RouteKey),
    #[error("route '{0}' has an empty option pool")]
    EmptyOptionPool(RouteKey),
    #[error("duplicate event id: {0}")]
    DuplicateEventId(String),
    #[error("route '{0}' appears more than once")]
    DuplicateRoute(RouteKey),
    #[error("route '{route}' event #{position} has an empty id")]
    EmptyEventId { route: RouteKey, position: usize },
    #[error("no route tables provided")]
    NoTables,
}

/// A validated generator. Built via `Generator::builder()`.
#[derive(Debug)]
pub struct Generator {
    tables: RouteTables,
    settings: GeneratorSettings,
    report: LintReport,
}

/// Builder for constructing a `Generator`.
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    data_path: Option<String>,
    /// Directly provided tables (for testing without files).
    tables: Option<RouteTables>,
    header: Option<String>,
    weight: Option<u32>,
    cooldown_weeks: Option<u32>,
}

impl GeneratorBuilder {
    /// Read tables from a RON file instead of the embedded dataset.
    pub fn data_file(mut self, path: &str) -> Self {
        self.data_path = Some(path.to_string());
        self
    }

    /// Use the given tables directly.
    pub fn with_tables(mut self, tables: RouteTables) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Use the dataset compiled into the crate.
    pub fn embedded(self) -> Result<Self, GeneratorError> {
        Ok(self.with_tables(RouteTables::embedded()?))
    }

    pub fn header(mut self, header: &str) -> Self {
        self.header = Some(header.to_string());
        self
    }

    pub fn weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn cooldown_weeks(mut self, weeks: u32) -> Self {
        self.cooldown_weeks = Some(weeks);
        self
    }

    /// Load tables if needed and check that every route can be generated.
    ///
    /// Builder overrides win over the `settings` block of the data.
    pub fn build(self) -> Result<Generator, GeneratorError> {
        let mut tables = self.tables;
        if let Some(ref path) = self.data_path {
            let loaded = RouteTables::load_from_ron(Path::new(path))?;
            match tables {
                Some(ref mut existing) => existing.merge(loaded),
                None => tables = Some(loaded),
            }
        }
        let tables = tables.ok_or(GeneratorError::NoTables)?;

        let mut settings = tables.settings();
        if let Some(header) = self.header {
            settings.header = header;
        }
        if let Some(weight) = self.weight {
            settings.weight = weight;
        }
        if let Some(weeks) = self.cooldown_weeks {
            settings.cooldown_weeks = weeks;
        }

        validate(&tables)?;
        let report = lint(&tables);
        info!("route tables passed with {} lint warnings", report.warnings.len());
        Ok(Generator {
            tables,
            settings,
            report,
        })
    }
}

/// Fail on anything that would make generation undefined or the
/// output ambiguous.
fn validate(tables: &RouteTables) -> Result<(), GeneratorError> {
    let mut seen = FxHashSet::default();
    let mut routes = FxHashSet::default();
    for route in &tables.routes {
        // Positions restart per block, so a split route would get wrong gates
        if !routes.insert(&route.route) {
            return Err(GeneratorError::DuplicateRoute(route.route.clone()));
        }
        if route.events.is_empty() {
            continue;
        }
        match tables.pool_for(&route.route) {
            None => return Err(GeneratorError::MissingOptionPool(route.route.clone())),
            Some([]) => return Err(GeneratorError::EmptyOptionPool(route.route.clone())),
            Some(_) => {}
        }
        for (i, event) in route.events.iter().enumerate() {
            if event.id.trim().is_empty() {
                return Err(GeneratorError::EmptyEventId {
                    route: route.route.clone(),
                    position: i + 1,
                });
            }
            if !seen.insert(event.id.as_str()) {
                return Err(GeneratorError::DuplicateEventId(event.id.clone()));
            }
        }
    }
    Ok(())
}

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }

    pub fn tables(&self) -> &RouteTables {
        &self.tables
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Warnings found while building; errors never get this far.
    pub fn lint_report(&self) -> &LintReport {
        &self.report
    }

    /// Assemble every record, in route order then event order.
    pub fn records(&self) -> Vec<OutputRecord> {
        let mut records = Vec::with_capacity(self.tables.event_count());
        for route in &self.tables.routes {
            // Validated at build time for any route with events.
            let pool = self.tables.pool_for(&route.route).unwrap_or(&[]);
            for (i, event) in route.events.iter().enumerate() {
                let options = pool[i % pool.len()].clone();
                records.push(OutputRecord {
                    id: event.id.clone(),
                    title: event.title.clone(),
                    text: event.text.clone(),
                    route: route.route.clone(),
                    tags: vec![route.route.tag()],
                    weight: self.settings.weight,
                    cooldown_weeks: self.settings.cooldown_weeks,
                    gates: route_gates(&route.route, i),
                    options,
                });
            }
            debug!(
                "route {}: {} events over {} option triples",
                route.route,
                route.events.len(),
                pool.len()
            );
        }
        records
    }

    /// Render the full text block.
    pub fn render(&self) -> String {
        let records = self.records();
        info!("rendered {} side events", records.len());
        render::render_document(&self.settings.header, &records)
    }

    /// Write the text block to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), GeneratorError> {
        writer.write_all(self.render().as_bytes())?;
        Ok(())
    }

    /// Write the text block to `path`, replacing any existing file.
    pub fn write_file(&self, path: &Path) -> Result<(), GeneratorError> {
        let mut file = File::create(path)?;
        self.write_to(&mut file)?;
        file.flush()?;
        info!("wrote {}", path.display());
        Ok(())
    }
}
