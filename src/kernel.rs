// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// BrewKernel: single entry point for the front end
//
// TypeScript sends raw JSON and receives JSON; all marshalling happens here.

use crate::combination::{generate_combination_label, MaterialCount};
use crate::error::{Error, Result};
use crate::matching::{MatchTolerance, MisoMatcher};
use crate::materials::{Material, MaterialRegistry};
use crate::misos::MisoInfo;
use crate::science::climate::BrewingConditions;
use crate::science::nutrition::{NutritionEngine, NutritionEstimate, Season};
use crate::selection::MAX_SELECTION;
use crate::specs::{CalculatorConfig, MaterialSpecs, SpecCalculator};
use serde::{Deserialize, Serialize};
use tracing::warn;
use wasm_bindgen::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub calculator: CalculatorConfig,
    pub tolerance: MatchTolerance,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecEvent {
    pub topic: String,
    pub message: String,
    pub severity: String, // 'INFO', 'WARNING'
}

impl SpecEvent {
    fn info(topic: &str, message: String) -> Self {
        Self {
            topic: topic.to_string(),
            message,
            severity: "INFO".to_string(),
        }
    }

    fn warning(topic: &str, message: String) -> Self {
        Self {
            topic: topic.to_string(),
            message,
            severity: "WARNING".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecReport {
    pub specs: MaterialSpecs,
    pub miso: Option<&'static MisoInfo>,
    /// Informational only; does not feed the period.
    pub average_temperature: f64,
    pub nutrition: NutritionEstimate,
}

#[derive(Clone, Debug, Serialize)]
pub struct SpecResponse {
    pub result: SpecReport,
    pub events: Vec<SpecEvent>,
}

/// One selection entry: a bare id, or an id with a count.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum SelectionEntry {
    Id(String),
    Counted(MaterialCount),
}

/// Resolved selection plus the ids the catalog does not know.
#[derive(Debug, Default)]
pub struct ParsedSelection {
    pub materials: Vec<&'static Material>,
    pub unknown: Vec<String>,
}

fn entries(selection_json: &str) -> Result<Vec<(String, u32)>> {
    let entries: Vec<SelectionEntry> = serde_json::from_str(selection_json)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            SelectionEntry::Id(id) => (id, 1),
            SelectionEntry::Counted(c) => (c.material_id, c.count),
        })
        .collect())
}

/// Parse `["soybean", "rice-koji"]` or `[{"materialId": "soybean", "count": 2}]`
/// (forms may be mixed). Unknown ids are collected, not fatal.
pub fn parse_selection(selection_json: &str) -> Result<ParsedSelection> {
    let mut parsed = ParsedSelection::default();

    for (id, count) in entries(selection_json)? {
        match MaterialRegistry::get(&id) {
            Some(material) => parsed
                .materials
                .extend(std::iter::repeat(material).take(count as usize)),
            None => {
                warn!(material_id = %id, "skipping unknown material");
                parsed.unknown.push(id);
            }
        }
    }

    Ok(parsed)
}

/// Like [`parse_selection`], but the first unknown id is an error.
pub fn parse_selection_strict(selection_json: &str) -> Result<Vec<&'static Material>> {
    let mut materials = Vec::new();
    for (id, count) in entries(selection_json)? {
        let material = MaterialRegistry::require(&id)?;
        materials.extend(std::iter::repeat(material).take(count as usize));
    }
    Ok(materials)
}

fn error_json(context: &str, error: &Error) -> String {
    serde_json::json!({ "error": format!("{}: {}", context, error) }).to_string()
}

#[wasm_bindgen]
pub struct BrewKernel;

#[wasm_bindgen]
impl BrewKernel {
    /// Specs and matched reference miso for a selection.
    ///
    /// # Arguments
    /// * `selection_json` - JSON array of material ids or `{materialId, count}` pairs
    /// * `month` - 1-12, 0 when not chosen
    /// * `region` - Region name, empty when not chosen
    ///
    /// # Returns
    /// `{"result": {"specs": ..., "miso": ... | null}, "events": [...]}`,
    /// or `{"error": "..."}` when the selection is not valid JSON.
    pub fn compute_specs(selection_json: &str, month: u32, region: &str) -> String {
        let parsed = match parse_selection(selection_json) {
            Ok(p) => p,
            Err(e) => return error_json("Failed to parse selection", &e),
        };

        let mut response = Self::compute(&parsed.materials, month, region, &KernelConfig::default());
        if !parsed.unknown.is_empty() {
            response.events.push(SpecEvent::warning(
                "SELECTION.UNKNOWN",
                format!("Skipped unknown materials: {}", parsed.unknown.join(", ")),
            ));
        }

        serde_json::to_string(&response).unwrap_or_default()
    }

    /// Reference miso for a selection and externally computed specs.
    ///
    /// Returns the `MisoInfo` JSON, `null`, or `{"error": "..."}`.
    pub fn match_miso(selection_json: &str, specs_json: &str) -> String {
        let parsed = match parse_selection(selection_json) {
            Ok(p) => p,
            Err(e) => return error_json("Failed to parse selection", &e),
        };
        let specs: MaterialSpecs = match serde_json::from_str(specs_json) {
            Ok(s) => s,
            Err(e) => return error_json("Failed to parse specs", &Error::from(e)),
        };

        let miso = MisoMatcher::find_similar(&parsed.materials, &specs);
        serde_json::to_string(&miso).unwrap_or_default()
    }

    /// Default label for saving the selection, e.g. `"大豆2+米麹"`.
    pub fn combination_label(selection_json: &str) -> String {
        match parse_selection(selection_json) {
            Ok(parsed) => generate_combination_label(&parsed.materials),
            Err(_) => String::new(),
        }
    }

    /// The material catalog as a JS array.
    pub fn catalog() -> std::result::Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(MaterialRegistry::all())?)
    }
}

/// Pure Rust path (CLI, tests)
impl BrewKernel {
    pub fn compute(
        materials: &[&Material],
        month: u32,
        region: &str,
        config: &KernelConfig,
    ) -> SpecResponse {
        let specs = SpecCalculator::calculate_with(materials, month, region, &config.calculator);
        let miso = MisoMatcher::find_similar_with(materials, &specs, &config.tolerance);
        let events = Self::events_for(materials, &specs, miso);

        let conditions = BrewingConditions::new(month, region);
        let nutrition = NutritionEngine::estimate(materials, Season::from_month(month));

        SpecResponse {
            result: SpecReport {
                specs,
                miso,
                average_temperature: conditions.average_temperature(),
                nutrition,
            },
            events,
        }
    }

    fn events_for(
        materials: &[&Material],
        specs: &MaterialSpecs,
        miso: Option<&MisoInfo>,
    ) -> Vec<SpecEvent> {
        let mut events = Vec::new();
        if materials.is_empty() {
            return events;
        }

        if materials.len() > MAX_SELECTION {
            events.push(SpecEvent::warning(
                "SELECTION.LIMIT",
                format!(
                    "Selection has {} materials (grid limit {})",
                    materials.len(),
                    MAX_SELECTION
                ),
            ));
        }
        if !materials.iter().any(|m| m.is_protein()) {
            events.push(SpecEvent::warning(
                "COMPOSITION.PROTEIN",
                "No protein material selected".to_string(),
            ));
        }
        if !materials.iter().any(|m| m.is_koji()) {
            events.push(SpecEvent::warning(
                "COMPOSITION.KOJI",
                "No koji selected".to_string(),
            ));
        }
        if specs.water_amount > 0.0 {
            events.push(SpecEvent::info(
                "SPECS.WATER",
                format!(
                    "Add {} ml water to reach {:.1}% moisture",
                    specs.water_amount, specs.moisture_ratio
                ),
            ));
        }
        if let Some(miso) = miso {
            events.push(SpecEvent::info(
                "MATCH.MISO",
                format!("Close to {}", miso.name),
            ));
        }

        events
    }
}
