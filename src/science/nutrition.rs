// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// NutritionEngine: quick nutrition facts + seasonal fermentation estimate
//
// Older estimator kept for the nutrition panel. SpecCalculator's
// materialPeriod (900 / koji ratio) is the authoritative period.

use crate::formulas::js_round;
use crate::materials::Material;
use serde::{Deserialize, Serialize};

const BASE_DAYS: f64 = 30.0;
const PROTEIN_DAY_FACTOR: f64 = 0.5;
const STARCH_DAY_FACTOR: f64 = 0.01;
const FIBER_PER_UNIT_G: f64 = 2.1;

pub const MSG_SELECT_MATERIALS: &str = "材料を選択してください";
pub const MSG_ADD_PROTEIN: &str = "タンパク質材料を追加してください";
pub const MSG_ADD_KOJI: &str = "麹材料を追加してください";
pub const MSG_SHORT: &str = "短期間で発酵が完了します。風味が軽やかになります。";
pub const MSG_LONG: &str = "長期発酵により、深いコクと旨味が生まれます。";
pub const MSG_BALANCED: &str = "バランスの良い発酵期間です。";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn from_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    /// Representative ambient temperature (°C)
    pub fn temperature(self) -> f64 {
        match self {
            Season::Spring => 18.0,
            Season::Summer => 28.0,
            Season::Autumn => 22.0,
            Season::Winter => 12.0,
        }
    }

    fn period_factor(self) -> f64 {
        let t = self.temperature();
        if t > 20.0 {
            0.8
        } else if t < 15.0 {
            1.3
        } else {
            1.0
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub protein: f64,
    pub carbohydrate: f64,
    pub fat: f64,
    pub sodium: f64,
    pub fiber: f64,
    pub calories: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEstimate {
    pub material_period: u32,
    pub nutrition_facts: NutritionFacts,
    pub recommendation: String,
}

pub struct NutritionEngine;

impl NutritionEngine {
    pub fn estimate(materials: &[&Material], season: Season) -> NutritionEstimate {
        if materials.is_empty() {
            return NutritionEstimate {
                material_period: 0,
                nutrition_facts: NutritionFacts::default(),
                recommendation: MSG_SELECT_MATERIALS.to_string(),
            };
        }

        let protein_units = materials.iter().filter(|m| m.is_protein()).count();
        let koji_units = materials.iter().filter(|m| m.is_koji()).count();

        let protein_days: f64 = materials
            .iter()
            .filter(|m| m.is_protein())
            .map(|m| m.parameters.protein * PROTEIN_DAY_FACTOR)
            .sum();
        let enzyme_days: f64 = materials
            .iter()
            .filter(|m| m.is_koji())
            .map(|m| m.parameters.starch * STARCH_DAY_FACTOR)
            .sum();

        // May go negative for koji-heavy mixes; clamped only on output.
        let period = js_round((BASE_DAYS + protein_days - enzyme_days) * season.period_factor());

        let sum = |f: fn(&Material) -> f64| -> f64 { materials.iter().map(|m| f(m)).sum() };
        let nutrition_facts = NutritionFacts {
            protein: sum(|m| m.parameters.protein),
            carbohydrate: sum(|m| m.parameters.starch),
            fat: sum(|m| m.parameters.fat),
            sodium: sum(|m| m.parameters.salt_amount),
            fiber: materials.len() as f64 * FIBER_PER_UNIT_G,
            calories: sum(|m| {
                m.parameters.protein * 4.0 + m.parameters.starch * 4.0 + m.parameters.fat * 9.0
            }),
        };

        let recommendation = if protein_units == 0 {
            MSG_ADD_PROTEIN
        } else if koji_units == 0 {
            MSG_ADD_KOJI
        } else if period < 20.0 {
            MSG_SHORT
        } else if period > 45.0 {
            MSG_LONG
        } else {
            MSG_BALANCED
        };

        NutritionEstimate {
            material_period: period.max(1.0) as u32,
            nutrition_facts,
            recommendation: recommendation.to_string(),
        }
    }
}
