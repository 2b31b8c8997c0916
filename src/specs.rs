// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// SpecCalculator: selection → brewing specification (仕込み仕様)
//
// Sums run at full precision; each field is rounded once, when the
// record is assembled.

use crate::formulas::{
    koji_ratio, maturation_period, moisture_ratio, round_to, water_to_reach_moisture,
};
use crate::materials::{Material, MaterialParameters};
use crate::science::enzymes::protease_activity;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Product constants of the calculation. Defaults are the shipped values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Moisture floor water is added to reach (%)
    pub target_moisture_percent: f64,
    /// Water is measured in multiples of this (ml)
    pub water_step_ml: f64,
    /// Water is only considered above this koji ratio
    pub koji_ratio_threshold: u32,
    /// materialPeriod = numerator / kojiRatio
    pub period_numerator_days: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            target_moisture_percent: 44.0,
            water_step_ml: 10.0,
            koji_ratio_threshold: 10,
            period_numerator_days: 900.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaterialSpecs {
    pub koji_ratio: u32,           // 麹歩合 (×10)
    pub water_amount: f64,         // 加水量 (ml)
    pub salt_ratio: f64,           // 塩分 (%)
    pub total_weight: f64,         // 重量 (g), water included
    pub material_period: u32,      // 期間目安 (days)
    pub moisture_ratio: f64,       // 水分 (%), water included
    pub total_protein: f64,        // g
    pub total_fat: f64,            // g
    pub total_starch: f64,         // g
    pub salt_concentration: f64,   // 対水食塩濃度 (%)
    #[serde(rename = "initialPH")]
    pub initial_ph: f64,
    pub average_alpha_amylase: f64,
    pub average_gluco_amylase: f64,
    pub average_protease: f64,
}

impl MaterialSpecs {
    /// The "nothing selected yet" record.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

fn sum_of(materials: &[&Material], field: impl Fn(&MaterialParameters) -> f64) -> f64 {
    materials.iter().map(|m| field(&m.parameters)).sum()
}

pub struct SpecCalculator;

impl SpecCalculator {
    pub fn calculate(materials: &[&Material], month: u32, region: &str) -> MaterialSpecs {
        Self::calculate_with(materials, month, region, &CalculatorConfig::default())
    }

    pub fn calculate_with(
        materials: &[&Material],
        month: u32,
        region: &str,
        config: &CalculatorConfig,
    ) -> MaterialSpecs {
        if month == 0 || region.is_empty() || materials.is_empty() {
            debug!(
                month,
                region,
                count = materials.len(),
                "incomplete selection, returning zero specs"
            );
            return MaterialSpecs::zero();
        }

        // 1-3. Partition and count units
        let (proteins, kojis): (Vec<&Material>, Vec<&Material>) =
            materials.iter().copied().partition(|m| m.is_protein());
        let koji_ratio = koji_ratio(kojis.len() as u32, proteins.len() as u32);

        // 4-5. Mass and moisture before water
        let total_weight = sum_of(materials, |p| p.weight);
        let total_moisture = sum_of(materials, |p| p.moisture_amount);
        let raw_moisture_ratio = moisture_ratio(total_moisture, total_weight);

        // 6. Water only for koji-rich mixes below the moisture floor
        let water_amount = if koji_ratio > config.koji_ratio_threshold
            && raw_moisture_ratio < config.target_moisture_percent
        {
            water_to_reach_moisture(
                total_weight,
                total_moisture,
                config.target_moisture_percent,
                config.water_step_ml,
            )
        } else {
            0.0
        };
        if water_amount > 0.0 {
            debug!(koji_ratio, raw_moisture_ratio, water_amount, "adding water");
        }

        // 7. Fold water in (100 % moisture)
        let final_weight = total_weight + water_amount;
        let final_moisture = total_moisture + water_amount;
        let final_moisture_ratio = moisture_ratio(final_moisture, final_weight);

        // 8. Salt against the watered mass
        let total_salt = sum_of(materials, |p| p.salt_amount);
        let salt_ratio = if final_weight > 0.0 {
            total_salt / final_weight * 100.0
        } else {
            0.0
        };

        // 9. Period
        let material_period = maturation_period(koji_ratio, config.period_numerator_days);

        // 11. Salt against water content
        let salt_concentration = if final_moisture > 0.0 {
            total_salt / final_moisture * 100.0
        } else {
            0.0
        };

        // 12. pH weighted by pre-water mass
        let initial_ph = if total_weight > 0.0 {
            materials
                .iter()
                .map(|m| m.parameters.ph * m.parameters.weight)
                .sum::<f64>()
                / total_weight
        } else {
            0.0
        };

        // 13-14. Enzymes weighted by koji mass
        let koji_weight = sum_of(&kojis, |p| p.weight);
        let (alpha, gluco, protease) = if koji_weight > 0.0 {
            let weighted = |f: &dyn Fn(&Material) -> f64| -> f64 {
                kojis.iter().map(|&m| f(m) * m.parameters.weight).sum::<f64>() / koji_weight
            };
            (
                weighted(&|m: &Material| m.koji_type.amylase().alpha_amylase),
                weighted(&|m: &Material| m.koji_type.amylase().gluco_amylase),
                weighted(&|m: &Material| protease_activity(m.koji_type, initial_ph)),
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        MaterialSpecs {
            koji_ratio,
            water_amount,
            salt_ratio: round_to(salt_ratio, 1),
            total_weight: final_weight,
            material_period,
            moisture_ratio: round_to(final_moisture_ratio, 1),
            // 10. Nutrients exclude added water
            total_protein: round_to(sum_of(materials, |p| p.protein), 1),
            total_fat: round_to(sum_of(materials, |p| p.fat), 1),
            total_starch: round_to(sum_of(materials, |p| p.starch), 1),
            salt_concentration: round_to(salt_concentration, 1),
            initial_ph: round_to(initial_ph, 2),
            average_alpha_amylase: round_to(alpha, 1),
            average_gluco_amylase: round_to(gluco, 1),
            average_protease: round_to(protease, 1),
        }
    }
}
