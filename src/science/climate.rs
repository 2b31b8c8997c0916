// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Brewing conditions: region × month mean temperatures (approximate, °C)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE_C: f64 = 20.0;

/// Monthly means, January first. Listed in selector order.
pub const REGIONAL_TEMPERATURES: [(&str, [i32; 12]); 11] = [
    ("北海道", [-5, -3, 2, 9, 15, 19, 22, 22, 18, 11, 4, -2]),
    ("東北", [2, 3, 6, 12, 17, 21, 25, 26, 23, 17, 10, 5]),
    ("北関東", [3, 4, 8, 14, 19, 22, 26, 27, 24, 18, 12, 6]),
    ("関東", [5, 6, 9, 15, 20, 23, 27, 28, 25, 19, 14, 8]),
    ("北陸", [3, 4, 7, 13, 18, 22, 26, 27, 24, 18, 12, 7]),
    ("東海", [4, 5, 9, 15, 19, 23, 27, 28, 25, 19, 13, 7]),
    ("関西", [5, 6, 9, 15, 20, 24, 28, 29, 26, 20, 14, 8]),
    ("中国", [4, 5, 8, 14, 19, 23, 27, 28, 25, 19, 13, 7]),
    ("四国", [5, 6, 10, 16, 21, 25, 28, 29, 26, 20, 14, 8]),
    ("九州", [7, 8, 12, 17, 22, 26, 29, 30, 27, 21, 16, 10]),
    ("沖縄", [17, 18, 20, 23, 26, 28, 30, 30, 29, 26, 22, 19]),
];

pub fn regions() -> impl Iterator<Item = &'static str> {
    REGIONAL_TEMPERATURES.iter().map(|(name, _)| *name)
}

pub fn is_known_region(region: &str) -> bool {
    regions().any(|r| r == region)
}

/// Mean temperature for `region` in `month` (1-12), 20 °C when unknown.
pub fn average_temperature(region: &str, month: u32) -> f64 {
    if !(1..=12).contains(&month) {
        return DEFAULT_TEMPERATURE_C;
    }
    REGIONAL_TEMPERATURES
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, temps)| temps[(month - 1) as usize] as f64)
        .unwrap_or(DEFAULT_TEMPERATURE_C)
}

/// Where and when the batch is set down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrewingConditions {
    pub month: u32,
    pub region: String,
}

impl BrewingConditions {
    pub fn new(month: u32, region: impl Into<String>) -> Self {
        Self {
            month,
            region: region.into(),
        }
    }

    /// False for the "nothing chosen yet" state the calculator zeroes out on.
    pub fn is_set(&self) -> bool {
        self.month != 0 && !self.region.is_empty()
    }

    pub fn average_temperature(&self) -> f64 {
        average_temperature(&self.region, self.month)
    }

    /// Strict check for user-facing inputs; the calculator does not require it.
    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            return Err(Error::InvalidConditions(format!(
                "month must be 1-12, got {}",
                self.month
            )));
        }
        if !is_known_region(&self.region) {
            return Err(Error::InvalidConditions(format!(
                "unknown region '{}'",
                self.region
            )));
        }
        Ok(())
    }
}

impl Default for BrewingConditions {
    fn default() -> Self {
        Self::new(1, "関東")
    }
}
