// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Scalar Brewing Formulas
//!
//! Pure functions on scalar values. SpecCalculator composes these;
//! they are also exported to TypeScript so UI previews agree with the core
//! to the last digit.
//!
//! Rounding follows the browser's `Math.round` (ties toward +∞), since the
//! product tables were authored against it.

use wasm_bindgen::prelude::*;

// ============================================================================
// ROUNDING
// ============================================================================

/// Round to the nearest integer, ties toward positive infinity.
///
/// Differs from `f64::round` only on negative ties (-2.5 → -2).
#[wasm_bindgen]
pub fn js_round(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to `decimals` places as `Math.round(x * 10^d) / 10^d`.
#[wasm_bindgen]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    js_round(value * factor) / factor
}

// ============================================================================
// COMPOSITION RATIOS
// ============================================================================

/// Koji ratio (麹歩合) on the ×10 scale: one koji per protein unit = 10.
///
/// Counts units, not grams. Zero when either side is empty.
#[wasm_bindgen]
pub fn koji_ratio(koji_count: u32, protein_count: u32) -> u32 {
    if koji_count == 0 || protein_count == 0 {
        return 0;
    }
    js_round((koji_count as f64 / protein_count as f64) * 10.0) as u32
}

/// Moisture share of the mass in percent. Zero for an empty mass.
#[wasm_bindgen]
pub fn moisture_ratio(moisture_amount: f64, total_weight: f64) -> f64 {
    if total_weight > 0.0 {
        moisture_amount / total_weight * 100.0
    } else {
        0.0
    }
}

// ============================================================================
// WATER ADDITION
// ============================================================================

/// Water (ml) needed to lift a mass to `target_percent` moisture.
///
/// Solves (M + X) / (W + X) = t for X, then rounds up to a multiple of `step_ml`.
///
/// # Arguments
/// * `total_weight` - Mass before water (g)
/// * `moisture_amount` - Water already contained (g)
/// * `target_percent` - Moisture floor, e.g. 44.0
/// * `step_ml` - Measuring granularity, e.g. 10.0
#[wasm_bindgen]
pub fn water_to_reach_moisture(
    total_weight: f64,
    moisture_amount: f64,
    target_percent: f64,
    step_ml: f64,
) -> f64 {
    let target = target_percent / 100.0;
    if target >= 1.0 || step_ml <= 0.0 {
        return 0.0;
    }
    let needed = (target * total_weight - moisture_amount) / (1.0 - target);
    (needed / step_ml).ceil() * step_ml
}

// ============================================================================
// MATURATION
// ============================================================================

/// Maturation estimate in days: `numerator / koji_ratio`, zero without koji.
///
/// 900 is the product default; higher koji ratio ripens faster.
#[wasm_bindgen]
pub fn maturation_period(koji_ratio: u32, numerator_days: f64) -> u32 {
    if koji_ratio == 0 {
        return 0;
    }
    js_round(numerator_days / koji_ratio as f64) as u32
}

// ============================================================================
// TABLE LOOKUP
// ============================================================================

/// Piecewise-linear interpolation over `(x, y)` points sorted by `x`.
///
/// Clamps to the first/last `y` outside the table range.
/// Returns 0.0 for an empty table.
pub fn interpolate(table: &[(f64, f64)], x: f64) -> f64 {
    let (first, last) = match (table.first(), table.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return 0.0,
    };
    if x <= first.0 {
        return first.1;
    }
    if x >= last.0 {
        return last.1;
    }

    for pair in table.windows(2) {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];
        if x >= x1 && x <= x2 {
            // y = y1 + (x - x1) * (y2 - y1) / (x2 - x1)
            return y1 + (x - x1) * (y2 - y1) / (x2 - x1);
        }
    }

    0.0
}

// ============================================================================
// TESTS
// ============================================================================
