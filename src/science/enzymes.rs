// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Koji enzyme potency: amylases per koji family, protease vs. pH

use crate::formulas::interpolate;
use crate::materials::KojiType;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Relative amylase potency (rice koji = 100).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmylaseProfile {
    pub alpha_amylase: f64,
    pub gluco_amylase: f64,
}

pub const RICE_AMYLASE: AmylaseProfile = AmylaseProfile {
    alpha_amylase: 100.0,
    gluco_amylase: 100.0,
};

pub const BARLEY_AMYLASE: AmylaseProfile = AmylaseProfile {
    alpha_amylase: 56.8,
    gluco_amylase: 45.3,
};

pub const NO_AMYLASE: AmylaseProfile = AmylaseProfile {
    alpha_amylase: 0.0,
    gluco_amylase: 0.0,
};

/// Protease activity by pH, keyed 3.0..=7.5 in 0.5 steps.
pub const RICE_PROTEASE: [(f64, f64); 10] = [
    (3.0, 130.2),
    (3.5, 125.1),
    (4.0, 120.2),
    (4.5, 115.1),
    (5.0, 110.0),
    (5.5, 105.1),
    (6.0, 100.0),
    (6.5, 73.0),
    (7.0, 46.0),
    (7.5, 19.0),
];

pub const BARLEY_PROTEASE: [(f64, f64); 10] = [
    (3.0, 181.0),
    (3.5, 177.6),
    (4.0, 174.3),
    (4.5, 170.3),
    (5.0, 166.2),
    (5.5, 161.9),
    (6.0, 157.1),
    (6.5, 98.9),
    (7.0, 52.2),
    (7.5, 17.5),
];

impl KojiType {
    /// Unclassified koji contributes no amylase.
    pub fn amylase(self) -> AmylaseProfile {
        match self {
            KojiType::Rice => RICE_AMYLASE,
            KojiType::Barley => BARLEY_AMYLASE,
            KojiType::Other => NO_AMYLASE,
        }
    }

    /// Unclassified koji is scored on the rice curve.
    pub fn protease_table(self) -> &'static [(f64, f64)] {
        match self {
            KojiType::Barley => &BARLEY_PROTEASE,
            KojiType::Rice | KojiType::Other => &RICE_PROTEASE,
        }
    }
}

/// Protease activity of a koji family at the given pH.
pub fn protease_activity(koji_type: KojiType, ph: f64) -> f64 {
    interpolate(koji_type.protease_table(), ph)
}

#[wasm_bindgen]
pub fn rice_protease_activity(ph: f64) -> f64 {
    protease_activity(KojiType::Rice, ph)
}

#[wasm_bindgen]
pub fn barley_protease_activity(ph: f64) -> f64 {
    protease_activity(KojiType::Barley, ph)
}
