// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// MisoMatcher: classify a selection against the regional reference misos

use crate::materials::Material;
use crate::misos::{MisoInfo, LOCAL_MISOS};
use crate::specs::MaterialSpecs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Acceptance windows around a reference recipe's targets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchTolerance {
    /// ± salt ratio (percentage points)
    pub salt_percent: f64,
    /// ± koji ratio (×10 scale)
    pub koji_ratio: u32,
}

impl Default for MatchTolerance {
    fn default() -> Self {
        Self {
            salt_percent: 1.0,
            koji_ratio: 3,
        }
    }
}

/// Distinct names per category; counts do not matter.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Composition<'a> {
    pub proteins: BTreeSet<&'a str>,
    pub kojis: BTreeSet<&'a str>,
}

impl<'a> Composition<'a> {
    pub fn of(materials: &[&'a Material]) -> Self {
        let mut composition = Composition::default();
        for m in materials {
            if m.is_koji() {
                composition.kojis.insert(m.name);
            } else {
                composition.proteins.insert(m.name);
            }
        }
        composition
    }
}

fn same_names(selected: &BTreeSet<&str>, required: &[&str]) -> bool {
    let required: BTreeSet<&str> = required.iter().copied().collect();
    *selected == required
}

pub struct MisoMatcher;

impl MisoMatcher {
    /// First reference miso whose salt, koji ratio and ingredient sets all agree.
    pub fn find_similar(materials: &[&Material], specs: &MaterialSpecs) -> Option<&'static MisoInfo> {
        Self::find_similar_with(materials, specs, &MatchTolerance::default())
    }

    pub fn find_similar_with(
        materials: &[&Material],
        specs: &MaterialSpecs,
        tolerance: &MatchTolerance,
    ) -> Option<&'static MisoInfo> {
        if materials.is_empty() {
            return None;
        }

        let composition = Composition::of(materials);

        LOCAL_MISOS.iter().copied().find(|miso| {
            let salt_matches = (specs.salt_ratio - miso.salt_range).abs() <= tolerance.salt_percent;
            let protein_matches = same_names(&composition.proteins, miso.proteins);
            let koji_ratio_matches = (specs.koji_ratio as i64 - miso.koji_ratio as i64).abs()
                <= tolerance.koji_ratio as i64;
            let koji_matches = same_names(&composition.kojis, miso.koji_require);

            salt_matches && protein_matches && koji_ratio_matches && koji_matches
        })
    }
}
