// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Saved combinations: (materialId, count) expansion, matching and labels

pub mod store;

pub use store::{CombinationStore, FileStore, KeyValueStore, MemoryStore, STORAGE_KEY};

use crate::materials::Material;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCount {
    pub material_id: String,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCombination {
    pub id: String,
    pub label: String,
    pub materials: Vec<MaterialCount>,
    pub created_at: String,
}

/// Tally `key(m)` in first-appearance order.
fn tally<'a, K: PartialEq>(materials: &[&'a Material], key: impl Fn(&'a Material) -> K) -> Vec<(K, u32)> {
    let mut counts: Vec<(K, u32)> = Vec::new();
    for &m in materials {
        let k = key(m);
        match counts.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, n)) => *n += 1,
            None => counts.push((k, 1)),
        }
    }
    counts
}

/// Per-id counts of a selection, ordered by first appearance.
pub fn count_by_id(materials: &[&Material]) -> Vec<MaterialCount> {
    tally(materials, |m| m.id)
        .into_iter()
        .map(|(id, count)| MaterialCount {
            material_id: id.to_string(),
            count,
        })
        .collect()
}

/// Flatten a saved combination back into a selection.
///
/// Ids missing from `catalog` are skipped.
pub fn expand_combination<'a>(
    combination: &SavedCombination,
    catalog: &[&'a Material],
) -> Vec<&'a Material> {
    let mut result = Vec::new();
    for entry in &combination.materials {
        if let Some(&material) = catalog.iter().find(|m| m.id == entry.material_id) {
            result.extend(std::iter::repeat(material).take(entry.count as usize));
        }
    }
    result
}

/// First saved combination with exactly the selection's ids and counts.
pub fn find_matching_combination<'s>(
    materials: &[&Material],
    saved: &'s [SavedCombination],
) -> Option<&'s SavedCombination> {
    let current = tally(materials, |m| m.id);

    saved.iter().find(|combination| {
        combination.materials.len() == current.len()
            && combination.materials.iter().all(|entry| {
                current
                    .iter()
                    .any(|(id, count)| *id == entry.material_id && *count == entry.count)
            })
    })
}

/// `"大豆2+米麹"`: short names in first-appearance order, count when > 1.
pub fn generate_combination_label(materials: &[&Material]) -> String {
    tally(materials, |m| m.short_name)
        .into_iter()
        .map(|(name, count)| {
            if count > 1 {
                format!("{}{}", name, count)
            } else {
                name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}
