// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Material catalog (parity with the TypeScript `Material` records)

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    Protein,
    Koji,
}

/// Enzyme family of a koji material.
///
/// Brown-rice koji behaves as rice, wheat koji as barley. Proteins are `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KojiType {
    Rice,
    Barley,
    Other,
}

/// Per-unit physical quantities of one catalog material.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialParameters {
    pub weight: f64,          // g
    pub moisture: f64,        // %
    pub moisture_amount: f64, // g
    pub salt: f64,            // %
    pub salt_amount: f64,     // g
    #[serde(rename = "pH")]
    pub ph: f64,
    pub protein: f64, // g
    pub fat: f64,     // g
    pub starch: f64,  // g
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub category: MaterialCategory,
    pub koji_type: KojiType,
    pub description: &'static str,
    pub parameters: MaterialParameters,
    /// Storefront variant id; empty until the product exists.
    pub variant_id: &'static str,
}

impl Material {
    pub fn is_protein(&self) -> bool {
        self.category == MaterialCategory::Protein
    }

    pub fn is_koji(&self) -> bool {
        self.category == MaterialCategory::Koji
    }
}

pub const SOYBEAN_NAME: &str = "大豆";
pub const CHICKPEA_NAME: &str = "ひよこ豆";
pub const RICE_KOJI_NAME: &str = "米麹";
pub const BARLEY_KOJI_NAME: &str = "麦麹";
pub const BROWN_RICE_KOJI_NAME: &str = "玄米麹";
pub const WHEAT_KOJI_NAME: &str = "小麦麹";

// Salted protein pastes: 760 g units, 54 % moisture, 15.5 % salt.

pub static SOYBEAN: Material = Material {
    id: "soybean",
    name: SOYBEAN_NAME,
    short_name: SOYBEAN_NAME,
    category: MaterialCategory::Protein,
    koji_type: KojiType::Other,
    description: "大豆を使用した発酵素材",
    parameters: MaterialParameters {
        weight: 760.0,
        moisture: 54.0,
        moisture_amount: 410.4,
        salt: 15.5,
        salt_amount: 117.8,
        ph: 6.3,
        protein: 98.2,
        fat: 54.5,
        starch: 81.8,
    },
    variant_id: "45123752296604",
};

pub static CHICKPEA: Material = Material {
    id: "chickpea",
    name: CHICKPEA_NAME,
    short_name: CHICKPEA_NAME,
    category: MaterialCategory::Protein,
    koji_type: KojiType::Other,
    description: "ひよこ豆を使用した発酵素材",
    parameters: MaterialParameters {
        weight: 760.0,
        moisture: 54.0,
        moisture_amount: 410.4,
        salt: 15.5,
        salt_amount: 117.8,
        ph: 6.4,
        protein: 54.5,
        fat: 16.4,
        starch: 122.7,
    },
    variant_id: "45123753115804",
};

// Dry koji: 270 g units, 15 % moisture, unsalted.

pub static RICE_KOJI: Material = Material {
    id: "rice-koji",
    name: RICE_KOJI_NAME,
    short_name: RICE_KOJI_NAME,
    category: MaterialCategory::Koji,
    koji_type: KojiType::Rice,
    description: "米を麹菌で発酵させた発酵触媒",
    parameters: MaterialParameters {
        weight: 270.0,
        moisture: 15.0,
        moisture_amount: 40.5,
        salt: 0.0,
        salt_amount: 0.0,
        ph: 6.2,
        protein: 18.3,
        fat: 4.1,
        starch: 204.5,
    },
    variant_id: "45123754885276",
};

pub static BARLEY_KOJI: Material = Material {
    id: "barley-koji",
    name: BARLEY_KOJI_NAME,
    short_name: BARLEY_KOJI_NAME,
    category: MaterialCategory::Koji,
    koji_type: KojiType::Barley,
    description: "麦を麹菌で発酵させた発酵触媒",
    parameters: MaterialParameters {
        weight: 270.0,
        moisture: 15.0,
        moisture_amount: 40.5,
        salt: 0.0,
        salt_amount: 0.0,
        ph: 6.0,
        protein: 23.2,
        fat: 5.5,
        starch: 190.9,
    },
    variant_id: "45123755770012",
};

pub static BROWN_RICE_KOJI: Material = Material {
    id: "brown-rice",
    name: BROWN_RICE_KOJI_NAME,
    short_name: BROWN_RICE_KOJI_NAME,
    category: MaterialCategory::Koji,
    koji_type: KojiType::Rice,
    description: "玄米を麹菌で発酵させた発酵触媒",
    parameters: MaterialParameters {
        weight: 270.0,
        moisture: 15.0,
        moisture_amount: 40.5,
        salt: 0.0,
        salt_amount: 0.0,
        ph: 6.3,
        protein: 20.5,
        fat: 6.0,
        starch: 185.4,
    },
    variant_id: "",
};

pub static WHEAT_KOJI: Material = Material {
    id: "wheat",
    name: WHEAT_KOJI_NAME,
    short_name: WHEAT_KOJI_NAME,
    category: MaterialCategory::Koji,
    koji_type: KojiType::Barley,
    description: "小麦を麹菌で発酵させた発酵触媒",
    parameters: MaterialParameters {
        weight: 270.0,
        moisture: 15.0,
        moisture_amount: 40.5,
        salt: 0.0,
        salt_amount: 0.0,
        ph: 6.1,
        protein: 27.3,
        fat: 4.9,
        starch: 196.3,
    },
    variant_id: "",
};

/// Display order of the selector grid.
pub static CATALOG: [&Material; 6] = [
    &SOYBEAN,
    &CHICKPEA,
    &RICE_KOJI,
    &BARLEY_KOJI,
    &BROWN_RICE_KOJI,
    &WHEAT_KOJI,
];

pub struct MaterialRegistry;

impl MaterialRegistry {
    pub fn all() -> &'static [&'static Material] {
        &CATALOG
    }

    /// Look up a catalog material by its stable id.
    pub fn get(id: &str) -> Option<&'static Material> {
        CATALOG.iter().copied().find(|m| m.id == id)
    }

    pub fn require(id: &str) -> Result<&'static Material> {
        Self::get(id).ok_or_else(|| Error::UnknownMaterial(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<&str> = CATALOG.iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn test_registry_lookup() {
        assert_eq!(MaterialRegistry::get("rice-koji").map(|m| m.name), Some("米麹"));
        assert!(MaterialRegistry::get("miso").is_none());
        assert!(matches!(
            MaterialRegistry::require("miso"),
            Err(Error::UnknownMaterial(id)) if id == "miso"
        ));
    }

    #[test]
    fn test_registry_returns_catalog_reference() {
        let found = MaterialRegistry::get("soybean").unwrap();
        assert!(std::ptr::eq(found, &SOYBEAN));
    }

    #[test]
    fn test_koji_types_follow_name_family() {
        // The tag replaces substring dispatch on "米麹" / "麦麹".
        for m in CATALOG.iter().filter(|m| m.is_koji()) {
            let expected = if m.name.contains("米麹") {
                KojiType::Rice
            } else if m.name.contains("麦麹") {
                KojiType::Barley
            } else {
                KojiType::Other
            };
            assert_eq!(m.koji_type, expected, "koji type of {}", m.id);
        }
        assert!(CATALOG
            .iter()
            .filter(|m| m.is_protein())
            .all(|m| m.koji_type == KojiType::Other));
    }

    #[test]
    fn test_moisture_amount_matches_percentage() {
        for m in CATALOG.iter() {
            let p = &m.parameters;
            let derived = p.weight * p.moisture / 100.0;
            assert!(
                (derived - p.moisture_amount).abs() < 0.05,
                "{}: {} vs {}",
                m.id,
                derived,
                p.moisture_amount
            );
        }
    }

    #[test]
    fn test_material_serializes_camel_case() {
        let value = serde_json::to_value(&RICE_KOJI).unwrap();
        assert_eq!(value["shortName"], "米麹");
        assert_eq!(value["category"], "koji");
        assert_eq!(value["kojiType"], "rice");
        assert_eq!(value["parameters"]["moistureAmount"], 40.5);
        assert_eq!(value["parameters"]["pH"], 6.2);
    }
}
