// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Selection: the ordered multiset the user builds in the material grid

use crate::materials::Material;
use serde::Serialize;

/// Grid capacity. The calculator accepts any length; only the UI caps it.
pub const MAX_SELECTION: usize = 15;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    materials: Vec<&'static Material>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list, keeping at most [`MAX_SELECTION`] entries.
    pub fn from_materials(materials: impl IntoIterator<Item = &'static Material>) -> Self {
        let mut selection = Self::new();
        selection.replace(materials);
        selection
    }

    /// Append one unit; refused when the grid is full.
    pub fn add(&mut self, material: &'static Material) -> bool {
        if self.is_full() {
            return false;
        }
        self.materials.push(material);
        true
    }

    /// Remove the first occurrence of `material_id`.
    pub fn remove(&mut self, material_id: &str) -> bool {
        match self.materials.iter().position(|m| m.id == material_id) {
            Some(index) => {
                self.materials.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.materials.clear();
    }

    pub fn replace(&mut self, materials: impl IntoIterator<Item = &'static Material>) {
        self.materials = materials.into_iter().take(MAX_SELECTION).collect();
    }

    pub fn as_slice(&self) -> &[&'static Material] {
        &self.materials
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.materials.len() >= MAX_SELECTION
    }

    pub fn count_of(&self, material_id: &str) -> usize {
        self.materials.iter().filter(|m| m.id == material_id).count()
    }
}
