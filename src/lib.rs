// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//
// Miso Core — fermentation recipe calculator
// Spec calculation, reference-miso matching and saved combinations
//

pub mod combination;
pub mod error;
pub mod formulas;
pub mod kernel;
pub mod matching;
pub mod materials;
pub mod misos;
pub mod science;
pub mod selection;
pub mod specs;
#[cfg(test)]
pub mod tests_specs;

// Re-export core types
pub use combination::{
    expand_combination, find_matching_combination, generate_combination_label, CombinationStore,
    FileStore, KeyValueStore, MaterialCount, MemoryStore, SavedCombination,
};
pub use error::{Error, Result};
pub use kernel::{BrewKernel, KernelConfig, SpecEvent, SpecReport, SpecResponse};
pub use matching::{MatchTolerance, MisoMatcher};
pub use materials::{KojiType, Material, MaterialCategory, MaterialParameters, MaterialRegistry};
pub use misos::{MisoInfo, LOCAL_MISOS};
pub use selection::{Selection, MAX_SELECTION};
pub use specs::{CalculatorConfig, MaterialSpecs, SpecCalculator};
