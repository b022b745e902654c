//! Query permutation: equivalence families and the variant generator

pub mod family;
pub mod permutator;

pub use family::{Family, FamilyMap, PermutationFamilies};
pub use permutator::Permutator;
