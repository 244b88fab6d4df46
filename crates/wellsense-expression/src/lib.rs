//! # WellSense-Expression
//!
//! Facial expression analysis on 468-point face meshes.
//!
//! Smiles are detected from mouth shape and corner lift. Moods come from
//! detector blendshapes when they are decisive, otherwise from the smile
//! test and eyebrow height. Every mood result carries an encouragement
//! message drawn from a fixed per-mood pool.

pub mod blendshapes;
pub mod encouragement;
pub mod mood;
pub mod smile;

#[cfg(test)]
mod fixtures;

pub use blendshapes::*;
pub use encouragement::*;
pub use mood::*;
pub use smile::*;
