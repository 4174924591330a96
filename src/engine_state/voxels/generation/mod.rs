//! # Generation Module
//!
//! Procedural terrain for a chunk: a seeded noise field and the heightmap
//! rule that turns it into stone, dirt and air.

pub mod noise_field;
pub mod terrain;
