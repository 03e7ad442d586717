//! Records module - fixture parsing and `LifeRecord` construction
//!
//! The simulation fixtures arrive as loosely-typed JSON. Everything passes
//! through an explicit parse/validate boundary here: raw records are mapped
//! tolerantly (missing ids synthesized, tick bounds reconstructed, bad
//! samples neutralized) so that downstream detection never has to defend
//! against fixture damage beyond skipping non-finite samples.

mod loader;
mod types;

pub use loader::{map_lives, parse_lives, RawLifeRecord};
pub use types::*;
