//! Small helpers with no dependencies beyond serde.

pub mod text;
