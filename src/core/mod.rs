//! Core building blocks: the format-agnostic raw point table and the
//! structural checks run over it.
pub mod checks;
pub mod data;
