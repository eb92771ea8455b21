//! Console output for the binary

pub mod ci;
pub mod json;
pub mod output;
pub mod terminal;
pub mod text;
pub mod theme;
