//! User text highlights over chapter reference text

pub mod markup;
pub mod store;

pub use store::{Highlight, HighlightStore};
