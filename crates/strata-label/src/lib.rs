//! Connected-component labeling and color assignment for Strata
//! space-time diagrams.
//!
//! This crate is the observation end of the pipeline: it takes a
//! finished (or windowed) space-time grid of symbols, partitions the
//! active cells into 4-connected components
//! ([`label()`](label::label)), and resolves each component to a
//! renderable color ([`assign()`](color::assign)), suppressing the
//! largest component as background.
//!
//! Labeling and coloring are whole-grid recomputations by design:
//! component membership changes non-locally as rows enter or leave a
//! streaming window, so nothing here is incremental.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod label;

pub use color::{assign, Color, ColorMap, Palette};
pub use label::{label, ComponentRegistry, Connectivity, LabelError, LabelGrid, LabelId, Labeling};
