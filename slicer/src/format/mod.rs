//! Exporters for sliced layers.

pub mod svg;

pub use svg::SvgFile;
