//! Rendering support shared by diagram exporters.

mod layer;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
