//! Layer-based grouping of SVG output.
//!
//! Renderers push SVG nodes tagged with a [`RenderLayer`]; [`LayeredOutput`]
//! emits them grouped by layer, bottom to top, so that electrons always sit
//! above the shell rings and the nucleus covers both.
//!
//! # Example
//!
//! ```
//! # use bohr_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Circle;
//!
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Nucleus, Box::new(Circle::new()));
//! output.add_to_layer(RenderLayer::Shell, Box::new(Circle::new()));
//!
//! // Shell group first, nucleus group second
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers of a Bohr diagram.
///
/// The derived `Ord` follows declaration order: the first variant renders
/// at the bottom, the last on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Full-canvas background fill
    Background,
    /// Concentric shell rings
    Shell,
    /// Electron markers on the rings
    Electron,
    /// Nucleus disc and the text inside it
    Nucleus,
    /// Name and shell-summary labels
    Text,
}

impl RenderLayer {
    /// Returns the `data-layer` name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Shell => "shells",
            Self::Electron => "electrons",
            Self::Nucleus => "nucleus",
            Self::Text => "text",
        }
    }
}

/// SVG nodes collected by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the given layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">`. Within a layer,
    /// nodes keep the order in which they were added.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        // Stable sort keeps insertion order within each layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Circle, Text};

    use super::*;

    fn render_to_string(output: LayeredOutput) -> String {
        output.render().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_layered_output_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_groups_by_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Electron, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Shell, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Electron, Box::new(Circle::new()));

        assert_eq!(output.render().len(), 2);
    }

    #[test]
    fn test_layered_output_orders_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Text::new("Sodium")));
        output.add_to_layer(RenderLayer::Nucleus, Box::new(Circle::new()));
        output.add_to_layer(RenderLayer::Shell, Box::new(Circle::new()));

        let svg = render_to_string(output);
        let shells = svg.find(r#"data-layer="shells""#).unwrap();
        let nucleus = svg.find(r#"data-layer="nucleus""#).unwrap();
        let text = svg.find(r#"data-layer="text""#).unwrap();
        assert!(shells < nucleus);
        assert!(nucleus < text);
    }
}
