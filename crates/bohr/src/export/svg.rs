//! Animated SVG output.
//!
//! Every primitive of a [`Scene`] becomes one SVG node on its render layer.
//! With animation enabled, a `<style>` block defines two keyframes: rings
//! draw themselves by animating `stroke-dashoffset` from the circumference
//! to zero, and every other primitive fades in. Each node carries its own
//! `animation-delay` taken from the scene.

use std::time::Duration;

use log::{debug, info};
use svg::{Document, Node, node::element as svg_element};

use bohr_core::{
    color::Color,
    draw::{LayeredOutput, RenderLayer, SvgNode},
    element::ElementData,
    geometry::{Point, Size},
    primitive::{Primitive, PrimitiveId, TextAnchor},
    scene::{AnimatedPrimitive, Scene},
    timeline::TimingOptions,
};

use crate::{
    config::{AnimationConfig, Palette, StyleConfig},
    export,
};

const FONT_FAMILY: &str = "Arial, sans-serif";
const SHELL_DRAW_CLASS: &str = "shell-draw-anim";
const FADE_IN_CLASS: &str = "fade-in-anim";

const SHELL_STROKE_WIDTH: f32 = 1.0;
const NUCLEUS_STROKE_WIDTH: f32 = 2.0;

/// Builder for [`SvgExporter`].
///
/// ```
/// # use bohr::config::AppConfig;
/// # use bohr::export::svg::SvgBuilder;
/// let config = AppConfig::default();
/// let exporter = SvgBuilder::new()
///     .with_style(config.style())
///     .with_animation(config.animation())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
    animation: Option<&'a AnimationConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_animation(mut self, animation: &'a AnimationConfig) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Resolves the configuration into an exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the background color is invalid.
    pub fn build(self) -> Result<SvgExporter, export::Error> {
        let style = self.style.cloned().unwrap_or_default();
        let animation = self.animation.copied().unwrap_or_default();

        let background = style.background_color().map_err(export::Error::Render)?;

        Ok(SvgExporter {
            palette: style.theme().palette(),
            background,
            timing: animation.enabled().then(|| *animation.timing()),
        })
    }
}

/// Renders scenes as standalone SVG documents.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    palette: Palette,
    background: Option<Color>,
    /// `None` when animation is disabled.
    timing: Option<TimingOptions>,
}

impl SvgExporter {
    /// Renders the scene into an SVG document.
    pub fn render_document(&self, scene: &Scene, element: &ElementData) -> Document {
        let extent = scene.extent();

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", extent.width(), extent.height()),
            )
            .set("width", extent.width())
            .set("height", extent.height())
            .set("role", "img")
            .set("aria-label", format!("Bohr diagram for {}", element.name()));

        if let Some(timing) = &self.timing {
            doc = doc.add(svg_element::Style::new(keyframes_css(timing)));
        }

        let mut output = LayeredOutput::new();
        if let Some(background) = &self.background {
            output.add_to_layer(RenderLayer::Background, self.render_background(background, extent));
        }
        for animated in scene.primitives() {
            output.add_to_layer(animated.id().layer(), self.render_primitive(animated, element));
        }

        debug!(primitives = scene.len(), animated = self.timing.is_some(); "SVG document rendered");

        output
            .render()
            .into_iter()
            .fold(doc, |doc, node| doc.add(node))
    }

    fn render_background(&self, color: &Color, extent: Size) -> SvgNode {
        Box::new(
            svg_element::Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", extent.width())
                .set("height", extent.height())
                .set("fill", color)
                .set("fill-opacity", color.alpha()),
        )
    }

    fn render_primitive(&self, animated: &AnimatedPrimitive, element: &ElementData) -> SvgNode {
        let id = animated.id();
        let delay = animated.delay();

        match *animated.primitive() {
            Primitive::Nucleus {
                center,
                radius,
                symbol,
                atomic_number,
            } => {
                let disc = circle(center, radius)
                    .set("fill", self.palette.nucleus_fill)
                    .set("stroke", self.palette.nucleus_stroke)
                    .set("stroke-width", NUCLEUS_STROKE_WIDTH);
                let symbol = text(symbol, element.symbol())
                    .set("fill", self.palette.symbol_text)
                    .set("font-weight", "bold");
                let atomic_number = text(atomic_number, &format!("P: {}", element.atomic_number()))
                    .set("fill", self.palette.atomic_number_text);

                let mut group = svg_element::Group::new()
                    .add(disc)
                    .add(symbol)
                    .add(atomic_number);
                self.tag(&mut group, id, FADE_IN_CLASS, delay);
                Box::new(group)
            }
            Primitive::Shell { center, radius } => {
                let mut ring = circle(center, radius)
                    .set("fill", "none")
                    .set("stroke", self.palette.shell_stroke)
                    .set("stroke-width", SHELL_STROKE_WIDTH);
                if self.timing.is_some() {
                    let circumference = std::f32::consts::TAU * radius;
                    ring.assign("stroke-dasharray", circumference);
                    ring.assign("stroke-dashoffset", circumference);
                }
                self.tag(&mut ring, id, SHELL_DRAW_CLASS, delay);
                Box::new(ring)
            }
            Primitive::Electron { center, radius } => {
                let mut marker = circle(center, radius).set("fill", self.palette.electron_fill);
                self.tag(&mut marker, id, FADE_IN_CLASS, delay);
                Box::new(marker)
            }
            Primitive::Label(anchor) => {
                let mut label = match id {
                    PrimitiveId::SummaryLabel => text(
                        anchor,
                        &format!(
                            "Shells ({}): {}",
                            element.shell_count(),
                            element.shell_summary()
                        ),
                    )
                    .set("fill", self.palette.summary_text),
                    _ => text(anchor, element.name())
                        .set("fill", self.palette.name_text)
                        .set("font-weight", "bold"),
                };
                self.tag(&mut label, id, FADE_IN_CLASS, delay);
                Box::new(label)
            }
        }
    }

    /// Marks a node with its primitive identity and, when animating, its
    /// animation class and start delay.
    fn tag<N: Node>(&self, node: &mut N, id: PrimitiveId, class: &str, delay: Duration) {
        node.assign("data-primitive", id.to_string());
        if self.timing.is_some() {
            node.assign("class", class);
            node.assign("style", format!("animation-delay: {}ms", delay.as_millis()));
        }
    }
}

impl export::Exporter for SvgExporter {
    fn export_scene(&self, scene: &Scene, element: &ElementData) -> Result<String, export::Error> {
        let extent = scene.extent();
        if !(extent.width() > 0.0 && extent.height() > 0.0) {
            return Err(export::Error::Render(format!(
                "scene extent {}x{} is empty",
                extent.width(),
                extent.height()
            )));
        }

        let svg = self.render_document(scene, element).to_string();
        info!(element = element.name(), bytes = svg.len(); "SVG exported");

        Ok(svg)
    }
}

fn circle(center: Point, radius: f32) -> svg_element::Circle {
    svg_element::Circle::new()
        .set("cx", center.x())
        .set("cy", center.y())
        .set("r", radius)
}

fn text(anchor: TextAnchor, content: &str) -> svg_element::Text {
    let position = anchor.position();
    svg_element::Text::new(content)
        .set("x", position.x())
        .set("y", position.y())
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central")
        .set("font-family", FONT_FAMILY)
        .set("font-size", anchor.font_size())
}

fn keyframes_css(timing: &TimingOptions) -> String {
    format!(
        ".{SHELL_DRAW_CLASS} {{ animation: shell-draw {draw}ms ease-out forwards; }}\n\
         .{FADE_IN_CLASS} {{ opacity: 0; animation: fade-in {fade}ms ease-out forwards; }}\n\
         @keyframes shell-draw {{ to {{ stroke-dashoffset: 0; }} }}\n\
         @keyframes fade-in {{ to {{ opacity: 1; }} }}",
        draw = timing.shell_draw_duration().as_millis(),
        fade = timing.fade_duration().as_millis(),
    )
}
