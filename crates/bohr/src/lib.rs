//! Bohr - animated Bohr model diagrams.
//!
//! Element lookup, layout, animation scheduling, and SVG rendering for
//! Bohr-model diagrams of the chemical elements.

pub mod config;
pub mod export;

mod error;

pub use bohr_core::{color, element, geometry, layout, primitive, scene, timeline};
pub use bohr_data::{ErrorCode, LookupError, PeriodicTable};

pub use error::BohrError;

use log::{debug, info, trace};

use config::AppConfig;
use element::ElementData;
use export::Exporter;
use layout::DiagramGeometry;
use scene::Scene;
use timeline::AnimationTimeline;

/// Builder for looking up elements and rendering their diagrams.
///
/// This provides an API for processing a query through the lookup, layout,
/// scheduling and rendering stages.
///
/// # Examples
///
/// ```rust
/// use bohr::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Resolve a query against the built-in periodic table
/// let sodium = builder.lookup("Na")
///     .expect("Failed to look up element");
///
/// // Render the animated diagram
/// let svg = builder.render_svg(sodium)
///     .expect("Failed to render");
/// assert!(svg.contains("Bohr diagram for Sodium"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
    table: PeriodicTable,
}

impl DiagramBuilder {
    /// Create a new diagram builder over the built-in periodic table.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout, animation and style settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            table: PeriodicTable::builtin(),
        }
    }

    /// Replaces the element dataset used by [`lookup`](Self::lookup).
    pub fn with_table(mut self, table: PeriodicTable) -> Self {
        self.table = table;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn table(&self) -> &PeriodicTable {
        &self.table
    }

    /// Resolve a name, symbol or atomic number to an element.
    ///
    /// # Errors
    ///
    /// Returns `BohrError::Lookup` for an empty query or when no element
    /// matches.
    pub fn lookup(&self, query: &str) -> Result<&ElementData, BohrError> {
        info!(query; "Looking up element");
        Ok(self.table.lookup(query)?)
    }

    /// Compute the diagram geometry for an element.
    ///
    /// Assumes the configuration passed [`AppConfig::validate`]; use
    /// [`scene`](Self::scene) to have it checked.
    pub fn layout(&self, element: &ElementData) -> DiagramGeometry {
        info!(element = element.name(); "Computing layout");
        layout::layout(element, self.config.layout())
    }

    /// Compute the animation timeline for an element.
    pub fn schedule(&self, element: &ElementData) -> AnimationTimeline {
        info!(element = element.name(); "Scheduling animation");
        timeline::schedule(element.shells(), self.config.animation().timing())
    }

    /// Lay out and schedule an element, then pair both results.
    ///
    /// # Errors
    ///
    /// Returns `BohrError::Config` if the configuration is invalid or leaves
    /// no room for the element's shells around its nucleus.
    pub fn scene(&self, element: &ElementData) -> Result<Scene, BohrError> {
        self.config.validate().map_err(BohrError::Config)?;
        self.config
            .layout()
            .validate_for(element.atomic_number())
            .map_err(|err| BohrError::Config(format!("Invalid layout config: {err}")))?;

        let geometry = self.layout(element);
        let timeline = self.schedule(element);
        let scene = Scene::compose(&geometry, &timeline)?;

        debug!(
            primitives = scene.len(),
            total_duration:? = scene.total_duration();
            "Scene composed"
        );
        trace!(scene:?; "Composed scene");

        Ok(scene)
    }

    /// Render an element's diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `BohrError` for configuration or rendering errors.
    pub fn render_svg(&self, element: &ElementData) -> Result<String, BohrError> {
        let scene = self.scene(element)?;

        let exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_animation(self.config.animation())
            .build()?;

        let svg = exporter.export_scene(&scene, element)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
