//! Scene composition.
//!
//! The layout engine and the scheduler run independently; a [`Scene`] pairs
//! their outputs by [`PrimitiveId`] so a renderer can walk one list of
//! positioned, timed primitives.

use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::{
    geometry::Size,
    layout::DiagramGeometry,
    primitive::{Primitive, PrimitiveId},
    timeline::AnimationTimeline,
};

/// Geometry and timeline disagree about which primitives exist.
///
/// Both sides are derived from the same shell configuration, so this only
/// happens when they were computed for different elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("no animation delay scheduled for `{0}`")]
    MissingDelay(PrimitiveId),

    #[error("`{0}` is scheduled but has no geometry")]
    UnplacedPrimitive(PrimitiveId),
}

/// A primitive together with its start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedPrimitive {
    id: PrimitiveId,
    primitive: Primitive,
    delay: Duration,
}

impl AnimatedPrimitive {
    pub fn id(&self) -> PrimitiveId {
        self.id
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Positioned and timed primitives of one diagram, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    primitives: Vec<AnimatedPrimitive>,
    extent: Size,
}

impl Scene {
    /// Zips `geometry` with `timeline` by primitive identity.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::MissingDelay`] for a placed primitive the
    /// timeline does not know, and [`SceneError::UnplacedPrimitive`] for a
    /// scheduled primitive without geometry.
    pub fn compose(
        geometry: &DiagramGeometry,
        timeline: &AnimationTimeline,
    ) -> Result<Self, SceneError> {
        let placed = geometry.primitives();

        let primitives = placed
            .iter()
            .map(|&(id, primitive)| {
                let delay = timeline.delay(id).ok_or(SceneError::MissingDelay(id))?;
                Ok(AnimatedPrimitive {
                    id,
                    primitive,
                    delay,
                })
            })
            .collect::<Result<Vec<_>, SceneError>>()?;

        if timeline.len() != primitives.len() {
            let unplaced = timeline
                .iter()
                .map(|(id, _)| id)
                .find(|id| !placed.iter().any(|(placed_id, _)| placed_id == id));
            if let Some(id) = unplaced {
                return Err(SceneError::UnplacedPrimitive(id));
            }
        }

        debug!(primitives = primitives.len(); "Scene composed");

        Ok(Self {
            primitives,
            extent: geometry.extent(),
        })
    }

    /// All primitives in draw order.
    pub fn primitives(&self) -> &[AnimatedPrimitive] {
        &self.primitives
    }

    /// Size of the area covering every primitive.
    pub fn extent(&self) -> Size {
        self.extent
    }

    /// Latest start delay in the scene.
    pub fn total_duration(&self) -> Duration {
        self.primitives
            .iter()
            .map(AnimatedPrimitive::delay)
            .max()
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        element::ElementData,
        layout::{LayoutOptions, layout},
        timeline::{TimingOptions, schedule},
    };

    fn sodium() -> ElementData {
        ElementData::new(11, "Na", "Sodium", vec![2, 8, 1])
    }

    #[test]
    fn test_compose_sodium() {
        let element = sodium();
        let geometry = layout(&element, &LayoutOptions::default());
        let timeline = schedule(element.shells(), &TimingOptions::default());

        let scene = Scene::compose(&geometry, &timeline).unwrap();

        assert_eq!(scene.len(), 17);
        assert_eq!(scene.extent(), geometry.extent());
        assert_eq!(scene.total_duration(), Duration::from_millis(2890));

        let ids: Vec<PrimitiveId> = scene.primitives().iter().map(|p| p.id()).collect();
        let scheduled: Vec<PrimitiveId> = timeline.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, scheduled);

        let electron = scene
            .primitives()
            .iter()
            .find(|p| p.id() == PrimitiveId::Electron { shell: 2, index: 0 })
            .unwrap();
        assert_eq!(electron.delay(), Duration::from_millis(2460));
        assert!(matches!(electron.primitive(), Primitive::Electron { .. }));
    }

    #[test]
    fn test_compose_missing_delay() {
        let geometry = layout(&sodium(), &LayoutOptions::default());
        let timeline = schedule(&[2, 8], &TimingOptions::default());

        assert_eq!(
            Scene::compose(&geometry, &timeline),
            Err(SceneError::MissingDelay(PrimitiveId::Shell(2)))
        );
    }

    #[test]
    fn test_compose_unplaced_primitive() {
        let geometry = layout(&sodium(), &LayoutOptions::default());
        let timeline = schedule(&[2, 8, 2], &TimingOptions::default());

        assert_eq!(
            Scene::compose(&geometry, &timeline),
            Err(SceneError::UnplacedPrimitive(PrimitiveId::Electron {
                shell: 2,
                index: 1
            }))
        );
    }

    #[test]
    fn test_compose_no_shells() {
        let element = ElementData::new(0, "X", "Nothing", vec![]);
        let geometry = layout(&element, &LayoutOptions::default());
        let timeline = schedule(element.shells(), &TimingOptions::default());

        let scene = Scene::compose(&geometry, &timeline).unwrap();
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn test_scene_error_display() {
        assert_eq!(
            SceneError::MissingDelay(PrimitiveId::Shell(3)).to_string(),
            "no animation delay scheduled for `shell[3]`"
        );
        assert_eq!(
            SceneError::UnplacedPrimitive(PrimitiveId::NameLabel).to_string(),
            "`name-label` is scheduled but has no geometry"
        );
    }
}
