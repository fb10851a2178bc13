//! Bohr Diagram Core
//!
//! This crate computes everything needed to draw an animated Bohr-model
//! diagram of one element, independent of any rendering surface. It includes:
//!
//! - **Element data**: The input record of one element ([`element::ElementData`])
//! - **Layout**: Nucleus, shell rings, electron positions and label anchors ([`layout`] module)
//! - **Timeline**: Staggered start delays for every primitive ([`timeline`] module)
//! - **Scene**: Geometry and timing zipped by primitive identity ([`scene::Scene`])
//! - **Draw**: Render layers shared by exporters ([`draw`] module)
//! - **Colors** and **Geometry**: Basic value types ([`color::Color`], [`geometry`] module)
//!
//! # Example
//!
//! ```
//! use bohr_core::{
//!     element::ElementData,
//!     layout::{layout, LayoutOptions},
//!     scene::Scene,
//!     timeline::{schedule, TimingOptions},
//! };
//!
//! let sodium = ElementData::new(11, "Na", "Sodium", vec![2, 8, 1]);
//! let geometry = layout(&sodium, &LayoutOptions::default());
//! let timeline = schedule(sodium.shells(), &TimingOptions::default());
//!
//! let scene = Scene::compose(&geometry, &timeline).unwrap();
//! assert_eq!(scene.len(), 1 + 3 + 11 + 2);
//! ```

pub mod color;
pub mod draw;
pub mod element;
pub mod geometry;
pub mod layout;
pub mod primitive;
pub mod scene;
pub mod timeline;
