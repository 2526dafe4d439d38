//! shunt: collision push-apart and tile-graph pathfinding for 2D games
//!
//! Two subsystems, both synchronous and frame-loop driven:
//!
//! - collision: rectangular bodies behind the [`CollisionBody`] trait, a
//!   pairwise [`overlaps`]/[`resolve`] narrowphase, and detection-only
//!   [`CollisionCircle`]s.
//! - navigation: a [`NavGraph`] built from a walkability bitmap, searched
//!   by a throttled A* [`Pathfinder`] or its aggro-gated
//!   [`EnemyPathfinder`] variant for pursuing agents.
//!
//! Search scratch state lives on graph nodes, so each pathfinder owns its
//! graph exclusively; agents wanting independent searches each build their
//! own graph. Collision resolution mutates both bodies in place, so
//! re-derive positions between resolves against multiple partners.

pub mod api;
pub mod body;
pub mod enemy;
pub mod geometry;
pub mod graph;
pub mod narrowphase;
pub mod pathfinder;
pub mod types;

pub use crate::api::CollisionBody;
pub use crate::body::{RectShape, Sprite};
pub use crate::enemy::EnemyPathfinder;
pub use crate::geometry::{clamp_vec, distance};
pub use crate::graph::{NavGraph, Node};
pub use crate::narrowphase::{overlaps, resolve, CollisionCircle};
pub use crate::pathfinder::Pathfinder;
pub use crate::types::*;
