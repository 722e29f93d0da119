#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Density-map layer construction for the monthly facility dataset.
//!
//! Takes month slices from the query engine, projects them into
//! weighted geographic points, and builds the two render layers the
//! external map renderer consumes: a density surface and a pickable
//! marker overlay whose visual state follows the interaction state.
//!
//! Month selection changes recompute the whole slice → projection →
//! layers pipeline; every stage is a pure synchronous function, so
//! there is nothing to cancel or lock.

pub mod interaction;
pub mod layers;
pub mod projection;

pub use interaction::InteractionState;
