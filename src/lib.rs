#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::suboptimal_flops)]
#![deny(clippy::return_self_not_must_use)]
#![allow(clippy::similar_names)]
#![deny(clippy::semicolon_if_nothing_returned)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::double_must_use)]
#![deny(clippy::use_self)]
#![deny(clippy::unreadable_literal)]
#![deny(clippy::explicit_iter_loop)]
// these are lints to enable later
#![allow(clippy::cast_lossless)]

//! This crate maps canonical random samples to the domains that show up in a path tracer:
//! spheres, hemispheres, disks, circles, triangles and regular polygons.
//! Every mapping comes with the probability density it realizes.
//!
//! # Design Decisions
//! All `sample_...` functions are deterministic and stateless. You are responsible for generating
//! the samples in the range of `0.0..1.0`, which allows you to control the random generator or
//! low discrepancy sequence in use. Samples are passed as [glam] vectors ([`Vec2d`], [`Vec3d`],
//! [`Vec2f`], [`Vec3f`]) and the functions are generic over [f32] and [f64] through the [`Float`]
//! trait. The formulas are the same for both precisions.
//!
//! The warps run once per sample, therefore their preconditions (samples in `[0, 1)`, at least
//! 3 polygon vertices, non-negative lobe exponents) are only checked with `debug_assert!`.
//! Violating them in a release build yields an unspecified result.
//!
//! Directions on the (hemi)sphere use the y-axis as the pole. The azimuth is measured in the
//! xz-plane.
//!
//! The densities are returned by separate `..._pdf` functions, since most callers only need them
//! for multiple importance sampling.
//!
//! # References
//! * Philip Dutré. *Global Illumination Compendium,* 2003.
//!     <https://people.cs.kuleuven.be/~philip.dutre/GI/TotalCompendium.pdf>
//! * Peter Shirley and Kenneth Chiu. A low distortion map between disk and square. *Journal of
//!     Graphics Tools, 2(3):45–52,* 1997.
//! * Peter Shirley. Improved code for concentric map, 2011.
//!     <http://psgraphics.blogspot.com/2011/01/improved-code-for-concentric-map.html>

mod core;

pub use core::{Float, Vec2d, Vec2f, Vec3d, Vec3f, Vector2, Vector3};

#[cfg(test)]
#[allow(dead_code)]
pub(crate) mod test_utils;
#[cfg(any(
    feature = "sphere",
    feature = "hemisphere",
    feature = "disk",
    feature = "triangle",
    feature = "polygon"
))]
pub(crate) mod utils;

#[cfg(feature = "disk")]
pub mod disk;
#[cfg(feature = "vpython")]
pub mod error;
#[cfg(feature = "hemisphere")]
pub mod hemisphere;
#[cfg(feature = "polygon")]
pub mod polygon;
#[cfg(feature = "sphere")]
pub mod sphere;
#[cfg(feature = "triangle")]
pub mod triangle;
#[cfg(feature = "vpython")]
pub mod vpython;
