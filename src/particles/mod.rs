//! Particle backdrop
//!
//! A fixed-size set of slowly drifting points on a torus, redrawn every
//! display refresh with faint lines between near neighbours. Pairwise
//! distances are checked exhaustively (n <= 80).

pub mod field;
pub mod particle;

pub use field::{FrameStats, Link, ParticleField, link_alpha};
pub use particle::{Particle, wrap};
