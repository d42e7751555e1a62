//! Tweening primitives
//!
//! Only what the page uses:
//! - Easing curves (`power*.out`, `back.out`)
//! - `Glide`: one property moving from its current value to a target
//! - `Timeline`: start-time layout for sequenced, staggered groups

pub mod ease;
pub mod glide;
pub mod timeline;

pub use ease::Ease;
pub use glide::{Glide, Lerp};
pub use timeline::{Placement, Position, Timeline};
