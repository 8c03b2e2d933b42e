//! Planar and spatial vector math for placing tokens on a map.
//!
//! [`Vector3`] composes a [`Vector2`] for its X/Y pair so planar helpers apply
//! to either. Enable the `serde` feature (on by default) for JSON support.
pub mod vector2;
pub mod vector3;

pub use vector2::Vector2;
pub use vector3::Vector3;
