pub mod aabb;
pub mod bezier;
pub mod index;
pub mod rotation;
pub mod transform;
pub mod vector;

pub use glam::{dvec2, dvec3, DMat4, DQuat, DVec2, DVec3};
pub use aabb::{Aabb, Aabb2, Aabb3};
pub use index::wrap_index;
pub use transform::{Transform2, Transform3};
pub use vector::CurveVector;
