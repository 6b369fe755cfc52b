pub mod aabb;
pub mod frame;
pub mod hermite;

pub use glam::{dvec2, dvec3, DQuat, DVec2, DVec3};
pub use aabb::Aabb3;
pub use frame::HeadingFrame;
pub use hermite::{hermite, hermite_derivative};

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
