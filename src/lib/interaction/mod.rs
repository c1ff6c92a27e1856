mod collider;

pub use collider::*;
