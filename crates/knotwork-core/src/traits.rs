use crate::error::Result;

/// Validate structural integrity of a geometric entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Compute an axis-aligned bounding box.
pub trait BoundingBox {
    type Bounds;
    /// Returns `None` when the entity has no extent to bound.
    fn bounding_box(&self) -> Option<Self::Bounds>;
}
