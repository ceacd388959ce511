use crate::core::data::lane_batch::{LaneBatch, LaneIterations};

/// Escape-time evaluation of a fixed-width batch of points.
///
/// Implementations must be pure: the result for a lane depends only on that
/// lane's point, never on which other points share the batch.
pub trait LaneAlgorithm {
    fn evaluate(&self, batch: &LaneBatch) -> LaneIterations;

    fn max_iterations(&self) -> u32;
}
