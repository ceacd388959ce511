pub const DEFAULT_MAX_DEPTH: u32 = 150;
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.07;

/// Bounds of the zoom trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    /// Contraction steps before the window holds steady.
    pub max_depth: u32,
    /// Magnification per step, must be greater than one.
    pub zoom_factor: f32,
}

impl ZoomLimits {
    /// Scale of every delta and offset at `depth`, relative to depth 0.
    #[must_use]
    pub fn scale_at(&self, depth: u32) -> f32 {
        let exponent = i32::try_from(depth).unwrap_or(i32::MAX);

        f64::from(self.zoom_factor).powi(exponent).recip() as f32
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomLimits;

    #[test]
    fn default_limits_are_finite_and_consistent() {
        let limits = ZoomLimits::default();

        assert!(limits.zoom_factor.is_finite());
        assert!(limits.zoom_factor > 1.0);
        assert!(limits.max_depth > 0);
    }

    #[test]
    fn scale_at_depth_zero_is_one() {
        assert_eq!(ZoomLimits::default().scale_at(0), 1.0);
    }

    #[test]
    fn scale_shrinks_geometrically() {
        let limits = ZoomLimits { max_depth: 10, zoom_factor: 2.0 };

        assert_eq!(limits.scale_at(1), 0.5);
        assert_eq!(limits.scale_at(3), 0.125);
    }
}
