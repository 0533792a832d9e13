use geographiclib_rs::Geodesic;

/// Batch geodesic adapter over a fixed reference ellipsoid.
///
/// All operations on this type share one protocol: every input is a scalar or
/// an array (see [`BroadcastableFloat`](crate::BroadcastableFloat)), the
/// output shape is taken from the input with the most elements, and the
/// solver runs once per output element. The ellipsoid is fixed per instance,
/// never per call.
///
/// Calls are stateless and independent; `Geod` holds no mutable state.
#[derive(Clone, Copy, Debug)]
pub struct Geod {
    geodesic: Geodesic,
}

impl Geod {
    /// Wraps an existing solver instance.
    pub fn new(geodesic: Geodesic) -> Self {
        Self { geodesic }
    }

    /// Adapter over an ellipsoid with equatorial radius `a` (meters) and
    /// flattening `f`.
    pub fn from_ellipsoid(a: f64, f: f64) -> Self {
        Self::new(Geodesic::new(a, f))
    }

    /// Adapter over the WGS84 ellipsoid.
    pub fn wgs84() -> Self {
        Self::new(Geodesic::wgs84())
    }

    /// The underlying solver.
    pub fn geodesic(&self) -> &Geodesic {
        &self.geodesic
    }
}

impl Default for Geod {
    fn default() -> Self {
        Self::wgs84()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wgs84_ellipsoid_parameters() {
        let g = Geod::wgs84();
        assert_eq!(g.geodesic().a, 6_378_137.0);
        assert_eq!(g.geodesic().f, 1.0 / 298.257223563);
    }

    #[test]
    fn custom_ellipsoid() {
        // A sphere: flattening zero.
        let g = Geod::from_ellipsoid(6_371_000.0, 0.0);
        assert_eq!(g.geodesic().a, 6_371_000.0);
        assert_eq!(g.geodesic().f, 0.0);
    }
}
