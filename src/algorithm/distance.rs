use geographiclib_rs::InverseGeodesic;
use ndarray::{ArrayD, IxDyn};

use crate::algorithm::broadcasting::{broadcast_iter, broadcast_shape, BroadcastableFloat};
use crate::error::GeodArrayResult;
use crate::Geod;

impl Geod {
    /// Geodesic distance in meters between each pair of points, using the
    /// solver's distance-only inverse entry point.
    ///
    /// Shape handling is identical to [`Geod::inverse`], whose `dist` output
    /// this equals for the same inputs.
    pub fn distance(
        &self,
        lat1: impl Into<BroadcastableFloat>,
        lon1: impl Into<BroadcastableFloat>,
        lat2: impl Into<BroadcastableFloat>,
        lon2: impl Into<BroadcastableFloat>,
    ) -> GeodArrayResult<ArrayD<f64>> {
        let lat1 = lat1.into().into_array();
        let lon1 = lon1.into().into_array();
        let lat2 = lat2.into().into_array();
        let lon2 = lon2.into().into_array();

        let shape = broadcast_shape(&[&lat1, &lon1, &lat2, &lon2]).to_vec();
        let count: usize = shape.iter().product();

        let elems = broadcast_iter(&lat1, &shape)?
            .zip(broadcast_iter(&lon1, &shape)?)
            .zip(broadcast_iter(&lat2, &shape)?)
            .zip(broadcast_iter(&lon2, &shape)?)
            .take(count);

        let mut dist = Vec::with_capacity(count);
        for (((vlat1, vlon1), vlat2), vlon2) in elems {
            if vlat1.is_nan() || vlon1.is_nan() || vlat2.is_nan() || vlon2.is_nan() {
                dist.push(f64::NAN);
            } else {
                let s12: f64 = self.geodesic().inverse(vlat1, vlon1, vlat2, vlon2);
                dist.push(s12);
            }
        }

        Ok(ArrayD::from_shape_vec(IxDyn(&shape), dist)?)
    }

    /// Longitude-first variant of [`Geod::distance`]; reorders arguments and
    /// delegates.
    pub fn distance_lonlat(
        &self,
        lon1: impl Into<BroadcastableFloat>,
        lat1: impl Into<BroadcastableFloat>,
        lon2: impl Into<BroadcastableFloat>,
        lat2: impl Into<BroadcastableFloat>,
    ) -> GeodArrayResult<ArrayD<f64>> {
        self.distance(lat1, lon1, lat2, lon2)
    }
}
