use geographiclib_rs::InverseGeodesic;
use ndarray::{ArrayD, IxDyn};

use crate::algorithm::back_azimuth;
use crate::algorithm::broadcasting::{broadcast_iter, broadcast_shape, BroadcastableFloat};
use crate::error::GeodArrayResult;
use crate::Geod;

impl Geod {
    /// Solve the inverse geodesic problem for a batch of inputs: for each
    /// pair of points, compute the distance, the forward azimuth at the
    /// first point, and the back azimuth at the second.
    ///
    /// Shape handling is identical to [`Geod::direct`]: outputs share the
    /// shape of the largest input, single-element inputs broadcast, and `NaN`
    /// inputs propagate positionally.
    ///
    /// # Units
    ///
    /// - `lat1`, `lon1`, `lat2`, `lon2`: degrees
    /// - returns `(dist, az12, az21)`: meters, degrees, degrees
    ///
    /// # Examples
    ///
    /// ```
    /// use geod_array::Geod;
    ///
    /// let g = Geod::wgs84();
    /// let (dist, az12, az21) = g.inverse(0.0, 0.0, 0.0, 1.0).unwrap();
    ///
    /// assert!((dist[[0]] - 111_319.49).abs() < 0.01);
    /// assert!((az12[[0]] - 90.0).abs() < 1e-9);
    /// assert!((az21[[0]] + 90.0).abs() < 1e-9);
    /// ```
    pub fn inverse(
        &self,
        lat1: impl Into<BroadcastableFloat>,
        lon1: impl Into<BroadcastableFloat>,
        lat2: impl Into<BroadcastableFloat>,
        lon2: impl Into<BroadcastableFloat>,
    ) -> GeodArrayResult<(ArrayD<f64>, ArrayD<f64>, ArrayD<f64>)> {
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
        let mut az12 = Vec::with_capacity(count);
        let mut az21 = Vec::with_capacity(count);
        for (((vlat1, vlon1), vlat2), vlon2) in elems {
            if vlat1.is_nan() || vlon1.is_nan() || vlat2.is_nan() || vlon2.is_nan() {
                dist.push(f64::NAN);
                az12.push(f64::NAN);
                az21.push(f64::NAN);
            } else {
                // The 4-tuple impl is the smallest one that carries the
                // distance together with both azimuths; the arc length is
                // discarded.
                let (s12, azi1, azi2, _a12): (f64, f64, f64, f64) =
                    self.geodesic().inverse(vlat1, vlon1, vlat2, vlon2);
                dist.push(s12);
                az12.push(azi1);
                az21.push(back_azimuth(azi2));
            }
        }

        Ok((
            ArrayD::from_shape_vec(IxDyn(&shape), dist)?,
            ArrayD::from_shape_vec(IxDyn(&shape), az12)?,
            ArrayD::from_shape_vec(IxDyn(&shape), az21)?,
        ))
    }

    /// Longitude-first variant of [`Geod::inverse`]; reorders arguments and
    /// delegates.
    pub fn inverse_lonlat(
        &self,
        lon1: impl Into<BroadcastableFloat>,
        lat1: impl Into<BroadcastableFloat>,
        lon2: impl Into<BroadcastableFloat>,
        lat2: impl Into<BroadcastableFloat>,
    ) -> GeodArrayResult<(ArrayD<f64>, ArrayD<f64>, ArrayD<f64>)> {
        self.inverse(lat1, lon1, lat2, lon2)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use crate::error::GeodArrayError;
    use crate::Geod;

    #[test]
    fn one_degree_along_the_equator() {
        let g = Geod::wgs84();
        let (dist, az12, az21) = g.inverse(0.0, 0.0, 0.0, 1.0).unwrap();

        assert_eq!(dist.shape(), &[1]);
        assert_relative_eq!(dist[[0]], 111_319.49, epsilon = 1e-2);
        assert_relative_eq!(az12[[0]], 90.0, epsilon = 1e-9);
        assert_relative_eq!(az21[[0]], -90.0, epsilon = 1e-9);
    }

    #[test]
    fn equal_size_arrays_compute_positionally() {
        let g = Geod::wgs84();
        let (dist, az12, az21) = g
            .inverse(
                vec![0.0, 10.0],
                vec![0.0, 10.0],
                vec![0.0, 20.0],
                vec![1.0, 30.0],
            )
            .unwrap();

        assert_eq!(dist.shape(), &[2]);
        let (d0, a0, b0) = g.inverse(0.0, 0.0, 0.0, 1.0).unwrap();
        let (d1, a1, b1) = g.inverse(10.0, 10.0, 20.0, 30.0).unwrap();
        assert_eq!(dist[[0]], d0[[0]]);
        assert_eq!(az12[[0]], a0[[0]]);
        assert_eq!(az21[[0]], b0[[0]]);
        assert_eq!(dist[[1]], d1[[0]]);
        assert_eq!(az12[[1]], a1[[0]]);
        assert_eq!(az21[[1]], b1[[0]]);
    }

    #[test]
    fn output_shape_follows_first_largest_input() {
        let g = Geod::wgs84();
        // Two size-6 inputs with different shapes: the earlier argument's
        // shape wins.
        let lat1 = array![[0.0, 0.0, 0.0], [10.0, 10.0, 10.0]];
        let lon1 = array![[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]];
        let (dist, _, _) = g.inverse(lat1, lon1, 0.0, 1.0).unwrap();
        assert_eq!(dist.shape(), &[2, 3]);

        let lat1 = array![[0.0, 0.0, 0.0], [10.0, 10.0, 10.0]];
        let lon1 = array![[0.0, 1.0], [2.0, 3.0], [4.0, 5.0]];
        let (dist, _, _) = g.inverse(lon1, lat1, 0.0, 1.0).unwrap();
        assert_eq!(dist.shape(), &[3, 2]);
    }

    #[test]
    fn lonlat_variant_reorders_arguments() {
        let g = Geod::wgs84();
        let (dist, az12, az21) = g.inverse(35.0, 135.0, 40.0, 140.0).unwrap();
        let (ldist, laz12, laz21) = g.inverse_lonlat(135.0, 35.0, 140.0, 40.0).unwrap();
        assert_eq!(dist[[0]], ldist[[0]]);
        assert_eq!(az12[[0]], laz12[[0]]);
        assert_eq!(az21[[0]], laz21[[0]]);
    }

    #[test]
    fn incompatible_sizes_error_before_dispatch() {
        let g = Geod::wgs84();
        let err = g
            .inverse(vec![0.0, 1.0], vec![0.0, 1.0, 2.0], 0.0, 1.0)
            .unwrap_err();
        assert!(matches!(err, GeodArrayError::ShapeMismatch { .. }));
    }
}
