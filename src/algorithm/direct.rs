use geographiclib_rs::DirectGeodesic;
use ndarray::{ArrayD, IxDyn};

use crate::algorithm::back_azimuth;
use crate::algorithm::broadcasting::{broadcast_iter, broadcast_shape, BroadcastableFloat};
use crate::error::GeodArrayResult;
use crate::Geod;

impl Geod {
    /// Solve the direct geodesic problem for a batch of inputs: from each
    /// start point, initial azimuth, and distance, compute the terminus point
    /// and the back azimuth at the terminus.
    ///
    /// Each input is independently a scalar or an array. The outputs share
    /// the shape of the input with the most elements; inputs with a single
    /// element broadcast against it. `NaN` anywhere in an element's input
    /// tuple yields `NaN` outputs at that position without invoking the
    /// solver.
    ///
    /// # Units
    ///
    /// - `lat1`, `lon1`, `az12`: degrees
    /// - `s12`: meters
    /// - returns `(lat2, lon2, az21)`: degrees, with `az21` the bearing from
    ///   the terminus back toward the start, in (-180°, 180°]
    ///
    /// # Examples
    ///
    /// One degree of longitude along the equator:
    ///
    /// ```
    /// use geod_array::Geod;
    ///
    /// let g = Geod::wgs84();
    /// let (lat2, lon2, az21) = g.direct(0.0, 0.0, 90.0, 111_319.49).unwrap();
    ///
    /// assert!(lat2[[0]].abs() < 1e-9);
    /// assert!((lon2[[0]] - 1.0).abs() < 1e-6);
    /// assert!((az21[[0]] + 90.0).abs() < 1e-9);
    /// ```
    pub fn direct(
        &self,
        lat1: impl Into<BroadcastableFloat>,
        lon1: impl Into<BroadcastableFloat>,
        az12: impl Into<BroadcastableFloat>,
        s12: impl Into<BroadcastableFloat>,
    ) -> GeodArrayResult<(ArrayD<f64>, ArrayD<f64>, ArrayD<f64>)> {
        let lat1 = lat1.into().into_array();
        let lon1 = lon1.into().into_array();
        let az12 = az12.into().into_array();
        let s12 = s12.into().into_array();

        let shape = broadcast_shape(&[&lat1, &lon1, &az12, &s12]).to_vec();
        let count: usize = shape.iter().product();

        let elems = broadcast_iter(&lat1, &shape)?
            .zip(broadcast_iter(&lon1, &shape)?)
            .zip(broadcast_iter(&az12, &shape)?)
            .zip(broadcast_iter(&s12, &shape)?)
            .take(count);

        let mut lat2 = Vec::with_capacity(count);
        let mut lon2 = Vec::with_capacity(count);
        let mut az21 = Vec::with_capacity(count);
        for (((vlat1, vlon1), vaz12), vs12) in elems {
            if vlat1.is_nan() || vlon1.is_nan() || vaz12.is_nan() || vs12.is_nan() {
                lat2.push(f64::NAN);
                lon2.push(f64::NAN);
                az21.push(f64::NAN);
            } else {
                let (vlat2, vlon2, azi2): (f64, f64, f64) =
                    self.geodesic().direct(vlat1, vlon1, vaz12, vs12);
                lat2.push(vlat2);
                lon2.push(vlon2);
                az21.push(back_azimuth(azi2));
            }
        }

        Ok((
            ArrayD::from_shape_vec(IxDyn(&shape), lat2)?,
            ArrayD::from_shape_vec(IxDyn(&shape), lon2)?,
            ArrayD::from_shape_vec(IxDyn(&shape), az21)?,
        ))
    }

    /// [`Geod::direct`] under its other traditional name.
    pub fn forward(
        &self,
        lat1: impl Into<BroadcastableFloat>,
        lon1: impl Into<BroadcastableFloat>,
        az12: impl Into<BroadcastableFloat>,
        s12: impl Into<BroadcastableFloat>,
    ) -> GeodArrayResult<(ArrayD<f64>, ArrayD<f64>, ArrayD<f64>)> {
        self.direct(lat1, lon1, az12, s12)
    }

    /// Longitude-first variant of [`Geod::direct`]; reorders arguments and
    /// delegates.
    pub fn direct_lonlat(
        &self,
        lon1: impl Into<BroadcastableFloat>,
        lat1: impl Into<BroadcastableFloat>,
        az12: impl Into<BroadcastableFloat>,
        s12: impl Into<BroadcastableFloat>,
    ) -> GeodArrayResult<(ArrayD<f64>, ArrayD<f64>, ArrayD<f64>)> {
        self.direct(lat1, lon1, az12, s12)
    }
}
