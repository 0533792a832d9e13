//! Batch geodesic operations, implemented on [`Geod`](crate::Geod).

pub mod broadcasting;

mod direct;
mod distance;
mod inverse;

/// Converts the solver's forward azimuth at the terminus into the back
/// azimuth (bearing from the terminus toward the start), in (-180, 180].
pub(crate) fn back_azimuth(azi2: f64) -> f64 {
    let az = azi2 + 180.0;
    if az > 180.0 {
        az - 360.0
    } else {
        az
    }
}

#[cfg(test)]
mod tests {
    use super::back_azimuth;

    #[test]
    fn back_azimuth_wraps_into_range() {
        assert_eq!(back_azimuth(90.0), -90.0);
        assert_eq!(back_azimuth(-90.0), 90.0);
        assert_eq!(back_azimuth(0.0), 180.0);
        assert_eq!(back_azimuth(180.0), 0.0);
        assert_eq!(back_azimuth(-180.0), 0.0);
        assert!(back_azimuth(f64::NAN).is_nan());
    }
}
