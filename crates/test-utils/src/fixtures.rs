//! Common native-grid fixtures for write-grid tests.
//!
//! Octets are returned as plain `(lon, lat)` arrays in the order
//! SW, S, SE, E, NE, N, NW, W so this crate stays independent of the
//! crates under test.

/// Grid centers as (lon, lat) in degrees.
pub mod centers {
    /// Central CONUS, on the 0..360 longitude branch
    pub const CONUS: (f64, f64) = (262.5, 38.5);

    /// Central CONUS, on the -180..180 longitude branch
    pub const CONUS_WEST_NEGATIVE: (f64, f64) = (-97.5, 38.5);

    /// Southern hemisphere domain (south-east Australia)
    pub const SE_AUSTRALIA: (f64, f64) = (145.0, -35.0);

    /// Domain straddling the antimeridian
    pub const DATELINE: (f64, f64) = (180.0, 52.0);
}

/// Native cell sizes in meters.
pub mod cell_sizes {
    /// 3 km, the usual convection-allowing resolution
    pub const DX_3KM: f64 = 3000.0;

    /// 13 km, a coarse regional resolution
    pub const DX_13KM: f64 = 13000.0;
}

/// An octet whose faces sit `half` degrees from the center in longitude
/// and latitude.
pub fn symmetric_octet(lon_ctr: f64, lat_ctr: f64, half: f64) -> ([f64; 8], [f64; 8]) {
    let (w, e) = (lon_ctr - half, lon_ctr + half);
    let (s, n) = (lat_ctr - half, lat_ctr + half);
    (
        [w, lon_ctr, e, e, e, lon_ctr, w, w],
        [s, s, s, lat_ctr, n, n, n, lat_ctr],
    )
}

/// A symmetric octet squeezed to `width_deg` degrees of longitude, with
/// the full `half` degrees of latitude.
pub fn narrow_octet(lon_ctr: f64, lat_ctr: f64, half: f64, width_deg: f64) -> ([f64; 8], [f64; 8]) {
    let (mut lon, lat) = symmetric_octet(lon_ctr, lat_ctr, half);
    for k in [0, 6, 7] {
        lon[k] = lon_ctr - width_deg / 2.0;
    }
    for k in [2, 3, 4] {
        lon[k] = lon_ctr + width_deg / 2.0;
    }
    (lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_octet_layout() {
        let (lon, lat) = symmetric_octet(262.5, 38.5, 1.0);
        // SW
        assert_eq!((lon[0], lat[0]), (261.5, 37.5));
        // E
        assert_eq!((lon[3], lat[3]), (263.5, 38.5));
        // N
        assert_eq!((lon[5], lat[5]), (262.5, 39.5));
    }

    #[test]
    fn test_narrow_octet_width() {
        let (lon, _) = narrow_octet(262.5, 38.5, 1.0, 0.02);
        assert!((lon[4] - lon[6] - 0.02).abs() < 1e-12);
        assert_eq!(lon[1], 262.5);
    }
}
