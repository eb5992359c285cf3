//! Lambert Conformal Conic projection.
//!
//! This projection is the usual write grid for regional weather models.
//! It maps a cone tangent or secant to a spherical Earth onto a flat plane.
//!
//! The projection parameters include:
//! - Reference longitude (lon0): the central meridian
//! - Reference latitude (lat0): the latitude of the origin, where y = 0
//! - Standard parallel(s): stdlat1 and stdlat2 (equal for a tangent cone)
//! - Sphere radius in meters
//!
//! Planar coordinates are meters from the projection origin with no false
//! easting or northing, so `(lon0, lat0)` maps to `(0, 0)`.

use std::f64::consts::PI;

use crate::error::{ProjectionError, ProjectionResult};
use crate::transform::MapProjection;

/// Radius of the spherical datum used for write grids (meters).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Tolerance for treating two standard parallels as one.
const TANGENT_TOL: f64 = 1e-10;

/// Spherical Lambert Conformal Conic projection.
#[derive(Debug, Clone)]
pub struct LambertConformal {
    /// Central meridian in radians
    lon0: f64,
    /// Latitude of origin in radians
    lat0: f64,
    /// First standard parallel in radians
    stdlat1: f64,
    /// Second standard parallel in radians
    stdlat2: f64,
    /// Sphere radius (meters)
    radius: f64,
    /// Cone constant (n)
    n: f64,
    /// F constant
    f: f64,
    /// Rho at the latitude of origin
    rho0: f64,
}

impl LambertConformal {
    /// Create a Lambert Conformal projection.
    ///
    /// # Arguments
    /// * `lon0_deg` - Central meridian (degrees)
    /// * `lat0_deg` - Latitude of origin (degrees)
    /// * `stdlat1_deg` - First standard parallel (degrees)
    /// * `stdlat2_deg` - Second standard parallel (degrees)
    /// * `radius` - Sphere radius (meters)
    pub fn new(
        lon0_deg: f64,
        lat0_deg: f64,
        stdlat1_deg: f64,
        stdlat2_deg: f64,
        radius: f64,
    ) -> ProjectionResult<Self> {
        if !lon0_deg.is_finite() {
            return Err(ProjectionError::InvalidParameter {
                name: "lon0",
                value: lon0_deg,
            });
        }
        check_latitude("lat0", lat0_deg)?;
        check_latitude("stdlat1", stdlat1_deg)?;
        check_latitude("stdlat2", stdlat2_deg)?;
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ProjectionError::InvalidParameter {
                name: "radius",
                value: radius,
            });
        }

        let lon0 = lon0_deg.to_radians();
        let lat0 = lat0_deg.to_radians();
        let stdlat1 = stdlat1_deg.to_radians();
        let stdlat2 = stdlat2_deg.to_radians();

        // Compute cone constant n
        let n = if (stdlat1 - stdlat2).abs() < TANGENT_TOL {
            // Tangent cone (single standard parallel)
            stdlat1.sin()
        } else {
            // Secant cone (two standard parallels)
            let ln_ratio = (stdlat1.cos() / stdlat2.cos()).ln();
            let tan_ratio = (half_colat_tan(stdlat2) / half_colat_tan(stdlat1)).ln();
            ln_ratio / tan_ratio
        };
        if !n.is_finite() || n.abs() < TANGENT_TOL {
            // A cone tangent at the equator degenerates into a cylinder.
            return Err(ProjectionError::InvalidParameter {
                name: "cone_constant",
                value: n,
            });
        }

        let f = stdlat1.cos() * half_colat_tan(stdlat1).powf(n) / n;
        let rho0 = radius * f / half_colat_tan(lat0).powf(n);

        Ok(Self {
            lon0,
            lat0,
            stdlat1,
            stdlat2,
            radius,
            n,
            f,
            rho0,
        })
    }

    /// Tangent-cone projection whose single standard parallel is also the
    /// latitude of origin.
    pub fn tangent(lon0_deg: f64, lat0_deg: f64, radius: f64) -> ProjectionResult<Self> {
        Self::new(lon0_deg, lat0_deg, lat0_deg, lat0_deg, radius)
    }

    /// Central meridian in degrees.
    pub fn central_meridian(&self) -> f64 {
        self.lon0.to_degrees()
    }

    /// Latitude of origin in degrees.
    pub fn origin_latitude(&self) -> f64 {
        self.lat0.to_degrees()
    }

    /// Standard parallels in degrees.
    pub fn standard_parallels(&self) -> (f64, f64) {
        (self.stdlat1.to_degrees(), self.stdlat2.to_degrees())
    }

    /// Sphere radius in meters.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Cone constant.
    pub fn cone_constant(&self) -> f64 {
        self.n
    }

    /// Distance from the cone apex for a latitude in radians.
    fn rho(&self, lat: f64) -> ProjectionResult<f64> {
        if (lat.abs() - PI / 2.0).abs() < TANGENT_TOL {
            if lat * self.n > 0.0 {
                // The pole on the apex side maps to the apex itself.
                return Ok(0.0);
            }
            return Err(ProjectionError::OutOfDomain(format!(
                "latitude {:.6} is the pole opposite the cone apex",
                lat.to_degrees()
            )));
        }
        Ok(self.radius * self.f / half_colat_tan(lat).powf(self.n))
    }
}

impl MapProjection for LambertConformal {
    fn project(&self, lon: f64, lat: f64) -> ProjectionResult<(f64, f64)> {
        if !(lon.is_finite() && lat.is_finite()) {
            return Err(ProjectionError::NonFiniteInput { x: lon, y: lat });
        }
        if lat.abs() > 90.0 {
            return Err(ProjectionError::OutOfDomain(format!(
                "latitude {} outside [-90, 90]",
                lat
            )));
        }

        let rho = self.rho(lat.to_radians())?;

        // Normalize longitude difference to [-π, π]
        let mut dlon = lon.to_radians() - self.lon0;
        while dlon > PI {
            dlon -= 2.0 * PI;
        }
        while dlon < -PI {
            dlon += 2.0 * PI;
        }

        let theta = self.n * dlon;
        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();

        if !(x.is_finite() && y.is_finite()) {
            return Err(ProjectionError::OutOfDomain(format!(
                "({}, {}) projects to a non-finite point",
                lon, lat
            )));
        }
        Ok((x, y))
    }

    fn unproject(&self, x: f64, y: f64) -> ProjectionResult<(f64, f64)> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(ProjectionError::NonFiniteInput { x, y });
        }

        let mut px = x;
        let mut py = self.rho0 - y;
        let mut rho = px.hypot(py);
        if self.n < 0.0 {
            rho = -rho;
            px = -px;
            py = -py;
        }

        if rho == 0.0 {
            let pole = if self.n > 0.0 { 90.0 } else { -90.0 };
            return Ok((self.lon0.to_degrees(), pole));
        }

        let theta = px.atan2(py);
        let lat = 2.0 * (self.radius * self.f / rho).powf(1.0 / self.n).atan() - PI / 2.0;
        let lon = self.lon0 + theta / self.n;

        Ok((lon.to_degrees(), lat.to_degrees()))
    }
}

/// `tan(π/4 + φ/2)`, the conformal half-colatitude term.
fn half_colat_tan(lat: f64) -> f64 {
    (PI / 4.0 + lat / 2.0).tan()
}

fn check_latitude(name: &'static str, value: f64) -> ProjectionResult<()> {
    if value.is_finite() && value.abs() < 90.0 {
        Ok(())
    } else {
        Err(ProjectionError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conus() -> LambertConformal {
        LambertConformal::tangent(262.5, 38.5, EARTH_RADIUS_M).unwrap()
    }

    #[test]
    fn test_origin_maps_to_zero() {
        let proj = conus();
        let (x, y) = proj.project(262.5, 38.5).unwrap();
        assert!(x.abs() < 1e-6, "x should be ~0, got {}", x);
        assert!(y.abs() < 1e-6, "y should be ~0, got {}", y);
    }

    #[test]
    fn test_axes_orientation() {
        let proj = conus();
        let (x_east, _) = proj.project(263.5, 38.5).unwrap();
        let (x_west, _) = proj.project(261.5, 38.5).unwrap();
        let (_, y_north) = proj.project(262.5, 39.5).unwrap();
        let (_, y_south) = proj.project(262.5, 37.5).unwrap();

        assert!(x_east > 0.0 && x_west < 0.0);
        assert!((x_east + x_west).abs() < 1e-6, "x should be symmetric about lon0");
        assert!(y_north > 0.0 && y_south < 0.0);
    }

    #[test]
    fn test_unit_scale_on_standard_parallel() {
        let proj = conus();
        // A small step north along the central meridian is true to scale.
        let dlat = 0.01_f64;
        let (_, y) = proj.project(262.5, 38.5 + dlat).unwrap();
        let expected = EARTH_RADIUS_M * dlat.to_radians();
        assert!(
            ((y - expected) / expected).abs() < 1e-4,
            "scale error: {} vs {}",
            y,
            expected
        );
    }

    #[test]
    fn test_longitude_branches_are_equivalent() {
        let proj = conus();
        let (x1, y1) = proj.project(-97.5 - 1.25, 40.0).unwrap();
        let (x2, y2) = proj.project(262.5 - 1.25, 40.0).unwrap();
        assert!((x1 - x2).abs() < 1e-6);
        assert!((y1 - y2).abs() < 1e-6);
    }

    #[test]
    fn test_roundtrip() {
        let proj = conus();
        for &(lon, lat) in &[(262.5, 38.5), (250.0, 25.0), (280.0, 50.0), (262.5, 70.0)] {
            let (x, y) = proj.project(lon, lat).unwrap();
            let (lon2, lat2) = proj.unproject(x, y).unwrap();
            assert!((lon - lon2).abs() < 1e-8, "lon roundtrip failed: {} vs {}", lon, lon2);
            assert!((lat - lat2).abs() < 1e-8, "lat roundtrip failed: {} vs {}", lat, lat2);
        }
    }

    #[test]
    fn test_secant_roundtrip() {
        // HRRR-like secant definition
        let proj = LambertConformal::new(-97.5, 38.5, 33.0, 45.0, EARTH_RADIUS_M).unwrap();
        let (x, y) = proj.project(-105.0, 42.0).unwrap();
        let (lon, lat) = proj.unproject(x, y).unwrap();
        assert!((lon + 105.0).abs() < 1e-8);
        assert!((lat - 42.0).abs() < 1e-8);
    }

    #[test]
    fn test_southern_hemisphere_roundtrip() {
        let proj = LambertConformal::tangent(145.0, -35.0, EARTH_RADIUS_M).unwrap();
        assert!(proj.cone_constant() < 0.0);

        let (x, y) = proj.project(150.0, -30.0).unwrap();
        assert!(x > 0.0 && y > 0.0);
        let (lon, lat) = proj.unproject(x, y).unwrap();
        assert!((lon - 150.0).abs() < 1e-8);
        assert!((lat + 30.0).abs() < 1e-8);
    }

    #[test]
    fn test_apex_pole() {
        let proj = conus();
        let (x, y) = proj.project(0.0, 90.0).unwrap();
        let (lon, lat) = proj.unproject(x, y).unwrap();
        assert!((lat - 90.0).abs() < 1e-9);
        assert!((lon - 262.5).abs() < 1e-9);

        assert!(matches!(
            proj.project(0.0, -90.0),
            Err(ProjectionError::OutOfDomain(_))
        ));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            LambertConformal::tangent(0.0, 0.0, EARTH_RADIUS_M),
            Err(ProjectionError::InvalidParameter { name: "cone_constant", .. })
        ));
        assert!(matches!(
            LambertConformal::tangent(0.0, 90.0, EARTH_RADIUS_M),
            Err(ProjectionError::InvalidParameter { name: "lat0", .. })
        ));
        assert!(matches!(
            LambertConformal::tangent(0.0, 40.0, -1.0),
            Err(ProjectionError::InvalidParameter { name: "radius", .. })
        ));
        assert!(LambertConformal::tangent(f64::NAN, 40.0, EARTH_RADIUS_M).is_err());
    }

    #[test]
    fn test_non_finite_coordinates() {
        let proj = conus();
        assert!(matches!(
            proj.project(f64::NAN, 40.0),
            Err(ProjectionError::NonFiniteInput { .. })
        ));
        assert!(matches!(
            proj.unproject(0.0, f64::INFINITY),
            Err(ProjectionError::NonFiniteInput { .. })
        ));
        assert!(proj.project(262.5, 95.0).is_err());
    }

    #[test]
    fn test_project_all_stops_on_error() {
        let proj = conus();
        let ok = proj.project_all(&[262.5, 263.0], &[38.5, 39.0]).unwrap();
        assert_eq!(ok.len(), 2);
        assert!(proj.project_all(&[262.5, f64::NAN], &[38.5, 39.0]).is_err());
    }

    #[test]
    fn test_project_all_rejects_mismatched_lengths() {
        let proj = conus();
        assert_eq!(
            proj.project_all(&[262.5, 263.0], &[38.5]),
            Err(ProjectionError::LengthMismatch { lons: 2, lats: 1 })
        );
    }
}
