//! Plain data holders exchanged with an astrometry engine.
//!
//! These are presentation-side value types: the engine supplies and consumes
//! the raw angle doubles, and the `Display` impls here dump them in the
//! sexagesimal notation for checkout/diagnostic output.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::hexagesimal::Hexagesimal;

/// An entry of a star catalog with the ICRS position and motion parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogEntry {
    /// Star name
    pub name: String,
    /// Catalog designator (e.g. HIP, FK6)
    pub catalog: String,
    /// Number of the star within the catalog
    pub number: i32,
    /// Right ascension, hours
    pub ra: Hexagesimal,
    /// Declination, degrees
    pub dec: Hexagesimal,
    /// Proper motion in right ascension, mas/year
    pub ra_proper_motion: f64,
    /// Proper motion in declination, mas/year
    pub dec_proper_motion: f64,
    /// Parallax, mas
    pub parallax: f64,
    /// Radial velocity, km/s
    pub radial_velocity: f64,
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CatalogEntry {{ {}, {}, {}, [{:#16.5}, {:#16.5}], [{:3.2}, {:3.2}], {:3.2}, {:3.2} }}",
            self.name,
            self.catalog,
            self.number,
            self.ra.as_hours(),
            self.dec,
            self.ra_proper_motion,
            self.dec_proper_motion,
            self.parallax,
            self.radial_velocity
        )
    }
}

/// The position of an observer on the Earth's surface,
/// with the weather data for refraction.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SurfaceLocation {
    /// Geodetic latitude, degrees (north positive)
    pub latitude: Hexagesimal,
    /// Geodetic longitude, degrees (east positive)
    pub longitude: Hexagesimal,
    /// Height above sea level, meters
    pub height: f64,
    /// Ambient temperature, degrees Celsius
    pub temperature: f64,
    /// Atmospheric pressure, millibars
    pub pressure: f64,
}

impl fmt::Display for SurfaceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SurfaceLocation {{ [{:#10.0}, {:#10.0}], {:2.1}, {:2.1}, {:2.1} }}",
            self.latitude, self.longitude, self.height, self.temperature, self.pressure
        )
    }
}

/// An apparent position on the sky as computed by the engine.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyPosition {
    /// Unit vector toward the object
    pub r_hat: [f64; 3],
    /// Apparent right ascension, hours
    pub ra: Hexagesimal,
    /// Apparent declination, degrees
    pub dec: Hexagesimal,
    /// True distance to the object, AU (0 for stars)
    pub distance: f64,
    /// Radial velocity, km/s
    pub radial_velocity: f64,
}

impl fmt::Display for SkyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SkyPosition {{ [{:5.4}, {:5.4}, {:5.4}], [{:#10.0}, {:#10.0}], {:2.1}, {:5.4} }}",
            self.r_hat[0],
            self.r_hat[1],
            self.r_hat[2],
            self.ra.as_hours(),
            self.dec,
            self.distance,
            self.radial_velocity
        )
    }
}
