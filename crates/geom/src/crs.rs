use std::fmt;

/// A coordinate reference system identified by its EPSG code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs(u32);

impl Crs {
    /// OSGB36 / British National Grid, metres.
    pub const BRITISH_NATIONAL_GRID: Crs = Crs(27700);
    /// WGS84 longitude/latitude, degrees.
    pub const WGS84: Crs = Crs(4326);
    /// WGS84 / Pseudo-Mercator, metres.
    pub const WEB_MERCATOR: Crs = Crs(3857);

    #[inline] pub const fn epsg(code: u32) -> Self { Self(code) }

    #[inline] pub const fn code(&self) -> u32 { self.0 }

    /// PROJ.4 definition for the codes this crate knows how to transform.
    pub fn proj4(&self) -> Option<&'static str> {
        match self.0 {
            27700 => Some(concat!(
                "+proj=tmerc +lat_0=49 +lon_0=-2 +k=0.9996012717 +x_0=400000 +y_0=-100000 ",
                "+ellps=airy +towgs84=446.448,-125.157,542.06,0.15,0.247,0.842,-20.489 +units=m +no_defs +type=crs",
            )),
            4326 => Some("+proj=longlat +datum=WGS84 +no_defs +type=crs"),
            3857 => Some(concat!(
                "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 ",
                "+units=m +no_defs +type=crs",
            )),
            _ => None,
        }
    }

    /// Geographic CRSs take and return degrees; proj4rs works in radians for them.
    #[inline] pub fn is_geographic(&self) -> bool { matches!(self.0, 4326) }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}
