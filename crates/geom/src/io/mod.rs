mod wkt;

pub use self::wkt::decode;
