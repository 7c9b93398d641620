use impactmap_geom::{decode, GeomError, Reprojector};
use tracing::{debug, warn};

use crate::{
    error::{Error, Result},
    feature::ProjectedFeature,
    record::RawRecord,
};

/// Build the feature table using the British National Grid -> WGS84 transform.
pub fn build(records: &[RawRecord]) -> Result<Vec<ProjectedFeature>> {
    if records.is_empty() { return Err(Error::EmptyInput("no records to build features from")) }
    let reprojector = Reprojector::national_grid_to_wgs84().map_err(Error::Projection)?;
    build_with(records, &reprojector)
}

/// Decode, flatten and reproject every record, attaching its attributes.
///
/// Records without usable geometry or with a non-finite score are dropped with a warning;
/// a failing transform aborts the whole table. Output keeps input order.
pub fn build_with(records: &[RawRecord], reprojector: &Reprojector) -> Result<Vec<ProjectedFeature>> {
    if records.is_empty() { return Err(Error::EmptyInput("no records to build features from")) }

    let mut features = Vec::with_capacity(records.len());
    for record in records {
        if let Some(feature) = build_one(record, reprojector)? {
            features.push(feature);
        }
    }

    debug!(records = records.len(), features = features.len(), "built feature table");
    Ok(features)
}

fn build_one(record: &RawRecord, reprojector: &Reprojector) -> Result<Option<ProjectedFeature>> {
    let Some(wkt) = record.geometry_wkt.as_deref().filter(|text| !text.trim().is_empty()) else {
        warn!(id = %record.id, label = %record.label, "dropping record with null geometry");
        return Ok(None)
    };

    let geometry = match decode(wkt) {
        Ok(geometry) => geometry,
        Err(err) => {
            let err = Error::MalformedGeometry(err);
            warn!(id = %record.id, label = %record.label, %err, "dropping record");
            return Ok(None)
        }
    };

    if geometry.is_empty() {
        warn!(id = %record.id, label = %record.label, kind = geometry.kind(), "dropping record with empty geometry");
        return Ok(None)
    }

    if !record.score.is_finite() {
        let err = Error::NonFiniteScore { id: record.id.clone(), score: record.score };
        warn!(id = %record.id, label = %record.label, %err, "dropping record");
        return Ok(None)
    }

    // A vertex outside the projection's domain only spoils its own record.
    let shape = match reprojector.reproject(&geometry.to_2d()) {
        Ok(shape) => shape,
        Err(err @ GeomError::Transform { .. }) => {
            let err = Error::Projection(err);
            warn!(id = %record.id, label = %record.label, %err, "dropping record");
            return Ok(None)
        }
        Err(err) => return Err(Error::Projection(err)),
    };
    let feature = ProjectedFeature::new(&record.id, &record.label, &record.group_key, shape, record.score)?
        .with_attributes(record.attributes.clone());

    Ok(Some(feature))
}
