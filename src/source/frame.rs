//! Tabular rows (as returned by the query service) exposed as a [`DataSource`].

use std::{collections::{BTreeMap, BTreeSet}, fs::File, path::Path};

use polars::{io::SerReader, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Error, Result},
    record::{AttrValue, RawRecord},
    source::DataSource,
};

/// Names of the columns that carry the record fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub id: String,
    pub label: String,
    pub group: String,
    pub geometry: String,
    pub score: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            id: "usrn".into(),
            label: "street_name".into(),
            group: "highway_authority".into(),
            geometry: "geometry".into(),
            score: "total_impact_level".into(),
        }
    }
}

impl ColumnMap {
    fn required(&self) -> [&str; 5] {
        [&self.id, &self.label, &self.group, &self.geometry, &self.score]
    }
}

/// A polars `DataFrame` of street rows.
#[derive(Debug, Clone)]
pub struct FrameSource {
    frame: DataFrame,
    columns: ColumnMap,
}

impl FrameSource {
    /// Wrap a frame, checking that every mapped column is present.
    pub fn new(frame: DataFrame, columns: ColumnMap) -> Result<Self> {
        let missing = columns.required().into_iter()
            .filter(|name| frame.column(name).is_err())
            .map(str::to_string)
            .collect::<Vec<_>>();
        if !missing.is_empty() { return Err(Error::MissingColumns(missing)) }

        Ok(Self { frame, columns })
    }

    /// Read a CSV export with a header row.
    pub fn read_csv(path: &Path, columns: ColumnMap) -> Result<Self> {
        let file = File::open(path)?;
        let frame = CsvReader::new(file).finish()?;
        debug!(path = %path.display(), rows = frame.height(), "read csv");
        Self::new(frame, columns)
    }

    #[inline] pub fn frame(&self) -> &DataFrame { &self.frame }

    #[inline] pub fn columns(&self) -> &ColumnMap { &self.columns }

    /// Column cast to strings; ids such as USRNs are often inferred as integers.
    fn text_column(&self, name: &str) -> Result<Column> {
        Ok(self.frame.column(name)?.cast(&DataType::String)?)
    }

    fn number_column(&self, name: &str) -> Result<Column> {
        let column = self.frame.column(name)?;
        Ok(if column.dtype() != &DataType::Float64 { column.cast(&DataType::Float64)? } else { column.clone() })
    }

    /// Every column that is not one of the mapped record fields, typed for attribute extraction.
    fn attribute_columns(&self) -> Result<Vec<(String, Column)>> {
        let required = self.columns.required();
        self.frame.get_columns().iter()
            .filter(|column| !required.contains(&column.name().as_str()))
            .map(|column| {
                let name = column.name().to_string();
                let typed = if is_numeric(column.dtype()) {
                    column.cast(&DataType::Float64)?
                } else {
                    column.cast(&DataType::String)?
                };
                Ok((name, typed))
            })
            .collect()
    }
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(dtype,
        DataType::Int8 | DataType::Int16 | DataType::Int32 | DataType::Int64 |
        DataType::UInt8 | DataType::UInt16 | DataType::UInt32 | DataType::UInt64 |
        DataType::Float32 | DataType::Float64
    )
}

fn attribute_at(column: &Column, idx: usize) -> Result<Option<AttrValue>> {
    Ok(match column.dtype() {
        DataType::Float64 => column.f64()?.get(idx).map(AttrValue::Number),
        _ => column.str()?.get(idx).map(AttrValue::from),
    })
}

impl DataSource for FrameSource {
    fn groups(&self) -> Result<Vec<String>> {
        let groups = self.text_column(&self.columns.group)?;
        Ok(groups.str()?.into_iter()
            .flatten()
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    fn records(&self, group: Option<&str>) -> Result<Vec<RawRecord>> {
        let ids = self.text_column(&self.columns.id)?;
        let labels = self.text_column(&self.columns.label)?;
        let groups = self.text_column(&self.columns.group)?;
        let geometries = self.text_column(&self.columns.geometry)?;
        let scores = self.number_column(&self.columns.score)?;
        let attributes = self.attribute_columns()?;

        let (ids, labels, groups, geometries, scores) =
            (ids.str()?, labels.str()?, groups.str()?, geometries.str()?, scores.f64()?);

        let mut records = Vec::new();
        for idx in 0..self.frame.height() {
            let group_key = groups.get(idx).unwrap_or_default();
            if group.is_some_and(|group| group != group_key) { continue }

            let mut record_attributes = BTreeMap::new();
            for (name, column) in &attributes {
                if let Some(value) = attribute_at(column, idx)? {
                    record_attributes.insert(name.clone(), value);
                }
            }

            records.push(RawRecord {
                id: ids.get(idx).unwrap_or_default().to_string(),
                label: labels.get(idx).unwrap_or_default().to_string(),
                group_key: group_key.to_string(),
                geometry_wkt: geometries.get(idx).map(str::to_string),
                score: scores.get(idx).unwrap_or(f64::NAN),
                attributes: record_attributes,
            });
        }

        debug!(group, rows = records.len(), "materialized records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df!(
            "usrn" => [8400001i64, 8400002, 8400003],
            "street_name" => ["High Street", "Mill Lane", "Station Road"],
            "highway_authority" => ["Wiltshire", "Bristol", "Wiltshire"],
            "geometry" => [Some("LINESTRING(400000 160000, 400100 160100)"), None, Some("POINT(400000 160000)")],
            "total_impact_level" => [Some(2.5), Some(1.0), None],
            "works_count" => [3i64, 1, 4],
            "activity_type" => [Some("Remedial"), Some("Section 58"), None],
        ).unwrap()
    }

    #[test]
    fn missing_columns_are_named() {
        let frame = df!("usrn" => [1i64]).unwrap();
        let Err(Error::MissingColumns(missing)) = FrameSource::new(frame, ColumnMap::default()) else {
            panic!("expected MissingColumns")
        };
        assert_eq!(missing, vec!["street_name", "highway_authority", "geometry", "total_impact_level"]);
    }

    #[test]
    fn groups_are_sorted() {
        let source = FrameSource::new(frame(), ColumnMap::default()).unwrap();
        assert_eq!(source.groups().unwrap(), vec!["Bristol", "Wiltshire"]);
    }

    #[test]
    fn records_map_columns_and_attributes() {
        let source = FrameSource::new(frame(), ColumnMap::default()).unwrap();
        let records = source.records(Some("Wiltshire")).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.id, "8400001");
        assert_eq!(first.label, "High Street");
        assert_eq!(first.score, 2.5);
        assert_eq!(first.attributes["works_count"], AttrValue::Number(3.0));
        assert_eq!(first.attributes["activity_type"], AttrValue::Text("Remedial".into()));

        let second = &records[1];
        assert_eq!(second.id, "8400003");
        assert!(second.score.is_nan());
        assert!(!second.attributes.contains_key("activity_type"));
    }

    #[test]
    fn null_geometry_becomes_none() {
        let source = FrameSource::new(frame(), ColumnMap::default()).unwrap();
        let records = source.records(Some("Bristol")).unwrap();
        assert_eq!(records[0].geometry_wkt, None);
    }

    #[test]
    fn custom_column_names() {
        let frame = df!(
            "ref" => ["A"],
            "name" => ["Lane"],
            "authority" => ["Camden"],
            "wkt" => ["POINT(1 2)"],
            "impact" => [1.5],
        ).unwrap();
        let columns = ColumnMap {
            id: "ref".into(), label: "name".into(), group: "authority".into(),
            geometry: "wkt".into(), score: "impact".into(),
        };
        let records = FrameSource::new(frame, columns).unwrap().records(None).unwrap();
        assert_eq!(records[0].id, "A");
        assert!(records[0].attributes.is_empty());
    }
}
