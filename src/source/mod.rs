mod frame;

use std::collections::BTreeSet;

pub use frame::{ColumnMap, FrameSource};

use crate::{error::Result, record::RawRecord};

/// Supplier of raw rows. Fetching and caching are the implementor's business;
/// the pipeline only sees materialized records.
pub trait DataSource {
    /// Distinct group keys (highway authorities), sorted.
    fn groups(&self) -> Result<Vec<String>>;

    /// Rows in source order, restricted to one group when given.
    fn records(&self, group: Option<&str>) -> Result<Vec<RawRecord>>;
}

/// Records already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<RawRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<RawRecord>) -> Self { Self { records } }

    #[inline] pub fn len(&self) -> usize { self.records.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

impl DataSource for MemorySource {
    fn groups(&self) -> Result<Vec<String>> {
        Ok(self.records.iter()
            .map(|record| record.group_key.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    fn records(&self, group: Option<&str>) -> Result<Vec<RawRecord>> {
        Ok(self.records.iter()
            .filter(|record| group.is_none_or(|group| record.group_key == group))
            .cloned()
            .collect())
    }
}
