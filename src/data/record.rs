use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::common::js_number;

/// One county's educational attainment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub fips: i64,
    pub state: String,
    pub area_name: String,
    /// Percentage of adults with a bachelor's degree or higher.
    #[serde(rename = "bachelorsOrHigher")]
    pub bachelors_or_higher: f64,
}

impl EducationRecord {
    /// Tooltip line, e.g. `Autauga County, AL: 25.3%`.
    pub fn tooltip_text(&self) -> String {
        format!("{}, {}: {}%", self.area_name, self.state, js_number(self.bachelors_or_higher))
    }
}

/// Loaded records plus a FIPS index.
///
/// Records are kept as loaded, duplicates included; the index points at the
/// first record carrying each FIPS code so lookups agree with a front-to-back scan.
#[derive(Clone, Debug, Default)]
pub struct EducationData {
    records: Vec<EducationRecord>,
    index: AHashMap<i64, usize>,
}

impl EducationData {
    pub fn new(records: Vec<EducationRecord>) -> Self {
        let mut index = AHashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            index.entry(record.fips).or_insert(i);
        }
        Self { records, index }
    }

    #[inline]
    pub fn get(&self, fips: i64) -> Option<&EducationRecord> {
        self.index.get(&fips).map(|&i| &self.records[i])
    }

    /// Attainment for `fips`, or 0 when nothing matches.
    #[inline]
    pub fn value_or_zero(&self, fips: Option<i64>) -> f64 {
        fips.and_then(|f| self.get(f)).map_or(0.0, |r| r.bachelors_or_higher)
    }

    pub fn records(&self) -> &[EducationRecord] { &self.records }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// `(min, max)` of the attainment values, `None` when there are no records.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let mut values = self.records.iter().map(|r| r.bachelors_or_higher);
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
