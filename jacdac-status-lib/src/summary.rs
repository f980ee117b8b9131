use crate::flags::FlagTable;
use crate::replay::ReplayRecord;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// How often one flag was set across a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagCount {
    pub name: String,
    pub mask: u16,
    pub count: usize,
}

/// Per-flag occurrence counts over a sequence of replay records.
///
/// Counts are kept in table order and include flags that never appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagSummary {
    pub records: usize,
    #[serde(rename = "distinct_values", serialize_with = "serialize_len")]
    seen: BTreeSet<u16>,
    pub flags: Vec<FlagCount>,
}

impl FlagSummary {
    pub fn new(table: &FlagTable) -> Self {
        Self {
            records: 0,
            flags: table
                .iter()
                .map(|flag| FlagCount {
                    name: flag.name.to_string(),
                    mask: flag.mask,
                    count: 0,
                })
                .collect(),
            seen: BTreeSet::new(),
        }
    }

    pub fn record(&mut self, record: &ReplayRecord<'_>) {
        self.records += 1;
        self.seen.insert(record.raw);
        for entry in &mut self.flags {
            if entry.mask & record.raw != 0 {
                entry.count += 1;
            }
        }
    }

    /// Number of different raw status words recorded so far.
    pub fn distinct_values(&self) -> usize {
        self.seen.len()
    }

    pub fn count_of(&self, name: &str) -> Option<usize> {
        self.flags
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.count)
    }
}

impl fmt::Display for FlagSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} records, {} distinct values", self.records, self.distinct_values())?;
        for entry in &self.flags {
            writeln!(f, "  {:<30} {:#06x} {:>5}", entry.name, entry.mask, entry.count)?;
        }
        Ok(())
    }
}

/// Serializes the set of seen words as its size only.
fn serialize_len<S: Serializer>(seen: &BTreeSet<u16>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(seen.len() as u64)
}
