use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "full-time",
            JobType::PartTime => "part-time",
            JobType::Contract => "contract",
            JobType::Internship => "internship",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEntry {
    pub id: i32,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub salary: String,
    pub summary: String,
    pub description: String,
    pub requirements: String,
    pub nice_to_have: Option<String>,
    pub posted_date: String,
}

/// Criteria for [`super::selectors::JobSelector::get_by_filter`]; a `None`
/// field imposes no constraint, set fields match by exact equality.
#[derive(Debug, Default, Clone)]
pub struct JobFilter {
    pub department: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
}

#[derive(Debug)]
pub struct JobTable {
    pub(crate) entries: BTreeMap<i32, JobEntry>,
    pub(crate) next_id: i32,
}

impl JobTable {
    pub fn new() -> Self {
        JobTable {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }

    // ids are monotonic for the process lifetime, never reused after deletes
    pub(crate) fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for JobTable {
    fn default() -> Self {
        JobTable::new()
    }
}
