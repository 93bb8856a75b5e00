use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobFilter, JobTable};

pub struct JobSelector<'a> {
    table: &'a JobTable,
}

impl<'a> JobSelector<'a> {
    pub fn new(table: &'a JobTable) -> Self {
        JobSelector { table }
    }

    pub fn get_by_id(&self, id: i32) -> Option<JobEntry> {
        self.table.entries.get(&id).cloned()
    }

    // newest postings first, the listing page depends on this order
    pub fn get_all(&self) -> Vec<JobEntry> {
        self.table.entries.values().rev().cloned().collect()
    }

    pub fn get_by_filter(&self, filter: &JobFilter) -> Vec<JobEntry> {
        self.table
            .entries
            .values()
            .rev()
            .filter(|job| {
                if let Some(department) = &filter.department {
                    if &job.department != department {
                        return false;
                    }
                }
                if let Some(location) = &filter.location {
                    if &job.location != location {
                        return false;
                    }
                }
                if let Some(job_type) = &filter.job_type {
                    if job.job_type.as_str() != job_type {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }
}
