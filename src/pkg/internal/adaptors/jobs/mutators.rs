use chrono::Utc;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobTable};
use crate::pkg::server::handlers::jobs::{CreateJobInput, PatchJobInput};

pub struct JobMutator<'a> {
    table: &'a mut JobTable,
}

impl<'a> JobMutator<'a> {
    pub fn new(table: &'a mut JobTable) -> Self {
        JobMutator { table }
    }

    pub fn create(&mut self, job: CreateJobInput) -> JobEntry {
        let id = self.table.allocate_id();
        let entry = JobEntry {
            id,
            title: job.title,
            department: job.department,
            location: job.location,
            job_type: job.job_type,
            salary: job.salary,
            summary: job.summary,
            description: job.description,
            requirements: job.requirements,
            nice_to_have: job.nice_to_have,
            posted_date: Utc::now().date_naive().to_string(),
        };
        self.table.entries.insert(id, entry.clone());
        entry
    }

    /// Merges the supplied fields over the stored record; id and posted_date
    /// always keep their original values.
    pub fn update(&mut self, id: i32, job: PatchJobInput) -> Option<JobEntry> {
        let entry = self.table.entries.get_mut(&id)?;
        if let Some(title) = job.title {
            entry.title = title;
        }
        if let Some(department) = job.department {
            entry.department = department;
        }
        if let Some(location) = job.location {
            entry.location = location;
        }
        if let Some(job_type) = job.job_type {
            entry.job_type = job_type;
        }
        if let Some(salary) = job.salary {
            entry.salary = salary;
        }
        if let Some(summary) = job.summary {
            entry.summary = summary;
        }
        if let Some(description) = job.description {
            entry.description = description;
        }
        if let Some(requirements) = job.requirements {
            entry.requirements = requirements;
        }
        if let Some(nice_to_have) = job.nice_to_have {
            entry.nice_to_have = Some(nice_to_have);
        }
        Some(entry.clone())
    }

    pub fn delete(&mut self, id: i32) -> bool {
        self.table.entries.remove(&id).is_some()
    }
}
