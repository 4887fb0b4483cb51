// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Single source of truth for job listings, the search query, and session
//! display state. The store itself does no validation and no IO; callers
//! validate drafts before `add` and mirror mutations to storage.

use crate::models::job::{Job, JobDraft, seed_jobs};
use crate::models::session::Session;

/// In-memory job store. Starts from the seed collection and a logged-out
/// session; persisted snapshots are applied later via [`JobStore::hydrate`].
#[derive(Clone, Debug)]
pub struct JobStore {
    jobs: Vec<Job>,
    query: String,
    session: Session,
}

impl JobStore {
    pub fn with_seed(now_ms: i64) -> Self {
        Self {
            jobs: seed_jobs(now_ms),
            query: String::new(),
            session: Session::default(),
        }
    }

    /// Full collection, most recent first.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Promote a draft to a posting and prepend it. Returns the new entry.
    pub fn add(&mut self, draft: JobDraft, now_ms: i64) -> &Job {
        let job = Job::from_draft(draft, now_ms);
        self.jobs.insert(0, job);
        &self.jobs[0]
    }

    /// Remove the posting with `id`. Silent no-op when absent.
    pub fn remove(&mut self, id: &str) {
        self.jobs.retain(|j| j.id != id);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Listings matching the current query, in collection order.
    ///
    /// A blank query matches everything; otherwise the query must appear as
    /// a case-insensitive substring of the title, location, or category.
    pub fn filtered(&self) -> Vec<&Job> {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return self.jobs.iter().collect();
        }
        self.jobs
            .iter()
            .filter(|j| {
                j.title.to_lowercase().contains(&needle)
                    || j.location.to_lowercase().contains(&needle)
                    || j.category.label().to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Listings created through the posting flow, in collection order.
    pub fn user_jobs(&self) -> Vec<&Job> {
        self.jobs.iter().filter(|j| j.is_user_posted).collect()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn sign_in(&mut self, name: impl Into<String>) {
        self.session = Session::signed_in(name);
    }

    pub fn sign_out(&mut self) {
        self.session = Session::default();
    }

    /// Apply persisted snapshots read at startup.
    ///
    /// An absent or empty job snapshot keeps the seed collection; an
    /// absent session snapshot keeps the default.
    pub fn hydrate(&mut self, jobs: Option<Vec<Job>>, session: Option<Session>) {
        if let Some(jobs) = jobs
            && !jobs.is_empty()
        {
            self.jobs = jobs;
        }
        if let Some(session) = session {
            self.session = session;
        }
    }
}
