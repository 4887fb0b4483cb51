// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Job posting domain model and the built-in demonstration listings.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day in epoch milliseconds, used for seed timestamps.
pub const DAY_MS: i64 = 86_400_000;

/// Cities selectable when posting a job or registering.
pub const CITIES: &[&str] = &["Amman", "Irbid", "Ajloun", "AL-Zarqaa", "Aqaba"];

/// Fixed set of job categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Healthcare,
    Hospitality,
    Creative,
    Services,
    Technical,
    Office,
    #[default]
    Other,
}

impl Category {
    /// All categories in display order, for chip grids and filters.
    pub const ALL: [Category; 7] = [
        Category::Healthcare,
        Category::Hospitality,
        Category::Creative,
        Category::Services,
        Category::Technical,
        Category::Office,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Healthcare => "Healthcare",
            Category::Hospitality => "Hospitality",
            Category::Creative => "Creative",
            Category::Services => "Services",
            Category::Technical => "Technical",
            Category::Office => "Office",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single freelance posting.
///
/// Serialized with camelCase keys so existing persisted payloads keep
/// matching. There is no schema version field; a shape change invalidates
/// old slots and they fall back to the seed collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    pub title: String,
    pub location: String,
    pub description: String,
    /// Hourly rate, kept as text (numeric in practice).
    pub salary: String,
    /// Minimum applicant age in years.
    pub age: u32,
    pub category: Category,
    /// Creation time in epoch milliseconds. Immutable once set.
    pub posted_at: i64,
    /// True for listings created through the posting flow, false for seeds.
    pub is_user_posted: bool,
}

/// Caller-provided fields for a new posting. The store fills in the rest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub salary: String,
    pub age: u32,
    pub location: String,
    pub category: Category,
}

impl Job {
    /// Promote a draft to a full posting: fresh UUID, timestamp, user flag.
    pub fn from_draft(draft: JobDraft, now_ms: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            location: draft.location,
            description: draft.description,
            salary: draft.salary,
            age: draft.age,
            category: draft.category,
            posted_at: now_ms,
            is_user_posted: true,
        }
    }
}

/// Demonstration listings shown before any user action, stamped relative
/// to `now_ms` so the time-ago captions stay plausible.
pub fn seed_jobs(now_ms: i64) -> Vec<Job> {
    let seed = |id: &str,
                title: &str,
                location: &str,
                description: &str,
                salary: &str,
                age: u32,
                category: Category,
                days_ago: i64| Job {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        salary: salary.to_string(),
        age,
        category,
        posted_at: now_ms - days_ago * DAY_MS,
        is_user_posted: false,
    };

    vec![
        seed(
            "1",
            "Dentist",
            "Amman",
            "Looking for a skilled dentist for a private clinic. Must have 3+ years experience with cosmetic dentistry.",
            "50",
            25,
            Category::Healthcare,
            1,
        ),
        seed(
            "2",
            "Waiter",
            "Irbid",
            "Full-time waiter needed for a busy restaurant in downtown Irbid. Evening shifts available.",
            "10",
            18,
            Category::Hospitality,
            2,
        ),
        seed(
            "3",
            "Photographer",
            "Amman",
            "Freelance photographer for wedding events and corporate photoshoots. Must have own equipment.",
            "15",
            20,
            Category::Creative,
            3,
        ),
        seed(
            "4",
            "Gardener",
            "Ajloun",
            "Part-time gardener for a large estate. Experience with landscape design is a plus.",
            "8",
            18,
            Category::Services,
            4,
        ),
        seed(
            "5",
            "Electrician",
            "AL-Zarqaa",
            "Licensed electrician for residential and commercial projects. Must be certified.",
            "11",
            21,
            Category::Technical,
            5,
        ),
        seed(
            "6",
            "Secretary",
            "Amman",
            "Office secretary for a law firm. Strong communication skills and MS Office proficiency required.",
            "21",
            22,
            Category::Office,
            6,
        ),
        seed(
            "7",
            "Hairdresser",
            "Irbid",
            "Experienced hairdresser for a modern salon. Both male and female styling.",
            "16",
            19,
            Category::Services,
            7,
        ),
        seed(
            "8",
            "Chef",
            "Aqaba",
            "Head chef for a seafood restaurant. Must specialize in Mediterranean cuisine.",
            "14",
            23,
            Category::Hospitality,
            8,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_draft_fills_identity_fields() {
        let draft = JobDraft {
            title: "Tutor".into(),
            description: "Math tutor".into(),
            salary: "12".into(),
            age: 19,
            location: "Amman".into(),
            category: Category::Office,
        };

        let job = Job::from_draft(draft, 1_000);

        assert!(!job.id.is_empty());
        assert_eq!(job.posted_at, 1_000);
        assert!(job.is_user_posted);
        assert_eq!(job.title, "Tutor");
    }

    #[test]
    fn seed_jobs_are_not_user_posted() {
        let seeds = seed_jobs(0);

        assert_eq!(seeds.len(), 8);
        assert!(seeds.iter().all(|j| !j.is_user_posted));
        assert_eq!(seeds[0].title, "Dentist");
    }

    #[test]
    fn job_serializes_with_camel_case_keys() {
        let job = seed_jobs(1_000).remove(0);

        let json = serde_json::to_value(&job).unwrap();

        assert!(json.get("postedAt").is_some());
        assert!(json.get("isUserPosted").is_some());
        assert_eq!(json["category"], "Healthcare");
    }

    #[test]
    fn job_round_trips_through_json() {
        let jobs = seed_jobs(5_000);

        let payload = serde_json::to_string(&jobs).unwrap();
        let back: Vec<Job> = serde_json::from_str(&payload).unwrap();

        assert_eq!(back, jobs);
    }
}
