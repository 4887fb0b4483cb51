// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! On-device key-value persistence.
//!
//! Two independent JSON slots live in the application data directory: one
//! for the job collection, one for session state. A missing file and a
//! malformed payload are treated identically: the slot is absent and the
//! caller keeps its defaults. Writers report errors with context, but the
//! MVU layer deliberately discards them: the in-memory state is the source
//! of truth and storage is a best-effort mirror.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::job::Job;
use crate::models::session::Session;

/// Slot holding the serialized job collection.
const JOBS_SLOT: &str = "jobs";
/// Slot holding the serialized session state.
const SESSION_SLOT: &str = "session";

/// Handle on the directory holding both slots.
#[derive(Clone, Debug)]
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Use `root` as the slot directory. The directory is created on first
    /// write, not here, so a read-only start never fails.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read the persisted job collection, if any usable payload exists.
    pub fn load_jobs(&self) -> Option<Vec<Job>> {
        self.read_slot(JOBS_SLOT)
    }

    /// Serialize and write the full job collection.
    pub fn save_jobs(&self, jobs: &[Job]) -> Result<()> {
        self.write_slot(JOBS_SLOT, &jobs)
    }

    /// Read the persisted session state, if any usable payload exists.
    pub fn load_session(&self) -> Option<Session> {
        self.read_slot(SESSION_SLOT)
    }

    /// Serialize and write the session state.
    pub fn save_session(&self, session: &Session) -> Result<()> {
        self.write_slot(SESSION_SLOT, session)
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{slot}.json"))
    }

    /// Absence and unparsable content collapse to `None` on purpose.
    fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Option<T> {
        let raw = fs::read_to_string(self.slot_path(slot)).ok()?;
        serde_json::from_str(&raw).ok()
    }

    fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.root).with_context(|| {
            format!("Failed to create storage directory {}", self.root.display())
        })?;
        let payload = serde_json::to_vec_pretty(value)
            .with_context(|| format!("Failed to serialize slot '{slot}'"))?;
        let path = self.slot_path(slot);
        fs::write(&path, payload)
            .with_context(|| format!("Failed to write slot file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::seed_jobs;
    use tempfile::TempDir;

    #[test]
    fn missing_slots_read_as_absent() {
        let tmp = TempDir::new().unwrap();
        let storage = Storage::open(tmp.path().join("does-not-exist-yet"));

        assert!(storage.load_jobs().is_none());
        assert!(storage.load_session().is_none());
    }

    #[test]
    fn jobs_round_trip_preserves_ids_fields_and_order() {
        let tmp = TempDir::new().unwrap();
        let storage = Storage::open(tmp.path());
        let jobs = seed_jobs(1_700_000_000_000);

        storage.save_jobs(&jobs).unwrap();
        let back = storage.load_jobs().expect("slot should be readable");

        assert_eq!(back, jobs);
    }

    #[test]
    fn session_round_trip_reproduces_the_pair() {
        let tmp = TempDir::new().unwrap();
        let storage = Storage::open(tmp.path());
        let session = Session::signed_in("Sam");

        storage.save_session(&session).unwrap();

        assert_eq!(storage.load_session(), Some(session));
    }

    #[test]
    fn malformed_payload_reads_as_absent() {
        let tmp = TempDir::new().unwrap();
        let storage = Storage::open(tmp.path());
        std::fs::write(tmp.path().join("jobs.json"), "{not json").unwrap();
        std::fs::write(tmp.path().join("session.json"), "[1,2,3]").unwrap();

        assert!(storage.load_jobs().is_none());
        assert!(storage.load_session().is_none());
    }

    #[test]
    fn slots_are_independent_files() {
        let tmp = TempDir::new().unwrap();
        let storage = Storage::open(tmp.path());

        storage.save_session(&Session::signed_in("Sam")).unwrap();

        assert!(tmp.path().join("session.json").exists());
        assert!(!tmp.path().join("jobs.json").exists());
        assert!(storage.load_jobs().is_none());
    }
}
