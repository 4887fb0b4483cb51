// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and business logic.

pub mod timefmt;

/// Relative age caption for a posting timestamp.
pub use timefmt::time_ago;
