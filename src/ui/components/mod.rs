// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable UI building blocks following the Model/Msg/update/view shape.

pub mod auth_forms;
pub mod job_card;
pub mod post_form;
