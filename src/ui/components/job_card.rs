// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Job listing card used on the home and my-jobs screens.

use eframe::egui;

use crate::models::job::{Category, Job};
use crate::utils::time_ago;
use crate::utils::timefmt::short_date;

/// Action triggered by a card interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobCardAction {
    /// Open the details screen for this job id.
    Open(String),
    /// Ask to delete this job id (my-jobs only).
    Delete(String),
}

/// Accent color for a category badge.
pub fn category_color(category: Category) -> egui::Color32 {
    match category {
        Category::Healthcare => egui::Color32::from_rgb(0xEF, 0x44, 0x44),
        Category::Hospitality => egui::Color32::from_rgb(0xF5, 0x9E, 0x0B),
        Category::Creative => egui::Color32::from_rgb(0x8B, 0x5C, 0xF6),
        Category::Services => egui::Color32::from_rgb(0x10, 0xB9, 0x81),
        Category::Technical => egui::Color32::from_rgb(0x3B, 0x82, 0xF6),
        Category::Office => egui::Color32::from_rgb(0xEC, 0x48, 0x99),
        Category::Other => egui::Color32::from_rgb(0x63, 0x66, 0xF1),
    }
}

/// Phosphor icon for a category.
pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Healthcare => egui_phosphor::regular::FIRST_AID,
        Category::Hospitality => egui_phosphor::regular::FORK_KNIFE,
        Category::Creative => egui_phosphor::regular::PALETTE,
        Category::Services => egui_phosphor::regular::WRENCH,
        Category::Technical => egui_phosphor::regular::LIGHTNING,
        Category::Office => egui_phosphor::regular::BUILDINGS,
        Category::Other => egui_phosphor::regular::BRIEFCASE,
    }
}

/// Render one job card. Returns the action the user triggered, if any.
pub fn view(ui: &mut egui::Ui, job: &Job, now_ms: i64, deletable: bool) -> Option<JobCardAction> {
    let mut action = None;
    let accent = category_color(job.category);

    let response = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(category_icon(job.category))
                        .size(22.0)
                        .color(accent),
                );
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&job.title).strong().size(16.0));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if deletable
                                && ui
                                    .button(
                                        egui::RichText::new(egui_phosphor::regular::TRASH_SIMPLE)
                                            .color(egui::Color32::from_gray(140)),
                                    )
                                    .on_hover_text("Delete job")
                                    .clicked()
                            {
                                action = Some(JobCardAction::Delete(job.id.clone()));
                            }
                            ui.label(
                                egui::RichText::new(format!("${} /hr", job.salary))
                                    .strong()
                                    .color(accent),
                            );
                        });
                    });
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                egui_phosphor::regular::MAP_PIN,
                                job.location
                            ))
                            .small()
                            .color(egui::Color32::from_gray(110)),
                        );
                        // My-jobs rows show the posting date, the feed shows age.
                        let caption = if deletable {
                            short_date(job.posted_at)
                        } else {
                            time_ago(job.posted_at, now_ms)
                        };
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                egui_phosphor::regular::CLOCK,
                                caption
                            ))
                            .small()
                            .color(egui::Color32::from_gray(110)),
                        );
                        ui.label(
                            egui::RichText::new(job.category.label())
                                .small()
                                .color(accent),
                        );
                    });
                });
            });
        })
        .response;

    // Whole-card click opens details; the delete button wins when both fire.
    if action.is_none()
        && response
            .interact(egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
    {
        action = Some(JobCardAction::Open(job.id.clone()));
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_distinct_accent() {
        let mut colors: Vec<_> = Category::ALL.iter().map(|c| category_color(*c)).collect();
        colors.sort_by_key(|c| (c.r(), c.g(), c.b()));
        colors.dedup();

        assert_eq!(colors.len(), Category::ALL.len());
    }
}
