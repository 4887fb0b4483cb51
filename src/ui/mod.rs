// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the job board.
//! Handles screen layout and wiring between views, the MVU kernel, and the
//! background command workers.

pub mod components;

use std::sync::Arc;

use chrono::{Local, Timelike, Utc};
use eframe::egui;

use crate::logic::storage::Storage;
use crate::models::job::{CITIES, Job};
use crate::mvu::{self, AppModel, Command, Msg, Screen};
use crate::ui::components::job_card::{self, JobCardAction};
use crate::ui::components::{auth_forms, post_form};
use crate::utils::timefmt;

/// Stateful egui application driving the screens and the job store.
pub struct FreelanceJoApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl FreelanceJoApp {
    /// Build the app, spawn the command workers, and kick off rehydration.
    ///
    /// The first frames may render the seed collection; `StateLoaded`
    /// swaps in persisted data whenever the read completes.
    pub fn new(storage: Storage) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let storage = Arc::new(storage);
        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(2, 4))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let storage = Arc::clone(&storage);
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(&storage, cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        let mut model = AppModel::default();
        if cmd_tx.send(Command::LoadState).is_ok() {
            model.pending_commands += 1;
        }

        Self {
            model,
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for FreelanceJoApp {
    #[expect(deprecated)]
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        // Process pending messages until exhausted.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        self.inbox = msgs;

        self.render_error_modal(ctx);
        self.render_confirm_delete_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        match self.model.screen.clone() {
            Screen::Welcome => self.render_welcome(ctx),
            Screen::Login => self.render_login(ctx),
            Screen::Register => self.render_register(ctx),
            Screen::Home => self.render_home(ctx),
            Screen::PostJob => self.render_post_job(ctx),
            Screen::MyJobs => self.render_my_jobs(ctx),
            Screen::JobDetails(id) => self.render_job_details(ctx, &id),
        }
    }

    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl FreelanceJoApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Top bar with a leading action, centered title, and theme switch.
    fn render_top_bar(&mut self, ctx: &egui::Context, title: &str, back: Option<Screen>) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if let Some(target) = back
                    && ui
                        .button(egui_phosphor::regular::ARROW_LEFT)
                        .on_hover_text("Back")
                        .clicked()
                {
                    self.inbox.push(Msg::Navigate(target));
                }
                ui.heading(title);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });
    }

    /// Landing screen: brand hero plus the two auth entry points.
    fn render_welcome(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.18);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(egui_phosphor::regular::BRIEFCASE)
                        .size(64.0)
                        .color(egui::Color32::from_rgb(0x63, 0x66, 0xF1)),
                );
                ui.add_space(8.0);
                ui.heading(egui::RichText::new("Freelance Jo").size(30.0));
                ui.label(
                    egui::RichText::new("Find your next opportunity across Jordan")
                        .color(egui::Color32::from_gray(110)),
                );
                ui.add_space(24.0);

                let width = ui.available_width().min(280.0);
                let sign_in = egui::Button::new("Sign In").min_size(egui::vec2(width, 36.0));
                if ui.add(sign_in).clicked() {
                    self.inbox.push(Msg::Navigate(Screen::Login));
                }
                let register =
                    egui::Button::new("Create Account").min_size(egui::vec2(width, 36.0));
                if ui.add(register).clicked() {
                    self.inbox.push(Msg::Navigate(Screen::Register));
                }
            });
        });
    }

    fn render_login(&mut self, ctx: &egui::Context) {
        self.render_top_bar(ctx, "Sign In", Some(Screen::Welcome));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(12.0);
                let msgs = auth_forms::view_login(ui, &self.model.login);
                self.inbox.extend(msgs.into_iter().map(Msg::Login));

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("New here?").color(egui::Color32::from_gray(110)),
                    );
                    if ui.link("Create an account").clicked() {
                        self.inbox.push(Msg::Navigate(Screen::Register));
                    }
                });
            });
        });
    }

    fn render_register(&mut self, ctx: &egui::Context) {
        self.render_top_bar(ctx, "Create Account", Some(Screen::Welcome));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(12.0);
                let msgs = auth_forms::view_register(ui, &self.model.register);
                self.inbox.extend(msgs.into_iter().map(Msg::Register));

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Already have an account?")
                            .color(egui::Color32::from_gray(110)),
                    );
                    if ui.link("Sign in").clicked() {
                        self.inbox.push(Msg::Navigate(Screen::Login));
                    }
                });
            });
        });
    }

    /// Main listing screen: greeting, search, stats, and the job feed.
    fn render_home(&mut self, ctx: &egui::Context) {
        let now_ms = Utc::now().timestamp_millis();

        egui::TopBottomPanel::top("home_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(timefmt::greeting(Local::now().hour()))
                            .small()
                            .color(egui::Color32::from_gray(110)),
                    );
                    ui.heading(self.model.store.session().display_name());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.separator();
                    if ui
                        .button(egui_phosphor::regular::SIGN_OUT)
                        .on_hover_text("Sign out")
                        .clicked()
                    {
                        self.inbox.push(Msg::SignOut);
                    }
                    if ui
                        .button(egui_phosphor::regular::CLOCK_COUNTER_CLOCKWISE)
                        .on_hover_text("My posted jobs")
                        .clicked()
                    {
                        self.inbox.push(Msg::Navigate(Screen::MyJobs));
                    }
                    if ui
                        .button(format!("{} Post", egui_phosphor::regular::PLUS))
                        .on_hover_text("Post a job")
                        .clicked()
                    {
                        self.inbox.push(Msg::Navigate(Screen::PostJob));
                    }
                });
            });
            ui.add_space(6.0);
            self.render_search_bar(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let filtered: Vec<Job> = self.model.store.filtered().into_iter().cloned().collect();

            self.render_stats_row(ui, filtered.len());
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let heading = if self.model.store.query().trim().is_empty() {
                    "Available Jobs"
                } else {
                    "Search Results"
                };
                ui.label(egui::RichText::new(heading).strong().size(16.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("{} jobs", filtered.len()))
                            .small()
                            .color(egui::Color32::from_gray(110)),
                    );
                });
            });
            ui.add_space(4.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                if filtered.is_empty() {
                    self.render_empty_state(
                        ui,
                        egui_phosphor::regular::MAGNIFYING_GLASS,
                        "No Jobs Found",
                        "Try adjusting your search terms",
                    );
                    return;
                }
                for job in &filtered {
                    if let Some(JobCardAction::Open(id)) = job_card::view(ui, job, now_ms, false) {
                        self.inbox.push(Msg::Navigate(Screen::JobDetails(id)));
                    }
                    ui.add_space(4.0);
                }
            });
        });
    }

    fn render_search_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui_phosphor::regular::MAGNIFYING_GLASS);
            let mut query = self.model.store.query().to_string();
            let clear_width = 28.0;
            if ui
                .add(
                    egui::TextEdit::singleline(&mut query)
                        .hint_text("Search jobs, locations...")
                        .desired_width(ui.available_width() - clear_width),
                )
                .changed()
            {
                self.inbox.push(Msg::SearchChanged(query.clone()));
            }
            if !query.is_empty()
                && ui
                    .button(egui_phosphor::regular::X)
                    .on_hover_text("Clear search")
                    .clicked()
            {
                self.inbox.push(Msg::SearchChanged(String::new()));
            }
        });
    }

    fn render_stats_row(&self, ui: &mut egui::Ui, available: usize) {
        let owned = self.model.store.user_jobs().len();
        ui.columns(3, |cols| {
            stat_tile(
                &mut cols[0],
                egui_phosphor::regular::BRIEFCASE,
                "Available",
                available,
            );
            stat_tile(
                &mut cols[1],
                egui_phosphor::regular::MAP_PIN,
                "Cities",
                CITIES.len(),
            );
            stat_tile(
                &mut cols[2],
                egui_phosphor::regular::TREND_UP,
                "Yours",
                owned,
            );
        });
    }

    fn render_post_job(&mut self, ctx: &egui::Context) {
        self.render_top_bar(ctx, "Post a Job", Some(Screen::Home));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                let msgs = post_form::view(ui, &self.model.post_form);
                self.inbox.extend(msgs.into_iter().map(Msg::PostForm));
                ui.add_space(8.0);
            });
        });
    }

    fn render_my_jobs(&mut self, ctx: &egui::Context) {
        self.render_top_bar(ctx, "My Posted Jobs", Some(Screen::Home));
        let now_ms = Utc::now().timestamp_millis();

        egui::CentralPanel::default().show(ctx, |ui| {
            let owned: Vec<Job> = self.model.store.user_jobs().into_iter().cloned().collect();

            egui::ScrollArea::vertical().show(ui, |ui| {
                if owned.is_empty() {
                    self.render_empty_state(
                        ui,
                        egui_phosphor::regular::FOLDER_OPEN,
                        "No Jobs Posted",
                        "Jobs you post will appear here",
                    );
                    ui.vertical_centered(|ui| {
                        if ui
                            .button(format!(
                                "{} Post Your First Job",
                                egui_phosphor::regular::PLUS
                            ))
                            .clicked()
                        {
                            self.inbox.push(Msg::Navigate(Screen::PostJob));
                        }
                    });
                    return;
                }
                ui.add_space(4.0);
                for job in &owned {
                    match job_card::view(ui, job, now_ms, true) {
                        Some(JobCardAction::Open(id)) => {
                            self.inbox.push(Msg::Navigate(Screen::JobDetails(id)));
                        }
                        Some(JobCardAction::Delete(id)) => {
                            self.inbox.push(Msg::DeleteRequested(id));
                        }
                        None => {}
                    }
                    ui.add_space(4.0);
                }
            });
        });
    }

    fn render_job_details(&mut self, ctx: &egui::Context, id: &str) {
        self.render_top_bar(ctx, "Job Details", Some(Screen::Home));
        let Some(job) = self.model.store.get(id).cloned() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.add_space(ui.available_height() * 0.3);
                self.render_empty_state(
                    ui,
                    egui_phosphor::regular::WARNING_CIRCLE,
                    "Job not found",
                    "This listing is no longer available",
                );
                ui.vertical_centered(|ui| {
                    if ui.button("Go Back").clicked() {
                        self.inbox.push(Msg::Navigate(Screen::Home));
                    }
                });
            });
            return;
        };

        let accent = job_card::category_color(job.category);
        egui::TopBottomPanel::bottom("contact_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                let contact = egui::Button::new(format!(
                    "{} Contact via WhatsApp",
                    egui_phosphor::regular::WHATSAPP_LOGO
                ))
                .min_size(egui::vec2(ui.available_width(), 38.0));
                if ui.add(contact).clicked() {
                    self.inbox.push(Msg::ContactRequested(job.id.clone()));
                }
                ui.add_space(6.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}",
                        job_card::category_icon(job.category),
                        job.category.label()
                    ))
                    .color(accent)
                    .strong(),
                );
                ui.add_space(4.0);
                ui.heading(egui::RichText::new(&job.title).size(26.0));
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::MAP_PIN,
                            job.location
                        ))
                        .color(egui::Color32::from_gray(110)),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::CALENDAR_BLANK,
                            timefmt::long_date(job.posted_at)
                        ))
                        .color(egui::Color32::from_gray(110)),
                    );
                });
                ui.add_space(10.0);

                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new("Hourly Rate")
                                    .small()
                                    .color(egui::Color32::from_gray(110)),
                            );
                            ui.label(
                                egui::RichText::new(format!("${} /hour", job.salary))
                                    .strong()
                                    .size(24.0)
                                    .color(accent),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(egui_phosphor::regular::MONEY)
                                    .size(28.0)
                                    .color(accent),
                            );
                        });
                    });
                });
                ui.add_space(10.0);

                ui.label(egui::RichText::new("Description").strong().size(16.0));
                ui.label(&job.description);
                ui.add_space(10.0);

                ui.columns(2, |cols| {
                    detail_item(
                        &mut cols[0],
                        egui_phosphor::regular::USERS,
                        "Min Age",
                        &format!("{} years", job.age),
                    );
                    detail_item(
                        &mut cols[1],
                        egui_phosphor::regular::MAP_PIN,
                        "Location",
                        &job.location,
                    );
                });
                ui.columns(2, |cols| {
                    detail_item(
                        &mut cols[0],
                        egui_phosphor::regular::TAG,
                        "Category",
                        job.category.label(),
                    );
                    detail_item(
                        &mut cols[1],
                        egui_phosphor::regular::CLOCK,
                        "Type",
                        "Freelance",
                    );
                });
                ui.add_space(8.0);
            });
        });
    }

    fn render_empty_state(&self, ui: &mut egui::Ui, icon: &str, title: &str, hint: &str) {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(icon)
                    .size(44.0)
                    .color(egui::Color32::from_gray(140)),
            );
            ui.label(egui::RichText::new(title).strong().size(16.0));
            ui.label(
                egui::RichText::new(hint)
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
        });
        ui.add_space(12.0);
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Validation error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Blocking confirmation before a posting is removed.
    fn render_confirm_delete_modal(&mut self, ctx: &egui::Context) {
        if let Some(id) = self.model.confirm_delete.clone() {
            let title = self
                .model
                .store
                .get(&id)
                .map(|j| j.title.clone())
                .unwrap_or_default();
            egui::Window::new("Delete Job")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(format!("Are you sure you want to remove \"{title}\"?"));
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.inbox.push(Msg::DeleteCancelled);
                        }
                        let delete = egui::Button::new(
                            egui::RichText::new("Delete").color(egui::Color32::WHITE),
                        )
                        .fill(egui::Color32::from_rgb(0xEF, 0x44, 0x44));
                        if ui.add(delete).clicked() {
                            self.inbox.push(Msg::DeleteConfirmed);
                        }
                    });
                });
        }
    }

    /// Render latest status/error message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if !self.model.hydrated {
            // Seed data is on screen until the storage read lands.
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().size(12.0));
                ui.label(
                    egui::RichText::new("Loading saved listings…")
                        .small()
                        .color(egui::Color32::from_gray(110)),
                );
            });
            return;
        }
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                        "{} task(s) running in background",
                        self.model.pending_commands
                    ));
                }
            });
        }
    }
}

/// One tile of the home stats row.
fn stat_tile(ui: &mut egui::Ui, icon: &str, label: &str, value: usize) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(icon).size(18.0));
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(value.to_string()).strong().size(16.0));
                ui.label(
                    egui::RichText::new(label)
                        .small()
                        .color(egui::Color32::from_gray(110)),
                );
            });
        });
    });
}

/// One cell of the details grid.
fn detail_item(ui: &mut egui::Ui, icon: &str, label: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(icon).size(18.0));
        ui.label(
            egui::RichText::new(label)
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.label(egui::RichText::new(value).strong());
    });
}
