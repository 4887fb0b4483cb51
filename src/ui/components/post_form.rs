// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Post-a-job form in an MVU-friendly shape. Field edits are handled here;
//! `Submit` is intercepted upstream where validation and the store live.

use eframe::egui;

use crate::models::job::{CITIES, Category};

/// UI model for the posting form, kept free of side effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostFormModel {
    pub title: String,
    pub description: String,
    pub salary: String,
    /// Raw age input; parsed (default 18) during validation.
    pub age: String,
    pub city: String,
    pub category: Category,
}

impl Default for PostFormModel {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            salary: String::new(),
            age: String::new(),
            city: CITIES[0].to_string(),
            category: Category::Other,
        }
    }
}

/// Messages emitted by the posting form view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostFormMsg {
    TitleChanged(String),
    DescriptionChanged(String),
    SalaryChanged(String),
    AgeChanged(String),
    CityChanged(String),
    CategoryChanged(Category),
    Submit,
}

/// Apply a field edit to the model. `Submit` never reaches this function.
pub fn update(model: &mut PostFormModel, msg: PostFormMsg) {
    match msg {
        PostFormMsg::TitleChanged(text) => model.title = text,
        PostFormMsg::DescriptionChanged(text) => model.description = text,
        PostFormMsg::SalaryChanged(text) => model.salary = text,
        PostFormMsg::AgeChanged(text) => model.age = text,
        PostFormMsg::CityChanged(city) => model.city = city,
        PostFormMsg::CategoryChanged(category) => model.category = category,
        PostFormMsg::Submit => {}
    }
}

/// Render the posting form and return any messages triggered by the user.
pub fn view(ui: &mut egui::Ui, model: &PostFormModel) -> Vec<PostFormMsg> {
    let mut msgs = Vec::new();

    field_label(ui, "Job Title", true);
    let mut title = model.title.clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut title)
                .hint_text("e.g. Graphic Designer")
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        msgs.push(PostFormMsg::TitleChanged(title));
    }
    ui.add_space(10.0);

    field_label(ui, "Description", true);
    let mut description = model.description.clone();
    if ui
        .add(
            egui::TextEdit::multiline(&mut description)
                .hint_text("Describe the job requirements...")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        msgs.push(PostFormMsg::DescriptionChanged(description));
    }
    ui.add_space(10.0);

    ui.columns(2, |cols| {
        field_label(&mut cols[0], "Salary ($/hr)", true);
        let mut salary = model.salary.clone();
        if cols[0]
            .add(egui::TextEdit::singleline(&mut salary).hint_text("e.g. 15"))
            .changed()
        {
            msgs.push(PostFormMsg::SalaryChanged(salary));
        }

        field_label(&mut cols[1], "Min Age", false);
        let mut age = model.age.clone();
        if cols[1]
            .add(egui::TextEdit::singleline(&mut age).hint_text("18"))
            .changed()
        {
            msgs.push(PostFormMsg::AgeChanged(age));
        }
    });
    ui.add_space(10.0);

    field_label(ui, "Category", false);
    render_category_chips(ui, model, &mut msgs);
    ui.add_space(10.0);

    field_label(ui, "Location", false);
    egui::ComboBox::from_id_salt("post_city")
        .selected_text(format!(
            "{} {}",
            egui_phosphor::regular::MAP_PIN,
            model.city
        ))
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for &city in CITIES {
                if ui
                    .selectable_label(model.city == city, city)
                    .clicked()
                {
                    msgs.push(PostFormMsg::CityChanged(city.to_string()));
                }
            }
        });
    ui.add_space(16.0);

    let submit = egui::Button::new(format!(
        "{} Post Job",
        egui_phosphor::regular::PAPER_PLANE_TILT
    ))
    .min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add(submit).clicked() {
        msgs.push(PostFormMsg::Submit);
    }

    msgs
}

/// Wrap-around chip grid for the category choice.
fn render_category_chips(ui: &mut egui::Ui, model: &PostFormModel, msgs: &mut Vec<PostFormMsg>) {
    ui.horizontal_wrapped(|ui| {
        for category in Category::ALL {
            let chip = egui::Button::new(category.label()).selected(model.category == category);
            if ui.add(chip).clicked() {
                msgs.push(PostFormMsg::CategoryChanged(category));
            }
        }
    });
}

/// Field caption with the required-marker styling used across forms.
fn field_label(ui: &mut egui::Ui, label: &str, required: bool) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).small().strong());
        if required {
            ui.label(
                egui::RichText::new("*")
                    .small()
                    .color(egui::Color32::from_rgb(0xEF, 0x44, 0x44)),
            );
        }
    });
    ui.add_space(2.0);
}
