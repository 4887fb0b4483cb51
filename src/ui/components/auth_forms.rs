// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Sign-in and registration forms. Purely cosmetic: nothing is checked
//! against a backend, the submit handlers upstream only set the session
//! display state.

use eframe::egui;

use crate::models::job::CITIES;

/// UI model for the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginModel {
    pub email: String,
    pub password: String,
    pub show_password: bool,
}

/// Messages emitted by the sign-in view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginMsg {
    EmailChanged(String),
    PasswordChanged(String),
    ToggleShowPassword,
    Submit,
}

/// Apply a field edit. `Submit` is intercepted upstream.
pub fn update_login(model: &mut LoginModel, msg: LoginMsg) {
    match msg {
        LoginMsg::EmailChanged(text) => model.email = text,
        LoginMsg::PasswordChanged(text) => model.password = text,
        LoginMsg::ToggleShowPassword => model.show_password = !model.show_password,
        LoginMsg::Submit => {}
    }
}

/// Render the sign-in form and return triggered messages.
pub fn view_login(ui: &mut egui::Ui, model: &LoginModel) -> Vec<LoginMsg> {
    let mut msgs = Vec::new();

    ui.heading("Welcome Back");
    ui.label(
        egui::RichText::new("Sign in to find your next opportunity")
            .small()
            .color(egui::Color32::from_gray(110)),
    );
    ui.add_space(16.0);

    ui.label(egui::RichText::new("Email").small().strong());
    ui.horizontal(|ui| {
        ui.label(egui_phosphor::regular::ENVELOPE_SIMPLE);
        let mut email = model.email.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut email)
                    .hint_text("your@email.com")
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            msgs.push(LoginMsg::EmailChanged(email));
        }
    });
    ui.add_space(10.0);

    ui.label(egui::RichText::new("Password").small().strong());
    ui.horizontal(|ui| {
        ui.label(egui_phosphor::regular::LOCK);
        let mut password = model.password.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut password)
                    .hint_text("Enter password")
                    .password(!model.show_password)
                    .desired_width(ui.available_width() - 32.0),
            )
            .changed()
        {
            msgs.push(LoginMsg::PasswordChanged(password));
        }
        let eye = if model.show_password {
            egui_phosphor::regular::EYE_SLASH
        } else {
            egui_phosphor::regular::EYE
        };
        if ui.button(eye).on_hover_text("Show/hide password").clicked() {
            msgs.push(LoginMsg::ToggleShowPassword);
        }
    });
    ui.add_space(16.0);

    let submit = egui::Button::new("Sign In").min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add(submit).clicked() {
        msgs.push(LoginMsg::Submit);
    }

    msgs
}

/// UI model for the registration form. Age, phone, and city are collected
/// but only the name feeds the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterModel {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: String,
    pub phone: String,
    pub city: String,
    pub show_password: bool,
}

impl Default for RegisterModel {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            age: String::new(),
            phone: String::new(),
            city: CITIES[0].to_string(),
            show_password: false,
        }
    }
}

/// Messages emitted by the registration view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterMsg {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    AgeChanged(String),
    PhoneChanged(String),
    CityChanged(String),
    ToggleShowPassword,
    Submit,
}

/// Apply a field edit. `Submit` is intercepted upstream.
pub fn update_register(model: &mut RegisterModel, msg: RegisterMsg) {
    match msg {
        RegisterMsg::NameChanged(text) => model.name = text,
        RegisterMsg::EmailChanged(text) => model.email = text,
        RegisterMsg::PasswordChanged(text) => model.password = text,
        RegisterMsg::AgeChanged(text) => model.age = text,
        RegisterMsg::PhoneChanged(text) => model.phone = text,
        RegisterMsg::CityChanged(city) => model.city = city,
        RegisterMsg::ToggleShowPassword => model.show_password = !model.show_password,
        RegisterMsg::Submit => {}
    }
}

/// Render the registration form and return triggered messages.
pub fn view_register(ui: &mut egui::Ui, model: &RegisterModel) -> Vec<RegisterMsg> {
    let mut msgs = Vec::new();

    ui.heading("Join Freelance Jo");
    ui.label(
        egui::RichText::new("Create your account to get started")
            .small()
            .color(egui::Color32::from_gray(110)),
    );
    ui.add_space(16.0);

    text_row(ui, egui_phosphor::regular::USER, "Full Name", "Your name", &model.name, &mut msgs, RegisterMsg::NameChanged);
    text_row(ui, egui_phosphor::regular::ENVELOPE_SIMPLE, "Email", "your@email.com", &model.email, &mut msgs, RegisterMsg::EmailChanged);

    ui.label(egui::RichText::new("Password").small().strong());
    ui.horizontal(|ui| {
        ui.label(egui_phosphor::regular::LOCK);
        let mut password = model.password.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut password)
                    .hint_text("Choose a password")
                    .password(!model.show_password)
                    .desired_width(ui.available_width() - 32.0),
            )
            .changed()
        {
            msgs.push(RegisterMsg::PasswordChanged(password));
        }
        let eye = if model.show_password {
            egui_phosphor::regular::EYE_SLASH
        } else {
            egui_phosphor::regular::EYE
        };
        if ui.button(eye).on_hover_text("Show/hide password").clicked() {
            msgs.push(RegisterMsg::ToggleShowPassword);
        }
    });
    ui.add_space(10.0);

    ui.columns(2, |cols| {
        cols[0].label(egui::RichText::new("Age").small().strong());
        let mut age = model.age.clone();
        if cols[0]
            .add(egui::TextEdit::singleline(&mut age).hint_text("18"))
            .changed()
        {
            msgs.push(RegisterMsg::AgeChanged(age));
        }

        cols[1].label(egui::RichText::new("Phone").small().strong());
        let mut phone = model.phone.clone();
        if cols[1]
            .add(egui::TextEdit::singleline(&mut phone).hint_text("07…"))
            .changed()
        {
            msgs.push(RegisterMsg::PhoneChanged(phone));
        }
    });
    ui.add_space(10.0);

    ui.label(egui::RichText::new("City").small().strong());
    egui::ComboBox::from_id_salt("register_city")
        .selected_text(model.city.clone())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for &city in CITIES {
                if ui.selectable_label(model.city == city, city).clicked() {
                    msgs.push(RegisterMsg::CityChanged(city.to_string()));
                }
            }
        });
    ui.add_space(16.0);

    let submit =
        egui::Button::new("Create Account").min_size(egui::vec2(ui.available_width(), 36.0));
    if ui.add(submit).clicked() {
        msgs.push(RegisterMsg::Submit);
    }

    msgs
}

/// Labeled single-line input with a leading icon.
fn text_row(
    ui: &mut egui::Ui,
    icon: &str,
    label: &str,
    hint: &str,
    value: &str,
    msgs: &mut Vec<RegisterMsg>,
    wrap: fn(String) -> RegisterMsg,
) {
    ui.label(egui::RichText::new(label).small().strong());
    ui.horizontal(|ui| {
        ui.label(icon);
        let mut buffer = value.to_string();
        if ui
            .add(
                egui::TextEdit::singleline(&mut buffer)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            msgs.push(wrap(buffer));
        }
    });
    ui.add_space(10.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_edits_and_toggle_land_in_model() {
        let mut model = LoginModel::default();

        update_login(&mut model, LoginMsg::EmailChanged("sam@jo.net".into()));
        update_login(&mut model, LoginMsg::PasswordChanged("secret".into()));
        update_login(&mut model, LoginMsg::ToggleShowPassword);

        assert_eq!(model.email, "sam@jo.net");
        assert_eq!(model.password, "secret");
        assert!(model.show_password);
    }

    #[test]
    fn register_defaults_to_first_city() {
        let model = RegisterModel::default();

        assert_eq!(model.city, "Amman");
        assert!(!model.show_password);
    }

    #[test]
    fn register_edits_land_in_model() {
        let mut model = RegisterModel::default();

        update_register(&mut model, RegisterMsg::NameChanged("Leen".into()));
        update_register(&mut model, RegisterMsg::CityChanged("Irbid".into()));

        assert_eq!(model.name, "Leen");
        assert_eq!(model.city, "Irbid");
    }
}
