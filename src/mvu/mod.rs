// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring screens, the job store, messages,
//! and background commands.

use chrono::Utc;
use email_address::EmailAddress;
use url::Url;

use crate::logic::contact;
use crate::logic::storage::Storage;
use crate::logic::store::JobStore;
use crate::models::job::{Job, JobDraft};
use crate::models::session::{Session, name_from_email};
use crate::ui::components::auth_forms::{self, LoginModel, LoginMsg, RegisterModel, RegisterMsg};
use crate::ui::components::post_form::{self, PostFormModel, PostFormMsg};

/// Screens reachable from the navigation actions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Welcome,
    Login,
    Register,
    Home,
    PostJob,
    MyJobs,
    /// Details for the job with this id.
    JobDetails(String),
}

/// Top-level application state.
pub struct AppModel {
    /// Currently visible screen.
    pub screen: Screen,
    /// Jobs, search query, and session state.
    pub store: JobStore,
    /// Sign-in form state.
    pub login: LoginModel,
    /// Registration form state.
    pub register: RegisterModel,
    /// Post-a-job form state.
    pub post_form: PostFormModel,
    /// Job id awaiting delete confirmation.
    pub confirm_delete: Option<String>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
    /// Whether persisted state has been applied yet. Until then the UI
    /// shows the seed collection; that is expected, not a bug.
    pub hydrated: bool,
}

impl Default for AppModel {
    fn default() -> Self {
        Self {
            screen: Screen::default(),
            store: JobStore::with_seed(Utc::now().timestamp_millis()),
            login: LoginModel::default(),
            register: RegisterModel::default(),
            post_form: PostFormModel::default(),
            confirm_delete: None,
            status: None,
            error: None,
            pending_commands: 0,
            hydrated: false,
        }
    }
}

/// Application messages routed through the update function.
pub enum Msg {
    Navigate(Screen),
    SearchChanged(String),
    Login(LoginMsg),
    Register(RegisterMsg),
    PostForm(PostFormMsg),
    SignOut,
    DeleteRequested(String),
    DeleteConfirmed,
    DeleteCancelled,
    ContactRequested(String),
    StateLoaded {
        jobs: Option<Vec<Job>>,
        session: Option<Session>,
    },
    Persisted,
    ContactOpened,
    DismissError,
}

/// Commands represent side-effects executed between frames.
pub enum Command {
    /// Read both storage slots.
    LoadState,
    /// Mirror the full job collection to its slot.
    PersistJobs(Vec<Job>),
    /// Mirror session state to its slot.
    PersistSession(Session),
    /// Hand the contact link to the OS opener.
    OpenContact(Url),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Navigate(screen) => navigate(model, screen),
        Msg::SearchChanged(query) => model.store.set_query(query),
        Msg::Login(LoginMsg::Submit) => submit_login(model, cmds),
        Msg::Login(m) => auth_forms::update_login(&mut model.login, m),
        Msg::Register(RegisterMsg::Submit) => submit_register(model, cmds),
        Msg::Register(m) => auth_forms::update_register(&mut model.register, m),
        Msg::PostForm(PostFormMsg::Submit) => submit_post(model, cmds),
        Msg::PostForm(m) => post_form::update(&mut model.post_form, m),
        Msg::SignOut => {
            model.store.sign_out();
            cmds.push(Command::PersistSession(model.store.session().clone()));
            navigate(model, Screen::Welcome);
        }
        Msg::DeleteRequested(id) => model.confirm_delete = Some(id),
        Msg::DeleteCancelled => model.confirm_delete = None,
        Msg::DeleteConfirmed => {
            if let Some(id) = model.confirm_delete.take() {
                model.store.remove(&id);
                cmds.push(Command::PersistJobs(model.store.jobs().to_vec()));
                surface_event(model, "Job removed.".to_string(), false);
            }
        }
        Msg::ContactRequested(id) => {
            if let Some(job) = model.store.get(&id)
                && let Ok(url) = contact::whatsapp_url(&job.title)
            {
                cmds.push(Command::OpenContact(url));
            }
        }
        Msg::StateLoaded { jobs, session } => {
            model.store.hydrate(jobs, session);
            model.hydrated = true;
            // A remembered session skips the welcome/auth screens.
            if model.store.session().is_logged_in
                && matches!(
                    model.screen,
                    Screen::Welcome | Screen::Login | Screen::Register
                )
            {
                model.screen = Screen::Home;
            }
        }
        // Persistence and the contact handoff are fire-and-forget; failures
        // stay silent and in-memory state remains authoritative.
        Msg::Persisted | Msg::ContactOpened => {}
        Msg::DismissError => model.error = None,
    }
}

/// Execute a command on a worker thread and return the resulting message.
pub fn run_command(storage: &Storage, cmd: Command) -> Msg {
    match cmd {
        Command::LoadState => Msg::StateLoaded {
            jobs: storage.load_jobs(),
            session: storage.load_session(),
        },
        Command::PersistJobs(jobs) => {
            let _ = storage.save_jobs(&jobs);
            Msg::Persisted
        }
        Command::PersistSession(session) => {
            let _ = storage.save_session(&session);
            Msg::Persisted
        }
        Command::OpenContact(url) => {
            let _ = open::that_detached(url.as_str());
            Msg::ContactOpened
        }
    }
}

/// Switch screens, resetting the forms the target screen owns.
fn navigate(model: &mut AppModel, screen: Screen) {
    match screen {
        Screen::PostJob => model.post_form = PostFormModel::default(),
        Screen::Login => model.login = LoginModel::default(),
        Screen::Register => model.register = RegisterModel::default(),
        _ => {}
    }
    model.confirm_delete = None;
    model.screen = screen;
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

fn submit_login(model: &mut AppModel, cmds: &mut Vec<Command>) {
    if model.login.email.trim().is_empty() || model.login.password.trim().is_empty() {
        surface_event(
            model,
            "Please enter both email and password.".to_string(),
            true,
        );
        return;
    }

    let name = name_from_email(&model.login.email);
    model.store.sign_in(name.clone());
    cmds.push(Command::PersistSession(model.store.session().clone()));
    navigate(model, Screen::Home);
    surface_event(model, format!("Welcome back, {name}."), false);
}

fn submit_register(model: &mut AppModel, cmds: &mut Vec<Command>) {
    let name = model.register.name.trim().to_string();
    let email = model.register.email.trim();
    if name.is_empty() || email.is_empty() || model.register.password.trim().is_empty() {
        surface_event(
            model,
            "Please fill in name, email, and password.".to_string(),
            true,
        );
        return;
    }
    if EmailAddress::parse_with_options(email, Default::default()).is_err() {
        surface_event(
            model,
            "Please enter a valid email address.".to_string(),
            true,
        );
        return;
    }

    model.store.sign_in(name.clone());
    cmds.push(Command::PersistSession(model.store.session().clone()));
    navigate(model, Screen::Home);
    surface_event(model, format!("Welcome, {name}."), false);
}

fn submit_post(model: &mut AppModel, cmds: &mut Vec<Command>) {
    match validate_draft(&model.post_form) {
        Ok(draft) => {
            model.store.add(draft, Utc::now().timestamp_millis());
            cmds.push(Command::PersistJobs(model.store.jobs().to_vec()));
            navigate(model, Screen::Home);
            surface_event(model, "Job posted.".to_string(), false);
        }
        Err(err) => surface_event(model, err, true),
    }
}

/// Validate the posting form and build the draft handed to the store.
///
/// The store itself never validates; this is the single gate in front of
/// the add operation. A blank or non-numeric age falls back to 18.
pub fn validate_draft(form: &PostFormModel) -> Result<JobDraft, String> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err("Job title is required.".to_string());
    }
    let description = form.description.trim();
    if description.is_empty() {
        return Err("Job description is required.".to_string());
    }
    let salary = form.salary.trim();
    if salary.is_empty() {
        return Err("Salary is required.".to_string());
    }
    let age = form.age.trim().parse::<u32>().unwrap_or(18);
    if age < 18 {
        return Err("Minimum age must be 18 or above.".to_string());
    }

    Ok(JobDraft {
        title: title.to_string(),
        description: description.to_string(),
        salary: salary.to_string(),
        age,
        location: form.city.clone(),
        category: form.category,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::field_reassign_with_default)]

    use super::*;
    use tempfile::TempDir;

    fn filled_post_form(model: &mut AppModel) {
        model.post_form.title = "Tutor".into();
        model.post_form.description = "Math tutor".into();
        model.post_form.salary = "12".into();
        model.post_form.age = "19".into();
    }

    #[test]
    fn post_submit_adds_job_and_enqueues_persist() {
        let mut model = AppModel::default();
        model.screen = Screen::PostJob;
        filled_post_form(&mut model);
        let before = model.store.jobs().len();

        let mut cmds = Vec::new();
        update(&mut model, Msg::PostForm(PostFormMsg::Submit), &mut cmds);

        assert_eq!(model.store.jobs().len(), before + 1);
        assert_eq!(model.store.jobs()[0].title, "Tutor");
        assert!(model.store.jobs()[0].is_user_posted);
        assert_eq!(model.screen, Screen::Home);
        assert!(model.error.is_none());
        assert!(matches!(cmds.as_slice(), [Command::PersistJobs(jobs)] if jobs.len() == before + 1));
    }

    #[test]
    fn post_submit_with_empty_title_sets_error_and_mutates_nothing() {
        let mut model = AppModel::default();
        model.screen = Screen::PostJob;
        filled_post_form(&mut model);
        model.post_form.title = "   ".into();
        let before = model.store.jobs().len();

        let mut cmds = Vec::new();
        update(&mut model, Msg::PostForm(PostFormMsg::Submit), &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.store.jobs().len(), before);
        assert_eq!(model.error.as_deref(), Some("Job title is required."));
        assert_eq!(model.screen, Screen::PostJob);
    }

    #[test]
    fn post_submit_rejects_underage_minimum() {
        let mut model = AppModel::default();
        filled_post_form(&mut model);
        model.post_form.age = "16".into();

        let mut cmds = Vec::new();
        update(&mut model, Msg::PostForm(PostFormMsg::Submit), &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(
            model.error.as_deref(),
            Some("Minimum age must be 18 or above.")
        );
    }

    #[test]
    fn blank_or_garbage_age_defaults_to_eighteen() {
        let mut form = PostFormModel::default();
        form.title = "Chef".into();
        form.description = "Seafood".into();
        form.salary = "14".into();

        form.age = "".into();
        assert_eq!(validate_draft(&form).unwrap().age, 18);

        form.age = "abc".into();
        assert_eq!(validate_draft(&form).unwrap().age, 18);
    }

    #[test]
    fn login_requires_both_fields() {
        let mut model = AppModel::default();
        model.login.email = "sam@example.com".into();

        let mut cmds = Vec::new();
        update(&mut model, Msg::Login(LoginMsg::Submit), &mut cmds);

        assert!(cmds.is_empty());
        assert!(!model.store.session().is_logged_in);
        assert_eq!(
            model.error.as_deref(),
            Some("Please enter both email and password.")
        );
    }

    #[test]
    fn login_signs_in_under_email_local_part() {
        let mut model = AppModel::default();
        model.screen = Screen::Login;
        model.login.email = "sam@example.com".into();
        model.login.password = "secret".into();

        let mut cmds = Vec::new();
        update(&mut model, Msg::Login(LoginMsg::Submit), &mut cmds);

        assert!(model.store.session().is_logged_in);
        assert_eq!(model.store.session().user_name, "sam");
        assert_eq!(model.screen, Screen::Home);
        assert!(matches!(
            cmds.as_slice(),
            [Command::PersistSession(s)] if s.is_logged_in
        ));
    }

    #[test]
    fn register_rejects_malformed_email() {
        let mut model = AppModel::default();
        model.register.name = "Leen".into();
        model.register.email = "not-an-email".into();
        model.register.password = "secret".into();

        let mut cmds = Vec::new();
        update(&mut model, Msg::Register(RegisterMsg::Submit), &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(
            model.error.as_deref(),
            Some("Please enter a valid email address.")
        );
        assert!(!model.store.session().is_logged_in);
    }

    #[test]
    fn register_signs_in_under_entered_name() {
        let mut model = AppModel::default();
        model.screen = Screen::Register;
        model.register.name = "  Leen ".into();
        model.register.email = "leen@jo.net".into();
        model.register.password = "secret".into();

        let mut cmds = Vec::new();
        update(&mut model, Msg::Register(RegisterMsg::Submit), &mut cmds);

        assert_eq!(model.store.session().user_name, "Leen");
        assert_eq!(model.screen, Screen::Home);
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn delete_flow_requires_confirmation() {
        let mut model = AppModel::default();
        let before = model.store.jobs().len();

        let mut cmds = Vec::new();
        update(&mut model, Msg::DeleteRequested("2".into()), &mut cmds);

        assert_eq!(model.confirm_delete.as_deref(), Some("2"));
        assert_eq!(model.store.jobs().len(), before);
        assert!(cmds.is_empty());

        update(&mut model, Msg::DeleteConfirmed, &mut cmds);

        assert!(model.confirm_delete.is_none());
        assert_eq!(model.store.jobs().len(), before - 1);
        assert!(model.store.get("2").is_none());
        assert!(matches!(cmds.as_slice(), [Command::PersistJobs(_)]));
    }

    #[test]
    fn delete_cancelled_keeps_the_job() {
        let mut model = AppModel::default();
        let before = model.store.jobs().len();

        let mut cmds = Vec::new();
        update(&mut model, Msg::DeleteRequested("2".into()), &mut cmds);
        update(&mut model, Msg::DeleteCancelled, &mut cmds);
        update(&mut model, Msg::DeleteConfirmed, &mut cmds);

        assert_eq!(model.store.jobs().len(), before);
        assert!(cmds.is_empty());
    }

    #[test]
    fn contact_request_enqueues_opener_for_known_job() {
        let mut model = AppModel::default();

        let mut cmds = Vec::new();
        update(&mut model, Msg::ContactRequested("1".into()), &mut cmds);

        match cmds.as_slice() {
            [Command::OpenContact(url)] => {
                assert_eq!(url.host_str(), Some("wa.me"));
                assert!(url.query().unwrap_or_default().contains("Dentist"));
            }
            _ => panic!("expected a contact command"),
        }
    }

    #[test]
    fn contact_request_for_unknown_job_is_a_no_op() {
        let mut model = AppModel::default();

        let mut cmds = Vec::new();
        update(&mut model, Msg::ContactRequested("gone".into()), &mut cmds);

        assert!(cmds.is_empty());
    }

    #[test]
    fn state_loaded_applies_session_and_skips_welcome() {
        let mut model = AppModel::default();
        assert_eq!(model.screen, Screen::Welcome);

        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::StateLoaded {
                jobs: None,
                session: Some(Session::signed_in("Sam")),
            },
            &mut cmds,
        );

        assert!(model.hydrated);
        assert_eq!(model.screen, Screen::Home);
        assert_eq!(model.store.session().user_name, "Sam");
    }

    #[test]
    fn state_loaded_without_session_stays_on_welcome() {
        let mut model = AppModel::default();

        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::StateLoaded {
                jobs: None,
                session: None,
            },
            &mut cmds,
        );

        assert!(model.hydrated);
        assert_eq!(model.screen, Screen::Welcome);
    }

    #[test]
    fn persist_then_load_round_trips_through_commands() {
        let tmp = TempDir::new().unwrap();
        let storage = Storage::open(tmp.path());
        let mut model = AppModel::default();
        filled_post_form(&mut model);

        let mut cmds = Vec::new();
        update(&mut model, Msg::PostForm(PostFormMsg::Submit), &mut cmds);
        let persisted = model.store.jobs().to_vec();
        for cmd in cmds {
            let msg = run_command(&storage, cmd);
            let mut follow_up = Vec::new();
            update(&mut model, msg, &mut follow_up);
            assert!(follow_up.is_empty());
        }

        let mut fresh = AppModel::default();
        let mut cmds = Vec::new();
        let loaded = run_command(&storage, Command::LoadState);
        update(&mut fresh, loaded, &mut cmds);

        assert_eq!(fresh.store.jobs(), &persisted[..]);
        assert_eq!(fresh.store.jobs()[0].title, "Tutor");
    }

    #[test]
    fn sign_out_clears_session_and_returns_to_welcome() {
        let mut model = AppModel::default();
        model.store.sign_in("Sam");
        model.screen = Screen::Home;

        let mut cmds = Vec::new();
        update(&mut model, Msg::SignOut, &mut cmds);

        assert!(!model.store.session().is_logged_in);
        assert_eq!(model.screen, Screen::Welcome);
        assert!(matches!(
            cmds.as_slice(),
            [Command::PersistSession(s)] if !s.is_logged_in
        ));
    }

    #[test]
    fn navigating_to_post_screen_resets_the_form() {
        let mut model = AppModel::default();
        model.post_form.title = "stale".into();

        let mut cmds = Vec::new();
        update(&mut model, Msg::Navigate(Screen::PostJob), &mut cmds);

        assert_eq!(model.post_form, PostFormModel::default());
        assert_eq!(model.screen, Screen::PostJob);
    }

    #[test]
    fn search_changed_reaches_the_filter() {
        let mut model = AppModel::default();

        let mut cmds = Vec::new();
        update(&mut model, Msg::SearchChanged("amm".into()), &mut cmds);

        assert!(model.store.filtered().iter().any(|j| j.title == "Dentist"));
        assert!(cmds.is_empty());
    }
}
