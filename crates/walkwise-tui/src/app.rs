//! Application state and logic for the WalkWise TUI

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{info, warn};

use walkwise_core::assistant::{respond, AssistantReply, ChatLog, QuickAction, TYPING_DELAY_MS};
use walkwise_core::language::{LanguagePrefs, LANGUAGES};
use walkwise_core::models::{
    Camera, CrimeZone, IncidentCategory, Notification, NoticeKind, ReportDraft, RouteOption,
    Severity, MAX_REPORT_PHOTOS,
};
use walkwise_core::reports::ReportLedger;
use walkwise_core::{AuthError, Config, DirectoryClient, Identity, SessionStore, StateStore};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background task channel. Auth attempts and assistant
/// replies send one message each; 32 is comfortably more than what can be
/// in flight at once.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Maximum display name length accepted by the registration form
pub const MAX_NAME_LENGTH: usize = 40;

/// Maximum email length accepted by the auth forms
pub const MAX_EMAIL_LENGTH: usize = 50;

/// Maximum password length. Long passphrases are fine; this only guards
/// against runaway input.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Maximum length for the report location field
pub const MAX_LOCATION_LENGTH: usize = 60;

/// Maximum length for the report date field (YYYY-MM-DD)
pub const MAX_DATE_LENGTH: usize = 10;

/// Maximum length for the report time field (HH:MM)
pub const MAX_TIME_LENGTH: usize = 5;

/// Maximum length for the report description field
pub const MAX_DESCRIPTION_LENGTH: usize = 240;

/// Maximum length of a chat message to the assistant
pub const MAX_CHAT_LENGTH: usize = 200;

/// Seconds between pressing the SOS key and the alert going out.
/// Long enough to cancel an accidental press.
pub const SOS_COUNTDOWN_SECS: u64 = 5;

/// Number of toggle rows on the settings tab
pub const SETTING_COUNT: usize = 12;

// ============================================================================
// Types
// ============================================================================

/// Available tabs in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Map,
    Assistant,
    Report,
    Status,
    Profile,
    Settings,
    Admin,
}

impl Tab {
    /// Tab bar order. The admin tab is filtered out for non-admin users at
    /// render and input time, not here.
    pub const ALL: [Tab; 8] = [
        Tab::Home,
        Tab::Map,
        Tab::Assistant,
        Tab::Report,
        Tab::Status,
        Tab::Profile,
        Tab::Settings,
        Tab::Admin,
    ];

    pub fn title(&self) -> &str {
        match self {
            Tab::Home => "Home",
            Tab::Map => "Map",
            Tab::Assistant => "Assistant",
            Tab::Report => "Report",
            Tab::Status => "Status",
            Tab::Profile => "Profile",
            Tab::Settings => "Settings",
            Tab::Admin => "Admin",
        }
    }

    fn successor(&self) -> Self {
        match self {
            Tab::Home => Tab::Map,
            Tab::Map => Tab::Assistant,
            Tab::Assistant => Tab::Report,
            Tab::Report => Tab::Status,
            Tab::Status => Tab::Profile,
            Tab::Profile => Tab::Settings,
            Tab::Settings => Tab::Admin,
            Tab::Admin => Tab::Home,
        }
    }

    fn predecessor(&self) -> Self {
        match self {
            Tab::Home => Tab::Admin,
            Tab::Map => Tab::Home,
            Tab::Assistant => Tab::Map,
            Tab::Report => Tab::Assistant,
            Tab::Status => Tab::Report,
            Tab::Profile => Tab::Status,
            Tab::Settings => Tab::Profile,
            Tab::Admin => Tab::Settings,
        }
    }

    /// Next tab in bar order, skipping the admin tab for regular users
    pub fn next(&self, admin: bool) -> Self {
        let next = self.successor();
        if next == Tab::Admin && !admin {
            next.successor()
        } else {
            next
        }
    }

    /// Previous tab in bar order, skipping the admin tab for regular users
    pub fn prev(&self, admin: bool) -> Self {
        let prev = self.predecessor();
        if prev == Tab::Admin && !admin {
            prev.predecessor()
        } else {
            prev
        }
    }
}

/// Current state of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Normal operation
    Normal,
    /// Typing a message to the assistant
    Composing,
    /// Editing the incident report form
    EditingReport,
    /// Help overlay is visible
    ShowingHelp,
    /// Quit confirmation dialog is visible
    ConfirmingQuit,
    /// SOS countdown is running and can still be cancelled
    SosCountdown,
    /// SOS alert has gone out
    SosActive,
    /// Application should exit
    Quitting,
}

/// Which pane has focus on tabs with a list/detail split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Detail,
}

/// Which auth form is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    SignIn,
    Register,
}

/// Focused element on the auth forms.
///
/// Name and Confirm only exist on the registration form; the cycle order
/// skips them while signing in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFocus {
    Name,
    Email,
    Password,
    Confirm,
    Submit,
    Switch,
}

impl AuthFocus {
    pub fn next(&self, view: AuthView) -> Self {
        match view {
            AuthView::SignIn => match self {
                AuthFocus::Email => AuthFocus::Password,
                AuthFocus::Password => AuthFocus::Submit,
                AuthFocus::Submit => AuthFocus::Switch,
                AuthFocus::Switch => AuthFocus::Email,
                // Not part of the sign-in form
                AuthFocus::Name | AuthFocus::Confirm => AuthFocus::Email,
            },
            AuthView::Register => match self {
                AuthFocus::Name => AuthFocus::Email,
                AuthFocus::Email => AuthFocus::Password,
                AuthFocus::Password => AuthFocus::Confirm,
                AuthFocus::Confirm => AuthFocus::Submit,
                AuthFocus::Submit => AuthFocus::Switch,
                AuthFocus::Switch => AuthFocus::Name,
            },
        }
    }

    pub fn prev(&self, view: AuthView) -> Self {
        match view {
            AuthView::SignIn => match self {
                AuthFocus::Email => AuthFocus::Switch,
                AuthFocus::Password => AuthFocus::Email,
                AuthFocus::Submit => AuthFocus::Password,
                AuthFocus::Switch => AuthFocus::Submit,
                AuthFocus::Name | AuthFocus::Confirm => AuthFocus::Email,
            },
            AuthView::Register => match self {
                AuthFocus::Name => AuthFocus::Switch,
                AuthFocus::Email => AuthFocus::Name,
                AuthFocus::Password => AuthFocus::Email,
                AuthFocus::Confirm => AuthFocus::Password,
                AuthFocus::Submit => AuthFocus::Confirm,
                AuthFocus::Switch => AuthFocus::Submit,
            },
        }
    }
}

/// Focused field on the incident report form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    Category,
    Severity,
    Location,
    Date,
    Time,
    Description,
    Photos,
    Submit,
}

impl ReportField {
    pub fn next(&self) -> Self {
        match self {
            ReportField::Category => ReportField::Severity,
            ReportField::Severity => ReportField::Location,
            ReportField::Location => ReportField::Date,
            ReportField::Date => ReportField::Time,
            ReportField::Time => ReportField::Description,
            ReportField::Description => ReportField::Photos,
            ReportField::Photos => ReportField::Submit,
            ReportField::Submit => ReportField::Category,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ReportField::Category => ReportField::Submit,
            ReportField::Severity => ReportField::Category,
            ReportField::Location => ReportField::Severity,
            ReportField::Date => ReportField::Location,
            ReportField::Time => ReportField::Date,
            ReportField::Description => ReportField::Time,
            ReportField::Photos => ReportField::Description,
            ReportField::Submit => ReportField::Photos,
        }
    }
}

/// Notification and privacy toggles shown on the settings tab.
///
/// These live in the UI only; nothing downstream consumes them, so they
/// reset to these defaults on every launch.
#[derive(Debug, Clone, Copy)]
pub struct SettingsState {
    pub email_safety_alerts: bool,
    pub email_weekly_reports: bool,
    pub email_community_updates: bool,
    pub email_route_changes: bool,
    pub push_instant_alerts: bool,
    pub push_nearby_incidents: bool,
    pub push_route_updates: bool,
    pub push_check_in_reminders: bool,
    pub privacy_share_location: bool,
    pub privacy_share_routes: bool,
    pub privacy_public_profile: bool,
    pub privacy_anonymous_reporting: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            email_safety_alerts: true,
            email_weekly_reports: true,
            email_community_updates: false,
            email_route_changes: true,
            push_instant_alerts: true,
            push_nearby_incidents: true,
            push_route_updates: true,
            push_check_in_reminders: false,
            privacy_share_location: true,
            privacy_share_routes: false,
            privacy_public_profile: false,
            privacy_anonymous_reporting: true,
        }
    }
}

/// Result of a background task
pub enum TaskResult {
    /// Sign-in or registration attempt finished
    Auth(Result<Identity, AuthError>),
    /// The assistant finished "typing" a reply
    Assistant(AssistantReply),
}

// ============================================================================
// Application
// ============================================================================

/// Main application state
pub struct App {
    // Core state
    pub state: AppState,
    pub current_tab: Tab,
    pub focus: Focus,
    pub config: Config,

    // Backend handles
    pub session: SessionStore,
    pub directory: DirectoryClient,
    pub prefs: LanguagePrefs,

    // Auth forms
    pub auth_view: AuthView,
    pub auth_focus: AuthFocus,
    pub auth_name: String,
    pub auth_email: String,
    pub auth_password: String,
    pub auth_confirm: String,
    pub auth_error: Option<String>,
    pub auth_pending: bool,

    // Map data (fixed for the process lifetime)
    pub cameras: Vec<Camera>,
    pub crime_zones: Vec<CrimeZone>,
    pub routes: Vec<RouteOption>,
    pub route_selection: usize,

    // Notifications
    pub notifications: Vec<Notification>,

    // Safety assistant
    pub chat: ChatLog,
    pub chat_input: String,
    pub assistant_typing: bool,
    pub quick_action_selection: usize,

    // Incident reporting
    pub ledger: ReportLedger,
    pub draft: ReportDraft,
    pub report_field: ReportField,
    pub report_error: Option<String>,
    pub status_selection: usize,
    pub admin_selection: usize,

    // Settings
    pub settings: SettingsState,
    pub settings_selection: usize,
    pub language_selection: usize,

    // SOS
    sos_deadline: Option<Instant>,

    // Status bar
    pub status_message: Option<String>,

    // Background task channel
    task_tx: mpsc::Sender<TaskResult>,
    task_rx: mpsc::Receiver<TaskResult>,
}

impl App {
    pub async fn new() -> Result<Self> {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let state_store = StateStore::new(config.state_dir()?)?;
        let directory = DirectoryClient::new();
        let session = SessionStore::new(directory.clone(), state_store.clone());
        let prefs = LanguagePrefs::new(state_store);

        let cameras = directory.cameras();
        let crime_zones = directory.crime_zones();
        let routes = directory.route_options();
        let notifications = directory.notifications();
        let ledger = ReportLedger::new(directory.seed_reports());

        // Prefill credentials from the environment or the last signed-in email
        let auth_email = std::env::var("WALKWISE_EMAIL")
            .ok()
            .or_else(|| config.last_email.clone())
            .unwrap_or_default();
        let auth_password = std::env::var("WALKWISE_PASSWORD").unwrap_or_default();

        let language_selection = LANGUAGES
            .iter()
            .position(|l| l.code == prefs.current().code)
            .unwrap_or(0);

        let (task_tx, task_rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        Ok(Self {
            state: AppState::Normal,
            current_tab: Tab::Home,
            focus: Focus::List,
            config,
            session,
            directory,
            prefs,
            auth_view: AuthView::SignIn,
            auth_focus: AuthFocus::Email,
            auth_name: String::new(),
            auth_email,
            auth_password,
            auth_confirm: String::new(),
            auth_error: None,
            auth_pending: false,
            cameras,
            crime_zones,
            routes,
            route_selection: 0,
            notifications,
            chat: ChatLog::new(),
            chat_input: String::new(),
            assistant_typing: false,
            quick_action_selection: 0,
            ledger,
            draft: ReportDraft::new(),
            report_field: ReportField::Category,
            report_error: None,
            status_selection: 0,
            admin_selection: 0,
            settings: SettingsState::default(),
            settings_selection: 0,
            language_selection,
            sos_deadline: None,
            status_message: None,
            task_tx,
            task_rx,
        })
    }

    /// Restore a persisted session snapshot, if one exists
    pub fn restore_session(&mut self) {
        if self.session.restore() {
            if let Some(identity) = self.session.identity() {
                info!(email = %identity.email, "Restored session");
            }
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn identity(&self) -> Option<Identity> {
        self.session.identity()
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .identity()
            .map(|i| i.is_admin())
            .unwrap_or(false)
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn selected_route(&self) -> Option<&RouteOption> {
        self.routes.get(self.route_selection)
    }

    pub fn selected_status_report(&self) -> Option<&walkwise_core::models::IncidentReport> {
        self.ledger.reports().get(self.status_selection)
    }

    pub fn selected_admin_report(&self) -> Option<&walkwise_core::models::IncidentReport> {
        self.ledger.reports().get(self.admin_selection)
    }

    /// Seconds left on the SOS countdown, rounded up
    pub fn sos_seconds_left(&self) -> u64 {
        match self.sos_deadline {
            Some(deadline) => {
                let left = deadline.saturating_duration_since(Instant::now());
                left.as_secs_f64().ceil() as u64
            }
            None => 0,
        }
    }

    // ------------------------------------------------------------------
    // Tab navigation
    // ------------------------------------------------------------------

    pub fn select_tab(&mut self, tab: Tab) {
        // The admin tab is invisible to regular users
        if tab == Tab::Admin && !self.is_admin() {
            return;
        }
        self.current_tab = tab;
        self.focus = Focus::List;
    }

    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next(self.is_admin());
        self.focus = Focus::List;
    }

    pub fn prev_tab(&mut self) {
        self.current_tab = self.current_tab.prev(self.is_admin());
        self.focus = Focus::List;
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Switch between the sign-in and registration forms
    pub fn switch_auth_view(&mut self) {
        self.auth_view = match self.auth_view {
            AuthView::SignIn => AuthView::Register,
            AuthView::Register => AuthView::SignIn,
        };
        self.auth_focus = match self.auth_view {
            AuthView::SignIn => AuthFocus::Email,
            AuthView::Register => AuthFocus::Name,
        };
        self.auth_error = None;
    }

    /// Validate the visible auth form and kick off the attempt in the
    /// background. Outcome arrives through the task channel.
    pub fn submit_auth(&mut self) {
        if self.auth_pending {
            return;
        }

        let email = self.auth_email.trim().to_string();
        let password = self.auth_password.clone();
        let name = self.auth_name.trim().to_string();

        match self.auth_view {
            AuthView::SignIn => {
                if email.is_empty() || password.is_empty() {
                    self.auth_error = Some("Email and password are required".to_string());
                    return;
                }
            }
            AuthView::Register => {
                if name.is_empty() || email.is_empty() || password.is_empty() {
                    self.auth_error = Some("All fields are required".to_string());
                    return;
                }
                if password != self.auth_confirm {
                    self.auth_error = Some("Passwords do not match".to_string());
                    return;
                }
            }
        }

        self.auth_error = None;
        self.auth_pending = true;

        let store = self.session.clone();
        let view = self.auth_view;
        let tx = self.task_tx.clone();
        tokio::spawn(async move {
            let result = match view {
                AuthView::SignIn => store.sign_in(&email, &password).await,
                AuthView::Register => store.sign_up(&name, &email, &password).await,
            };
            let _ = tx.send(TaskResult::Auth(result)).await;
        });
    }

    /// Drop the session and return to the sign-in form
    pub fn sign_out(&mut self) {
        self.session.sign_out();
        self.auth_view = AuthView::SignIn;
        self.auth_focus = AuthFocus::Email;
        self.auth_password.clear();
        self.auth_confirm.clear();
        self.auth_error = None;
        self.current_tab = Tab::Home;
        self.focus = Focus::List;
        self.state = AppState::Normal;
        self.status_message = None;
        info!("Signed out");
    }

    // ------------------------------------------------------------------
    // Background tasks
    // ------------------------------------------------------------------

    /// Drain finished background tasks and advance timers. Called from the
    /// main loop on every tick.
    pub async fn check_background_tasks(&mut self) {
        while let Ok(result) = self.task_rx.try_recv() {
            self.apply_task_result(result);
        }
        self.tick_sos();
    }

    fn apply_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Auth(outcome) => {
                self.auth_pending = false;
                match outcome {
                    Ok(identity) => {
                        info!(email = %identity.email, "Signed in");
                        self.auth_password.clear();
                        self.auth_confirm.clear();
                        self.auth_error = None;
                        self.config.last_email = Some(identity.email.clone());
                        if let Err(e) = self.config.save() {
                            warn!(error = %e, "Failed to persist config");
                        }
                        self.current_tab = Tab::Home;
                        self.focus = Focus::List;
                    }
                    Err(e) => {
                        warn!(error = %e, "Authentication failed");
                        self.auth_error = Some(e.to_string());
                    }
                }
            }
            TaskResult::Assistant(reply) => {
                self.assistant_typing = false;
                self.chat.push_reply(reply);
            }
        }
    }

    // ------------------------------------------------------------------
    // SOS
    // ------------------------------------------------------------------

    /// Start the SOS countdown
    pub fn arm_sos(&mut self) {
        self.state = AppState::SosCountdown;
        self.sos_deadline = Some(Instant::now() + Duration::from_secs(SOS_COUNTDOWN_SECS));
    }

    /// Cancel the countdown before the alert goes out
    pub fn cancel_sos(&mut self) {
        self.sos_deadline = None;
        self.state = AppState::Normal;
        self.status_message = Some("Emergency alert cancelled".to_string());
    }

    /// Dismiss an active alert
    pub fn resolve_sos(&mut self) {
        self.sos_deadline = None;
        self.state = AppState::Normal;
        self.status_message = Some("Emergency alert resolved".to_string());
    }

    fn tick_sos(&mut self) {
        if self.state != AppState::SosCountdown {
            return;
        }
        let expired = self
            .sos_deadline
            .map(|d| Instant::now() >= d)
            .unwrap_or(true);
        if expired {
            self.state = AppState::SosActive;
            self.sos_deadline = None;
            info!("SOS alert activated");
            self.notifications.insert(
                0,
                Notification::new(
                    NoticeKind::Alert,
                    "Emergency Alert Activated",
                    "Emergency services notified. Emergency contacts alerted. \
                     Location shared with authorities.",
                ),
            );
            self.status_message = Some("Emergency alert sent".to_string());
        }
    }

    // ------------------------------------------------------------------
    // Safety assistant
    // ------------------------------------------------------------------

    /// Send the composed chat message, if any
    pub fn send_chat_message(&mut self) {
        if self.assistant_typing {
            return;
        }
        let text = self.chat_input.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.chat_input.clear();
        self.dispatch_prompt(text);
    }

    /// Send the selected quick action prompt
    pub fn send_quick_action(&mut self) {
        if self.assistant_typing {
            return;
        }
        let actions = QuickAction::ALL;
        let action = actions[self.quick_action_selection % actions.len()];
        self.dispatch_prompt(action.prompt().to_string());
    }

    fn dispatch_prompt(&mut self, prompt: String) {
        self.chat.push_user(prompt.clone());
        self.assistant_typing = true;

        let tx = self.task_tx.clone();
        tokio::spawn(async move {
            // The reply is instant; the delay is the "typing" indicator
            tokio::time::sleep(Duration::from_millis(TYPING_DELAY_MS)).await;
            let reply = respond(&prompt);
            let _ = tx.send(TaskResult::Assistant(reply)).await;
        });
    }

    // ------------------------------------------------------------------
    // Incident reporting
    // ------------------------------------------------------------------

    pub fn cycle_report_category(&mut self, forward: bool) {
        self.draft.category = Some(cycled(
            &IncidentCategory::ALL,
            self.draft.category,
            forward,
        ));
    }

    pub fn cycle_report_severity(&mut self, forward: bool) {
        self.draft.severity = cycled(&Severity::ALL, Some(self.draft.severity), forward);
    }

    /// Attach a placeholder photo to the draft
    pub fn add_report_photo(&mut self) {
        if self.draft.photos.len() >= MAX_REPORT_PHOTOS {
            self.report_error = Some(format!("Maximum {} photos allowed", MAX_REPORT_PHOTOS));
            return;
        }
        let n = self.draft.photos.len() + 1;
        self.draft.photos.push(format!("photo_{}.jpg", n));
        self.report_error = None;
    }

    pub fn remove_report_photo(&mut self) {
        self.draft.photos.pop();
        self.report_error = None;
    }

    /// Submit the draft to the ledger. On success the form resets and the
    /// new report appears at the top of the status tab.
    pub fn submit_report(&mut self) {
        match self.ledger.submit(&self.draft) {
            Ok(report) => {
                info!(id = %report.id, "Incident report submitted");
                self.draft = ReportDraft::new();
                self.report_field = ReportField::Category;
                self.report_error = None;
                self.state = AppState::Normal;
                self.status_selection = 0;
                self.status_message = Some("Report submitted for review".to_string());
            }
            Err(msg) => {
                self.report_error = Some(msg);
            }
        }
    }

    // ------------------------------------------------------------------
    // Moderation
    // ------------------------------------------------------------------

    pub fn review_selected_report(&mut self) {
        if let Some(id) = self.selected_admin_report().map(|r| r.id.clone()) {
            if self.ledger.start_review(&id) {
                self.status_message = Some("Report moved to review".to_string());
            }
        }
    }

    pub fn verify_selected_report(&mut self) {
        if let Some(id) = self.selected_admin_report().map(|r| r.id.clone()) {
            if self.ledger.verify(&id) {
                self.status_message = Some("Report verified".to_string());
            }
        }
    }

    pub fn reject_selected_report(&mut self) {
        if let Some(id) = self.selected_admin_report().map(|r| r.id.clone()) {
            if self.ledger.reject(&id) {
                self.status_message = Some("Report rejected".to_string());
            }
        }
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    pub fn mark_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    /// Toggle rows in display order: (group, label, enabled)
    pub fn setting_rows(&self) -> [(&'static str, &'static str, bool); SETTING_COUNT] {
        let s = &self.settings;
        [
            ("Email Notifications", "Safety Alerts", s.email_safety_alerts),
            ("Email Notifications", "Weekly Reports", s.email_weekly_reports),
            (
                "Email Notifications",
                "Community Updates",
                s.email_community_updates,
            ),
            ("Email Notifications", "Route Changes", s.email_route_changes),
            ("Push Notifications", "Instant Alerts", s.push_instant_alerts),
            (
                "Push Notifications",
                "Nearby Incidents",
                s.push_nearby_incidents,
            ),
            ("Push Notifications", "Route Updates", s.push_route_updates),
            (
                "Push Notifications",
                "Check-in Reminders",
                s.push_check_in_reminders,
            ),
            (
                "Privacy & Security",
                "Share Location",
                s.privacy_share_location,
            ),
            ("Privacy & Security", "Share Routes", s.privacy_share_routes),
            (
                "Privacy & Security",
                "Public Profile",
                s.privacy_public_profile,
            ),
            (
                "Privacy & Security",
                "Anonymous Reporting",
                s.privacy_anonymous_reporting,
            ),
        ]
    }

    pub fn toggle_selected_setting(&mut self) {
        let s = &mut self.settings;
        match self.settings_selection {
            0 => s.email_safety_alerts = !s.email_safety_alerts,
            1 => s.email_weekly_reports = !s.email_weekly_reports,
            2 => s.email_community_updates = !s.email_community_updates,
            3 => s.email_route_changes = !s.email_route_changes,
            4 => s.push_instant_alerts = !s.push_instant_alerts,
            5 => s.push_nearby_incidents = !s.push_nearby_incidents,
            6 => s.push_route_updates = !s.push_route_updates,
            7 => s.push_check_in_reminders = !s.push_check_in_reminders,
            8 => s.privacy_share_location = !s.privacy_share_location,
            9 => s.privacy_share_routes = !s.privacy_share_routes,
            10 => s.privacy_public_profile = !s.privacy_public_profile,
            11 => s.privacy_anonymous_reporting = !s.privacy_anonymous_reporting,
            _ => {}
        }
    }

    /// Persist the highlighted language as the preference
    pub fn select_language(&mut self) {
        let language = &LANGUAGES[self.language_selection.min(LANGUAGES.len() - 1)];
        match self.prefs.select(language.code) {
            Ok(()) => {
                self.status_message = Some(format!("Language set to {}", language.name));
            }
            Err(e) => {
                warn!(error = %e, "Failed to save language preference");
                self.status_message = Some("Could not save language preference".to_string());
            }
        }
    }
}

// ============================================================================
// Input validation helpers
// ============================================================================

/// Validate that a character is acceptable for text field input
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check whether a character can be appended to a bounded text field
pub fn can_add_char(current: &str, max_len: usize, c: char) -> bool {
    is_valid_input_char(c) && current.len() < max_len
}

/// Step through a fixed catalogue, wrapping at the ends. `None` starts at
/// the first entry going forward and the last going backward.
fn cycled<T: Copy + PartialEq>(all: &[T], current: Option<T>, forward: bool) -> T {
    let len = all.len();
    let index = current.and_then(|c| all.iter().position(|x| *x == c));
    let next = match (index, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1) % len,
        (Some(i), false) => (i + len - 1) % len,
    };
    all[next]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------
    // Tab navigation
    // ------------------------------------------------------------------

    #[test]
    fn next_tab_skips_admin_for_regular_users() {
        assert_eq!(Tab::Settings.next(false), Tab::Home);
        assert_eq!(Tab::Settings.next(true), Tab::Admin);
    }

    #[test]
    fn prev_tab_skips_admin_for_regular_users() {
        assert_eq!(Tab::Home.prev(false), Tab::Settings);
        assert_eq!(Tab::Home.prev(true), Tab::Admin);
    }

    #[test]
    fn tab_cycle_visits_every_tab_for_admins() {
        let mut tab = Tab::Home;
        let mut seen = Vec::new();
        for _ in 0..Tab::ALL.len() {
            seen.push(tab);
            tab = tab.next(true);
        }
        assert_eq!(tab, Tab::Home);
        for expected in Tab::ALL {
            assert!(seen.contains(&expected));
        }
    }

    // ------------------------------------------------------------------
    // Auth focus cycling
    // ------------------------------------------------------------------

    #[test]
    fn sign_in_focus_skips_register_only_fields() {
        let mut focus = AuthFocus::Email;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(focus);
            focus = focus.next(AuthView::SignIn);
        }
        assert_eq!(focus, AuthFocus::Email);
        assert!(!seen.contains(&AuthFocus::Name));
        assert!(!seen.contains(&AuthFocus::Confirm));
    }

    #[test]
    fn register_focus_covers_all_fields() {
        let mut focus = AuthFocus::Name;
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(focus);
            focus = focus.next(AuthView::Register);
        }
        assert_eq!(focus, AuthFocus::Name);
        assert!(seen.contains(&AuthFocus::Confirm));
        assert!(seen.contains(&AuthFocus::Switch));
    }

    #[test]
    fn focus_prev_undoes_next() {
        for view in [AuthView::SignIn, AuthView::Register] {
            let start = match view {
                AuthView::SignIn => AuthFocus::Email,
                AuthView::Register => AuthFocus::Name,
            };
            assert_eq!(start.next(view).prev(view), start);
        }
    }

    // ------------------------------------------------------------------
    // Report form
    // ------------------------------------------------------------------

    #[test]
    fn report_field_cycle_round_trips() {
        let mut field = ReportField::Category;
        for _ in 0..8 {
            field = field.next();
        }
        assert_eq!(field, ReportField::Category);
        assert_eq!(ReportField::Category.prev(), ReportField::Submit);
    }

    #[test]
    fn cycled_wraps_in_both_directions() {
        let all = IncidentCategory::ALL;
        assert_eq!(cycled(&all, None, true), IncidentCategory::Theft);
        assert_eq!(cycled(&all, None, false), IncidentCategory::Other);
        assert_eq!(
            cycled(&all, Some(IncidentCategory::Other), true),
            IncidentCategory::Theft
        );
        assert_eq!(
            cycled(&all, Some(IncidentCategory::Theft), false),
            IncidentCategory::Other
        );
    }

    // ------------------------------------------------------------------
    // Input validation
    // ------------------------------------------------------------------

    #[test]
    fn rejects_control_characters() {
        assert!(!can_add_char("abc", 10, '\x07'));
        assert!(!can_add_char("abc", 10, '\n'));
        assert!(can_add_char("abc", 10, 'd'));
        assert!(can_add_char("abc", 10, ' '));
    }

    #[test]
    fn enforces_field_length_caps() {
        let full = "a".repeat(MAX_EMAIL_LENGTH);
        assert!(!can_add_char(&full, MAX_EMAIL_LENGTH, 'x'));
        assert!(can_add_char(&full[..MAX_EMAIL_LENGTH - 1], MAX_EMAIL_LENGTH, 'x'));
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    #[test]
    fn settings_defaults_match_the_product_defaults() {
        let s = SettingsState::default();
        assert!(s.email_safety_alerts);
        assert!(!s.email_community_updates);
        assert!(s.push_instant_alerts);
        assert!(!s.push_check_in_reminders);
        assert!(s.privacy_share_location);
        assert!(!s.privacy_public_profile);
        assert!(s.privacy_anonymous_reporting);
    }
}
