use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use walkwise_core::assistant::QuickAction;
use walkwise_core::auth::{guard, RouteDecision};
use walkwise_core::language::LANGUAGES;

use crate::app::{
    can_add_char, App, AppState, AuthFocus, Focus, ReportField, Tab, MAX_CHAT_LENGTH,
    MAX_DATE_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_EMAIL_LENGTH, MAX_LOCATION_LENGTH,
    MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MAX_TIME_LENGTH, SETTING_COUNT,
};

/// Handle keyboard input. Returns Ok(true) if the app should quit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Overlays swallow input first, regardless of auth state
    if matches!(app.state, AppState::ShowingHelp) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    if matches!(app.state, AppState::SosCountdown) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('c') => app.cancel_sos(),
            _ => {}
        }
        return Ok(false);
    }

    if matches!(app.state, AppState::SosActive) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') => app.resolve_sos(),
            _ => {}
        }
        return Ok(false);
    }

    // Route guard: until a session exists, input belongs to the auth forms
    match guard::decide(app.session.caps()) {
        RouteDecision::Loading => return Ok(false),
        RouteDecision::RedirectToSignIn => return handle_auth_input(app, key),
        RouteDecision::Render => {}
    }

    // Text-entry states capture every key
    if matches!(app.state, AppState::Composing) {
        return handle_composing_input(app, key);
    }
    if matches!(app.state, AppState::EditingReport) {
        return handle_report_edit_input(app, key);
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Char('s') => {
            app.arm_sos();
        }
        KeyCode::Char('1') => app.select_tab(Tab::Home),
        KeyCode::Char('2') => app.select_tab(Tab::Map),
        KeyCode::Char('3') => app.select_tab(Tab::Assistant),
        KeyCode::Char('4') => app.select_tab(Tab::Report),
        KeyCode::Char('5') => app.select_tab(Tab::Status),
        KeyCode::Char('6') => app.select_tab(Tab::Profile),
        KeyCode::Char('7') => app.select_tab(Tab::Settings),
        KeyCode::Char('8') => app.select_tab(Tab::Admin),
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::List => Focus::Detail,
                Focus::Detail => Focus::List,
            };
        }
        KeyCode::Left => app.prev_tab(),
        KeyCode::Right => app.next_tab(),
        KeyCode::Esc => {
            if app.focus == Focus::Detail {
                app.focus = Focus::List;
            }
        }
        _ => {
            // Tab-specific input
            match app.current_tab {
                Tab::Home => handle_home_input(app, key),
                Tab::Map => handle_map_input(app, key),
                Tab::Assistant => handle_assistant_input(app, key),
                Tab::Report => handle_report_input(app, key),
                Tab::Status => handle_status_input(app, key),
                Tab::Profile => handle_profile_input(app, key),
                Tab::Settings => handle_settings_input(app, key),
                Tab::Admin => handle_admin_input(app, key),
            }
        }
    }

    Ok(false)
}

// ============================================================================
// Auth forms
// ============================================================================

fn handle_auth_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        // No session to fall back to; leaving the form exits
        KeyCode::Esc => return Ok(true),
        KeyCode::Tab | KeyCode::Down => {
            app.auth_focus = app.auth_focus.next(app.auth_view);
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.auth_focus = app.auth_focus.prev(app.auth_view);
        }
        KeyCode::Enter => match app.auth_focus {
            AuthFocus::Submit => app.submit_auth(),
            AuthFocus::Switch => app.switch_auth_view(),
            _ => app.auth_focus = app.auth_focus.next(app.auth_view),
        },
        KeyCode::Backspace => match app.auth_focus {
            AuthFocus::Name => {
                app.auth_name.pop();
            }
            AuthFocus::Email => {
                app.auth_email.pop();
            }
            AuthFocus::Password => {
                app.auth_password.pop();
            }
            AuthFocus::Confirm => {
                app.auth_confirm.pop();
            }
            AuthFocus::Submit | AuthFocus::Switch => {}
        },
        KeyCode::Char(c) => match app.auth_focus {
            AuthFocus::Name => {
                if can_add_char(&app.auth_name, MAX_NAME_LENGTH, c) {
                    app.auth_name.push(c);
                }
            }
            AuthFocus::Email => {
                if can_add_char(&app.auth_email, MAX_EMAIL_LENGTH, c) {
                    app.auth_email.push(c);
                }
            }
            AuthFocus::Password => {
                if can_add_char(&app.auth_password, MAX_PASSWORD_LENGTH, c) {
                    app.auth_password.push(c);
                }
            }
            AuthFocus::Confirm => {
                if can_add_char(&app.auth_confirm, MAX_PASSWORD_LENGTH, c) {
                    app.auth_confirm.push(c);
                }
            }
            AuthFocus::Submit | AuthFocus::Switch => {}
        },
        _ => {}
    }
    Ok(false)
}

// ============================================================================
// Text-entry states
// ============================================================================

fn handle_composing_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Normal;
        }
        KeyCode::Enter => app.send_chat_message(),
        KeyCode::Backspace => {
            app.chat_input.pop();
        }
        KeyCode::Char(c) => {
            if can_add_char(&app.chat_input, MAX_CHAT_LENGTH, c) {
                app.chat_input.push(c);
            }
        }
        _ => {}
    }
    Ok(false)
}

fn handle_report_edit_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::Normal;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.report_field = app.report_field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.report_field = app.report_field.prev();
        }
        KeyCode::Left => match app.report_field {
            ReportField::Category => app.cycle_report_category(false),
            ReportField::Severity => app.cycle_report_severity(false),
            ReportField::Photos => app.remove_report_photo(),
            _ => {}
        },
        KeyCode::Right => match app.report_field {
            ReportField::Category => app.cycle_report_category(true),
            ReportField::Severity => app.cycle_report_severity(true),
            ReportField::Photos => app.add_report_photo(),
            _ => {}
        },
        KeyCode::Enter => match app.report_field {
            ReportField::Submit => app.submit_report(),
            _ => app.report_field = app.report_field.next(),
        },
        KeyCode::Backspace => match app.report_field {
            ReportField::Location => {
                app.draft.location.pop();
            }
            ReportField::Date => {
                app.draft.date.pop();
            }
            ReportField::Time => {
                app.draft.time.pop();
            }
            ReportField::Description => {
                app.draft.description.pop();
            }
            ReportField::Photos => app.remove_report_photo(),
            ReportField::Category | ReportField::Severity | ReportField::Submit => {}
        },
        KeyCode::Char(c) => match app.report_field {
            ReportField::Location => {
                if can_add_char(&app.draft.location, MAX_LOCATION_LENGTH, c) {
                    app.draft.location.push(c);
                }
            }
            ReportField::Date => {
                if can_add_char(&app.draft.date, MAX_DATE_LENGTH, c) {
                    app.draft.date.push(c);
                }
            }
            ReportField::Time => {
                if can_add_char(&app.draft.time, MAX_TIME_LENGTH, c) {
                    app.draft.time.push(c);
                }
            }
            ReportField::Description => {
                if can_add_char(&app.draft.description, MAX_DESCRIPTION_LENGTH, c) {
                    app.draft.description.push(c);
                }
            }
            ReportField::Photos => {
                if c == '+' {
                    app.add_report_photo();
                } else if c == '-' {
                    app.remove_report_photo();
                }
            }
            ReportField::Category | ReportField::Severity | ReportField::Submit => {}
        },
        _ => {}
    }
    Ok(false)
}

// ============================================================================
// Tab-specific input
// ============================================================================

fn handle_home_input(app: &mut App, key: KeyEvent) {
    if let KeyCode::Char('m') = key.code {
        app.mark_notifications_read();
    }
}

fn handle_map_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.routes.len().saturating_sub(1);
            app.route_selection = (app.route_selection + 1).min(max);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.route_selection = app.route_selection.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_assistant_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('i') | KeyCode::Char('/') => {
            app.state = AppState::Composing;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.focus == Focus::Detail {
                let max = QuickAction::ALL.len() - 1;
                app.quick_action_selection = (app.quick_action_selection + 1).min(max);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.focus == Focus::Detail {
                app.quick_action_selection = app.quick_action_selection.saturating_sub(1);
            }
        }
        KeyCode::Enter => {
            if app.focus == Focus::Detail {
                app.send_quick_action();
            } else {
                app.state = AppState::Composing;
            }
        }
        _ => {}
    }
}

fn handle_report_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('e') | KeyCode::Enter => {
            app.state = AppState::EditingReport;
        }
        _ => {}
    }
}

fn handle_status_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.ledger.reports().len().saturating_sub(1);
            app.status_selection = (app.status_selection + 1).min(max);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.status_selection = app.status_selection.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_profile_input(app: &mut App, key: KeyEvent) {
    if let KeyCode::Char('o') = key.code {
        app.sign_out();
    }
}

fn handle_settings_input(app: &mut App, key: KeyEvent) {
    match app.focus {
        Focus::List => match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                app.settings_selection = (app.settings_selection + 1).min(SETTING_COUNT - 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.settings_selection = app.settings_selection.saturating_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected_setting(),
            _ => {}
        },
        Focus::Detail => match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                app.language_selection = (app.language_selection + 1).min(LANGUAGES.len() - 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.language_selection = app.language_selection.saturating_sub(1);
            }
            KeyCode::Enter => app.select_language(),
            _ => {}
        },
    }
}

fn handle_admin_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.ledger.reports().len().saturating_sub(1);
            app.admin_selection = (app.admin_selection + 1).min(max);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.admin_selection = app.admin_selection.saturating_sub(1);
        }
        KeyCode::Enter => app.review_selected_report(),
        KeyCode::Char('v') => app.verify_selected_report(),
        KeyCode::Char('x') => app.reject_selected_report(),
        _ => {}
    }
}
