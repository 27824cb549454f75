use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use walkwise_core::auth::{guard, RouteDecision};
use walkwise_core::models::{MAP_CENTER, MAP_ZOOM};

use crate::app::{App, AppState, AuthFocus, AuthView, Tab};

use super::styles;
use super::tabs::{admin, assistant, home, map, profile, report, settings, status};

/// Characters of a text field visible at once; longer input scrolls
const AUTH_FIELD_WIDTH: usize = 24;

pub fn render(frame: &mut Frame, app: &App) {
    match guard::decide(app.session.caps()) {
        RouteDecision::Loading => render_loading_screen(frame),
        RouteDecision::RedirectToSignIn => render_auth_screen(frame, app),
        RouteDecision::Render => render_protected(frame, app),
    }
}

fn render_protected(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }

    if matches!(app.state, AppState::SosCountdown) {
        render_sos_countdown_overlay(frame, app);
    }

    if matches!(app.state, AppState::SosActive) {
        render_sos_active_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  WalkWise";
    let help_hint = "[?] Help";

    let unread = app.unread_notifications();
    let alert_hint = if unread > 0 {
        format!("\u{25cf} {} unread   ", unread)
    } else {
        String::new()
    };

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::raw(" ".repeat(
            (area.width as usize)
                .saturating_sub(title.len() + alert_hint.chars().count() + help_hint.len() + 4),
        )),
        Span::styled(alert_hint, styles::error_style()),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let admin = app.is_admin();

    let mut spans = vec![Span::raw(" ")];
    let mut first = true;
    for (i, tab) in Tab::ALL.iter().enumerate() {
        if *tab == Tab::Admin && !admin {
            continue;
        }
        if !first {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        first = false;

        let label = format!("[{}] {}", i + 1, tab.title());
        if app.current_tab == *tab {
            spans.push(Span::styled(label, styles::tab_style(true)));
        } else {
            spans.push(Span::styled(label, styles::muted_style()));
        }
    }

    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.current_tab {
        Tab::Home => home::render(frame, app, area),
        Tab::Map => map::render(frame, app, area),
        Tab::Assistant => assistant::render(frame, app, area),
        Tab::Report => report::render(frame, app, area),
        Tab::Status => status::render(frame, app, area),
        Tab::Profile => profile::render(frame, app, area),
        Tab::Settings => settings::render(frame, app, area),
        Tab::Admin => admin::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = "[s]os | [q]uit";

    let left_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else if let Some(identity) = app.identity() {
        format!(" {} \u{00b7} {} ", identity.name, identity.role)
    } else {
        " Not signed in ".to_string()
    };

    let right_text = format!(" {} ", shortcuts);

    // Center text for the Map tab - show the viewport the data describes
    let center_text = if app.current_tab == Tab::Map {
        format!("{} \u{00b7} zoom {}", MAP_CENTER, MAP_ZOOM)
    } else {
        String::new()
    };

    let width = area.width as usize;

    if center_text.is_empty() {
        // No center text - just left and right
        let padding_len = width
            .saturating_sub(left_text.len())
            .saturating_sub(right_text.len());
        let status_line = Line::from(vec![
            Span::styled(left_text, styles::muted_style()),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right_text, styles::muted_style()),
        ]);
        let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
        frame.render_widget(paragraph, area);
    } else {
        // With center text - center it absolutely, regardless of left/right content
        let center_start = (width.saturating_sub(center_text.len())) / 2;
        let left_pad = center_start.saturating_sub(left_text.len());
        let right_start = center_start + center_text.len();
        let right_pad = width
            .saturating_sub(right_start)
            .saturating_sub(right_text.len());

        let status_line = Line::from(vec![
            Span::styled(left_text, styles::muted_style()),
            Span::raw(" ".repeat(left_pad)),
            Span::styled(center_text, styles::muted_style()),
            Span::raw(" ".repeat(right_pad)),
            Span::styled(right_text, styles::muted_style()),
        ]);
        let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
        frame.render_widget(paragraph, area);
    }
}

// ============================================================================
// Auth screens
// ============================================================================

fn logo_lines(indent: usize) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    vec![
        Line::from(Span::styled(
            format!("{}╦ ╦╔═╗╦  ╦╔═╦ ╦╦╔═╗╔═╗", pad),
            styles::title_style(),
        )),
        Line::from(Span::styled(
            format!("{}║║║╠═╣║  ╠╩╗║║║║╚═╗║╣ ", pad),
            styles::title_style(),
        )),
        Line::from(Span::styled(
            format!("{}╚╩╝╩ ╩╩═╝╩ ╩╚╩╝╩╚═╝╚═╝", pad),
            styles::title_style(),
        )),
    ]
}

fn render_loading_screen(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 9, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = logo_lines(11);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "                 Loading...",
        styles::muted_style(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One `Label: [value]` row on the auth forms
fn auth_field_line(label: &str, value: &str, focused: bool, masked: bool) -> Line<'static> {
    let display = if masked {
        "*".repeat(value.chars().count().min(AUTH_FIELD_WIDTH))
    } else {
        tail_window(value, AUTH_FIELD_WIDTH)
    };
    let field_style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let cursor = if focused { "▌" } else { "" };

    Line::from(vec![
        Span::raw("        "),
        Span::styled(format!("{}[", label), styles::muted_style()),
        Span::styled(format!("{:<24}{}", display, cursor), field_style),
        Span::styled("]", styles::muted_style()),
    ])
}

fn render_auth_screen(frame: &mut Frame, app: &App) {
    let field_rows = match app.auth_view {
        AuthView::SignIn => 2,
        AuthView::Register => 4,
    };
    let mut height = 11 + field_rows;
    if app.auth_error.is_some() {
        height += 2;
    }
    let area = centered_rect_fixed(56, height, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = logo_lines(16);
    lines.push(Line::from(Span::styled(
        " Your AI-powered companion for safe urban navigation",
        styles::muted_style(),
    )));
    lines.push(Line::from(""));

    if app.auth_view == AuthView::Register {
        lines.push(auth_field_line(
            "Name:      ",
            &app.auth_name,
            app.auth_focus == AuthFocus::Name,
            false,
        ));
    }
    lines.push(auth_field_line(
        "Email:     ",
        &app.auth_email,
        app.auth_focus == AuthFocus::Email,
        false,
    ));
    lines.push(auth_field_line(
        "Password:  ",
        &app.auth_password,
        app.auth_focus == AuthFocus::Password,
        true,
    ));
    if app.auth_view == AuthView::Register {
        lines.push(auth_field_line(
            "Confirm:   ",
            &app.auth_confirm,
            app.auth_focus == AuthFocus::Confirm,
            true,
        ));
    }

    lines.push(Line::from(""));

    // Submit button
    let button_focused = app.auth_focus == AuthFocus::Submit;
    let button_style = if button_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let (focused_label, idle_label, indent) = match app.auth_view {
        AuthView::SignIn => (" ▶ Sign In ◀ ", "   Sign In   ", 19),
        AuthView::Register => (" ▶ Create Account ◀ ", "   Create Account   ", 16),
    };
    let label = if button_focused {
        focused_label
    } else {
        idle_label
    };
    lines.push(Line::from(vec![
        Span::raw(format!("{}[", " ".repeat(indent))),
        Span::styled(label, button_style),
        Span::raw("]"),
    ]));

    lines.push(Line::from(""));

    // Switch between the two forms
    let switch_focused = app.auth_focus == AuthFocus::Switch;
    let switch_style = if switch_focused {
        styles::selected_style()
    } else {
        styles::highlight_style()
    };
    let (prompt, link, indent) = match app.auth_view {
        AuthView::SignIn => ("Need an account? ", "[Create one]", 12),
        AuthView::Register => ("Have an account? ", "[Sign in]", 14),
    };
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(indent)),
        Span::styled(prompt, styles::muted_style()),
        Span::styled(link, switch_style),
    ]));

    // Error message
    if let Some(ref error) = app.auth_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            styles::error_style(),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ============================================================================
// Overlays
// ============================================================================

fn render_help_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(52, 27, frame.area());
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let mut help_text = logo_lines(14);
    help_text.push(Line::from(Span::styled(
        format!("              version {}", version),
        styles::muted_style(),
    )));
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Navigation",
        styles::highlight_style(),
    )));
    help_text.push(Line::from(vec![
        Span::styled("  1-8       ", styles::help_key_style()),
        Span::styled("Switch tabs", styles::help_desc_style()),
    ]));
    help_text.push(Line::from(vec![
        Span::styled("  ←/→       ", styles::help_key_style()),
        Span::styled("Prev/next tab", styles::help_desc_style()),
    ]));
    help_text.push(Line::from(vec![
        Span::styled("  Tab       ", styles::help_key_style()),
        Span::styled("Switch focus (list ↔ detail)", styles::help_desc_style()),
    ]));
    help_text.push(Line::from(vec![
        Span::styled("  ↑/↓, j/k  ", styles::help_key_style()),
        Span::styled("Navigate list", styles::help_desc_style()),
    ]));
    help_text.push(Line::from(vec![
        Span::styled("  Enter     ", styles::help_key_style()),
        Span::styled("Select / toggle", styles::help_desc_style()),
    ]));
    help_text.push(Line::from(vec![
        Span::styled("  Esc       ", styles::help_key_style()),
        Span::styled("Go back", styles::help_desc_style()),
    ]));
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Actions",
        styles::highlight_style(),
    )));
    help_text.push(Line::from(vec![
        Span::styled("  i or /    ", styles::help_key_style()),
        Span::styled("Message the assistant", styles::help_desc_style()),
    ]));
    help_text.push(Line::from(vec![
        Span::styled("  e         ", styles::help_key_style()),
        Span::styled("Edit the incident report form", styles::help_desc_style()),
    ]));
    help_text.push(Line::from(vec![
        Span::styled("  s         ", styles::help_key_style()),
        Span::styled("Emergency SOS countdown", styles::help_desc_style()),
    ]));
    help_text.push(Line::from(vec![
        Span::styled("  m         ", styles::help_key_style()),
        Span::styled("Mark alerts as read (Home)", styles::help_desc_style()),
    ]));
    help_text.push(Line::from(vec![
        Span::styled("  o         ", styles::help_key_style()),
        Span::styled("Sign out (Profile)", styles::help_desc_style()),
    ]));
    help_text.push(Line::from(vec![
        Span::styled("  q         ", styles::help_key_style()),
        Span::styled("Quit", styles::help_desc_style()),
    ]));

    if app.is_admin() {
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            " Admin Tab",
            styles::highlight_style(),
        )));
        help_text.push(Line::from(vec![
            Span::styled("  Enter/v/x ", styles::help_key_style()),
            Span::styled("Review / verify / reject report", styles::help_desc_style()),
        ]));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(vec![
        Span::styled("       Press ", styles::muted_style()),
        Span::styled("?", styles::help_key_style()),
        Span::styled(" or ", styles::muted_style()),
        Span::styled("Esc", styles::help_key_style()),
        Span::styled(" to close", styles::muted_style()),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 10, frame.area());
    frame.render_widget(Clear, area);

    let mut lines = logo_lines(11);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "      Are you sure you want to quit?",
        styles::highlight_style(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("      Press ", styles::muted_style()),
        Span::styled("[Y]", styles::help_key_style()),
        Span::styled(" to quit, ", styles::muted_style()),
        Span::styled("[N]", styles::help_key_style()),
        Span::styled(" to cancel", styles::muted_style()),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true))
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_sos_countdown_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(46, 10, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "               EMERGENCY SOS",
            styles::error_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("          Alert goes out in {}s", app.sos_seconds_left()),
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("      Press ", styles::muted_style()),
            Span::styled("[Esc]", styles::help_key_style()),
            Span::styled(" to cancel the alert", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::error_style())
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_sos_active_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 12, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "           EMERGENCY ALERT ACTIVE",
            styles::error_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "    \u{2713} Emergency services notified",
            styles::success_style(),
        )),
        Line::from(Span::styled(
            "    \u{2713} Emergency contacts alerted",
            styles::success_style(),
        )),
        Line::from(Span::styled(
            "    \u{2713} Location shared with authorities",
            styles::success_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("      Press ", styles::muted_style()),
            Span::styled("[Esc]", styles::help_key_style()),
            Span::styled(" when you are safe", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::error_style())
        .style(Style::default());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Last `width` characters of a value, so long input stays visible while
/// typing
fn tail_window(value: &str, width: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let start = chars.len().saturating_sub(width);
    chars[start..].iter().collect()
}
