use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

// Demo profile details. The mock directory only stores name/email/role;
// the rest comes fixed with the demo account.
const PROFILE_PHONE: &str = "+1 (555) 123-4567";
const PROFILE_LOCATION: &str = "New York, NY";
const MEMBER_SINCE: &str = "January 2024";

/// (name, relation, phone)
const EMERGENCY_CONTACTS: [(&str, &str, &str); 2] = [
    ("Jane Doe", "Sister", "+1 (555) 987-6543"),
    ("John Smith", "Friend", "+1 (555) 456-7890"),
];

/// (label, value)
const ACTIVITY_STATS: [(&str, &str); 4] = [
    ("Trust Score", "95%"),
    ("Incidents Reported", "12"),
    ("Safe Routes Used", "45"),
    ("Check-ins", "89"),
];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_account(frame, app, chunks[0]);
    render_contacts(frame, chunks[1]);
}

fn render_account(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    match app.identity() {
        Some(identity) => {
            lines.push(Line::from(Span::styled(
                format!(" {}", identity.name),
                styles::title_style(),
            )));
            lines.push(Line::from(Span::styled(
                format!(" {}", identity.email),
                styles::muted_style(),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(" Role:          ", styles::muted_style()),
                Span::raw(identity.role.to_string()),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled(
                " Not signed in",
                styles::muted_style(),
            )));
        }
    }

    lines.push(Line::from(vec![
        Span::styled(" Phone:         ", styles::muted_style()),
        Span::raw(PROFILE_PHONE),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Location:      ", styles::muted_style()),
        Span::raw(PROFILE_LOCATION),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" Member since:  ", styles::muted_style()),
        Span::raw(MEMBER_SINCE),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Activity", styles::title_style())));
    for (label, value) in ACTIVITY_STATS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<20}", label), styles::muted_style()),
            Span::styled(value, styles::highlight_style()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Press ", styles::muted_style()),
        Span::styled("[o]", styles::help_key_style()),
        Span::styled(" to sign out", styles::muted_style()),
    ]));

    let block = Block::default()
        .title(" Profile ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_contacts(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();

    for (name, relation, phone) in EMERGENCY_CONTACTS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}", name), styles::help_desc_style()),
            Span::styled(format!(" ({})", relation), styles::muted_style()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", phone),
            styles::muted_style(),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        " These contacts are alerted when an SOS goes out",
        styles::muted_style(),
    )));

    let block = Block::default()
        .title(format!(" Emergency Contacts ({}) ", EMERGENCY_CONTACTS.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
