use chrono::{Local, Timelike};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::styles;

/// Headline numbers from the demo backend. The mock serves fixed figures.
const STAT_CARDS: [(&str, &str, &str); 4] = [
    ("Active Incidents", "12", "In your area today"),
    ("Suggested Routes", "3", "Safe paths available"),
    ("Crime Trends", "-8%", "Decrease since last month"),
    ("Community Reports", "124", "Submitted this week"),
];

/// Area safety breakdown bars: (label, percent)
const SAFETY_BARS: [(&str, u8); 4] = [
    ("Crime Rate", 70),
    ("CCTV Coverage", 90),
    ("Lighting", 85),
    ("Public Transit", 95),
];

const AREA_SAFETY_SCORE: u8 = 85;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(5), // Stat cards
            Constraint::Min(8),    // Safety score + alerts
        ])
        .split(area);

    render_greeting(frame, app, chunks[0]);
    render_stat_cards(frame, chunks[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_safety_score(frame, bottom[0]);
    render_alerts(frame, app, bottom[1]);
}

fn render_greeting(frame: &mut Frame, app: &App, area: Rect) {
    let hour = Local::now().hour();
    let time_of_day = if (5..12).contains(&hour) {
        "morning"
    } else if (12..17).contains(&hour) {
        "afternoon"
    } else {
        "evening"
    };

    let name = app
        .identity()
        .map(|i| i.name)
        .unwrap_or_else(|| "there".to_string());

    let lines = vec![
        Line::from(Span::styled(
            format!(" Good {}, {}", time_of_day, name),
            styles::title_style(),
        )),
        Line::from(Span::styled(
            " Here's your safety overview for today",
            styles::muted_style(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_stat_cards(frame: &mut Frame, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    for (i, (title, value, subtitle)) in STAT_CARDS.iter().enumerate() {
        let value_style = match i {
            0 => styles::error_style(),
            1 => styles::success_style(),
            2 => styles::success_style(),
            _ => styles::title_style(),
        };

        let lines = vec![
            Line::from(Span::styled(format!(" {}", value), value_style)),
            Line::from(Span::styled(format!(" {}", subtitle), styles::muted_style())),
        ];

        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(styles::muted_style())
            .borders(Borders::ALL)
            .border_style(styles::border_style(false));

        frame.render_widget(Paragraph::new(lines).block(block), cards[i]);
    }
}

fn render_safety_score(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {}%", AREA_SAFETY_SCORE),
                styles::score_style(AREA_SAFETY_SCORE),
            ),
            Span::styled("  overall area safety", styles::muted_style()),
        ]),
        Line::from(""),
    ];

    // Bars read "how safe", so higher is always better
    let bar_width = (area.width as usize).saturating_sub(28).clamp(10, 30);
    for (label, pct) in SAFETY_BARS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<15}", label), styles::muted_style()),
            Span::styled(meter(pct, bar_width), styles::score_style(pct)),
            Span::styled(format!(" {:>3}%", pct), styles::help_desc_style()),
        ]));
    }

    let block = Block::default()
        .title(" Area Safety ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_alerts(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    for notification in &app.notifications {
        let bullet_style = if notification.read {
            styles::muted_style()
        } else {
            styles::notice_style(notification.kind)
        };
        lines.push(Line::from(vec![
            Span::styled(" \u{25cf} ", bullet_style),
            Span::styled(notification.title.clone(), styles::help_desc_style()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {} \u{00b7} {}", notification.time_ago(), notification.message),
            styles::muted_style(),
        )));
    }

    if app.notifications.is_empty() {
        lines.push(Line::from(Span::styled(
            " No alerts right now",
            styles::muted_style(),
        )));
    }

    let unread = app.unread_notifications();
    let title = if unread > 0 {
        format!(" Recent Alerts ({} unread) - [m]ark read ", unread)
    } else {
        " Recent Alerts ".to_string()
    };

    let block = Block::default()
        .title(title)
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Fixed-width percentage meter
fn meter(pct: u8, width: usize) -> String {
    let filled = (pct as usize * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
