use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use walkwise_core::models::ReportStatus;

use crate::app::{App, Focus};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(6)])
        .split(area);

    render_counts(frame, app, chunks[0]);

    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_report_table(frame, app, split[0]);
    render_report_detail(frame, app, split[1]);
}

fn render_counts(frame: &mut Frame, app: &App, area: Rect) {
    let counts = app.ledger.counts();
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("Pending {}", counts.pending),
            styles::report_status_style(ReportStatus::Pending),
        ),
        Span::styled("  \u{00b7}  ", styles::muted_style()),
        Span::styled(
            format!("Reviewing {}", counts.reviewing),
            styles::report_status_style(ReportStatus::Reviewing),
        ),
        Span::styled("  \u{00b7}  ", styles::muted_style()),
        Span::styled(
            format!("Verified {}", counts.verified),
            styles::report_status_style(ReportStatus::Verified),
        ),
        Span::styled("  \u{00b7}  ", styles::muted_style()),
        Span::styled(
            format!("Rejected {}", counts.rejected),
            styles::report_status_style(ReportStatus::Rejected),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_report_table(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(app.focus, Focus::List);

    let header = Row::new([
        Cell::from("When"),
        Cell::from("Category"),
        Cell::from("Location"),
        Cell::from("Severity"),
        Cell::from("Status"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = app
        .ledger
        .reports()
        .iter()
        .enumerate()
        .map(|(i, report)| {
            let style = if i == app.status_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };

            Row::new(vec![
                Cell::from(report.time_ago()),
                Cell::from(report.category.to_string()),
                Cell::from(report.location.clone()),
                Cell::from(Span::styled(
                    report.severity.to_string(),
                    styles::severity_style(report.severity),
                )),
                Cell::from(Span::styled(
                    report.status.to_string(),
                    styles::report_status_style(report.status),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(13), // When: "Aug 25, 2026"
        Constraint::Length(20), // Category
        Constraint::Fill(1),    // Location
        Constraint::Length(8),  // Severity
        Constraint::Length(9),  // Status
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(" Community Reports ({}) ", app.ledger.reports().len()))
                .title_style(styles::title_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(focused)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.status_selection));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_report_detail(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(app.focus, Focus::Detail);

    let (title, content) = match app.selected_status_report() {
        Some(report) => {
            let title = format!(" {} ", report.category);

            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Status:     ", styles::muted_style()),
                    Span::styled(
                        report.status.to_string(),
                        styles::report_status_style(report.status),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Severity:   ", styles::muted_style()),
                    Span::styled(
                        report.severity.to_string(),
                        styles::severity_style(report.severity),
                    ),
                ]),
                Line::from(vec![
                    Span::styled("Location:   ", styles::muted_style()),
                    Span::raw(report.location.clone()),
                ]),
                Line::from(vec![
                    Span::styled("Occurred:   ", styles::muted_style()),
                    Span::raw(report.occurred_at.format("%b %-d, %Y %H:%M").to_string()),
                ]),
                Line::from(""),
                Line::from(Span::styled("Description", styles::title_style())),
            ];

            for text_line in wrap_text(&report.description, (area.width as usize).saturating_sub(4).max(16)) {
                lines.push(Line::from(format!("  {}", text_line)));
            }

            if !report.photos.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("Photos ({})", report.photos.len()),
                    styles::title_style(),
                )));
                for photo in &report.photos {
                    lines.push(Line::from(Span::styled(
                        format!("  \u{2022} {}", photo),
                        styles::muted_style(),
                    )));
                }
            }

            (title, lines)
        }
        None => (
            " No Report Selected ".to_string(),
            vec![Line::from(Span::styled(
                "Submit a report from the Report tab",
                styles::muted_style(),
            ))],
        ),
    };

    let block = Block::default()
        .title(title)
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Greedy word wrap for the description pane
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
