use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_queue(frame, app, chunks[0]);
    render_review_pane(frame, app, chunks[1]);
}

fn render_queue(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(app.focus, Focus::List);

    let header = Row::new([
        Cell::from("Status"),
        Cell::from("Category"),
        Cell::from("Severity"),
        Cell::from("When"),
    ])
    .style(styles::title_style())
    .height(1);

    let rows: Vec<Row> = app
        .ledger
        .reports()
        .iter()
        .enumerate()
        .map(|(i, report)| {
            let style = if i == app.admin_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };

            Row::new(vec![
                Cell::from(Span::styled(
                    report.status.to_string(),
                    styles::report_status_style(report.status),
                )),
                Cell::from(report.category.to_string()),
                Cell::from(Span::styled(
                    report.severity.to_string(),
                    styles::severity_style(report.severity),
                )),
                Cell::from(report.time_ago()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(10), // Status
        Constraint::Fill(1),    // Category
        Constraint::Length(9),  // Severity
        Constraint::Length(13), // When
    ];

    let counts = app.ledger.counts();
    let title = format!(
        " Moderation Queue ({}) - {} open ",
        app.ledger.reports().len(),
        counts.pending + counts.reviewing
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .title_style(styles::title_style())
                .borders(Borders::ALL)
                .border_style(styles::border_style(focused)),
        )
        .row_highlight_style(styles::selected_style());

    let mut state = TableState::default();
    state.select(Some(app.admin_selection));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_review_pane(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(app.focus, Focus::Detail);

    let (title, content) = match app.selected_admin_report() {
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
                    Span::styled("Reported:   ", styles::muted_style()),
                    Span::raw(report.time_ago()),
                ]),
                Line::from(""),
            ];

            for text_line in wrap_text(
                &report.description,
                (area.width as usize).saturating_sub(4).max(16),
            ) {
                lines.push(Line::from(format!("  {}", text_line)));
            }

            lines.push(Line::from(""));
            if report.status.is_open() {
                lines.push(Line::from(vec![
                    Span::styled("[Enter]", styles::help_key_style()),
                    Span::styled(" review  ", styles::muted_style()),
                    Span::styled("[v]", styles::help_key_style()),
                    Span::styled(" verify  ", styles::muted_style()),
                    Span::styled("[x]", styles::help_key_style()),
                    Span::styled(" reject", styles::muted_style()),
                ]));
            } else {
                lines.push(Line::from(Span::styled(
                    "This report is closed",
                    styles::muted_style(),
                )));
            }

            (title, lines)
        }
        None => (
            " Moderation ".to_string(),
            vec![Line::from(Span::styled(
                "No reports in the queue",
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
