use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use walkwise_core::models::MAX_REPORT_PHOTOS;

use crate::app::{App, AppState, ReportField};
use crate::ui::styles;

/// Characters of a text field visible at once
const FIELD_WIDTH: usize = 36;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let editing = matches!(app.state, AppState::EditingReport);

    let mut lines = vec![Line::from(""), selector_line(
        app,
        editing,
        ReportField::Category,
        "Incident Type: ",
        app.draft
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "Select type...".to_string()),
    )];

    lines.push(selector_line(
        app,
        editing,
        ReportField::Severity,
        "Severity:      ",
        app.draft.severity.form_label().to_string(),
    ));
    lines.push(text_line(
        app,
        editing,
        ReportField::Location,
        "Location:      ",
        &app.draft.location,
    ));
    lines.push(text_line(
        app,
        editing,
        ReportField::Date,
        "Date:          ",
        &app.draft.date,
    ));
    lines.push(text_line(
        app,
        editing,
        ReportField::Time,
        "Time:          ",
        &app.draft.time,
    ));
    lines.push(text_line(
        app,
        editing,
        ReportField::Description,
        "Description:   ",
        &app.draft.description,
    ));

    // Photos row
    let photos_focused = editing && app.report_field == ReportField::Photos;
    let photos_style = if photos_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("Photos:        ", styles::muted_style()),
        Span::styled(
            format!("{} of {} attached", app.draft.photos.len(), MAX_REPORT_PHOTOS),
            photos_style,
        ),
        Span::styled("  (+ add, - remove)", styles::muted_style()),
    ]));
    for photo in &app.draft.photos {
        lines.push(Line::from(Span::styled(
            format!("                   \u{2022} {}", photo),
            styles::muted_style(),
        )));
    }

    // Submit button
    let submit_focused = editing && app.report_field == ReportField::Submit;
    let submit_style = if submit_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let submit_label = if submit_focused {
        " ▶ Submit Report ◀ "
    } else {
        "   Submit Report   "
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("  ["),
        Span::styled(submit_label, submit_style),
        Span::raw("]"),
    ]));

    // Validation problem, then the key hint
    lines.push(Line::from(""));
    if let Some(ref error) = app.report_error {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            styles::error_style(),
        )));
    }
    let hint = if editing {
        "  Tab/↓ next field \u{00b7} ←/→ change value \u{00b7} Enter submit \u{00b7} Esc done"
    } else {
        "  Press [e] to fill out the form"
    };
    lines.push(Line::from(Span::styled(hint, styles::muted_style())));

    let block = Block::default()
        .title(" Report an Incident ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(editing));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// A `<value>` row the arrow keys cycle through
fn selector_line(
    app: &App,
    editing: bool,
    field: ReportField,
    label: &str,
    value: String,
) -> Line<'static> {
    let focused = editing && app.report_field == field;
    let value_style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{}\u{2039} ", label), styles::muted_style()),
        Span::styled(format!("{:<28}", value), value_style),
        Span::styled(" \u{203a}", styles::muted_style()),
    ])
}

/// A `[value]` row that takes typed input
fn text_line(
    app: &App,
    editing: bool,
    field: ReportField,
    label: &str,
    value: &str,
) -> Line<'static> {
    let focused = editing && app.report_field == field;
    let value_style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    let cursor = if focused { "▌" } else { "" };
    let shown = tail_window(value, FIELD_WIDTH);
    Line::from(vec![
        Span::raw("  "),
        Span::styled(format!("{}[", label), styles::muted_style()),
        Span::styled(format!("{:<36}{}", shown, cursor), value_style),
        Span::styled("]", styles::muted_style()),
    ])
}

/// Last `width` characters so long input stays visible while typing
fn tail_window(value: &str, width: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    let start = chars.len().saturating_sub(width);
    chars[start..].iter().collect()
}
