use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use walkwise_core::language::LANGUAGES;

use crate::app::{App, Focus};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_toggles(frame, app, chunks[0]);
    render_languages(frame, app, chunks[1]);
}

fn render_toggles(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::List;
    let mut lines = Vec::new();
    let mut last_group = "";

    for (idx, (group, label, enabled)) in app.setting_rows().into_iter().enumerate() {
        if group != last_group {
            if !last_group.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!(" {}", group),
                styles::highlight_style(),
            )));
            last_group = group;
        }

        let marker = if enabled { "[x]" } else { "[ ]" };
        let style = if focused && idx == app.settings_selection {
            styles::selected_style()
        } else {
            styles::list_item_style()
        };
        lines.push(Line::from(Span::styled(
            format!("   {} {}", marker, label),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " ↑/↓ move · Enter or Space toggle · Tab to language",
        styles::muted_style(),
    )));

    let block = Block::default()
        .title(" Notifications & Privacy ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_languages(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Detail;
    let active_code = app.prefs.current().code;

    let items: Vec<ListItem> = LANGUAGES
        .iter()
        .map(|language| {
            let marker = if language.code == active_code { "●" } else { " " };
            let line = Line::from(vec![
                Span::styled(format!(" {} ", marker), styles::success_style()),
                Span::raw(format!("{} {:<14}", language.flag, language.native_name)),
                Span::styled(format!(" {}", language.name), styles::muted_style()),
            ]);
            ListItem::new(line)
        })
        .collect();

    let block = Block::default()
        .title(format!(" Language ({}) ", LANGUAGES.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items)
        .block(block)
        .highlight_style(styles::selected_style());

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.language_selection));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
