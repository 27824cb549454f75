use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use walkwise_core::assistant::{Attachment, QuickAction, Sender};

use crate::app::{App, AppState, Focus};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
        .split(area);

    let chat = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(chunks[0]);

    render_transcript(frame, app, chat[0]);
    render_input(frame, app, chat[1]);
    render_quick_actions(frame, app, chunks[1]);
}

fn render_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let wrap_width = (area.width as usize).saturating_sub(4).max(16);
    let mut lines: Vec<Line> = Vec::new();

    for message in app.chat.messages() {
        let (label, label_style) = match message.sender {
            Sender::User => ("You", styles::highlight_style()),
            Sender::Assistant => ("Assistant", styles::title_style()),
        };
        let stamp = message.sent_at.with_timezone(&Local).format("%H:%M");
        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(format!(" \u{00b7} {}", stamp), styles::muted_style()),
        ]));

        for text_line in wrap_text(&message.text, wrap_width) {
            lines.push(Line::from(format!("  {}", text_line)));
        }

        if let Some(ref attachment) = message.attachment {
            push_attachment_lines(&mut lines, attachment);
        }

        lines.push(Line::from(""));
    }

    if app.assistant_typing {
        lines.push(Line::from(Span::styled(
            "Assistant is typing...",
            styles::muted_style(),
        )));
    }

    // Keep the newest messages in view
    let inner_height = area.height.saturating_sub(2) as usize;
    if lines.len() > inner_height {
        lines = lines.split_off(lines.len() - inner_height);
    }

    let block = Block::default()
        .title(" Safety Assistant ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(matches!(app.focus, Focus::List)));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn push_attachment_lines(lines: &mut Vec<Line>, attachment: &Attachment) {
    match attachment {
        Attachment::RoutePreview(preview) => {
            lines.push(Line::from(vec![
                Span::styled("  \u{21b3} Route preview: ", styles::muted_style()),
                Span::styled(
                    format!("safety {}/100", preview.safety_score),
                    styles::score_style(preview.safety_score),
                ),
                Span::styled(
                    format!(" \u{00b7} {} \u{00b7} {}", preview.duration, preview.distance),
                    styles::help_desc_style(),
                ),
            ]));
        }
        Attachment::AtmSuggestions(atms) => {
            lines.push(Line::from(Span::styled(
                "  \u{21b3} Nearby ATMs:",
                styles::muted_style(),
            )));
            for atm in atms {
                lines.push(Line::from(format!(
                    "     \u{2022} {} - {} - {} safety",
                    atm.name, atm.distance, atm.safety
                )));
            }
        }
        Attachment::AreaAlert(alert) => {
            lines.push(Line::from(vec![
                Span::styled("  \u{21b3} ", styles::muted_style()),
                Span::styled(
                    format!("{} risk", alert.level),
                    styles::risk_style(alert.level),
                ),
                Span::styled(
                    format!(" \u{00b7} {} incidents this week", alert.incidents),
                    styles::help_desc_style(),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("     {}", alert.recommendation),
                styles::muted_style(),
            )));
        }
    }
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let composing = matches!(app.state, AppState::Composing);

    let line = if composing {
        Line::from(vec![
            Span::styled("> ", styles::highlight_style()),
            Span::raw(app.chat_input.clone()),
            Span::styled("▌", styles::highlight_style()),
        ])
    } else if app.chat_input.is_empty() {
        Line::from(Span::styled(
            "Press [i] to type a message, Tab for quick actions",
            styles::muted_style(),
        ))
    } else {
        Line::from(vec![
            Span::styled("> ", styles::muted_style()),
            Span::raw(app.chat_input.clone()),
        ])
    };

    let block = Block::default()
        .title(" Message ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(composing));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_quick_actions(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(app.focus, Focus::Detail);

    let items: Vec<ListItem> = QuickAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let style = if focused && i == app.quick_action_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };
            ListItem::new(Line::from(format!(" {}", action.label()))).style(style)
        })
        .collect();

    let block = Block::default()
        .title(" Quick Actions ")
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.quick_action_selection));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Greedy word wrap for transcript text
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
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_splits_long_text_at_word_boundaries() {
        let wrapped = wrap_text("one two three four five", 9);
        assert_eq!(wrapped, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        assert_eq!(wrap_text("hello", 40), vec!["hello"]);
        assert_eq!(wrap_text("", 40), vec![""]);
    }
}
