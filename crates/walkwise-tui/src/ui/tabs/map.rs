use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, Focus};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    render_route_list(frame, app, chunks[0]);
    render_map_detail(frame, app, chunks[1]);
}

fn render_route_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .routes
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let line = Line::from(vec![
                Span::raw(format!("{:<16}", route.name)),
                Span::styled(
                    format!("{:>8}  {:>10}  ", route.formatted_duration(), route.formatted_distance()),
                    styles::muted_style(),
                ),
                Span::styled(
                    format!("{:>3}", route.safety_score),
                    styles::score_style(route.safety_score),
                ),
            ]);

            let style = if i == app.route_selection {
                styles::selected_style()
            } else {
                styles::list_item_style()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let focused = matches!(app.focus, Focus::List);
    let block = Block::default()
        .title(format!(" Routes ({}) ", app.routes.len()))
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(app.route_selection));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_map_detail(frame: &mut Frame, app: &App, area: Rect) {
    let focused = matches!(app.focus, Focus::Detail);

    let (title, content) = match app.selected_route() {
        Some(route) => {
            let title = format!(" {} ", route.name);

            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Kind:      ", styles::muted_style()),
                    Span::raw(route.kind.to_string()),
                ]),
                Line::from(vec![
                    Span::styled("Duration:  ", styles::muted_style()),
                    Span::raw(route.formatted_duration()),
                ]),
                Line::from(vec![
                    Span::styled("Distance:  ", styles::muted_style()),
                    Span::raw(route.formatted_distance()),
                ]),
                Line::from(vec![
                    Span::styled("Safety:    ", styles::muted_style()),
                    Span::styled(
                        format!("{}/100", route.safety_score),
                        styles::score_style(route.safety_score),
                    ),
                ]),
                Line::from(Span::styled("Waypoints:", styles::muted_style())),
            ];

            for (i, point) in route.path.iter().enumerate() {
                lines.push(Line::from(format!("  {}. {}", i + 1, point)));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("CCTV Cameras ({})", app.cameras.len()),
                styles::title_style(),
            )));
            for camera in &app.cameras {
                lines.push(Line::from(vec![
                    Span::styled("  \u{25cf} ", styles::camera_style(camera.status)),
                    Span::raw(format!("{:<24}", camera.name)),
                    Span::styled(camera.status.to_string(), styles::muted_style()),
                ]));
            }

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Crime Zones ({})", app.crime_zones.len()),
                styles::title_style(),
            )));
            for zone in &app.crime_zones {
                lines.push(Line::from(vec![
                    Span::styled("  \u{25cf} ", styles::risk_style(zone.level)),
                    Span::styled(format!("{:<7}", zone.level.to_string()), styles::risk_style(zone.level)),
                    Span::raw(format!("{} ({}m radius)", zone.description, zone.radius_meters)),
                ]));
            }

            (title, lines)
        }
        None => (
            " No Route Selected ".to_string(),
            vec![Line::from(Span::styled(
                "Select a route from the list",
                styles::muted_style(),
            ))],
        ),
    };

    let block = Block::default()
        .title(title)
        .title_style(styles::title_style())
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));

    let paragraph = Paragraph::new(content).block(block);
    frame.render_widget(paragraph, area);
}
