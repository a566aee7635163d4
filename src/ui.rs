//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  Rendering only reads view models;
//! it never starts loads.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use livescroll_feed::presentation::FeedImageViewModel;

use crate::app::App;
use crate::cell::ImagePreview;

/// Draw the complete UI for one frame.
pub fn draw(app: &mut App, frame: &mut Frame) {
    let [main_area, detail_area, status_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_feed_list(app, frame, main_area);
    draw_detail(app, frame, detail_area);
    draw_status_bar(app, frame, status_area);
}

/// Short marker for the image column of a row.
fn image_marker(view_model: &FeedImageViewModel<ImagePreview>) -> (&'static str, Color) {
    match view_model {
        FeedImageViewModel { is_loading: true, .. } => ("…", Color::Yellow),
        FeedImageViewModel { image: Some(_), .. } => ("■", Color::Green),
        FeedImageViewModel { should_retry: true, .. } => ("↻", Color::Red),
        _ => ("·", Color::DarkGray),
    }
}

fn draw_feed_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .cells
        .iter()
        .map(|cell| {
            let view_model = cell.view_model();
            let (marker, colour) = image_marker(&view_model);

            let mut spans = vec![
                Span::styled(format!("{marker} "), Style::default().fg(colour)),
                Span::styled(
                    view_model
                        .description
                        .clone()
                        .unwrap_or_else(|| "(no description)".into()),
                    Style::default().fg(Color::White),
                ),
            ];
            if let Some(location) = &view_model.location {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!("[{location}]"),
                    Style::default().fg(Color::Cyan),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(format!(" {} ", app.title()))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the selected image's state.
fn draw_detail(app: &App, frame: &mut Frame, area: Rect) {
    let text = match app
        .list_state
        .selected()
        .and_then(|row| app.cells.get(row))
        .map(|cell| cell.view_model())
    {
        None => "Nothing selected".to_string(),
        Some(FeedImageViewModel { is_loading: true, .. }) => "Loading image…".into(),
        Some(FeedImageViewModel {
            image: Some(preview),
            ..
        }) => format!("{}×{} {:?}", preview.width, preview.height, preview.format),
        Some(FeedImageViewModel {
            should_retry: true, ..
        }) => "Image failed to load, press R to retry".into(),
        Some(_) => "Image not loaded".into(),
    };

    let detail = Paragraph::new(text).block(Block::default().title(" Image ").borders(Borders::ALL));
    frame.render_widget(detail, area);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let colour = if app.error_message.is_some() {
        Color::Red
    } else {
        Color::Yellow
    };
    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(app.status(), Style::default().fg(colour)),
        Span::raw("  q: quit  ↑/↓: scroll  r: refresh  R: retry image"),
    ]));
    frame.render_widget(status, area);
}
