// Endpoints tab: filter bar, endpoint table, and detail panel for the selection.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::catalog::Endpoint;
use crate::state::{GroupFilter, StatusFilter};

use super::widgets::{ACCENT, AMBER, GREEN, SLATE, endpoint_badge, panel, render_empty};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let selection = app.view.visible_selection();
    let detail_height = if selection.is_some() { 6 } else { 0 };
    let [filter_area, table_area, detail_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(detail_height),
    ])
    .areas(area);

    draw_filter_bar(frame, app, filter_area);
    draw_table(frame, app, table_area);
    if let Some(endpoint) = selection {
        draw_detail(frame, endpoint, detail_area);
    }
}

fn option_span(label: &str, active: bool) -> Span<'static> {
    if active {
        Span::styled(
            format!("[{}]", label),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
    }
}

fn draw_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled("g Group: ", Style::default().fg(Color::DarkGray))];
    spans.extend(
        GroupFilter::OPTIONS
            .iter()
            .map(|f| option_span(f.label(), *f == app.view.filter_group())),
    );
    spans.push(Span::styled(
        "   s Status: ",
        Style::default().fg(Color::DarkGray),
    ));
    spans.extend(
        StatusFilter::OPTIONS
            .iter()
            .map(|f| option_span(f.label(), *f == app.view.filter_status())),
    );

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_table(frame: &mut Frame, app: &App, area: Rect) {
    let endpoints: Vec<&Endpoint> = app.view.filtered_endpoints().collect();
    let block = panel("API Endpoints");

    if endpoints.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_empty(frame, inner, "No endpoints match the current filters");
        return;
    }

    let hovered = app.view.hovered_endpoint();
    let selected = app.view.selected_endpoint();

    let rows: Vec<Row> = endpoints
        .iter()
        .map(|e| {
            let marker = if selected == Some(e.id) { "▾ " } else { "  " };
            let style = if hovered == Some(e.id) {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(format!("{}{}", marker, e.name)),
                Cell::from(e.group.label()),
                Cell::from(e.berlin.clone()),
                Cell::from(e.sca.clone()),
                Cell::from(e.entity.code()),
                Cell::from(endpoint_badge(e.status)),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec![
        "Endpoint",
        "Group",
        "Berlin Group Spec",
        "SCA",
        "Entity",
        "Status",
    ])
    .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(32),
            Constraint::Length(6),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Length(6),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

/// Latency under this is shown green, anything slower amber.
const FAST_LATENCY_MS: u32 = 200;

fn latency_color(latency: Option<u32>) -> Color {
    match latency {
        Some(ms) if ms < FAST_LATENCY_MS => GREEN,
        Some(_) => AMBER,
        None => SLATE,
    }
}

fn draw_detail(frame: &mut Frame, endpoint: &Endpoint, area: Rect) {
    let latency = endpoint
        .latency
        .map(|ms| format!("{}ms", ms))
        .unwrap_or_else(|| "N/A".to_string());
    let uptime = endpoint
        .uptime
        .map(|pct| format!("{:.2}%", pct))
        .unwrap_or_else(|| "N/A".to_string());

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));

    let lines = vec![
        Line::from(vec![
            label("Priority  "),
            Span::raw(endpoint.priority.label()),
            label("    Latency  "),
            Span::styled(latency, Style::default().fg(latency_color(endpoint.latency))),
            label("    Uptime  "),
            Span::raw(uptime),
        ]),
        Line::from(vec![label("SCA       "), Span::raw(endpoint.sca.clone())]),
        Line::from(vec![
            label("Mapping   "),
            Span::raw(format!("{} → {}", endpoint.name, endpoint.berlin)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(panel(&endpoint.name))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_color_thresholds() {
        assert_eq!(latency_color(Some(142)), GREEN);
        assert_eq!(latency_color(Some(200)), AMBER);
        assert_eq!(latency_color(Some(320)), AMBER);
        assert_eq!(latency_color(None), SLATE);
    }
}
