// Overview tab: headline figures, status breakdown, group progress, and roadmap.

use std::time::Instant;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::catalog::{ApiGroup, EndpointStatus};
use crate::state::CountUp;
use crate::state::summary::{self, LATENCY_SLA_MS, UPTIME_TARGET};

use super::widgets::{ACCENT, AMBER, GREEN, checklist_color, endpoint_status_color, panel};

struct Metric {
    label: &'static str,
    value: String,
    sub: String,
    ratio: f64,
    color: Color,
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let [metrics_area, middle_area, roadmap_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Min(4),
    ])
    .areas(area);

    draw_metrics(frame, app, metrics_area);

    let [status_area, groups_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(middle_area);
    draw_status_breakdown(frame, app, status_area);
    draw_group_progress(frame, app, groups_area);
    draw_roadmap(frame, app, roadmap_area);
}

fn metrics(app: &App, now: Instant) -> Vec<Metric> {
    let view = &app.view;
    let endpoints = &view.catalog().endpoints;
    let counting = |end: f64| CountUp::new(end, app.overview_since).value_at(now);

    let compliance = view.compliance_percent();
    let checklist = view.checklist_progress();
    let latency = summary::average_latency_ms(endpoints).unwrap_or(0.0);
    let uptime = summary::average_uptime(endpoints).unwrap_or(0.0);

    vec![
        Metric {
            label: "API Compliance",
            value: format!("{:.0}%", counting(f64::from(compliance))),
            sub: format!(
                "{}/{} endpoints",
                view.status_counts().compliant,
                view.total_endpoints()
            ),
            ratio: f64::from(compliance) / 100.0,
            color: GREEN,
        },
        Metric {
            label: "Regulatory Readiness",
            value: format!("{:.0}%", counting(f64::from(checklist.percent()))),
            sub: format!("{}/{} checks passed", checklist.done, checklist.total),
            ratio: f64::from(checklist.percent()) / 100.0,
            color: ACCENT,
        },
        Metric {
            label: "Avg Latency",
            value: format!("{:.0}ms", counting(latency)),
            sub: format!("Berlin Group SLA: <{}ms", LATENCY_SLA_MS),
            ratio: latency / f64::from(LATENCY_SLA_MS),
            color: AMBER,
        },
        Metric {
            label: "Platform Uptime",
            value: format!("{:.2}%", counting(uptime)),
            sub: format!("Target: {:.2}%", UPTIME_TARGET),
            ratio: uptime / 100.0,
            color: GREEN,
        },
    ]
}

fn draw_metrics(frame: &mut Frame, app: &App, area: Rect) {
    let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);

    for (metric, card) in metrics(app, Instant::now()).into_iter().zip(cards.iter()) {
        let block = panel(metric.label);
        let inner = block.inner(*card);
        frame.render_widget(block, *card);

        let [text_area, gauge_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Length(1)]).areas(inner);

        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                metric.value,
                Style::default()
                    .fg(metric.color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(metric.sub, Style::default().fg(Color::DarkGray))),
        ]);
        frame.render_widget(text, text_area);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(metric.color).bg(Color::Black))
            .ratio(metric.ratio.clamp(0.0, 1.0))
            .label("");
        frame.render_widget(gauge, gauge_area);
    }
}

fn draw_status_breakdown(frame: &mut Frame, app: &App, area: Rect) {
    let counts = app.view.status_counts();
    let total = counts.total();

    let lines: Vec<Line> = EndpointStatus::ALL
        .iter()
        .map(|status| {
            let count = counts.get(*status);
            let bar_width = if total == 0 { 0 } else { count * 20 / total };
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", status.label()),
                    Style::default().fg(endpoint_status_color(*status)),
                ),
                Span::styled(
                    format!("{:>3} ", count),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "█".repeat(bar_width),
                    Style::default().fg(endpoint_status_color(*status)),
                ),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(panel("Endpoint Status"));
    frame.render_widget(paragraph, area);
}

fn draw_group_progress(frame: &mut Frame, app: &App, area: Rect) {
    let block = panel("Compliance by Service");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1); 3]).split(inner);
    for (group, row) in ApiGroup::ALL.iter().zip(rows.iter()) {
        let ratio = app.view.group_ratio(*group);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(GREEN).bg(Color::Black))
            .percent(ratio.percent().min(100) as u16)
            .label(format!(
                "{:<5} {}/{}",
                group.label(),
                ratio.compliant,
                ratio.total
            ));
        frame.render_widget(gauge, *row);
    }
}

fn draw_roadmap(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .view
        .catalog()
        .roadmap
        .iter()
        .map(|phase| {
            let color = checklist_color(phase.status);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(color)),
                    Span::styled(
                        phase.phase.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", phase.period),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", phase.scope),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(panel("Go-Live Roadmap"));
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::config::Config;
    use crate::state::counter::COUNT_UP_DURATION;
    use std::sync::Arc;

    #[test]
    fn test_metrics_settle_on_aggregates() {
        let app = App::new(Arc::new(sample_catalog()), &Config::default());
        let settled = app.overview_since + COUNT_UP_DURATION;

        let metrics = metrics(&app, settled);
        assert_eq!(metrics[0].value, "69%");
        assert_eq!(metrics[0].sub, "9/13 endpoints");
        assert_eq!(metrics[1].value, "80%");
        assert_eq!(metrics[1].sub, "16/20 checks passed");
        assert_eq!(metrics[2].value, "144ms");
        assert_eq!(metrics[3].value, "99.97%");
    }

    #[test]
    fn test_metrics_start_from_zero() {
        let app = App::new(Arc::new(sample_catalog()), &Config::default());
        let metrics = metrics(&app, app.overview_since);
        assert_eq!(metrics[0].value, "0%");
    }
}
