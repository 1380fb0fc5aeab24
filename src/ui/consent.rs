// Consent lifecycle tab: stage nodes, current stage detail, and playback controls.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::catalog::ConsentStage;
use crate::state::ConsentPlayback;

use super::widgets::{ACCENT, AMBER, GREEN, hex_color, panel};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let [controls_area, nodes_area, detail_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Min(3),
    ])
    .areas(area);

    draw_controls(frame, app, controls_area);
    draw_nodes(frame, app, nodes_area);
    if let Some(stage) = app.view.current_stage() {
        draw_detail(frame, app, stage, detail_area);
    }
}

fn draw_controls(frame: &mut Frame, app: &App, area: Rect) {
    let button = if app.view.is_playing() {
        Span::styled(
            "⏸ Playing...",
            Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "▶ Simulate Flow",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    };

    let line = Line::from(vec![
        Span::styled(" p ", Style::default().fg(Color::DarkGray)),
        button,
        Span::styled(
            "   ←/→ step   Home/End first/last",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Marker and border for stage `i`: current, completed, or pending.
fn node_marker(playback: ConsentPlayback, i: usize) -> (&'static str, Style) {
    if i == playback.index() {
        ("●", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
    } else if playback.is_completed(i) {
        ("✓", Style::default().fg(GREEN))
    } else {
        (" ", Style::default().fg(Color::DarkGray))
    }
}

fn draw_nodes(frame: &mut Frame, app: &App, area: Rect) {
    let stages = &app.view.catalog().consent_stages;
    let playback = app.view.consent();
    let columns = Layout::horizontal(vec![
        Constraint::Ratio(1, stages.len().max(1) as u32);
        stages.len()
    ])
    .split(area);

    for (i, (stage, column)) in stages.iter().zip(columns.iter()).enumerate() {
        let (marker, border) = node_marker(playback, i);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", marker));

        let text = Paragraph::new(vec![
            Line::from(stage.icon.clone()),
            Line::from(Span::styled(
                stage.label.clone(),
                Style::default().fg(hex_color(&stage.color)),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

        frame.render_widget(text, *column);
    }
}

fn draw_detail(frame: &mut Frame, app: &App, stage: &ConsentStage, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(
                    "Stage {}/{}  ",
                    app.view.consent_stage_index() + 1,
                    app.view.consent().stage_count()
                ),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                format!("{} {}", stage.icon, stage.label),
                Style::default()
                    .fg(hex_color(&stage.color))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(stage.desc.clone()),
    ];

    for fact in &stage.facts {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            fact.title.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", fact.detail),
            Style::default().fg(Color::Gray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel("Current Stage"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_markers() {
        let mut playback = ConsentPlayback::new(6);
        playback.jump(2);

        assert_eq!(node_marker(playback, 1).0, "✓");
        assert_eq!(node_marker(playback, 2).0, "●");
        assert_eq!(node_marker(playback, 3).0, " ");
    }
}
