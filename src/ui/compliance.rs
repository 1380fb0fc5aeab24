// Compliance matrix tab: checklist legend and per-area requirement lists.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::catalog::{ChecklistStatus, ComplianceSection};
use crate::state::summary::round_percent;

use super::widgets::{checklist_badge, checklist_color, panel};

fn count(sections: &[ComplianceSection], status: ChecklistStatus) -> usize {
    sections
        .iter()
        .flat_map(|s| s.items.iter())
        .filter(|item| item.status == status)
        .count()
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let sections = &app.view.catalog().compliance;
    let progress = app.view.checklist_progress();

    let [legend_area, grid_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(4)]).areas(area);

    let legend = [
        ("Complete", ChecklistStatus::Done),
        ("In Progress", ChecklistStatus::InProgress),
        ("Planned", ChecklistStatus::Planned),
    ];
    let mut spans = vec![Span::styled(
        format!(" {}% ready   ", progress.percent()),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for (label, status) in legend {
        spans.push(Span::styled("● ", Style::default().fg(checklist_color(status))));
        spans.push(Span::raw(format!("{} {}   ", label, count(sections, status))));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), legend_area);

    // Two columns of sections
    let rows = sections.len().div_ceil(2).max(1);
    let row_areas =
        Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(grid_area);

    for (i, section) in sections.iter().enumerate() {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(row_areas[i / 2]);
        let cell = if i % 2 == 0 { left } else { right };
        draw_section(frame, section, cell);
    }
}

fn draw_section(frame: &mut Frame, section: &ComplianceSection, area: Rect) {
    let done = section
        .items
        .iter()
        .filter(|item| item.status == ChecklistStatus::Done)
        .count();
    let total = section.items.len();
    let title = format!(
        "{}  {}/{}  {}%",
        section.area,
        done,
        total,
        round_percent(done, total)
    );

    let items: Vec<ListItem> = section
        .items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                checklist_badge(item.status),
                Span::raw(" "),
                Span::raw(item.req.clone()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(panel(&title)), area);
}
