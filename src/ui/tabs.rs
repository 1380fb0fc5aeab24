// Tab bar rendering.
// Highlights the active tab and marks the consent tab while playback runs.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};

use super::widgets::{ACCENT, AMBER};

/// Draw the tab bar under the header.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.view.active_tab();

    let tab_titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let mut title = format!("{} {} {}", i + 1, tab.icon(), tab.title());
            if *tab == Tab::Consent && app.view.is_playing() {
                title.push_str(" ▶");
            }

            let style = if *tab == active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else if *tab == Tab::Consent && app.view.is_playing() {
                Style::default().fg(AMBER)
            } else {
                Style::default().fg(Color::Gray)
            };

            Line::from(Span::styled(title, style))
        })
        .collect();

    let tabs_widget = Tabs::new(tab_titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(active.index())
        .highlight_style(Style::default().fg(ACCENT))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
