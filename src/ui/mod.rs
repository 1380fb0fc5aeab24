// UI module for rendering the TUI.
// Reads a snapshot of the app state and renders header, tabs, content, and status bar.

mod compliance;
mod consent;
mod endpoints;
mod overview;
mod sca;
mod tabs;
mod widgets;

use chrono::Local;
use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::state::summary::days_until;

use widgets::{ACCENT, AMBER};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(2), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    tabs::draw_tabs(frame, app, chunks[1]);
    draw_content(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);
}

/// Draw the main content area based on active tab.
fn draw_content(frame: &mut Frame, app: &App, area: Rect) {
    match app.view.active_tab() {
        Tab::Overview => overview::draw(frame, app, area),
        Tab::Endpoints => endpoints::draw(frame, app, area),
        Tab::Consent => consent::draw(frame, app, area),
        Tab::Sca => sca::draw(frame, app, area),
        Tab::Compliance => compliance::draw(frame, app, area),
    }
}

fn go_live_label(app: &App) -> String {
    let go_live = app.view.catalog().go_live;
    let days = days_until(go_live, Local::now().date_naive());
    let countdown = match days {
        d if d > 0 => format!("{} days to go", d),
        0 => "today".to_string(),
        _ => "live".to_string(),
    };
    format!(
        "Go-Live: {} ({}) · {}",
        go_live.format("%B %Y"),
        countdown,
        app.view.catalog().standard
    )
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let [title_area, meta_area] =
        Layout::horizontal([Constraint::Min(30), Constraint::Length(60)]).areas(area);

    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                "Open Banking",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" PSD2 Compliance", Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            "Berlin Group NextGenPSD2 · AIS · PIS · PIIS",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(title, title_area);

    let meta = Paragraph::new(go_live_label(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(meta, meta_area);
}

/// Draw the status bar with keybinding hints for the active tab.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hint = |key: &'static str, action: &'static str| {
        [
            Span::raw(key),
            Span::styled(action, Style::default().fg(Color::DarkGray)),
        ]
    };

    let mut spans: Vec<Span> = Vec::new();
    spans.extend(hint(" Tab/1-5 ", "Switch"));
    match app.view.active_tab() {
        Tab::Endpoints => {
            spans.extend(hint("  ↑↓ ", "Move"));
            spans.extend(hint("  ↵ ", "Details"));
            spans.extend(hint("  g/s ", "Filter"));
            spans.extend(hint("  Esc ", "Clear"));
        }
        Tab::Consent => {
            spans.extend(hint("  p ", "Play"));
            spans.extend(hint("  ←→ ", "Step"));
        }
        Tab::Overview | Tab::Sca | Tab::Compliance => {}
    }
    spans.extend(hint("  q ", "Quit"));

    if app.view.is_playing() {
        spans.push(Span::styled("  ▶ simulating", Style::default().fg(AMBER)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app_on(tab: Tab) -> App {
        let config = Config {
            initial_tab: tab,
            ..Config::default()
        };
        App::new(Arc::new(sample_catalog()), &config)
    }

    #[test]
    fn test_every_tab_renders() {
        for tab in Tab::ALL {
            let screen = render(&app_on(tab));
            assert!(screen.contains("Open Banking"), "{tab}");
            assert!(screen.contains(tab.title()), "{tab}");
        }
    }

    #[test]
    fn test_endpoints_tab_shows_filtered_rows_and_detail() {
        let mut app = app_on(Tab::Endpoints);
        app.view.set_filter_group("PIS".parse().unwrap());
        app.view.select_endpoint(7);

        let screen = render(&app);
        assert!(screen.contains("DELETE /payments/{paymentId}"));
        assert!(screen.contains("POST /signing-baskets"));
        assert!(!screen.contains("GET /accounts"));
        assert!(screen.contains("Priority"));
    }

    #[test]
    fn test_consent_tab_shows_current_stage() {
        let mut app = app_on(Tab::Consent);
        app.view.jump_to_consent_stage(2);

        let screen = render(&app);
        assert!(screen.contains("Stage 3/6"));
        assert!(screen.contains("Simulate Flow"));
        assert!(screen.contains("Device Binding"));
    }

    #[test]
    fn test_consent_tab_shows_stage_facts() {
        let app = app_on(Tab::Consent);
        let screen = render(&app);
        assert!(screen.contains("POST /consents"));
        assert!(screen.contains("Response: 201 Created"));
        assert!(!screen.contains("Auto-Expiry"));
    }

    #[test]
    fn test_filtered_out_selection_hides_detail() {
        let mut app = app_on(Tab::Endpoints);
        app.view.select_endpoint(7);
        assert!(render(&app).contains("Priority"));

        app.view.set_filter_group("AIS".parse().unwrap());
        let screen = render(&app);
        assert!(!screen.contains("Payment Cancellation"));
        assert!(!screen.contains("Priority"));
    }

    #[test]
    fn test_compliance_sections_show_done_counts() {
        let screen = render(&app_on(Tab::Compliance));
        assert!(screen.contains("Consent Management  5/5  100%"));
        assert!(screen.contains("Regulatory & Operational  4/5  80%"));
    }
}
