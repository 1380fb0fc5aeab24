// Shared styling helpers for the dashboard views.
// Status badges, palette lookups, and empty-state rendering.

use ratatui::{prelude::*, widgets::*};

use crate::catalog::{ChecklistStatus, EndpointStatus, ScaStrength};

pub const ACCENT: Color = Color::Rgb(165, 180, 252);
pub const GREEN: Color = Color::Rgb(52, 211, 153);
pub const AMBER: Color = Color::Rgb(251, 191, 36);
pub const SLATE: Color = Color::Rgb(148, 163, 184);

/// Parse `#RRGGBB`; anything else falls back to white.
pub fn hex_color(hex: &str) -> Color {
    let parse = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.strip_prefix('#') {
        Some(rgb) if rgb.len() == 6 && rgb.is_ascii() => {
            match (parse(&rgb[0..2]), parse(&rgb[2..4]), parse(&rgb[4..6])) {
                (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
                _ => Color::White,
            }
        }
        _ => Color::White,
    }
}

pub fn endpoint_status_color(status: EndpointStatus) -> Color {
    match status {
        EndpointStatus::Compliant => GREEN,
        EndpointStatus::InProgress => AMBER,
        EndpointStatus::Planned => SLATE,
    }
}

pub fn checklist_color(status: ChecklistStatus) -> Color {
    match status {
        ChecklistStatus::Done => GREEN,
        ChecklistStatus::InProgress => AMBER,
        ChecklistStatus::Planned => SLATE,
    }
}

pub fn strength_color(strength: ScaStrength) -> Color {
    match strength {
        ScaStrength::High => GREEN,
        ScaStrength::Medium => AMBER,
    }
}

/// Bracketed status label, e.g. `[Compliant]`.
pub fn endpoint_badge(status: EndpointStatus) -> Span<'static> {
    Span::styled(
        format!("[{}]", status.label()),
        Style::default()
            .fg(endpoint_status_color(status))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn checklist_badge(status: ChecklistStatus) -> Span<'static> {
    let label = match status {
        ChecklistStatus::Done => "✓",
        ChecklistStatus::InProgress => "In Progress",
        ChecklistStatus::Planned => "Planned",
    };
    Span::styled(
        format!("[{}]", label),
        Style::default()
            .fg(checklist_color(status))
            .add_modifier(Modifier::BOLD),
    )
}

/// Titled panel block used across tabs.
pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#34D399"), Color::Rgb(0x34, 0xD3, 0x99));
        assert_eq!(hex_color("34D399"), Color::White);
        assert_eq!(hex_color("#zzzzzz"), Color::White);
        assert_eq!(hex_color("#fff"), Color::White);
    }

    #[test]
    fn test_badges() {
        assert_eq!(
            endpoint_badge(EndpointStatus::InProgress).content,
            "[In Progress]"
        );
        assert_eq!(checklist_badge(ChecklistStatus::Done).content, "[✓]");
    }
}
