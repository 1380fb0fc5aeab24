// SCA flows tab: supported methods and the authentication factor rules.

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::catalog::ScaFlow;

use super::widgets::{GREEN, hex_color, panel, strength_color};

const FACTORS: [(&str, &str, &str); 3] = [
    ("Knowledge", "Password, PIN, security question", "#818CF8"),
    ("Possession", "Mobile device, hardware token, smart card", "#34D399"),
    ("Inherence", "Fingerprint, facial recognition, voice", "#FBBF24"),
];

const FACTOR_RULE: &str = "SCA must use at least 2 of the 3 factors. The authentication code \
    must be dynamically linked to the payment amount and payee for payment initiation. \
    Exemptions apply for trusted beneficiaries, low-value transactions (<€30, cumulative \
    <€100), and recurring payments of the same amount to the same payee.";

fn flow_label(flow: ScaFlow) -> &'static str {
    match flow {
        ScaFlow::Redirect => "redirect",
        ScaFlow::Decoupled => "decoupled",
        ScaFlow::Embedded => "embedded",
    }
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let methods = &app.view.catalog().sca_methods;
    let [methods_area, factors_area] =
        Layout::vertical([Constraint::Length(6), Constraint::Min(6)]).areas(area);

    let cards = Layout::horizontal(vec![
        Constraint::Ratio(1, methods.len().max(1) as u32);
        methods.len()
    ])
    .split(methods_area);

    for (method, card) in methods.iter().zip(cards.iter()) {
        let mut header = vec![Span::styled(
            format!("{:?}", method.strength),
            Style::default().fg(strength_color(method.strength)),
        )];
        header.push(Span::styled(
            format!("  flow: {}", flow_label(method.flow)),
            Style::default().fg(Color::DarkGray),
        ));
        if method.recommended {
            header.push(Span::styled("  ★ Recommended", Style::default().fg(GREEN)));
        }

        let paragraph = Paragraph::new(vec![Line::from(header), Line::from(method.desc.clone())])
            .wrap(Wrap { trim: true })
            .block(panel(&method.method));
        frame.render_widget(paragraph, *card);
    }

    let mut lines: Vec<Line> = FACTORS
        .iter()
        .map(|(factor, examples, color)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", factor),
                    Style::default()
                        .fg(hex_color(color))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(*examples),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        FACTOR_RULE,
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel("Authentication Factors"));
    frame.render_widget(paragraph, factors_area);
}
