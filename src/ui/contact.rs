use crate::app::state::{AppState, ContactField, ContactPhase, FieldInput};
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.contact.phase == ContactPhase::Submitted {
        render_submitted(frame, area);
        return;
    }

    let socials = state.config.contact.socials.len() as u16;
    let form = layout::centered(area, 60, (17 + socials).min(area.height));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),           // Prompt
            Constraint::Length(3),           // Name
            Constraint::Length(3),           // Email
            Constraint::Length(3),           // Message
            Constraint::Length(1),           // Error or spinner
            Constraint::Length(2),           // Hints
            Constraint::Length(3 + socials), // Direct contact details
        ])
        .split(form);

    let prompt = Paragraph::new(state.config.contact.prompt.clone())
        .style(Theme::text_dim())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, chunks[0]);

    let editing = state.contact.phase == ContactPhase::Editing;
    render_field(
        frame,
        chunks[1],
        "Name",
        &state.contact.name,
        editing && state.contact.focus == ContactField::Name,
    );
    render_field(
        frame,
        chunks[2],
        "Email",
        &state.contact.email,
        editing && state.contact.focus == ContactField::Email,
    );
    render_field(
        frame,
        chunks[3],
        "Message",
        &state.contact.message,
        editing && state.contact.focus == ContactField::Message,
    );

    render_status_line(frame, chunks[4], state);
    render_hints(frame, chunks[5]);
    render_reach_me(frame, chunks[6], state);
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, field: &FieldInput, focused: bool) {
    let border_style = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .title(format!(" {} ", label))
        .title_style(if focused { Theme::heading() } else { Theme::text_dim() })
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Keep the cursor visible when the text is wider than the field.
    let cursor_col = field.text[..field.cursor].width() as u16;
    let scroll = cursor_col.saturating_sub(inner.width.saturating_sub(1));
    let input = Paragraph::new(field.text.clone())
        .style(Theme::text())
        .scroll((0, scroll));
    frame.render_widget(input, inner);

    if focused {
        frame.set_cursor_position((inner.x + cursor_col - scroll, inner.y));
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = if state.contact.phase == ContactPhase::Sending {
        let glyph = SPINNER[state.tick_count as usize % SPINNER.len()];
        Line::from(vec![
            Span::styled(glyph, Style::default().fg(Theme::ACCENT_INDIGO)),
            Span::styled(" Sending your message...", Theme::text_dim()),
        ])
    } else if let Some(error) = &state.contact.error {
        Line::from(Span::styled(error.clone(), Theme::error()))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(vec![
        Span::styled("↑/↓", Theme::hint_key()),
        Span::styled(" field  ", Theme::hint_text()),
        Span::styled("Enter", Theme::hint_key()),
        Span::styled(" next  ", Theme::hint_text()),
        Span::styled("Ctrl+S", Theme::hint_key()),
        Span::styled(" send", Theme::hint_text()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}

fn render_reach_me(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("✉ ", Style::default().fg(Theme::ACCENT_PURPLE)),
            Span::styled(state.config.contact.email.clone(), Theme::text()),
        ]),
    ];
    for social in &state.config.contact.socials {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", social.label), Theme::text_dim()),
            Span::styled(
                social.url.clone(),
                Style::default()
                    .fg(Theme::ACCENT_INDIGO)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_submitted(frame: &mut Frame, area: Rect) {
    let panel = layout::centered(area, 56, 5);
    let lines = vec![
        Line::from(Span::styled(
            "✓ Thank you! Your message has been sent successfully.",
            Theme::success(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Enter", Theme::hint_key()),
            Span::styled(" to send another message", Theme::hint_text()),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, panel);
}
