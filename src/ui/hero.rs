use crate::app::state::AppState;
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    render_particles(frame, area, state);

    let p = state.driver.progress(&state.section_anim);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        state.config.profile.name.clone(),
        Theme::fade_text(stagger(p, 0.2)).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        state.config.profile.title.clone(),
        Style::default()
            .fg(Theme::ACCENT_PURPLE)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        state.config.profile.summary.clone(),
        Theme::fade_text(stagger(p, 0.4)),
    )));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Resume: ", Theme::fade_text(stagger(p, 0.6))),
        Span::styled(
            state.config.profile.resume_url.clone(),
            Style::default()
                .fg(Theme::ACCENT_INDIGO)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Tab", Theme::hint_key()),
        Span::styled(" / ", Theme::hint_text()),
        Span::styled("1-5", Theme::hint_key()),
        Span::styled(" to explore ↓", Theme::hint_text()),
    ]));

    // Summary may wrap; leave a couple of rows of slack.
    let height = (lines.len() as u16).saturating_add(2);
    let text_area = layout::centered(area, 64, height);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, text_area);
}

/// Drifting dots behind the banner, falling slowly and wrapping around.
fn render_particles(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let elapsed = state.elapsed_secs();
    let buf = frame.buffer_mut();
    for particle in &state.particles {
        let y_frac = (particle.y + elapsed * particle.speed).fract();
        let x = area.x + (particle.x * area.width as f32) as u16 % area.width;
        let y = area.y + (y_frac * area.height as f32) as u16 % area.height;
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(particle.glyph);
            cell.set_style(Style::default().fg(Theme::TEXT_MUTED));
        }
    }
}

/// Remap overall progress so an element starts its fade at `from`.
fn stagger(p: f32, from: f32) -> f32 {
    ((p - from) / (1.0 - from)).clamp(0.0, 1.0)
}
