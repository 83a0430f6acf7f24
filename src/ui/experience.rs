use crate::app::state::AppState;
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let entries = &state.config.experience;
    let carousel = &state.experience.carousel;
    let Some(entry) = entries.get(carousel.current()) else {
        let empty = Paragraph::new("No experience entries configured.")
            .style(Theme::text_dim())
            .alignment(Alignment::Center);
        frame.render_widget(empty, layout::centered(area, 40, 1));
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(8),    // Slide card
            Constraint::Length(2), // Dots + autoplay state
        ])
        .split(area);

    render_heading(frame, chunks[0]);
    render_card(frame, chunks[1], state, entry);
    render_dots(frame, chunks[2], state);
}

fn render_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(vec![
        Line::from(Span::styled("Professional Experience", Theme::heading())),
        Line::from(Span::styled(
            "My journey in software development",
            Theme::text_dim(),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    entry: &crate::config::model::ExperienceEntry,
) {
    let carousel = &state.experience.carousel;
    let resting = layout::centered(area, area.width.saturating_sub(8).clamp(30, 76), area.height);

    // New slides enter from the side the transition is heading toward.
    let progress = state.driver.progress(&state.experience.slide_anim);
    let entry_offset = resting.width as f32 * carousel.direction() as f32;
    let offset = crate::anim::lerp(entry_offset, 0.0, progress) as i32;
    let card = slide_rect(resting, offset, area);
    if card.width < 10 {
        return;
    }

    render_arrows(frame, area, resting);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .padding(Padding::new(2, 2, 1, 1))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(entry.title.clone(), Theme::title()),
        Span::styled(format!("  {}", entry.duration), Theme::text_dim()),
    ]));
    lines.push(Line::from(Span::styled(
        entry.company.clone(),
        Style::default().fg(Theme::ACCENT_PURPLE),
    )));
    lines.push(Line::default());
    for (idx, item) in entry.description.iter().enumerate() {
        // Bullets fade in one after another once the slide has landed.
        let fade = ((progress - 0.1 * idx as f32) / 0.6).clamp(0.0, 1.0);
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(Theme::ACCENT_INDIGO)),
            Span::styled(item.clone(), Theme::fade_text(fade)),
        ]));
    }
    lines.push(Line::default());
    let mut badge_spans: Vec<Span> = Vec::new();
    for skill in &entry.skills {
        badge_spans.push(Span::styled(format!(" {} ", skill), Theme::badge()));
        badge_spans.push(Span::raw(" "));
    }
    lines.push(Line::from(badge_spans));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_arrows(frame: &mut Frame, area: Rect, card: Rect) {
    let mid = card.y + card.height / 2;
    let buf = frame.buffer_mut();
    if card.x > area.x + 1 {
        if let Some(cell) = buf.cell_mut((card.x - 2, mid)) {
            cell.set_char('❮');
            cell.set_style(Theme::hint_key());
        }
    }
    if card.right() + 1 < area.right() {
        if let Some(cell) = buf.cell_mut((card.right() + 1, mid)) {
            cell.set_char('❯');
            cell.set_style(Theme::hint_key());
        }
    }
}

fn render_dots(frame: &mut Frame, area: Rect, state: &AppState) {
    let carousel = &state.experience.carousel;
    let mut spans: Vec<Span> = Vec::new();
    for idx in 0..carousel.len() {
        let (glyph, style) = if idx == carousel.current() {
            ("●", Style::default().fg(Theme::ACCENT_INDIGO))
        } else {
            ("○", Style::default().fg(Theme::TEXT_MUTED))
        };
        spans.push(Span::styled(glyph, style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("  "));
    if carousel.autoplay_enabled() {
        spans.push(Span::styled("▶ autoplay", Theme::text_dim()));
    } else {
        spans.push(Span::styled("⏸ paused", Style::default().fg(Theme::ACCENT_AMBER)));
    }

    let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(dots, area);
}

/// Shift `card` horizontally by `offset` cells, clipped to `bounds`.
fn slide_rect(card: Rect, offset: i32, bounds: Rect) -> Rect {
    let left = (card.x as i32 + offset).clamp(bounds.x as i32, bounds.right() as i32);
    let right = (card.x as i32 + card.width as i32 + offset)
        .clamp(bounds.x as i32, bounds.right() as i32);
    Rect::new(left as u16, card.y, (right - left).max(0) as u16, card.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_slide_is_unshifted() {
        let bounds = Rect::new(0, 0, 80, 20);
        let card = Rect::new(10, 2, 60, 16);
        assert_eq!(slide_rect(card, 0, bounds), card);
    }

    #[test]
    fn entering_slide_is_clipped_at_the_edge() {
        let bounds = Rect::new(0, 0, 80, 20);
        let card = Rect::new(10, 2, 60, 16);
        let shifted = slide_rect(card, 40, bounds);
        assert_eq!(shifted.x, 50);
        assert_eq!(shifted.right(), 80);
        let shifted = slide_rect(card, -40, bounds);
        assert_eq!(shifted.x, 0);
        assert_eq!(shifted.width, 30);
    }
}
