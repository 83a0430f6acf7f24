use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let categories = &state.config.skills;
    if categories.is_empty() {
        return;
    }

    let reveal = state.driver.progress(&state.skills.reveal);

    let constraints: Vec<Constraint> = categories
        .iter()
        .map(|_| Constraint::Ratio(1, categories.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints(constraints)
        .split(area);

    for (category, column) in categories.iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} ", category.category))
            .title_style(Theme::heading())
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(*column);
        frame.render_widget(block, *column);

        let mut lines: Vec<Line> = Vec::new();
        for (idx, skill) in category.items.iter().enumerate() {
            let level = skill.level.min(100);
            // Bars fill one after another, top to bottom.
            let fill = staggered(reveal, idx);
            let shown = (level as f32 * fill).round() as u16;

            let label_width = inner.width.saturating_sub(6) as usize;
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} {:<w$}", skill.icon, skill.name, w = label_width),
                    Theme::text(),
                ),
                Span::styled(format!("{:>3}%", shown), Theme::text_dim()),
            ]));
            lines.push(bar_line(inner.width, level, fill));
            lines.push(Line::default());
        }

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, inner);
    }
}

fn bar_line(width: u16, level: u8, fill: f32) -> Line<'static> {
    let width = width as usize;
    let target = width * level as usize / 100;
    let filled = (target as f32 * fill).round() as usize;
    Line::from(vec![
        Span::styled("█".repeat(filled), Theme::bar_fill()),
        Span::styled("░".repeat(width.saturating_sub(filled)), Theme::bar_track()),
    ])
}

fn staggered(p: f32, idx: usize) -> f32 {
    let delay = 0.12 * idx as f32;
    ((p - delay) / (1.0 - delay).max(0.05)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_reaches_its_level_when_revealed() {
        let line = bar_line(50, 80, 1.0);
        let filled = line.spans[0].content.chars().count();
        assert_eq!(filled, 40);
        let track = line.spans[1].content.chars().count();
        assert_eq!(filled + track, 50);
    }

    #[test]
    fn bar_is_empty_before_reveal() {
        let line = bar_line(50, 80, 0.0);
        assert_eq!(line.spans[0].content.chars().count(), 0);
    }

    #[test]
    fn later_rows_lag_earlier_ones() {
        assert!(staggered(0.5, 0) > staggered(0.5, 2));
        assert_eq!(staggered(1.0, 3), 1.0);
    }
}
