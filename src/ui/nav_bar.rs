use crate::app::state::{AppState, Section};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Tabs};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(format!(" {} ", state.config.profile.name))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Theme::hint_key()),
                Span::styled(section.title(), Theme::text_dim()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(block)
        .select(state.section.index())
        .highlight_style(
            Style::default()
                .fg(Theme::ACCENT_INDIGO)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Theme::border()));

    frame.render_widget(tabs, area);
}
