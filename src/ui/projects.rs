use crate::app::state::AppState;
use crate::ui::{layout, theme::Theme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let projects = &state.config.projects;
    if projects.is_empty() {
        let empty = Paragraph::new("No projects configured.")
            .style(Theme::text_dim())
            .alignment(Alignment::Center);
        frame.render_widget(empty, layout::centered(area, 40, 1));
        return;
    }

    let constraints: Vec<Constraint> = projects
        .iter()
        .map(|_| Constraint::Ratio(1, projects.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints(constraints)
        .split(area);

    for (idx, (project, column)) in projects.iter().zip(columns.iter()).enumerate() {
        let selected = idx == state.projects.selected;
        let (border_style, title_style) = if selected {
            (Theme::border_focused(), Theme::heading())
        } else {
            (Theme::border(), Theme::title())
        };

        let block = Block::default()
            .title(format!(" {} ", project.title))
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(*column);
        frame.render_widget(block, *column);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            project.description.clone(),
            Theme::text(),
        )));
        lines.push(Line::default());
        lines.push(badges(&project.technologies));
        if selected {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Enter", Theme::hint_key()),
                Span::styled(" View details", Theme::hint_text()),
            ]));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }
}

/// Centered detail popup for the selected project, over dimmed content.
pub fn render_modal(frame: &mut Frame, state: &AppState) {
    let Some(project) = state.config.projects.get(state.projects.selected) else {
        return;
    };

    let area = frame.area();
    let popup = layout::centered(
        area,
        (area.width * 2 / 3).clamp(40, 72),
        (area.height * 2 / 3).clamp(10, 18),
    );
    frame.render_widget(Clear, popup);

    // Border brightens as the modal finishes opening.
    let opening = state.driver.progress(&state.projects.modal_anim);
    let border_style = if opening < 1.0 {
        Theme::border()
    } else {
        Theme::border_focused()
    };

    let block = Block::default()
        .title(format!(" {} ", project.title))
        .title_style(Theme::heading())
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(2, 2, 1, 1))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        project.long_description.clone(),
        Theme::text(),
    )));
    lines.push(Line::default());
    lines.push(badges(&project.technologies));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Esc", Theme::hint_key()),
        Span::styled(" Close", Theme::hint_text()),
    ]));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn badges(technologies: &[String]) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();
    for tech in technologies {
        spans.push(Span::styled(format!(" {} ", tech), Theme::badge()));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
