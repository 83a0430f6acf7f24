use crate::app::state::{AppState, ContactPhase, Section};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut left: Vec<Span> = vec![
        Span::styled(format!(" {} ", state.section.title()), Theme::heading()),
        Span::raw(" "),
    ];
    if let Some(message) = &state.status_message {
        left.push(Span::styled(message.clone(), Theme::text_dim()));
    } else {
        left.extend(section_hints(state));
    }

    let clock = chrono::Local::now()
        .format(&state.config.ui.timestamp_format)
        .to_string();
    let mut right = String::new();
    if state.section == Section::Experience {
        right.push_str(if state.experience.carousel.autoplay_enabled() {
            "▶ "
        } else {
            "⏸ "
        });
    }
    right.push_str(&clock);
    right.push(' ');

    let used: usize = left.iter().map(|s| s.content.width()).sum::<usize>() + right.width();
    let pad = (area.width as usize).saturating_sub(used);
    left.push(Span::raw(" ".repeat(pad)));
    left.push(Span::styled(right, Theme::text_dim()));

    let bar = Paragraph::new(Line::from(left)).style(Theme::status_bar());
    frame.render_widget(bar, area);
}

fn section_hints(state: &AppState) -> Vec<Span<'static>> {
    let pairs: &[(&str, &str)] = match state.section {
        Section::Hero => &[("Tab", "next"), ("1-5", "jump"), ("q", "quit")],
        Section::Skills => &[("Tab", "next"), ("q", "quit")],
        Section::Projects => {
            if state.projects.modal_open {
                &[("Esc", "close")]
            } else {
                &[("←/→", "select"), ("Enter", "details"), ("q", "quit")]
            }
        }
        Section::Experience => &[("←/→", "slide"), ("Space", "autoplay"), ("drag", "swipe")],
        Section::Contact => {
            if state.contact.phase == ContactPhase::Editing {
                &[("↑/↓", "field"), ("Ctrl+S", "send"), ("Esc", "quit")]
            } else {
                &[("Enter", "continue")]
            }
        }
    };

    let mut spans = Vec::new();
    for (key, action) in pairs {
        spans.push(Span::styled((*key).to_string(), Theme::hint_key()));
        spans.push(Span::styled(format!(" {}  ", action), Theme::hint_text()));
    }
    spans
}
