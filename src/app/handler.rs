use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::AutoplayTick { epoch } => {
            handle_autoplay_tick(state, epoch);
            vec![]
        }
        AppEvent::ContactSendComplete => {
            if state.contact.phase == ContactPhase::Sending {
                state.contact.phase = ContactPhase::Submitted;
                state.contact.reset();
                state.dirty = true;
                tracing::info!("contact message sent");
            }
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_autoplay_tick(state: &mut AppState, epoch: u64) {
    let carousel = &state.experience.carousel;
    if !carousel.is_current_epoch(epoch) || !carousel.autoplay_enabled() {
        tracing::trace!(epoch, "dropping stale autoplay tick");
        return;
    }
    state.experience.paginate(1);
    state.dirty = true;
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);
    let hero_backdrop = state.section == Section::Hero && !state.particles.is_empty();
    let spinner = state.section == Section::Contact && state.contact.phase == ContactPhase::Sending;
    if hero_backdrop || spinner || state.has_live_animation() {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(w, h) => {
            state.last_size = (w, h);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The project modal captures all input while open
    if state.section == Section::Projects && state.projects.modal_open {
        return handle_modal_key(state, key);
    }

    // The contact form needs plain characters, so it routes first
    if state.section == Section::Contact {
        return handle_contact_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Tab => {
            state.next_section();
            return vec![];
        }
        KeyCode::BackTab => {
            state.prev_section();
            return vec![];
        }
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(section) = Section::from_digit(c) {
                state.set_section(section);
            }
            return vec![];
        }
        _ => {}
    }

    match state.section {
        Section::Experience => handle_experience_key(state, key),
        Section::Projects => handle_projects_key(state, key),
        _ => {}
    }
    vec![]
}

fn handle_experience_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left => {
            state.experience.paginate(-1);
        }
        KeyCode::Right => {
            state.experience.paginate(1);
        }
        KeyCode::Char(' ') => {
            let enabled = state.experience.carousel.autoplay_enabled();
            state.experience.carousel.set_autoplay(!enabled);
            state.status_message = Some(
                if enabled {
                    "Autoplay paused"
                } else {
                    "Autoplay resumed"
                }
                .to_string(),
            );
        }
        _ => {}
    }
}

fn handle_projects_key(state: &mut AppState, key: KeyEvent) {
    let len = state.config.projects.len();
    match key.code {
        KeyCode::Left | KeyCode::Up => state.projects.move_selection(-1, len),
        KeyCode::Right | KeyCode::Down => state.projects.move_selection(1, len),
        KeyCode::Enter => {
            if len > 0 {
                state.projects.open_modal();
            }
        }
        _ => {}
    }
}

fn handle_modal_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => state.projects.close_modal(),
        _ => {}
    }
    vec![]
}

fn handle_contact_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Section switching still works from inside the form
    match key.code {
        KeyCode::Tab => {
            state.next_section();
            return vec![];
        }
        KeyCode::BackTab => {
            state.prev_section();
            return vec![];
        }
        _ => {}
    }

    match state.contact.phase {
        ContactPhase::Sending => vec![],
        ContactPhase::Submitted => {
            if key.code == KeyCode::Enter {
                state.contact.phase = ContactPhase::Editing;
            }
            vec![]
        }
        ContactPhase::Editing => handle_contact_edit_key(state, key),
    }
}

fn handle_contact_edit_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        return try_submit(state);
    }
    match key.code {
        KeyCode::Char(c) => state.contact.active_field_mut().insert_char(c),
        KeyCode::Backspace => state.contact.active_field_mut().delete_back(),
        KeyCode::Delete => state.contact.active_field_mut().delete_forward(),
        KeyCode::Left => state.contact.active_field_mut().move_left(),
        KeyCode::Right => state.contact.active_field_mut().move_right(),
        KeyCode::Home => state.contact.active_field_mut().move_home(),
        KeyCode::End => state.contact.active_field_mut().move_end(),
        KeyCode::Up => state.contact.focus_prev(),
        KeyCode::Down => state.contact.focus_next(),
        KeyCode::Enter => {
            // Enter advances through the fields and submits from the last one
            if state.contact.focus == ContactField::Message {
                return try_submit(state);
            }
            state.contact.focus_next();
        }
        _ => {}
    }
    vec![]
}

fn try_submit(state: &mut AppState) -> Vec<Action> {
    match state.contact.validate() {
        Ok(draft) => {
            state.contact.phase = ContactPhase::Sending;
            state.contact.error = None;
            vec![Action::SubmitContact { draft }]
        }
        Err(message) => {
            state.contact.error = Some(message);
            vec![]
        }
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if state.section != Section::Experience {
        return vec![];
    }

    let region = carousel_region(state);
    let inside = region.contains(Position::new(mouse.column, mouse.row));
    let cell_px = state.config.carousel.cell_px;
    let (x_px, y_px) = (mouse.column as f32 * cell_px, mouse.row as f32 * cell_px);

    match mouse.kind {
        // Hovering the carousel suspends autoplay; leaving resumes it.
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            if state.experience.carousel.set_autoplay(!inside) {
                state.dirty = true;
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if inside {
                state.experience.tracker.begin(x_px, y_px);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let thresholds = state.swipe_thresholds();
            if let Some(step) = state.experience.tracker.release(x_px, y_px, &thresholds) {
                state.experience.paginate(step);
                state.dirty = true;
            }
        }
        _ => {}
    }
    vec![]
}

/// The screen region that counts as "the carousel" for hover and drag.
fn carousel_region(state: &AppState) -> Rect {
    let (w, h) = state.last_size;
    ui::layout::compute_layout(Rect::new(0, 0, w, h)).content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::MouseEvent;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn tab_cycles_sections() {
        let mut state = state();
        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(state.section, Section::Skills);
        handle_event(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.section, Section::Hero);
    }

    #[test]
    fn digits_jump_to_sections() {
        let mut state = state();
        handle_event(&mut state, key(KeyCode::Char('4')));
        assert_eq!(state.section, Section::Experience);
    }

    #[test]
    fn arrows_paginate_only_in_experience() {
        let mut state = state();
        handle_event(&mut state, key(KeyCode::Right));
        assert_eq!(state.experience.carousel.current(), 0);

        state.set_section(Section::Experience);
        handle_event(&mut state, key(KeyCode::Right));
        assert_eq!(state.experience.carousel.current(), 1);
        handle_event(&mut state, key(KeyCode::Left));
        assert_eq!(state.experience.carousel.current(), 0);
    }

    #[test]
    fn left_arrow_wraps_to_last_slide() {
        let mut state = state();
        state.set_section(Section::Experience);
        handle_event(&mut state, key(KeyCode::Left));
        let last = state.experience.carousel.len() - 1;
        assert_eq!(state.experience.carousel.current(), last);
        assert_eq!(state.experience.carousel.direction(), -1);
    }

    #[test]
    fn current_autoplay_tick_advances() {
        let mut state = state();
        let epoch = state.experience.carousel.epoch();
        handle_event(&mut state, AppEvent::AutoplayTick { epoch });
        assert_eq!(state.experience.carousel.current(), 1);
    }

    #[test]
    fn stale_autoplay_tick_is_dropped() {
        let mut state = state();
        let stale = state.experience.carousel.epoch();
        state.experience.paginate(1);
        handle_event(&mut state, AppEvent::AutoplayTick { epoch: stale });
        assert_eq!(state.experience.carousel.current(), 1);
    }

    #[test]
    fn autoplay_tick_is_ignored_while_disabled() {
        let mut state = state();
        state.experience.carousel.set_autoplay(false);
        let epoch = state.experience.carousel.epoch();
        handle_event(&mut state, AppEvent::AutoplayTick { epoch });
        assert_eq!(state.experience.carousel.current(), 0);
    }

    #[test]
    fn space_toggles_autoplay_in_experience() {
        let mut state = state();
        state.set_section(Section::Experience);
        handle_event(&mut state, key(KeyCode::Char(' ')));
        assert!(!state.experience.carousel.autoplay_enabled());
        handle_event(&mut state, key(KeyCode::Char(' ')));
        assert!(state.experience.carousel.autoplay_enabled());
    }

    #[test]
    fn hover_suspends_autoplay_and_leaving_resumes() {
        let mut state = state();
        state.set_section(Section::Experience);
        let region = carousel_region(&state);
        handle_event(
            &mut state,
            mouse(MouseEventKind::Moved, region.x + 1, region.y + 1),
        );
        assert!(!state.experience.carousel.autoplay_enabled());
        handle_event(&mut state, mouse(MouseEventKind::Moved, 0, 0));
        assert!(state.experience.carousel.autoplay_enabled());
    }

    #[test]
    fn typing_in_contact_goes_to_the_focused_field() {
        let mut state = state();
        state.set_section(Section::Contact);
        handle_event(&mut state, key(KeyCode::Char('q')));
        handle_event(&mut state, key(KeyCode::Char('1')));
        assert_eq!(state.contact.name.text, "q1");
        assert_eq!(state.section, Section::Contact);
    }

    #[test]
    fn invalid_submit_sets_error_and_no_action() {
        let mut state = state();
        state.set_section(Section::Contact);
        let actions = handle_event(&mut state, ctrl('s'));
        assert!(actions.is_empty());
        assert!(state.contact.error.is_some());
        assert_eq!(state.contact.phase, ContactPhase::Editing);
    }

    #[test]
    fn valid_submit_enters_sending_and_emits_action() {
        let mut state = state();
        state.set_section(Section::Contact);
        state.contact.name.text = "Ada".into();
        state.contact.email.text = "ada@example.com".into();
        state.contact.message.text = "Hi!".into();
        let actions = handle_event(&mut state, ctrl('s'));
        assert!(matches!(actions.as_slice(), [Action::SubmitContact { .. }]));
        assert_eq!(state.contact.phase, ContactPhase::Sending);

        handle_event(&mut state, AppEvent::ContactSendComplete);
        assert_eq!(state.contact.phase, ContactPhase::Submitted);
        assert!(state.contact.name.text.is_empty());
    }

    #[test]
    fn enter_after_submission_returns_to_editing() {
        let mut state = state();
        state.set_section(Section::Contact);
        state.contact.phase = ContactPhase::Submitted;
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.contact.phase, ContactPhase::Editing);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut state = state();
        state.set_section(Section::Contact);
        let actions = handle_event(&mut state, ctrl('c'));
        assert!(matches!(actions.as_slice(), [Action::Quit]));
    }

    #[test]
    fn modal_captures_input_while_open() {
        let mut state = state();
        state.set_section(Section::Projects);
        handle_event(&mut state, key(KeyCode::Enter));
        assert!(state.projects.modal_open);
        handle_event(&mut state, key(KeyCode::Char('q')));
        assert!(!state.projects.modal_open);
        // closing consumed the key; the app is still running
        assert!(!state.should_quit);
    }

    #[test]
    fn click_without_movement_keeps_slide() {
        let mut state = state();
        state.set_section(Section::Experience);
        let region = carousel_region(&state);
        let (x, y) = (region.x + 10, region.y + 2);
        handle_event(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), x, y),
        );
        handle_event(
            &mut state,
            mouse(MouseEventKind::Up(MouseButton::Left), x, y),
        );
        assert_eq!(state.experience.carousel.current(), 0);
    }

    #[test]
    fn long_leftward_drag_advances_slide() {
        let mut state = state();
        state.set_section(Section::Experience);
        let region = carousel_region(&state);
        // 30 cells * 10 px/cell = 300 px of leftward displacement
        let (x, y) = (region.x + 40, region.y + 2);
        handle_event(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), x, y),
        );
        handle_event(
            &mut state,
            mouse(MouseEventKind::Up(MouseButton::Left), x - 30, y),
        );
        assert_eq!(state.experience.carousel.current(), 1);
        assert_eq!(state.experience.carousel.direction(), 1);
    }
}
