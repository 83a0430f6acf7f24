mod contact;
mod experience;
mod hero;
pub mod layout;
mod nav_bar;
mod projects;
mod skills;
mod status_bar;
mod theme;

use crate::app::state::{AppState, Section};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    nav_bar::render(frame, app_layout.nav_bar, state);

    match state.section {
        Section::Hero => hero::render(frame, app_layout.content, state),
        Section::Skills => skills::render(frame, app_layout.content, state),
        Section::Projects => projects::render(frame, app_layout.content, state),
        Section::Experience => experience::render(frame, app_layout.content, state),
        Section::Contact => contact::render(frame, app_layout.content, state),
    }

    status_bar::render(frame, app_layout.status_bar, state);

    // Modal draws over everything else
    if state.section == Section::Projects && state.projects.modal_open {
        projects::render_modal(frame, state);
    }
}
