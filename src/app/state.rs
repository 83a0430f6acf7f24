use crate::anim::{Animation, AnimationDriver, ClockDriver, Easing};
use crate::carousel::{CarouselController, DragTracker, SwipeThresholds};
use crate::config::AppConfig;
use rand::RngExt;
use std::time::{Duration, Instant};

/// The five portfolio sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_digit(c: char) -> Option<Section> {
        let idx = c.to_digit(10)? as usize;
        Self::ALL.get(idx.checked_sub(1)?).copied()
    }

    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Section {
        let n = Self::ALL.len();
        Self::ALL[(self.index() + n - 1) % n]
    }
}

/// One dot of the hero's drifting backdrop. Coordinates are fractions of the
/// banner area; `y` advances with elapsed time and wraps.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub glyph: char,
}

fn spawn_particles(count: usize) -> Vec<Particle> {
    const GLYPHS: [char; 3] = ['·', '∙', '•'];
    let mut rng = rand::rng();
    (0..count)
        .map(|_| Particle {
            x: rng.random_range(0..1000) as f32 / 1000.0,
            y: rng.random_range(0..1000) as f32 / 1000.0,
            speed: rng.random_range(20..80) as f32 / 1000.0,
            glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
        })
        .collect()
}

/// Single-line text input for the contact form.
#[derive(Debug, Default)]
pub struct FieldInput {
    pub text: String,
    pub cursor: usize,
}

impl FieldInput {
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Editing,
    Sending,
    Submitted,
}

/// A validated, ready-to-send contact message.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ContactForm {
    pub name: FieldInput,
    pub email: FieldInput,
    pub message: FieldInput,
    pub focus: ContactField,
    pub phase: ContactPhase,
    pub error: Option<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FieldInput::default(),
            email: FieldInput::default(),
            message: FieldInput::default(),
            focus: ContactField::Name,
            phase: ContactPhase::Editing,
            error: None,
        }
    }

    pub fn active_field_mut(&mut self) -> &mut FieldInput {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Check the fields and produce a draft, or the first problem found.
    pub fn validate(&self) -> Result<ContactDraft, String> {
        let name = self.name.text.trim();
        let email = self.email.text.trim();
        let message = self.message.text.trim();
        if name.is_empty() {
            return Err("Name is required".into());
        }
        if email.is_empty() {
            return Err("Email is required".into());
        }
        if !email.contains('@') || !email.contains('.') {
            return Err("Enter a valid email address".into());
        }
        if message.is_empty() {
            return Err("Message is required".into());
        }
        Ok(ContactDraft {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    /// Reset to a blank editing form, as after a successful send.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = ContactField::Name;
        self.error = None;
    }
}

#[derive(Debug)]
pub struct ProjectsState {
    pub selected: usize,
    pub modal_open: bool,
    pub modal_anim: Animation,
}

impl ProjectsState {
    pub fn new() -> Self {
        Self {
            selected: 0,
            modal_open: false,
            modal_anim: Animation::new(Duration::from_millis(200), Easing::EaseOut),
        }
    }

    pub fn move_selection(&mut self, delta: i64, len: usize) {
        if len == 0 {
            return;
        }
        let n = len as i64;
        self.selected = (self.selected as i64 + delta).rem_euclid(n) as usize;
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
        self.modal_anim.restart();
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }
}

/// Skill bars animate once, the first time the section scrolls into view.
#[derive(Debug)]
pub struct SkillsState {
    pub reveal: Animation,
    seen: bool,
}

impl SkillsState {
    pub fn new() -> Self {
        Self {
            reveal: Animation::new(Duration::from_secs(1), Easing::EaseOut),
            seen: false,
        }
    }

    pub fn enter(&mut self) {
        if !self.seen {
            self.seen = true;
            self.reveal.restart();
        }
    }
}

pub struct ExperienceState {
    pub carousel: CarouselController,
    pub slide_anim: Animation,
    pub tracker: DragTracker,
}

impl ExperienceState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            carousel: CarouselController::new(slide_count),
            slide_anim: Animation::new(Duration::from_millis(350), Easing::EaseOut),
            tracker: DragTracker::new(),
        }
    }

    /// Step the carousel and kick off the directional slide transition.
    pub fn paginate(&mut self, step: i64) -> bool {
        let moved = self.carousel.paginate(step);
        if moved {
            self.slide_anim.restart();
        }
        moved
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub section: Section,
    pub section_anim: Animation,
    pub started: Instant,
    pub particles: Vec<Particle>,
    pub skills: SkillsState,
    pub projects: ProjectsState,
    pub experience: ExperienceState,
    pub contact: ContactForm,
    pub driver: Box<dyn AnimationDriver + Send>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
    /// Last known terminal size, for hit-testing mouse events.
    pub last_size: (u16, u16),
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let slide_count = config.experience.len();
        let particles = if config.ui.particles {
            spawn_particles(20)
        } else {
            Vec::new()
        };
        Self {
            config,
            section: Section::Hero,
            section_anim: Animation::new(Duration::from_millis(500), Easing::EaseOut),
            started: Instant::now(),
            particles,
            skills: SkillsState::new(),
            projects: ProjectsState::new(),
            experience: ExperienceState::new(slide_count),
            contact: ContactForm::new(),
            driver: Box::new(ClockDriver),
            status_message: None,
            should_quit: false,
            dirty: true,
            tick_count: 0,
            last_size: (80, 24),
        }
    }

    /// Seconds since launch, for clock-driven backdrop effects.
    pub fn elapsed_secs(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    pub fn set_section(&mut self, section: Section) {
        if self.section == section {
            return;
        }
        self.section = section;
        self.section_anim.restart();
        self.experience.tracker.cancel();
        self.status_message = None;
        if section == Section::Skills {
            self.skills.enter();
        }
        self.dirty = true;
        tracing::debug!(section = section.title(), "section changed");
    }

    pub fn next_section(&mut self) {
        self.set_section(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.set_section(self.section.prev());
    }

    pub fn swipe_thresholds(&self) -> SwipeThresholds {
        SwipeThresholds {
            power: self.config.carousel.swipe_power_threshold,
            distance_px: self.config.carousel.touch_threshold_px,
        }
    }

    /// Whether anything time-based still needs redrawing.
    pub fn has_live_animation(&self) -> bool {
        if !self.driver.finished(&self.section_anim) {
            return true;
        }
        match self.section {
            Section::Skills => !self.driver.finished(&self.skills.reveal),
            Section::Experience => !self.driver.finished(&self.experience.slide_anim),
            Section::Projects => {
                self.projects.modal_open && !self.driver.finished(&self.projects.modal_anim)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_order_wraps_both_ways() {
        assert_eq!(Section::Contact.next(), Section::Hero);
        assert_eq!(Section::Hero.prev(), Section::Contact);
        assert_eq!(Section::Hero.next(), Section::Skills);
    }

    #[test]
    fn section_from_digit() {
        assert_eq!(Section::from_digit('1'), Some(Section::Hero));
        assert_eq!(Section::from_digit('5'), Some(Section::Contact));
        assert_eq!(Section::from_digit('6'), None);
        assert_eq!(Section::from_digit('0'), None);
    }

    #[test]
    fn field_input_edits_at_char_boundaries() {
        let mut field = FieldInput::default();
        for c in "héllo".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.text, "héllo");
        field.delete_back();
        assert_eq!(field.text, "héll");
        field.move_home();
        field.delete_forward();
        assert_eq!(field.text, "éll");
        field.move_right();
        field.insert_char('x');
        assert_eq!(field.text, "éxll");
    }

    #[test]
    fn contact_validation_requires_all_fields() {
        let mut form = ContactForm::new();
        assert!(form.validate().is_err());
        form.name.text = "Ada".into();
        assert_eq!(form.validate().unwrap_err(), "Email is required");
        form.email.text = "not-an-email".into();
        assert_eq!(form.validate().unwrap_err(), "Enter a valid email address");
        form.email.text = "ada@example.com".into();
        assert_eq!(form.validate().unwrap_err(), "Message is required");
        form.message.text = "  hello there  ".into();
        let draft = form.validate().unwrap();
        assert_eq!(draft.message, "hello there");
    }

    #[test]
    fn contact_focus_cycles_through_fields() {
        let mut form = ContactForm::new();
        form.focus_next();
        assert_eq!(form.focus, ContactField::Email);
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focus, ContactField::Name);
        form.focus_prev();
        assert_eq!(form.focus, ContactField::Message);
    }

    #[test]
    fn project_selection_wraps() {
        let mut projects = ProjectsState::new();
        projects.move_selection(-1, 3);
        assert_eq!(projects.selected, 2);
        projects.move_selection(1, 3);
        assert_eq!(projects.selected, 0);
        projects.move_selection(1, 0);
        assert_eq!(projects.selected, 0);
    }

    #[test]
    fn skills_reveal_runs_once() {
        let mut skills = SkillsState::new();
        skills.enter();
        let first = skills.reveal;
        std::thread::sleep(Duration::from_millis(5));
        skills.enter();
        let now = Instant::now();
        assert_eq!(first.progress_at(now), skills.reveal.progress_at(now));
    }

    #[test]
    fn switching_section_cancels_an_inflight_drag() {
        let mut state = AppState::new(AppConfig::default());
        state.set_section(Section::Experience);
        state.experience.tracker.begin(0.0, 0.0);
        state.set_section(Section::Hero);
        assert!(!state.experience.tracker.is_dragging());
    }
}
