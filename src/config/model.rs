//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box:
//! the defaults double as the sample portfolio shown on first launch.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default = "default_skills")]
    pub skills: Vec<SkillCategory>,
    #[serde(default = "default_projects")]
    pub projects: Vec<ProjectConfig>,
    #[serde(default = "default_experience")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            skills: default_skills(),
            projects: default_projects(),
            experience: default_experience(),
            contact: ContactConfig::default(),
            carousel: CarouselConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Hero banner content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_summary")]
    pub summary: String,
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            title: default_title(),
            summary: default_summary(),
            resume_url: default_resume_url(),
        }
    }
}

/// One group of skills with a shared heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, clamped to 100 at render time.
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Shown in the detail modal.
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// One slide of the experience carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default = "default_contact_prompt")]
    pub prompt: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_socials")]
    pub socials: Vec<SocialLink>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            prompt: default_contact_prompt(),
            email: default_email(),
            socials: default_socials(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Carousel timing and gesture tunables. The thresholds are tuned values with
/// no derivation, so they live in config instead of constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_autoplay_delay_ms")]
    pub autoplay_delay_ms: u64,
    #[serde(default = "default_swipe_power_threshold")]
    pub swipe_power_threshold: f32,
    #[serde(default = "default_touch_threshold_px")]
    pub touch_threshold_px: f32,
    /// Pixels per terminal cell, used to scale mouse drags into the units the
    /// swipe thresholds were tuned in.
    #[serde(default = "default_cell_px")]
    pub cell_px: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_delay_ms: default_autoplay_delay_ms(),
            swipe_power_threshold: default_swipe_power_threshold(),
            touch_threshold_px: default_touch_threshold_px(),
            cell_px: default_cell_px(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_true")]
    pub particles: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            particles: true,
        }
    }
}

/// Diagnostic logging settings (tracing output to a file).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_name() -> String {
    "Ferris Crabtree".to_string()
}
fn default_title() -> String {
    "Software Engineer".to_string()
}
fn default_summary() -> String {
    "Building scalable and resilient systems with 10+ years of experience in \
     cloud architecture and system design."
        .to_string()
}
fn default_resume_url() -> String {
    "https://example.com/resume.pdf".to_string()
}
fn default_contact_prompt() -> String {
    "Have a question or want to work together?".to_string()
}
fn default_email() -> String {
    "hello@example.com".to_string()
}
fn default_socials() -> Vec<SocialLink> {
    vec![
        SocialLink {
            label: "GitHub".into(),
            url: "https://github.com".into(),
        },
        SocialLink {
            label: "LinkedIn".into(),
            url: "https://linkedin.com".into(),
        },
    ]
}

fn default_skills() -> Vec<SkillCategory> {
    vec![
        SkillCategory {
            category: "Frontend".into(),
            items: vec![
                skill("React", 90, "🔵"),
                skill("JavaScript", 85, "💛"),
                skill("TypeScript", 80, "🔷"),
                skill("HTML/CSS", 90, "🎨"),
            ],
        },
        SkillCategory {
            category: "Backend".into(),
            items: vec![
                skill("Rust", 90, "🦀"),
                skill("Node.js", 85, "💚"),
                skill("Python", 80, "🐍"),
                skill("SQL", 85, "📊"),
            ],
        },
        SkillCategory {
            category: "Tools & Others".into(),
            items: vec![
                skill("Git", 90, "📚"),
                skill("Docker", 80, "🐋"),
                skill("AWS", 75, "☁️"),
                skill("GraphQL", 70, "📱"),
            ],
        },
    ]
}

fn skill(name: &str, level: u8, icon: &str) -> Skill {
    Skill {
        name: name.into(),
        level,
        icon: icon.into(),
    }
}

fn default_projects() -> Vec<ProjectConfig> {
    vec![
        ProjectConfig {
            title: "Cloud Migration Framework".into(),
            description: "Enterprise-scale cloud migration framework that helped transition \
                          100+ applications to AWS."
                .into(),
            long_description: "Developed a comprehensive cloud migration framework that enabled \
                               seamless transition of legacy applications to AWS cloud \
                               infrastructure. Implemented automated assessment, planning, and \
                               migration tools that reduced migration time by 40%."
                .into(),
            technologies: vec!["AWS".into(), "Terraform".into(), "Python".into()],
        },
        ProjectConfig {
            title: "Microservices Platform".into(),
            description: "Designed and implemented a scalable microservices platform serving \
                          millions of requests daily."
                .into(),
            long_description: "Built a robust microservices architecture handling high-volume \
                               transactions with 99.99% uptime. Implemented service mesh, \
                               distributed tracing, and automated scaling policies."
                .into(),
            technologies: vec!["Kubernetes".into(), "Docker".into(), "Spring Boot".into()],
        },
        ProjectConfig {
            title: "Serverless Data Pipeline".into(),
            description: "Built real-time data processing pipeline handling 10TB+ data daily."
                .into(),
            long_description: "Architected and deployed a serverless data processing solution \
                               that reduced operational costs by 60% while improving data \
                               processing speed by 3x."
                .into(),
            technologies: vec!["AWS Lambda".into(), "Kinesis".into(), "DynamoDB".into()],
        },
    ]
}

fn default_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            title: "Senior Software Engineer".into(),
            company: "Tech Company".into(),
            duration: "2021 - Present".into(),
            description: vec![
                "Led development of core features resulting in 40% increase in user engagement"
                    .into(),
                "Managed a team of 5 developers and implemented agile methodologies".into(),
                "Architected and deployed microservices infrastructure".into(),
            ],
            skills: vec!["React".into(), "Node.js".into(), "AWS".into(), "Docker".into()],
        },
        ExperienceEntry {
            title: "Full Stack Developer".into(),
            company: "Digital Agency".into(),
            duration: "2019 - 2021".into(),
            description: vec![
                "Developed responsive web applications for diverse clients".into(),
                "Optimized application performance, reducing load time by 60%".into(),
                "Collaborated with UX team to implement modern design patterns".into(),
            ],
            skills: vec![
                "JavaScript".into(),
                "Python".into(),
                "PostgreSQL".into(),
                "Redis".into(),
            ],
        },
        ExperienceEntry {
            title: "Frontend Developer".into(),
            company: "Startup Inc.".into(),
            duration: "2017 - 2019".into(),
            description: vec![
                "Built interactive user interfaces using modern frameworks".into(),
                "Implemented responsive designs and animations".into(),
                "Integrated third-party APIs and services".into(),
            ],
            skills: vec![
                "HTML/CSS".into(),
                "JavaScript".into(),
                "React".into(),
                "Vue.js".into(),
            ],
        },
    ]
}

fn default_autoplay_delay_ms() -> u64 {
    5000
}
fn default_swipe_power_threshold() -> f32 {
    10_000.0
}
fn default_touch_threshold_px() -> f32 {
    50.0
}
fn default_cell_px() -> f32 {
    10.0
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/crabfolio/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_content_for_every_section() {
        let cfg = AppConfig::default();
        assert!(!cfg.profile.name.is_empty());
        assert!(!cfg.skills.is_empty());
        assert!(!cfg.projects.is_empty());
        assert!(!cfg.experience.is_empty());
        assert!(!cfg.contact.socials.is_empty());
    }

    #[test]
    fn carousel_defaults_match_reference_tuning() {
        let cfg = CarouselConfig::default();
        assert_eq!(cfg.autoplay_delay_ms, 5000);
        assert_eq!(cfg.swipe_power_threshold, 10_000.0);
        assert_eq!(cfg.touch_threshold_px, 50.0);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let cfg = AppConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let parsed: AppConfig = toml::from_str("").unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [profile]
            name = "Jordan Rivers"

            [carousel]
            autoplay_delay_ms = 1200
            "#,
        )
        .unwrap();
        assert_eq!(parsed.profile.name, "Jordan Rivers");
        assert_eq!(parsed.profile.title, AppConfig::default().profile.title);
        assert_eq!(parsed.carousel.autoplay_delay_ms, 1200);
        assert_eq!(parsed.skills, AppConfig::default().skills);
    }
}
