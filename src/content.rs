//! Everything the page says. Nothing here is computed beyond repetition.

use crate::icons::Icon;

pub const OWNER_NAME: &str = "Atharvsinh Jadav";
pub const AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/201381760?s=400&u=9efd1be6d842fc8097f5c15e998280ba88e51989&v=4";
pub const LOGO_PATH: &str = "/images/logo.svg";
pub const GRAIN_TEXTURE_URL: &str = "https://grainy-gradients.vercel.app/noise.svg";
pub const GITHUB_URL: &str = "https://github.com/Atharvsinh-codez";
pub const GITHUB_HANDLE: &str = "Atharvsinh-codez";
pub const TELEGRAM_URL: &str = "https://t.me/at41rv";
pub const TELEGRAM_HANDLE: &str = "@at41rv";

pub const AVAILABILITY_BADGE: &str = "Open to Collaborate";
pub const SKILLS_HEADING: &str = "Technical Arsenal";
pub const MARQUEE_REPEATS: usize = 3;
pub const PROJECT_STAGGER_MS: u32 = 100;

/// In-page anchors targeted by the navbar.
pub const SECTION_ANCHORS: [&str; 4] = ["about", "projects", "skills", "contact"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub url: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// Gradient behind the card on hover.
    pub glow: &'static str,
    pub accent: &'static str,
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "A7 AI",
        url: "https://a7-ai.vercel.app/",
        description: "Next-generation AI interface featuring fluid interactions, advanced LLM integration, and hyper-clean UI.",
        tags: &["AI", "Next.js", "Vercel"],
        glow: "glow-indigo",
        accent: "accent-indigo",
    },
    Project {
        title: "AgEnv Tech",
        url: "https://www.agenv.tech",
        description: "Revolutionizing agricultural environments with scalable AI-driven data visualization solutions.",
        tags: &["AgriTech", "Data Vis", "React"],
        glow: "glow-emerald",
        accent: "accent-emerald",
    },
    Project {
        title: "A4F",
        url: "https://www.a4f.co",
        description: "A premium digital architecture platform tailored for high-performance functionality and design.",
        tags: &["Design", "Arch", "Minimal"],
        glow: "glow-amber",
        accent: "accent-orange",
    },
];

pub const SKILLS: [&str; 10] = [
    "Artificial Intelligence",
    "Graphic Web Design",
    "Full Stack Development",
    "React.js",
    "Next.js",
    "UI/UX",
    "Motion Graphics",
    "Database Arch",
    "Prompt Engineering",
    "Cloud Computing",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PillTag {
    pub icon: Icon,
    pub text: &'static str,
}

pub const CORE_STACK: [PillTag; 5] = [
    PillTag {
        icon: Icon::Code,
        text: "React 18",
    },
    PillTag {
        icon: Icon::Terminal,
        text: "Next.js",
    },
    PillTag {
        icon: Icon::Layers,
        text: "Tailwind",
    },
    PillTag {
        icon: Icon::Zap,
        text: "OpenAI",
    },
    PillTag {
        icon: Icon::Globe,
        text: "Vercel",
    },
];

pub const SHIPPED_COUNT: &str = "3+";
pub const SHIPPED_LABEL: &str = "Major Ships";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactAction {
    CopyEmail,
    Open(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub handle: &'static str,
    pub icon: Icon,
    pub tone: &'static str,
    pub action: ContactAction,
}

pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        label: "Email",
        handle: crate::clipboard::CONTACT_EMAIL,
        icon: Icon::Mail,
        tone: "tone-indigo",
        action: ContactAction::CopyEmail,
    },
    ContactChannel {
        label: "Telegram",
        handle: TELEGRAM_HANDLE,
        icon: Icon::Send,
        tone: "tone-sky",
        action: ContactAction::Open(TELEGRAM_URL),
    },
    ContactChannel {
        label: "GitHub",
        handle: GITHUB_HANDLE,
        icon: Icon::Github,
        tone: "tone-slate",
        action: ContactAction::Open(GITHUB_URL),
    },
];

/// Skills repeated back to back so the strip can loop without a seam.
pub fn marquee_sequence() -> Vec<&'static str> {
    SKILLS
        .iter()
        .copied()
        .cycle()
        .take(SKILLS.len() * MARQUEE_REPEATS)
        .collect()
}

pub fn project_reveal_delay(index: usize) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(PROJECT_STAGGER_MS)
}

pub fn copyright_line(year: u32) -> String {
    format!("© {year} {OWNER_NAME}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marquee_repeats_skills_three_times_in_order() {
        let sequence = marquee_sequence();

        assert_eq!(sequence.len(), SKILLS.len() * 3);
        for chunk in sequence.chunks(SKILLS.len()) {
            assert_eq!(chunk, SKILLS.as_slice());
        }
    }

    #[test]
    fn projects_are_external_and_tagged() {
        assert_eq!(PROJECTS.len(), 3);
        for project in PROJECTS {
            assert!(project.url.starts_with("https://"), "{}", project.title);
            assert_eq!(project.tags.len(), 3);
        }
    }

    #[test]
    fn projects_reveal_in_sequence() {
        let delays: Vec<u32> = (0..PROJECTS.len()).map(project_reveal_delay).collect();

        assert_eq!(delays, vec![0, 100, 200]);
    }

    #[test]
    fn only_email_channel_copies() {
        let copying: Vec<&str> = CONTACT_CHANNELS
            .iter()
            .filter(|channel| channel.action == ContactAction::CopyEmail)
            .map(|channel| channel.label)
            .collect();

        assert_eq!(copying, vec!["Email"]);
    }

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Atharvsinh Jadav. All rights reserved."
        );
    }
}
