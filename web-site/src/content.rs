//! Content - the studio's services, projects, process and pitch
//!
//! Static copy compiled into the page. Image paths point at files written by
//! the `generate-images` tool.

use std::fmt;

/// Aspect ratios the image generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatio {
    #[default]
    Wide,
    Square,
    Classic,
    Portrait,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wide => "16:9",
            Self::Square => "1:1",
            Self::Classic => "4:3",
            Self::Portrait => "3:4",
        }
    }

    /// CSS `aspect-ratio` value
    pub fn to_css(&self) -> &'static str {
        match self {
            Self::Wide => "16 / 9",
            Self::Square => "1 / 1",
            Self::Classic => "4 / 3",
            Self::Portrait => "3 / 4",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public path of a generated image
pub fn image_src(name: &str) -> String {
    format!("/images/{name}.png")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Code,
    Cloud,
    Smartphone,
    Bot,
    TrendingUp,
    PenTool,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Cloud => "\u{2601}",
            Self::Smartphone => "\u{25AF}",
            Self::Bot => "\u{2699}",
            Self::TrendingUp => "\u{2197}",
            Self::PenTool => "\u{270E}",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItem {
    pub title: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub link: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepItem {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Differentiator {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        title: "Custom Web Applications",
        description: "From internal tools to customer-facing platforms, we build responsive web applications tailored to your exact requirements.",
        icon: Icon::Code,
        image: "service-code",
    },
    ServiceItem {
        title: "SaaS Development",
        description: "Turn your idea into a scalable software-as-a-service product. We handle architecture, authentication, billing integration.",
        icon: Icon::Cloud,
        image: "service-cloud",
    },
    ServiceItem {
        title: "Mobile-First PWAs",
        description: "Progressive Web Apps that feel native without the app store hassle. Install directly from the browser, work offline.",
        icon: Icon::Smartphone,
        image: "service-smartphone",
    },
    ServiceItem {
        title: "AI Integration",
        description: "Integrate AI into your workflows: chatbots, document processing, intelligent search, and custom automation.",
        icon: Icon::Bot,
        image: "service-bot",
    },
    ServiceItem {
        title: "Consulting & Strategy",
        description: "Not sure where to start? We help you define requirements, choose the right tech stack, and create a roadmap.",
        icon: Icon::TrendingUp,
        image: "service-trending",
    },
    ServiceItem {
        title: "Content & Marketing",
        description: "From landing pages to full marketing sites, we create digital experiences that convert visitors into customers.",
        icon: Icon::PenTool,
        image: "service-pen",
    },
];

pub const PROJECTS: &[ProjectItem] = &[
    ProjectItem {
        title: "Clockwork Venue",
        kind: "SaaS Platform",
        description: "A real-time venue management system for nightclubs and entertainment venues. Features live rotation tracking, VIP timers, DJ dashboards, payout reporting, and multi-device sync across floor staff.",
        tech_stack: &["React", "TypeScript", "Firebase"],
        link: "https://clockworkvenue.com",
        image: "portfolio-clockwork",
    },
    ProjectItem {
        title: "Dogmora",
        kind: "Consumer Application",
        description: "A pet health and memory platform that helps dog owners track their pet's life, from daily moments to vet visits. AI-powered summaries make vet appointments more productive.",
        tech_stack: &["React", "Firebase", "PWA"],
        link: "https://dogmora.com",
        image: "portfolio-dogmora",
    },
];

pub const STEPS: &[StepItem] = &[
    StepItem { number: "01", title: "Discovery", description: "We start by understanding your problem, your users, and your goals." },
    StepItem { number: "02", title: "Architecture", description: "We map out the technical approach and design the user experience." },
    StepItem { number: "03", title: "Build & Iterate", description: "Agile sprints with regular demos. You see working software early." },
    StepItem { number: "04", title: "Launch", description: "We deploy to production, handle the handoff, and provide documentation." },
];

pub const DIFFERENTIATORS: &[Differentiator] = &[
    Differentiator {
        id: "ai-first",
        title: "AI-First Development",
        description: "We don't just build software, we build it smarter. AI-assisted coding, testing, and iteration means faster delivery and fewer bugs.",
    },
    Differentiator {
        id: "startup-speed",
        title: "Startup Speed, Enterprise Quality",
        description: "Move fast without breaking things. Our agile process delivers working software in weeks, not quarters.",
    },
    Differentiator {
        id: "transparent",
        title: "Transparent Partnership",
        description: "No black boxes. You'll have direct access to your development team, clear timelines, and regular demos.",
    },
];

/// In-page anchors shown in the navbar
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Services", "#services"),
    ("Work", "#portfolio"),
    ("About", "#about"),
    ("Contact", "#contact"),
];

pub const CONTACT_EMAIL: &str = "hello@digitalvisionworks.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_src_points_at_generated_png() {
        assert_eq!(image_src("hero-bg"), "/images/hero-bg.png");
    }

    #[test]
    fn aspect_ratio_wire_and_css_forms() {
        assert_eq!(AspectRatio::Wide.to_string(), "16:9");
        assert_eq!(AspectRatio::Portrait.to_css(), "3 / 4");
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(PROJECTS.len(), 2);
        assert_eq!(STEPS.len(), 4);
        assert_eq!(DIFFERENTIATORS.len(), 3);
    }

    #[test]
    fn nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|(_, href)| href.starts_with('#')));
    }
}
