// page content
//
// kept apart from the components so the copy can change without touching markup

pub struct NavEntry {
    pub target: &'static str,
    pub label: &'static str,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { target: "home", label: "Home" },
    NavEntry { target: "about", label: "About" },
    NavEntry { target: "skills", label: "Skills" },
    NavEntry { target: "projects", label: "Projects" },
    NavEntry { target: "experience", label: "Experience" },
    NavEntry { target: "contact", label: "Contact" },
];

pub const OWNER: &str = "Portfolio";

pub const TAGLINE: &str = "Software engineer building reliable systems and the tools around them.";

pub const ABOUT: &str = "I work across the stack, with a soft spot for systems programming, \
    developer tooling, and interfaces that stay out of the way.";

pub const SKILLS: &[&str] = &[
    "Rust", "TypeScript", "SQL", "Linux", "Networking", "WebAssembly", "CI/CD", "Testing",
];

pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Media Library",
        summary: "Self-hosted photo and video organization with collections and search.",
        link: "https://example.com/projects/media-library",
    },
    Project {
        name: "Message Queue Explorer",
        summary: "Terminal interface for browsing and replaying queued messages.",
        link: "https://example.com/projects/queue-explorer",
    },
    Project {
        name: "Realtime Whiteboard",
        summary: "Collaborative canvas synchronized over websockets.",
        link: "https://example.com/projects/whiteboard",
    },
];

pub struct Role {
    pub period: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const EXPERIENCE: &[Role] = &[
    Role {
        period: "2023 - present",
        title: "Software Engineer",
        detail: "Backend services, storage, and deployment tooling.",
    },
    Role {
        period: "2021 - 2023",
        title: "Junior Developer",
        detail: "Web frontends and internal dashboards.",
    },
];

pub struct ContactCard {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        label: "Email",
        value: "hello@example.com",
        href: "mailto:hello@example.com",
    },
    ContactCard {
        label: "GitHub",
        value: "github.com/example",
        href: "https://github.com/example",
    },
];
