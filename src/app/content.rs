//! Static page content. Counts here drive the stagger math on the page,
//! so adding a card is a data change only.

pub struct Stat {
    pub value: u32,
    pub label: &'static str,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub href: &'static str,
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Certificate {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: u16,
}

pub struct ContactItem {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const NAME: &str = "Alex Morgan";
pub const TAGLINE: &str = "Systems engineer building fast, calm software";

pub const BIO: &[&str] = &[
    "I design and build backend platforms and the tooling around them, \
     with a soft spot for anything that has to be both fast and correct.",
    "Most of my recent work is in Rust: network services, storage engines \
     and the odd WebAssembly front end like this one.",
    "Outside of work I mentor early-career engineers and contribute to \
     open source whenever a bug report turns into a patch.",
];

pub const STATS: &[Stat] = &[
    Stat {
        value: 8,
        label: "Years shipping",
    },
    Stat {
        value: 50,
        label: "Projects delivered",
    },
    Stat {
        value: 12,
        label: "Open source crates",
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Languages",
        skills: &["Rust", "Go", "TypeScript", "Python", "SQL"],
    },
    SkillGroup {
        title: "Platforms",
        skills: &["Linux", "Kubernetes", "AWS", "PostgreSQL", "Redis"],
    },
    SkillGroup {
        title: "Practices",
        skills: &["System design", "Observability", "Performance", "Mentoring"],
    },
];

pub const TECH_CHIPS: &[&str] = &[
    "axum", "tokio", "leptos", "serde", "sqlx", "tracing", "wasm-bindgen", "tonic", "hyper",
    "rayon", "clap", "thiserror",
];

pub const ROLES: &[Role] = &[
    Role {
        title: "Principal Engineer",
        company: "Northwind Systems",
        period: "2022 - present",
        summary: "Lead the storage platform group; rebuilt the ingest path in Rust and cut p99 latency by 70%.",
    },
    Role {
        title: "Senior Engineer",
        company: "Lumen Analytics",
        period: "2019 - 2022",
        summary: "Owned the query service and its caching tier serving a few billion requests a month.",
    },
    Role {
        title: "Software Engineer",
        company: "Fieldnote",
        period: "2016 - 2019",
        summary: "Built the sync engine behind the offline-first mobile apps.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "tidewater",
        description: "A log-structured key-value store with pluggable compaction.",
        tech: &["Rust", "io_uring"],
        href: "https://github.com/example/tidewater",
    },
    Project {
        name: "switchyard",
        description: "L7 traffic shifting proxy with live config reloads.",
        tech: &["Rust", "hyper", "tokio"],
        href: "https://github.com/example/switchyard",
    },
    Project {
        name: "quill",
        description: "Markdown-first static site generator with incremental builds.",
        tech: &["Rust", "pulldown-cmark"],
        href: "https://github.com/example/quill",
    },
    Project {
        name: "this site",
        description: "Server-rendered Leptos with hydrated scroll animations.",
        tech: &["Rust", "Leptos", "WebAssembly"],
        href: "https://github.com/example/portfolio",
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "⚙️",
        title: "Backend architecture",
        description: "Service boundaries, data models and the migration path to get there.",
    },
    Service {
        icon: "🚀",
        title: "Performance work",
        description: "Profiling, load testing and targeted rewrites of hot paths.",
    },
    Service {
        icon: "🦀",
        title: "Rust adoption",
        description: "Training, code review and first production services for new Rust teams.",
    },
];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        name: "Certified Kubernetes Administrator",
        issuer: "CNCF",
        year: 2023,
    },
    Certificate {
        name: "AWS Solutions Architect - Professional",
        issuer: "Amazon Web Services",
        year: 2022,
    },
    Certificate {
        name: "PostgreSQL Performance Tuning",
        issuer: "EDB",
        year: 2021,
    },
    Certificate {
        name: "Secure Coding in Rust",
        issuer: "Linux Foundation",
        year: 2021,
    },
];

/// Logos scrolled in the carousel rows, two rows.
pub const CAROUSEL: [&[&str]; 2] = [
    &["Rust", "Go", "Kubernetes", "PostgreSQL", "Redis", "Kafka"],
    &["Leptos", "Axum", "Tokio", "gRPC", "Terraform", "Grafana"],
];

pub const CONTACT: &[ContactItem] = &[
    ContactItem {
        label: "Email",
        value: "hello@example.com",
        href: "mailto:hello@example.com",
    },
    ContactItem {
        label: "GitHub",
        value: "github.com/example",
        href: "https://github.com/example",
    },
    ContactItem {
        label: "LinkedIn",
        value: "linkedin.com/in/example",
        href: "https://linkedin.com/in/example",
    },
];
