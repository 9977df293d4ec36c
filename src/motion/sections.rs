use super::ease::Rgb;

/// A named landmark of the page. Fixed at build time, looked up by id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTarget {
    pub id: &'static str,
    /// Orb colours, back layer first.
    pub colors: [Rgb; 3],
    /// 1-based position in page order; only used for the watermark.
    pub ordinal: u8,
    pub marquee: Option<&'static str>,
}

const BLUE: Rgb = Rgb(59, 130, 246);
const CYAN: Rgb = Rgb(6, 182, 212);
const VIOLET: Rgb = Rgb(139, 92, 246);
const PURPLE: Rgb = Rgb(168, 85, 247);
const PINK: Rgb = Rgb(236, 72, 153);
const EMERALD: Rgb = Rgb(16, 185, 129);
const AMBER: Rgb = Rgb(245, 158, 11);
const INDIGO: Rgb = Rgb(99, 102, 241);

pub static SECTIONS: &[SectionTarget] = &[
    SectionTarget {
        id: "home",
        colors: [BLUE, VIOLET, CYAN],
        ordinal: 1,
        marquee: None,
    },
    SectionTarget {
        id: "about",
        colors: [VIOLET, PINK, BLUE],
        ordinal: 2,
        marquee: Some("ABOUT ME"),
    },
    SectionTarget {
        id: "skills",
        colors: [CYAN, EMERALD, INDIGO],
        ordinal: 3,
        marquee: Some("SKILLS"),
    },
    SectionTarget {
        id: "experience",
        colors: [INDIGO, BLUE, PURPLE],
        ordinal: 4,
        marquee: Some("EXPERIENCE"),
    },
    SectionTarget {
        id: "projects",
        colors: [PURPLE, PINK, CYAN],
        ordinal: 5,
        marquee: Some("PROJECTS"),
    },
    SectionTarget {
        id: "services",
        colors: [EMERALD, CYAN, BLUE],
        ordinal: 6,
        marquee: None,
    },
    SectionTarget {
        id: "certificates",
        colors: [AMBER, PINK, VIOLET],
        ordinal: 7,
        marquee: None,
    },
    SectionTarget {
        id: "contact",
        colors: [BLUE, PURPLE, PINK],
        ordinal: 8,
        marquee: Some("LET'S TALK"),
    },
];

/// Ambient glow stops: each section's back-layer colour, in page order.
pub fn glow_palette(sections: &[SectionTarget]) -> Vec<Rgb> {
    sections.iter().map(|s| s.colors[0]).collect()
}
