//! The effect catalog: every scroll-driven behaviour on the page, as data.
//!
//! Each row names its targets, what triggers it, whether it scrubs with
//! scroll or reveals once, the parameter curve, and how it degrades on a
//! low-capability device. The registry walks this table; nothing here
//! touches the document.

use super::dom::Selector;
use super::ease::{Ease, Keyframe, Shaping};
use super::window::{
    bottom_at, top_at, Anchor, ScrollWindow, BOTTOM_BOTTOM, BOTTOM_TOP, TOP_BOTTOM, TOP_TOP,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Every match triggers itself.
    Own,
    /// Every match is triggered by its parent element.
    Parent,
    /// Every match is triggered by its nearest ancestor matching the selector.
    Closest(Selector),
    /// One shared observer, triggered by the first match.
    First,
    /// One shared observer, triggered by a section landmark.
    Section(&'static str),
    /// One shared observer spanning the whole document.
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stagger {
    None,
    /// Fixed delay per item, in seconds.
    Each(f64),
    /// Total delay budget spread evenly from first item to last.
    Spread(f64),
    /// Delay repeats every `period` items.
    Wave { period: usize, step: f64 },
}

impl Stagger {
    pub fn delay(&self, index: usize, count: usize) -> f64 {
        match *self {
            Stagger::None => 0.0,
            Stagger::Each(step) => index as f64 * step,
            Stagger::Spread(_) if count < 2 => 0.0,
            Stagger::Spread(amount) => index as f64 * amount / (count - 1) as f64,
            Stagger::Wave { period, step } => (index % period.max(1)) as f64 * step,
        }
    }

    /// True when delays never decrease along document order.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, Stagger::Wave { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Parameter follows scroll progress through `window`; `lag` is the
    /// catch-up time in seconds (0 follows the scrollbar exactly).
    Scrub { window: ScrollWindow, lag: f64 },
    /// Plays once, over `duration` seconds, when `threshold` is reached.
    Reveal {
        threshold: Anchor,
        duration: f64,
        ease: Ease,
        stagger: Stagger,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Tween {
        from: Keyframe,
        to: Keyframe,
        origin: Option<&'static str>,
        perspective: Option<f64>,
    },
    /// Counts the displayed integer from 0 up to the value in `attribute`.
    Counter {
        attribute: &'static str,
        suffix: &'static str,
    },
    /// Background colour walks the section palette.
    Glow,
}

/// Pseudo-property claimed by text writes.
pub const TEXT: &str = "textContent";

impl Motion {
    const fn tween(from: Keyframe, to: Keyframe) -> Self {
        Motion::Tween {
            from,
            to,
            origin: None,
            perspective: None,
        }
    }

    /// Properties this motion writes on every target.
    pub fn claims(&self) -> Vec<&'static str> {
        match self {
            Motion::Tween {
                from, to, origin, ..
            } => {
                let mut claims = Vec::new();
                if (Keyframe { opacity: 1.0, ..*from }) != (Keyframe { opacity: 1.0, ..*to }) {
                    claims.push("transform");
                }
                if from.opacity != to.opacity {
                    claims.push("opacity");
                }
                if origin.is_some() {
                    claims.push("transform-origin");
                }
                claims
            }
            Motion::Counter { .. } => vec![TEXT],
            Motion::Glow => vec!["background"],
        }
    }
}

/// Per-entry behaviour on a low-capability device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fallback {
    pub skip: bool,
    /// Travel distance multiplier.
    pub travel: f64,
    /// Duration and stagger multiplier.
    pub time: f64,
    /// Collapse alternating offsets to the first value.
    pub uniform: bool,
    /// Drop 3-D rotation and perspective.
    pub flat: bool,
}

impl Fallback {
    pub const NONE: Fallback = Fallback {
        skip: false,
        travel: 1.0,
        time: 1.0,
        uniform: false,
        flat: false,
    };

    pub const SKIP: Fallback = Fallback {
        skip: true,
        ..Fallback::NONE
    };

    const fn travel(travel: f64) -> Self {
        Self {
            travel,
            ..Fallback::NONE
        }
    }

    const fn time(self, time: f64) -> Self {
        Self { time, ..self }
    }

    const fn uniform(self) -> Self {
        Self {
            uniform: true,
            ..self
        }
    }

    const fn flat(self) -> Self {
        Self { flat: true, ..self }
    }

    pub fn shaping(&self, low_capability: bool) -> Shaping {
        if !low_capability {
            return Shaping::FULL;
        }
        Shaping {
            travel: self.travel,
            uniform: self.uniform,
            flat: self.flat,
        }
    }

    pub fn time_scale(&self, low_capability: bool) -> f64 {
        if low_capability {
            self.time
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectEntry {
    pub name: &'static str,
    pub targets: Selector,
    pub trigger: Trigger,
    pub mode: Mode,
    pub motion: Motion,
    pub fallback: Fallback,
}

const HIDDEN: Keyframe = Keyframe::IDENTITY.opacity(0.0);
const REST: Keyframe = Keyframe::IDENTITY;

const PASS_THROUGH: ScrollWindow = ScrollWindow::new(TOP_BOTTOM, BOTTOM_TOP);
const HERO_OUT: ScrollWindow = ScrollWindow::new(TOP_TOP, BOTTOM_TOP);
const WHOLE_PAGE: ScrollWindow = ScrollWindow::new(TOP_TOP, BOTTOM_BOTTOM);

const fn reveal(threshold: f64, duration: f64, ease: Ease, stagger: Stagger) -> Mode {
    Mode::Reveal {
        threshold: top_at(threshold),
        duration,
        ease,
        stagger,
    }
}

const fn scrub(window: ScrollWindow, lag: f64) -> Mode {
    Mode::Scrub { window, lag }
}

pub static CATALOG: &[EffectEntry] = &[
    EffectEntry {
        name: "hero-blobs",
        targets: Selector::Class("hero-blob"),
        trigger: Trigger::Section("home"),
        mode: scrub(HERO_OUT, 2.0),
        motion: Motion::tween(
            REST,
            REST.x_cycle(&[-60.0, 40.0, 40.0]).y_cycle(&[-180.0, 130.0]),
        ),
        fallback: Fallback::travel(0.5),
    },
    EffectEntry {
        name: "hero-content",
        targets: Selector::Class("hero-content"),
        trigger: Trigger::Section("home"),
        mode: scrub(HERO_OUT, 1.0),
        motion: Motion::tween(REST, REST.y(-80.0)),
        fallback: Fallback::travel(0.5),
    },
    EffectEntry {
        name: "heading",
        targets: Selector::Attr("data-gsap-heading"),
        trigger: Trigger::Own,
        mode: reveal(88.0, 1.0, Ease::Power3Out, Stagger::None),
        motion: Motion::tween(HIDDEN.y(60.0).skew_y(4.0), REST),
        fallback: Fallback::travel(0.5).time(0.8),
    },
    EffectEntry {
        name: "subheading",
        targets: Selector::Attr("data-gsap-subheading"),
        trigger: Trigger::Own,
        mode: reveal(90.0, 0.8, Ease::Power2Out, Stagger::None),
        motion: Motion::tween(HIDDEN.y(30.0), REST),
        fallback: Fallback::travel(0.5),
    },
    EffectEntry {
        name: "about-card",
        targets: Selector::Class("gsap-about-card"),
        trigger: Trigger::Own,
        mode: reveal(80.0, 1.1, Ease::Power3Out, Stagger::None),
        motion: Motion::tween(HIDDEN.x(-80.0).rotate_y(-15.0), REST),
        fallback: Fallback::travel(0.5).flat(),
    },
    EffectEntry {
        name: "bio-text",
        targets: Selector::Class("gsap-bio-text"),
        trigger: Trigger::First,
        mode: reveal(85.0, 0.8, Ease::Power2Out, Stagger::Each(0.18)),
        motion: Motion::tween(HIDDEN.y(30.0), REST),
        fallback: Fallback::NONE.time(0.8),
    },
    EffectEntry {
        name: "stat-counter",
        targets: Selector::Class("gsap-stat-number"),
        trigger: Trigger::Own,
        mode: reveal(85.0, 2.2, Ease::Power2Out, Stagger::None),
        motion: Motion::Counter {
            attribute: "data-target",
            suffix: "+",
        },
        fallback: Fallback::NONE,
    },
    EffectEntry {
        name: "skill-grid",
        targets: Selector::Class("gsap-skill-item"),
        trigger: Trigger::First,
        mode: reveal(85.0, 0.75, Ease::Power3Out, Stagger::Spread(0.6)),
        motion: Motion::tween(HIDDEN.y(50.0).scale(0.92), REST),
        fallback: Fallback::travel(0.6).time(0.7),
    },
    EffectEntry {
        name: "timeline-line",
        targets: Selector::Class("gsap-timeline-line"),
        trigger: Trigger::Own,
        mode: scrub(ScrollWindow::new(top_at(80.0), bottom_at(20.0)), 1.5),
        motion: Motion::Tween {
            from: REST.scale_y(0.0),
            to: REST,
            origin: Some("top center"),
            perspective: None,
        },
        fallback: Fallback::NONE,
    },
    EffectEntry {
        name: "experience-cards",
        targets: Selector::Class("gsap-exp-card"),
        trigger: Trigger::Own,
        mode: reveal(83.0, 0.9, Ease::Power3Out, Stagger::None),
        motion: Motion::tween(HIDDEN.x_cycle(&[-70.0, 70.0]).y(20.0), REST),
        fallback: Fallback::travel(0.5).uniform(),
    },
    EffectEntry {
        name: "project-cards",
        targets: Selector::Class("gsap-project-card"),
        trigger: Trigger::First,
        mode: reveal(85.0, 0.9, Ease::Power3Out, Stagger::Each(0.18)),
        motion: Motion::Tween {
            from: HIDDEN.y(80.0).rotate_x(12.0),
            to: REST,
            origin: None,
            perspective: Some(800.0),
        },
        fallback: Fallback::travel(0.5).flat(),
    },
    EffectEntry {
        name: "service-cards",
        targets: Selector::Class("gsap-service-card"),
        trigger: Trigger::First,
        mode: reveal(85.0, 0.8, Ease::Power3Out, Stagger::Each(0.12)),
        motion: Motion::tween(HIDDEN.y(60.0).rotate(2.0).scale(0.95), REST),
        fallback: Fallback::travel(0.6),
    },
    EffectEntry {
        name: "contact-items",
        targets: Selector::Class("gsap-contact-item"),
        trigger: Trigger::First,
        mode: reveal(85.0, 0.7, Ease::Power2Out, Stagger::Each(0.15)),
        motion: Motion::tween(HIDDEN.x(-50.0), REST),
        fallback: Fallback::travel(0.6),
    },
    EffectEntry {
        name: "contact-form",
        targets: Selector::Class("gsap-contact-form"),
        trigger: Trigger::Own,
        mode: reveal(80.0, 1.0, Ease::Power3Out, Stagger::None),
        motion: Motion::tween(HIDDEN.x(80.0).scale(0.97), REST),
        fallback: Fallback::travel(0.5),
    },
    EffectEntry {
        name: "certificates",
        targets: Selector::Class("gsap-cert-item"),
        trigger: Trigger::First,
        mode: reveal(85.0, 0.7, Ease::Power2Out, Stagger::Spread(0.8)),
        motion: Motion::tween(HIDDEN.y(40.0).scale(0.95), REST),
        fallback: Fallback::NONE.time(0.7),
    },
    // Carousel rows and the footer run identically everywhere.
    EffectEntry {
        name: "carousel-rows",
        targets: Selector::Class("gsap-carousel-row"),
        trigger: Trigger::First,
        mode: reveal(88.0, 0.9, Ease::Power2Out, Stagger::Each(0.25)),
        motion: Motion::tween(HIDDEN.y(40.0), REST),
        fallback: Fallback::NONE,
    },
    EffectEntry {
        name: "footer",
        targets: Selector::Tag("footer"),
        trigger: Trigger::Own,
        mode: reveal(95.0, 0.9, Ease::Power2Out, Stagger::None),
        motion: Motion::tween(HIDDEN.y(40.0), REST),
        fallback: Fallback::NONE,
    },
    EffectEntry {
        name: "section-backdrop",
        targets: Selector::Class("gsap-section-bg"),
        trigger: Trigger::Parent,
        mode: scrub(PASS_THROUGH, 2.0),
        motion: Motion::tween(REST, REST.y(-60.0)),
        fallback: Fallback::SKIP,
    },
    EffectEntry {
        name: "tech-chips",
        targets: Selector::Class("gsap-tech-chip"),
        trigger: Trigger::Own,
        mode: reveal(
            92.0,
            0.55,
            Ease::BackOut(1.5),
            Stagger::Wave {
                period: 8,
                step: 0.06,
            },
        ),
        motion: Motion::tween(HIDDEN.scale(0.7).y(20.0), REST),
        fallback: Fallback::NONE.time(0.7),
    },
    EffectEntry {
        name: "orb-drift",
        targets: Selector::Class("scroll-orb"),
        trigger: Trigger::Closest(Selector::Tag("section")),
        mode: scrub(PASS_THROUGH, 2.0),
        motion: Motion::tween(REST, REST.y_cycle(&[-120.0, -80.0, -40.0])),
        fallback: Fallback::SKIP,
    },
    EffectEntry {
        name: "marquee",
        targets: Selector::Class("scroll-marquee"),
        trigger: Trigger::Parent,
        mode: scrub(PASS_THROUGH, 1.0),
        motion: Motion::tween(REST.x(120.0), REST.x(-480.0)),
        fallback: Fallback::SKIP,
    },
    EffectEntry {
        name: "watermark",
        targets: Selector::Class("scroll-watermark"),
        trigger: Trigger::Parent,
        mode: scrub(PASS_THROUGH, 1.5),
        motion: Motion::tween(REST.y(80.0), REST.y(-80.0)),
        fallback: Fallback::travel(0.5),
    },
    EffectEntry {
        name: "ambient-glow",
        targets: Selector::Class("scroll-ambient-glow"),
        trigger: Trigger::Document,
        mode: scrub(WHOLE_PAGE, 0.5),
        motion: Motion::Glow,
        fallback: Fallback::SKIP,
    },
    EffectEntry {
        name: "scroll-progress",
        targets: Selector::Attr("data-scroll-progress"),
        trigger: Trigger::Document,
        mode: scrub(WHOLE_PAGE, 0.0),
        motion: Motion::Tween {
            from: REST.scale_x(0.0),
            to: REST,
            origin: Some("left center"),
            perspective: None,
        },
        fallback: Fallback::NONE,
    },
];

pub fn find(name: &str) -> Option<&'static EffectEntry> {
    CATALOG.iter().find(|e| e.name == name)
}
