use super::capability::CapabilityProfile;
use super::catalog::{EffectEntry, Mode, Motion, Trigger};
use super::dom::{Bounds, Dom, Viewport, Write};
use super::ease::{fmt_num, Ease, Keyframe, Pose, Rgb};
use super::sections::{glow_palette, SectionTarget};
use super::window::{Anchor, ScrollWindow, Span};

/// Progress differences below this are treated as settled.
const SETTLE_EPSILON: f64 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    Armed,
    Playing { since: f64 },
    Done,
}

#[derive(Debug, Clone, PartialEq)]
enum Drive {
    Scrub {
        window: ScrollWindow,
        lag: f64,
        shown: Option<f64>,
    },
    Reveal {
        threshold: Anchor,
        duration: f64,
        ease: Ease,
        state: RevealState,
        fired: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct Tracked<N> {
    node: N,
    delay: f64,
    from: Pose,
    to: Pose,
    count_to: u32,
    written: Option<f64>,
}

/// One registration binding a trigger's geometry to the targets it drives.
#[derive(Debug, Clone)]
pub struct ScrollObserver<N> {
    entry: &'static EffectEntry,
    trigger: N,
    document: bool,
    targets: Vec<Tracked<N>>,
    perspective: Option<f64>,
    palette: Vec<Rgb>,
    span: Span,
    drive: Drive,
}

/// Walks the catalog and creates observers for every entry that has at
/// least one live target. Entries without targets are skipped silently.
pub fn register<D: Dom>(
    dom: &D,
    catalog: &'static [EffectEntry],
    sections: &[SectionTarget],
    profile: CapabilityProfile,
) -> Vec<ScrollObserver<D::Node>> {
    let low = profile.low_capability;
    let mut observers = Vec::new();
    for entry in catalog {
        if low && entry.fallback.skip {
            continue;
        }
        let matches = dom.query_all(entry.targets);
        if matches.is_empty() {
            continue;
        }
        let count = matches.len();
        let build = |trigger: D::Node, members: Vec<(usize, D::Node)>| {
            ScrollObserver::new(dom, entry, trigger, members, count, sections, low)
        };
        match entry.trigger {
            Trigger::Own => {
                for (i, node) in matches.into_iter().enumerate() {
                    observers.push(build(node.clone(), vec![(i, node)]));
                }
            }
            Trigger::Parent => {
                for (i, node) in matches.into_iter().enumerate() {
                    let trigger = dom.parent(&node).unwrap_or_else(|| node.clone());
                    observers.push(build(trigger, vec![(i, node)]));
                }
            }
            Trigger::Closest(selector) => {
                for (i, node) in matches.into_iter().enumerate() {
                    let trigger = dom
                        .closest(&node, selector)
                        .unwrap_or_else(|| node.clone());
                    observers.push(build(trigger, vec![(i, node)]));
                }
            }
            Trigger::First => {
                let trigger = matches[0].clone();
                observers.push(build(trigger, matches.into_iter().enumerate().collect()));
            }
            Trigger::Section(id) => {
                if let Some(trigger) = dom.find_id(id) {
                    observers.push(build(trigger, matches.into_iter().enumerate().collect()));
                }
            }
            Trigger::Document => {
                observers.push(build(
                    dom.root(),
                    matches.into_iter().enumerate().collect(),
                ));
            }
        }
    }
    observers
}

impl<N: Clone + PartialEq + std::fmt::Debug> ScrollObserver<N> {
    fn new<D: Dom<Node = N>>(
        dom: &D,
        entry: &'static EffectEntry,
        trigger: N,
        members: Vec<(usize, N)>,
        count: usize,
        sections: &[SectionTarget],
        low: bool,
    ) -> Self {
        let shaping = entry.fallback.shaping(low);
        let time = entry.fallback.time_scale(low);
        let (stagger, drive) = match entry.mode {
            Mode::Scrub { window, lag } => (
                None,
                Drive::Scrub {
                    window,
                    lag,
                    shown: None,
                },
            ),
            Mode::Reveal {
                threshold,
                duration,
                ease,
                stagger,
            } => (
                Some(stagger),
                Drive::Reveal {
                    threshold,
                    duration: duration * time,
                    ease,
                    state: RevealState::Armed,
                    fired: 0,
                },
            ),
        };
        let targets = members
            .into_iter()
            .map(|(index, node)| {
                let (from, to) = match entry.motion {
                    Motion::Tween { from, to, .. } => {
                        (from.resolve(index, shaping), to.resolve(index, shaping))
                    }
                    _ => {
                        let rest = Keyframe::IDENTITY.resolve(index, shaping);
                        (rest, rest)
                    }
                };
                let count_to = match entry.motion {
                    Motion::Counter { attribute, .. } => dom
                        .attribute(&node, attribute)
                        .and_then(|v| v.trim().parse::<u32>().ok())
                        .unwrap_or(0),
                    _ => 0,
                };
                Tracked {
                    node,
                    delay: stagger.map_or(0.0, |s| s.delay(index, count) * time),
                    from,
                    to,
                    count_to,
                    written: None,
                }
            })
            .collect();
        let perspective = match entry.motion {
            Motion::Tween { perspective, .. } if !shaping.flat => perspective,
            _ => None,
        };
        let palette = match entry.motion {
            Motion::Glow => glow_palette(sections),
            _ => Vec::new(),
        };
        Self {
            entry,
            trigger,
            document: matches!(entry.trigger, Trigger::Document),
            targets,
            perspective,
            palette,
            span: Span::default(),
            drive,
        }
    }

    pub fn name(&self) -> &'static str {
        self.entry.name
    }

    pub fn trigger(&self) -> &N {
        &self.trigger
    }

    pub fn targets(&self) -> impl Iterator<Item = &N> {
        self.targets.iter().map(|t| &t.node)
    }

    /// Start delays in seconds, in document order.
    pub fn delays(&self) -> Vec<f64> {
        self.targets.iter().map(|t| t.delay).collect()
    }

    pub fn is_scrub(&self) -> bool {
        matches!(self.drive, Drive::Scrub { .. })
    }

    pub fn reveal_state(&self) -> Option<RevealState> {
        match self.drive {
            Drive::Reveal { state, .. } => Some(state),
            Drive::Scrub { .. } => None,
        }
    }

    /// How many times the reveal has fired this mount (0 or 1).
    pub fn times_fired(&self) -> u32 {
        match self.drive {
            Drive::Reveal { fired, .. } => fired,
            Drive::Scrub { .. } => 0,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// `(node, property)` pairs this observer writes.
    pub fn claims(&self) -> Vec<(N, &'static str)> {
        let props = self.entry.motion.claims();
        self.targets
            .iter()
            .flat_map(|t| props.iter().map(move |p| (t.node.clone(), *p)))
            .collect()
    }

    /// Geometry read for the trigger; the only layout read an observer does.
    pub fn read_bounds<D: Dom<Node = N>>(&self, dom: &D, viewport: &Viewport) -> Bounds {
        if self.document {
            Bounds {
                top: 0.0,
                height: viewport.document_height,
            }
        } else {
            dom.bounds(&self.trigger)
        }
    }

    pub fn set_geometry(&mut self, bounds: Bounds, viewport_height: f64) {
        self.span = match &self.drive {
            Drive::Scrub { window, .. } => window.resolve(bounds, viewport_height),
            Drive::Reveal { threshold, .. } => {
                Span::at(threshold.scroll_position(bounds, viewport_height))
            }
        };
    }

    /// Instantaneous scrub progress for a scroll position, clamped to the
    /// activation window. Reveals report 0 before the threshold, 1 after.
    pub fn progress_at(&self, scroll_y: f64) -> f64 {
        self.span.progress(scroll_y)
    }

    /// Initial state: reveal targets jump to their starting pose.
    pub fn prime(&mut self, out: &mut Vec<Write<N>>) {
        if let Some(origin) = self.origin() {
            for t in &self.targets {
                out.push(Write::Style {
                    node: t.node.clone(),
                    property: "transform-origin",
                    value: origin.to_string(),
                });
            }
        }
        if matches!(self.drive, Drive::Reveal { .. }) {
            for i in 0..self.targets.len() {
                self.sample(i, 0.0, out);
            }
        }
    }

    fn origin(&self) -> Option<&'static str> {
        match self.entry.motion {
            Motion::Tween { origin, .. } => origin,
            _ => None,
        }
    }

    /// Advances one frame against a shared scroll snapshot. Returns true
    /// while the observer still needs frames without further scrolling.
    pub fn advance(&mut self, scroll_y: f64, now: f64, dt: f64, out: &mut Vec<Write<N>>) -> bool {
        let span = self.span;
        match &mut self.drive {
            Drive::Scrub { lag, shown, .. } => {
                let target = span.progress(scroll_y);
                let next = match *shown {
                    Some(prev) if *lag > 0.0 => {
                        let blend = 1.0 - (-(dt / 1000.0) / *lag).exp();
                        let next = prev + (target - prev) * blend;
                        if (target - next).abs() < SETTLE_EPSILON {
                            target
                        } else {
                            next
                        }
                    }
                    _ => target,
                };
                *shown = Some(next);
                let easing = next != target;
                for i in 0..self.targets.len() {
                    self.sample(i, next, out);
                }
                easing
            }
            Drive::Reveal {
                duration,
                ease,
                state,
                fired,
                ..
            } => {
                if *state == RevealState::Armed && span.reached(scroll_y) {
                    *state = RevealState::Playing { since: now };
                    *fired += 1;
                }
                let RevealState::Playing { since } = *state else {
                    return false;
                };
                let (duration, ease) = (*duration, *ease);
                let elapsed = (now - since) / 1000.0;
                let mut finished = true;
                for i in 0..self.targets.len() {
                    let local = if duration > 0.0 {
                        ((elapsed - self.targets[i].delay) / duration).clamp(0.0, 1.0)
                    } else if elapsed >= self.targets[i].delay {
                        1.0
                    } else {
                        0.0
                    };
                    finished &= local >= 1.0;
                    self.sample(i, ease.apply(local), out);
                }
                if finished {
                    if let Drive::Reveal { state, .. } = &mut self.drive {
                        *state = RevealState::Done;
                    }
                }
                !finished
            }
        }
    }

    /// Queues the writes for target `i` at curve position `t`, unless that
    /// exact position was already written.
    fn sample(&mut self, i: usize, t: f64, out: &mut Vec<Write<N>>) {
        let target = &mut self.targets[i];
        if target.written == Some(t) {
            return;
        }
        target.written = Some(t);
        let node = target.node.clone();
        match self.entry.motion {
            Motion::Tween { .. } => {
                let pose = target.from.lerp(&target.to, t);
                if !target.from.same_transform(&target.to) {
                    out.push(Write::Style {
                        node: node.clone(),
                        property: "transform",
                        value: pose.transform(self.perspective),
                    });
                }
                if target.from.opacity != target.to.opacity {
                    out.push(Write::Style {
                        node,
                        property: "opacity",
                        value: fmt_num(pose.opacity),
                    });
                }
            }
            Motion::Counter { suffix, .. } => {
                let value = (target.count_to as f64 * t).round() as u32;
                out.push(Write::Text {
                    node,
                    text: format!("{value}{suffix}"),
                });
            }
            Motion::Glow => {
                out.push(Write::Style {
                    node,
                    property: "background",
                    value: glow_background(&self.palette, t),
                });
            }
        }
    }
}

/// Radial wash whose colour and height follow page progress.
pub fn glow_background(palette: &[Rgb], t: f64) -> String {
    let color = Rgb::sample(palette, t);
    format!(
        "radial-gradient(60% 50% at 50% {}%, {} 0%, transparent 70%)",
        fmt_num(20.0 + 60.0 * t.clamp(0.0, 1.0)),
        color.rgba(0.16)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::catalog::{find, CATALOG};
    use crate::motion::memory::MemoryDom;
    use crate::motion::sections::SECTIONS;
    use indextree::NodeId;

    const DESKTOP: CapabilityProfile = CapabilityProfile {
        reduced_motion: false,
        low_capability: false,
    };
    const PHONE: CapabilityProfile = CapabilityProfile {
        reduced_motion: false,
        low_capability: true,
    };

    fn single(entry: &'static EffectEntry) -> &'static [EffectEntry] {
        std::slice::from_ref(entry)
    }

    fn apply(dom: &mut MemoryDom, writes: Vec<Write<NodeId>>) {
        for w in writes {
            w.apply(dom);
        }
    }

    fn measured(dom: &MemoryDom, observers: &mut [ScrollObserver<NodeId>]) {
        let viewport = dom.viewport();
        for o in observers.iter_mut() {
            let bounds = o.read_bounds(dom, &viewport);
            o.set_geometry(bounds, viewport.height);
        }
    }

    #[test]
    fn test_missing_targets_register_nothing() {
        let dom = MemoryDom::default();
        let observers = register(&dom, CATALOG, SECTIONS, DESKTOP);
        // only the document-level progress bar could match, and it is absent
        assert!(observers.is_empty());
    }

    #[test]
    fn test_section_trigger_requires_the_section() {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        dom.append(body, "div", &[("class", "hero-blob")]);
        let entry = find("hero-blobs").unwrap();
        assert!(register(&dom, single(entry), SECTIONS, DESKTOP).is_empty());

        let home = dom.append(body, "section", &[("id", "home")]);
        dom.append(home, "div", &[("class", "hero-blob")]);
        let observers = register(&dom, single(entry), SECTIONS, DESKTOP);
        assert_eq!(observers.len(), 1);
        assert_eq!(observers[0].trigger(), &home);
        assert_eq!(observers[0].targets().count(), 2);
    }

    #[test]
    fn test_own_trigger_creates_one_observer_per_element() {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        for _ in 0..3 {
            dom.append(body, "div", &[("class", "gsap-exp-card")]);
        }
        let observers = register(&dom, single(find("experience-cards").unwrap()), SECTIONS, DESKTOP);
        assert_eq!(observers.len(), 3);
        for o in &observers {
            assert_eq!(o.targets().next(), Some(o.trigger()));
        }
    }

    #[test]
    fn test_scrub_progress_is_clamped_outside_window() {
        let mut dom = MemoryDom::new(1440.0, 1000.0);
        let body = dom.body();
        let line = dom.append(body, "div", &[("class", "gsap-timeline-line")]);
        dom.set_bounds(line, 3000.0, 1200.0);
        let mut observers = register(&dom, single(find("timeline-line").unwrap()), SECTIONS, DESKTOP);
        measured(&dom, &mut observers);
        let o = &observers[0];
        // top 80% -> 2200, bottom 20% -> 4000
        assert_eq!(o.span(), Span { start: 2200.0, end: 4000.0 });
        for before in [-1000.0, 0.0, 2199.0, 2200.0] {
            assert_eq!(o.progress_at(before), 0.0);
        }
        for after in [4000.0, 4001.0, 1e9] {
            assert_eq!(o.progress_at(after), 1.0);
        }
        assert_eq!(o.progress_at(3100.0), 0.5);
    }

    #[test]
    fn test_scrub_writes_boundary_pose_outside_window() {
        let mut dom = MemoryDom::new(1440.0, 1000.0);
        let body = dom.body();
        let line = dom.append(body, "div", &[("class", "gsap-timeline-line")]);
        dom.set_bounds(line, 3000.0, 1200.0);
        let mut observers = register(&dom, single(find("timeline-line").unwrap()), SECTIONS, DESKTOP);
        measured(&dom, &mut observers);

        let mut out = Vec::new();
        observers[0].prime(&mut out);
        observers[0].advance(0.0, 0.0, 0.0, &mut out);
        apply(&mut dom, out);
        assert_eq!(dom.style(line, "transform-origin"), Some("top center"));
        assert_eq!(
            dom.style(line, "transform"),
            Some("translate3d(0px, 0px, 0px) scaleY(0)")
        );

        // a jump far past the window, with no lag history, lands exactly on 1
        let mut fresh = register(&dom, single(find("timeline-line").unwrap()), SECTIONS, DESKTOP);
        measured(&dom, &mut fresh);
        let mut out = Vec::new();
        fresh[0].advance(50_000.0, 0.0, 0.0, &mut out);
        apply(&mut dom, out);
        assert_eq!(dom.style(line, "transform"), Some("translate3d(0px, 0px, 0px)"));
    }

    #[test]
    fn test_scrub_lag_eases_toward_target() {
        let mut dom = MemoryDom::new(1440.0, 1000.0);
        let body = dom.body();
        let line = dom.append(body, "div", &[("class", "gsap-timeline-line")]);
        dom.set_bounds(line, 3000.0, 1200.0);
        let mut observers = register(&dom, single(find("timeline-line").unwrap()), SECTIONS, DESKTOP);
        measured(&dom, &mut observers);
        let o = &mut observers[0];

        let mut out = Vec::new();
        assert!(!o.advance(0.0, 0.0, 0.0, &mut out));
        // jump to the end: the shown value trails behind
        assert!(o.advance(4000.0, 16.0, 16.0, &mut out));
        let mut frames = 0;
        let mut now = 16.0;
        while o.advance(4000.0, now, 16.0, &mut out) {
            now += 16.0;
            frames += 1;
            assert!(frames < 1000, "scrub never settled");
        }
        // 1.5s lag settles within a handful of seconds at 60fps
        assert!(frames > 10);
    }

    #[test]
    fn test_scrub_does_not_rewrite_settled_values() {
        let mut dom = MemoryDom::new(1440.0, 1000.0);
        let body = dom.body();
        let line = dom.append(body, "div", &[("class", "gsap-timeline-line")]);
        dom.set_bounds(line, 3000.0, 1200.0);
        let mut observers = register(&dom, single(find("timeline-line").unwrap()), SECTIONS, DESKTOP);
        measured(&dom, &mut observers);

        let mut out = Vec::new();
        observers[0].advance(0.0, 0.0, 0.0, &mut out);
        assert_eq!(out.len(), 1);
        // still before the window: nothing to write
        let mut out = Vec::new();
        observers[0].advance(1000.0, 16.0, 16.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut dom = MemoryDom::new(1440.0, 1000.0);
        let body = dom.body();
        let footer = dom.append(body, "footer", &[]);
        dom.set_bounds(footer, 4000.0, 300.0);
        let mut observers = register(&dom, single(find("footer").unwrap()), SECTIONS, DESKTOP);
        measured(&dom, &mut observers);
        let o = &mut observers[0];
        // top 95% -> 3050
        assert_eq!(o.span().start, 3050.0);

        let mut out = Vec::new();
        o.prime(&mut out);
        apply(&mut dom, out);
        assert_eq!(dom.style(footer, "opacity"), Some("0"));

        let mut out = Vec::new();
        let mut now = 0.0;
        for scroll in [0.0, 3100.0, 100.0, 3100.0, 0.0, 3500.0] {
            for _ in 0..120 {
                o.advance(scroll, now, 16.0, &mut out);
                now += 16.0;
            }
        }
        apply(&mut dom, out);
        assert_eq!(o.times_fired(), 1);
        assert_eq!(o.reveal_state(), Some(RevealState::Done));
        assert_eq!(dom.style(footer, "opacity"), Some("1"));
        assert_eq!(dom.style(footer, "transform"), Some("translate3d(0px, 0px, 0px)"));
    }

    #[test]
    fn test_reveal_past_threshold_on_mount_plays_immediately() {
        let mut dom = MemoryDom::new(1440.0, 1000.0);
        let body = dom.body();
        let h = dom.append(body, "h2", &[("data-gsap-heading", "")]);
        dom.set_bounds(h, 100.0, 60.0);
        let mut observers = register(&dom, single(find("heading").unwrap()), SECTIONS, DESKTOP);
        measured(&dom, &mut observers);
        let mut out = Vec::new();
        assert!(observers[0].advance(0.0, 0.0, 0.0, &mut out));
        assert_eq!(observers[0].times_fired(), 1);
    }

    #[test]
    fn test_group_stagger_follows_document_order() {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        let grid = dom.append(body, "div", &[]);
        for _ in 0..7 {
            dom.append(grid, "div", &[("class", "gsap-skill-item")]);
        }
        let observers = register(&dom, single(find("skill-grid").unwrap()), SECTIONS, DESKTOP);
        assert_eq!(observers.len(), 1);
        let delays = observers[0].delays();
        assert_eq!(delays.len(), 7);
        assert_eq!(delays[0], 0.0);
        assert!((delays[6] - 0.6).abs() < 1e-9);
        assert!(delays.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn test_group_reveal_plays_items_in_order() {
        let mut dom = MemoryDom::new(1440.0, 1000.0);
        let body = dom.body();
        let items = (0..3)
            .map(|_| dom.append(body, "div", &[("class", "gsap-project-card")]))
            .collect::<Vec<_>>();
        dom.set_bounds(items[0], 500.0, 400.0);
        let mut observers = register(&dom, single(find("project-cards").unwrap()), SECTIONS, DESKTOP);
        measured(&dom, &mut observers);
        let o = &mut observers[0];

        let mut out = Vec::new();
        o.prime(&mut out);
        apply(&mut dom, out);
        assert_eq!(
            dom.style(items[2], "transform"),
            Some("perspective(800px) translate3d(0px, 80px, 0px) rotateX(12deg)")
        );

        // fire, then sample 0.2s in: first card moving, third still waiting
        let mut out = Vec::new();
        o.advance(0.0, 1000.0, 0.0, &mut out);
        o.advance(0.0, 1200.0, 200.0, &mut out);
        apply(&mut dom, out);
        let first = dom.style(items[0], "opacity").unwrap().parse::<f64>().unwrap();
        let third = dom.style(items[2], "opacity").unwrap().parse::<f64>().unwrap();
        assert!(first > 0.0);
        assert_eq!(third, 0.0);
    }

    #[test]
    fn test_counter_counts_to_target_with_suffix() {
        let mut dom = MemoryDom::new(1440.0, 1000.0);
        let body = dom.body();
        let stat = dom.append(
            body,
            "span",
            &[("class", "gsap-stat-number"), ("data-target", "50")],
        );
        dom.set_bounds(stat, 2000.0, 40.0);
        let mut observers = register(&dom, single(find("stat-counter").unwrap()), SECTIONS, DESKTOP);
        measured(&dom, &mut observers);
        let o = &mut observers[0];

        let mut out = Vec::new();
        o.prime(&mut out);
        apply(&mut dom, out);
        assert_eq!(dom.text(stat), Some("0+"));

        let mut seen = Vec::new();
        let mut now = 0.0;
        loop {
            let mut out = Vec::new();
            let running = o.advance(1500.0, now, 16.0, &mut out);
            apply(&mut dom, out);
            seen.push(dom.text(stat).unwrap().to_string());
            now += 16.0;
            if !running {
                break;
            }
            assert!(now < 10_000.0);
        }
        let values = seen
            .iter()
            .map(|s| s.trim_end_matches('+').parse::<u32>().unwrap())
            .collect::<Vec<_>>();
        assert!(values.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(seen.last().map(String::as_str), Some("50+"));
        // 2.2s at 16ms frames
        assert!(now >= 2200.0);
    }

    #[test]
    fn test_counter_without_target_counts_to_zero() {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        dom.append(body, "span", &[("class", "gsap-stat-number"), ("data-target", "lots")]);
        let observers = register(&dom, single(find("stat-counter").unwrap()), SECTIONS, DESKTOP);
        assert_eq!(observers[0].targets[0].count_to, 0);
    }

    #[test]
    fn test_low_capability_degrades_per_entry() {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        let a = dom.append(body, "div", &[("class", "gsap-exp-card")]);
        let b = dom.append(body, "div", &[("class", "gsap-exp-card")]);
        let entry = single(find("experience-cards").unwrap());

        let mut desktop = register(&dom, entry, SECTIONS, DESKTOP);
        let mut phone = register(&dom, entry, SECTIONS, PHONE);
        let mut out = Vec::new();
        for o in desktop.iter_mut().chain(phone.iter_mut()) {
            o.prime(&mut out);
        }
        let transforms = out
            .into_iter()
            .filter_map(|w| match w {
                Write::Style {
                    node,
                    property: "transform",
                    value,
                } => Some((node, value)),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(
            transforms,
            vec![
                (a, "translate3d(-70px, 20px, 0px)".to_string()),
                (b, "translate3d(70px, 20px, 0px)".to_string()),
                (a, "translate3d(-35px, 10px, 0px)".to_string()),
                (b, "translate3d(-35px, 10px, 0px)".to_string()),
            ]
        );
    }

    #[test]
    fn test_low_capability_drops_perspective_and_skips_costly_entries() {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        let card = dom.append(body, "div", &[("class", "gsap-project-card")]);
        let section = dom.append(body, "section", &[]);
        dom.append(section, "div", &[("class", "gsap-section-bg")]);

        let observers = register(&dom, CATALOG, SECTIONS, PHONE);
        assert!(observers.iter().all(|o| o.name() != "section-backdrop"));
        let cards = observers.iter().find(|o| o.name() == "project-cards").unwrap();
        assert_eq!(cards.perspective, None);
        assert_eq!(cards.targets[0].from.rotate_x, 0.0);
        assert_eq!(cards.targets[0].node, card);
    }

    #[test]
    fn test_parent_trigger() {
        let mut dom = MemoryDom::default();
        let body = dom.body();
        let section = dom.append(body, "section", &[]);
        let bg = dom.append(section, "div", &[("class", "gsap-section-bg")]);
        let observers = register(&dom, single(find("section-backdrop").unwrap()), SECTIONS, DESKTOP);
        assert_eq!(observers[0].trigger(), &section);
        assert_eq!(observers[0].targets().next(), Some(&bg));
    }

    #[test]
    fn test_document_trigger_spans_whole_page() {
        let mut dom = MemoryDom::new(1440.0, 1000.0);
        let body = dom.body();
        let bar = dom.append(body, "div", &[("data-scroll-progress", "")]);
        let footer = dom.append(body, "footer", &[]);
        dom.set_bounds(footer, 5000.0, 1000.0);
        let mut observers = register(&dom, single(find("scroll-progress").unwrap()), SECTIONS, DESKTOP);
        measured(&dom, &mut observers);
        assert_eq!(observers[0].span(), Span { start: 0.0, end: 5000.0 });

        let mut out = Vec::new();
        observers[0].advance(2500.0, 0.0, 0.0, &mut out);
        apply(&mut dom, out);
        assert_eq!(
            dom.style(bar, "transform"),
            Some("translate3d(0px, 0px, 0px) scaleX(0.5)")
        );
    }

    #[test]
    fn test_glow_background_walks_palette() {
        let palette = glow_palette(SECTIONS);
        let start = glow_background(&palette, 0.0);
        let end = glow_background(&palette, 1.0);
        assert!(start.contains("rgba(59, 130, 246, 0.16)"));
        assert!(start.contains("at 50% 20%"));
        assert!(end.contains("at 50% 80%"));
        assert_ne!(start, end);
    }
}
