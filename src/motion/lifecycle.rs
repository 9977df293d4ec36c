use std::time::Duration;

use super::augment::{augment, restore, Augmentation};
use super::capability::{detect, CapabilityProfile, Platform};
use super::catalog::{EffectEntry, CATALOG};
use super::config::MotionConfig;
use super::dom::{Dom, Write};
use super::registry::{register, ScrollObserver};
use super::sections::{SectionTarget, SECTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not mounted.
    Idle,
    /// Mounted under reduced motion; nothing was touched.
    Inert,
    /// Mounted, waiting for layout to settle.
    Settling,
    Active,
}

/// Proof that a settle was scheduled by a particular mount. Tickets from
/// an earlier mount are refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// Call [`Orchestrator::settle`] with the ticket once `delay` has passed.
    Settle { ticket: SettleTicket, delay: Duration },
    ReducedMotion,
    AlreadyMounted,
}

/// What an unmount released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Teardown {
    pub observers: usize,
    pub nodes: usize,
}

/// Trailing-edge debounce over a millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Debounce {
    window: f64,
    deadline: Option<f64>,
}

impl Debounce {
    fn new(window: Duration) -> Self {
        Self {
            window: window.as_millis() as f64,
            deadline: None,
        }
    }

    fn bump(&mut self, now: f64) {
        self.deadline = Some(now + self.window);
    }

    fn due(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    fn remaining(&self, now: f64) -> Option<Duration> {
        self.deadline
            .map(|d| Duration::from_micros(((d - now).max(0.0) * 1000.0).round() as u64))
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// Owns one document's scroll animations from mount to unmount.
///
/// The controller never schedules anything itself. The host asks it what
/// to wait for (`mount` and `request_refresh` return delays) and calls
/// back in when the wait is over, so every timer is owned by the host
/// and every callback is checked against the current phase and epoch.
pub struct Orchestrator<D: Dom> {
    dom: D,
    config: MotionConfig,
    catalog: &'static [EffectEntry],
    sections: &'static [SectionTarget],
    phase: Phase,
    epoch: u64,
    profile: Option<CapabilityProfile>,
    augmentation: Augmentation<D::Node>,
    observers: Vec<ScrollObserver<D::Node>>,
    debounce: Debounce,
    last_frame: Option<f64>,
}

impl<D: Dom + Platform> Orchestrator<D> {
    pub fn new(dom: D, config: MotionConfig) -> Self {
        Self::with_catalog(dom, config, CATALOG, SECTIONS)
    }

    pub fn with_catalog(
        dom: D,
        config: MotionConfig,
        catalog: &'static [EffectEntry],
        sections: &'static [SectionTarget],
    ) -> Self {
        Self {
            dom,
            debounce: Debounce::new(config.resize_debounce()),
            config,
            catalog,
            sections,
            phase: Phase::Idle,
            epoch: 0,
            profile: None,
            augmentation: Augmentation::default(),
            observers: Vec::new(),
            last_frame: None,
        }
    }

    /// First half of startup: snapshot capabilities and hand back a ticket
    /// for the deferred second half.
    pub fn mount(&mut self) -> MountOutcome {
        if self.phase != Phase::Idle {
            return MountOutcome::AlreadyMounted;
        }
        let profile = detect(&self.dom, self.config.low_capability_breakpoint);
        self.profile = Some(profile);
        if profile.reduced_motion {
            log::debug!("reduced motion requested, scroll animations disabled");
            self.phase = Phase::Inert;
            return MountOutcome::ReducedMotion;
        }
        self.epoch += 1;
        self.phase = Phase::Settling;
        MountOutcome::Settle {
            ticket: SettleTicket { epoch: self.epoch },
            delay: self.config.settle_delay(),
        }
    }

    /// Second half of startup: decorate, register, measure, prime.
    /// Returns false and does nothing for a stale or repeated ticket.
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        if self.phase != Phase::Settling || ticket.epoch != self.epoch {
            return false;
        }
        let profile = self.profile.unwrap_or_default();
        self.augmentation = augment(&mut self.dom, self.sections, profile);
        self.observers = register(&self.dom, self.catalog, self.sections, profile);
        self.measure();

        let mut writes = Vec::new();
        for observer in &mut self.observers {
            observer.prime(&mut writes);
        }
        self.apply(writes);
        self.phase = Phase::Active;
        log::debug!(
            "scroll animations settled: {} observers, {} injected nodes, low capability {}",
            self.observers.len(),
            self.augmentation.nodes.len(),
            profile.low_capability
        );
        true
    }

    /// Notes a resize. Returns how long the host should wait before
    /// calling [`Orchestrator::poll_refresh`], or None when nothing is
    /// mounted to refresh.
    pub fn request_refresh(&mut self, now: f64) -> Option<Duration> {
        if self.phase != Phase::Active {
            return None;
        }
        self.debounce.bump(now);
        self.debounce.remaining(now)
    }

    /// Recomputes all geometry if the resize burst has gone quiet.
    pub fn poll_refresh(&mut self, now: f64) -> bool {
        if self.phase != Phase::Active || !self.debounce.due(now) {
            return false;
        }
        self.measure();
        log::debug!("refreshed {} observer geometries", self.observers.len());
        true
    }

    /// Time left on a pending refresh, if one is armed.
    pub fn pending_refresh(&self, now: f64) -> Option<Duration> {
        self.debounce.remaining(now)
    }

    /// One animation frame. Every observer sees the same scroll snapshot
    /// and all writes land after all observers have run. Returns true
    /// while some observer needs another frame without new scrolling.
    pub fn frame(&mut self, now: f64) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        let max_dt = self.config.max_frame_dt_ms as f64;
        let dt = self
            .last_frame
            .map_or(0.0, |last| (now - last).clamp(0.0, max_dt));
        self.last_frame = Some(now);

        let scroll_y = self.dom.viewport().scroll_y;
        let mut writes = Vec::new();
        let mut running = false;
        for observer in &mut self.observers {
            running |= observer.advance(scroll_y, now, dt, &mut writes);
        }
        self.apply(writes);
        running
    }

    /// Disposes observers, then removes injected nodes, then invalidates
    /// any settle or refresh still in flight.
    pub fn unmount(&mut self) -> Teardown {
        let observers = std::mem::take(&mut self.observers).len();
        let nodes = restore(&mut self.dom, std::mem::take(&mut self.augmentation));
        self.epoch += 1;
        self.debounce.cancel();
        self.last_frame = None;
        self.profile = None;
        let was = std::mem::replace(&mut self.phase, Phase::Idle);
        if was != Phase::Idle {
            log::debug!("scroll animations unmounted: {observers} observers, {nodes} nodes");
        }
        Teardown { observers, nodes }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn profile(&self) -> Option<CapabilityProfile> {
        self.profile
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn active_observers(&self) -> usize {
        self.observers.len()
    }

    pub fn observers(&self) -> &[ScrollObserver<D::Node>] {
        &self.observers
    }

    pub fn injected_nodes(&self) -> &[D::Node] {
        &self.augmentation.nodes
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    fn measure(&mut self) {
        let viewport = self.dom.viewport();
        let bounds = self
            .observers
            .iter()
            .map(|o| o.read_bounds(&self.dom, &viewport))
            .collect::<Vec<_>>();
        for (observer, bounds) in self.observers.iter_mut().zip(bounds) {
            observer.set_geometry(bounds, viewport.height);
        }
    }

    fn apply(&mut self, writes: Vec<Write<D::Node>>) {
        for write in writes {
            write.apply(&mut self.dom);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use indextree::NodeId;

    use super::*;
    use crate::motion::dom::Selector;
    use crate::motion::memory::MemoryDom;

    const SECTION_HEIGHT: f64 = 1000.0;

    /// Appends a section laid out below the previous ones.
    fn section(dom: &mut MemoryDom, id: &str, index: usize) -> NodeId {
        let body = dom.body();
        let host = dom.append(body, "section", &[("id", id)]);
        dom.set_bounds(host, index as f64 * SECTION_HEIGHT, SECTION_HEIGHT);
        host
    }

    /// Appends a tagged target, stacked under its siblings.
    fn place(dom: &mut MemoryDom, host: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let top = dom.element(host).map_or(0.0, |e| e.bounds.top);
        let row = dom.children(host).len() as f64;
        let node = dom.append(host, tag, attributes);
        dom.set_bounds(node, top + 100.0 + row * 60.0, 50.0);
        node
    }

    /// Every section, every tagged target.
    fn portfolio_page() -> MemoryDom {
        let mut dom = MemoryDom::new(1440.0, 900.0);
        let body = dom.body();
        dom.append(body, "div", &[("data-scroll-progress", "")]);
        let heading = [("data-gsap-heading", "")];

        let home = section(&mut dom, "home", 0);
        place(&mut dom, home, "div", &[("class", "hero-blob")]);
        place(&mut dom, home, "div", &[("class", "hero-blob")]);
        place(&mut dom, home, "div", &[("class", "hero-content")]);

        let about = section(&mut dom, "about", 1);
        place(&mut dom, about, "h2", &heading);
        place(&mut dom, about, "p", &[("data-gsap-subheading", "")]);
        place(&mut dom, about, "div", &[("class", "gsap-about-card")]);
        place(&mut dom, about, "p", &[("class", "gsap-bio-text")]);
        place(&mut dom, about, "p", &[("class", "gsap-bio-text")]);
        place(&mut dom, about, "span", &[("class", "gsap-stat-number"), ("data-target", "50")]);
        place(&mut dom, about, "span", &[("class", "gsap-stat-number"), ("data-target", "12")]);

        let skills = section(&mut dom, "skills", 2);
        place(&mut dom, skills, "h2", &heading);
        for _ in 0..3 {
            place(&mut dom, skills, "div", &[("class", "gsap-skill-item")]);
        }
        for _ in 0..2 {
            place(&mut dom, skills, "span", &[("class", "gsap-tech-chip")]);
        }

        let experience = section(&mut dom, "experience", 3);
        place(&mut dom, experience, "h2", &heading);
        place(&mut dom, experience, "div", &[("class", "gsap-timeline-line")]);
        for _ in 0..2 {
            place(&mut dom, experience, "div", &[("class", "gsap-exp-card")]);
        }

        let projects = section(&mut dom, "projects", 4);
        place(&mut dom, projects, "h2", &heading);
        for _ in 0..2 {
            place(&mut dom, projects, "div", &[("class", "gsap-project-card")]);
        }

        let services = section(&mut dom, "services", 5);
        place(&mut dom, services, "div", &[("class", "gsap-section-bg")]);
        place(&mut dom, services, "div", &[("class", "gsap-service-card")]);

        let certificates = section(&mut dom, "certificates", 6);
        for _ in 0..2 {
            place(&mut dom, certificates, "div", &[("class", "gsap-cert-item")]);
        }
        place(&mut dom, certificates, "div", &[("class", "gsap-carousel-row")]);

        let contact = section(&mut dom, "contact", 7);
        place(&mut dom, contact, "div", &[("class", "gsap-contact-item")]);
        place(&mut dom, contact, "form", &[("class", "gsap-contact-form")]);

        let footer = dom.append(body, "footer", &[]);
        dom.set_bounds(footer, 8.0 * SECTION_HEIGHT, 300.0);
        dom
    }

    fn settled(dom: MemoryDom) -> Orchestrator<MemoryDom> {
        let mut orchestrator = Orchestrator::new(dom, MotionConfig::default());
        let MountOutcome::Settle { ticket, .. } = orchestrator.mount() else {
            panic!("expected a settle ticket");
        };
        assert!(orchestrator.settle(ticket));
        orchestrator
    }

    fn scroll_through(orchestrator: &mut Orchestrator<MemoryDom>) {
        let mut now = 0.0;
        let end = orchestrator.dom().viewport().document_height;
        let mut y = 0.0;
        while y <= end {
            orchestrator.dom_mut().scroll_to(y);
            orchestrator.frame(now);
            now += 16.0;
            y += 250.0;
        }
    }

    #[test]
    fn test_repeated_mount_cycles_leave_no_trace() {
        let mut orchestrator = Orchestrator::new(portfolio_page(), MotionConfig::default());
        let nodes_before = orchestrator.dom().node_count();
        let home = orchestrator.dom().find_id("home").unwrap();

        for cycle in 0..5 {
            let MountOutcome::Settle { ticket, delay } = orchestrator.mount() else {
                panic!("cycle {cycle}: mount refused");
            };
            assert_eq!(delay, Duration::from_millis(400));
            assert!(orchestrator.settle(ticket));
            assert!(orchestrator.active_observers() > 0);
            assert!(orchestrator.dom().node_count() > nodes_before);
            scroll_through(&mut orchestrator);

            let teardown = orchestrator.unmount();
            assert!(teardown.nodes > 0);
            assert_eq!(orchestrator.dom().node_count(), nodes_before, "cycle {cycle}");
            assert_eq!(orchestrator.active_observers(), 0);
            assert_eq!(orchestrator.dom().style(home, "position"), None);
            assert_eq!(orchestrator.phase(), Phase::Idle);
        }
    }

    #[test]
    fn test_reduced_motion_is_total_override() {
        let mut dom = portfolio_page();
        dom.set_reduced_motion(true);
        let nodes_before = dom.node_count();
        let mut orchestrator = Orchestrator::new(dom, MotionConfig::default());

        assert_eq!(orchestrator.mount(), MountOutcome::ReducedMotion);
        assert_eq!(orchestrator.phase(), Phase::Inert);
        assert_eq!(orchestrator.active_observers(), 0);
        assert!(orchestrator.injected_nodes().is_empty());
        assert!(!orchestrator.frame(0.0));
        assert_eq!(orchestrator.request_refresh(0.0), None);
        assert_eq!(orchestrator.dom().node_count(), nodes_before);
        assert_eq!(orchestrator.dom().write_count(), 0);

        assert_eq!(orchestrator.unmount(), Teardown::default());
    }

    #[test]
    fn test_partial_page_only_touches_present_sections() {
        let mut dom = MemoryDom::new(1440.0, 900.0);
        let home = section(&mut dom, "home", 0);
        place(&mut dom, home, "div", &[("class", "hero-blob")]);
        let contact = section(&mut dom, "contact", 1);
        place(&mut dom, contact, "div", &[("class", "gsap-contact-item")]);
        let nodes_before = dom.node_count();
        let mut orchestrator = settled(dom);

        let names = orchestrator
            .observers()
            .iter()
            .map(|o| o.name())
            .collect::<HashSet<_>>();
        assert!(!names.contains("skill-grid"));
        assert!(!names.contains("project-cards"));
        assert!(names.contains("hero-blobs"));
        assert!(names.contains("contact-items"));

        let dom = orchestrator.dom();
        let home = dom.find_id("home").unwrap();
        let contact = dom.find_id("contact").unwrap();
        for node in orchestrator.injected_nodes() {
            let in_section = dom
                .closest(node, Selector::Tag("section"))
                .is_some_and(|s| s == home || s == contact);
            let is_glow = dom
                .element(*node)
                .and_then(|e| e.attributes.get("class"))
                .is_some_and(|c| c == "scroll-ambient-glow");
            assert!(in_section || is_glow);
        }
        // two watermarks, one marquee (contact), two orb sets, one glow
        assert_eq!(orchestrator.injected_nodes().len(), 2 + 1 + 8 + 1);

        let injected = orchestrator.injected_nodes().len();
        let teardown = orchestrator.unmount();
        assert_eq!(teardown.nodes, injected);
        assert_eq!(orchestrator.dom().node_count(), nodes_before);
    }

    #[test]
    fn test_unmount_during_settle_window_refuses_ticket() {
        let mut orchestrator = Orchestrator::new(portfolio_page(), MotionConfig::default());
        let nodes_before = orchestrator.dom().node_count();
        let MountOutcome::Settle { ticket, .. } = orchestrator.mount() else {
            panic!("expected a settle ticket");
        };
        orchestrator.unmount();
        assert!(!orchestrator.settle(ticket));
        assert_eq!(orchestrator.dom().node_count(), nodes_before);
        assert_eq!(orchestrator.active_observers(), 0);

        // a fresh mount gets a fresh ticket; the old one stays dead
        let MountOutcome::Settle { ticket: fresh, .. } = orchestrator.mount() else {
            panic!("expected a settle ticket");
        };
        assert_ne!(fresh, ticket);
        assert!(!orchestrator.settle(ticket));
        assert!(orchestrator.settle(fresh));
    }

    #[test]
    fn test_second_mount_does_not_double_register() {
        let mut orchestrator = Orchestrator::new(portfolio_page(), MotionConfig::default());
        let MountOutcome::Settle { ticket, .. } = orchestrator.mount() else {
            panic!("expected a settle ticket");
        };
        assert_eq!(orchestrator.mount(), MountOutcome::AlreadyMounted);
        assert!(orchestrator.settle(ticket));
        let observers = orchestrator.active_observers();
        let nodes = orchestrator.injected_nodes().len();

        assert!(!orchestrator.settle(ticket));
        assert_eq!(orchestrator.mount(), MountOutcome::AlreadyMounted);
        assert_eq!(orchestrator.active_observers(), observers);
        assert_eq!(orchestrator.injected_nodes().len(), nodes);
        assert_eq!(
            orchestrator
                .dom()
                .query_all(Selector::Class("scroll-ambient-glow"))
                .len(),
            1
        );
    }

    #[test]
    fn test_resize_burst_refreshes_once() {
        let mut orchestrator = settled(portfolio_page());
        let timeline = orchestrator
            .observers()
            .iter()
            .position(|o| o.name() == "timeline-line")
            .unwrap();
        let before = orchestrator.observers()[timeline].span();

        orchestrator.dom_mut().resize(1440.0, 600.0);
        assert_eq!(orchestrator.request_refresh(0.0), Some(Duration::from_millis(100)));
        orchestrator.request_refresh(30.0);
        orchestrator.request_refresh(60.0);
        assert!(!orchestrator.poll_refresh(100.0));
        assert_eq!(orchestrator.observers()[timeline].span(), before);
        assert_eq!(orchestrator.pending_refresh(100.0), Some(Duration::from_millis(60)));

        assert!(orchestrator.poll_refresh(160.0));
        assert_ne!(orchestrator.observers()[timeline].span(), before);
        assert!(!orchestrator.poll_refresh(400.0));
    }

    #[test]
    fn test_unmount_cancels_pending_refresh() {
        let mut orchestrator = settled(portfolio_page());
        orchestrator.request_refresh(0.0);
        orchestrator.unmount();
        assert_eq!(orchestrator.pending_refresh(0.0), None);
        assert!(!orchestrator.poll_refresh(1000.0));
    }

    #[test]
    fn test_each_property_has_one_writer() {
        let orchestrator = settled(portfolio_page());
        let mut owners: HashSet<(NodeId, &str)> = HashSet::new();
        for observer in orchestrator.observers() {
            for claim in observer.claims() {
                assert!(owners.insert(claim), "{} fights over {:?}", observer.name(), claim);
            }
        }
        assert!(!owners.is_empty());
    }

    #[test]
    fn test_full_page_registers_every_entry() {
        let orchestrator = settled(portfolio_page());
        let names = orchestrator
            .observers()
            .iter()
            .map(|o| o.name())
            .collect::<HashSet<_>>();
        for entry in CATALOG {
            assert!(names.contains(entry.name), "{} not registered", entry.name);
        }
    }

    #[test]
    fn test_low_capability_page_skips_costly_layers() {
        let mut dom = portfolio_page();
        dom.set_coarse_pointer(true);
        let orchestrator = settled(dom);
        assert_eq!(orchestrator.profile().map(|p| p.low_capability), Some(true));
        assert_eq!(orchestrator.injected_nodes().len(), SECTIONS.len());
        assert!(orchestrator
            .observers()
            .iter()
            .all(|o| o.name() != "orb-drift" && o.name() != "ambient-glow"));
    }

    #[test]
    fn test_nothing_is_written_after_unmount() {
        let mut orchestrator = settled(portfolio_page());
        scroll_through(&mut orchestrator);
        orchestrator.unmount();
        let writes = orchestrator.dom().write_count();
        orchestrator.dom_mut().scroll_to(2000.0);
        assert!(!orchestrator.frame(10_000.0));
        assert!(!orchestrator.poll_refresh(10_000.0));
        assert_eq!(orchestrator.dom().write_count(), writes);
    }

    #[test]
    fn test_frames_go_idle_once_reveals_finish() {
        let mut orchestrator = settled(portfolio_page());
        orchestrator.dom_mut().scroll_to(1000.0);
        let mut now = 0.0;
        let mut frames = 0;
        while orchestrator.frame(now) {
            now += 16.0;
            frames += 1;
            assert!(frames < 2000, "frame loop never went idle");
        }
        let stats = orchestrator.dom().query_all(Selector::Class("gsap-stat-number"));
        assert_eq!(orchestrator.dom().text(stats[0]), Some("50+"));
        assert_eq!(orchestrator.dom().text(stats[1]), Some("12+"));
    }
}
