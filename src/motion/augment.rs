use super::capability::CapabilityProfile;
use super::dom::Dom;
use super::ease::Rgb;
use super::registry::glow_background;
use super::sections::{glow_palette, SectionTarget};

/// Orb layers, back to front: (size px, blur px, top, left, opacity).
const ORB_LAYERS: [(u32, u32, &str, &str, &str); 3] = [
    (520, 90, "-12%", "-8%", "0.18"),
    (380, 70, "38%", "58%", "0.14"),
    (260, 50, "68%", "12%", "0.12"),
];

const MARQUEE_REPEAT: usize = 6;

/// Everything the augmentation layer did to the document, kept verbatim
/// until teardown.
#[derive(Debug, Clone, PartialEq)]
pub struct Augmentation<N> {
    /// Injected nodes in creation order; parents precede their children.
    pub nodes: Vec<N>,
    /// Sections given a positioning context, with their prior inline value.
    pub positioned: Vec<(N, Option<String>)>,
}

impl<N> Default for Augmentation<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            positioned: Vec::new(),
        }
    }
}

impl<N> Augmentation<N> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.positioned.is_empty()
    }
}

/// Decorates every section present on the page. Structure is a pure
/// function of the section catalog and the capability profile.
pub fn augment<D: Dom>(
    dom: &mut D,
    sections: &[SectionTarget],
    profile: CapabilityProfile,
) -> Augmentation<D::Node> {
    let mut aug = Augmentation::default();
    let rich = !profile.low_capability;
    let mut any_present = false;

    for section in sections {
        let Some(host) = dom.find_id(section.id) else {
            continue;
        };
        any_present = true;

        if dom.computed_position(&host) == "static" {
            let prior = dom.inline_style(&host, "position");
            dom.set_style(&host, "position", "relative");
            aug.positioned.push((host.clone(), prior));
        }

        if rich {
            inject_orbs(dom, &host, section, &mut aug.nodes);
            if let Some(text) = section.marquee {
                inject_marquee(dom, &host, text, &mut aug.nodes);
            }
        }
        inject_watermark(dom, &host, section.ordinal, &mut aug.nodes);
    }

    if rich && any_present {
        inject_glow(dom, &glow_palette(sections), &mut aug.nodes);
    }
    aug
}

/// Removes injected nodes children-first and restores section styles.
/// Returns the number of nodes removed.
pub fn restore<D: Dom>(dom: &mut D, aug: Augmentation<D::Node>) -> usize {
    let removed = aug.nodes.len();
    for node in aug.nodes.iter().rev() {
        dom.remove(node);
    }
    for (node, prior) in aug.positioned {
        match prior {
            Some(value) => dom.set_style(&node, "position", &value),
            None => dom.remove_style(&node, "position"),
        }
    }
    removed
}

fn decorative<D: Dom>(dom: &mut D, class: &str) -> Option<D::Node> {
    let node = dom.create_element("div")?;
    dom.set_attribute(&node, "class", class);
    dom.set_attribute(&node, "aria-hidden", "true");
    dom.set_style(&node, "pointer-events", "none");
    Some(node)
}

fn inject_orbs<D: Dom>(
    dom: &mut D,
    host: &D::Node,
    section: &SectionTarget,
    nodes: &mut Vec<D::Node>,
) {
    let Some(layer) = decorative(dom, "scroll-orbs") else {
        return;
    };
    for (prop, value) in [
        ("position", "absolute"),
        ("inset", "0"),
        ("overflow", "hidden"),
        ("z-index", "0"),
    ] {
        dom.set_style(&layer, prop, value);
    }
    dom.prepend_child(host, &layer);
    nodes.push(layer.clone());

    for (depth, (color, (size, blur, top, left, opacity))) in
        section.colors.iter().zip(ORB_LAYERS).enumerate()
    {
        let Some(orb) = decorative(dom, &format!("scroll-orb scroll-orb-{depth}")) else {
            continue;
        };
        let size = format!("{size}px");
        dom.set_style(&orb, "position", "absolute");
        dom.set_style(&orb, "width", &size);
        dom.set_style(&orb, "height", &size);
        dom.set_style(&orb, "top", top);
        dom.set_style(&orb, "left", left);
        dom.set_style(&orb, "border-radius", "9999px");
        dom.set_style(&orb, "filter", &format!("blur({blur}px)"));
        dom.set_style(&orb, "opacity", opacity);
        dom.set_style(&orb, "background", &orb_fill(*color));
        dom.append_child(&layer, &orb);
        nodes.push(orb);
    }
}

fn orb_fill(color: Rgb) -> String {
    format!(
        "radial-gradient(circle, {} 0%, transparent 70%)",
        color.rgba(0.55)
    )
}

fn inject_marquee<D: Dom>(dom: &mut D, host: &D::Node, text: &str, nodes: &mut Vec<D::Node>) {
    let Some(strip) = decorative(dom, "scroll-marquee") else {
        return;
    };
    for (prop, value) in [
        ("position", "absolute"),
        ("top", "50%"),
        ("left", "0"),
        ("white-space", "nowrap"),
        ("font-size", "10rem"),
        ("font-weight", "800"),
        ("line-height", "1"),
        ("opacity", "0.04"),
        ("z-index", "0"),
    ] {
        dom.set_style(&strip, prop, value);
    }
    dom.set_text(&strip, &marquee_text(text));
    dom.append_child(host, &strip);
    nodes.push(strip);
}

pub fn marquee_text(text: &str) -> String {
    vec![text; MARQUEE_REPEAT].join(" \u{2022} ")
}

fn inject_watermark<D: Dom>(dom: &mut D, host: &D::Node, ordinal: u8, nodes: &mut Vec<D::Node>) {
    let Some(mark) = decorative(dom, "scroll-watermark") else {
        return;
    };
    for (prop, value) in [
        ("position", "absolute"),
        ("top", "2rem"),
        ("right", "2rem"),
        ("font-size", "12rem"),
        ("font-weight", "900"),
        ("line-height", "1"),
        ("opacity", "0.035"),
        ("z-index", "0"),
    ] {
        dom.set_style(&mark, prop, value);
    }
    dom.set_text(&mark, &format!("{ordinal:02}"));
    dom.append_child(host, &mark);
    nodes.push(mark);
}

fn inject_glow<D: Dom>(dom: &mut D, palette: &[Rgb], nodes: &mut Vec<D::Node>) {
    let Some(glow) = decorative(dom, "scroll-ambient-glow") else {
        return;
    };
    for (prop, value) in [("position", "fixed"), ("inset", "0"), ("z-index", "-1")] {
        dom.set_style(&glow, prop, value);
    }
    dom.set_style(&glow, "background", &glow_background(palette, 0.0));
    let root = dom.root();
    dom.append_child(&root, &glow);
    nodes.push(glow);
}
