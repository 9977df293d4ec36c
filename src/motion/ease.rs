#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power3Out,
    BackOut(f64),
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

/// A translation amount, either fixed or cycling across a collection in
/// document order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Fixed(f64),
    Cycle(&'static [f64]),
}

impl Amount {
    pub const ZERO: Amount = Amount::Fixed(0.0);

    pub fn resolve(self, index: usize, uniform: bool) -> f64 {
        match self {
            Amount::Fixed(v) => v,
            Amount::Cycle([]) => 0.0,
            Amount::Cycle(values) if uniform => values[0],
            Amount::Cycle(values) => values[index % values.len()],
        }
    }
}

/// How a keyframe is bent before it is resolved for one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shaping {
    pub travel: f64,
    pub uniform: bool,
    pub flat: bool,
}

impl Shaping {
    pub const FULL: Shaping = Shaping {
        travel: 1.0,
        uniform: false,
        flat: false,
    };
}

/// Declarative end state of a tween. Unset channels sit at identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub x: Amount,
    pub y: Amount,
    pub rotate: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub skew_y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub opacity: f64,
}

impl Keyframe {
    pub const IDENTITY: Keyframe = Keyframe {
        x: Amount::ZERO,
        y: Amount::ZERO,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        skew_y: 0.0,
        scale: 1.0,
        scale_x: 1.0,
        scale_y: 1.0,
        opacity: 1.0,
    };

    pub const fn x(self, x: f64) -> Self {
        Self {
            x: Amount::Fixed(x),
            ..self
        }
    }

    pub const fn y(self, y: f64) -> Self {
        Self {
            y: Amount::Fixed(y),
            ..self
        }
    }

    pub const fn x_cycle(self, values: &'static [f64]) -> Self {
        Self {
            x: Amount::Cycle(values),
            ..self
        }
    }

    pub const fn y_cycle(self, values: &'static [f64]) -> Self {
        Self {
            y: Amount::Cycle(values),
            ..self
        }
    }

    pub const fn rotate(self, rotate: f64) -> Self {
        Self { rotate, ..self }
    }

    pub const fn rotate_x(self, rotate_x: f64) -> Self {
        Self { rotate_x, ..self }
    }

    pub const fn rotate_y(self, rotate_y: f64) -> Self {
        Self { rotate_y, ..self }
    }

    pub const fn skew_y(self, skew_y: f64) -> Self {
        Self { skew_y, ..self }
    }

    pub const fn scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub const fn scale_x(self, scale_x: f64) -> Self {
        Self { scale_x, ..self }
    }

    pub const fn scale_y(self, scale_y: f64) -> Self {
        Self { scale_y, ..self }
    }

    pub const fn opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub fn resolve(&self, index: usize, shaping: Shaping) -> Pose {
        let (rotate_x, rotate_y) = if shaping.flat {
            (0.0, 0.0)
        } else {
            (self.rotate_x, self.rotate_y)
        };
        Pose {
            x: self.x.resolve(index, shaping.uniform) * shaping.travel,
            y: self.y.resolve(index, shaping.uniform) * shaping.travel,
            rotate: self.rotate,
            rotate_x,
            rotate_y,
            skew_y: self.skew_y,
            scale: self.scale,
            scale_x: self.scale_x,
            scale_y: self.scale_y,
            opacity: self.opacity,
        }
    }
}

/// A concrete, per-target set of visual parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub skew_y: f64,
    pub scale: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub opacity: f64,
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Two decimals, and never a negative zero.
pub fn fmt_num(v: f64) -> String {
    let v = (v * 100.0).round() / 100.0;
    if v == 0.0 {
        "0".to_string()
    } else {
        format!("{v}")
    }
}

impl Pose {
    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        Pose {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
            rotate: lerp(self.rotate, to.rotate, t),
            rotate_x: lerp(self.rotate_x, to.rotate_x, t),
            rotate_y: lerp(self.rotate_y, to.rotate_y, t),
            skew_y: lerp(self.skew_y, to.skew_y, t),
            scale: lerp(self.scale, to.scale, t),
            scale_x: lerp(self.scale_x, to.scale_x, t),
            scale_y: lerp(self.scale_y, to.scale_y, t),
            opacity: lerp(self.opacity, to.opacity, t),
        }
    }

    pub fn same_transform(&self, other: &Pose) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.rotate == other.rotate
            && self.rotate_x == other.rotate_x
            && self.rotate_y == other.rotate_y
            && self.skew_y == other.skew_y
            && self.scale == other.scale
            && self.scale_x == other.scale_x
            && self.scale_y == other.scale_y
    }

    /// CSS `transform` value. Translation is always present so the element
    /// keeps its own compositing layer for the whole animation.
    pub fn transform(&self, perspective: Option<f64>) -> String {
        let mut parts = Vec::with_capacity(8);
        if let Some(p) = perspective {
            parts.push(format!("perspective({}px)", fmt_num(p)));
        }
        parts.push(format!(
            "translate3d({}px, {}px, 0px)",
            fmt_num(self.x),
            fmt_num(self.y)
        ));
        if self.rotate != 0.0 {
            parts.push(format!("rotate({}deg)", fmt_num(self.rotate)));
        }
        if self.rotate_x != 0.0 {
            parts.push(format!("rotateX({}deg)", fmt_num(self.rotate_x)));
        }
        if self.rotate_y != 0.0 {
            parts.push(format!("rotateY({}deg)", fmt_num(self.rotate_y)));
        }
        if self.skew_y != 0.0 {
            parts.push(format!("skewY({}deg)", fmt_num(self.skew_y)));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", fmt_num(self.scale)));
        }
        if self.scale_x != 1.0 {
            parts.push(format!("scaleX({})", fmt_num(self.scale_x)));
        }
        if self.scale_y != 1.0 {
            parts.push(format!("scaleY({})", fmt_num(self.scale_y)));
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn mix(self, other: Rgb, t: f64) -> Rgb {
        let ch = |a: u8, b: u8| lerp(a as f64, b as f64, t.clamp(0.0, 1.0)).round() as u8;
        Rgb(ch(self.0, other.0), ch(self.1, other.1), ch(self.2, other.2))
    }

    /// Piecewise-linear sample across evenly spaced stops.
    pub fn sample(stops: &[Rgb], t: f64) -> Rgb {
        match stops {
            [] => Rgb(0, 0, 0),
            [only] => *only,
            _ => {
                let t = t.clamp(0.0, 1.0);
                let scaled = t * (stops.len() - 1) as f64;
                let i = (scaled.floor() as usize).min(stops.len() - 2);
                stops[i].mix(stops[i + 1], scaled - i as f64)
            }
        }
    }

    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, fmt_num(alpha))
    }
}
