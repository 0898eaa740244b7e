/// Two-argument functions. Unlike the single-argument catalogue, names are matched
/// case-sensitively: `min` resolves, `Min` and `MIN` do not.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MultiParam {
    Min,
    Max,
    Pow,
    Atan2,
    Hypot,
}

impl MultiParam {
    pub const ALL: [MultiParam; 5] = [
        MultiParam::Min,
        MultiParam::Max,
        MultiParam::Pow,
        MultiParam::Atan2,
        MultiParam::Hypot,
    ];

    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "pow" => Some(Self::Pow),
            "atan2" => Some(Self::Atan2),
            "hypot" => Some(Self::Hypot),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Pow => "pow",
            Self::Atan2 => "atan2",
            Self::Hypot => "hypot",
        }
    }

    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Min => min(a, b),
            Self::Max => max(a, b),
            Self::Pow => pow(a, b),
            // atan2(y, x)
            Self::Atan2 => a.atan2(b),
            // No overflow protection: hypot(1e200, 1e200) is infinite.
            Self::Hypot => (a * a + b * b).sqrt(),
        }
    }
}

/// `powf` with Java's undefined cases: a NaN exponent, or a base of magnitude one
/// raised to an infinite power, gives NaN instead of 1.
fn pow(a: f64, b: f64) -> f64 {
    if b.is_nan() || (a.abs() == 1.0 && b.is_infinite()) {
        return f64::NAN;
    }
    a.powf(b)
}

/// NaN-propagating minimum that orders -0 below +0.
fn min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    if a == 0.0 && b == 0.0 {
        return if a.is_sign_negative() { a } else { b };
    }
    if a <= b {
        a
    } else {
        b
    }
}

/// NaN-propagating maximum that orders +0 above -0.
fn max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    if a == 0.0 && b == 0.0 {
        return if a.is_sign_positive() { a } else { b };
    }
    if a >= b {
        a
    } else {
        b
    }
}
