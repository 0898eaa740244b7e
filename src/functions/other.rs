/// Single-argument exponential, rounding and sign functions. Names are case-insensitive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Miscellaneous {
    Exp,
    Ln,
    Log10,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
    Round,
    Signum,
}

impl Miscellaneous {
    pub const ALL: [Miscellaneous; 10] = [
        Miscellaneous::Exp,
        Miscellaneous::Ln,
        Miscellaneous::Log10,
        Miscellaneous::Sqrt,
        Miscellaneous::Cbrt,
        Miscellaneous::Abs,
        Miscellaneous::Floor,
        Miscellaneous::Ceil,
        Miscellaneous::Round,
        Miscellaneous::Signum,
    ];

    pub fn lookup(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "exp" => Some(Self::Exp),
            "log" | "ln" => Some(Self::Ln),
            "log10" | "lg" => Some(Self::Log10),
            "sqrt" => Some(Self::Sqrt),
            "cbrt" => Some(Self::Cbrt),
            "abs" => Some(Self::Abs),
            "floor" => Some(Self::Floor),
            "ceil" => Some(Self::Ceil),
            "round" => Some(Self::Round),
            "sign" | "signum" => Some(Self::Signum),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Signum => "signum",
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Exp => value.exp(),
            Self::Ln => value.ln(),
            Self::Log10 => value.log10(),
            Self::Sqrt => value.sqrt(),
            Self::Cbrt => value.cbrt(),
            Self::Abs => value.abs(),
            Self::Floor => value.floor(),
            Self::Ceil => value.ceil(),
            Self::Round => round_half_up(value),
            Self::Signum => signum(value),
        }
    }
}

/// Rounds to the nearest integer, ties towards positive infinity.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// -1, 0 or 1. Zero keeps its sign and NaN stays NaN, unlike `f64::signum`.
fn signum(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        value
    } else {
        value.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(Miscellaneous::lookup("log"), Some(Miscellaneous::Ln));
        assert_eq!(Miscellaneous::lookup("LN"), Some(Miscellaneous::Ln));
        assert_eq!(Miscellaneous::lookup("lg"), Some(Miscellaneous::Log10));
        assert_eq!(Miscellaneous::lookup("Log10"), Some(Miscellaneous::Log10));
        assert_eq!(Miscellaneous::lookup("sign"), Some(Miscellaneous::Signum));
        assert_eq!(Miscellaneous::lookup("log2"), None);
    }

    #[test]
    fn test_logarithms() {
        assert_eq!(Miscellaneous::Ln.apply(1.0), 0.0);
        assert_eq!(Miscellaneous::Log10.apply(1000.0), 3.0);
        assert!(Miscellaneous::Ln.apply(-1.0).is_nan());
        assert_eq!(Miscellaneous::Log10.apply(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_roots() {
        assert_eq!(Miscellaneous::Sqrt.apply(9.0), 3.0);
        assert!(Miscellaneous::Sqrt.apply(-9.0).is_nan());
        assert_eq!(Miscellaneous::Cbrt.apply(-27.0), -3.0);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(Miscellaneous::Round.apply(2.5), 3.0);
        assert_eq!(Miscellaneous::Round.apply(-2.5), -2.0);
        assert_eq!(Miscellaneous::Round.apply(-2.6), -3.0);
        assert_eq!(Miscellaneous::Round.apply(0.49999999999999994), 0.0);
        assert_eq!(Miscellaneous::Round.apply(7.0), 7.0);
        assert!(Miscellaneous::Round.apply(f64::NAN).is_nan());
    }

    #[test]
    fn test_floor_ceil_abs() {
        assert_eq!(Miscellaneous::Floor.apply(-1.5), -2.0);
        assert_eq!(Miscellaneous::Ceil.apply(-1.5), -1.0);
        assert_eq!(Miscellaneous::Abs.apply(-4.0), 4.0);
    }

    #[test]
    fn test_signum_preserves_zero_sign() {
        assert_eq!(Miscellaneous::Signum.apply(-3.0), -1.0);
        assert_eq!(Miscellaneous::Signum.apply(42.0), 1.0);

        let negative_zero = Miscellaneous::Signum.apply(-0.0);
        assert_eq!(negative_zero, 0.0);
        assert!(negative_zero.is_sign_negative());

        let positive_zero = Miscellaneous::Signum.apply(0.0);
        assert!(positive_zero.is_sign_positive());

        assert!(Miscellaneous::Signum.apply(f64::NAN).is_nan());
    }

    #[test]
    fn test_names_round_trip_through_lookup() {
        for function in Miscellaneous::ALL {
            assert_eq!(Miscellaneous::lookup(function.name()), Some(function));
        }
    }
}
