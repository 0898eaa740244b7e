/// Single-argument trigonometric and hyperbolic functions. Names are case-insensitive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Trigonometric {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
}

impl Trigonometric {
    pub const ALL: [Trigonometric; 9] = [
        Trigonometric::Sin,
        Trigonometric::Cos,
        Trigonometric::Tan,
        Trigonometric::Asin,
        Trigonometric::Acos,
        Trigonometric::Atan,
        Trigonometric::Sinh,
        Trigonometric::Cosh,
        Trigonometric::Tanh,
    ];

    pub fn lookup(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "asin" | "arcsin" => Some(Self::Asin),
            "acos" | "arccos" => Some(Self::Acos),
            "atan" | "arctan" => Some(Self::Atan),
            "sinh" => Some(Self::Sinh),
            "cosh" => Some(Self::Cosh),
            "tanh" => Some(Self::Tanh),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Sin => value.sin(),
            Self::Cos => value.cos(),
            Self::Tan => value.tan(),
            Self::Asin => value.asin(),
            Self::Acos => value.acos(),
            Self::Atan => value.atan(),
            Self::Sinh => value.sinh(),
            Self::Cosh => value.cosh(),
            Self::Tanh => value.tanh(),
        }
    }
}
