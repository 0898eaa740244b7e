//! Piecewise formula sets, as entered in the level editor.
//!
//! The editor, not this crate, decides where one piece ends and the next begins: it
//! hands over an ordered list of `(formula, domain)` pairs. Each formula is compiled on
//! its own, so the number of equations a player used is simply the number of pieces
//! submitted, whether or not every piece compiled.

use crate::ast::{CompiledExpression, Compiler};
use crate::error::{CompileError, Result};
use log::debug;

/// An open interval of `x` on which a piece applies. Infinite bounds are allowed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Domain {
    pub lower: f64,
    pub upper: f64,
}

impl Domain {
    pub const ALL: Domain = Domain {
        lower: f64::NEG_INFINITY,
        upper: f64::INFINITY,
    };

    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Builds a domain from bound formulas such as `-0.5` or `8/3`. A missing bound is
    /// unbounded. Bounds must fold to constants; one that reads `x` or `t` is rejected.
    pub fn from_bounds(lower: Option<&str>, upper: Option<&str>) -> Result<Self> {
        Ok(Self {
            lower: lower.map_or(Ok(f64::NEG_INFINITY), constant_bound)?,
            upper: upper.map_or(Ok(f64::INFINITY), constant_bound)?,
        })
    }

    /// `lower < x < upper`.
    pub fn contains(&self, x: f64) -> bool {
        self.lower < x && x < self.upper
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::ALL
    }
}

fn constant_bound(source: &str) -> Result<f64> {
    let compiled = Compiler::compile_expression(source)?;
    compiled.try_const_evaluate().ok_or_else(|| {
        CompileError::parse_error(0, format!("domain bound '{source}' must be a constant"))
    })
}

/// One successfully compiled piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub expression: CompiledExpression,
    pub domain: Domain,
}

/// Per-piece compile outcomes for a submitted piecewise set.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseCompilation {
    outcomes: Vec<Result<Piece>>,
}

impl PiecewiseCompilation {
    /// Compiles each piece independently. A failing piece does not stop the others.
    pub fn compile<'a, I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Domain)>,
    {
        let outcomes: Vec<Result<Piece>> = pieces
            .into_iter()
            .map(|(source, domain)| {
                Compiler::compile_expression(source).map(|expression| Piece { expression, domain })
            })
            .collect();

        debug!(
            "Compiled piecewise set: {} piece(s), {} failed",
            outcomes.len(),
            outcomes.iter().filter(|outcome| outcome.is_err()).count()
        );
        Self { outcomes }
    }

    /// Number of equations the player entered.
    pub fn equation_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn outcomes(&self) -> &[Result<Piece>] {
        &self.outcomes
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.is_ok())
    }

    /// Index and error of every piece that failed to compile.
    pub fn errors(&self) -> impl Iterator<Item = (usize, &CompileError)> {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(index, outcome)| outcome.as_ref().err().map(|err| (index, err)))
    }

    /// The evaluable set, or every failure if any piece did not compile.
    pub fn into_piecewise(self) -> std::result::Result<Piecewise, Vec<(usize, CompileError)>> {
        let mut pieces = Vec::with_capacity(self.outcomes.len());
        let mut errors = Vec::new();
        for (index, outcome) in self.outcomes.into_iter().enumerate() {
            match outcome {
                Ok(piece) => pieces.push(piece),
                Err(err) => errors.push((index, err)),
            }
        }

        if errors.is_empty() {
            Ok(Piecewise { pieces })
        } else {
            Err(errors)
        }
    }
}

/// A fully compiled piecewise set.
#[derive(Debug, Clone, PartialEq)]
pub struct Piecewise {
    pieces: Vec<Piece>,
}

impl Piecewise {
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn equation_count(&self) -> usize {
        self.pieces.len()
    }

    /// Value of the first piece whose domain contains `x`, if any.
    pub fn evaluate(&self, x: f64, t: f64) -> Option<f64> {
        self.pieces
            .iter()
            .find(|piece| piece.domain.contains(x))
            .map(|piece| piece.expression.evaluate(x, t))
    }
}
