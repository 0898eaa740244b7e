//! The builtin function catalogue and the resolver the parser consults for call sites.
//!
//! Lookup order is fixed and the first match wins:
//!
//! 1. [`Trigonometric`], case-insensitive, one argument.
//! 2. [`Miscellaneous`], case-insensitive, one argument.
//! 3. [`MultiParam`], case-sensitive, two arguments.

mod multi_param;
mod other;
mod trigonometric;

pub use multi_param::MultiParam;
pub use other::Miscellaneous;
pub use trigonometric::Trigonometric;

use crate::ast::{Call, Expr};
use crate::error::{CompileError, Result};
use log::trace;

/// A single-argument builtin.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryFunction {
    Trigonometric(Trigonometric),
    Miscellaneous(Miscellaneous),
}

impl UnaryFunction {
    pub fn name(&self) -> &'static str {
        match self {
            UnaryFunction::Trigonometric(function) => function.name(),
            UnaryFunction::Miscellaneous(function) => function.name(),
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        match self {
            UnaryFunction::Trigonometric(function) => function.apply(value),
            UnaryFunction::Miscellaneous(function) => function.apply(value),
        }
    }
}

/// What a function name resolves to, before any arguments are attached.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Signature {
    Unary(UnaryFunction),
    Binary(MultiParam),
}

impl Signature {
    pub fn arity(&self) -> usize {
        match self {
            Signature::Unary(_) => 1,
            Signature::Binary(_) => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Signature::Unary(function) => function.name(),
            Signature::Binary(function) => function.name(),
        }
    }
}

/// Looks `name` up in the catalogue, honouring each group's case rule.
pub fn lookup(name: &str) -> Option<Signature> {
    if let Some(function) = Trigonometric::lookup(name) {
        return Some(Signature::Unary(UnaryFunction::Trigonometric(function)));
    }
    if let Some(function) = Miscellaneous::lookup(name) {
        return Some(Signature::Unary(UnaryFunction::Miscellaneous(function)));
    }
    MultiParam::lookup(name).map(Signature::Binary)
}

/// Canonical spellings of every builtin, in lookup order.
pub fn names() -> Vec<&'static str> {
    Trigonometric::ALL
        .iter()
        .map(Trigonometric::name)
        .chain(Miscellaneous::ALL.iter().map(Miscellaneous::name))
        .chain(MultiParam::ALL.iter().map(MultiParam::name))
        .collect()
}

/// Turns a call site into an expression node.
///
/// `position` is where the function name starts. Unknown names are reported before
/// the argument count is looked at; a known name with the wrong number of arguments
/// is a parse error. Calls whose arguments are all constant fold to a constant.
pub fn resolve(name: &str, args: Vec<Expr>, position: usize) -> Result<Expr> {
    let signature = lookup(name).ok_or_else(|| CompileError::UnknownFunction {
        name: name.to_string(),
        position,
    })?;
    trace!("Resolved '{}' to {}", name, signature.name());

    let call = match signature {
        Signature::Unary(function) => {
            let [arg]: [Expr; 1] = args
                .try_into()
                .map_err(|args: Vec<Expr>| arity_error(name, &signature, args.len(), position))?;
            Call::Unary(function, Box::new(arg))
        }
        Signature::Binary(function) => {
            let [lhs, rhs]: [Expr; 2] = args
                .try_into()
                .map_err(|args: Vec<Expr>| arity_error(name, &signature, args.len(), position))?;
            Call::Binary(function, Box::new(lhs), Box::new(rhs))
        }
    };

    Ok(Expr::call(call))
}

fn arity_error(name: &str, signature: &Signature, found: usize, position: usize) -> CompileError {
    let expected = signature.arity();
    CompileError::parse_error(
        position,
        format!(
            "function '{}' expects {} argument{}, found {}",
            name,
            expected,
            if expected == 1 { "" } else { "s" },
            found
        ),
    )
}
