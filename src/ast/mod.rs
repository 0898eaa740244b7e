mod compiler;
mod evaluator;
mod lexer;
mod parser;

pub use compiler::*;
pub use evaluator::EvalContext;
pub use lexer::{Lexer, SpannedToken, Token};
pub use parser::{FormulaParser as Parser, MAX_NESTING_DEPTH, MAX_TOKENS};

use crate::functions::{MultiParam, UnaryFunction};
use log::trace;

/// A node of a compiled formula.
///
/// Each node owns its children. Trees built through [`Expr::binary`] and
/// [`Expr::call`] never contain a non-`Constant` node whose inputs are all constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(f64),
    Variable(Variable),
    Binary {
        operator: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call(Call),
}

/// The two independent variables a formula may reference.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Variable {
    X,
    T,
}

impl Variable {
    /// `x`/`X` and `t`/`T`; anything else is not a variable.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x" | "X" => Some(Variable::X),
            "t" | "T" => Some(Variable::T),
            _ => None,
        }
    }
}

/// A resolved builtin function applied to its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Unary(UnaryFunction, Box<Expr>),
    Binary(MultiParam, Box<Expr>, Box<Expr>),
}

impl Call {
    pub fn args(&self) -> Vec<&Expr> {
        match self {
            Call::Unary(_, arg) => vec![arg.as_ref()],
            Call::Binary(_, lhs, rhs) => vec![lhs.as_ref(), rhs.as_ref()],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Call::Unary(function, _) => function.name(),
            Call::Binary(function, _, _) => function.name(),
        }
    }
}

impl Expr {
    /// Builds `left op right`, folding to a constant when both sides are constant.
    pub fn binary(operator: Operator, left: Expr, right: Expr) -> Expr {
        if let (Some(lhs), Some(rhs)) = (left.try_const_evaluate(), right.try_const_evaluate()) {
            let value = operator.apply(lhs, rhs);
            trace!("Folded {lhs} {} {rhs} => {value}", operator.symbol());
            return Expr::Constant(value);
        }
        Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Wraps a call, evaluating it right away when every argument is constant.
    pub fn call(call: Call) -> Expr {
        let name = call.name();
        let node = Expr::Call(call);
        match node.try_const_evaluate() {
            Some(value) => {
                trace!("Folded {name}(..) => {value}");
                Expr::Constant(value)
            }
            None => node,
        }
    }

    /// Unary minus, expressed as `0 - operand`.
    pub fn negate(operand: Expr) -> Expr {
        Expr::binary(Operator::Subtract, Expr::Constant(0.0), operand)
    }

    /// Whether any node of this tree reads `variable`.
    pub fn uses_variable(&self, variable: Variable) -> bool {
        match self {
            Expr::Constant(_) => false,
            Expr::Variable(v) => *v == variable,
            Expr::Binary { left, right, .. } => {
                left.uses_variable(variable) || right.uses_variable(variable)
            }
            Expr::Call(call) => call.args().iter().any(|arg| arg.uses_variable(variable)),
        }
    }

    /// Number of nodes in this tree, the root included.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Constant(_) | Expr::Variable(_) => 1,
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Expr::Call(call) => 1 + call.args().iter().map(|arg| arg.node_count()).sum::<usize>(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Binding strength; all operators are left-associative.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    /// Plain IEEE-754 arithmetic. Division by zero yields an infinity or NaN.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            other => Err(other),
        }
    }
}
