use crate::ast::{EvalContext, Expr, Parser, Variable};
use crate::error::Result;
use log::debug;
use rayon::prelude::*;

/// An immutable, folded formula ready for repeated evaluation.
///
/// The tree holds no interior mutability, so one handle can be shared across threads
/// and evaluated concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
    source: String,
    root: Expr,
}

impl CompiledExpression {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Expr {
        &self.root
    }

    pub fn evaluate(&self, x: f64, t: f64) -> f64 {
        self.root.evaluate(&EvalContext::new(x, t))
    }

    pub fn evaluate_with(&self, ctx: &EvalContext) -> f64 {
        self.root.evaluate(ctx)
    }

    /// Evaluates every sample in parallel, preserving order.
    pub fn evaluate_batch(&self, samples: &[EvalContext]) -> Vec<f64> {
        samples
            .par_iter()
            .map(|ctx| self.root.evaluate(ctx))
            .collect()
    }

    pub fn try_const_evaluate(&self) -> Option<f64> {
        self.root.try_const_evaluate()
    }

    pub fn is_constant(&self) -> bool {
        matches!(self.root, Expr::Constant(_))
    }

    pub fn uses_variable(&self, variable: Variable) -> bool {
        self.root.uses_variable(variable)
    }

    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

pub struct Compiler;

impl Compiler {
    /// Parse an expression string into a folded tree.
    pub fn parse_expression(expression: &str) -> Result<Expr> {
        Parser::parse_expression(expression)
    }

    pub fn compile_expression(expression: &str) -> Result<CompiledExpression> {
        let root = Self::parse_expression(expression)?;
        debug!("Compiled '{}' into {} node(s)", expression, root.node_count());
        Ok(CompiledExpression {
            source: expression.to_string(),
            root,
        })
    }
}
