use crate::ast::{Call, Expr, Variable};

/// The independent variables available to a formula at one simulation instant.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct EvalContext {
    /// Current horizontal position.
    pub x: f64,
    /// Elapsed time.
    pub t: f64,
}

impl EvalContext {
    pub fn new(x: f64, t: f64) -> Self {
        Self { x, t }
    }

    pub fn get(&self, variable: Variable) -> f64 {
        match variable {
            Variable::X => self.x,
            Variable::T => self.t,
        }
    }
}

impl Expr {
    /// Evaluates this tree against `ctx`.
    ///
    /// Never fails: out-of-domain inputs produce NaN or an infinity exactly as the
    /// underlying floating-point operation does.
    pub fn evaluate(&self, ctx: &EvalContext) -> f64 {
        match self {
            Expr::Constant(value) => *value,
            Expr::Variable(variable) => ctx.get(*variable),
            Expr::Binary {
                operator,
                left,
                right,
            } => operator.apply(left.evaluate(ctx), right.evaluate(ctx)),
            Expr::Call(Call::Unary(function, arg)) => function.apply(arg.evaluate(ctx)),
            Expr::Call(Call::Binary(function, lhs, rhs)) => {
                function.apply(lhs.evaluate(ctx), rhs.evaluate(ctx))
            }
        }
    }

    /// The value of this tree if it does not depend on the evaluation context.
    ///
    /// Whenever this returns `Some(v)`, [`Expr::evaluate`] returns `v` for every context.
    pub fn try_const_evaluate(&self) -> Option<f64> {
        match self {
            Expr::Constant(value) => Some(*value),
            Expr::Variable(_) => None,
            Expr::Binary {
                operator,
                left,
                right,
            } => Some(operator.apply(left.try_const_evaluate()?, right.try_const_evaluate()?)),
            Expr::Call(Call::Unary(function, arg)) => {
                Some(function.apply(arg.try_const_evaluate()?))
            }
            Expr::Call(Call::Binary(function, lhs, rhs)) => Some(
                function.apply(lhs.try_const_evaluate()?, rhs.try_const_evaluate()?),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;
    use crate::functions::{Miscellaneous, MultiParam, UnaryFunction};

    fn x() -> Box<Expr> {
        Box::new(Expr::Variable(Variable::X))
    }

    fn t() -> Box<Expr> {
        Box::new(Expr::Variable(Variable::T))
    }

    #[test]
    fn test_evaluate_variables() {
        let ctx = EvalContext::new(3.0, 7.0);
        assert_eq!(Expr::Variable(Variable::X).evaluate(&ctx), 3.0);
        assert_eq!(Expr::Variable(Variable::T).evaluate(&ctx), 7.0);
    }

    #[test]
    fn test_evaluate_hand_built_tree() {
        // (x - t) * 2
        let expr = Expr::Binary {
            operator: Operator::Multiply,
            left: Box::new(Expr::Binary {
                operator: Operator::Subtract,
                left: x(),
                right: t(),
            }),
            right: Box::new(Expr::Constant(2.0)),
        };
        assert_eq!(expr.evaluate(&EvalContext::new(5.0, 1.0)), 8.0);
        assert_eq!(expr.try_const_evaluate(), None);
    }

    #[test]
    fn test_try_const_evaluate_on_unfolded_tree() {
        let expr = Expr::Binary {
            operator: Operator::Add,
            left: Box::new(Expr::Constant(1.0)),
            right: Box::new(Expr::Call(Call::Binary(
                MultiParam::Pow,
                Box::new(Expr::Constant(2.0)),
                Box::new(Expr::Constant(3.0)),
            ))),
        };
        assert_eq!(expr.try_const_evaluate(), Some(9.0));
        assert_eq!(expr.evaluate(&EvalContext::new(-4.0, 100.0)), 9.0);
    }

    #[test]
    fn test_domain_errors_propagate_as_nan() {
        let expr = Expr::Call(Call::Unary(
            UnaryFunction::Miscellaneous(Miscellaneous::Sqrt),
            x(),
        ));
        assert!(expr.evaluate(&EvalContext::new(-1.0, 0.0)).is_nan());

        let expr = Expr::Call(Call::Unary(
            UnaryFunction::Miscellaneous(Miscellaneous::Ln),
            x(),
        ));
        assert_eq!(expr.evaluate(&EvalContext::new(0.0, 0.0)), f64::NEG_INFINITY);
    }

    #[test]
    fn test_default_context_is_origin() {
        assert_eq!(EvalContext::default(), EvalContext::new(0.0, 0.0));
    }
}
