//! Compiler and evaluator for user-entered curve formulas in `x` and `t`.
//!
//! ```rust
//! let curve = curve_expr::compile("-cos(x/1.2 + .5) * 0.8 + 0.8").unwrap();
//! let y = curve.evaluate(1.0, 0.0);
//! assert!(y.is_finite());
//!
//! let err = curve_expr::compile("foo(1)").unwrap_err();
//! assert_eq!(err.kind(), curve_expr::ErrorKind::UnknownFunction);
//! ```

pub mod ast;
pub mod cache;
pub mod error;
pub mod functions;
pub mod piecewise;

pub use ast::{CompiledExpression, Compiler, EvalContext, Expr, Operator, Variable};
pub use cache::CompileCache;
pub use error::{CompileError, ErrorKind};

/// Compiles `source` into an evaluable expression.
pub fn compile(source: &str) -> Result<CompiledExpression, CompileError> {
    Compiler::compile_expression(source)
}

/// Compiles and evaluates `source` once.
pub fn evaluate_expression(source: &str, x: f64, t: f64) -> Result<f64, CompileError> {
    Ok(compile(source)?.evaluate(x, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn sample_contexts(count: usize) -> Vec<EvalContext> {
        let mut rng = rand::rng();
        (0..count)
            .map(|_| EvalContext::new(rng.random_range(-10.0..10.0), rng.random_range(0.0..30.0)))
            .collect()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(compile("2+3*4").unwrap().evaluate(0.0, 0.0), 14.0);
        assert_eq!(compile("(2+3)*4").unwrap().evaluate(0.0, 0.0), 20.0);
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(compile("-x+1").unwrap().evaluate(5.0, 0.0), -4.0);
    }

    #[test]
    fn test_builtin_calls() {
        assert_eq!(compile("sin(0)").unwrap().evaluate(0.0, 0.0), 0.0);
        assert_eq!(compile("pow(2,10)").unwrap().evaluate(0.0, 0.0), 1024.0);
    }

    #[test]
    fn test_unknown_function() {
        let err = compile("foo(1)").unwrap_err();
        assert_eq!(
            err,
            CompileError::UnknownFunction {
                name: "foo".to_string(),
                position: 0
            }
        );
    }

    #[test]
    fn test_malformed_input_never_compiles() {
        for input in ["1+", "(1+2", "min(1)", "", ")", "*2", "sin(", "x,t", "1..2"] {
            let result = compile(input);
            assert!(result.is_err(), "Input '{}' should fail, got {:?}", input, result);
        }
        assert_eq!(compile("1+").unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(compile("(1+2").unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!(compile("min(1)").unwrap_err().kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_constant_only_expressions_fold() {
        let contexts = sample_contexts(50);
        for source in [
            "1 + 2 * 3",
            "sqrt(2) / 3",
            "max(-1, cos(0))",
            "-(4 - 10) / 0",
            "round(2.5)",
        ] {
            let compiled = compile(source).unwrap();
            let value = compiled
                .try_const_evaluate()
                .unwrap_or_else(|| panic!("'{source}' should be constant"));
            assert!(compiled.is_constant());
            for ctx in &contexts {
                assert_eq!(compiled.evaluate_with(ctx), value, "{source}");
            }
        }
    }

    #[test]
    fn test_variable_free_subtrees_fold() {
        // sin(x) * (2 + 3) keeps one Binary node over a Call and a single Constant.
        let compiled = compile("sin(x) * (2 + 3)").unwrap();
        match compiled.root() {
            Expr::Binary { right, .. } => assert_eq!(**right, Expr::Constant(5.0)),
            other => panic!("unexpected tree {other:?}"),
        }
        assert_eq!(compiled.node_count(), 4);

        let compiled = compile("x + pow(2, 3) * abs(-2)").unwrap();
        assert_eq!(compiled.node_count(), 3);
    }

    #[test]
    fn test_compiling_twice_is_idempotent() {
        let contexts = sample_contexts(200);
        for source in [
            "sin(x) * t",
            "hypot(x, t) - atan2(t, x)",
            "exp(-t/10) * cos(x)",
            "x / (t - 3)",
        ] {
            let first = compile(source).unwrap();
            let second = compile(source).unwrap();
            assert_eq!(first, second);
            for ctx in &contexts {
                let (a, b) = (first.evaluate_with(ctx), second.evaluate_with(ctx));
                assert!(a == b || (a.is_nan() && b.is_nan()), "{source} at {ctx:?}");
            }
        }
    }

    #[test]
    fn test_agrees_with_meval() {
        let contexts = sample_contexts(100);
        for source in [
            "x * x - 3 * t + 1",
            "sin(x) * cos(t) / 2",
            "abs(x - t) + sqrt(abs(t))",
            "exp(-x * x) * tanh(t)",
            "-x + 2 * -t",
        ] {
            let ours = compile(source).unwrap();
            let theirs: meval::Expr = source.parse().unwrap();
            let theirs = theirs.bind2("x", "t").unwrap();
            for ctx in &contexts {
                let (a, b) = (ours.evaluate_with(ctx), theirs(ctx.x, ctx.t));
                assert!((a - b).abs() <= 1e-12 * b.abs().max(1.0), "{source}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn test_pow_with_undefined_exponent_is_nan() {
        assert!(compile("pow(1, 0/0)").unwrap().evaluate(0.0, 0.0).is_nan());
        assert!(compile("pow(-1, 1/0)").unwrap().evaluate(0.0, 0.0).is_nan());
        assert!(compile("pow(1, x)").unwrap().evaluate(f64::NAN, 0.0).is_nan());
    }

    #[test]
    fn test_evaluate_expression_shortcut() {
        assert_eq!(evaluate_expression("x * t", 3.0, 4.0), Ok(12.0));
        assert!(evaluate_expression("x * y", 3.0, 4.0).is_err());
    }

    #[test]
    fn test_case_rules() {
        assert_eq!(compile("SIN(0) + Cos(0)").unwrap().evaluate(0.0, 0.0), 1.0);
        assert_eq!(compile("LOG10(100)").unwrap().evaluate(0.0, 0.0), 2.0);
        assert_eq!(compile("MAX(1, 2)").unwrap_err().kind(), ErrorKind::UnknownFunction);
    }

    #[test]
    fn test_expressions_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledExpression>();
        assert_send_sync::<Expr>();
    }
}
