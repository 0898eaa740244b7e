use crate::ast::{Expr, Lexer, Operator, SpannedToken, Token, Variable};
use crate::error::{CompileError, Result};
use crate::functions;
use log::debug;

/// Deepest allowed nesting of parentheses, calls and unary minus.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Longest accepted formula, in tokens (the trailing end marker excluded).
pub const MAX_TOKENS: usize = 1024;

/// Precedence-climbing parser over a lexed formula.
///
/// Binary nodes and calls are built through the folding constructors on [`Expr`], so
/// constant subtrees collapse bottom-up while parsing.
pub struct FormulaParser {
    tokens: Vec<SpannedToken>,
    cursor: usize,
    depth: usize,
}

impl FormulaParser {
    /// Takes a lexed stream. Only one end marker is kept, at the very end, so tokens
    /// after a stray interior marker are still parsed (and rejected as trailing input).
    pub fn new(mut tokens: Vec<SpannedToken>) -> Self {
        let end = match tokens.last() {
            Some(last) if last.token == Token::End => last.position,
            Some(last) => last.position + 1,
            None => 0,
        };
        tokens.retain(|spanned| spanned.token != Token::End);
        tokens.push(SpannedToken {
            token: Token::End,
            position: end,
        });
        Self {
            tokens,
            cursor: 0,
            depth: 0,
        }
    }

    /// Lexes and parses `input` into a folded expression tree.
    pub fn parse_expression(input: &str) -> Result<Expr> {
        debug!("Parsing expression: {}", input);
        let tokens = Lexer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Consumes every token. Anything left after a complete expression is an error.
    pub fn parse(mut self) -> Result<Expr> {
        if self.tokens.len() > MAX_TOKENS + 1 {
            return Err(CompileError::parse_error(
                self.tokens[MAX_TOKENS].position,
                format!("expression is too long (more than {MAX_TOKENS} tokens)"),
            ));
        }

        if self.peek() == &Token::End {
            return Err(CompileError::parse_error(self.position(), "empty expression"));
        }

        let expr = self.build_binary_expression(1)?;

        match self.peek() {
            Token::End => Ok(expr),
            found => Err(CompileError::TrailingInput {
                found: found.to_string(),
                position: self.position(),
            }),
        }
    }

    /// `factor (op factor)*` where every `op` binds at least as tightly as `min_precedence`.
    fn build_binary_expression(&mut self, min_precedence: u8) -> Result<Expr> {
        let mut node = self.build_factor()?;

        while let Some(operator) = self.peek_operator() {
            if operator.precedence() < min_precedence {
                break;
            }
            self.advance();
            let right = self.build_binary_expression(operator.precedence() + 1)?;
            node = Expr::binary(operator, node, right);
        }

        Ok(node)
    }

    fn build_factor(&mut self) -> Result<Expr> {
        if self.peek() == &Token::Operator(Operator::Subtract) {
            let position = self.position();
            self.advance();
            self.enter(position)?;
            let operand = self.build_primary_expression();
            self.depth -= 1;
            return Ok(Expr::negate(operand?));
        }
        self.build_primary_expression()
    }

    fn build_primary_expression(&mut self) -> Result<Expr> {
        let SpannedToken { token, position } = self.tokens[self.cursor].clone();
        match token {
            Token::Number(value) => {
                self.advance();
                Ok(Expr::Constant(value))
            }
            Token::Identifier(name) => {
                self.advance();
                if self.peek() == &Token::LeftParen {
                    return self.build_function_call(&name, position);
                }
                Variable::from_name(&name)
                    .map(Expr::Variable)
                    .ok_or_else(|| {
                        CompileError::parse_error(position, format!("unknown identifier '{name}'"))
                    })
            }
            Token::LeftParen => {
                self.advance();
                self.enter(position)?;
                let inner = self.build_binary_expression(1);
                self.depth -= 1;
                let inner = inner?;
                self.expect_closing_paren(position)?;
                Ok(inner)
            }
            Token::End => Err(CompileError::parse_error(
                position,
                "expected an expression, found end of input",
            )),
            found => Err(CompileError::parse_error(
                position,
                format!("expected an expression, found {found}"),
            )),
        }
    }

    /// `name '(' expression (',' expression)* ')'`; the cursor is on the `(`.
    fn build_function_call(&mut self, name: &str, position: usize) -> Result<Expr> {
        let open = self.position();
        self.advance();
        self.enter(open)?;
        let args = self.build_arguments();
        self.depth -= 1;
        let args = args?;
        self.expect_closing_paren(open)?;
        functions::resolve(name, args, position)
    }

    fn build_arguments(&mut self) -> Result<Vec<Expr>> {
        let mut args = vec![self.build_binary_expression(1)?];
        while self.peek() == &Token::Comma {
            self.advance();
            args.push(self.build_binary_expression(1)?);
        }
        Ok(args)
    }

    fn expect_closing_paren(&mut self, open: usize) -> Result<()> {
        match self.peek() {
            Token::RightParen => {
                self.advance();
                Ok(())
            }
            Token::End => Err(CompileError::parse_error(
                self.position(),
                format!("unclosed parenthesis opened at position {open}"),
            )),
            found => Err(CompileError::parse_error(
                self.position(),
                format!("expected ')' or an operator, found {found}"),
            )),
        }
    }

    fn enter(&mut self, position: usize) -> Result<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(CompileError::parse_error(
                position,
                format!("expression is nested too deeply (limit {MAX_NESTING_DEPTH})"),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.cursor].token
    }

    fn peek_operator(&self) -> Option<Operator> {
        match self.peek() {
            Token::Operator(operator) => Some(*operator),
            _ => None,
        }
    }

    fn position(&self) -> usize {
        self.tokens[self.cursor].position
    }

    fn advance(&mut self) {
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
    }
}
