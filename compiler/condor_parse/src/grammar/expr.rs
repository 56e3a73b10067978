//! Expression parsing.
//!
//! An expression is a primary followed by an optional binary operator. The
//! right operand of that operator is the whole rest of the expression.

use condor_ir::{BinaryOp, IncDec, ListId, Name, NodeId, NodeKind, Span, TokenKind, TokenStream};
use condor_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{strip_quotes, ErrorContext, ParseError, ParseErrorKind, Parser};

impl<S: TokenStream> Parser<'_, S> {
    /// Parse one expression, consuming the token that terminates it.
    pub(crate) fn parse_expression(&mut self) -> Result<NodeId, ParseError> {
        ensure_sufficient_stack(|| self.parse_expression_inner())
    }

    fn parse_expression_inner(&mut self) -> Result<NodeId, ParseError> {
        let token = self.next();
        let primary = match token.kind {
            TokenKind::Int(v) => self.alloc(NodeKind::Int(v), token.span)?,
            TokenKind::Long(v) => self.alloc(NodeKind::Long(v), token.span)?,
            TokenKind::Float(bits) => self.alloc(NodeKind::Float(f32::from_bits(bits)), token.span)?,
            TokenKind::Double(bits) => {
                self.alloc(NodeKind::Double(f64::from_bits(bits)), token.span)?
            }
            TokenKind::Str(raw) => {
                let text = strip_quotes(self.interner.lookup(raw));
                let name = self.interner.intern(text);
                self.alloc(NodeKind::Str(name), token.span)?
            }
            TokenKind::Char(c) => self.alloc(NodeKind::Char(c), token.span)?,
            TokenKind::True => self.alloc(NodeKind::Bool(true), token.span)?,
            TokenKind::False => self.alloc(NodeKind::Bool(false), token.span)?,
            TokenKind::Ident(name) if self.peek().kind == TokenKind::LParen => {
                self.parse_call(name, token.span)?
            }
            TokenKind::Ident(name) => self.resolve(name, token.span)?,
            found => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedExpression { found },
                    token.span,
                ));
            }
        };

        let mut follow = self.next();
        if let TokenKind::Inc | TokenKind::Dec = follow.kind {
            self.mark_inc_dec(primary, follow.kind);
            follow = self.next();
        }

        if let Some(op) = follow.kind.binary_op() {
            return self.parse_binary(primary, op, token.span.merge(follow.span));
        }
        if follow.kind.is_compound_assignment() {
            return Err(ParseError::new(
                ParseErrorKind::CompoundAssignment { op: follow.kind },
                follow.span,
            ));
        }
        Ok(primary)
    }

    /// `left op rest-of-expression`
    fn parse_binary(&mut self, left: NodeId, op: BinaryOp, span: Span) -> Result<NodeId, ParseError> {
        trace!(op = op.symbol(), "parse_binary");
        let binary = self.alloc(
            NodeKind::Binary {
                left,
                right: NodeId::INVALID,
                op,
            },
            span,
        )?;
        let right = self.parse_expression()?;
        if let NodeKind::Binary { right: slot, .. } = &mut self.arena.node_mut(binary).kind {
            *slot = right;
        }
        Ok(binary)
    }

    /// Record a postfix `++`/`--` on a variable. Other operands ignore it.
    fn mark_inc_dec(&mut self, node: NodeId, kind: TokenKind) {
        if let NodeKind::Var { inc_dec, .. } = &mut self.arena.node_mut(node).kind {
            *inc_dec = if kind == TokenKind::Inc {
                IncDec::Inc
            } else {
                IncDec::Dec
            };
        }
    }

    /// `name(args)`; the call node precedes its arguments in the arena.
    fn parse_call(&mut self, name: Name, span: Span) -> Result<NodeId, ParseError> {
        debug!(name = self.interner.lookup(name), "parse_call");
        let call = self.alloc(
            NodeKind::FuncCall {
                func: NodeId::INVALID,
                args: ListId::INVALID,
            },
            span,
        )?;

        let func = self.resolve(name, span)?;
        if !matches!(self.arena.node(func).kind, NodeKind::Func { .. }) {
            return Err(ParseError::new(
                ParseErrorKind::NotAFunction(self.interner.lookup(name).to_owned()),
                span,
            ));
        }

        let args = self
            .parse_args()
            .map_err(|e| e.or_context(ErrorContext::CallArgs))?;
        self.arena.node_mut(call).kind = NodeKind::FuncCall { func, args };
        Ok(call)
    }

    /// `( [expr {, expr}] )`
    fn parse_args(&mut self) -> Result<ListId, ParseError> {
        let open = self.expect(TokenKind::LParen, "`(`")?;
        let list = self
            .arena
            .new_list()
            .map_err(|err| ParseError::arena(err, open.span))?;

        if self.peek().kind == TokenKind::RParen {
            self.next();
            return Ok(list);
        }

        loop {
            let arg = self.parse_expression()?;
            let end = self.current();
            self.arena
                .push_item(list, arg)
                .map_err(|err| ParseError::arena(err, end.span))?;
            match end.kind {
                TokenKind::Comma => {}
                TokenKind::RParen => return Ok(list),
                found => return Err(ParseError::unexpected("`,` or `)`", found, end.span)),
            }
        }
    }
}
