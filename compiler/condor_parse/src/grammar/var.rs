//! Variable declarations.

use condor_ir::{IncDec, NodeId, NodeKind, Token, TokenKind, TokenStream};
use tracing::debug;

use crate::{ParseError, ParseErrorKind, Parser};

impl<S: TokenStream> Parser<'_, S> {
    /// `type name [= expr]`, or `name [= expr]` on an existing variable.
    ///
    /// `token` is the already-consumed type keyword (or identifier). The
    /// declaration is visible to its own initializer. Consumes the
    /// terminator; returns the variable and whether it was newly declared.
    pub(crate) fn parse_var(&mut self, token: Token) -> Result<(NodeId, bool), ParseError> {
        let peek = self.peek();
        let (var, declared) = if let TokenKind::Ident(_) = peek.kind {
            let Some(data_type) = token.kind.declared_type() else {
                return Err(ParseError::unexpected("type", token.kind, token.span));
            };
            let (name, name_span) = self.expect_ident()?;
            debug!(name = self.interner.lookup(name), %data_type, "parse_var");
            let var = self.alloc(
                NodeKind::Var {
                    name,
                    data_type,
                    init: None,
                    inc_dec: IncDec::None,
                },
                token.span.merge(name_span),
            )?;
            self.symbols.declare(name, var);
            (var, true)
        } else {
            let TokenKind::Ident(name) = token.kind else {
                return Err(ParseError::unexpected("identifier", token.kind, token.span));
            };
            let var = self.resolve(name, token.span)?;
            if !matches!(self.arena.node(var).kind, NodeKind::Var { .. }) {
                return Err(ParseError::unexpected("variable", token.kind, token.span));
            }
            (var, false)
        };

        let end = self.next();
        match end.kind {
            TokenKind::Semicolon | TokenKind::Comma | TokenKind::RParen => Ok((var, declared)),
            TokenKind::Assign => {
                let value = self.parse_expression()?;
                if let NodeKind::Var { init, .. } = &mut self.arena.node_mut(var).kind {
                    *init = Some(value);
                }
                Ok((var, declared))
            }
            op if op.is_compound_assignment() => Err(ParseError::new(
                ParseErrorKind::CompoundAssignment { op },
                end.span,
            )),
            found => Err(ParseError::new(
                ParseErrorKind::ExpectedAssignment { found },
                end.span,
            )),
        }
    }
}
