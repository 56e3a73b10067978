//! Function declarations.

use condor_ir::{ListId, NodeKind, ScopeId, Token, TokenKind, TokenStream};
use tracing::debug;

use crate::{ErrorContext, ParseError, Parser};

impl<S: TokenStream> Parser<'_, S> {
    /// `func name(params) body`
    ///
    /// The name is visible in the enclosing scope before the body is parsed,
    /// so a function can call itself. Declared parameters belong to the body
    /// scope; a parameter naming an outer variable stays that variable.
    pub(crate) fn parse_func(&mut self, token: Token) -> Result<(), ParseError> {
        let (name, name_span) = self.expect_ident()?;
        debug!(name = self.interner.lookup(name), "parse_func");

        let func = self.alloc(
            NodeKind::Func {
                name,
                params: ListId::INVALID,
                body: ScopeId::NONE,
            },
            token.span.merge(name_span),
        )?;
        self.symbols.declare(name, func);

        let saved = self.open_scope(token.span)?;
        let body = self.scope;
        let result = self
            .parse_params()
            .map_err(|e| e.or_context(ErrorContext::FunctionParams))
            .and_then(|params| self.parse_block().map(|()| params));
        self.close_scope(saved);
        let params = result?;

        self.arena.node_mut(func).kind = NodeKind::Func { name, params, body };
        Ok(())
    }

    /// `( [param {, param}] )` where a param is `type name [= default]` or
    /// the name of a variable already in scope.
    fn parse_params(&mut self) -> Result<ListId, ParseError> {
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
            // `int a` declares; a bare `a` reuses an existing variable.
            let token = self.next();
            let (param, _) = self.parse_var(token)?;
            self.arena
                .push_item(list, param)
                .map_err(|err| ParseError::arena(err, token.span))?;

            let end = self.current();
            match end.kind {
                TokenKind::Comma => {}
                TokenKind::RParen => return Ok(list),
                found => return Err(ParseError::unexpected("`,` or `)`", found, end.span)),
            }
        }
    }
}
