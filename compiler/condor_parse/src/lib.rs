//! Recursive descent parser for Condor.
//!
//! Builds the AST into a pre-sized [`AstArena`]. The arena is sized by the
//! counting pre-pass ([`count_capacity`]) before the first node is
//! allocated. Identifiers are resolved while parsing: a use site stores the
//! `NodeId` of its declaration, so declarations are shared, never copied.
//!
//! There is no operator precedence. A binary operator after a primary
//! expression takes the whole rest of the expression as its right operand,
//! so `a - b - c` parses as `a - (b - c)`.

mod capacity;
mod error;
mod grammar;
mod symbols;

pub use capacity::count_capacity;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

use condor_ir::{
    AstArena, Capacity, Name, NodeId, NodeKind, ScopeId, Span, StringInterner, Token, TokenKind,
    TokenList, TokenStream,
};
use condor_lexer::TokenCursor;
use symbols::SymbolTable;

/// A parsed, sealed program.
#[derive(Debug)]
pub struct ParseOutput {
    pub arena: AstArena,
    /// Pool capacities the arena was created with.
    pub capacity: Capacity,
}

/// Count, then parse a lexed file.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    let capacity = count_capacity(tokens);
    let arena = Parser::new(TokenCursor::new(tokens), interner, capacity).parse_program()?;
    Ok(ParseOutput { arena, capacity })
}

/// Parser state.
///
/// Generic over the token source so tests can drive it with any stream.
pub struct Parser<'a, S: TokenStream> {
    tokens: S,
    interner: &'a StringInterner,
    arena: AstArena,
    symbols: SymbolTable,
    /// Scope new nodes are allocated into.
    scope: ScopeId,
    parent_scope: ScopeId,
}

impl<'a, S: TokenStream> Parser<'a, S> {
    pub fn new(tokens: S, interner: &'a StringInterner, capacity: Capacity) -> Self {
        Parser {
            tokens,
            interner,
            arena: AstArena::new(capacity),
            symbols: SymbolTable::new(),
            scope: ScopeId::GLOBAL,
            parent_scope: ScopeId::NONE,
        }
    }

    /// Parse every top-level statement and seal the arena.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(mut self) -> Result<AstArena, ParseError> {
        self.parse_top_level()?;
        self.arena.seal();
        tracing::debug!(nodes = self.arena.node_count(), "parsed");
        Ok(self.arena)
    }

    // ===== Token helpers =====

    #[inline]
    fn next(&mut self) -> Token {
        self.tokens.next_token()
    }

    #[inline]
    fn peek(&mut self) -> Token {
        self.tokens.peek_token()
    }

    #[inline]
    fn current(&self) -> Token {
        self.tokens.current_token()
    }

    fn back(&mut self) -> Result<(), ParseError> {
        let span = self.current().span;
        self.tokens
            .back()
            .map_err(|err| ParseError::pushback(err, span))
    }

    /// Consume the next token, which must be `kind`.
    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        let token = self.next();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParseError::unexpected(expected, token.kind, token.span))
        }
    }

    /// The most recently consumed token must be `kind`.
    fn expect_current(&self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        let token = self.current();
        if token.kind == kind {
            Ok(())
        } else {
            Err(ParseError::unexpected(expected, token.kind, token.span))
        }
    }

    fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        let token = self.next();
        match token.kind {
            TokenKind::Ident(name) => Ok((name, token.span)),
            found => Err(ParseError::unexpected("identifier", found, token.span)),
        }
    }

    // ===== Allocation =====

    /// Allocate a node in the current scope.
    fn alloc(&mut self, kind: NodeKind, span: Span) -> Result<NodeId, ParseError> {
        self.arena
            .alloc_node(kind, self.scope, self.parent_scope, span)
            .map_err(|err| ParseError::arena(err, span))
    }

    fn mark_stmt(&mut self, node: NodeId) {
        self.arena.node_mut(node).is_stmt = true;
    }

    fn resolve(&self, name: Name, span: Span) -> Result<NodeId, ParseError> {
        self.symbols.resolve(name).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UnknownIdentifier(self.interner.lookup(name).to_owned()),
                span,
            )
        })
    }

    /// Mint a body scope nested in the current one and make it current.
    ///
    /// Returns the scope to restore with [`Parser::close_scope`].
    fn open_scope(&mut self, span: Span) -> Result<(ScopeId, ScopeId), ParseError> {
        let body = self
            .arena
            .new_scope(self.scope)
            .map_err(|err| ParseError::arena(err, span))?;
        let saved = (self.scope, self.parent_scope);
        self.parent_scope = self.scope;
        self.scope = body;
        self.symbols.push();
        tracing::trace!(%body, "open scope");
        Ok(saved)
    }

    fn close_scope(&mut self, saved: (ScopeId, ScopeId)) {
        self.symbols.pop();
        (self.scope, self.parent_scope) = saved;
    }
}

/// Remove one leading and one trailing `"` from string literal text.
pub fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

#[cfg(test)]
mod tests;
