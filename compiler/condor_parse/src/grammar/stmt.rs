//! Statement parsing.

use condor_ir::{typeck, DataType, NodeId, NodeKind, ScopeId, Token, TokenKind, TokenStream};
use condor_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{ErrorContext, ParseError, Parser};

/// How a statement list is delimited.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum BodyMode {
    /// The whole file, ended by `Eof`.
    TopLevel,
    /// `{ ... }`
    Braced,
    /// A single statement without braces.
    Single,
}

impl<S: TokenStream> Parser<'_, S> {
    pub(crate) fn parse_top_level(&mut self) -> Result<(), ParseError> {
        self.parse_stmt_list(BodyMode::TopLevel)
    }

    fn parse_stmt_list(&mut self, mode: BodyMode) -> Result<(), ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_list_inner(mode))
    }

    fn parse_stmt_list_inner(&mut self, mode: BodyMode) -> Result<(), ParseError> {
        loop {
            let token = self.next();
            match token.kind {
                TokenKind::Eof if mode == BodyMode::Braced => {
                    return Err(ParseError::unexpected("`}`", token.kind, token.span));
                }
                TokenKind::Eof => return Ok(()),
                TokenKind::RBrace if mode == BodyMode::Braced => return Ok(()),
                TokenKind::Semicolon => {}
                TokenKind::Return => {
                    self.parse_return(token)
                        .map_err(|e| e.or_context(ErrorContext::ReturnStatement))?;
                    return self.skip_rest_of_body(mode);
                }
                TokenKind::Break => {
                    self.parse_break(token)?;
                    return self.skip_rest_of_body(mode);
                }
                _ => self.parse_statement(token)?,
            }
            if mode == BodyMode::Single {
                return Ok(());
            }
        }
    }

    fn parse_statement(&mut self, token: Token) -> Result<(), ParseError> {
        match token.kind {
            kind if kind.declared_type().is_some() => {
                let (var, _) = self
                    .parse_var(token)
                    .map_err(|e| e.or_context(ErrorContext::VarDecl))?;
                self.mark_stmt(var);
                self.finish_statement()
            }
            TokenKind::For => self
                .parse_for(token)
                .map_err(|e| e.or_context(ErrorContext::ForLoop)),
            TokenKind::If | TokenKind::While | TokenKind::Switch => self.parse_conditional(token),
            TokenKind::Case => self
                .parse_case(token)
                .map_err(|e| e.or_context(ErrorContext::CaseClause)),
            TokenKind::Func => self
                .parse_func(token)
                .map_err(|e| e.or_context(ErrorContext::FunctionDecl)),
            TokenKind::Ident(_) => self.parse_expression_statement(),
            found => Err(ParseError::unexpected("statement", found, token.span)),
        }
    }

    /// The terminator an expression or declaration consumed must end the
    /// statement. A consumed `}` is pushed back for the enclosing list.
    fn finish_statement(&mut self) -> Result<(), ParseError> {
        let token = self.current();
        match token.kind {
            TokenKind::Semicolon | TokenKind::Eof => Ok(()),
            TokenKind::RBrace => self.back(),
            found => Err(ParseError::unexpected("`;`", found, token.span)),
        }
    }

    /// Expression statement starting with an identifier: a call, an
    /// assignment or any other expression.
    ///
    /// Only a node allocated by this statement becomes a statement of the
    /// current scope; a bare reference to an existing declaration does not.
    fn parse_expression_statement(&mut self) -> Result<(), ParseError> {
        self.back()?;
        let first_new = self.arena.node_count();
        let root = self.parse_expression()?;
        if root.index() >= first_new {
            self.mark_stmt(root);
        }
        self.finish_statement()
    }

    /// Skip what follows a `return`/`break` in its body without building
    /// nodes. A braced body's closing `}` is consumed.
    fn skip_rest_of_body(&mut self, mode: BodyMode) -> Result<(), ParseError> {
        match mode {
            BodyMode::Single => Ok(()),
            BodyMode::TopLevel => {
                while self.next().kind != TokenKind::Eof {}
                Ok(())
            }
            BodyMode::Braced => {
                let mut depth = 0usize;
                loop {
                    let token = self.next();
                    match token.kind {
                        TokenKind::LBrace => depth += 1,
                        TokenKind::RBrace if depth == 0 => return Ok(()),
                        TokenKind::RBrace => depth -= 1,
                        TokenKind::Eof => {
                            return Err(ParseError::unexpected("`}`", token.kind, token.span));
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    /// `{ stmt* }` or a single statement, in the current scope.
    pub(crate) fn parse_block(&mut self) -> Result<(), ParseError> {
        let token = self.next();
        if token.kind == TokenKind::LBrace {
            self.parse_stmt_list(BodyMode::Braced)
        } else {
            self.back()?;
            self.parse_stmt_list(BodyMode::Single)
        }
    }

    /// Open a scope, parse a block into it, close it.
    pub(crate) fn parse_body(&mut self, start: Token) -> Result<ScopeId, ParseError> {
        let saved = self.open_scope(start.span)?;
        let body = self.scope;
        let result = self.parse_block();
        self.close_scope(saved);
        result.map(|()| body)
    }

    /// `for (var; cond; step) body`
    ///
    /// The loop variable, condition and step all live in the body scope.
    fn parse_for(&mut self, token: Token) -> Result<(), ParseError> {
        debug!("parse_for");
        let node = self.alloc(
            NodeKind::For {
                var: NodeId::INVALID,
                cond: NodeId::INVALID,
                step: NodeId::INVALID,
                body: ScopeId::NONE,
            },
            token.span,
        )?;
        self.mark_stmt(node);
        self.expect(TokenKind::LParen, "`(`")?;

        let saved = self.open_scope(token.span)?;
        let body = self.scope;
        let result = self.parse_for_header_and_body();
        self.close_scope(saved);
        let (var, cond, step) = result?;

        self.arena.node_mut(node).kind = NodeKind::For {
            var,
            cond,
            step,
            body,
        };
        Ok(())
    }

    fn parse_for_header_and_body(&mut self) -> Result<(NodeId, NodeId, NodeId), ParseError> {
        let var_token = self.next();
        let (var, _) = self.parse_var(var_token)?;
        self.expect_current(TokenKind::Semicolon, "`;`")?;
        let cond = self.parse_expression()?;
        self.expect_current(TokenKind::Semicolon, "`;`")?;
        let step = self.parse_expression()?;
        self.expect_current(TokenKind::RParen, "`)`")?;
        self.parse_block()?;
        Ok((var, cond, step))
    }

    /// `if (cond) body`, `while (cond) body`, `switch (cond) body`
    fn parse_conditional(&mut self, token: Token) -> Result<(), ParseError> {
        let context = match token.kind {
            TokenKind::If => ErrorContext::IfStatement,
            TokenKind::While => ErrorContext::WhileLoop,
            _ => ErrorContext::SwitchStatement,
        };
        self.parse_conditional_inner(token)
            .map_err(|e| e.or_context(context))
    }

    fn parse_conditional_inner(&mut self, token: Token) -> Result<(), ParseError> {
        debug!(kind = token.kind.describe(), "parse_conditional");
        let node = self.alloc(
            NodeKind::If {
                cond: NodeId::INVALID,
                body: ScopeId::NONE,
            },
            token.span,
        )?;
        self.mark_stmt(node);

        self.expect(TokenKind::LParen, "`(`")?;
        let cond = self.parse_expression()?;
        self.expect_current(TokenKind::RParen, "`)`")?;
        let body = self.parse_body(token)?;

        self.arena.node_mut(node).kind = match token.kind {
            TokenKind::If => NodeKind::If { cond, body },
            TokenKind::While => NodeKind::While { cond, body },
            _ => NodeKind::Switch { cond, body },
        };
        Ok(())
    }

    /// `case expr: body`
    fn parse_case(&mut self, token: Token) -> Result<(), ParseError> {
        debug!("parse_case");
        let node = self.alloc(
            NodeKind::Case {
                cond: NodeId::INVALID,
                body: ScopeId::NONE,
            },
            token.span,
        )?;
        self.mark_stmt(node);

        let cond = self.parse_expression()?;
        self.expect_current(TokenKind::Colon, "`:`")?;
        let body = self.parse_body(token)?;

        self.arena.node_mut(node).kind = NodeKind::Case { cond, body };
        Ok(())
    }

    /// `return [expr]`
    ///
    /// The declared return type is inferred from the value.
    fn parse_return(&mut self, token: Token) -> Result<(), ParseError> {
        debug!("parse_return");
        let node = self.alloc(
            NodeKind::Return {
                value: NodeId::INVALID,
                data_type: DataType::Undefined,
            },
            token.span,
        )?;
        self.mark_stmt(node);

        match self.peek().kind {
            TokenKind::Semicolon => {
                self.next();
                return Ok(());
            }
            TokenKind::RBrace | TokenKind::Eof => return Ok(()),
            _ => {}
        }

        let value = self.parse_expression()?;
        let data_type = typeck::infer_type(&self.arena, value);
        self.arena.node_mut(node).kind = NodeKind::Return { value, data_type };
        self.finish_statement()
    }

    /// `break`
    fn parse_break(&mut self, token: Token) -> Result<(), ParseError> {
        debug!("parse_break");
        let node = self.alloc(NodeKind::Break, token.span)?;
        self.mark_stmt(node);
        if self.peek().kind == TokenKind::Semicolon {
            self.next();
        }
        Ok(())
    }
}
