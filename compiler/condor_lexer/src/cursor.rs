//! `TokenStream` over a scanned `TokenList`.

use condor_ir::{PushbackExhausted, Token, TokenKind, TokenList, TokenStream, PUSHBACK_DEPTH};

/// Cursor over a lexed file.
///
/// `pos` counts consumed tokens. Past the end, `Eof` repeats.
pub struct TokenCursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
    /// Tokens currently pushed back and not yet re-consumed.
    pushed_back: usize,
    eof: Token,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        let eof = tokens
            .as_slice()
            .last()
            .copied()
            .filter(|t| t.kind == TokenKind::Eof)
            .unwrap_or_else(|| Token::new(TokenKind::Eof, tokens.end_span()));
        TokenCursor {
            tokens,
            pos: 0,
            pushed_back: 0,
            eof,
        }
    }

    fn at(&self, index: usize) -> Token {
        self.tokens.get(index).copied().unwrap_or(self.eof)
    }

    #[cfg(test)]
    fn position(&self) -> usize {
        self.pos
    }
}

impl TokenStream for TokenCursor<'_> {
    fn next_token(&mut self) -> Token {
        let token = self.at(self.pos);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.pushed_back = self.pushed_back.saturating_sub(1);
        tracing::trace!(?token, "next");
        token
    }

    fn peek_token(&mut self) -> Token {
        self.at(self.pos)
    }

    fn back(&mut self) -> Result<(), PushbackExhausted> {
        if self.pushed_back >= PUSHBACK_DEPTH || self.pos == 0 {
            return Err(PushbackExhausted);
        }
        self.pos -= 1;
        self.pushed_back += 1;
        Ok(())
    }

    fn current_token(&self) -> Token {
        match self.pos.checked_sub(1) {
            Some(index) => self.at(index),
            None => self.eof,
        }
    }
}
