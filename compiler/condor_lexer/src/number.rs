//! Number literal classification.
//!
//! - plain digits: `Int` when the value fits in `i32`, otherwise `Long`
//! - `l`/`L` suffix: `Long`
//! - `f`/`F` suffix: `Float`
//! - `d`/`D` suffix, a fraction or an exponent: `Double`

use condor_ir::TokenKind;

/// Classify and parse a number literal. `None` means malformed.
pub(crate) fn classify(text: &str) -> Option<TokenKind> {
    let (body, suffix) = match text.as_bytes().last()? {
        b'l' | b'L' => (&text[..text.len() - 1], Some(b'l')),
        b'f' | b'F' => (&text[..text.len() - 1], Some(b'f')),
        b'd' | b'D' => (&text[..text.len() - 1], Some(b'd')),
        _ => (text, None),
    };
    if !is_decimal_shape(body) {
        return None;
    }
    let integral = body.bytes().all(|b| b.is_ascii_digit());

    match suffix {
        Some(b'l') if integral => body.parse::<i64>().ok().map(TokenKind::Long),
        Some(b'l') => None,
        Some(b'f') => body.parse::<f32>().ok().map(|v| TokenKind::Float(v.to_bits())),
        Some(_) => parse_double(body),
        None if integral => match body.parse::<i32>() {
            Ok(v) => Some(TokenKind::Int(v)),
            Err(_) => body.parse::<i64>().ok().map(TokenKind::Long),
        },
        None => parse_double(body),
    }
}

fn parse_double(body: &str) -> Option<TokenKind> {
    body.parse::<f64>().ok().map(|v| TokenKind::Double(v.to_bits()))
}

/// `digits [. digits*] [(e|E) [+|-] digits]`
fn is_decimal_shape(body: &str) -> bool {
    let bytes = body.as_bytes();
    let mut i = 0;
    let digits = |i: &mut usize| {
        let start = *i;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
        *i - start
    };

    if digits(&mut i) == 0 {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        digits(&mut i);
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        i += 1;
        if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
            i += 1;
        }
        if digits(&mut i) == 0 {
            return false;
        }
    }
    i == bytes.len()
}
