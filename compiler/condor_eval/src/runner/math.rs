//! The arithmetic protocol.
//!
//! Both operands are promoted to `f64`, combined, and the result is cast back
//! down to the left operand's type and stored in the left context. Integer
//! division therefore truncates: `int 7 / int 2` is `3`.

use condor_ir::BinaryOp;

use super::Runner;
use crate::{EvalError, EvalErrorKind, SlotId, Value};

impl Runner<'_> {
    pub(super) fn run_math(
        &mut self,
        left: SlotId,
        right: Option<SlotId>,
        op: BinaryOp,
    ) -> Result<(), EvalError> {
        let lhs = self.pool.value(left);
        let rhs = right.and_then(|slot| self.pool.value(slot));
        let (lhs, rhs) = operands(lhs, rhs)?;

        let result = apply(op, lhs.to_f64().unwrap_or(0.0), rhs.to_f64().unwrap_or(0.0));
        self.pool
            .set_value(left, Some(Value::from_f64(lhs.data_type(), result)));
        Ok(())
    }
}

/// Reject operand kinds arithmetic is not defined for.
fn operands(lhs: Option<Value>, rhs: Option<Value>) -> Result<(Value, Value), EvalError> {
    let both = [lhs, rhs];
    if both.iter().flatten().any(|v| matches!(v, Value::Str(_))) {
        return Err(EvalError::new(EvalErrorKind::StringConcatenation));
    }
    if both.iter().flatten().any(|v| matches!(v, Value::Char(_))) {
        return Err(EvalError::new(EvalErrorKind::CharComparison));
    }
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => Ok((lhs, rhs)),
        _ => Err(EvalError::new(EvalErrorKind::OperandHasNoValue)),
    }
}

#[allow(clippy::float_cmp)]
fn apply(op: BinaryOp, a: f64, b: f64) -> f64 {
    let truth = |cond: bool| if cond { 1.0 } else { 0.0 };
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a / b,
        BinaryOp::Mod => a % b,
        BinaryOp::Eq => truth(a == b),
        BinaryOp::NotEq => truth(a != b),
        BinaryOp::Lt => truth(a < b),
        BinaryOp::LtEq => truth(a <= b),
        BinaryOp::Gt => truth(a > b),
        BinaryOp::GtEq => truth(a >= b),
        BinaryOp::And => truth(a != 0.0 && b != 0.0),
        BinaryOp::Or => truth(a != 0.0 || b != 0.0),
        BinaryOp::Assign => b,
    }
}
