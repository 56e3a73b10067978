//! Runtime values.

use std::fmt;

use condor_ir::{DataType, NodeKind, StringInterner};

/// The typed payload of a context.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Float(f32),
    Double(f64),
    Long(i64),
    Char(char),
    Str(condor_ir::Name),
}

impl Value {
    /// The payload of a literal node.
    pub fn from_literal(kind: &NodeKind) -> Option<Value> {
        let value = match *kind {
            NodeKind::Bool(v) => Value::Boolean(v),
            NodeKind::Byte(v) => Value::Byte(v),
            NodeKind::Short(v) => Value::Short(v),
            NodeKind::Int(v) => Value::Int(v),
            NodeKind::Float(v) => Value::Float(v),
            NodeKind::Double(v) => Value::Double(v),
            NodeKind::Long(v) => Value::Long(v),
            NodeKind::Char(v) => Value::Char(v),
            NodeKind::Str(v) => Value::Str(v),
            _ => return None,
        };
        Some(value)
    }

    pub fn data_type(self) -> DataType {
        match self {
            Value::Boolean(_) => DataType::Boolean,
            Value::Byte(_) => DataType::Byte,
            Value::Short(_) => DataType::Short,
            Value::Int(_) => DataType::Int,
            Value::Float(_) => DataType::Float,
            Value::Double(_) => DataType::Double,
            Value::Long(_) => DataType::Long,
            Value::Char(_) => DataType::Char,
            Value::Str(_) => DataType::String,
        }
    }

    /// Promote to `f64` for arithmetic. Strings have no numeric value.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> Option<f64> {
        let x = match self {
            Value::Boolean(v) => f64::from(u8::from(v)),
            Value::Byte(v) => f64::from(v),
            Value::Short(v) => f64::from(v),
            Value::Int(v) => f64::from(v),
            Value::Float(v) => f64::from(v),
            Value::Double(v) => v,
            Value::Long(v) => v as f64,
            Value::Char(v) => f64::from(u32::from(v)),
            Value::Str(_) => return None,
        };
        Some(x)
    }

    /// Cast an arithmetic result back down to `ty`.
    ///
    /// Truncating and saturating, like a C cast. Types without a numeric
    /// representation keep the double.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::float_cmp
    )]
    pub fn from_f64(ty: DataType, x: f64) -> Value {
        match ty {
            DataType::Boolean => Value::Boolean(x != 0.0),
            DataType::Byte => Value::Byte(x as i8),
            DataType::Short => Value::Short(x as i16),
            DataType::Int => Value::Int(x as i32),
            DataType::Float => Value::Float(x as f32),
            DataType::Long => Value::Long(x as i64),
            DataType::Char => Value::Char(char::from_u32(x as u32).unwrap_or('\0')),
            DataType::Double | DataType::String | DataType::Var | DataType::Undefined => {
                Value::Double(x)
            }
        }
    }

    /// Convert to a declared variable type.
    ///
    /// `var` adopts the value's own type. Strings are never converted to or
    /// from numbers.
    pub fn convert(self, ty: DataType) -> Value {
        if !ty.is_primitive() || ty == self.data_type() || ty == DataType::String {
            return self;
        }
        match self.to_f64() {
            Some(x) => Value::from_f64(ty, x),
            None => self,
        }
    }

    /// Echo text: booleans as `1`/`0`, floating values with six decimals,
    /// chars as their code, strings verbatim.
    pub fn display<'a>(&self, interner: &'a StringInterner) -> ValueDisplay<'a> {
        ValueDisplay {
            value: *self,
            interner,
        }
    }
}

pub struct ValueDisplay<'a> {
    value: Value,
    interner: &'a StringInterner,
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Boolean(v) => write!(f, "{}", u8::from(v)),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Short(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{:.6}", f64::from(v)),
            Value::Double(v) => write!(f, "{v:.6}"),
            Value::Char(v) => write!(f, "{}", u32::from(v)),
            Value::Str(name) => f.write_str(self.interner.lookup(name)),
        }
    }
}
