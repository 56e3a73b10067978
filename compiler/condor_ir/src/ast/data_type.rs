use std::fmt;

/// Declared-type vocabulary.
///
/// `Var` means "take the type of the initializer"; `Undefined` is the type
/// of anything with no value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum DataType {
    #[default]
    Undefined,
    Var,
    Boolean,
    Byte,
    Short,
    Int,
    Float,
    Double,
    Long,
    Char,
    String,
}

impl DataType {
    /// A concrete primitive a value can be cast to.
    #[inline]
    pub fn is_primitive(self) -> bool {
        !matches!(self, DataType::Undefined | DataType::Var)
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::Undefined => "undefined",
            DataType::Var => "var",
            DataType::Boolean => "boolean",
            DataType::Byte => "byte",
            DataType::Short => "short",
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Long => "long",
            DataType::Char => "char",
            DataType::String => "string",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
