use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    // Floating point
    BF16,
    F16,
    F32,
    F64,
    // Integers
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
}

impl DataType {
    pub fn size_in_bits(&self) -> usize {
        match self {
            DataType::BF16 => 16,
            DataType::F16 => 16,
            DataType::F32 => 32,
            DataType::F64 => 64,
            DataType::I8 => 8,
            DataType::U8 => 8,
            DataType::I16 => 16,
            DataType::U16 => 16,
            DataType::I32 => 32,
            DataType::U32 => 32,
            DataType::I64 => 64,
            DataType::U64 => 64,
        }
    }

    pub fn size_in_bytes(&self) -> usize {
        self.size_in_bits() / 8
    }

    pub fn is_64_bit(&self) -> bool {
        self.size_in_bits() == 64
    }

    /// Scalar type name used by the kernel template.
    pub fn kernel_type_name(&self) -> &'static str {
        match self {
            DataType::BF16 => "ushort",
            DataType::F16 => "half",
            DataType::F32 => "float",
            DataType::F64 => "double",
            DataType::I8 => "char",
            DataType::U8 => "uchar",
            DataType::I16 => "short",
            DataType::U16 => "ushort",
            DataType::I32 => "int",
            DataType::U32 => "uint",
            DataType::I64 => "long",
            DataType::U64 => "ulong",
        }
    }
}
