// Code generated by otter-opgen. DO NOT EDIT.

#![allow(clippy::upper_case_acronyms)]

use std::fmt;

/// Coarse structural role of an opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Category {
    Op = 0,
    ArrayHead = 1,
    ArrayElem = 2,
    SliceHead = 3,
    SliceElem = 4,
    MapHead = 5,
    MapKey = 6,
    MapValue = 7,
    MapEnd = 8,
    Recursive = 9,
    StructField = 10,
    StructEnd = 11,
}

/// Number of opcodes.
pub const OP_TYPE_COUNT: usize = 40;

/// Encoder VM opcodes. The discriminant is the ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum OpType {
    End = 0,
    Interface = 1,
    Ptr = 2,
    SliceElem = 3,
    SliceEnd = 4,
    ArrayElem = 5,
    ArrayEnd = 6,
    MapKey = 7,
    MapValue = 8,
    MapEnd = 9,
    Recursive = 10,
    RecursivePtr = 11,
    RecursiveEnd = 12,
    StructAnonymousEnd = 13,
    Int = 14,
    String = 15,
    StructHeadInt = 16,
    StructHeadOmitEmptyInt = 17,
    StructPtrHeadInt = 18,
    StructPtrHeadOmitEmptyInt = 19,
    StructHeadString = 20,
    StructHeadOmitEmptyString = 21,
    StructPtrHeadString = 22,
    StructPtrHeadOmitEmptyString = 23,
    StructHead = 24,
    StructHeadOmitEmpty = 25,
    StructPtrHead = 26,
    StructPtrHeadOmitEmpty = 27,
    StructFieldInt = 28,
    StructFieldOmitEmptyInt = 29,
    StructEndInt = 30,
    StructEndOmitEmptyInt = 31,
    StructFieldString = 32,
    StructFieldOmitEmptyString = 33,
    StructEndString = 34,
    StructEndOmitEmptyString = 35,
    StructField = 36,
    StructFieldOmitEmpty = 37,
    StructEnd = 38,
    StructEndOmitEmpty = 39,
}

static OP_TYPES: [OpType; OP_TYPE_COUNT] = [
    OpType::End,
    OpType::Interface,
    OpType::Ptr,
    OpType::SliceElem,
    OpType::SliceEnd,
    OpType::ArrayElem,
    OpType::ArrayEnd,
    OpType::MapKey,
    OpType::MapValue,
    OpType::MapEnd,
    OpType::Recursive,
    OpType::RecursivePtr,
    OpType::RecursiveEnd,
    OpType::StructAnonymousEnd,
    OpType::Int,
    OpType::String,
    OpType::StructHeadInt,
    OpType::StructHeadOmitEmptyInt,
    OpType::StructPtrHeadInt,
    OpType::StructPtrHeadOmitEmptyInt,
    OpType::StructHeadString,
    OpType::StructHeadOmitEmptyString,
    OpType::StructPtrHeadString,
    OpType::StructPtrHeadOmitEmptyString,
    OpType::StructHead,
    OpType::StructHeadOmitEmpty,
    OpType::StructPtrHead,
    OpType::StructPtrHeadOmitEmpty,
    OpType::StructFieldInt,
    OpType::StructFieldOmitEmptyInt,
    OpType::StructEndInt,
    OpType::StructEndOmitEmptyInt,
    OpType::StructFieldString,
    OpType::StructFieldOmitEmptyString,
    OpType::StructEndString,
    OpType::StructEndOmitEmptyString,
    OpType::StructField,
    OpType::StructFieldOmitEmpty,
    OpType::StructEnd,
    OpType::StructEndOmitEmpty,
];

static OP_TYPE_NAMES: [&str; OP_TYPE_COUNT] = [
    "End",
    "Interface",
    "Ptr",
    "SliceElem",
    "SliceEnd",
    "ArrayElem",
    "ArrayEnd",
    "MapKey",
    "MapValue",
    "MapEnd",
    "Recursive",
    "RecursivePtr",
    "RecursiveEnd",
    "StructAnonymousEnd",
    "Int",
    "String",
    "StructHeadInt",
    "StructHeadOmitEmptyInt",
    "StructPtrHeadInt",
    "StructPtrHeadOmitEmptyInt",
    "StructHeadString",
    "StructHeadOmitEmptyString",
    "StructPtrHeadString",
    "StructPtrHeadOmitEmptyString",
    "StructHead",
    "StructHeadOmitEmpty",
    "StructPtrHead",
    "StructPtrHeadOmitEmpty",
    "StructFieldInt",
    "StructFieldOmitEmptyInt",
    "StructEndInt",
    "StructEndOmitEmptyInt",
    "StructFieldString",
    "StructFieldOmitEmptyString",
    "StructEndString",
    "StructEndOmitEmptyString",
    "StructField",
    "StructFieldOmitEmpty",
    "StructEnd",
    "StructEndOmitEmpty",
];

static OP_CATEGORIES: [Category; OP_TYPE_COUNT] = [
    Category::Op,
    Category::Op,
    Category::Op,
    Category::SliceElem,
    Category::Op,
    Category::ArrayElem,
    Category::Op,
    Category::MapKey,
    Category::MapValue,
    Category::MapEnd,
    Category::Op,
    Category::Op,
    Category::Op,
    Category::StructEnd,
    Category::Op,
    Category::Op,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructField,
    Category::StructEnd,
    Category::StructEnd,
    Category::StructField,
    Category::StructField,
    Category::StructEnd,
    Category::StructEnd,
    Category::StructField,
    Category::StructField,
    Category::StructEnd,
    Category::StructEnd,
];

const NO_SIBLING: u16 = u16::MAX;

static OP_SIBLINGS: [[u16; 4]; OP_TYPE_COUNT] = [
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [18, NO_SIBLING, 17, NO_SIBLING],
    [19, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, 16, 19, NO_SIBLING],
    [NO_SIBLING, 17, NO_SIBLING, NO_SIBLING],
    [22, NO_SIBLING, 21, NO_SIBLING],
    [23, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, 20, 23, NO_SIBLING],
    [NO_SIBLING, 21, NO_SIBLING, NO_SIBLING],
    [26, NO_SIBLING, 25, NO_SIBLING],
    [27, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, 24, 27, NO_SIBLING],
    [NO_SIBLING, 25, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, 29, 30],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, 31],
    [NO_SIBLING, NO_SIBLING, 31, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, 33, 34],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, 35],
    [NO_SIBLING, NO_SIBLING, 35, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, 37, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, 39, NO_SIBLING],
    [NO_SIBLING, NO_SIBLING, NO_SIBLING, NO_SIBLING],
];

impl OpType {
    /// Opcode for an ordinal, `None` when out of range.
    pub fn from_u16(ordinal: u16) -> Option<OpType> {
        OP_TYPES.get(ordinal as usize).copied()
    }

    /// Name for an ordinal, empty when out of range.
    pub fn name(ordinal: u16) -> &'static str {
        OP_TYPE_NAMES.get(ordinal as usize).copied().unwrap_or("")
    }

    /// Opcode name.
    pub fn as_str(self) -> &'static str {
        OP_TYPE_NAMES[self as usize]
    }

    /// Structural category.
    pub fn category(self) -> Category {
        OP_CATEGORIES[self as usize]
    }

    fn sibling(self, column: usize) -> Option<OpType> {
        match OP_SIBLINGS[self as usize][column] {
            NO_SIBLING => None,
            ordinal => OpType::from_u16(ordinal),
        }
    }

    /// Pointer-receiver variant of a struct head.
    pub fn try_head_to_ptr_head(self) -> Option<OpType> {
        self.sibling(0)
    }

    /// Like `try_head_to_ptr_head`, returning `self` when there is no sibling.
    pub fn head_to_ptr_head(self) -> OpType {
        self.try_head_to_ptr_head().unwrap_or(self)
    }

    /// Plain variant of a pointer-receiver struct head.
    pub fn try_ptr_head_to_head(self) -> Option<OpType> {
        self.sibling(1)
    }

    /// Like `try_ptr_head_to_head`, returning `self` when there is no sibling.
    pub fn ptr_head_to_head(self) -> OpType {
        self.try_ptr_head_to_head().unwrap_or(self)
    }

    /// Omit-empty variant of a struct head.
    pub fn try_head_to_omit_empty_head(self) -> Option<OpType> {
        self.sibling(2)
    }

    /// Like `try_head_to_omit_empty_head`, returning `self` when there is no sibling.
    pub fn head_to_omit_empty_head(self) -> OpType {
        self.try_head_to_omit_empty_head().unwrap_or(self)
    }

    /// Omit-empty variant of a struct field or end.
    pub fn try_field_to_omit_empty_field(self) -> Option<OpType> {
        self.sibling(2)
    }

    /// Like `try_field_to_omit_empty_field`, returning `self` when there is no sibling.
    pub fn field_to_omit_empty_field(self) -> OpType {
        self.try_field_to_omit_empty_field().unwrap_or(self)
    }

    /// Struct-end variant of a typed struct field.
    pub fn try_field_to_end(self) -> Option<OpType> {
        self.sibling(3)
    }

    /// Like `try_field_to_end`, returning `self` when there is no sibling.
    pub fn field_to_end(self) -> OpType {
        self.try_field_to_end().unwrap_or(self)
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
