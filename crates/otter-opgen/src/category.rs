//! Opcode categories

use std::fmt;

/// Coarse structural role of an opcode.
///
/// The discriminant is the value baked into the generated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    /// Any opcode without a structural role
    Op = 0,
    /// Array header
    ArrayHead = 1,
    /// Array element
    ArrayElem = 2,
    /// Slice header
    SliceHead = 3,
    /// Slice element
    SliceElem = 4,
    /// Map header
    MapHead = 5,
    /// Map key
    MapKey = 6,
    /// Map value
    MapValue = 7,
    /// Map terminator
    MapEnd = 8,
    /// Recursive struct reference
    Recursive = 9,
    /// Struct head or field
    StructField = 10,
    /// Struct terminator
    StructEnd = 11,
}

impl Category {
    /// Every category, in discriminant order
    pub const ALL: [Category; 12] = [
        Category::Op,
        Category::ArrayHead,
        Category::ArrayElem,
        Category::SliceHead,
        Category::SliceElem,
        Category::MapHead,
        Category::MapKey,
        Category::MapValue,
        Category::MapEnd,
        Category::Recursive,
        Category::StructField,
        Category::StructEnd,
    ];

    /// Variant name as it appears in generated code
    pub const fn name(self) -> &'static str {
        match self {
            Category::Op => "Op",
            Category::ArrayHead => "ArrayHead",
            Category::ArrayElem => "ArrayElem",
            Category::SliceHead => "SliceHead",
            Category::SliceElem => "SliceElem",
            Category::MapHead => "MapHead",
            Category::MapKey => "MapKey",
            Category::MapValue => "MapValue",
            Category::MapEnd => "MapEnd",
            Category::Recursive => "Recursive",
            Category::StructField => "StructField",
            Category::StructEnd => "StructEnd",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify an opcode name.
///
/// Struct opcodes are recognized by substring, the container families by an
/// exact-name table. Anything else is `Op`; unknown names are not an error.
pub fn classify(name: &str) -> Category {
    if name.contains("Struct") {
        if name.contains("End") {
            return Category::StructEnd;
        }
        return Category::StructField;
    }
    match name {
        "Array" | "ArrayPtr" => Category::ArrayHead,
        "ArrayElem" => Category::ArrayElem,
        "Slice" | "SlicePtr" => Category::SliceHead,
        "SliceElem" => Category::SliceElem,
        "Map" | "MapPtr" => Category::MapHead,
        "MapKey" => Category::MapKey,
        "MapValue" => Category::MapValue,
        "MapEnd" => Category::MapEnd,
        _ => Category::Op,
    }
}
