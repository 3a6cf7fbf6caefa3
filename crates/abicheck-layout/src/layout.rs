use core::fmt;

use crate::Packing;

/// Name and byte offset of one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldLayout {
    name: &'static str,
    offset: usize,
}

impl FieldLayout {
    /// Raw identifiers (`r#type`) are stored without their prefix.
    pub const fn new(name: &'static str, offset: usize) -> Self {
        Self {
            name: strip_raw_prefix(name),
            offset,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }
}

const fn strip_raw_prefix(name: &'static str) -> &'static str {
    match name.as_bytes() {
        [b'r', b'#', rest @ ..] => match core::str::from_utf8(rest) {
            Ok(stripped) => stripped,
            Err(_) => name,
        },
        _ => name,
    }
}

/// Size and member offsets of one variant of a struct, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StructLayout {
    size: usize,
    fields: &'static [FieldLayout],
}

impl StructLayout {
    pub const fn new(size: usize, fields: &'static [FieldLayout]) -> Self {
        Self { size, fields }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn fields(&self) -> &'static [FieldLayout] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldLayout> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl fmt::Display for StructLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.size)?;

        for field in self.fields {
            write!(f, "\n  {:>4}  {}", field.offset, field.name)?;
        }

        Ok(())
    }
}

/// A type declared in three variants (default, 8-byte and 4-byte packing).
///
/// Implemented by [`abi_struct!`](crate::abi_struct) and [`abi_union!`](crate::abi_union).
pub trait AbiStruct {
    /// Name of the type in the C headers, used in diagnostics.
    const NAME: &'static str;

    fn layout(packing: Packing) -> StructLayout;
}

/// Type-erased [`AbiStruct`], suitable for static catalogs.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    name: &'static str,
    layout: fn(Packing) -> StructLayout,
}

impl CatalogEntry {
    pub const fn new(name: &'static str, layout: fn(Packing) -> StructLayout) -> Self {
        Self { name, layout }
    }

    pub const fn of<T: AbiStruct>() -> Self {
        Self::new(T::NAME, T::layout)
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn layout(&self, packing: Packing) -> StructLayout {
        (self.layout)(packing)
    }
}
