/// Declares a `#[repr(C)]` struct together with its packed twins and its [`AbiStruct`]
/// implementation.
///
/// The first attribute must be `#[abi(name = "...")]`, giving the C name reported in
/// diagnostics. Remaining attributes apply to the default variant only, which always
/// derives `Clone` and `Copy`. The packed twins are named after the struct with a
/// `Pack8` and `Pack4` suffix and are hidden from the documentation.
///
/// [`AbiStruct`]: crate::AbiStruct
#[macro_export]
macro_rules! abi_struct {
    (
        #[abi(name = $abi_name:literal)]
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Clone, Copy)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        $crate::paste! {
            #[doc(hidden)]
            #[repr(C, packed(8))]
            #[derive(Clone, Copy)]
            $vis struct [<$name Pack8>] {
                $( pub $field: $field_ty, )*
            }

            #[doc(hidden)]
            #[repr(C, packed(4))]
            #[derive(Clone, Copy)]
            $vis struct [<$name Pack4>] {
                $( pub $field: $field_ty, )*
            }
        }

        $crate::__impl_abi_struct!($abi_name, $name { $( $field ),* });
    };
}

/// Same as [`abi_struct!`](crate::abi_struct) for `union` declarations.
///
/// Every member of a union sits at offset zero, so only the size can differ between
/// variants in practice. Members are checked all the same.
#[macro_export]
macro_rules! abi_union {
    (
        #[abi(name = $abi_name:literal)]
        $(#[$meta:meta])*
        $vis:vis union $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(Clone, Copy)]
        $vis union $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        $crate::paste! {
            #[doc(hidden)]
            #[repr(C, packed(8))]
            #[derive(Clone, Copy)]
            $vis union [<$name Pack8>] {
                $( pub $field: $field_ty, )*
            }

            #[doc(hidden)]
            #[repr(C, packed(4))]
            #[derive(Clone, Copy)]
            $vis union [<$name Pack4>] {
                $( pub $field: $field_ty, )*
            }
        }

        $crate::__impl_abi_struct!($abi_name, $name { $( $field ),* });
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_abi_struct {
    ($abi_name:literal, $name:ident { $( $field:ident ),* }) => {
        $crate::paste! {
            impl $crate::AbiStruct for $name {
                const NAME: &'static str = $abi_name;

                fn layout(packing: $crate::Packing) -> $crate::StructLayout {
                    match packing {
                        $crate::Packing::Default => $crate::struct_layout!($name { $( $field ),* }),
                        $crate::Packing::Pack8 => $crate::struct_layout!([<$name Pack8>] { $( $field ),* }),
                        $crate::Packing::Pack4 => $crate::struct_layout!([<$name Pack4>] { $( $field ),* }),
                    }
                }
            }
        }
    };
}

/// Builds the [`StructLayout`] of a type from the listed members.
///
/// Members are recorded in the order given, which should be the declaration order.
///
/// ```ignore
/// let layout = struct_layout!(Point { x, y });
/// assert_eq!(layout.size(), 8);
/// ```
///
/// [`StructLayout`]: crate::StructLayout
#[macro_export]
macro_rules! struct_layout {
    ($ty:ty { $( $field:ident ),* $(,)? }) => {{
        const FIELDS: &[$crate::FieldLayout] = &[
            $( $crate::FieldLayout::new(::core::stringify!($field), ::core::mem::offset_of!($ty, $field)), )*
        ];

        $crate::StructLayout::new(::core::mem::size_of::<$ty>(), FIELDS)
    }};
}
