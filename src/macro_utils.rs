// Copyright 2024 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Reachable only from inside the crate, so traits whose methods mention it
/// are sealed.
pub struct PrivateMarker;

/// Seal a trait: put `sealed_decl!{}` in the trait body.
macro_rules! sealed_decl {
    () => {
        #[doc(hidden)]
        fn __private__(&self) -> crate::macro_utils::PrivateMarker;
    };
}

/// Counterpart of `sealed_decl!{}` for each implementation.
macro_rules! sealed_impl {
    () => {
        fn __private__(&self) -> crate::macro_utils::PrivateMarker
        {
            crate::macro_utils::PrivateMarker
        }
    };
}

/// Expand to `$y`, discarding `$_x`. Used to repeat a token once per
/// element of another repetition.
macro_rules! sub {
    ($_x:tt $y:tt) => {
        $y
    };
}

/// Match on an `ElementKind` and evaluate `$body` with the type alias `$t`
/// bound to the corresponding element type.
macro_rules! with_kind {
    ($kind:expr, $t:ident => $body:expr) => {
        match $kind {
            $crate::ElementKind::Bool => {
                type $t = bool;
                $body
            }
            $crate::ElementKind::I8 => {
                type $t = i8;
                $body
            }
            $crate::ElementKind::I16 => {
                type $t = i16;
                $body
            }
            $crate::ElementKind::I32 => {
                type $t = i32;
                $body
            }
            $crate::ElementKind::I64 => {
                type $t = i64;
                $body
            }
            $crate::ElementKind::U8 => {
                type $t = u8;
                $body
            }
            $crate::ElementKind::U16 => {
                type $t = u16;
                $body
            }
            $crate::ElementKind::U32 => {
                type $t = u32;
                $body
            }
            $crate::ElementKind::U64 => {
                type $t = u64;
                $body
            }
            $crate::ElementKind::F32 => {
                type $t = f32;
                $body
            }
            $crate::ElementKind::F64 => {
                type $t = f64;
                $body
            }
        }
    };
}

/// Match on a `MultiArray` (by value or by reference) and evaluate `$body`
/// with `$a` bound to the typed array inside.
macro_rules! dispatch {
    ($array:expr, $a:ident => $body:expr) => {
        match $array {
            $crate::MultiArray::Bool($a) => $body,
            $crate::MultiArray::I8($a) => $body,
            $crate::MultiArray::I16($a) => $body,
            $crate::MultiArray::I32($a) => $body,
            $crate::MultiArray::I64($a) => $body,
            $crate::MultiArray::U8($a) => $body,
            $crate::MultiArray::U16($a) => $body,
            $crate::MultiArray::U32($a) => $body,
            $crate::MultiArray::U64($a) => $body,
            $crate::MultiArray::F32($a) => $body,
            $crate::MultiArray::F64($a) => $body,
        }
    };
}
