#[macro_export]
/// Declares types as FFI-safe by implementing `IntoFFI` and `IntoRust`
/// with identity conversions.
macro_rules! ffi_safe {
    ($($ty:ty),*) => {
       $(
            impl $crate::IntoFFI for $ty {
                type FFI = $ty;
                fn into_ffi(self) -> Self::FFI {
                    self
                }
            }

            impl $crate::IntoRust for $ty {
                type Rust = $ty;
                unsafe fn into_rust(self) -> Self::Rust {
                    self
                }
            }
       )*
    };
}

#[macro_export]
/// Declares an opaque wrapper over a Rust type, moving it across the
/// boundary as a raw pointer, and exports the matching drop function.
///
/// Ownership transfers with the pointer: the foreign side holds it until
/// it either hands it back to a consuming function or calls the generated
/// `ferryui_drop_*`.
macro_rules! opaque {
    ($name:ident, $ty:ty, $ident:tt) => {
        #[allow(nonstandard_style)]
        #[repr(transparent)]
        pub struct $name(pub(crate) $ty);

        $crate::impl_deref!($name, $ty);

        impl $crate::IntoFFI for $ty {
            type FFI = *mut $name;
            fn into_ffi(self) -> Self::FFI {
                alloc::boxed::Box::into_raw(alloc::boxed::Box::new($name(self)))
            }
        }

        impl $crate::IntoFFI for Option<$ty> {
            type FFI = *mut $name;
            fn into_ffi(self) -> Self::FFI {
                match self {
                    Some(value) => value.into_ffi(),
                    None => core::ptr::null_mut(),
                }
            }
        }

        impl $crate::IntoRust for *mut $name {
            type Rust = $ty;
            unsafe fn into_rust(self) -> Self::Rust {
                unsafe { alloc::boxed::Box::from_raw(self).0 }
            }
        }

        paste::paste! {
            /// # Safety
            /// `value` must be a valid pointer obtained from this library
            /// and not already consumed or dropped.
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn [<ferryui_drop_ $ident>](value: *mut $name) {
                if !value.is_null() {
                    unsafe {
                        let _ = $crate::IntoRust::into_rust(value);
                    }
                }
            }
        }
    };
}

#[macro_export]
/// Implements `Deref` and `DerefMut` from a wrapper to its inner type.
macro_rules! impl_deref {
    ($ty:ty, $target:ty) => {
        impl core::ops::Deref for $ty {
            type Target = $target;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl core::ops::DerefMut for $ty {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}
