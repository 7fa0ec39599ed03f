//! Defines helper macros for generating domain port error enums.
//!
//! Each variant gets a `snake_case` constructor accepting `impl Into<_>` for
//! its fields. A variant may be followed by `; retryable` to mark failures a
//! caller can sensibly retry; the generated `is_retryable` reports it.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[must_use]
            pub const fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[must_use]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (@retry retryable) => { true };
    (@retry) => { false };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )?
                    => $message:expr $( ; $retry:ident )?
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            /// Whether retrying the failed call may succeed.
            #[must_use]
            pub const fn is_retryable(&self) -> bool {
                match self {
                    $( Self::$variant { .. } => define_port_error!(@retry $($retry)?), )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum LookupError {
            Missing => "record missing",
            Slow { message: String } => "lookup slow: {message}"; retryable,
            Rejected { message: String, code: u16 } => "rejected ({code}): {message}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(LookupError::missing(), LookupError::Missing);
        assert_eq!(LookupError::missing().to_string(), "record missing");
    }

    #[test]
    fn constructors_accept_str_and_preserve_other_types() {
        let err = LookupError::rejected("bad input", 400_u16);
        assert_eq!(err.to_string(), "rejected (400): bad input");
    }

    #[test]
    fn retryable_marker_is_reported() {
        assert!(LookupError::slow("deadline").is_retryable());
        assert!(!LookupError::missing().is_retryable());
        assert!(!LookupError::rejected("no", 400_u16).is_retryable());
    }
}
