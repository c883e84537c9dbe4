#[macro_export]
macro_rules! impl_default_for {
    ($name:ident) => {
        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

/// String newtype with the usual conversions, callers need `derive_more` and `serde`
#[macro_export]
macro_rules! new_type {
    ($name:ident, String) => {
        #[derive(
            Clone,
            Debug,
            Default,
            PartialEq,
            ::serde::Serialize,
            ::serde::Deserialize,
            ::derive_more::Deref,
            ::derive_more::Display,
            ::derive_more::From,
            ::derive_more::Into,
            Hash,
            Eq,
            Ord,
            PartialOrd,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}
