//! Macros for defining identity tokens.

/// Defines an identity token type carrying a unique `name` and the short
/// `abbreviation` a parser is expected to recognise.
///
/// Tokens built from string literals are `const`, so built-in units can be
/// declared as plain constants.
macro_rules! identity_token {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name {
            name: ::std::borrow::Cow<'static, str>,
            abbreviation: ::std::borrow::Cow<'static, str>,
        }

        impl $name {
            /// Creates a token from string literals.
            pub const fn from_static(name: &'static str, abbreviation: &'static str) -> Self {
                Self {
                    name: ::std::borrow::Cow::Borrowed(name),
                    abbreviation: ::std::borrow::Cow::Borrowed(abbreviation),
                }
            }

            /// Creates a token from owned strings.
            pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
                Self {
                    name: ::std::borrow::Cow::Owned(name.into()),
                    abbreviation: ::std::borrow::Cow::Owned(abbreviation.into()),
                }
            }

            /// Unique name of the unit.
            pub fn name(&self) -> &str {
                &self.name
            }

            /// Default short spelling of the unit.
            pub fn abbreviation(&self) -> &str {
                &self.abbreviation
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.abbreviation)
            }
        }
    };
}

pub(crate) use identity_token;
