#[macro_export]
macro_rules! error_codes {
    (
        $(#[$outer:meta])*
        $vis:vis enum $name:ident: $domain:ident, $prefix:literal {
            $(
                $(#[$inner:meta])*
                $variant:ident = $value:literal => $symbol:literal,
            )+
        }
    ) => {
        $(#[$outer])*
        #[repr(u32)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$inner])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Number of codes in the domain, sentinel included.
            $vis const COUNT: usize = [$(Self::$variant),+].len();

            /// Every code of the domain, in declaration order.
            $vis const ALL: [Self; Self::COUNT] = [$(Self::$variant),+];

            /// The validation domain owning this code set.
            #[inline]
            $vis const fn domain(self) -> $crate::codes::Domain {
                $crate::codes::Domain::$domain
            }

            /// Stable numeric value of the code (good for persisting).
            #[inline]
            $vis const fn as_raw(self) -> u32 {
                self as u32
            }

            /// Domain-qualified symbolic identifier of the code.
            $vis const fn name(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => ::std::concat!($prefix, "_", $symbol),
                    )+
                }
            }

            /// Looks up a code by its stable numeric value.
            $vis fn from_raw(value: u32) -> ::std::result::Result<Self, $crate::codes::UnknownCode> {
                match value {
                    $(
                        $value => Ok(Self::$variant),
                    )+
                    _ => Err($crate::codes::UnknownCode {
                        domain: $crate::codes::Domain::$domain,
                        value,
                    }),
                }
            }

            /// Looks up a code by its symbolic identifier.
            $vis fn try_from_name(name: &str) -> ::std::option::Option<Self> {
                $(
                    if name == Self::$variant.name() {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            /// Whether this is the domain's "no violation" sentinel.
            #[inline]
            $vis const fn is_none(self) -> bool {
                self.as_raw() == 0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
