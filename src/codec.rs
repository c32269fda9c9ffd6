//! Tolerant wire-string enum codec
//!
//! Every enumerated resource field is backed by a static bidirectional
//! table of (wire string, variant) pairs plus an explicit `Unknown`
//! sentinel. Decoding is total: a wire value this client version does not
//! recognize maps to the sentinel instead of failing, so server-side
//! additions to an enumeration never break deserialization. Encoding the
//! sentinel fails, since it has no wire representation of its own.
//!
//! Enums are declared with the [`wire_enum!`] macro, which generates the
//! variant list, the [`WireEnum`] table, and serde implementations wired
//! through [`decode`] and [`encode`].

use std::fmt;

use crate::error::EnumError;

/// A string-backed enumeration with a closed wire table and a sentinel.
///
/// Implementations are generated by [`wire_enum!`]; the table is immutable
/// and lookups are pure, so values are safe to share across threads.
pub trait WireEnum: Copy + PartialEq + Sized + 'static {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// Bidirectional (wire string, variant) table. The sentinel is not
    /// listed: it exists only to absorb unrecognized input.
    const TABLE: &'static [(&'static str, Self)];

    /// Sentinel standing in for any wire value outside the table.
    const UNKNOWN: Self;
}

/// Decode a wire string into its variant.
///
/// Total and case-sensitive: every input produces either its mapped
/// variant or the sentinel. Never fails.
pub fn decode<E: WireEnum>(wire: &str) -> E {
    match E::TABLE.iter().find(|(name, _)| *name == wire) {
        Some((_, value)) => *value,
        None => {
            tracing::debug!(
                type_name = E::NAME,
                raw = wire,
                "unrecognized wire value, using Unknown sentinel"
            );
            E::UNKNOWN
        }
    }
}

/// Encode a variant back to its wire string.
///
/// Fails with [`EnumError::InvalidEnumValue`] for the sentinel or any
/// value missing from the table.
pub fn encode<E: WireEnum + fmt::Debug>(value: E) -> Result<&'static str, EnumError> {
    E::TABLE
        .iter()
        .find(|(_, candidate)| *candidate == value)
        .map(|(name, _)| *name)
        .ok_or_else(|| EnumError::InvalidEnumValue {
            type_name: E::NAME,
            value: format!("{value:?}"),
        })
}

/// Declares a wire-string enum with an `Unknown` sentinel.
///
/// ```ignore
/// wire_enum! {
///     /// Payout lifecycle state.
///     pub enum PayoutStatus {
///         Pending => "pending",
///         Paid => "paid",
///     }
/// }
/// ```
///
/// This generates:
/// - the enum itself, with a trailing `Unknown` variant
/// - a [`WireEnum`](crate::codec::WireEnum) impl carrying the wire table
/// - `Deserialize` in terms of [`decode`](crate::codec::decode) (total)
/// - `Serialize` in terms of [`encode`](crate::codec::encode) (fails on
///   `Unknown`)
/// - `Display` rendering the wire string, or `"unknown"` for the sentinel
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Wire value not recognized by this client version.
            Unknown,
        }

        impl $crate::codec::WireEnum for $name {
            const NAME: &'static str = stringify!($name);
            const TABLE: &'static [(&'static str, Self)] = &[
                $(($wire, Self::$variant),)+
            ];
            const UNKNOWN: Self = Self::Unknown;
        }

        impl $name {
            /// Wire string for this value. Fails for `Unknown`.
            $vis fn as_wire_str(self) -> ::std::result::Result<&'static str, $crate::error::EnumError> {
                $crate::codec::encode(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match $crate::codec::encode(*self) {
                    Ok(name) => f.write_str(name),
                    Err(_) => f.write_str("unknown"),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                match $crate::codec::encode(*self) {
                    Ok(name) => serializer.serialize_str(name),
                    Err(err) => Err(<S::Error as ::serde::ser::Error>::custom(err)),
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($crate::codec::decode(&raw))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    wire_enum! {
        /// Test fixture mirroring a small wire enumeration.
        pub enum Flavour {
            Sweet => "sweet",
            Sour => "sour",
            Bitter => "bitter",
        }
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode::<Flavour>("sweet"), Flavour::Sweet);
        assert_eq!(decode::<Flavour>("sour"), Flavour::Sour);
        assert_eq!(decode::<Flavour>("bitter"), Flavour::Bitter);
    }

    #[test]
    fn test_decode_is_total() {
        assert_eq!(decode::<Flavour>("umami"), Flavour::Unknown);
        assert_eq!(decode::<Flavour>(""), Flavour::Unknown);
        // Case-sensitive lookup: near misses fall through to the sentinel.
        assert_eq!(decode::<Flavour>("Sweet"), Flavour::Unknown);
    }

    #[test]
    fn test_encode_round_trips_every_table_entry() {
        for (wire, value) in Flavour::TABLE {
            assert_eq!(encode(*value).unwrap(), *wire);
            assert_eq!(decode::<Flavour>(wire), *value);
        }
    }

    #[test]
    fn test_encode_rejects_sentinel() {
        let err = encode(Flavour::Unknown).unwrap_err();
        assert_eq!(
            err,
            EnumError::InvalidEnumValue {
                type_name: "Flavour",
                value: "Unknown".to_string(),
            }
        );
    }

    #[test]
    fn test_as_wire_str() {
        assert_eq!(Flavour::Sweet.as_wire_str().unwrap(), "sweet");
        assert!(Flavour::Unknown.as_wire_str().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Flavour::Sour).unwrap();
        assert_eq!(json, r#""sour""#);
        let back: Flavour = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Flavour::Sour);
    }

    #[test]
    fn test_serialize_sentinel_fails() {
        assert!(serde_json::to_string(&Flavour::Unknown).is_err());
    }

    #[test]
    fn test_deserialize_unrecognized_succeeds() {
        let value: Flavour = serde_json::from_str(r#""some_future_flavour""#).unwrap();
        assert_eq!(value, Flavour::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(Flavour::Bitter.to_string(), "bitter");
        assert_eq!(Flavour::Unknown.to_string(), "unknown");
    }
}
