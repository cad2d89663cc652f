//! Closed enum codes shared by the catalogs.
//!
//! Every category, modality or level in the data files is a short string code
//! (`"atac-specific"`, `"RNA"`, `"lower"`). The enums generated here parse only
//! the known codes, so an unknown code fails deserialization at load time
//! instead of leaking into the catalog.

use thiserror::Error;

/// An enum whose variants map one-to-one onto string codes.
pub trait CodedEnum: Copy + Eq + std::hash::Hash + std::fmt::Debug + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn from_code(code: &str) -> Option<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} code '{code}'")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: String,
}

macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $code)] $variant ),+
        }

        impl $crate::codes::CodedEnum for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $( $code => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::codes::CodedEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::codes::UnknownCode;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::codes::CodedEnum>::from_code(s).ok_or_else(|| {
                    $crate::codes::UnknownCode {
                        kind: stringify!($name),
                        code: s.to_string(),
                    }
                })
            }
        }
    };
}

pub(crate) use coded_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{DataType, ModelCategory};

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for category in ModelCategory::ALL {
            assert_eq!(ModelCategory::from_code(category.as_str()), Some(*category));
        }
    }

    #[test]
    fn test_from_str_reports_kind_and_code() {
        let err = "proteomics".parse::<DataType>().unwrap_err();
        assert_eq!(err.kind, "DataType");
        assert_eq!(err.code, "proteomics");
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert_eq!(DataType::from_code("RNA"), Some(DataType::Rna));
        assert_eq!(DataType::from_code("rna"), None);
    }
}
