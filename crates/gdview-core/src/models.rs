//! Domain models for the dashboard.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Document types an operator can search for.
///
/// PSR documents live in the `psr` bucket role; ACK, EOD, and GDPost all
/// share the `ack` bucket role by platform convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DocType {
    #[serde(rename = "ACK")]
    Ack,
    #[serde(rename = "EOD")]
    Eod,
    #[serde(rename = "PSR")]
    Psr,
    #[serde(rename = "GDPost")]
    GdPost,
}

impl DocType {
    pub const ALL: [DocType; 4] = [DocType::Ack, DocType::Eod, DocType::Psr, DocType::GdPost];

    /// The bucket role this document type is stored under.
    pub fn bucket_role(&self) -> &'static str {
        match self {
            DocType::Psr => "psr",
            DocType::Ack | DocType::Eod | DocType::GdPost => "ack",
        }
    }

    /// Placeholder text for the identifier input box.
    pub fn input_placeholder(&self) -> &'static str {
        match self {
            DocType::Psr => "Enter MSG-id",
            DocType::Ack | DocType::Eod | DocType::GdPost => "Enter rail-bulk-id",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Ack => "ACK",
            DocType::Eod => "EOD",
            DocType::Psr => "PSR",
            DocType::GdPost => "GDPost",
        }
    }
}

impl std::str::FromStr for DocType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACK" => Ok(DocType::Ack),
            "EOD" => Ok(DocType::Eod),
            "PSR" => Ok(DocType::Psr),
            "GDPost" => Ok(DocType::GdPost),
            other => Err(AppError::InvalidInput(format!(
                "Invalid document type: {}. Must be 'ACK', 'EOD', 'PSR', or 'GDPost'",
                other
            ))),
        }
    }
}

/// One entry of the bucket dropdown: the role name as label, the concrete
/// bucket id as value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BucketOption {
    pub label: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn psr_uses_psr_role_others_share_ack() {
        assert_eq!(DocType::Psr.bucket_role(), "psr");
        assert_eq!(DocType::Ack.bucket_role(), "ack");
        assert_eq!(DocType::Eod.bucket_role(), "ack");
        assert_eq!(DocType::GdPost.bucket_role(), "ack");
    }

    #[test]
    fn placeholder_is_a_pure_function_of_type() {
        assert_eq!(DocType::Psr.input_placeholder(), "Enter MSG-id");
        for ty in [DocType::Ack, DocType::Eod, DocType::GdPost] {
            assert_eq!(ty.input_placeholder(), "Enter rail-bulk-id");
        }
    }

    #[test]
    fn parses_wire_names_and_rejects_unknown() {
        assert_eq!(DocType::from_str("GDPost").unwrap(), DocType::GdPost);
        assert!(DocType::from_str("gdpost").is_err());
        assert!(DocType::from_str("").is_err());
    }
}
