use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(ClaimField {
    ClaimId => "claimId",
    ClaimantName => "claimantName",
    Village => "village",
    District => "district",
    State => "state",
    ClaimType => "claimType",
});

str_enum!(UploadFormat {
    Pdf => "pdf",
    Jpeg => "jpeg",
    Png => "png",
});

impl ClaimField {
    /// Every field, in record order.
    pub const ALL: [ClaimField; 6] = [
        Self::ClaimId,
        Self::ClaimantName,
        Self::Village,
        Self::District,
        Self::State,
        Self::ClaimType,
    ];

    /// Value used when a document yields nothing for this field.
    pub fn fallback(&self) -> &'static str {
        match self {
            Self::ClaimId => "FRA-XXXX-00000",
            Self::ClaimantName => "Unknown Claimant",
            Self::Village | Self::District | Self::State => "N/A",
            Self::ClaimType => "Individual",
        }
    }

    /// Human-readable label ("claimantName" -> "Claimant Name").
    pub fn label(&self) -> String {
        humanize_key(self.as_str())
    }
}

impl UploadFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["pdf"],
            Self::Jpeg => &["jpg", "jpeg"],
            Self::Png => &["png"],
        }
    }

    pub fn is_paged(&self) -> bool {
        matches!(self, Self::Pdf)
    }
}

/// Split a camelCase key into words and capitalize the first one.
fn humanize_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            label.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                label.push(' ');
            }
            label.push(ch);
        }
    }
    label
}
