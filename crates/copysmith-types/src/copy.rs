//! Copy request and result types.
//!
//! These mirror the JSON body accepted by `POST /api/generate` (camelCase
//! field names, kebab-case copy-type tags) and the body it returns.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::str::FromStr;

/// Category of marketing copy to generate.
///
/// Selects both the prompt template and the fallback block. Deserialization
/// is lenient: any value other than a known tag (unknown strings, `null`,
/// numbers) becomes [`CopyType::WebsiteHeadline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyType {
    WebsiteHeadline,
    ProductDescription,
    EmailCampaign,
    SocialMediaPost,
    AdCopy,
    BlogIntro,
    SalesLetter,
    Tagline,
}

impl CopyType {
    /// Every copy type, in form order.
    pub const ALL: [CopyType; 8] = [
        CopyType::WebsiteHeadline,
        CopyType::ProductDescription,
        CopyType::EmailCampaign,
        CopyType::SocialMediaPost,
        CopyType::AdCopy,
        CopyType::BlogIntro,
        CopyType::SalesLetter,
        CopyType::Tagline,
    ];

    /// Wire tag, e.g. `"social-media-post"`.
    pub fn tag(&self) -> &'static str {
        match self {
            CopyType::WebsiteHeadline => "website-headline",
            CopyType::ProductDescription => "product-description",
            CopyType::EmailCampaign => "email-campaign",
            CopyType::SocialMediaPost => "social-media-post",
            CopyType::AdCopy => "ad-copy",
            CopyType::BlogIntro => "blog-intro",
            CopyType::SalesLetter => "sales-letter",
            CopyType::Tagline => "tagline",
        }
    }

    /// Human-readable label for form selects.
    pub fn label(&self) -> &'static str {
        match self {
            CopyType::WebsiteHeadline => "Website Headline",
            CopyType::ProductDescription => "Product Description",
            CopyType::EmailCampaign => "Email Campaign",
            CopyType::SocialMediaPost => "Social Media Post",
            CopyType::AdCopy => "Ad Copy",
            CopyType::BlogIntro => "Blog Introduction",
            CopyType::SalesLetter => "Sales Letter",
            CopyType::Tagline => "Tagline/Slogan",
        }
    }

    /// Resolve a tag, defaulting to the headline type for unknown input.
    pub fn from_tag_or_default(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl Default for CopyType {
    fn default() -> Self {
        CopyType::WebsiteHeadline
    }
}

impl fmt::Display for CopyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for CopyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CopyType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| format!("invalid copy type: '{s}'"))
    }
}

impl<'de> Deserialize<'de> for CopyType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match LenientTag::deserialize(deserializer)? {
            LenientTag::Text(tag) => CopyType::from_tag_or_default(&tag),
            LenientTag::Other(_) => CopyType::default(),
        })
    }
}

/// A form value that should be a string but may arrive as anything.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientTag {
    Text(String),
    Other(IgnoredAny),
}

/// Voice the copy should be written in.
///
/// The form offers seven tones. A submitted tone outside that list is kept
/// verbatim as [`Tone::Custom`] and interpolated into the prompt as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tone {
    Professional,
    Casual,
    Friendly,
    Authoritative,
    Playful,
    Urgent,
    Inspirational,
    Custom(String),
}

impl Tone {
    pub const ALL: [Tone; 7] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Authoritative,
        Tone::Playful,
        Tone::Urgent,
        Tone::Inspirational,
    ];

    pub fn label(&self) -> &str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Friendly => "Friendly",
            Tone::Authoritative => "Authoritative",
            Tone::Playful => "Playful",
            Tone::Urgent => "Urgent",
            Tone::Inspirational => "Inspirational",
            Tone::Custom(text) => text,
        }
    }

    /// Prompt text for this tone: the lowercase tag, or the custom text.
    pub fn as_str(&self) -> &str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Authoritative => "authoritative",
            Tone::Playful => "playful",
            Tone::Urgent => "urgent",
            Tone::Inspirational => "inspirational",
            Tone::Custom(text) => text,
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Professional
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: only the seven listed tones, case-insensitively.
impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("invalid tone: '{s}'"))
    }
}

/// Listed tones match case-insensitively; anything else becomes
/// [`Tone::Custom`].
impl From<String> for Tone {
    fn from(text: String) -> Self {
        text.parse().unwrap_or(Tone::Custom(text))
    }
}

impl Serialize for Tone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Tone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match LenientTag::deserialize(deserializer)? {
            LenientTag::Text(text) => Tone::from(text),
            LenientTag::Other(_) => Tone::default(),
        })
    }
}

/// A single form submission.
///
/// Free-text fields are taken as-is; missing ones deserialize to empty
/// strings and are interpolated into the prompt unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyRequest {
    #[serde(rename = "type", default)]
    pub copy_type: CopyType,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub key_benefits: String,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl CopyRequest {
    /// Additional context, if present and non-empty.
    pub fn additional_context(&self) -> Option<&str> {
        self.additional_info.as_deref().filter(|info| !info.is_empty())
    }
}

/// Body returned by `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CopyResult {
    Copy { copy: String },
    Error { error: String },
}

impl CopyResult {
    /// The generic message shown for any request-level failure.
    pub const GENERIC_ERROR: &'static str = "Failed to generate copy";

    pub fn copy(text: impl Into<String>) -> Self {
        CopyResult::Copy { copy: text.into() }
    }

    pub fn generic_error() -> Self {
        CopyResult::Error {
            error: Self::GENERIC_ERROR.to_string(),
        }
    }
}
