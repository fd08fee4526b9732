use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// A registered household. The head of family is the registrant and is
/// implicit: it is never stored in `members`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyRecord {
    /// Persistence identifier, when the record came from the API.
    #[serde(default, deserialize_with = "serde_helpers::optional_id")]
    pub id: Option<String>,
    /// Head of family's full name.
    #[serde(default, deserialize_with = "serde_helpers::null_as_blank")]
    pub full_name: String,
    /// Head of family's 14-digit national identifier.
    #[serde(default, deserialize_with = "serde_helpers::null_as_blank")]
    pub national_id: String,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub phone: Option<String>,
    /// Monthly household income.
    #[serde(default, deserialize_with = "serde_helpers::optional_decimal")]
    pub income: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub job: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_status")]
    pub social_status: Option<SocialStatus>,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub education_level: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub clothing_size: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub clothing_details: Option<String>,
    /// Household members other than the head, in registration order.
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub members: Vec<MemberRecord>,
    /// Aid recorded against the family as a whole (or its head).
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub family_aids: Vec<AidRecord>,
}

impl FamilyRecord {
    /// Number of people in the household, counting the implicit head.
    pub fn household_size(&self) -> usize {
        self.members.len() + 1
    }

    /// Look up a member by persistence identifier.
    pub fn member(&self, id: &str) -> Option<&MemberRecord> {
        self.members.iter().find(|m| m.id.as_deref() == Some(id))
    }
}

/// A household member other than the head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecord {
    #[serde(default, deserialize_with = "serde_helpers::optional_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_blank")]
    pub name: String,
    /// Relationship to the head. Missing, `null`, or unrecognized roles
    /// decode as [`Role::Other`].
    #[serde(default, deserialize_with = "serde_helpers::null_as_default")]
    pub role: Role,
    /// Members (young children in particular) may not have an identifier yet.
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub national_id: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_decimal")]
    pub income: Option<Decimal>,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub job: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_status")]
    pub social_status: Option<SocialStatus>,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub education_level: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub clothing_size: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::optional_text")]
    pub clothing_details: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::null_as_empty")]
    pub individual_aids: Vec<AidRecord>,
}

/// One disbursement of financial or material aid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AidRecord {
    #[serde(default, deserialize_with = "serde_helpers::optional_id")]
    pub id: Option<String>,
    #[serde(alias = "type")]
    pub kind: AidKind,
    #[serde(
        default,
        alias = "recurrenceType",
        deserialize_with = "serde_helpers::null_as_default"
    )]
    pub recurrence: Recurrence,
    #[serde(default, deserialize_with = "serde_helpers::null_as_blank")]
    pub description: String,
    /// Non-negative amount in the organization's currency.
    pub amount: Decimal,
    /// Disbursement timestamp.
    #[serde(deserialize_with = "serde_helpers::timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default, deserialize_with = "serde_helpers::optional_id")]
    pub family_id: Option<String>,
    /// Targeted member for `INDIVIDUAL` aid. `None` means the head of family.
    #[serde(default, deserialize_with = "serde_helpers::optional_id")]
    pub member_id: Option<String>,
}

impl AidRecord {
    /// Resolve who received this aid within `family`.
    ///
    /// A member id that does not match any member of the family falls back to
    /// the head, the same as an absent id.
    pub fn beneficiary<'a>(&self, family: &'a FamilyRecord) -> Beneficiary<'a> {
        match self.kind {
            AidKind::Family => Beneficiary::Family,
            AidKind::Individual => match self.member_id.as_deref().and_then(|id| family.member(id)) {
                Some(member) => Beneficiary::Member(member),
                None => Beneficiary::Head,
            },
        }
    }
}

/// Recipient of an aid record, resolved against its family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Beneficiary<'a> {
    /// The household as a whole.
    Family,
    /// The head of family.
    Head,
    /// A stored household member.
    Member(&'a MemberRecord),
}

/// Whether aid targets the household or one person in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AidKind {
    /// `FAMILY`: disbursed to the household.
    Family,
    /// `INDIVIDUAL`: disbursed to the head or a specific member.
    Individual,
}

impl AidKind {
    /// Wire code used by the API.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Family => "FAMILY",
            Self::Individual => "INDIVIDUAL",
        }
    }

    /// Parse from the API wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FAMILY" => Some(Self::Family),
            "INDIVIDUAL" => Some(Self::Individual),
            _ => None,
        }
    }
}

/// How often an aid disbursement repeats. Affects filtering and display,
/// never the amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recurrence {
    /// `NONE`: one-time.
    #[default]
    None,
    /// MONTHLY.
    Monthly,
    /// YEARLY.
    Yearly,
}

impl Recurrence {
    /// Wire code used by the API.
    pub fn code(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Parse from the API wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "NONE" => Some(Self::None),
            "MONTHLY" => Some(Self::Monthly),
            "YEARLY" => Some(Self::Yearly),
            _ => None,
        }
    }

    pub fn is_recurring(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Relationship of a person to the household.
///
/// `Head` is never stored on a member; report rows synthesize it for the
/// registrant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Role {
    Head,
    Father,
    Mother,
    Son,
    Daughter,
    Grandparent,
    #[default]
    Other,
}

impl Role {
    /// Stored role members can be registered with.
    pub const MEMBER_ROLES: [Role; 6] = [
        Role::Father,
        Role::Mother,
        Role::Son,
        Role::Daughter,
        Role::Grandparent,
        Role::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Father => "Father",
            Self::Mother => "Mother",
            Self::Son => "Son",
            Self::Daughter => "Daughter",
            Self::Grandparent => "Grandparent",
            Self::Other => "Other",
        }
    }

    /// Parse a role code. Anything unrecognized is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "Head" => Some(Self::Head),
            "Father" => Some(Self::Father),
            "Mother" => Some(Self::Mother),
            "Son" => Some(Self::Son),
            "Daughter" => Some(Self::Daughter),
            "Grandparent" => Some(Self::Grandparent),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Self::from_code(&value).unwrap_or_else(|| {
            tracing::debug!(role = %value, "unrecognized member role, using Other");
            Self::Other
        })
    }
}

/// Marital or social status. Values outside the registration form's list
/// are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    Other(String),
}

impl SocialStatus {
    pub fn code(&self) -> &str {
        match self {
            Self::Single => "Single",
            Self::Married => "Married",
            Self::Divorced => "Divorced",
            Self::Widowed => "Widowed",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for SocialStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Single" => Self::Single,
            "Married" => Self::Married,
            "Divorced" => Self::Divorced,
            "Widowed" => Self::Widowed,
            _ => Self::Other(value),
        }
    }
}

impl From<SocialStatus> for String {
    fn from(value: SocialStatus) -> Self {
        match value {
            SocialStatus::Other(s) => s,
            other => other.code().to_string(),
        }
    }
}
