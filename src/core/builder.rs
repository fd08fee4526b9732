use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;

use super::error::{AidError, join_errors};
use super::types::*;
use super::validation;

/// Builder for family registrations.
///
/// ```
/// use familyaid::core::*;
/// use rust_decimal_macros::dec;
///
/// let family = FamilyBuilder::new("Ahmed Hassan", "28501150100011")
///     .phone("01012345678")
///     .income(dec!(2500))
///     .social_status(SocialStatus::Married)
///     .add_member(MemberBuilder::new("Mona Ahmed", Role::Daughter).clothing_size("M").build())
///     .build()
///     .unwrap();
/// assert_eq!(family.household_size(), 2);
/// ```
pub struct FamilyBuilder {
    record: FamilyRecord,
}

impl FamilyBuilder {
    pub fn new(full_name: impl Into<String>, national_id: impl Into<String>) -> Self {
        Self {
            record: FamilyRecord {
                id: None,
                full_name: full_name.into(),
                national_id: national_id.into(),
                address: None,
                phone: None,
                income: None,
                job: None,
                social_status: None,
                education_level: None,
                clothing_size: None,
                clothing_details: None,
                members: Vec::new(),
                family_aids: Vec::new(),
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.record.id = Some(id.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.record.address = Some(address.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.record.phone = Some(phone.into());
        self
    }

    pub fn income(mut self, income: Decimal) -> Self {
        self.record.income = Some(income);
        self
    }

    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.record.job = Some(job.into());
        self
    }

    pub fn social_status(mut self, status: SocialStatus) -> Self {
        self.record.social_status = Some(status);
        self
    }

    pub fn education_level(mut self, level: impl Into<String>) -> Self {
        self.record.education_level = Some(level.into());
        self
    }

    /// Head of family's clothing size and free-text details.
    pub fn clothing(mut self, size: impl Into<String>, details: Option<String>) -> Self {
        self.record.clothing_size = Some(size.into());
        self.record.clothing_details = details;
        self
    }

    pub fn add_member(mut self, member: MemberRecord) -> Self {
        self.record.members.push(member);
        self
    }

    pub fn add_aid(mut self, aid: AidRecord) -> Self {
        self.record.family_aids.push(aid);
        self
    }

    /// Build the family record and run registration validation.
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<FamilyRecord, AidError> {
        if self.record.members.len() > 100 {
            return Err(AidError::Builder(
                "a family cannot have more than 100 members".into(),
            ));
        }

        let errors = validation::validate_family(&self.record);
        if !errors.is_empty() {
            return Err(AidError::Validation(join_errors(&errors)));
        }
        Ok(self.record)
    }

    /// Build without validation, e.g. for testing or importing external data.
    pub fn build_unchecked(self) -> FamilyRecord {
        self.record
    }
}

/// Builder for household members.
pub struct MemberBuilder {
    record: MemberRecord,
}

impl MemberBuilder {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            record: MemberRecord {
                id: None,
                name: name.into(),
                role,
                national_id: None,
                phone: None,
                address: None,
                income: None,
                job: None,
                social_status: None,
                education_level: None,
                clothing_size: None,
                clothing_details: None,
                individual_aids: Vec::new(),
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.record.id = Some(id.into());
        self
    }

    pub fn national_id(mut self, id: impl Into<String>) -> Self {
        self.record.national_id = Some(id.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.record.phone = Some(phone.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.record.address = Some(address.into());
        self
    }

    pub fn income(mut self, income: Decimal) -> Self {
        self.record.income = Some(income);
        self
    }

    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.record.job = Some(job.into());
        self
    }

    pub fn social_status(mut self, status: SocialStatus) -> Self {
        self.record.social_status = Some(status);
        self
    }

    pub fn education_level(mut self, level: impl Into<String>) -> Self {
        self.record.education_level = Some(level.into());
        self
    }

    pub fn clothing_size(mut self, size: impl Into<String>) -> Self {
        self.record.clothing_size = Some(size.into());
        self
    }

    pub fn clothing_details(mut self, details: impl Into<String>) -> Self {
        self.record.clothing_details = Some(details.into());
        self
    }

    pub fn add_aid(mut self, aid: AidRecord) -> Self {
        self.record.individual_aids.push(aid);
        self
    }

    pub fn build(self) -> MemberRecord {
        self.record
    }
}

/// Builder for aid records. Dates given as calendar days are stored at
/// midnight UTC.
pub struct AidBuilder {
    record: AidRecord,
}

impl AidBuilder {
    fn new(kind: AidKind, description: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        Self {
            record: AidRecord {
                id: None,
                kind,
                recurrence: Recurrence::None,
                description: description.into(),
                amount,
                date: date.and_time(NaiveTime::MIN).and_utc(),
                family_id: None,
                member_id: None,
            },
        }
    }

    /// Aid for the household as a whole.
    pub fn family(description: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        Self::new(AidKind::Family, description, amount, date)
    }

    /// Aid for one person; the head of family unless [`member`](Self::member) is set.
    pub fn individual(description: impl Into<String>, amount: Decimal, date: NaiveDate) -> Self {
        Self::new(AidKind::Individual, description, amount, date)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.record.id = Some(id.into());
        self
    }

    pub fn recurrence(mut self, recurrence: Recurrence) -> Self {
        self.record.recurrence = recurrence;
        self
    }

    /// Exact disbursement timestamp, replacing the calendar day.
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.record.date = timestamp;
        self
    }

    pub fn family_id(mut self, id: impl Into<String>) -> Self {
        self.record.family_id = Some(id.into());
        self
    }

    pub fn member(mut self, member_id: impl Into<String>) -> Self {
        self.record.member_id = Some(member_id.into());
        self
    }

    pub fn build(self) -> AidRecord {
        self.record
    }
}
