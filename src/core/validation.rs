use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::national_id::is_valid_national_id;
use super::types::*;

/// Length of a mobile phone number as collected at registration.
pub const PHONE_LEN: usize = 11;

/// Validate a family registration, its members, and all aid recorded
/// against them. Returns all validation errors found (not just the first).
///
/// These are write-time checks. Aggregation and reporting accept records that
/// fail them.
pub fn validate_family(family: &FamilyRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // FAM-01: the head of family must be named
    if family.full_name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "full_name",
            "head of family name must not be empty",
            "FAM-01",
        ));
    }

    // FAM-02: the head's national id must decode to a birth date
    if !is_valid_national_id(&family.national_id) {
        errors.push(ValidationError::with_rule(
            "national_id",
            format!(
                "'{}' is not a valid 14-digit national id",
                family.national_id
            ),
            "FAM-02",
        ));
    }

    // FAM-03
    if let Some(phone) = &family.phone {
        validate_phone(phone, "phone", "FAM-03", &mut errors);
    }

    // FAM-04
    if family.income.is_some_and(|i| i < dec!(0)) {
        errors.push(ValidationError::with_rule(
            "income",
            "income must not be negative",
            "FAM-04",
        ));
    }

    for (i, member) in family.members.iter().enumerate() {
        validate_member(member, i, &mut errors);
    }

    for (i, aid) in family.family_aids.iter().enumerate() {
        validate_aid_at(aid, family, &format!("family_aids[{i}]"), &mut errors);
    }
    for (i, member) in family.members.iter().enumerate() {
        for (j, aid) in member.individual_aids.iter().enumerate() {
            validate_aid_at(
                aid,
                family,
                &format!("members[{i}].individual_aids[{j}]"),
                &mut errors,
            );
        }
    }

    errors
}

/// Validate a single aid record against the family it is assigned to.
pub fn validate_aid(aid: &AidRecord, family: &FamilyRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    validate_aid_at(aid, family, "aid", &mut errors);
    errors
}

fn validate_member(member: &MemberRecord, idx: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("members[{idx}]");

    // MEM-01
    if member.name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.name"),
            "member name must not be empty",
            "MEM-01",
        ));
    }

    // MEM-02: children may be registered before they have an id
    if let Some(id) = &member.national_id {
        if !is_valid_national_id(id) {
            errors.push(ValidationError::with_rule(
                format!("{prefix}.national_id"),
                format!("'{id}' is not a valid 14-digit national id"),
                "MEM-02",
            ));
        }
    }

    // MEM-03
    if let Some(phone) = &member.phone {
        validate_phone(phone, &format!("{prefix}.phone"), "MEM-03", errors);
    }

    if member.role == Role::Head {
        errors.push(ValidationError::new(
            format!("{prefix}.role"),
            "the head of family is registered on the family, not as a member",
        ));
    }
}

fn validate_aid_at(
    aid: &AidRecord,
    family: &FamilyRecord,
    path: &str,
    errors: &mut Vec<ValidationError>,
) {
    // AID-01
    if aid.amount < dec!(0) {
        errors.push(ValidationError::with_rule(
            format!("{path}.amount"),
            format!("amount {} must not be negative", aid.amount),
            "AID-01",
        ));
    }

    // AID-02
    if aid.description.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{path}.description"),
            "aid description must not be empty",
            "AID-02",
        ));
    }

    match (aid.kind, aid.member_id.as_deref()) {
        // AID-03
        (AidKind::Family, Some(member_id)) => errors.push(ValidationError::with_rule(
            format!("{path}.member_id"),
            format!("family aid must not target member '{member_id}'"),
            "AID-03",
        )),
        // AID-04
        (AidKind::Individual, Some(member_id)) if family.member(member_id).is_none() => {
            errors.push(ValidationError::with_rule(
                format!("{path}.member_id"),
                format!(
                    "member '{member_id}' does not belong to family '{}'",
                    family.full_name
                ),
                "AID-04",
            ))
        }
        (AidKind::Family, None) | (AidKind::Individual, _) => {}
    }
}

fn validate_phone(phone: &str, field: &str, rule: &str, errors: &mut Vec<ValidationError>) {
    let digits_only = phone.chars().all(|c| c.is_ascii_digit());
    if phone.len() != PHONE_LEN || !digits_only {
        errors.push(ValidationError::with_rule(
            field,
            format!("phone '{phone}' must be {PHONE_LEN} digits"),
            rule,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AidBuilder, FamilyBuilder, MemberBuilder};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rules(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().filter_map(|e| e.rule.as_deref()).collect()
    }

    #[test]
    fn valid_family_passes() {
        let family = FamilyBuilder::new("Ahmed Hassan", "28501150100011")
            .phone("01012345678")
            .add_member(
                MemberBuilder::new("Sara", Role::Daughter)
                    .id("m1")
                    .national_id("31001010100022")
                    .build(),
            )
            .add_aid(AidBuilder::individual("Medicine", dec!(40), date(2024, 1, 5)).member("m1").build())
            .build_unchecked();
        assert!(validate_family(&family).is_empty());
    }

    #[test]
    fn reports_every_failure() {
        let family = FamilyBuilder::new(" ", "12345")
            .phone("0101")
            .income(dec!(-1))
            .add_member(MemberBuilder::new("", Role::Son).national_id("29902300000000").build())
            .add_aid(AidBuilder::family("", dec!(-5), date(2024, 1, 5)).build())
            .build_unchecked();
        let errors = validate_family(&family);
        assert_eq!(
            rules(&errors),
            ["FAM-01", "FAM-02", "FAM-03", "FAM-04", "MEM-01", "MEM-02", "AID-01", "AID-02"]
        );
        assert_eq!(errors[6].field, "family_aids[0].amount");
    }

    #[test]
    fn aid_targets_are_checked() {
        let family = FamilyBuilder::new("Ahmed Hassan", "28501150100011")
            .add_member(MemberBuilder::new("Sara", Role::Daughter).id("m1").build())
            .build_unchecked();

        let stray = AidBuilder::individual("Shoes", dec!(10), date(2024, 1, 5))
            .member("m9")
            .build();
        assert_eq!(rules(&validate_aid(&stray, &family)), ["AID-04"]);

        let mut family_aid = AidBuilder::family("Rent", dec!(10), date(2024, 1, 5)).build();
        family_aid.member_id = Some("m1".into());
        assert_eq!(rules(&validate_aid(&family_aid, &family)), ["AID-03"]);

        let head = AidBuilder::individual("Glasses", dec!(10), date(2024, 1, 5)).build();
        assert!(validate_aid(&head, &family).is_empty());
    }

    #[test]
    fn members_cannot_be_head() {
        let family = FamilyBuilder::new("Ahmed Hassan", "28501150100011")
            .add_member(MemberBuilder::new("Ali", Role::Head).build())
            .build_unchecked();
        let errors = validate_family(&family);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "members[0].role");
    }
}
