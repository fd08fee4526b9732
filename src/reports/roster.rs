use super::{Cell, Column, ReportContext, Row, role_label, status_label};
use crate::core::{FamilyRecord, Role, SocialStatus, age_from_national_id};

/// Joins job and education level when a person has both.
pub const JOB_EDUCATION_SEPARATOR: &str = " / ";

/// Member roster: for each family, a row for the head followed by one row per
/// member, with ages as of `ctx.today`. Unknown ages are left blank.
pub fn member_roster_rows(families: &[FamilyRecord], ctx: &ReportContext) -> Vec<Row> {
    let mut rows = Vec::with_capacity(families.iter().map(FamilyRecord::household_size).sum());
    for family in families {
        rows.push(roster_row(
            ctx,
            family,
            Person {
                name: &family.full_name,
                role: Role::Head,
                national_id: Some(family.national_id.as_str()),
                phone: family.phone.as_deref(),
                job: family.job.as_deref(),
                education: family.education_level.as_deref(),
                status: family.social_status.as_ref(),
            },
        ));
        for member in &family.members {
            rows.push(roster_row(
                ctx,
                family,
                Person {
                    name: &member.name,
                    role: member.role,
                    national_id: member.national_id.as_deref(),
                    phone: member.phone.as_deref(),
                    job: member.job.as_deref(),
                    education: member.education_level.as_deref(),
                    status: member.social_status.as_ref(),
                },
            ));
        }
    }
    rows
}

struct Person<'a> {
    name: &'a str,
    role: Role,
    national_id: Option<&'a str>,
    phone: Option<&'a str>,
    job: Option<&'a str>,
    education: Option<&'a str>,
    status: Option<&'a SocialStatus>,
}

fn roster_row(ctx: &ReportContext, family: &FamilyRecord, person: Person<'_>) -> Row {
    let age = person
        .national_id
        .and_then(|id| age_from_national_id(id, ctx.today))
        .map(|age| Cell::Integer(i64::from(age)));
    Row::new()
        .with(ctx.label(Column::FamilyName), family.full_name.as_str())
        .with(ctx.label(Column::Member), person.name)
        .with(ctx.label(Column::Role), role_label(person.role, ctx.language))
        .with(ctx.label(Column::Age), age)
        .with(ctx.label(Column::NationalId), Cell::text_or_empty(person.national_id))
        .with(ctx.label(Column::Phone), Cell::text_or_empty(person.phone))
        .with(
            ctx.label(Column::Job),
            Cell::text_or_empty(join_job_education(person.job, person.education).as_deref()),
        )
        .with(
            ctx.label(Column::SocialStatus),
            person.status.map(|s| status_label(s, ctx.language)),
        )
}

fn join_job_education(job: Option<&str>, education: Option<&str>) -> Option<String> {
    let parts: Vec<&str> = [job, education]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    (!parts.is_empty()).then(|| parts.join(JOB_EDUCATION_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_and_education_join() {
        assert_eq!(
            join_job_education(Some("Carpenter"), Some("Diploma")).as_deref(),
            Some("Carpenter / Diploma")
        );
        assert_eq!(join_job_education(Some("Carpenter"), None).as_deref(), Some("Carpenter"));
        assert_eq!(join_job_education(None, Some("Primary")).as_deref(), Some("Primary"));
        assert_eq!(join_job_education(Some(" "), None), None);
        assert_eq!(join_job_education(None, None), None);
    }
}
