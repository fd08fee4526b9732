//! Column headers and display labels in each supported language.

use crate::core::{AidKind, Language, Recurrence, Role, SocialStatus};

/// Every column any report emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    FamilyName,
    Member,
    Role,
    Age,
    NationalId,
    Phone,
    Income,
    Job,
    SocialStatus,
    Size,
    SizeDetails,
    TotalAid,
    MembersCount,
    Date,
    Type,
    Recurrence,
    Beneficiary,
    Description,
    Amount,
}

pub fn column_label(column: Column, language: Language) -> &'static str {
    match language {
        Language::En => match column {
            Column::FamilyName => "Family Name",
            Column::Member => "Member",
            Column::Role => "Role",
            Column::Age => "Age",
            Column::NationalId => "National ID",
            Column::Phone => "Phone",
            Column::Income => "Income",
            Column::Job => "Job / Education",
            Column::SocialStatus => "Social Status",
            Column::Size => "Size",
            Column::SizeDetails => "Size Details",
            Column::TotalAid => "Total Aid",
            Column::MembersCount => "Members Count",
            Column::Date => "Date",
            Column::Type => "Type",
            Column::Recurrence => "Recurrence",
            Column::Beneficiary => "Beneficiary",
            Column::Description => "Description",
            Column::Amount => "Amount",
        },
        Language::Ar => match column {
            Column::FamilyName => "اسم الأسرة",
            Column::Member => "الفرد",
            Column::Role => "الصلة",
            Column::Age => "السن",
            Column::NationalId => "الرقم القومي",
            Column::Phone => "الهاتف",
            Column::Income => "الدخل",
            Column::Job => "الوظيفة / التعليم",
            Column::SocialStatus => "الحالة الاجتماعية",
            Column::Size => "المقاس",
            Column::SizeDetails => "تفاصيل المقاس",
            Column::TotalAid => "إجمالي المساعدات",
            Column::MembersCount => "عدد الأفراد",
            Column::Date => "التاريخ",
            Column::Type => "النوع",
            Column::Recurrence => "التكرار",
            Column::Beneficiary => "المستفيد",
            Column::Description => "الوصف",
            Column::Amount => "المبلغ",
        },
    }
}

pub fn role_label(role: Role, language: Language) -> &'static str {
    match (language, role) {
        (Language::En, Role::Head) => "Head of Family",
        (Language::En, Role::Father) => "Father",
        (Language::En, Role::Mother) => "Mother",
        (Language::En, Role::Son) => "Son",
        (Language::En, Role::Daughter) => "Daughter",
        (Language::En, Role::Grandparent) => "Grandparent",
        (Language::En, Role::Other) => "Other",
        (Language::Ar, Role::Head) => "رب الأسرة",
        (Language::Ar, Role::Father) => "الأب",
        (Language::Ar, Role::Mother) => "الأم",
        (Language::Ar, Role::Son) => "الابن",
        (Language::Ar, Role::Daughter) => "الابنة",
        (Language::Ar, Role::Grandparent) => "الجد / الجدة",
        (Language::Ar, Role::Other) => "أخرى",
    }
}

/// Display label for a social status; free-form values are shown verbatim.
pub fn status_label(status: &SocialStatus, language: Language) -> &str {
    match (language, status) {
        (_, SocialStatus::Other(raw)) => raw.as_str(),
        (Language::En, SocialStatus::Single) => "Single",
        (Language::En, SocialStatus::Married) => "Married",
        (Language::En, SocialStatus::Divorced) => "Divorced",
        (Language::En, SocialStatus::Widowed) => "Widowed",
        (Language::Ar, SocialStatus::Single) => "أعزب",
        (Language::Ar, SocialStatus::Married) => "متزوج",
        (Language::Ar, SocialStatus::Divorced) => "مطلق",
        (Language::Ar, SocialStatus::Widowed) => "أرمل",
    }
}

pub fn kind_label(kind: AidKind, language: Language) -> &'static str {
    match (language, kind) {
        (Language::En, AidKind::Family) => "Family",
        (Language::En, AidKind::Individual) => "Individual",
        (Language::Ar, AidKind::Family) => "أسرية",
        (Language::Ar, AidKind::Individual) => "فردية",
    }
}

pub fn recurrence_label(recurrence: Recurrence, language: Language) -> &'static str {
    match (language, recurrence) {
        (Language::En, Recurrence::None) => "One-time",
        (Language::En, Recurrence::Monthly) => "Monthly",
        (Language::En, Recurrence::Yearly) => "Yearly",
        (Language::Ar, Recurrence::None) => "مرة واحدة",
        (Language::Ar, Recurrence::Monthly) => "شهرية",
        (Language::Ar, Recurrence::Yearly) => "سنوية",
    }
}
