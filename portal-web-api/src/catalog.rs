use portal_db_entity::db::offer::{
    Column as OfferColumn, Entity as Offer, Model as OfferModel,
};
use portal_db_entity::db::scholarship::{
    Column as ScholarshipColumn, Entity as Scholarship, Model as ScholarshipModel,
};
use portal_db_entity::db::student::Model as StudentModel;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// The two classes a lead can be routed by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClassLevel {
    Ten,
    Twelve,
}

impl ClassLevel {
    pub fn from_selected(class_selected: &str) -> Option<ClassLevel> {
        match class_selected {
            "10" => Some(ClassLevel::Ten),
            "12" => Some(ClassLevel::Twelve),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ClassLevel::Ten => "10",
            ClassLevel::Twelve => "12",
        }
    }

    /// Page a freshly submitted lead of this class is sent to.
    pub fn outcome_path(&self, student_id: i32) -> String {
        match self {
            ClassLevel::Ten => format!("/class10_offers/{}", student_id),
            ClassLevel::Twelve => format!("/class12_scholarships/{}", student_id),
        }
    }

    pub fn wrong_page_message(&self) -> String {
        format!("This page is for Class {}th students only.", self.code())
    }
}

/// `applicable_class` is free text: empty, "All", "10" or "10th" style.
pub fn class_applies(applicable_class: Option<&str>, class_selected: &str) -> bool {
    match applicable_class.map(str::trim) {
        None | Some("") => true,
        Some(applicable) => {
            applicable.eq_ignore_ascii_case("all")
                || applicable == class_selected
                || applicable.eq_ignore_ascii_case(&format!("{}th", class_selected))
        }
    }
}

pub async fn eligible_offers(
    db: &DatabaseConnection,
    student: &StudentModel,
) -> Result<Vec<OfferModel>, DbErr> {
    let offers = Offer::find()
        .filter(
            Condition::any()
                .add(OfferColumn::EligibilityMarks.is_null())
                .add(OfferColumn::EligibilityMarks.lte(student.percentage)),
        )
        .order_by_asc(OfferColumn::Id)
        .all(db)
        .await?;
    Ok(offers
        .into_iter()
        .filter(|offer| class_applies(offer.applicable_class.as_deref(), &student.class_selected))
        .collect())
}

pub async fn eligible_scholarships(
    db: &DatabaseConnection,
    student: &StudentModel,
) -> Result<Vec<ScholarshipModel>, DbErr> {
    let scholarships = Scholarship::find()
        .filter(
            Condition::any()
                .add(ScholarshipColumn::EligibilityMarks.is_null())
                .add(ScholarshipColumn::EligibilityMarks.lte(student.percentage)),
        )
        .order_by_asc(ScholarshipColumn::Id)
        .all(db)
        .await?;
    Ok(scholarships
        .into_iter()
        .filter(|scholarship| {
            class_applies(scholarship.applicable_class.as_deref(), &student.class_selected)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_known_classes() {
        assert_eq!(ClassLevel::from_selected("10"), Some(ClassLevel::Ten));
        assert_eq!(ClassLevel::from_selected("12"), Some(ClassLevel::Twelve));
        assert_eq!(ClassLevel::from_selected("11"), None);
        assert_eq!(ClassLevel::Ten.outcome_path(3), "/class10_offers/3");
        assert_eq!(ClassLevel::Twelve.outcome_path(7), "/class12_scholarships/7");
    }

    #[test]
    fn applicable_class_spellings() {
        assert!(class_applies(None, "10"));
        assert!(class_applies(Some("All"), "12"));
        assert!(class_applies(Some("10th"), "10"));
        assert!(class_applies(Some("12"), "12"));
        assert!(!class_applies(Some("12th"), "10"));
    }
}
