use portal_db_entity::db::student::Model as StudentModel;
use strum_macros::Display;

const TIER1_CITIES: [&str; 6] = ["Delhi", "Mumbai", "Bangalore", "Chennai", "Hyderabad", "Pune"];
const TIER2_CITIES: [&str; 6] = ["Ahmedabad", "Kolkata", "Surat", "Jaipur", "Lucknow", "Kanpur"];
const HIGH_PRIORITY_SCORE: u8 = 80;
const MEDIUM_PRIORITY_SCORE: u8 = 60;
const SCHOLARSHIP_HINT_MARKS: f64 = 85.0;

/// How a lead reached the portal. Only referral links are tracked, every
/// other submission counts as organic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LeadSource {
    Referral,
    Organic,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LeadPriority {
    High,
    Medium,
    Low,
}

pub fn lead_source(student: &StudentModel) -> LeadSource {
    match student.referred_by_id {
        Some(_) => LeadSource::Referral,
        None => LeadSource::Organic,
    }
}

fn marks_points(percentage: f64) -> u8 {
    match percentage {
        p if p >= 90.0 => 40,
        p if p >= 80.0 => 35,
        p if p >= 70.0 => 30,
        p if p >= 60.0 => 25,
        _ => 20,
    }
}

fn class_points(class_selected: &str) -> u8 {
    match class_selected.trim() {
        "12" | "12th" => 20,
        _ => 15,
    }
}

fn source_points(source: LeadSource) -> u8 {
    match source {
        LeadSource::Referral => 15,
        LeadSource::Organic => 12,
    }
}

fn city_points(city: &str) -> u8 {
    let city = city.trim();
    if TIER1_CITIES.iter().any(|tier1| tier1.eq_ignore_ascii_case(city)) {
        10
    } else if TIER2_CITIES.iter().any(|tier2| tier2.eq_ignore_ascii_case(city)) {
        8
    } else {
        6
    }
}

/// Weighted score out of 100 from marks, class, source and city tier.
pub fn lead_score(student: &StudentModel) -> u8 {
    let score = marks_points(student.percentage)
        + class_points(&student.class_selected)
        + source_points(lead_source(student))
        + city_points(&student.city);
    score.min(100)
}

pub fn lead_priority(score: u8) -> LeadPriority {
    if score >= HIGH_PRIORITY_SCORE {
        LeadPriority::High
    } else if score >= MEDIUM_PRIORITY_SCORE {
        LeadPriority::Medium
    } else {
        LeadPriority::Low
    }
}

/// Follow-up steps for a college counsellor, most urgent first.
pub fn recommended_actions(student: &StudentModel, priority: LeadPriority) -> Vec<&'static str> {
    let mut actions = match priority {
        LeadPriority::High => vec![
            "Immediate phone call within 2 hours",
            "Send premium college brochures",
            "Schedule campus visit",
        ],
        LeadPriority::Medium => vec![
            "Call within 24 hours",
            "Send course information via email",
            "Follow up with WhatsApp message",
        ],
        LeadPriority::Low => vec![
            "Send automated email sequence",
            "Add to nurturing campaign",
            "Follow up after 3 days",
        ],
    };
    if student.percentage >= SCHOLARSHIP_HINT_MARKS {
        actions.push("Offer scholarship information");
    }
    if lead_source(student) == LeadSource::Referral {
        actions.push("Mention referral source in communication");
    }
    actions
}
