use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::{contains_any, mentions_advanced_degree, ramp, SignalSheet};
use crate::profile::{EducationEntry, LinkedinProfile, WorkExperience};
use crate::scoring::signal::Signal;

const STARTUP_MULTIPLIER: f64 = 1.0;
const STARTUP_TITLES: [&str; 2] = ["founder", "co-founder"];

const LEADERSHIP_TITLES: [&str; 12] = [
    "ceo",
    "cto",
    "cfo",
    "coo",
    "chief",
    "president",
    "vp",
    "vice president",
    "director",
    "head of",
    "lead",
    "manager",
];

const TOP_SCHOOLS: [&str; 14] = [
    "stanford",
    "mit",
    "massachusetts institute of technology",
    "harvard",
    "berkeley",
    "carnegie mellon",
    "princeton",
    "yale",
    "caltech",
    "oxford",
    "cambridge",
    "columbia",
    "cornell",
    "eth zurich",
];
const ADVANCED_DEGREE_BONUS: f64 = 0.5;

const POINTS_PER_CERTIFICATION: f64 = 2.0;

const MAX_PROMOTIONS: f64 = 3.0;

pub(super) fn score(profile: &LinkedinProfile, sheet: &mut SignalSheet<'_>) {
    if profile
        .experience
        .iter()
        .any(|role| contains_any(&role.title, &STARTUP_TITLES))
    {
        let multiplier = sheet.rule("linkedin.startup_multiplier", STARTUP_MULTIPLIER);
        let points = sheet.max_points(Signal::LinkedinStartup) * multiplier;
        sheet.record(Signal::LinkedinStartup, points);
    }

    let leadership_titles = lowercase(
        sheet
            .rules()
            .strings("linkedin.leadership_titles", &LEADERSHIP_TITLES),
    );
    let leadership_titles: Vec<&str> = leadership_titles.iter().map(String::as_str).collect();
    if profile
        .experience
        .iter()
        .any(|role| contains_any(&role.title, &leadership_titles))
    {
        let points = sheet.max_points(Signal::LinkedinLeadership);
        sheet.record(Signal::LinkedinLeadership, points);
    }

    let top_schools = lowercase(sheet.rules().strings("linkedin.top_schools", &TOP_SCHOOLS));
    let top_schools: Vec<&str> = top_schools.iter().map(String::as_str).collect();
    if let Some(entry) = education_candidate(profile) {
        if contains_any(&entry.school, &top_schools) {
            let mut points = sheet.max_points(Signal::LinkedinEducation);
            if mentions_advanced_degree(entry.degree.as_deref()) {
                let bonus = sheet.rule("linkedin.advanced_degree_bonus", ADVANCED_DEGREE_BONUS);
                points *= 1.0 + bonus;
            }
            sheet.record(Signal::LinkedinEducation, points);
        }
    }

    if !profile.certifications.is_empty() {
        let per_certification =
            sheet.rule("linkedin.points_per_certification", POINTS_PER_CERTIFICATION);
        let points = (profile.certifications.len() as f64 * per_certification)
            .min(sheet.max_points(Signal::LinkedinCertifications));
        sheet.record(Signal::LinkedinCertifications, points);
    }

    if !profile.volunteering.is_empty() {
        let points = sheet.max_points(Signal::LinkedinVolunteering);
        sheet.record(Signal::LinkedinVolunteering, points);
    }

    let promotions = inferred_promotions(&profile.experience);
    let max_promotions = sheet.rule("linkedin.max_promotions", MAX_PROMOTIONS);
    let cap = sheet.max_points(Signal::LinkedinPromotions);
    if let Some(points) = ramp(promotions as f64, 0.0, max_promotions, cap) {
        sheet.record(Signal::LinkedinPromotions, points);
    }
}

/// The education entry that decides the education signal: the first one listed. Later
/// entries never count, even when they name a top school.
pub(crate) fn education_candidate(profile: &LinkedinProfile) -> Option<&EducationEntry> {
    profile.education.first()
}

/// Counts consecutive roles at the same company once the history is ordered newest first.
///
/// Titles are not compared, so any two adjacent stints at one employer count as a promotion.
pub(crate) fn inferred_promotions(experience: &[WorkExperience]) -> usize {
    let mut ordered: Vec<&WorkExperience> = experience.iter().collect();
    ordered.sort_by_key(|role| std::cmp::Reverse(start_date(role)));

    ordered
        .windows(2)
        .filter(|pair| pair[0].company == pair[1].company)
        .count()
}

fn start_date(role: &WorkExperience) -> NaiveDate {
    role.start_date
        .as_deref()
        .and_then(parse_profile_date)
        .unwrap_or(NaiveDate::MIN)
}

/// Parses the date fragments profiles carry: RFC 3339 timestamps, `2021-03-15`, `2021-03`,
/// `Mar 2021`, `March 2021`, `03/2021` or a bare year.
pub(crate) fn parse_profile_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Some(timestamp.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("01 {trimmed}"), "%d %B %Y") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("01/{trimmed}"), "%d/%m/%Y") {
        return Some(date);
    }
    if trimmed.len() == 4 {
        if let Ok(year) = trimmed.parse::<i32>() {
            return NaiveDate::from_ymd_opt(year, 1, 1);
        }
    }

    None
}

fn lowercase(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
        .collect()
}
