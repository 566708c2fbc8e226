use super::{contains_any, mentions_advanced_degree, SignalSheet};
use crate::profile::{FounderProfile, FundingRound};
use crate::scoring::signal::Signal;

const MAX_COMPANIES: f64 = 2.0;
const POINTS_PER_COMPANY: f64 = 7.5;

const EXECUTIVE_POINTS: f64 = 5.0;
const CEO_MULTIPLIER: f64 = 1.0;
const VP_POINTS: f64 = 3.0;
const VP_MULTIPLIER: f64 = 1.0;
const LEADERSHIP_CAP: f64 = 10.0;

const SPEAKING_POINTS: f64 = 2.0;
const WRITING_POINTS: f64 = 2.0;
const PODCASTING_POINTS: f64 = 2.0;
const THOUGHT_LEADERSHIP_CAP: f64 = 5.0;

const TOP_TIER_SCHOOL_POINTS: f64 = 15.0;
const OTHER_SCHOOL_POINTS: f64 = 10.0;
const ADVANCED_DEGREE_POINTS: f64 = 3.0;
const EDUCATION_CAP: f64 = 15.0;

const POINTS_PER_ACCOMPLISHMENT: f64 = 3.0;
const ACCOMPLISHMENTS_CAP: f64 = 10.0;

const VOLUNTEER_POINTS: f64 = 10.0;
const MENTORSHIP_POINTS: f64 = 5.0;
const COMMUNITY_POINTS: f64 = 5.0;

const LATE_STAGE_ROUND_POINTS: f64 = 10.0;
const SERIES_A_POINTS: f64 = 5.0;
const SEED_POINTS: f64 = 2.0;
const FUNDING_CAP: f64 = 10.0;

const POINTS_PER_EXIT: f64 = 5.0;
const EXITS_CAP: f64 = 5.0;

const POINTS_PER_MENTION: f64 = 1.0;
const PRESS_CAP: f64 = 3.0;

pub(super) fn score(profile: &FounderProfile, sheet: &mut SignalSheet<'_>) {
    ambition(profile, sheet);
    intelligence(profile, sheet);
    kindness(profile, sheet);
    track_record(profile, sheet);
}

fn ambition(profile: &FounderProfile, sheet: &mut SignalSheet<'_>) {
    let companies = profile.companies_founded.len() as f64;
    let max_companies = sheet.rule("founder.max_companies", MAX_COMPANIES);
    let per_company = sheet.rule("founder.points_per_company", POINTS_PER_COMPANY);
    sheet.record(
        Signal::CompaniesFounded,
        companies.min(max_companies) * per_company,
    );

    let executive = sheet.rule("founder.executive_points", EXECUTIVE_POINTS)
        * sheet.rule("founder.ceo_multiplier", CEO_MULTIPLIER);
    let vp = sheet.rule("founder.vp_points", VP_POINTS)
        * sheet.rule("founder.vp_multiplier", VP_MULTIPLIER);
    let leadership: f64 = profile
        .leadership_roles
        .iter()
        .map(|role| {
            if contains_any(&role.title, &["ceo", "cto", "chief"]) {
                executive
            } else if contains_any(&role.title, &["vp", "director"]) {
                vp
            } else {
                0.0
            }
        })
        .sum();
    let leadership_cap = sheet.rule("founder.leadership_cap", LEADERSHIP_CAP);
    sheet.record(Signal::LeadershipRoles, leadership.min(leadership_cap));

    let voice = &profile.thought_leadership;
    let mut thought_leadership = 0.0;
    if voice.speaking {
        thought_leadership += sheet.rule("founder.speaking_points", SPEAKING_POINTS);
    }
    if voice.writing {
        thought_leadership += sheet.rule("founder.writing_points", WRITING_POINTS);
    }
    if voice.podcasting {
        thought_leadership += sheet.rule("founder.podcasting_points", PODCASTING_POINTS);
    }
    let cap = sheet.rule("founder.thought_leadership_cap", THOUGHT_LEADERSHIP_CAP);
    sheet.record(Signal::ThoughtLeadership, thought_leadership.min(cap));
}

fn intelligence(profile: &FounderProfile, sheet: &mut SignalSheet<'_>) {
    if let Some(education) = profile
        .top_education
        .as_ref()
        .filter(|education| !education.school.trim().is_empty())
    {
        let mut points = if education.is_top_tier {
            sheet.rule("founder.top_tier_school_points", TOP_TIER_SCHOOL_POINTS)
        } else {
            sheet.rule("founder.other_school_points", OTHER_SCHOOL_POINTS)
        };
        if mentions_advanced_degree(education.degree.as_deref()) {
            points += sheet.rule("founder.advanced_degree_points", ADVANCED_DEGREE_POINTS);
        }
        let cap = sheet.rule("founder.education_cap", EDUCATION_CAP);
        sheet.record(Signal::TopEducation, points.min(cap));
    }

    let per_accomplishment = sheet.rule(
        "founder.points_per_accomplishment",
        POINTS_PER_ACCOMPLISHMENT,
    );
    let cap = sheet.rule("founder.accomplishments_cap", ACCOMPLISHMENTS_CAP);
    sheet.record(
        Signal::StrategicAccomplishments,
        (profile.strategic_accomplishments.len() as f64 * per_accomplishment).min(cap),
    );
}

fn kindness(profile: &FounderProfile, sheet: &mut SignalSheet<'_>) {
    if !profile.volunteer_work.is_empty() {
        let points = sheet.rule("founder.volunteer_points", VOLUNTEER_POINTS);
        sheet.record(Signal::VolunteerWork, points);
    }
    if profile.is_mentor {
        let points = sheet.rule("founder.mentorship_points", MENTORSHIP_POINTS);
        sheet.record(Signal::Mentorship, points);
    }
    if !profile.community_building.is_empty() {
        let points = sheet.rule("founder.community_points", COMMUNITY_POINTS);
        sheet.record(Signal::CommunityBuilding, points);
    }
}

fn track_record(profile: &FounderProfile, sheet: &mut SignalSheet<'_>) {
    let late_stage = sheet.rule("founder.late_stage_round_points", LATE_STAGE_ROUND_POINTS);
    let series_a = sheet.rule("founder.series_a_points", SERIES_A_POINTS);
    let seed = sheet.rule("founder.seed_points", SEED_POINTS);
    let funding: f64 = profile
        .funding_raised
        .iter()
        .map(|round| match classify_round(round) {
            RoundStage::LateStage => late_stage,
            RoundStage::SeriesA => series_a,
            RoundStage::Seed => seed,
            RoundStage::Other => 0.0,
        })
        .sum();
    let cap = sheet.rule("founder.funding_cap", FUNDING_CAP);
    sheet.record(Signal::FundingRaised, funding.min(cap));

    let per_exit = sheet.rule("founder.points_per_exit", POINTS_PER_EXIT);
    let cap = sheet.rule("founder.exits_cap", EXITS_CAP);
    sheet.record(
        Signal::Exits,
        (profile.exits.len() as f64 * per_exit).min(cap),
    );

    let per_mention = sheet.rule("founder.points_per_mention", POINTS_PER_MENTION);
    let cap = sheet.rule("founder.press_cap", PRESS_CAP);
    sheet.record(
        Signal::PressMentions,
        (profile.press_mentions.len() as f64 * per_mention).min(cap),
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundStage {
    LateStage,
    SeriesA,
    Seed,
    Other,
}

fn classify_round(round: &FundingRound) -> RoundStage {
    let label = round.round.to_lowercase();
    if label.contains("series b") || label.contains("series c") {
        RoundStage::LateStage
    } else if label.contains("series a") {
        RoundStage::SeriesA
    } else if label.contains("seed") {
        RoundStage::Seed
    } else {
        RoundStage::Other
    }
}
