use std::collections::BTreeMap;

use super::rules::{distinct_languages, education_candidate};
use super::signal::Signal;
use super::Tier;
use crate::profile::{FounderProfile, FundingRound, GithubProfile, ProfileBundle};

/// Produces the ordered highlight phrases for one reasoning flow.
pub trait ReasoningStrategy {
    fn highlights(&self, bundle: &ProfileBundle, signals: &BTreeMap<Signal, f64>) -> Vec<String>;
}

/// Highlights for bundles carrying an AI-extracted founder summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct FounderHighlights;

/// Highlights for bundles built from raw GitHub and LinkedIn data only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileHighlights;

/// One-sentence explanation of a score. The founder flow is used whenever a founder summary is
/// present; otherwise the raw-profile flow.
pub fn explain(bundle: &ProfileBundle, signals: &BTreeMap<Signal, f64>, tier: Tier) -> String {
    let highlights = if bundle.founder.is_some() {
        FounderHighlights.highlights(bundle, signals)
    } else {
        ProfileHighlights.highlights(bundle, signals)
    };

    if highlights.is_empty() {
        format!("Scored as {} based on available data", tier.label())
    } else {
        format!("{} candidate: {}", tier.title(), highlights.join(", "))
    }
}

impl ReasoningStrategy for FounderHighlights {
    fn highlights(&self, bundle: &ProfileBundle, signals: &BTreeMap<Signal, f64>) -> Vec<String> {
        let fired = |signal: Signal| signals.contains_key(&signal);
        let mut highlights = Vec::new();

        if let Some(founder) = &bundle.founder {
            founder_highlights(founder, &fired, &mut highlights);
        }

        if let Some(github) = &bundle.github {
            if fired(Signal::GithubProjects) {
                highlights.push(plural(github.public_repos.into(), "GitHub repo", "GitHub repos"));
            }
            if fired(Signal::GithubStars) {
                highlights.push(plural(github.total_stars.into(), "GitHub star", "GitHub stars"));
            }
            if fired(Signal::GithubOpenSource) {
                highlights.push(open_source(github));
            }
        }

        highlights
    }
}

fn founder_highlights(
    founder: &FounderProfile,
    fired: &dyn Fn(Signal) -> bool,
    highlights: &mut Vec<String>,
) {
    if fired(Signal::CompaniesFounded) {
        let names: Vec<&str> = founder
            .companies_founded
            .iter()
            .map(|company| company.name.trim())
            .filter(|name| !name.is_empty())
            .collect();
        if !names.is_empty() {
            highlights.push(format!("Founded: {}", names.join(", ")));
        }
    }

    if fired(Signal::LeadershipRoles) {
        highlights.extend(
            founder
                .leadership_roles
                .iter()
                .take(2)
                .map(|role| format!("{} at {}", role.title, role.company)),
        );
    }

    if fired(Signal::ThoughtLeadership) {
        let channels = founder.thought_leadership.channels();
        highlights.push(format!("Thought leader ({})", channels.join("/")));
    }

    if fired(Signal::TopEducation) {
        if let Some(education) = &founder.top_education {
            match education.degree.as_deref().filter(|degree| !degree.is_empty()) {
                Some(degree) => {
                    highlights.push(format!("Studied at {} ({degree})", education.school))
                }
                None => highlights.push(format!("Studied at {}", education.school)),
            }
        }
    }

    if fired(Signal::FundingRaised) {
        let rounds: Vec<String> = founder
            .funding_raised
            .iter()
            .filter(|round| !round.round.trim().is_empty())
            .map(describe_round)
            .collect();
        if !rounds.is_empty() {
            highlights.push(format!("Raised {}", rounds.join(" + ")));
        }
    }

    if fired(Signal::Exits) {
        highlights.push(plural(founder.exits.len() as u64, "exit", "exits"));
    }

    if fired(Signal::PressMentions) {
        highlights.push(plural(
            founder.press_mentions.len() as u64,
            "press mention",
            "press mentions",
        ));
    }

    if fired(Signal::VolunteerWork) {
        let organization = founder
            .volunteer_work
            .iter()
            .map(|entry| entry.organization.trim())
            .find(|organization| !organization.is_empty());
        highlights.push(match organization {
            Some(organization) => format!("Volunteers with {organization}"),
            None => "Volunteer work".to_string(),
        });
    }

    if fired(Signal::Mentorship) {
        highlights.push("Active mentor".to_string());
    }
}

impl ReasoningStrategy for ProfileHighlights {
    fn highlights(&self, bundle: &ProfileBundle, signals: &BTreeMap<Signal, f64>) -> Vec<String> {
        let fired = |signal: Signal| signals.contains_key(&signal);
        let github = bundle.github.as_ref();
        let linkedin = bundle.linkedin.as_ref();
        let mut highlights = Vec::new();

        if let Some(github) = github.filter(|_| fired(Signal::GithubProjects)) {
            highlights.push(plural(
                github.public_repos.into(),
                "public GitHub project",
                "public GitHub projects",
            ));
        }
        if fired(Signal::LinkedinStartup) {
            highlights.push("Startup founder experience".to_string());
        }
        if fired(Signal::LinkedinLeadership) {
            highlights.push("Leadership experience".to_string());
        }
        if let Some(github) = github.filter(|_| fired(Signal::GithubLanguages)) {
            highlights.push(format!(
                "Works across {} languages",
                distinct_languages(&github.top_languages)
            ));
        }
        if let Some(github) = github.filter(|_| fired(Signal::GithubContributions)) {
            highlights.push(format!(
                "{} contributions in the last year",
                github.contributions.last_year
            ));
        }
        if let Some(entry) = linkedin
            .filter(|_| fired(Signal::LinkedinEducation))
            .and_then(education_candidate)
        {
            highlights.push(format!("Studied at {}", entry.school));
        }
        if let Some(github) = github.filter(|_| fired(Signal::GithubOpenSource)) {
            highlights.push(open_source(github));
        }
        if fired(Signal::LinkedinVolunteering) {
            highlights.push("Volunteer experience".to_string());
        }
        if let Some(github) = github.filter(|_| fired(Signal::GithubStars)) {
            highlights.push(plural(github.total_stars.into(), "GitHub star", "GitHub stars"));
        }

        highlights
    }
}

fn describe_round(round: &FundingRound) -> String {
    match round.amount.as_deref().filter(|amount| !amount.is_empty()) {
        Some(amount) => format!("{} ({amount})", round.round.trim()),
        None => round.round.trim().to_string(),
    }
}

fn open_source(github: &GithubProfile) -> String {
    plural(
        github.open_source_contributions.into(),
        "open source contribution",
        "open source contributions",
    )
}

fn plural(count: u64, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}
