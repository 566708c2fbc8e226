use std::collections::BTreeSet;

use super::{ramp, SignalSheet};
use crate::profile::GithubProfile;
use crate::scoring::signal::Signal;

const MIN_REPOS: f64 = 3.0;
const MAX_REPOS: f64 = 10.0;

const MIN_LANGUAGES: f64 = 2.0;
const MAX_LANGUAGES: f64 = 5.0;

const MIN_CONTRIBUTIONS: f64 = 100.0;
const MAX_CONTRIBUTIONS: f64 = 1000.0;

const MIN_OPEN_SOURCE: f64 = 10.0;
const MAX_OPEN_SOURCE: f64 = 100.0;

const MIN_STARS: f64 = 50.0;
const MAX_STARS: f64 = 500.0;

pub(super) fn score(profile: &GithubProfile, sheet: &mut SignalSheet<'_>) {
    ramp_signal(
        sheet,
        Signal::GithubProjects,
        profile.public_repos as f64,
        ("github.min_repos", MIN_REPOS),
        ("github.max_repos", MAX_REPOS),
    );

    ramp_signal(
        sheet,
        Signal::GithubLanguages,
        distinct_languages(&profile.top_languages) as f64,
        ("github.min_languages", MIN_LANGUAGES),
        ("github.max_languages", MAX_LANGUAGES),
    );

    ramp_signal(
        sheet,
        Signal::GithubContributions,
        profile.contributions.last_year as f64,
        ("github.min_contributions", MIN_CONTRIBUTIONS),
        ("github.max_contributions", MAX_CONTRIBUTIONS),
    );

    ramp_signal(
        sheet,
        Signal::GithubOpenSource,
        profile.open_source_contributions as f64,
        ("github.min_open_source", MIN_OPEN_SOURCE),
        ("github.max_open_source", MAX_OPEN_SOURCE),
    );

    ramp_signal(
        sheet,
        Signal::GithubStars,
        profile.total_stars as f64,
        ("github.min_stars", MIN_STARS),
        ("github.max_stars", MAX_STARS),
    );
}

fn ramp_signal(
    sheet: &mut SignalSheet<'_>,
    signal: Signal,
    value: f64,
    min: (&str, f64),
    max: (&str, f64),
) {
    let min = sheet.rule(min.0, min.1);
    let max = sheet.rule(max.0, max.1);
    let cap = sheet.max_points(signal);

    if let Some(points) = ramp(value, min, max, cap) {
        sheet.record(signal, points);
    }
}

pub(crate) fn distinct_languages(languages: &[String]) -> usize {
    languages
        .iter()
        .map(|language| language.trim().to_lowercase())
        .filter(|language| !language.is_empty())
        .collect::<BTreeSet<_>>()
        .len()
}
