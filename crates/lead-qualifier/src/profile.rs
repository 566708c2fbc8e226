//! Enrichment data shapes consumed by the scoring engine.
//!
//! Every sub-profile is produced by an external adapter on a best-effort basis, so each one is
//! independently optional and every field tolerates being absent from the JSON payload.

use serde::{Deserialize, Deserializer, Serialize};

/// A prospect identified by e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Lead {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// All enrichment data gathered for a single lead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<LinkedinProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunter: Option<HunterProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founder: Option<FounderProfile>,
}

impl ProfileBundle {
    pub fn is_empty(&self) -> bool {
        self.github.is_none()
            && self.linkedin.is_none()
            && self.hunter.is_none()
            && self.founder.is_none()
    }

    /// Fills sub-profiles missing here from `other`; profiles already present win.
    pub fn absorb(&mut self, other: ProfileBundle) {
        if self.github.is_none() {
            self.github = other.github;
        }
        if self.linkedin.is_none() {
            self.linkedin = other.linkedin;
        }
        if self.hunter.is_none() {
            self.hunter = other.hunter;
        }
        if self.founder.is_none() {
            self.founder = other.founder;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GithubProfile {
    pub username: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub public_repos: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub repos: Vec<GithubRepo>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_stars: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub total_forks: u32,
    /// Most frequent repository languages, most common first.
    #[serde(deserialize_with = "null_as_default")]
    pub top_languages: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub contributions: ContributionStats,
    /// Contributions to repositories the user does not own.
    #[serde(deserialize_with = "null_as_default")]
    pub open_source_contributions: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GithubRepo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stars: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub forks: u32,
    pub language: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContributionStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub last_year: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkedinProfile {
    pub headline: Option<String>,
    /// Work history in the order the profile lists it.
    #[serde(deserialize_with = "null_as_default")]
    pub experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub volunteering: Vec<VolunteerEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    /// Free-form date text as scraped, e.g. `2021-03`, `Mar 2021` or `2021`.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteerEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub organization: String,
    pub role: Option<String>,
    pub cause: Option<String>,
}

/// Verified contact metadata. Gates further enrichment, never scored directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HunterProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
    /// 0-100.
    #[serde(deserialize_with = "confidence_score")]
    pub confidence: u8,
}

impl HunterProfile {
    pub fn full_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(single), None) | (None, Some(single)) => Some(single.to_string()),
            (None, None) => None,
        }
    }
}

/// AI-extracted summary of founder and leadership history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FounderProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub companies_founded: Vec<FoundedCompany>,
    #[serde(deserialize_with = "null_as_default")]
    pub leadership_roles: Vec<LeadershipRole>,
    #[serde(deserialize_with = "null_as_default")]
    pub thought_leadership: ThoughtLeadership,
    pub top_education: Option<TopEducation>,
    #[serde(deserialize_with = "null_as_default")]
    pub strategic_accomplishments: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub volunteer_work: Vec<VolunteerEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_mentor: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub community_building: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub funding_raised: Vec<FundingRound>,
    #[serde(deserialize_with = "null_as_default")]
    pub exits: Vec<CompanyExit>,
    #[serde(deserialize_with = "null_as_default")]
    pub press_mentions: Vec<PressMention>,
    #[serde(deserialize_with = "null_as_default")]
    pub awards: Vec<String>,
    /// Extraction confidence, 0-100.
    #[serde(deserialize_with = "confidence_score")]
    pub confidence: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub data_sources: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoundedCompany {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub role: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadershipRole {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    pub years_in_role: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThoughtLeadership {
    #[serde(deserialize_with = "null_as_default")]
    pub speaking: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub writing: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub podcasting: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub examples: Vec<String>,
}

impl ThoughtLeadership {
    pub fn channels(&self) -> Vec<&'static str> {
        let mut channels = Vec::new();
        if self.speaking {
            channels.push("speaking");
        }
        if self.writing {
            channels.push("writing");
        }
        if self.podcasting {
            channels.push("podcasting");
        }
        channels
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopEducation {
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    pub degree: Option<String>,
    pub field: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_top_tier: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundingRound {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    pub amount: Option<String>,
    /// Round label as reported, e.g. `Series A` or `Seed`.
    #[serde(deserialize_with = "null_as_default")]
    pub round: String,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyExit {
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    /// `acquisition`, `ipo`, ...
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PressMention {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub source: Option<String>,
    pub snippet: Option<String>,
}

/// Adapters emit `null` for unknown values; treat it like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Confidence arrives as any JSON number or `null`; stored as a whole percentage.
fn confidence_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 100.0).round() as u8)
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_github_payload_deserializes() {
        let bundle: ProfileBundle = serde_json::from_str(
            r#"{"github":{"publicRepos":12,"topLanguages":["Rust"],"contributions":{"lastYear":40}}}"#,
        )
        .expect("bundle parses");

        let github = bundle.github.expect("github present");
        assert_eq!(github.public_repos, 12);
        assert_eq!(github.contributions.last_year, 40);
        assert_eq!(github.total_stars, 0);
        assert!(bundle.linkedin.is_none());
        assert!(bundle.founder.is_none());
    }

    #[test]
    fn null_values_fall_back_to_defaults() {
        let bundle: ProfileBundle = serde_json::from_str(
            r#"{
                "github": {"publicRepos": 12, "totalStars": null, "topLanguages": null},
                "linkedin": {"experience": [{"title": null, "company": "Acme"}], "skills": null},
                "founder": {"isMentor": null, "exits": null, "thoughtLeadership": null}
            }"#,
        )
        .expect("bundle with nulls parses");

        let github = bundle.github.expect("github present");
        assert_eq!(github.public_repos, 12);
        assert_eq!(github.total_stars, 0);
        assert!(github.top_languages.is_empty());

        let linkedin = bundle.linkedin.expect("linkedin present");
        assert_eq!(linkedin.experience[0].title, "");
        assert_eq!(linkedin.experience[0].company, "Acme");

        let founder = bundle.founder.expect("founder present");
        assert!(!founder.is_mentor);
        assert!(founder.exits.is_empty());
        assert_eq!(founder.thought_leadership, ThoughtLeadership::default());
    }

    #[test]
    fn confidence_accepts_fractional_and_out_of_range_numbers() {
        let parse = |raw: &str| -> u8 {
            serde_json::from_str::<HunterProfile>(raw)
                .expect("hunter parses")
                .confidence
        };
        assert_eq!(parse(r#"{"confidence": 87.5}"#), 88);
        assert_eq!(parse(r#"{"confidence": 140}"#), 100);
        assert_eq!(parse(r#"{"confidence": -3}"#), 0);
        assert_eq!(parse(r#"{"confidence": null}"#), 0);
    }

    #[test]
    fn exit_type_maps_to_kind() {
        let exit: CompanyExit =
            serde_json::from_str(r#"{"company":"Acme","type":"acquisition","year":2020}"#)
                .expect("exit parses");
        assert_eq!(exit.kind.as_deref(), Some("acquisition"));
    }

    #[test]
    fn absorb_keeps_existing_profiles() {
        let mut bundle = ProfileBundle {
            github: Some(GithubProfile {
                public_repos: 4,
                ..GithubProfile::default()
            }),
            ..ProfileBundle::default()
        };
        bundle.absorb(ProfileBundle {
            github: Some(GithubProfile::default()),
            hunter: Some(HunterProfile {
                verified: true,
                ..HunterProfile::default()
            }),
            ..ProfileBundle::default()
        });

        assert_eq!(bundle.github.as_ref().map(|g| g.public_repos), Some(4));
        assert!(bundle.hunter.as_ref().is_some_and(|h| h.verified));
    }

    #[test]
    fn hunter_full_name_joins_parts() {
        let hunter = HunterProfile {
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            ..HunterProfile::default()
        };
        assert_eq!(hunter.full_name().as_deref(), Some("Ada Lovelace"));
        assert!(HunterProfile::default().full_name().is_none());
    }
}
