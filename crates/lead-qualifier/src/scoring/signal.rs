use serde::{Deserialize, Serialize};

/// The four score categories every signal rolls up into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Ambition,
    Intelligence,
    Kindness,
    TrackRecord,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ambition,
        Category::Intelligence,
        Category::Kindness,
        Category::TrackRecord,
    ];

    /// Section name in the scoring document.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Ambition => "ambition",
            Category::Intelligence => "intelligence",
            Category::Kindness => "kindness",
            Category::TrackRecord => "trackRecord",
        }
    }
}

/// Independently computed score contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    GithubProjects,
    LinkedinStartup,
    LinkedinLeadership,
    CompaniesFounded,
    LeadershipRoles,
    ThoughtLeadership,
    GithubLanguages,
    GithubContributions,
    LinkedinEducation,
    LinkedinCertifications,
    TopEducation,
    StrategicAccomplishments,
    GithubOpenSource,
    LinkedinVolunteering,
    VolunteerWork,
    Mentorship,
    CommunityBuilding,
    GithubStars,
    LinkedinPromotions,
    FundingRaised,
    Exits,
    PressMentions,
}

impl Signal {
    pub const ALL: [Signal; 22] = [
        Signal::GithubProjects,
        Signal::LinkedinStartup,
        Signal::LinkedinLeadership,
        Signal::CompaniesFounded,
        Signal::LeadershipRoles,
        Signal::ThoughtLeadership,
        Signal::GithubLanguages,
        Signal::GithubContributions,
        Signal::LinkedinEducation,
        Signal::LinkedinCertifications,
        Signal::TopEducation,
        Signal::StrategicAccomplishments,
        Signal::GithubOpenSource,
        Signal::LinkedinVolunteering,
        Signal::VolunteerWork,
        Signal::Mentorship,
        Signal::CommunityBuilding,
        Signal::GithubStars,
        Signal::LinkedinPromotions,
        Signal::FundingRaised,
        Signal::Exits,
        Signal::PressMentions,
    ];

    pub fn category(&self) -> Category {
        match self {
            Signal::GithubProjects
            | Signal::LinkedinStartup
            | Signal::LinkedinLeadership
            | Signal::CompaniesFounded
            | Signal::LeadershipRoles
            | Signal::ThoughtLeadership => Category::Ambition,
            Signal::GithubLanguages
            | Signal::GithubContributions
            | Signal::LinkedinEducation
            | Signal::LinkedinCertifications
            | Signal::TopEducation
            | Signal::StrategicAccomplishments => Category::Intelligence,
            Signal::GithubOpenSource
            | Signal::LinkedinVolunteering
            | Signal::VolunteerWork
            | Signal::Mentorship
            | Signal::CommunityBuilding => Category::Kindness,
            Signal::GithubStars
            | Signal::LinkedinPromotions
            | Signal::FundingRaised
            | Signal::Exits
            | Signal::PressMentions => Category::TrackRecord,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Signal::GithubProjects => "github_projects",
            Signal::LinkedinStartup => "linkedin_startup",
            Signal::LinkedinLeadership => "linkedin_leadership",
            Signal::CompaniesFounded => "companies_founded",
            Signal::LeadershipRoles => "leadership_roles",
            Signal::ThoughtLeadership => "thought_leadership",
            Signal::GithubLanguages => "github_languages",
            Signal::GithubContributions => "github_contributions",
            Signal::LinkedinEducation => "linkedin_education",
            Signal::LinkedinCertifications => "linkedin_certifications",
            Signal::TopEducation => "top_education",
            Signal::StrategicAccomplishments => "strategic_accomplishments",
            Signal::GithubOpenSource => "github_open_source",
            Signal::LinkedinVolunteering => "linkedin_volunteering",
            Signal::VolunteerWork => "volunteer_work",
            Signal::Mentorship => "mentorship",
            Signal::CommunityBuilding => "community_building",
            Signal::GithubStars => "github_stars",
            Signal::LinkedinPromotions => "linkedin_promotions",
            Signal::FundingRaised => "funding_raised",
            Signal::Exits => "exits",
            Signal::PressMentions => "press_mentions",
        }
    }

    /// Ceiling used when the category map of the scoring document omits this signal.
    ///
    /// Founder signals are bounded by their own rule caps and have no category entry.
    pub fn default_max_points(&self) -> Option<f64> {
        match self {
            Signal::GithubProjects => Some(10.0),
            Signal::LinkedinStartup => Some(10.0),
            Signal::LinkedinLeadership => Some(5.0),
            Signal::GithubLanguages => Some(8.0),
            Signal::GithubContributions => Some(7.0),
            Signal::LinkedinEducation => Some(10.0),
            Signal::LinkedinCertifications => Some(5.0),
            Signal::GithubOpenSource => Some(10.0),
            Signal::LinkedinVolunteering => Some(5.0),
            Signal::GithubStars => Some(10.0),
            Signal::LinkedinPromotions => Some(10.0),
            _ => None,
        }
    }
}
