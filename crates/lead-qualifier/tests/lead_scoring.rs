//! Integration specifications for lead scoring.
//!
//! Scenarios drive the public engine facade with hand-built profile bundles and check the
//! score, tier and explanation a caller would see.

mod common {
    use lead_qualifier::profile::{
        CompanyExit, ContributionStats, FoundedCompany, FounderProfile, GithubProfile,
        ProfileBundle,
    };

    pub(super) fn seasoned_developer() -> GithubProfile {
        GithubProfile {
            username: Some("octo".to_string()),
            public_repos: 10,
            total_stars: 500,
            top_languages: ["Rust", "Go", "TypeScript", "Python", "C"]
                .iter()
                .map(|language| language.to_string())
                .collect(),
            contributions: ContributionStats {
                total: 4200,
                last_year: 1000,
            },
            open_source_contributions: 100,
            ..GithubProfile::default()
        }
    }

    pub(super) fn github_only() -> ProfileBundle {
        ProfileBundle {
            github: Some(seasoned_developer()),
            ..ProfileBundle::default()
        }
    }

    pub(super) fn with_repos(public_repos: u32) -> ProfileBundle {
        ProfileBundle {
            github: Some(GithubProfile {
                public_repos,
                ..GithubProfile::default()
            }),
            ..ProfileBundle::default()
        }
    }

    pub(super) fn serial_founder() -> ProfileBundle {
        ProfileBundle {
            founder: Some(FounderProfile {
                companies_founded: vec![
                    FoundedCompany {
                        name: "A".to_string(),
                        ..FoundedCompany::default()
                    },
                    FoundedCompany {
                        name: "B".to_string(),
                        ..FoundedCompany::default()
                    },
                ],
                exits: vec![CompanyExit {
                    company: "A".to_string(),
                    kind: Some("acquisition".to_string()),
                    year: Some(2019),
                }],
                ..FounderProfile::default()
            }),
            ..ProfileBundle::default()
        }
    }
}

mod scoring {
    use super::common::{github_only, serial_founder, with_repos};
    use lead_qualifier::profile::{EducationEntry, LinkedinProfile, ProfileBundle};
    use lead_qualifier::scoring::{
        score_bundle, Category, ScoringConfig, ScoringEngine, Signal, Tier,
    };

    #[test]
    fn empty_bundle_scores_zero_and_weak() {
        let bundle: ProfileBundle = serde_json::from_str("{}").expect("empty bundle parses");
        let result = ScoringEngine::default().score(&bundle);

        assert_eq!(result.total, 0.0);
        assert!(result.signals.is_empty());
        for category in Category::ALL {
            assert_eq!(result.breakdown.get(category), 0.0);
        }
        assert_eq!(result.tier, Tier::Weak);
        assert_eq!(result.reasoning, "Scored as weak based on available data");
    }

    #[test]
    fn github_only_profile_lands_in_good_tier() {
        let result = ScoringEngine::default().score(&github_only());

        assert_eq!(result.signals[&Signal::GithubProjects], 10.0);
        assert_eq!(result.signals[&Signal::GithubLanguages], 8.0);
        assert_eq!(result.signals[&Signal::GithubContributions], 7.0);
        assert_eq!(result.signals[&Signal::GithubOpenSource], 10.0);
        assert_eq!(result.signals[&Signal::GithubStars], 10.0);
        assert_eq!(result.breakdown.ambition, 10.0);
        assert_eq!(result.breakdown.intelligence, 15.0);
        assert_eq!(result.breakdown.kindness, 10.0);
        assert_eq!(result.breakdown.track_record, 10.0);
        assert_eq!(result.total, 45.0);
        assert_eq!(result.tier, Tier::Good);
        assert_eq!(
            result.reasoning,
            "Good candidate: 10 public GitHub projects, Works across 5 languages, \
             1000 contributions in the last year, 100 open source contributions, \
             500 GitHub stars"
        );
    }

    #[test]
    fn github_payload_saturates_count_signals() {
        let bundle: ProfileBundle = serde_json::from_str(
            r#"{"github": {
                "publicRepos": 12,
                "totalStars": 600,
                "topLanguages": ["TS", "Go", "Rust"],
                "contributions": {"lastYear": 1200},
                "openSourceContributions": 150
            }}"#,
        )
        .expect("bundle parses");

        let result = ScoringEngine::default().score(&bundle);

        assert_eq!(result.signals[&Signal::GithubProjects], 10.0);
        assert_eq!(result.signals[&Signal::GithubContributions], 7.0);
        assert_eq!(result.signals[&Signal::GithubOpenSource], 10.0);
        assert_eq!(result.signals[&Signal::GithubStars], 10.0);
        assert_eq!(result.breakdown.intelligence, 11.8);
        assert_eq!(result.total, 41.8);
        assert_eq!(result.tier, Tier::Good);
    }

    #[test]
    fn founder_summary_drives_founder_reasoning() {
        let result = ScoringEngine::default().score(&serial_founder());

        assert_eq!(result.signals[&Signal::CompaniesFounded], 15.0);
        assert_eq!(result.signals[&Signal::Exits], 5.0);
        assert_eq!(result.breakdown.ambition, 15.0);
        assert_eq!(result.breakdown.track_record, 5.0);
        assert_eq!(result.total, 20.0);
        assert_eq!(result.tier, Tier::Average);
        assert!(result
            .reasoning
            .starts_with("Average candidate: Founded: A, B"));
        assert!(result.reasoning.contains("1 exit"));
    }

    #[test]
    fn repository_signal_saturates_at_its_ceiling() {
        let engine = ScoringEngine::default();
        for repos in [10, 15, 100] {
            let result = engine.score(&with_repos(repos));
            assert_eq!(result.signals[&Signal::GithubProjects], 10.0, "{repos} repos");
        }

        let partial = engine.score(&with_repos(5));
        assert_eq!(partial.signals[&Signal::GithubProjects], 5.0);
    }

    #[test]
    fn signal_below_minimum_is_absent() {
        let result = ScoringEngine::default().score(&with_repos(2));
        assert!(!result.signals.contains_key(&Signal::GithubProjects));
        assert_eq!(result.total, 0.0);
    }

    #[test]
    fn total_is_rounded_sum_of_breakdown() {
        let mut bundle = with_repos(7);
        if let Some(github) = bundle.github.as_mut() {
            github.total_stars = 77;
            github.contributions.last_year = 333;
        }

        let result = ScoringEngine::default().score(&bundle);
        let expected = (result.breakdown.sum() * 10.0).round() / 10.0;
        assert_eq!(result.total, expected);
        assert_eq!(result.breakdown.track_record, 1.5);
        assert_eq!(result.breakdown.intelligence, 2.3);
    }

    #[test]
    fn only_first_education_entry_is_considered() {
        let bundle = ProfileBundle {
            linkedin: Some(LinkedinProfile {
                education: vec![
                    EducationEntry {
                        school: "State University".to_string(),
                        ..EducationEntry::default()
                    },
                    EducationEntry {
                        school: "Stanford University".to_string(),
                        degree: Some("PhD".to_string()),
                        ..EducationEntry::default()
                    },
                ],
                ..LinkedinProfile::default()
            }),
            ..ProfileBundle::default()
        };

        let result = ScoringEngine::default().score(&bundle);
        assert!(!result.signals.contains_key(&Signal::LinkedinEducation));
        assert_eq!(result.breakdown.intelligence, 0.0);
    }

    #[test]
    fn total_equal_to_cutoff_takes_that_tier() {
        let config =
            ScoringConfig::parse(r#"{"tiers": {"strong": 45}}"#).expect("config parses");
        let result = score_bundle(&github_only(), &config);
        assert_eq!(result.total, 45.0);
        assert_eq!(result.tier, Tier::Strong);
        assert!(result.reasoning.starts_with("Strong candidate: "));
    }

    #[test]
    fn shipped_document_matches_builtin_defaults() {
        let shipped = ScoringConfig::parse(include_str!("../../../scoring-config.json"))
            .expect("shipped config parses");
        let builtin = ScoringConfig::standard();

        assert_eq!(shipped.weights, builtin.weights);
        assert_eq!(shipped.tiers, builtin.tiers);
        for bundle in [github_only(), serial_founder(), with_repos(4)] {
            let from_file = score_bundle(&bundle, &shipped);
            let from_defaults = score_bundle(&bundle, &builtin);
            assert_eq!(from_file.signals, from_defaults.signals);
            assert_eq!(from_file.total, from_defaults.total);
            assert_eq!(from_file.reasoning, from_defaults.reasoning);
        }
    }
}

mod reload {
    use super::common::github_only;
    use lead_qualifier::scoring::{ScoringConfigError, ScoringEngine, Tier};
    use std::fs;
    use std::path::PathBuf;

    fn config_file(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "lead-qualifier-{name}-{}.json",
            std::process::id()
        ));
        fs::write(&path, body).expect("write scoring config");
        path
    }

    #[test]
    fn reload_applies_to_later_calls_only() {
        let path = config_file("reload", r#"{"version": "v1"}"#);
        let engine = ScoringEngine::from_path(&path).expect("engine loads");

        let before = engine.score(&github_only());
        let snapshot = engine.config();
        assert_eq!(before.tier, Tier::Good);

        fs::write(&path, r#"{"version": "v2", "tiers": {"exceptional": 40}}"#)
            .expect("rewrite scoring config");
        let reloaded = engine.reload().expect("reload succeeds");
        assert_eq!(reloaded.version.as_deref(), Some("v2"));

        let after = engine.score(&github_only());
        assert_eq!(after.tier, Tier::Exceptional);
        assert_eq!(before.tier, Tier::Good);
        assert_eq!(snapshot.version.as_deref(), Some("v1"));
        assert_eq!(snapshot.tiers.exceptional, 80.0);

        fs::remove_file(path).ok();
    }

    #[test]
    fn failed_reload_keeps_active_document() {
        let path = config_file("reload-broken", r#"{"version": "good"}"#);
        let engine = ScoringEngine::from_path(&path).expect("engine loads");

        fs::write(&path, "{ not json").expect("corrupt scoring config");
        let error = engine.reload().expect_err("reload fails");
        assert!(matches!(error, ScoringConfigError::Parse(_)));
        assert_eq!(engine.config().version.as_deref(), Some("good"));

        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = ScoringEngine::from_path("/definitely/not/here/scoring.json")
            .expect_err("missing file");
        assert!(matches!(error, ScoringConfigError::Io { .. }));
        assert!(error.to_string().contains("/definitely/not/here/scoring.json"));
    }
}
