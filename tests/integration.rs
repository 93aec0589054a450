// SPDX-License-Identifier: MPL-2.0
use career_lens::api::types::{AnalyzeResponse, ScoreBand};
use career_lens::app::config::{self, Config, GeneralConfig};
use career_lens::chat::stream::SseLineBuffer;
use career_lens::chat::ChatSession;
use career_lens::i18n::fluent::I18n;
use career_lens::validation::{self, CvSelection};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en");

    // 2. Change config to tr
    let turkish_config = Config {
        general: GeneralConfig {
            language: Some("tr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&turkish_config, &temp_config_file_path)
        .expect("Failed to write turkish config file");

    let loaded_turkish_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load turkish config from path");
    let i18n_tr = I18n::new(None, None, &loaded_turkish_config);
    assert_eq!(i18n_tr.current_locale().to_string(), "tr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_both_locales_resolve_core_keys() {
    let keys = [
        "app-title",
        "analyze-button",
        "error-url-invalid",
        "chat-placeholder",
        "report-sections",
    ];

    for lang in ["en", "tr"] {
        let mut i18n = I18n::default();
        i18n.set_locale(lang.parse().expect("valid language tag"));
        for key in keys {
            let value = i18n.tr(key);
            assert_ne!(value, key, "{lang} is missing {key}");
            assert!(!value.is_empty());
        }
    }
}

#[test]
fn test_analyze_response_decodes_full_backend_payload() {
    let payload = r#"{
        "success": true,
        "analysis": {
            "score": 72.4,
            "similarity": 0.61,
            "coverage": 0.8,
            "missing": ["kubernetes", "terraform"],
            "issues": ["CV exceeds two pages"],
            "suggestions": ["Add measurable outcomes to your experience section"],
            "sections": {"contact": true, "education": true, "experience": false}
        },
        "profession": {
            "name": "devops_engineer",
            "display_name": "DevOps Engineer",
            "description": "Automates build and deployment pipelines"
        },
        "skills": {
            "job_skills": ["docker", "kubernetes", "ci/cd"],
            "cv_skills": ["docker", "python"],
            "matched_skills": ["docker"]
        },
        "cv_preview": "Senior engineer with platform experience..."
    }"#;

    let response: AnalyzeResponse = serde_json::from_str(payload).expect("payload decodes");
    assert!(response.success);
    assert_eq!(response.error, None);
    assert!((response.analysis.score - 72.4).abs() < f32::EPSILON);
    assert_eq!(response.analysis.missing.len(), 2);
    assert_eq!(response.analysis.sections_summary(), (2, 3));
    assert_eq!(response.profession.display_name, "DevOps Engineer");
    assert_eq!(response.skills.matched_skills, vec!["docker"]);
}

#[test]
fn test_analyze_response_tolerates_error_reply() {
    let payload = r#"{"success": false, "error": "No readable text found in the PDF"}"#;

    let response: AnalyzeResponse = serde_json::from_str(payload).expect("payload decodes");
    assert!(!response.success);
    assert_eq!(
        response.error.as_deref(),
        Some("No readable text found in the PDF")
    );
    // Defaults fill the absent analysis body.
    assert_eq!(response.analysis.score, 0.0);
    assert!(response.skills.job_skills.is_empty());
}

#[test]
fn test_score_bands_match_thresholds() {
    assert_eq!(ScoreBand::from_score(92.0), ScoreBand::Strong);
    assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Strong);
    assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Moderate);
    assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Moderate);
    assert_eq!(ScoreBand::from_score(59.9), ScoreBand::Weak);
    assert_eq!(ScoreBand::from_score(0.0), ScoreBand::Weak);
}

#[test]
fn test_validation_rejects_bad_submissions_in_order() {
    let pdf = CvSelection {
        path: PathBuf::from("resume.pdf"),
        size: 100_000,
    };

    // URL problems are reported before file problems.
    assert!(validation::validate_submission("", None).is_err());
    assert!(validation::validate_submission("jobs.example.com", Some(&pdf)).is_err());
    assert!(validation::validate_submission("https://jobs.example.com/1", None).is_err());
    assert!(validation::validate_submission("https://jobs.example.com/1", Some(&pdf)).is_ok());

    let empty = CvSelection {
        path: PathBuf::from("resume.pdf"),
        size: 0,
    };
    assert!(validation::validate_submission("https://jobs.example.com/1", Some(&empty)).is_err());

    let oversized = CvSelection {
        path: PathBuf::from("resume.pdf"),
        size: validation::MAX_CV_BYTES + 1,
    };
    assert!(validation::validate_submission("https://jobs.example.com/1", Some(&oversized)).is_err());
}

#[test]
fn test_sse_buffer_reassembles_split_frames() {
    let mut buffer = SseLineBuffer::default();

    let first = buffer.push_chunk(b"data: {\"message\":{\"content\":\"Hel");
    assert!(first.is_empty());

    let second = buffer.push_chunk(b"lo\"},\"done\":false}\n\ndata: {\"done\":true}\n");
    assert_eq!(second.len(), 3);
    assert_eq!(second[0], "data: {\"message\":{\"content\":\"Hello\"},\"done\":false}");
    assert_eq!(second[1], "");
    assert_eq!(second[2], "data: {\"done\":true}");
}

#[test]
fn test_chat_session_lifecycle() {
    let mut session = ChatSession::default();
    assert!(!session.is_active());
    assert!(!session.has_exchange());

    session.begin("How do I close my skill gaps?".to_owned());
    assert!(session.is_active());

    session.append_fragment("Start with ");
    session.append_fragment("the missing skills list.");
    assert_eq!(session.answer, "Start with the missing skills list.");

    session.complete();
    assert!(!session.is_active());
    assert!(session.has_exchange());
    assert!(session.elapsed_ms.is_some());

    session.reset();
    assert!(!session.has_exchange());
    assert!(session.answer.is_empty());
}
