use anyhow::Result;
use httpmock::prelude::*;
use poem_scan::utils::validation::Validate;
use poem_scan::{AnalysisMode, Analyzer, HttpScansionService, ScanError, Session, Settings};

fn session_for(settings: &Settings) -> Result<Session<HttpScansionService>> {
    settings.validate()?;
    let service = HttpScansionService::from_config(settings)?;
    let session = Session::new(Analyzer::new(service));
    session.set_improve_vowel_syllables(settings.improve_vowel_syllables);
    Ok(session)
}

#[tokio::test]
async fn test_remote_mode_uses_service_response() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/parse").json_body(serde_json::json!({
            "text": "Whose woods these are I think I know.",
            "improveVowelSyllables": true
        }));
        then.status(200).json_body(serde_json::json!({
            "parses": [{
                "text": "Whose woods these are I think I know.",
                "meter": "-+-+-+-+",
                "parse_txt": "whose WOODS these ARE i THINK i KNOW"
            }]
        }));
    });

    let settings = Settings {
        service_url: server.url("/api/parse"),
        timeout_seconds: 5,
        mode: AnalysisMode::Remote,
        improve_vowel_syllables: true,
        samples_path: None,
    };
    let session = session_for(&settings)?;
    session.set_text("Whose woods these are I think I know.\n");

    let result = session.submit(settings.mode).await?;

    api_mock.assert();
    // The service answered, so the sample table is not consulted.
    assert!(result.title.is_none());
    assert!(result.author.is_none());
    assert_eq!(result.parses.len(), 1);
    assert_eq!(result.parses[0].parse_txt, "whose WOODS these ARE i THINK i KNOW");
    Ok(())
}

#[tokio::test]
async fn test_remote_error_status_does_not_fall_back() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/parse");
        then.status(503);
    });

    let settings = Settings {
        service_url: server.url("/api/parse"),
        mode: AnalysisMode::Remote,
        ..Settings::default()
    };
    let session = session_for(&settings)?;
    session.set_text("Hi you");

    let err = session.submit(settings.mode).await.unwrap_err();

    api_mock.assert();
    match err {
        ScanError::ServiceUnavailable { endpoint, .. } => {
            assert_eq!(endpoint, server.url("/api/parse"))
        }
        other => panic!("expected ServiceUnavailable, got {:?}", other),
    }
    assert!(!session.is_loading());
    Ok(())
}

#[tokio::test]
async fn test_empty_input_never_reaches_the_service() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/api/parse");
        then.status(200).json_body(serde_json::json!({"parses": []}));
    });

    let settings = Settings {
        service_url: server.url("/api/parse"),
        ..Settings::default()
    };
    let session = session_for(&settings)?;
    session.set_text(" \n ");

    let err = session.submit(AnalysisMode::Remote).await.unwrap_err();

    assert!(matches!(err, ScanError::EmptyInput));
    api_mock.assert_hits(0);
    Ok(())
}
