//! Tests for the greeter host runtime

use std::sync::Arc;

use greeter_i18n::{parse_locale, LocaleProvider, MemoryLocaleProvider, StringBundles};
use greeter_widgets::ClickOutcome;
use pretty_assertions::assert_eq;

use crate::app::{GreeterApp, UiEvent};
use crate::error::AppError;
use crate::headless_report::ReportStatus;
use crate::headless_runner::run_scenario;
use crate::headless_runtime::HeadlessRunConfig;

/// Create an app on an in-memory host reporting `locale`
fn create_test_app(locale: &str) -> (GreeterApp, Arc<MemoryLocaleProvider>) {
    let provider = Arc::new(MemoryLocaleProvider::new(parse_locale(locale).unwrap()));
    let bundles = StringBundles::builtin().expect("built-in bundles should parse");
    (GreeterApp::create(provider.clone(), bundles), provider)
}

#[test]
fn test_korean_host_switches_to_chinese() {
    let (mut app, provider) = create_test_app("ko-KR");
    assert_eq!(app.selected_index(), 2);
    assert_eq!(
        app.view().text_of("greeting-text").as_deref(),
        Some("안녕하세요, 세계!")
    );

    let outcome = app.click("locale-option-0").unwrap();
    assert_eq!(outcome, ClickOutcome::Switched { from: 2, to: 0 });
    assert_eq!(app.selected_index(), 0);
    assert_eq!(provider.get().to_string(), "zh-CN");
    assert!(app.rebuild_pending());

    assert!(app.frame());
    assert_eq!(app.rebuild_count(), 1);
    assert_eq!(app.selected_index(), 0);
    assert_eq!(
        app.view().text_of("greeting-text").as_deref(),
        Some("你好，世界！")
    );
    assert_eq!(app.view().selected_ids(), vec!["locale-option-0".to_string()]);
}

#[test]
fn test_unsupported_host_defaults_to_first_option() {
    let (app, provider) = create_test_app("fr-FR");
    assert_eq!(app.selected_index(), 0);
    assert_eq!(app.view().selected_ids(), vec!["locale-option-0".to_string()]);
    // Strings come from the fallback bundle; the host is left alone.
    assert_eq!(
        app.view().text_of("greeting-text").as_deref(),
        Some("Hello, World!")
    );
    assert!(provider.applied().is_empty());
}

#[test]
fn test_bare_chinese_host_renders_chinese() {
    for host in ["zh", "zh-Hans"] {
        let (mut app, provider) = create_test_app(host);
        assert_eq!(app.selected_index(), 0, "host {host}");
        assert_eq!(
            app.view().text_of("greeting-text").as_deref(),
            Some("你好，世界！"),
            "host {host}"
        );

        assert_eq!(app.click("locale-option-0").unwrap(), ClickOutcome::Unchanged);
        assert!(!app.frame());
        assert!(provider.applied().is_empty());
    }
}

#[test]
fn test_clicking_selected_option_is_idempotent() {
    let (mut app, provider) = create_test_app("en-US");
    let before = app.view().clone();

    for _ in 0..4 {
        let outcome = app
            .dispatch(UiEvent::Click {
                id: "locale-option-1".to_string(),
            })
            .unwrap();
        assert_eq!(outcome, ClickOutcome::Unchanged);
        assert!(!app.frame());
    }

    assert_eq!(app.rebuild_count(), 0);
    assert_eq!(provider.get().to_string(), "en-US");
    assert!(provider.applied().is_empty());
    assert_eq!(app.view(), &before);
}

#[test]
fn test_each_switch_rebuilds_exactly_once() {
    let (mut app, provider) = create_test_app("en");

    app.click("locale-option-2").unwrap();
    assert!(app.frame());
    assert!(!app.frame());
    assert_eq!(app.rebuild_count(), 1);

    app.click("locale-option-1").unwrap();
    assert!(app.frame());
    assert_eq!(app.rebuild_count(), 2);

    assert_eq!(
        provider
            .applied()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        vec!["ko", "en"]
    );
    assert_eq!(app.frame_count(), 3);
}

#[test]
fn test_switches_before_a_frame_coalesce() {
    let (mut app, provider) = create_test_app("ko");

    // The old selector is still live until the frame replaces it.
    assert_eq!(
        app.click("locale-option-0").unwrap(),
        ClickOutcome::Switched { from: 2, to: 0 }
    );
    assert_eq!(
        app.click("locale-option-1").unwrap(),
        ClickOutcome::Switched { from: 0, to: 1 }
    );

    assert!(app.frame());
    assert!(!app.frame());
    assert_eq!(app.rebuild_count(), 1);
    assert_eq!(provider.applied().len(), 2);
    assert_eq!(app.selected_index(), 1);
    assert_eq!(
        app.view().text_of("greeting-text").as_deref(),
        Some("Hello, World!")
    );
}

#[test]
fn test_rebuild_restarts_from_host_locale() {
    let (mut app, provider) = create_test_app("en");

    // Another surface changes the process-wide locale; the screen only
    // notices once something requests a rebuild.
    provider.set(parse_locale("ko-KR").unwrap());
    assert!(!app.frame());
    assert_eq!(app.selected_index(), 1);

    app.click("locale-option-0").unwrap();
    app.frame();
    assert_eq!(app.screen().locale().to_string(), "zh-CN");
    assert_eq!(
        app.view().text_of("header-title").as_deref(),
        Some("第一个安卓应用")
    );
}

#[test]
fn test_click_errors() {
    let (mut app, _) = create_test_app("en");
    assert!(matches!(
        app.click("locale-option-7"),
        Err(AppError::UnknownElement(id)) if id == "locale-option-7"
    ));
    assert!(matches!(
        app.click("greeting-text"),
        Err(AppError::NotClickable(_))
    ));
}

#[test]
fn test_header_and_card_render_in_host_locale() {
    let (app, _) = create_test_app("zh-CN");
    let view = app.view();
    assert_eq!(view.text_of("header-title").as_deref(), Some("第一个安卓应用"));
    assert_eq!(
        view.text_of("header-author").as_deref(),
        Some("2023110224 Mamaruo")
    );
    assert_eq!(
        view.text_of("locale-selector").as_deref(),
        Some("简体中文 English 한국어")
    );
}

#[test]
fn test_scenario_passes() {
    let (mut app, _) = create_test_app("ko-KR");
    let scenario = r#"{
        "name": "korean to chinese",
        "steps": [
            { "type": "assert_selected", "index": 2 },
            { "type": "assert_text_contains", "id": "greeting-text", "value": "안녕하세요" },
            { "type": "click", "id": "locale-option-0" },
            { "type": "wait", "ms": 20 },
            { "type": "assert_selected", "index": 0 },
            { "type": "assert_locale", "locale": "zh-CN" },
            { "type": "assert_rebuilds", "count": 1 },
            { "type": "assert_text_contains", "id": "greeting-text", "value": "你好" },
            { "type": "click", "id": "locale-option-0" },
            { "type": "tick", "frames": 3 },
            { "type": "assert_rebuilds", "count": 1 }
        ]
    }"#;

    let outcome = run_scenario(&mut app, scenario, HeadlessRunConfig::default()).unwrap();
    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    let report = outcome.report();
    assert_eq!(report.status, ReportStatus::Passed);
    assert_eq!(report.elapsed_frames, 5);
    assert_eq!(report.elapsed_ms, 80);
    assert_eq!(report.rebuilds, 1);
    assert_eq!(report.final_locale, "zh-CN");
}

#[test]
fn test_scenario_reports_first_failure() {
    let (mut app, _) = create_test_app("en");
    let scenario = r#"{
        "steps": [
            { "type": "assert_exists", "id": "greeting-card" },
            { "type": "click", "id": "locale-option-2" },
            { "type": "assert_text_contains", "id": "greeting-text", "value": "안녕하세요" },
            { "type": "assert_selected", "index": 0 }
        ]
    }"#;

    // No frame ran after the click, so the view still shows English.
    let outcome = run_scenario(&mut app, scenario, HeadlessRunConfig::default()).unwrap();
    assert!(outcome.is_failed());
    let report = outcome.report();
    assert_eq!(report.failed_step_index, Some(2));
    assert_eq!(report.assertion.as_deref(), Some("assert_text_contains"));
    assert_eq!(report.final_locale, "ko");
}

#[test]
fn test_scenario_click_on_missing_element_fails() {
    let (mut app, _) = create_test_app("en");
    let scenario = r#"{ "steps": [ { "type": "click", "id": "nope" } ] }"#;
    let outcome = run_scenario(&mut app, scenario, HeadlessRunConfig::default()).unwrap();
    assert!(outcome.is_failed());
    assert_eq!(outcome.report().assertion.as_deref(), Some("click"));
}
