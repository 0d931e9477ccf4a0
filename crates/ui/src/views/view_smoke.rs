use std::sync::Arc;

use profile_core::model::{ProfileSnapshot, SkillRecord};
use profile_core::{MalformedRowPolicy, ProfileRenderer, RenderConfig, ThemeDraft};

use super::test_harness::render_profile;
use crate::context::{UiApp, build_app_context};
use crate::export::render_static_html;

fn sample_html() -> String {
    render_profile(ProfileSnapshot::sample(), RenderConfig::default())
}

#[test]
fn profile_view_smoke_renders_title_and_sections() {
    let html = sample_html();
    assert!(
        html.contains("Student Xiao Lu - Digital Profile"),
        "missing title in {html}"
    );
    for heading in ["Basic info", "Skill matrix", "Course progress", "Task log", "Latest code", "System messages"] {
        assert!(html.contains(heading), "missing {heading} in {html}");
    }
}

#[test]
fn profile_view_smoke_renders_skill_cards_in_order() {
    let html = sample_html();
    let cpp = html.find("<strong>C++</strong>").expect("C++ card");
    let python = html.find("<strong>Python</strong>").expect("Python card");
    let java = html.find("<strong>Java</strong>").expect("Java card");
    assert!(cpp < python && python < java, "skills out of order in {html}");
    assert!(html.contains("width: 95.0%;"), "missing C++ bar in {html}");
    assert!(html.contains("width: 87.0%;"), "missing Python bar in {html}");
    assert!(html.contains("width: 68.0%;"), "missing Java bar in {html}");
    assert!(html.contains("width: 20.0%;"), "missing course bar in {html}");
    assert!(html.contains("row-caption success"), "missing positive trend in {html}");
}

#[test]
fn profile_view_smoke_renders_task_table_without_index() {
    let html = sample_html();
    assert!(html.contains("★★☆☆☆"), "missing stars in {html}");
    assert!(html.contains("● In progress"), "missing status in {html}");
    assert!(html.contains("title=\"Current task status\""), "missing help text in {html}");
    assert!(html.contains("col-small"), "missing width class in {html}");
    assert!(!html.contains("col-index"), "index column should be hidden in {html}");
    let first = html.find("Student grade system").expect("first task");
    let last = html.find("Teacher records entry").expect("last task");
    assert!(first < last);
}

#[test]
fn profile_view_smoke_renders_code_and_system_panel() {
    let html = sample_html();
    assert!(html.contains("language-python"), "missing code block in {html}");
    assert!(html.contains("result.png"), "missing snippet body in {html}");
    assert!(html.contains("2023-12-12 12:43:48"), "missing timestamp in {html}");
}

#[test]
fn profile_view_smoke_marks_degraded_rows() {
    let mut snapshot = ProfileSnapshot::sample();
    snapshot.skills.push(SkillRecord::new("Rust", "n/a", "+1%"));
    let html = render_profile(snapshot, RenderConfig::default());
    assert!(html.contains("display-row--degraded"), "missing degraded row in {html}");
    assert!(html.contains("<strong>Rust</strong>"), "missing Rust card in {html}");
}

#[test]
fn profile_view_smoke_skips_malformed_rows_when_configured() {
    let mut snapshot = ProfileSnapshot::sample();
    snapshot.skills.push(SkillRecord::new("Rust", "n/a", "+1%"));
    let config = RenderConfig {
        malformed_rows: MalformedRowPolicy::Skip,
        ..RenderConfig::default()
    };
    let html = render_profile(snapshot, config);
    assert!(!html.contains("Rust"), "malformed row should be skipped in {html}");
}

struct ExportApp {
    renderer: ProfileRenderer,
}

impl UiApp for ExportApp {
    fn app_name(&self) -> &str {
        "Profile"
    }

    fn renderer(&self) -> &ProfileRenderer {
        &self.renderer
    }
}

#[test]
fn static_export_inlines_styles_and_theme() {
    let theme = ThemeDraft {
        accent_color: Some("#4CAF50".to_string()),
        ..ThemeDraft::default()
    }
    .validate()
    .unwrap();
    let app: Arc<dyn UiApp> = Arc::new(ExportApp {
        renderer: ProfileRenderer::new(
            ProfileSnapshot::sample(),
            RenderConfig {
                theme,
                ..RenderConfig::default()
            },
        ),
    });

    let html = render_static_html(build_app_context(&app));
    assert!(html.starts_with("<!DOCTYPE html>"), "missing doctype in {html}");
    assert!(html.contains(".progress-fill"), "missing stylesheet in {html}");
    assert!(html.contains("--profile-accent: #4CAF50;"), "missing theme in {html}");
    assert!(html.contains("<strong>Java</strong>"), "missing body in {html}");
}
