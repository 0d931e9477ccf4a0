use std::sync::Arc;

use dioxus::prelude::*;
use profile_core::model::ProfileSnapshot;
use profile_core::{ProfileRenderer, RenderConfig};

use crate::context::{UiApp, build_app_context};
use crate::views::ProfileView;

struct TestApp {
    renderer: ProfileRenderer,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Profile (test)"
    }

    fn renderer(&self) -> &ProfileRenderer {
        &self.renderer
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { ProfileView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view_harness(snapshot: ProfileSnapshot, config: RenderConfig) -> ViewHarness {
    let app = Arc::new(TestApp {
        renderer: ProfileRenderer::new(snapshot, config),
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app });
    ViewHarness { dom }
}

pub fn render_profile(snapshot: ProfileSnapshot, config: RenderConfig) -> String {
    let mut harness = setup_view_harness(snapshot, config);
    harness.rebuild();
    harness.render()
}
