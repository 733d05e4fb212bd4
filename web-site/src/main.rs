mod contact;
mod content;
mod layout;
mod primitives;
mod sections;
mod transform;
mod ui;

use dioxus::prelude::*;
use layout::{Footer, Navbar};
use primitives::{Animation, Position};
use sections::{About, Contact, Hero, Portfolio, ProblemSolution, Process, Services, WhyUs};
use ui::viewport::use_viewport_provider;
use ui::{CursorRing, NoiseOverlay, ScrollProgress, use_cursor_follower};

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Layout rules that inline styles cannot express: media queries and helpers
const SITE_CSS: &str = r#"
html { scroll-behavior: smooth; }
body { margin: 0; background: #0a0a0a; color: #fff; font-family: 'Inter', system-ui, sans-serif; -webkit-font-smoothing: antialiased; }
::selection { background: #06b6d4; color: #000; }
.container { width: 100%; max-width: 1280px; margin: 0 auto; padding: 0 24px; box-sizing: border-box; }
.grid-2, .grid-3, .grid-4 { display: grid; grid-template-columns: 1fr; gap: 32px; }
.grid-2 { gap: 64px; }
.grid-2.tight { gap: 24px; }
.sr-only { position: absolute; width: 1px; height: 1px; padding: 0; margin: -1px; overflow: hidden; clip: rect(0,0,0,0); border: 0; }
.skip-link { position: absolute; left: 16px; top: -48px; z-index: 200; padding: 8px 16px; background: #06b6d4; color: #000; font-weight: 700; }
.skip-link:focus { top: 16px; }
.desktop-nav, .desktop-only { display: none; }
.project-row { display: flex; flex-direction: column; gap: 48px; align-items: center; }
.project-media { width: 100%; }
@media (min-width: 768px) {
  .grid-2 { grid-template-columns: repeat(2, 1fr); }
  .grid-3 { grid-template-columns: repeat(2, 1fr); }
  .grid-4 { grid-template-columns: repeat(4, 1fr); }
  .desktop-nav { display: flex; align-items: center; gap: 32px; }
  .desktop-only { display: block; }
  .mobile-toggle { display: none; }
  .sticky-column { position: sticky; top: 128px; }
  .project-row { flex-direction: var(--row-direction); }
  .project-media { flex: 3; }
}
@media (min-width: 1024px) {
  .grid-3 { grid-template-columns: repeat(3, 1fr); }
}
@media (prefers-reduced-motion: reduce) {
  *, *::before, *::after { animation-duration: 0.01ms !important; transition-duration: 0.01ms !important; }
}
"#;

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Title { "Digital VisionWorks | Build Smarter. Launch Faster." }
        document::Style { {Animation::keyframes_css()} }
        document::Style { {SITE_CSS} }
        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                let detail = failure_detail(&errors);
                log::error!("page failed to render: {detail}");
                rsx! { RenderFailure { detail } }
            },
            Router::<Route> {}
        }
    }
}

/// First error caught by the page boundary, as shown to the visitor
fn failure_detail(errors: &ErrorContext) -> String {
    errors
        .error()
        .map(|err| err.to_string())
        .unwrap_or_else(|| "unknown error".to_string())
}

#[component]
fn RenderFailure(detail: String) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 16px; background: #0a0a0a; color: #fff; font-family: system-ui, sans-serif; text-align: center; padding: 24px;",
            h1 { style: "font-size: 32px; margin: 0;", "Something went wrong." }
            p { style: "color: #9ca3af; margin: 0; max-width: 480px;", "{detail}" }
            a { href: "/", style: "color: #22d3ee; font-weight: 600;", "Reload the page" }
        }
    }
}

#[component]
fn Home() -> Element {
    use_viewport_provider();
    let (mut follower, cursor) = use_cursor_follower();

    rsx! {
        div {
            id: "main",
            style: "min-height: 100vh; background: #0a0a0a; color: #fff;",
            onmousemove: move |e: Event<MouseData>| {
                let client = e.client_coordinates();
                follower.write().pointer_move(Position::new(client.x as f32, client.y as f32));
                cursor.wake();
            },
            a { class: "skip-link", href: "#main-content", "Skip to main content" }
            ScrollProgress {}
            NoiseOverlay {}
            CursorRing { follower }
            Navbar {}
            main {
                id: "main-content",
                role: "main",
                tabindex: "-1",
                Hero {}
                ProblemSolution {}
                Services {}
                WhyUs {}
                Portfolio {}
                Process {}
                About {}
                Contact {}
            }
            Footer {}
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("no route for /{path}");
    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 24px; background: #0a0a0a; color: #fff; font-family: system-ui, sans-serif;",
            h1 { style: "font-size: 64px; margin: 0; color: #06b6d4;", "404" }
            p { style: "color: #9ca3af; margin: 0;", "Nothing lives at /{path}." }
            span {
                style: "color: #22d3ee; font-weight: 600;",
                Link { to: Route::Home {}, "Back to the homepage" }
            }
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
        }
    }
    dioxus::launch(App);
}
