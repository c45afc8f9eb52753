use crate::fragments::PageChrome;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Loads the wasm effects bundle (reveal, counters, smooth scroll, navbar shadow).
const EFFECTS_BOOT: &str =
    "import init from '/static/pkg/farmlink_effects.js'; init().catch((e) => console.error('effects failed to start', e));";

pub fn site_layout(title: &str, chrome: PageChrome, modal: Option<Markup>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | FarmLink" }
                link rel="stylesheet" href="/static/main.css";
                script type="module" { (PreEscaped(EFFECTS_BOOT)) }
            }
            body {
                (chrome.header)
                main { (content) }
                (chrome.footer)
                @if let Some(modal) = modal {
                    (modal)
                }
            }
        }
    }
}
