//! Page-side scripts
//!
//! Each script is a self-invoking expression, evaluated once in the page
//! before word submission starts.

use super::{PROGRESS_EVENT, PROGRESS_PREFIX};
use crate::config::Selectors;

/// Quote a value as a JavaScript string literal
fn js_string(value: &str) -> String {
    // A JSON string is a valid JS string literal
    serde_json::Value::from(value).to_string()
}

/// Script that watches the score panel and raises an event on every distinct change
///
/// Mutations that leave the three fields unchanged raise nothing. If the panel
/// does not exist the script installs nothing and returns `false`.
#[must_use]
pub fn observer_script(selectors: &Selectors) -> String {
    format!(
        r"(() => {{
    const panel = document.querySelector({panel});
    if (!panel) return false;
    const read = (selector) => document.querySelector(selector)?.textContent;
    let lastUpdate = '';

    const observer = new MutationObserver(() => {{
        const detail = {{
            currentTitle: read({current_title}),
            nextLeft: read({next_left}),
            nextTitle: read({next_title}),
        }};
        const update = JSON.stringify(detail);
        if (update === lastUpdate) return;
        lastUpdate = update;
        document.dispatchEvent(new CustomEvent({event}, {{ detail }}));
    }});

    observer.observe(panel, {{ childList: true, characterData: true, subtree: true }});
    return true;
}})()",
        panel = js_string(&selectors.progress_panel),
        current_title = js_string(&selectors.current_title),
        next_left = js_string(&selectors.next_left),
        next_title = js_string(&selectors.next_title),
        event = js_string(PROGRESS_EVENT),
    )
}

/// Script that forwards progress events to the console as tagged lines
#[must_use]
pub fn bridge_script() -> String {
    format!(
        r"(() => {{
    document.addEventListener({event}, (event) => {{
        console.log({prefix} + JSON.stringify(event.detail));
    }});
    return true;
}})()",
        event = js_string(PROGRESS_EVENT),
        prefix = js_string(PROGRESS_PREFIX),
    )
}

/// Expression that evaluates to whether the element matching `selector` is rendered and visible
#[must_use]
pub fn visibility_script(selector: &str) -> String {
    format!(
        r"(() => {{
    const el = document.querySelector({selector});
    if (!el) return false;
    const style = window.getComputedStyle(el);
    if (style.display === 'none' || style.visibility === 'hidden') return false;
    const rect = el.getBoundingClientRect();
    return rect.width > 0 && rect.height > 0;
}})()",
        selector = js_string(selector),
    )
}
