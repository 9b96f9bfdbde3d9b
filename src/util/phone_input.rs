//! Live `(000) 000-0000` masking for phone `<input>` elements.
//!
//! ARCHITECTURE
//! ============
//! The masking rules are pure string functions over the input's digit
//! content; the DOM binding only re-derives the display value on each
//! event. Formatting is therefore idempotent: the rendered value always
//! equals `build(digits(raw))`.

#[cfg(test)]
#[path = "phone_input_test.rs"]
mod tests;

/// Strip every non-digit character.
pub(crate) fn digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Render at most the first 10 digits as a masked US number.
pub(crate) fn build(d: &str) -> String {
    let dd: String = d.chars().take(10).collect();
    match dd.len() {
        0..=3 => dd,
        4..=6 => format!("({}) {}", &dd[..3], &dd[3..]),
        _ => format!("({}) {}-{}", &dd[..3], &dd[3..6], &dd[6..]),
    }
}

/// Normalize any raw input into the masked display form.
#[must_use]
pub fn format_masked(raw: &str) -> String {
    build(&digits(raw))
}

/// Whether a keydown may pass through the masked input unfiltered.
///
/// Navigation/editing keys, any Ctrl/Meta chord, and single digits are
/// allowed; every other character key is blocked.
#[cfg(any(test, feature = "web"))]
pub(crate) fn key_allowed(key: &str, ctrl: bool, meta: bool) -> bool {
    const ALLOWED: [&str; 7] = ["Backspace", "ArrowLeft", "ArrowRight", "Delete", "Tab", "Home", "End"];
    if ALLOWED.contains(&key) {
        return true;
    }
    if ctrl || meta {
        return true;
    }
    key.len() == 1 && key.as_bytes()[0].is_ascii_digit()
}

/// Convert a masked (or arbitrary) phone string to E.164, US default.
///
/// 10 digits gain a `+1` prefix; 11 digits starting with `1` gain `+`;
/// longer sequences get a best-effort `+` with no validation. Anything
/// shorter than 10 digits is ambiguous and yields `None`.
#[must_use]
pub fn to_e164(masked: &str) -> Option<String> {
    let d = digits(masked);
    if d.len() == 10 {
        return Some(format!("+1{d}"));
    }
    if d.len() == 11 && d.starts_with('1') {
        return Some(format!("+{d}"));
    }
    if d.len() > 10 {
        return Some(format!("+{d}"));
    }
    None
}

/// Attach live masking behavior to an input element.
///
/// Registers `input`/`blur` renormalization, paste interception (the
/// clipboard text replaces the whole value), and keydown filtering, then
/// normalizes whatever value the element already holds. No-op on `None`.
#[cfg(feature = "web")]
pub fn bind(input: Option<&web_sys::HtmlInputElement>) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(input) = input else {
        return;
    };

    for event in ["input", "blur"] {
        let el = input.clone();
        let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            el.set_value(&format_masked(&el.value()));
        });
        let _ = input.add_event_listener_with_callback(event, on_change.as_ref().unchecked_ref());
        on_change.forget();
    }

    let el = input.clone();
    let on_paste = Closure::<dyn FnMut(web_sys::ClipboardEvent)>::new(move |ev: web_sys::ClipboardEvent| {
        ev.prevent_default();
        let text = ev
            .clipboard_data()
            .and_then(|data| data.get_data("text").ok())
            .unwrap_or_default();
        el.set_value(&format_masked(&text));
    });
    let _ = input.add_event_listener_with_callback("paste", on_paste.as_ref().unchecked_ref());
    on_paste.forget();

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if !key_allowed(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            ev.prevent_default();
        }
    });
    let _ = input.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();

    input.set_value(&format_masked(&input.value()));
}
