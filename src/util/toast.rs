//! Transient toast notifications.
//!
//! A singleton container is created lazily at the bottom-center of the
//! page; each call appends one self-expiring toast to it. The fade
//! lifecycle is an explicit state machine (`Entering -> Visible ->
//! Leaving -> Removed`) driven through [`Scheduler`], so the transition
//! logic is testable under a virtual clock.
//!
//! TRADE-OFFS
//! ==========
//! Toasts are fire-and-forget: callers never await removal, repeated
//! calls stack without de-duplication, and there is no cap on how many
//! are visible at once.

#[cfg(test)]
#[path = "toast_test.rs"]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::scheduler::Scheduler;

#[cfg(any(test, feature = "web"))]
pub(crate) const CONTAINER_ID: &str = "gauch-toast-container";

/// How long a toast stays fully visible.
pub(crate) const DISPLAY_MS: u64 = 3000;
/// Fade-out transition length before the element is removed.
pub(crate) const FADE_MS: u64 = 220;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Error,
}

impl ToastKind {
    #[cfg(any(test, feature = "web"))]
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// `(background, text)` color pair for a toast kind.
#[cfg(any(test, feature = "web"))]
pub(crate) fn kind_colors(kind: ToastKind) -> (&'static str, &'static str) {
    match kind {
        ToastKind::Error => ("#ffefef", "#7f1d1d"),
        ToastKind::Info => ("#111827", "#fff"),
    }
}

#[cfg(any(test, feature = "web"))]
pub(crate) fn toast_class(kind: ToastKind) -> String {
    format!("gauch-toast gauch-toast-{}", kind.as_str())
}

#[cfg(any(test, feature = "web"))]
pub(crate) fn container_styles() -> [(&'static str, &'static str); 10] {
    [
        ("position", "fixed"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("bottom", "24px"),
        ("z-index", "9999"),
        ("display", "flex"),
        ("flex-direction", "column"),
        ("gap", "8px"),
        ("align-items", "center"),
        ("pointer-events", "none"),
    ]
}

#[cfg(any(test, feature = "web"))]
pub(crate) fn toast_styles(kind: ToastKind) -> [(&'static str, &'static str); 11] {
    let (background, color) = kind_colors(kind);
    [
        ("min-width", "140px"),
        ("max-width", "90vw"),
        ("padding", "10px 14px"),
        ("border-radius", "12px"),
        ("background", background),
        ("color", color),
        ("font-size", "14px"),
        ("box-shadow", "0 6px 18px rgba(0,0,0,0.12)"),
        ("opacity", "0"),
        ("transform", "translateY(6px)"),
        ("transition", "opacity .18s ease, transform .18s ease"),
    ]
}

// =============================================================================
// LIFECYCLE STATE MACHINE
// =============================================================================

/// Phase of a single toast, from creation to removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
    Removed,
}

/// Tracks a toast's phase and rejects out-of-order transitions, so a
/// stray timer callback can never resurrect or double-remove a toast.
#[derive(Debug)]
pub struct ToastLifecycle {
    phase: ToastPhase,
}

impl ToastLifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self { phase: ToastPhase::Entering }
    }

    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// `Entering -> Visible`. Returns whether the transition applied.
    pub fn enter(&mut self) -> bool {
        self.step(ToastPhase::Entering, ToastPhase::Visible)
    }

    /// `Visible -> Leaving`. Returns whether the transition applied.
    pub fn begin_leave(&mut self) -> bool {
        self.step(ToastPhase::Visible, ToastPhase::Leaving)
    }

    /// `Leaving -> Removed`. Returns whether the transition applied.
    pub fn finish(&mut self) -> bool {
        self.step(ToastPhase::Leaving, ToastPhase::Removed)
    }

    fn step(&mut self, from: ToastPhase, to: ToastPhase) -> bool {
        if self.phase != from {
            return false;
        }
        self.phase = to;
        true
    }
}

impl Default for ToastLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentation callbacks invoked as the lifecycle advances.
pub struct ToastHooks {
    /// Apply the visible styles (slide/fade in).
    pub show: Box<dyn Fn()>,
    /// Apply the leaving styles (slide/fade out).
    pub hide: Box<dyn Fn()>,
    /// Detach the element from the tree.
    pub remove: Box<dyn Fn()>,
}

/// Wire one toast's lifecycle onto a scheduler: next frame -> show,
/// +[`DISPLAY_MS`] -> hide, +[`FADE_MS`] -> remove.
pub fn drive_lifecycle(scheduler: &Rc<dyn Scheduler>, hooks: ToastHooks) {
    let lifecycle = Rc::new(RefCell::new(ToastLifecycle::new()));
    let hooks = Rc::new(hooks);

    let sched_for_frame = Rc::clone(scheduler);
    let lifecycle_for_frame = Rc::clone(&lifecycle);
    let hooks_for_frame = Rc::clone(&hooks);
    scheduler.next_frame(Box::new(move || {
        if !lifecycle_for_frame.borrow_mut().enter() {
            return;
        }
        (hooks_for_frame.show)();

        let sched_for_leave = Rc::clone(&sched_for_frame);
        let lifecycle_for_leave = Rc::clone(&lifecycle_for_frame);
        let hooks_for_leave = Rc::clone(&hooks_for_frame);
        sched_for_frame.after(
            Duration::from_millis(DISPLAY_MS),
            Box::new(move || {
                if !lifecycle_for_leave.borrow_mut().begin_leave() {
                    return;
                }
                (hooks_for_leave.hide)();

                let lifecycle_for_remove = Rc::clone(&lifecycle_for_leave);
                let hooks_for_remove = Rc::clone(&hooks_for_leave);
                sched_for_leave.after(
                    Duration::from_millis(FADE_MS),
                    Box::new(move || {
                        if lifecycle_for_remove.borrow_mut().finish() {
                            (hooks_for_remove.remove)();
                        }
                    }),
                );
            }),
        );
    }));
}

// =============================================================================
// DOM ENTRY POINT
// =============================================================================

/// Show a transient toast at the bottom of the page.
///
/// Fire-and-forget: the element fades in on the next frame, stays for
/// 3 seconds, fades out, and is removed from the tree. No-op outside a
/// browser environment.
pub fn show_toast(message: &str, kind: ToastKind) {
    #[cfg(feature = "web")]
    {
        use wasm_bindgen::JsCast;

        use super::scheduler::BrowserScheduler;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };

        let container = match document.get_element_by_id(CONTAINER_ID) {
            Some(existing) => existing,
            None => {
                let Ok(created) = document.create_element("div") else {
                    return;
                };
                created.set_id(CONTAINER_ID);
                if let Some(el) = created.dyn_ref::<web_sys::HtmlElement>() {
                    apply_styles(el, &container_styles());
                }
                let _ = body.append_child(&created);
                created
            }
        };

        let Ok(toast) = document.create_element("div") else {
            return;
        };
        toast.set_class_name(&toast_class(kind));
        toast.set_text_content(Some(message));
        let Ok(toast) = toast.dyn_into::<web_sys::HtmlElement>() else {
            return;
        };
        apply_styles(&toast, &toast_styles(kind));
        let _ = toast.style().set_property("pointer-events", "auto");
        let _ = container.append_child(&toast);

        let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler);
        let toast_show = toast.clone();
        let toast_hide = toast.clone();
        drive_lifecycle(
            &scheduler,
            ToastHooks {
                show: Box::new(move || {
                    let _ = toast_show.style().set_property("opacity", "1");
                    let _ = toast_show.style().set_property("transform", "translateY(0)");
                }),
                hide: Box::new(move || {
                    let _ = toast_hide.style().set_property("opacity", "0");
                    let _ = toast_hide.style().set_property("transform", "translateY(6px)");
                }),
                remove: Box::new(move || toast.remove()),
            },
        );
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (message, kind);
    }
}

#[cfg(feature = "web")]
fn apply_styles(el: &web_sys::HtmlElement, styles: &[(&str, &str)]) {
    for (property, value) in styles {
        let _ = el.style().set_property(property, value);
    }
}
