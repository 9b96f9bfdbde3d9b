use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::*;

struct ManualScheduler {
    now_ms: RefCell<u64>,
    frames: RefCell<Vec<Box<dyn FnOnce()>>>,
    timers: RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    fn new() -> Rc<Self> {
        Rc::new(Self {
            now_ms: RefCell::new(0),
            frames: RefCell::new(Vec::new()),
            timers: RefCell::new(Vec::new()),
        })
    }

    fn run_frames(&self) {
        loop {
            let frames: Vec<Box<dyn FnOnce()>> = self.frames.borrow_mut().drain(..).collect();
            if frames.is_empty() {
                break;
            }
            for frame in frames {
                frame();
            }
        }
    }

    fn advance(&self, ms: u64) {
        let target = *self.now_ms.borrow() + ms;
        loop {
            self.run_frames();
            let next = {
                let timers = self.timers.borrow();
                timers
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= target)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(index, (due, _))| (index, *due))
            };
            let Some((index, due)) = next else { break };
            let (_, callback) = self.timers.borrow_mut().remove(index);
            *self.now_ms.borrow_mut() = due;
            callback();
        }
        *self.now_ms.borrow_mut() = target;
        self.run_frames();
    }
}

impl Scheduler for ManualScheduler {
    fn next_frame(&self, callback: Box<dyn FnOnce()>) {
        self.frames.borrow_mut().push(callback);
    }

    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let due = *self.now_ms.borrow() + u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.timers.borrow_mut().push((due, callback));
    }
}

fn recording_hooks(events: &Rc<RefCell<Vec<&'static str>>>) -> ToastHooks {
    let show_events = Rc::clone(events);
    let hide_events = Rc::clone(events);
    let remove_events = Rc::clone(events);
    ToastHooks {
        show: Box::new(move || show_events.borrow_mut().push("show")),
        hide: Box::new(move || hide_events.borrow_mut().push("hide")),
        remove: Box::new(move || remove_events.borrow_mut().push("remove")),
    }
}

#[test]
fn lifecycle_advances_in_order() {
    let mut lifecycle = ToastLifecycle::new();
    assert_eq!(lifecycle.phase(), ToastPhase::Entering);
    assert!(lifecycle.enter());
    assert_eq!(lifecycle.phase(), ToastPhase::Visible);
    assert!(lifecycle.begin_leave());
    assert_eq!(lifecycle.phase(), ToastPhase::Leaving);
    assert!(lifecycle.finish());
    assert_eq!(lifecycle.phase(), ToastPhase::Removed);
}

#[test]
fn lifecycle_rejects_out_of_order_transitions() {
    let mut lifecycle = ToastLifecycle::new();
    assert!(!lifecycle.begin_leave());
    assert!(!lifecycle.finish());
    assert_eq!(lifecycle.phase(), ToastPhase::Entering);

    assert!(lifecycle.enter());
    assert!(!lifecycle.enter());
    assert!(lifecycle.begin_leave());
    assert!(!lifecycle.begin_leave());
    assert!(lifecycle.finish());
    assert!(!lifecycle.finish());
}

#[test]
fn drive_shows_on_next_frame_only() {
    let scheduler = ManualScheduler::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let as_dyn: Rc<dyn Scheduler> = Rc::clone(&scheduler) as Rc<dyn Scheduler>;
    drive_lifecycle(&as_dyn, recording_hooks(&events));

    assert!(events.borrow().is_empty());
    scheduler.run_frames();
    assert_eq!(*events.borrow(), vec!["show"]);
}

#[test]
fn drive_hides_after_display_window_and_removes_after_fade() {
    let scheduler = ManualScheduler::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    let as_dyn: Rc<dyn Scheduler> = Rc::clone(&scheduler) as Rc<dyn Scheduler>;
    drive_lifecycle(&as_dyn, recording_hooks(&events));

    scheduler.advance(DISPLAY_MS - 1);
    assert_eq!(*events.borrow(), vec!["show"]);

    scheduler.advance(1);
    assert_eq!(*events.borrow(), vec!["show", "hide"]);

    scheduler.advance(FADE_MS - 1);
    assert_eq!(*events.borrow(), vec!["show", "hide"]);

    scheduler.advance(1);
    assert_eq!(*events.borrow(), vec!["show", "hide", "remove"]);
}

#[test]
fn error_toasts_use_light_red_scheme() {
    assert_eq!(kind_colors(ToastKind::Error), ("#ffefef", "#7f1d1d"));
    assert_eq!(kind_colors(ToastKind::Info), ("#111827", "#fff"));
}

#[test]
fn toast_class_includes_kind_suffix() {
    assert_eq!(toast_class(ToastKind::Info), "gauch-toast gauch-toast-info");
    assert_eq!(toast_class(ToastKind::Error), "gauch-toast gauch-toast-error");
}

#[test]
fn toast_styles_pick_up_kind_colors() {
    let styles = toast_styles(ToastKind::Error);
    assert!(styles.contains(&("background", "#ffefef")));
    assert!(styles.contains(&("color", "#7f1d1d")));
}

#[test]
fn container_is_non_interactive_overlay() {
    let styles = container_styles();
    assert!(styles.contains(&("position", "fixed")));
    assert!(styles.contains(&("pointer-events", "none")));
}

#[test]
fn container_id_is_stable_for_external_styling() {
    assert_eq!(CONTAINER_ID, "gauch-toast-container");
}
