use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use crate::counter::{CounterAnimation, DEFAULT_DURATION_MS, TICK_MS};
use crate::navbar::{navbar_shadow, NAVBAR_SELECTOR};
use crate::reveal::{
    RevealTracker, HIDDEN_CLASS, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
    VISIBLE_CLASS,
};
use crate::scroll::{anchor_target, ANCHOR_SELECTOR};

const TRACK_ATTR: &str = "data-effect-id";
const COUNTER_SELECTOR: &str = ".stat-number[data-target]";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    setup_reveal(&document)?;
    setup_counters(&window, &document)?;
    setup_smooth_scroll(&document)?;
    setup_navbar_shadow(&window, &document)?;

    web_sys::console::log_1(&"FarmLink Platform Initialized ✓".into());
    Ok(())
}

fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn effect_id(element: &Element) -> Option<u32> {
    element.get_attribute(TRACK_ATTR)?.parse().ok()
}

/// Builds an observer that calls `fire` once per element on first intersection.
fn one_shot_observer<F>(
    targets: &[Element],
    init: Option<&IntersectionObserverInit>,
    mut fire: F,
) -> Result<(), JsValue>
where
    F: FnMut(&Element) + 'static,
{
    let tracker = Rc::new(RefCell::new(RevealTracker::new()));

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
        let tracker = tracker.clone();
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = effect_id(&target) else {
                    continue;
                };
                if tracker
                    .borrow_mut()
                    .on_intersect(&id, entry.is_intersecting())
                {
                    fire(&target);
                    observer.unobserve(&target);
                }
            }
        }
    });

    let observer = match init {
        Some(init) => {
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init)?
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
    };
    callback.forget();

    for (id, element) in (0u32..).zip(targets) {
        element.set_attribute(TRACK_ATTR, &id.to_string())?;
        tracker.borrow_mut().observe(id);
        observer.observe(element);
    }

    Ok(())
}

fn setup_reveal(document: &Document) -> Result<(), JsValue> {
    let targets = elements(document, REVEAL_SELECTOR)?;
    for element in &targets {
        element.class_list().add_1(HIDDEN_CLASS)?;
    }

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);

    one_shot_observer(&targets, Some(&init), |element| {
        let _ = element.class_list().add_1(VISIBLE_CLASS);
    })
}

fn setup_counters(window: &Window, document: &Document) -> Result<(), JsValue> {
    let targets = elements(document, COUNTER_SELECTOR)?;
    let window = window.clone();

    one_shot_observer(&targets, None, move |element| {
        let target = element
            .get_attribute("data-target")
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(0);
        if let Err(err) = animate_counter(&window, element.clone(), target) {
            web_sys::console::error_2(&"counter animation failed:".into(), &err);
        }
    })
}

fn animate_counter(window: &Window, element: Element, target: u64) -> Result<(), JsValue> {
    let mut animation = CounterAnimation::new(target, DEFAULT_DURATION_MS);
    let handle = Rc::new(Cell::new(0));

    let tick = Closure::<dyn FnMut()>::new({
        let handle = handle.clone();
        let window = window.clone();
        move || match animation.tick() {
            Some(text) => {
                element.set_text_content(Some(&text));
                if animation.is_done() {
                    window.clear_interval_with_handle(handle.get());
                }
            }
            None => window.clear_interval_with_handle(handle.get()),
        }
    });

    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        TICK_MS as i32,
    )?;
    handle.set(id);
    tick.forget();

    Ok(())
}

fn setup_smooth_scroll(document: &Document) -> Result<(), JsValue> {
    for anchor in elements(document, ANCHOR_SELECTOR)? {
        let doc = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();

        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let Some(target) = anchor_target(&href).and_then(|id| doc.get_element_by_id(id))
            else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });

        anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    Ok(())
}

fn setup_navbar_shadow(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(navbar) = document
        .query_selector(NAVBAR_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let on_scroll = Closure::<dyn FnMut()>::new({
        let window = window.clone();
        move || {
            let offset = window.scroll_y().unwrap_or(0.0);
            let shadow = navbar_shadow(offset).unwrap_or("none");
            let _ = navbar.style().set_property("box-shadow", shadow);
        }
    });

    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    Ok(())
}
