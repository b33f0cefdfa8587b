//! Drives typewriter jobs on browser timers.
//!
//! Job bookkeeping lives in a page-wide [`AnimationRegistry`]; the loading
//! overlay reads it to decide when the text has finished.

use crate::dom::{set_timeout, window_document};
use sanae_core::typewriter::{AnimationRegistry, JobId, PrintJob, Submitted};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

thread_local! {
    static REGISTRY: RefCell<AnimationRegistry> = RefCell::new(AnimationRegistry::new());
}

/// Reveal `text` into the first element matching `selector`, one token every
/// `interval_ms`. With `chain`, wait for earlier jobs on the same selector.
#[wasm_bindgen(js_name = delayPrint)]
pub fn delay_print(selector: &str, text: &str, interval_ms: u32, chain: Option<bool>) {
    submit(selector, text, interval_ms, chain.unwrap_or(false));
}

#[wasm_bindgen(js_name = activeAnimationCount)]
pub fn active_animation_count() -> u32 {
    REGISTRY.with(|r| r.borrow().active_count() as u32)
}

pub fn is_idle() -> bool {
    REGISTRY.with(|r| r.borrow().is_idle())
}

pub fn submit(selector: &str, text: &str, interval_ms: u32, chain: bool) -> JobId {
    let submitted = REGISTRY.with(|r| r.borrow_mut().submit(selector, text, interval_ms, chain));
    match submitted {
        Submitted::Start(job) => {
            let id = job.id;
            run(job);
            id
        }
        Submitted::Queued(id) => id,
    }
}

fn run(job: PrintJob) {
    let target = window_document().and_then(|d| d.query_selector(&job.target).ok().flatten());
    match target {
        Some(el) => step(el, Rc::new(job), 0),
        None => {
            log::warn!("[typewriter] no element matches {}", job.target);
            finish(job.id);
        }
    }
}

fn step(el: web::Element, job: Rc<PrintJob>, index: usize) {
    if index >= job.tokens.len() {
        finish(job.id);
        return;
    }
    set_timeout(job.interval_ms, move || {
        if let Err(e) = el.insert_adjacent_html("beforeend", &job.tokens[index]) {
            log::warn!("[typewriter] write to {} failed: {:?}", job.target, e);
        }
        step(el, job, index + 1);
    });
}

fn finish(id: JobId) {
    let next = REGISTRY.with(|r| r.borrow_mut().complete(id));
    if let Some(job) = next {
        run(job);
    }
}
