//! Driving a step function once per frame until told to stop.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

pub trait Scheduler {
    /// Arrange for `frame` to run once, before the next repaint.
    fn request_frame(&self, frame: Box<dyn FnOnce()>);
}

/// Shared stop flag. Clones refer to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Run `step` now, then once per frame, until `token` is cancelled.
///
/// Each frame re-arms the next one, so a cancelled token stops the loop at the next frame boundary.
pub fn run(step: impl FnMut() + 'static, scheduler: impl Scheduler + 'static, token: CancelToken) {
    tick(Box::new(step), Rc::new(scheduler), token, 0)
}

fn tick(
    mut step: Box<dyn FnMut()>,
    scheduler: Rc<dyn Scheduler>,
    token: CancelToken,
    frame: u64,
) {
    if token.is_cancelled() {
        log::debug!("Animation stopped after {frame} frames.");
        return;
    }
    step();

    let next = scheduler.clone();
    scheduler.request_frame(Box::new(move || tick(step, next, token, frame + 1)));
}

/// A scheduler that only runs frames when asked to.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<Box<dyn FnOnce()>>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames requested but not yet run.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run up to `frames` queued frames, including any queued while doing so.
    /// Returns how many actually ran.
    pub fn pump(&self, frames: usize) -> usize {
        let mut ran = 0;
        while ran < frames {
            // Frames queue their successors, so the borrow must end before running one.
            let Some(frame) = self.queue.borrow_mut().pop_front() else {
                break;
            };
            frame();
            ran += 1;
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&self, frame: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(frame);
    }
}
