//! Navigation runtime
//!
//! Owns the activity stack and drives the cooperative loop. The host
//! pushes a root activity, then calls [`Runtime::run_once`] repeatedly;
//! each call polls the input device, forwards at most one event to the
//! top-of-stack activity, applies any navigation the callbacks
//! requested, and ticks the worker pool.
//!
//! Stack invariant: once the first activity has been pushed the stack is
//! never empty again; popping the last remaining activity is a no-op.

use alloc::boxed::Box;

use heapless::Vec;

use crate::activity::{Activity, Context, NavRequest};
use crate::bytestack::{ByteStack, ResultBytes};
use crate::input::{InputEvent, InputSource};
use crate::worker::WorkerPool;

/// Maximum navigation depth
pub const MAX_STACK_DEPTH: usize = 8;

/// Errors that can occur on host-initiated navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavError {
    /// The activity stack is already at `MAX_STACK_DEPTH`
    StackFull,
}

/// Binds one activity to its result-delivery metadata
///
/// Created when a navigation request is issued and destroyed when the
/// activity is popped, after its `on_destroy` has run.
pub struct ActivityExecution<D> {
    activity: Box<dyn Activity<D>>,
    result_expected: bool,
    result_key: i8,
}

impl<D> ActivityExecution<D> {
    /// Wrap an activity that does not report a result
    pub fn new(activity: Box<dyn Activity<D>>) -> Self {
        Self {
            activity,
            result_expected: false,
            result_key: 0,
        }
    }

    /// Wrap an activity whose dismissal delivers a result under `key`
    pub fn for_result(activity: Box<dyn Activity<D>>, key: i8) -> Self {
        Self {
            activity,
            result_expected: true,
            result_key: key,
        }
    }

    /// Whether a result is delivered to the activity underneath on pop
    pub fn result_expected(&self) -> bool {
        self.result_expected
    }

    /// Key under which the result is delivered
    pub fn result_key(&self) -> i8 {
        self.result_key
    }
}

/// The navigation runtime
///
/// Generic over the display handle `D` (owned and forwarded, never
/// inspected) and the input source `I`. Single-threaded and
/// non-preemptive: everything runs to completion inside
/// [`run_once`](Self::run_once) and the navigation entry points; no
/// callback may re-enter the runtime.
pub struct Runtime<D, I> {
    input: I,
    display: D,
    stack: Vec<ActivityExecution<D>, MAX_STACK_DEPTH>,
    result_bytes: ResultBytes,
    worker_pool: WorkerPool,
}

impl<D, I: InputSource> Runtime<D, I> {
    /// Create a runtime with an empty activity stack
    ///
    /// The stack stays empty only until the host pushes the root
    /// activity with [`start_activity`](Self::start_activity).
    pub fn new(input: I, display: D) -> Self {
        Self {
            input,
            display,
            stack: Vec::new(),
            result_bytes: ByteStack::new(),
            worker_pool: WorkerPool::new(),
        }
    }

    /// The display handle
    pub fn display(&mut self) -> &mut D {
        &mut self.display
    }

    /// The worker pool, for registering background workers
    pub fn worker_pool(&mut self) -> &mut WorkerPool {
        &mut self.worker_pool
    }

    /// Current navigation depth
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Run one cooperative loop iteration
    ///
    /// Polls the input source once, forwards the event (if any) to the
    /// top-of-stack activity, applies requested navigation, then ticks
    /// every worker once. Returning hands control back to the host's
    /// scheduler; the host calls this in a loop.
    pub fn run_once(&mut self) {
        if let Some(event) = self.input.poll() {
            let mut ctx = Context::new(&mut self.display);
            if let Some(top) = self.stack.last_mut() {
                match event {
                    InputEvent::Click => top.activity.on_click(&mut ctx),
                    InputEvent::LongClick => top.activity.on_long_click(&mut ctx),
                    InputEvent::Scroll(distance) => top.activity.on_scroll(&mut ctx, distance),
                }
            }
            let request = ctx.take_request();
            self.apply(request);
        }
        self.worker_pool.run_once();
    }

    /// Push `activity` onto the stack
    ///
    /// Pauses the current top (if any), then starts the new activity.
    pub fn start_activity(&mut self, activity: Box<dyn Activity<D>>) -> Result<(), NavError> {
        let follow_up = self.push_execution(ActivityExecution::new(activity))?;
        self.apply(follow_up);
        Ok(())
    }

    /// Push `activity`, expecting a result under `key` on its dismissal
    pub fn start_activity_for_result(
        &mut self,
        activity: Box<dyn Activity<D>>,
        key: i8,
    ) -> Result<(), NavError> {
        let follow_up = self.push_execution(ActivityExecution::for_result(activity, key))?;
        self.apply(follow_up);
        Ok(())
    }

    /// Pop the top activity
    ///
    /// A no-op if only the root activity remains; the root can never be
    /// dismissed.
    pub fn stop_activity(&mut self) {
        let follow_up = self.pop_execution();
        self.apply(follow_up);
    }

    /// Apply navigation requests until no callback issues a new one
    fn apply(&mut self, mut request: Option<NavRequest<D>>) {
        while let Some(current) = request.take() {
            request = match current {
                NavRequest::Push {
                    activity,
                    result_key,
                } => {
                    let execution = match result_key {
                        Some(key) => ActivityExecution::for_result(activity, key),
                        None => ActivityExecution::new(activity),
                    };
                    // A callback-initiated push past MAX_STACK_DEPTH is dropped
                    self.push_execution(execution).unwrap_or(None)
                }
                NavRequest::Pop => self.pop_execution(),
            };
        }
    }

    /// Push protocol: `on_pause(old top)` -> push -> `on_start(new top)`
    ///
    /// Returns the navigation request issued by the lifecycle callbacks,
    /// if any.
    fn push_execution(
        &mut self,
        execution: ActivityExecution<D>,
    ) -> Result<Option<NavRequest<D>>, NavError> {
        if self.stack.is_full() {
            return Err(NavError::StackFull);
        }

        let mut ctx = Context::new(&mut self.display);
        if let Some(top) = self.stack.last_mut() {
            top.activity.on_pause(&mut ctx);
        }
        if self.stack.push(execution).is_err() {
            // Unreachable: capacity was checked above
            return Err(NavError::StackFull);
        }
        if let Some(top) = self.stack.last_mut() {
            top.activity.on_start(&mut ctx);
        }
        Ok(ctx.take_request())
    }

    /// Pop protocol: `set_result(popped)` [if expected] ->
    /// `on_destroy(popped)` -> drop -> `on_activity_result(new top)`
    /// [if expected] -> `on_resume(new top)`
    ///
    /// Returns the navigation request issued by the lifecycle callbacks,
    /// if any. A no-op returning `None` when the stack holds at most one
    /// activity.
    fn pop_execution(&mut self) -> Option<NavRequest<D>> {
        if self.stack.len() < 2 {
            return None;
        }
        let mut popped = self.stack.pop()?;

        // Serialize the result while the popped activity's state is
        // still intact, from a freshly reset channel
        if popped.result_expected {
            self.result_bytes.reset();
            popped.activity.set_result(&mut self.result_bytes);
        }
        popped.activity.on_destroy();
        let result_expected = popped.result_expected;
        let result_key = popped.result_key;
        drop(popped);

        let mut ctx = Context::new(&mut self.display);
        if let Some(top) = self.stack.last_mut() {
            if result_expected {
                top.activity
                    .on_activity_result(&mut ctx, &mut self.result_bytes, result_key);
            }
            top.activity.on_resume(&mut ctx);
        }
        ctx.take_request()
    }
}
