//! Activity-stack navigation runtime for small embedded displays
//!
//! This crate contains the board-agnostic navigation core:
//!
//! - [`Activity`] capability trait (lifecycle, input and result callbacks)
//! - [`Runtime`] owning the activity stack and the cooperative loop
//! - [`ByteStack`] result channel for passing typed values across a pop
//! - [`Worker`]/[`WorkerPool`] cooperative background tasks
//! - [`InputSource`] boundary for the physical input device
//!
//! The runtime is single-threaded and non-preemptive: the host calls
//! [`Runtime::run_once`] in a loop, and every activity callback and
//! worker tick runs to completion inside that call.
//!
//! Activities are boxed trait objects, so the crate requires `alloc`;
//! bare-metal hosts provide a global allocator (e.g. `embedded-alloc`).

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod activity;
pub mod bytestack;
pub mod input;
pub mod runtime;
pub mod worker;

pub use activity::{Activity, ActivityMeta, Context, NavRequest, MAX_TITLE_LEN};
pub use bytestack::{ByteStack, ByteStackError, ResultBytes, StackValue, RESULT_CAPACITY};
pub use input::{InputEvent, InputSource};
pub use runtime::{ActivityExecution, NavError, Runtime, MAX_STACK_DEPTH};
pub use worker::{PoolError, Worker, WorkerPool, WorkerState, MAX_WORKERS};
