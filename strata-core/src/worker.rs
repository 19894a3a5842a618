//! Cooperative background workers
//!
//! A worker is ticked once per runtime loop iteration. Its state flag is
//! advisory: the pool ticks every registered worker regardless of state,
//! and any state-dependent behavior lives in the worker's own `tick`.

use alloc::rc::Rc;
use core::cell::RefCell;

use heapless::Vec;

/// Maximum number of workers in a pool
pub const MAX_WORKERS: usize = 8;

/// Errors that can occur when registering workers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PoolError {
    /// Pool already holds `MAX_WORKERS` workers
    Full,
}

/// Advisory worker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WorkerState {
    /// Worker is active
    Running,
    /// Worker is temporarily suspended
    Paused,
    /// Worker has finished; it is still ticked but should do nothing
    Terminated,
}

/// A cooperative background task
///
/// Concrete workers store their own [`WorkerState`] field and expose it
/// through [`state`](Self::state)/[`set_state`](Self::set_state); the
/// provided setters only update that flag.
pub trait Worker {
    /// Run one slice of work
    ///
    /// Called exactly once per runtime loop iteration for as long as the
    /// worker is registered, regardless of its state flag.
    fn tick(&mut self);

    /// Current advisory state
    fn state(&self) -> WorkerState;

    /// Overwrite the advisory state
    fn set_state(&mut self, state: WorkerState);

    /// Mark the worker as running
    fn start_worker(&mut self) {
        self.set_state(WorkerState::Running);
    }

    /// Mark the worker as paused
    fn pause_worker(&mut self) {
        self.set_state(WorkerState::Paused);
    }

    /// Mark the worker as terminated
    fn terminate_worker(&mut self) {
        self.set_state(WorkerState::Terminated);
    }
}

/// An explicit pool of shared worker handles
///
/// Owners register `Rc<RefCell<dyn Worker>>` handles and keep their own
/// clone to control the worker; the pool never drops a worker on its
/// own. [`run_once`](Self::run_once) ticks every registered worker once,
/// in registration order.
#[derive(Default)]
pub struct WorkerPool {
    workers: Vec<Rc<RefCell<dyn Worker>>, MAX_WORKERS>,
}

impl WorkerPool {
    /// Create an empty pool
    pub const fn new() -> Self {
        Self {
            workers: Vec::new(),
        }
    }

    /// Register a worker handle
    pub fn register(&mut self, worker: Rc<RefCell<dyn Worker>>) -> Result<(), PoolError> {
        self.workers.push(worker).map_err(|_| PoolError::Full)
    }

    /// Number of registered workers
    pub fn len(&self) -> usize {
        self.workers.len()
    }

    /// Returns true if no workers are registered
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    /// Tick every registered worker once, in registration order
    pub fn run_once(&mut self) {
        for worker in &self.workers {
            worker.borrow_mut().tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec as StdVec;

    struct CountingWorker {
        state: WorkerState,
        ticks: u32,
        id: u8,
        order: Rc<RefCell<StdVec<u8>>>,
    }

    impl CountingWorker {
        fn new(id: u8, order: Rc<RefCell<StdVec<u8>>>) -> Self {
            Self {
                state: WorkerState::Running,
                ticks: 0,
                id,
                order,
            }
        }
    }

    impl Worker for CountingWorker {
        fn tick(&mut self) {
            self.ticks += 1;
            self.order.borrow_mut().push(self.id);
        }

        fn state(&self) -> WorkerState {
            self.state
        }

        fn set_state(&mut self, state: WorkerState) {
            self.state = state;
        }
    }

    #[test]
    fn test_state_setters() {
        let order = Rc::new(RefCell::new(StdVec::new()));
        let mut worker = CountingWorker::new(0, order);

        worker.pause_worker();
        assert_eq!(worker.state(), WorkerState::Paused);
        worker.start_worker();
        assert_eq!(worker.state(), WorkerState::Running);
        worker.terminate_worker();
        assert_eq!(worker.state(), WorkerState::Terminated);
    }

    #[test]
    fn test_every_worker_ticked_regardless_of_state() {
        let order = Rc::new(RefCell::new(StdVec::new()));
        let running = Rc::new(RefCell::new(CountingWorker::new(1, order.clone())));
        let paused = Rc::new(RefCell::new(CountingWorker::new(2, order.clone())));
        paused.borrow_mut().pause_worker();
        let terminated = Rc::new(RefCell::new(CountingWorker::new(3, order.clone())));
        terminated.borrow_mut().terminate_worker();

        let mut pool = WorkerPool::new();
        pool.register(running.clone()).unwrap();
        pool.register(paused.clone()).unwrap();
        pool.register(terminated.clone()).unwrap();

        for _ in 0..5 {
            pool.run_once();
        }

        assert_eq!(running.borrow().ticks, 5);
        assert_eq!(paused.borrow().ticks, 5);
        assert_eq!(terminated.borrow().ticks, 5);

        // Registration order is preserved on every iteration
        let order = order.borrow();
        assert_eq!(&order[..3], &[1, 2, 3]);
        assert_eq!(&order[3..6], &[1, 2, 3]);
    }

    #[test]
    fn test_pool_capacity() {
        let order = Rc::new(RefCell::new(StdVec::new()));
        let mut pool = WorkerPool::new();
        for i in 0..MAX_WORKERS {
            let worker = Rc::new(RefCell::new(CountingWorker::new(i as u8, order.clone())));
            pool.register(worker).unwrap();
        }

        let extra = Rc::new(RefCell::new(CountingWorker::new(99, order)));
        assert_eq!(pool.register(extra), Err(PoolError::Full));
        assert_eq!(pool.len(), MAX_WORKERS);
    }

    #[test]
    fn test_ownership_stays_with_creator() {
        let order = Rc::new(RefCell::new(StdVec::new()));
        let worker = Rc::new(RefCell::new(CountingWorker::new(0, order)));

        {
            let mut pool = WorkerPool::new();
            pool.register(worker.clone()).unwrap();
            pool.run_once();
        } // pool dropped

        // The creator's handle is still alive and usable
        assert_eq!(worker.borrow().ticks, 1);
        worker.borrow_mut().terminate_worker();
        assert_eq!(worker.borrow().state(), WorkerState::Terminated);
    }
}
