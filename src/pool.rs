//! A fixed-size pool of worker threads.
//!
//! The pool starts `max_concurrent` workers up front, so at most that many
//! tasks ever run at once. Submission blocks while the backlog is full
//! (one queued task per worker). Each task's outcome comes back through a
//! [`TaskHandle`], and a task that panics is reported there as
//! [`TristateError::TaskFailed`] while its worker carries on.

use std::collections::VecDeque;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{panic_message, Result, TristateError};
use crate::settings::Settings;

type Job = Box<dyn FnOnce() + Send + 'static>;

struct State {
    queue: VecDeque<Job>,
    shutdown: bool,
    live: usize,
}

struct Shared {
    state: Mutex<State>,
    // signalled when work is queued or the pool shuts down
    work: Condvar,
    // signalled when a queued task is picked up
    space: Condvar,
    // signalled when the last worker exits
    done: Condvar,
    backlog: usize,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct TaskHandle<T> {
    outcome: Receiver<std::result::Result<T, String>>,
}

impl<T> TaskHandle<T> {
    /// Waits for the task to finish.
    pub fn join(self) -> Result<T> {
        match self.outcome.recv() {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(reason)) => Err(TristateError::TaskFailed(reason)),
            Err(_) => Err(TristateError::TaskFailed("task was discarded before it ran".to_string())),
        }
    }
}

pub struct WorkerPool {
    shared: Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
    max_concurrent: usize,
    grace: Duration,
}

impl WorkerPool {
    pub fn new(max_concurrent: usize) -> Result<Self> {
        if max_concurrent == 0 {
            return Err(TristateError::Config(
                "a worker pool needs at least one worker".to_string(),
            ));
        }
        let shared = Arc::new(Shared {
            state: Mutex::new(State {
                queue: VecDeque::new(),
                shutdown: false,
                live: max_concurrent,
            }),
            work: Condvar::new(),
            space: Condvar::new(),
            done: Condvar::new(),
            backlog: max_concurrent,
        });
        let mut pool = Self {
            shared: Arc::clone(&shared),
            workers: Vec::with_capacity(max_concurrent),
            max_concurrent,
            grace: Duration::from_millis(Settings::default().shutdown_grace_ms),
        };
        for n in 0..max_concurrent {
            let shared = Arc::clone(&shared);
            let spawned = thread::Builder::new()
                .name(format!("tristate-worker-{}", n))
                .spawn(move || work(shared));
            match spawned {
                Ok(handle) => pool.workers.push(handle),
                Err(e) => {
                    // workers that never started must not be waited for
                    pool.shared.lock().live -= max_concurrent - n;
                    return Err(TristateError::Config(format!("cannot start worker: {}", e)));
                }
            }
        }
        info!(workers = max_concurrent, "worker pool started");
        Ok(pool)
    }
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut pool = Self::new(settings.worker_pool_size)?;
        pool.grace = Duration::from_millis(settings.shutdown_grace_ms);
        Ok(pool)
    }
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }
    /// Queues `task`, waiting while the backlog is full.
    pub fn submit<T, F>(&self, task: F) -> Result<TaskHandle<T>>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (sender, outcome) = channel();
        let job: Job = Box::new(move || {
            let result = catch_unwind(AssertUnwindSafe(task)).map_err(|payload| {
                let reason = panic_message(payload);
                warn!(%reason, "task panicked");
                reason
            });
            // the handle may have been dropped already
            let _ = sender.send(result);
        });
        let mut state = self.shared.lock();
        while !state.shutdown && state.queue.len() >= self.shared.backlog {
            state = self
                .shared
                .space
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        if state.shutdown {
            return Err(TristateError::PoolClosed);
        }
        state.queue.push_back(job);
        drop(state);
        self.shared.work.notify_one();
        Ok(TaskHandle { outcome })
    }
    /// Stops accepting tasks; queued ones still run.
    pub fn shutdown(&self) {
        let mut state = self.shared.lock();
        if !state.shutdown {
            state.shutdown = true;
            info!(queued = state.queue.len(), "worker pool shutting down");
        }
        drop(state);
        self.shared.work.notify_all();
        self.shared.space.notify_all();
    }
    /// Stops accepting tasks and discards the queued ones, returning how many
    /// were dropped. Running tasks are left to finish.
    pub fn shutdown_now(&self) -> usize {
        let mut state = self.shared.lock();
        state.shutdown = true;
        let discarded = state.queue.len();
        state.queue.clear();
        drop(state);
        if discarded > 0 {
            warn!(discarded, "worker pool stopped with tasks still queued");
        }
        self.shared.work.notify_all();
        self.shared.space.notify_all();
        discarded
    }
    /// Waits up to `timeout` for every worker to exit after a shutdown.
    pub fn await_termination(&self, timeout: Duration) -> bool {
        let state = self.shared.lock();
        let (state, _) = self
            .shared
            .done
            .wait_timeout_while(state, timeout, |s| s.live > 0)
            .unwrap_or_else(PoisonError::into_inner);
        state.live == 0
    }
    pub fn is_shutdown(&self) -> bool {
        self.shared.lock().shutdown
    }
    pub fn is_terminated(&self) -> bool {
        let state = self.shared.lock();
        state.shutdown && state.live == 0
    }
    /// Shuts down, gives queued work the grace period, then joins the workers.
    /// Calling it again does nothing.
    pub fn close(&mut self) {
        if self.workers.is_empty() {
            return;
        }
        let started = Instant::now();
        self.shutdown();
        if !self.await_termination(self.grace) {
            self.shutdown_now();
        }
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                warn!("worker thread ended abnormally");
            }
        }
        info!(ms = started.elapsed().as_millis() as u64, "worker pool closed");
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.close();
    }
}

fn work(shared: Arc<Shared>) {
    let mut state = shared.lock();
    loop {
        if let Some(job) = state.queue.pop_front() {
            drop(state);
            shared.space.notify_one();
            job();
            state = shared.lock();
        } else if state.shutdown {
            break;
        } else {
            state = shared.work.wait(state).unwrap_or_else(PoisonError::into_inner);
        }
    }
    state.live -= 1;
    let last = state.live == 0;
    drop(state);
    if last {
        debug!("last worker exited");
        shared.done.notify_all();
    }
}
