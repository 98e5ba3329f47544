//! Worker launch and join.
//!
//! Spawns a fixed number of worker threads running the identical task,
//! then blocks the calling thread until every worker has finished. The
//! workers share nothing but the output sink; interleaving of their
//! output lines is up to the scheduler.

use std::io::{self, Write};
use std::thread;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::worker;

/// Number of worker threads the launcher starts.
pub const WORKER_COUNT: usize = 2;

/// Run the worker task on [`WORKER_COUNT`] threads against process
/// stdout and wait for all of them.
pub fn launch() -> Result<()> {
    launch_to(io::stdout)
}

/// Sink-generic form of [`launch`]: `make_sink` produces one sink per
/// worker. Returns only after every worker that was started has
/// completed, on the error paths too.
///
/// Spawn and write failures propagate as errors; a worker panic is
/// surfaced at join time. If a later spawn fails, workers already
/// started are still joined before the spawn error is returned.
pub fn launch_to<W, F>(make_sink: F) -> Result<()>
where
    W: Write + Send + 'static,
    F: Fn() -> W,
{
    let mut handles = Vec::with_capacity(WORKER_COUNT);
    for id in 0..WORKER_COUNT {
        let mut sink = make_sink();
        let spawned = thread::Builder::new()
            .name(format!("worker-{id}"))
            .spawn(move || worker::run(&mut sink));
        match spawned {
            Ok(handle) => {
                debug!("spawned worker thread {id}");
                handles.push(handle);
            }
            Err(err) => {
                // Workers already running must still be waited on; the
                // spawn error stays the one reported.
                let _ = join_workers(handles);
                return Err(err).with_context(|| format!("failed to spawn worker thread {id}"));
            }
        }
    }

    join_workers(handles)
}

/// Join every handle, even when an earlier worker failed or panicked.
/// The first failure wins; later ones are dropped after their threads
/// have been joined.
fn join_workers(handles: Vec<thread::JoinHandle<Result<()>>>) -> Result<()> {
    let mut first_failure = None;
    for (id, handle) in handles.into_iter().enumerate() {
        let outcome = match handle.join() {
            Ok(result) => result.with_context(|| format!("worker thread {id} failed")),
            Err(_) => Err(anyhow!("worker thread {id} panicked")),
        };
        match outcome {
            Ok(()) => debug!("joined worker thread {id}"),
            Err(err) => {
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            }
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Shared in-memory sink; each write call appends atomically.
    #[derive(Clone)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_emits_one_line_per_worker() {
        let buf = Arc::new(Mutex::new(Vec::new()));
        let sink = SharedSink(buf.clone());
        launch_to(|| sink.clone()).unwrap();

        let data = buf.lock().unwrap();
        let text = String::from_utf8(data.clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // Both workers emit the same text, so checking content needs no
        // assumption about which thread got scheduled first.
        assert_eq!(lines.len(), WORKER_COUNT);
        for line in lines {
            assert_eq!(line, worker::WORKER_MESSAGE);
        }
    }

    #[test]
    fn test_returns_only_after_all_workers_finish() {
        #[derive(Clone)]
        struct CountingSink(Arc<AtomicUsize>);

        impl Write for CountingSink {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let completed = Arc::new(AtomicUsize::new(0));
        let sink = CountingSink(completed.clone());
        launch_to(|| sink.clone()).unwrap();

        // Every worker writes exactly once, so the counter proves both
        // finished before launch_to returned.
        assert_eq!(completed.load(Ordering::SeqCst), WORKER_COUNT);
    }

    #[test]
    fn test_join_waits_for_remaining_workers_after_failure() {
        use std::time::Duration;

        let completed = Arc::new(AtomicUsize::new(0));
        let slow_completed = completed.clone();

        let failing = thread::Builder::new()
            .spawn(|| -> Result<()> { Err(anyhow!("sink closed")) })
            .unwrap();
        let slow = thread::Builder::new()
            .spawn(move || -> Result<()> {
                thread::sleep(Duration::from_millis(50));
                slow_completed.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .unwrap();

        let err = join_workers(vec![failing, slow]).unwrap_err();
        assert!(err.to_string().contains("worker thread 0"));
        // The slow worker must have been joined before the error came
        // back, not left running.
        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sink_failure_propagates() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = launch_to(|| FailingSink).unwrap_err();
        assert!(err.to_string().contains("worker thread"));
    }
}
