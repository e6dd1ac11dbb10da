use std::future::Future;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

/// Outcome of polling a [`ViewTask`]
#[derive(Debug, PartialEq)]
pub enum TaskPoll<R> {
    Pending,
    Ready(R),
    /// The task ended without producing a result (panicked or aborted)
    Lost,
}

/// A request running on the tokio runtime on behalf of one view.
///
/// The task is aborted when the handle is dropped, so a page that is left
/// mid-load never receives a late result.
pub struct ViewTask<R> {
    handle: JoinHandle<()>,
    result: oneshot::Receiver<R>,
}

impl<R: Send + 'static> ViewTask<R> {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = R> + Send + 'static,
    {
        let (tx, result) = oneshot::channel();
        let handle = tokio::spawn(async move {
            let output = future.await;
            // Receiver gone means the view was dropped; nothing to update
            let _ = tx.send(output);
        });

        Self { handle, result }
    }

    pub fn try_take(&mut self) -> TaskPoll<R> {
        match self.result.try_recv() {
            Ok(output) => TaskPoll::Ready(output),
            Err(TryRecvError::Empty) => TaskPoll::Pending,
            Err(TryRecvError::Closed) => TaskPoll::Lost,
        }
    }
}

impl<R> Drop for ViewTask<R> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_lost_when_task_panics() {
        let mut task: ViewTask<i32> = ViewTask::spawn(async {
            let missing: Option<i32> = None;
            missing.expect("boom")
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(task.try_take(), TaskPoll::Lost);
    }

    #[tokio::test]
    async fn test_try_take_is_pending_until_done() {
        let (tx, rx) = oneshot::channel::<()>();
        let mut task = ViewTask::spawn(async move {
            let _ = rx.await;
            "done"
        });

        assert_eq!(task.try_take(), TaskPoll::Pending);
        tx.send(()).unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(task.try_take(), TaskPoll::Ready("done"));
    }

    #[tokio::test]
    async fn test_drop_aborts_running_task() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let task = ViewTask::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });
        drop(task);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!finished.load(Ordering::SeqCst));
    }
}
