//! Periodic directory refresh

use super::service::EmployeeDirectory;
use crate::core::models::{PageRequest, Role, ViewModel};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Keeps a requester's view of one directory page fresh
///
/// The first snapshot is built immediately, then once per interval. A failed
/// rebuild keeps the previous snapshot. Dropping the refresher stops the task.
pub struct DirectoryRefresher {
    receiver: watch::Receiver<Option<Arc<ViewModel>>>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl DirectoryRefresher {
    /// Spawn a refresher using the directory's configured interval
    pub fn spawn(directory: EmployeeDirectory, requester: Role, request: PageRequest) -> Self {
        let interval = directory.config().refresh_interval();
        Self::spawn_with_interval(directory, requester, request, interval)
    }

    pub fn spawn_with_interval(
        directory: EmployeeDirectory,
        requester: Role,
        request: PageRequest,
        interval: Duration,
    ) -> Self {
        let (sender, receiver) = watch::channel(None);
        let (shutdown, mut shutdown_rx) = oneshot::channel();

        info!(
            "Starting directory refresh for {} every {:?}",
            requester, interval
        );

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        match directory.view_page(requester, request).await {
                            Ok(view) => {
                                debug!("Refreshed directory view for {}", requester);
                                if sender.send(Some(Arc::new(view))).is_err() {
                                    break;
                                }
                            }
                            Err(e) => warn!("Directory refresh for {} failed: {}", requester, e),
                        }
                    }
                }
            }

            debug!("Directory refresh for {} stopped", requester);
        });

        Self {
            receiver,
            shutdown: Some(shutdown),
            handle: Some(handle),
        }
    }

    /// Receiver notified on every new snapshot
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<ViewModel>>> {
        self.receiver.clone()
    }

    /// Most recent snapshot, if one has been built
    pub fn latest(&self) -> Option<Arc<ViewModel>> {
        self.receiver.borrow().clone()
    }

    /// Stop the refresh task and wait for it to finish
    pub async fn shutdown(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for DirectoryRefresher {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
