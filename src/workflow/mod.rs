//! Workflow module - Request/response lifecycles for upload and forecast

mod forecast;
mod upload;

pub use forecast::ForecastWorkflow;
pub use upload::UploadWorkflow;

use crate::error::WorkflowError;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
#[cfg(test)]
use std::time::Duration;

/// Lifecycle of one workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// The button that triggers a workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerControl {
    pub enabled: bool,
    pub label: &'static str,
    default_label: &'static str,
    busy_label: &'static str,
}

impl TriggerControl {
    pub fn new(default_label: &'static str, busy_label: &'static str) -> Self {
        Self {
            enabled: true,
            label: default_label,
            default_label,
            busy_label,
        }
    }

    fn set_busy(&mut self) {
        self.enabled = false;
        self.label = self.busy_label;
    }

    fn restore(&mut self) {
        self.enabled = true;
        self.label = self.default_label;
    }
}

/// Background request runner shared by both workflows.
///
/// Every request gets its own thread and reports on one shared channel, so
/// overlapping requests are applied in the order their responses arrive.
pub struct Workflow<T> {
    state: WorkflowState,
    control: TriggerControl,
    tx: Sender<Result<T, WorkflowError>>,
    rx: Receiver<Result<T, WorkflowError>>,
    in_flight: usize,
}

impl<T: Send + 'static> Workflow<T> {
    pub fn new(control: TriggerControl) -> Self {
        let (tx, rx) = channel();
        Self {
            state: WorkflowState::Idle,
            control,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    pub fn control(&self) -> &TriggerControl {
        &self.control
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Enter Loading and run `job` on a background thread.
    pub fn begin<F>(&mut self, job: F)
    where
        F: FnOnce() -> Result<T, WorkflowError> + Send + 'static,
    {
        self.state = WorkflowState::Loading;
        self.control.set_busy();
        self.in_flight += 1;

        let tx = self.tx.clone();
        thread::spawn(move || {
            // Receiver lives as long as the workflow; a send error means the window closed.
            let _ = tx.send(job());
        });
    }

    /// Take the next finished response, if any, without blocking.
    pub fn try_finish(&mut self) -> Option<Result<T, WorkflowError>> {
        let result = self.rx.try_recv().ok()?;
        Some(self.settle(result))
    }

    /// Block up to `timeout` for the next finished response.
    #[cfg(test)]
    pub fn wait_finish(&mut self, timeout: Duration) -> Option<Result<T, WorkflowError>> {
        let result = self.rx.recv_timeout(timeout).ok()?;
        Some(self.settle(result))
    }

    fn settle(&mut self, result: Result<T, WorkflowError>) -> Result<T, WorkflowError> {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.state = if result.is_ok() {
            WorkflowState::Success
        } else {
            WorkflowState::Error
        };
        self.control.restore();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_secs(5);

    fn workflow() -> Workflow<u32> {
        Workflow::new(TriggerControl::new("Go", "Going..."))
    }

    #[test]
    fn starts_idle_and_enabled() {
        let wf = workflow();
        assert_eq!(wf.state(), WorkflowState::Idle);
        assert!(wf.control().enabled);
        assert_eq!(wf.control().label, "Go");
    }

    #[test]
    fn loading_disables_control_until_settled() {
        let (release_tx, release_rx) = channel::<()>();
        let mut wf = workflow();
        wf.begin(move || {
            release_rx.recv().ok();
            Ok(7)
        });

        assert_eq!(wf.state(), WorkflowState::Loading);
        assert!(!wf.control().enabled);
        assert_eq!(wf.control().label, "Going...");
        assert!(wf.try_finish().is_none());

        release_tx.send(()).unwrap();
        assert_eq!(wf.wait_finish(WAIT), Some(Ok(7)));
        assert_eq!(wf.state(), WorkflowState::Success);
        assert!(wf.control().enabled);
        assert_eq!(wf.control().label, "Go");
        assert_eq!(wf.in_flight(), 0);
    }

    #[test]
    fn failure_restores_control() {
        let mut wf = workflow();
        wf.begin(|| Err(WorkflowError::Transport("offline".into())));

        let result = wf.wait_finish(WAIT).unwrap();
        assert!(result.is_err());
        assert_eq!(wf.state(), WorkflowState::Error);
        assert!(wf.control().enabled);
    }

    #[test]
    fn overlapping_requests_settle_in_arrival_order() {
        let (release_tx, release_rx) = channel::<()>();
        let mut wf = workflow();
        wf.begin(move || {
            release_rx.recv().ok();
            Ok(1)
        });
        wf.begin(|| Ok(2));
        assert_eq!(wf.in_flight(), 2);

        assert_eq!(wf.wait_finish(WAIT), Some(Ok(2)));
        release_tx.send(()).unwrap();
        assert_eq!(wf.wait_finish(WAIT), Some(Ok(1)));
        assert_eq!(wf.in_flight(), 0);
    }
}
