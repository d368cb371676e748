//! Engine on a background thread
//!
//! Requests are queued on one channel and served strictly one at a time;
//! progress, status and results come back on another. The TUI polls the
//! response side between frames so the interface keeps drawing while the
//! matrix builds.

use std::io;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use super::config::EngineConfig;
use super::engine::Engine;
use super::entropy::Ranking;
use super::error::EngineError;
use super::progress::{BuildProgress, ProgressReporter};
use super::strategy::SearchMode;
use crate::core::Pattern;

/// Work for the engine thread
#[derive(Debug, Clone)]
pub enum Request {
    Init {
        solutions: Vec<String>,
        dictionary: Vec<String>,
        config: EngineConfig,
    },
    Filter {
        guess: String,
        pattern: Pattern,
        current: Vec<usize>,
    },
    FindBest {
        possible: Vec<usize>,
        mode: SearchMode,
    },
}

/// Message from the engine thread
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Matrix build progress during `Init`
    Progress(BuildProgress),
    /// `Init` finished; filter and rank requests are now served
    Ready,
    Filtered(Vec<usize>),
    /// Percent complete of a large ranking pass
    ComputeProgress(f64),
    BestCandidates(Ranking),
    /// Advisory text
    Status(String),
    /// The request failed; the worker keeps serving
    Error(EngineError),
}

impl Response {
    /// Final answer to a request, as opposed to a progress or status event
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(
            self,
            Self::Ready | Self::Filtered(_) | Self::BestCandidates(_) | Self::Error(_)
        )
    }
}

/// Forwards engine progress over the response channel
struct ChannelReporter<'a> {
    tx: &'a Sender<Response>,
}

impl ProgressReporter for ChannelReporter<'_> {
    fn matrix_progress(&mut self, progress: BuildProgress) {
        let _ = self.tx.send(Response::Progress(progress));
    }

    fn compute_progress(&mut self, percent: f64) {
        let _ = self.tx.send(Response::ComputeProgress(percent));
    }

    fn status(&mut self, message: &str) {
        let _ = self.tx.send(Response::Status(message.to_string()));
    }
}

/// State owned by the engine thread
struct WorkerState {
    engine: Option<Engine>,
    tx: Sender<Response>,
}

impl WorkerState {
    fn run(mut self, requests: &Receiver<Request>) {
        // Ends when every request sender is dropped
        for request in requests {
            let response = match request {
                Request::Init {
                    solutions,
                    dictionary,
                    config,
                } => self.handle_init(&solutions, &dictionary, config),
                Request::Filter {
                    guess,
                    pattern,
                    current,
                } => self.handle_filter(&guess, pattern, &current),
                Request::FindBest { possible, mode } => self.handle_find_best(&possible, mode),
            };

            let response = response.unwrap_or_else(Response::Error);
            if self.tx.send(response).is_err() {
                break;
            }
        }
        log::debug!("engine worker stopped");
    }

    fn handle_init(
        &mut self,
        solutions: &[String],
        dictionary: &[String],
        config: EngineConfig,
    ) -> Result<Response, EngineError> {
        if self.engine.is_some() {
            return Err(EngineError::AlreadyInitialized);
        }
        let mut reporter = ChannelReporter { tx: &self.tx };
        self.engine = Some(Engine::init(solutions, dictionary, config, &mut reporter)?);
        Ok(Response::Ready)
    }

    fn handle_filter(
        &self,
        guess: &str,
        pattern: Pattern,
        current: &[usize],
    ) -> Result<Response, EngineError> {
        let engine = self.engine.as_ref().ok_or(EngineError::NotInitialized)?;
        engine.filter(guess, pattern, current).map(Response::Filtered)
    }

    fn handle_find_best(
        &self,
        possible: &[usize],
        mode: SearchMode,
    ) -> Result<Response, EngineError> {
        let engine = self.engine.as_ref().ok_or(EngineError::NotInitialized)?;
        let mut reporter = ChannelReporter { tx: &self.tx };
        engine
            .find_best(possible, mode, &mut reporter)
            .map(Response::BestCandidates)
    }
}

/// Handle to the engine thread
///
/// Dropping the handle closes the request channel and joins the thread once
/// the in-flight request finishes.
pub struct Worker {
    requests: Option<Sender<Request>>,
    responses: Receiver<Response>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Start the engine thread
    ///
    /// # Errors
    /// Fails if the OS refuses to create the thread
    pub fn spawn() -> io::Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<Request>();
        let (response_tx, response_rx) = mpsc::channel::<Response>();

        let state = WorkerState {
            engine: None,
            tx: response_tx,
        };
        let handle = thread::Builder::new()
            .name("engine-worker".to_string())
            .spawn(move || state.run(&request_rx))?;

        Ok(Self {
            requests: Some(request_tx),
            responses: response_rx,
            handle: Some(handle),
        })
    }

    /// Queue a request
    ///
    /// # Errors
    /// [`EngineError::WorkerDisconnected`] if the thread has exited
    pub fn send(&self, request: Request) -> Result<(), EngineError> {
        self.requests
            .as_ref()
            .ok_or(EngineError::WorkerDisconnected)?
            .send(request)
            .map_err(|_| EngineError::WorkerDisconnected)
    }

    /// Queue matrix construction; answered by progress events then `Ready`
    ///
    /// # Errors
    /// [`EngineError::WorkerDisconnected`] if the thread has exited
    pub fn init(
        &self,
        solutions: Vec<String>,
        dictionary: Vec<String>,
        config: EngineConfig,
    ) -> Result<(), EngineError> {
        self.send(Request::Init {
            solutions,
            dictionary,
            config,
        })
    }

    /// Queue a filter; answered by `Filtered`
    ///
    /// # Errors
    /// [`EngineError::WorkerDisconnected`] if the thread has exited
    pub fn filter(
        &self,
        guess: impl Into<String>,
        pattern: Pattern,
        current: Vec<usize>,
    ) -> Result<(), EngineError> {
        self.send(Request::Filter {
            guess: guess.into(),
            pattern,
            current,
        })
    }

    /// Queue a ranking pass; answered by progress events then `BestCandidates`
    ///
    /// # Errors
    /// [`EngineError::WorkerDisconnected`] if the thread has exited
    pub fn find_best(&self, possible: Vec<usize>, mode: SearchMode) -> Result<(), EngineError> {
        self.send(Request::FindBest { possible, mode })
    }

    /// Next response without blocking, `None` if nothing is waiting
    ///
    /// # Errors
    /// [`EngineError::WorkerDisconnected`] if the thread has exited
    pub fn try_recv(&self) -> Result<Option<Response>, EngineError> {
        match self.responses.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(EngineError::WorkerDisconnected),
        }
    }

    /// Block for the next response
    ///
    /// # Errors
    /// [`EngineError::WorkerDisconnected`] if the thread has exited
    pub fn recv(&self) -> Result<Response, EngineError> {
        self.responses
            .recv()
            .map_err(|_| EngineError::WorkerDisconnected)
    }

    /// Block until the current request's final response
    ///
    /// Progress and status events are passed to `on_event` on the way.
    /// An `Error` response is returned as `Err`.
    ///
    /// # Errors
    /// The engine's error for the request, or `WorkerDisconnected`
    pub fn wait(&self, mut on_event: impl FnMut(&Response)) -> Result<Response, EngineError> {
        loop {
            match self.recv()? {
                Response::Error(err) => return Err(err),
                response if response.is_final() => return Ok(response),
                event => on_event(&event),
            }
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.requests.take();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::error!("engine worker panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn requests_before_init_fail() {
        let worker = Worker::spawn().unwrap();

        worker.filter("crane", Pattern::NONE, vec![0]).unwrap();
        assert_eq!(worker.wait(|_| {}), Err(EngineError::NotInitialized));

        worker.find_best(vec![0], SearchMode::Greedy).unwrap();
        assert_eq!(worker.wait(|_| {}), Err(EngineError::NotInitialized));
    }

    #[test]
    fn init_streams_progress_then_ready() {
        let worker = Worker::spawn().unwrap();
        worker
            .init(
                strings(&["irate", "crate"]),
                strings(&["crane", "irate", "crate"]),
                EngineConfig::default(),
            )
            .unwrap();

        let mut progress = Vec::new();
        let done = worker
            .wait(|event| {
                if let Response::Progress(p) = event {
                    progress.push(*p);
                }
            })
            .unwrap();

        assert_eq!(done, Response::Ready);
        assert_eq!(progress.last().map(|p| p.current), Some(3));
    }

    #[test]
    fn second_init_rejected_and_worker_survives() {
        let worker = Worker::spawn().unwrap();
        let init = || {
            worker.init(
                strings(&["irate"]),
                strings(&["irate"]),
                EngineConfig::default(),
            )
        };

        init().unwrap();
        assert_eq!(worker.wait(|_| {}), Ok(Response::Ready));
        init().unwrap();
        assert_eq!(worker.wait(|_| {}), Err(EngineError::AlreadyInitialized));

        worker.find_best(vec![0], SearchMode::Strategic).unwrap();
        assert!(matches!(
            worker.wait(|_| {}),
            Ok(Response::BestCandidates(r)) if r.candidates.len() == 1
        ));
    }

    #[test]
    fn malformed_init_reports_error() {
        let worker = Worker::spawn().unwrap();
        worker
            .init(strings(&["toolong"]), strings(&[]), EngineConfig::default())
            .unwrap();
        assert!(matches!(
            worker.wait(|_| {}),
            Err(EngineError::MalformedWord { index: 0, .. })
        ));

        // Still uninitialized afterwards
        worker.filter("irate", Pattern::NONE, vec![]).unwrap();
        assert_eq!(worker.wait(|_| {}), Err(EngineError::NotInitialized));
    }

    #[test]
    fn filter_after_ready() {
        let worker = Worker::spawn().unwrap();
        worker
            .init(
                strings(&["irate", "crate", "grate"]),
                strings(&["crane", "irate", "crate", "grate"]),
                EngineConfig::default(),
            )
            .unwrap();
        worker.wait(|_| {}).unwrap();

        worker.filter("irate", Pattern::PERFECT, vec![0, 1, 2]).unwrap();
        assert_eq!(worker.wait(|_| {}), Ok(Response::Filtered(vec![0])));
    }
}
