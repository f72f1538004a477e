//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`RecordClient<T>`] whose requests are answered
//! from a queue of expectations instead of a running store. Use it to unit test the
//! logic that sits *around* a client (domain clients, the session controller) without
//! touching the filesystem.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast, but stores may hit disk |
//! | **State** | None (expectations only) | Real records |
//! | **Error Injection** | Easy (`return_err`) | Needs a broken file or permissions |
//!
//! ```rust,ignore
//! let mut mock = MockClient::<CredentialStore>::new();
//! mock.expect_action().return_ok(CredentialActionResult::Verify(true));
//!
//! let client = CredentialClient::new(mock.client());
//! assert!(client.verify("mgr", "pw123").await?);
//! mock.verify();
//! ```
//!
//! For step-by-step assertions on the request payload itself, use
//! [`create_mock_client`] together with [`expect_append`], [`expect_remove`] or
//! [`expect_action`].

use crate::client::RecordClient;
use crate::entity::RecordEntity;
use crate::error::FrameworkError;
use crate::message::RecordRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to send back.
enum Expectation<T: RecordEntity> {
    Append {
        response: Result<(), FrameworkError>,
    },
    List {
        response: Result<Vec<T::Record>, FrameworkError>,
    },
    Remove {
        response: Result<usize, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were declared. A request that does not
/// match the next expectation panics the background task, which the client then
/// observes as [`FrameworkError::ActorClosed`] or [`FrameworkError::ActorDropped`].
pub struct MockClient<T: RecordEntity> {
    client: RecordClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: RecordEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RecordEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RecordRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        RecordRequest::Append { respond_to, .. },
                        Some(Expectation::Append { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (RecordRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RecordRequest::Remove { respond_to, .. },
                        Some(Expectation::Remove { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        RecordRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: RecordClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> RecordClient<T> {
        self.client.clone()
    }

    /// Expects an `append` operation.
    pub fn expect_append(&mut self) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Append { response }
        })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T::Record>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::List { response }
        })
    }

    /// Expects a `remove` operation.
    pub fn expect_remove(&mut self) -> ExpectationBuilder<T, usize> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Remove { response }
        })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Action { response }
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectations poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder that records the response for one expected request.
pub struct ExpectationBuilder<T: RecordEntity, R> {
    expectations: Expectations<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: RecordEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back((self.wrap)(response));
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests off the receiver with the `expect_*`
/// helpers, asserts on their payloads and answers through the returned responder.
pub fn create_mock_client<T: RecordEntity>(
    buffer_size: usize,
) -> (RecordClient<T>, mpsc::Receiver<RecordRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RecordClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Append request.
pub async fn expect_append<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T::Record, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(RecordRequest::Append { record, respond_to }) => Some((record, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request.
pub async fn expect_list<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T::Record>, FrameworkError>>> {
    match receiver.recv().await {
        Some(RecordRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Remove request.
pub async fn expect_remove<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(T::Selector, oneshot::Sender<Result<usize, FrameworkError>>)> {
    match receiver.recv().await {
        Some(RecordRequest::Remove {
            selector,
            respond_to,
        }) => Some((selector, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request.
pub async fn expect_action<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<RecordRequest<T>>,
) -> Option<(
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(RecordRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}
