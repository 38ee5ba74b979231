//! # Mock Framework
//!
//! Utilities for testing code that talks to an actor without spawning the real one.
//!
//! Two styles are available:
//!
//! - **Scripted** ([`MockClient`]): queue the answers up front, hand out the client, then
//!   [`MockClient::verify`] that every queued answer was consumed. Best when the code under
//!   test is itself an actor hook (the order actor calling the product actor).
//! - **Receiver** ([`create_mock_client`] plus [`expect_get`], [`expect_action`], …): the test
//!   receives each request, inspects its payload and answers it by hand. Best when the
//!   payload a client sends is what is being tested.
//!
//! ## Simulating failures
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Bin { id: u32 }
//! #[derive(Debug)] struct BinCreate;
//! #[derive(Debug)] struct BinUpdate;
//! #[derive(Debug)] enum BinAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct BinError;
//!
//! #[async_trait]
//! impl ActorEntity for Bin {
//!     type Id = u32; type Create = BinCreate; type Update = BinUpdate;
//!     type Action = BinAction; type ActionResult = (); type Context = (); type Error = BinError;
//!     fn assign_id(seq: u32, _: &BinCreate) -> u32 { seq }
//!     fn from_create_params(id: u32, _: BinCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: BinUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: BinAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Bin>::new();
//!     let client = mock.client();
//!
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An answer queued on a [`MockClient`], consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were queued, and each request's key
/// must equal the queued key; anything else panics inside the mock task, which then shows
/// up as `ActorDropped` on the caller's side.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "delete called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<'_, T> {
        GetExpectationBuilder { mock: self, id }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<'_, T> {
        ListExpectationBuilder { mock: self }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<'_, T> {
        CreateExpectationBuilder { mock: self }
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<'_, T> {
        UpdateExpectationBuilder { mock: self, id }
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<'_, T> {
        DeleteExpectationBuilder { mock: self, id }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<'_, T> {
        ActionExpectationBuilder { mock: self, id }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
    id: T::Id,
}

impl<T: ActorEntity> GetExpectationBuilder<'_, T> {
    pub fn return_ok(self, value: Option<T>) {
        self.mock.push(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<'_, T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.mock.push(Expectation::List { response: Ok(items) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::List {
            response: Err(error),
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<'_, T> {
    pub fn return_ok(self, id: T::Id) {
        self.mock.push(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
    id: T::Id,
}

impl<T: ActorEntity> UpdateExpectationBuilder<'_, T> {
    pub fn return_ok(self, updated: T) {
        self.mock.push(Expectation::Update {
            id: self.id,
            response: Ok(updated),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Update {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
    id: T::Id,
}

impl<T: ActorEntity> DeleteExpectationBuilder<'_, T> {
    pub fn return_ok(self) {
        self.mock.push(Expectation::Delete {
            id: self.id,
            response: Ok(()),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Delete {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<'a, T: ActorEntity> {
    mock: &'a MockClient<T>,
    id: T::Id,
}

impl<T: ActorEntity> ActionExpectationBuilder<'_, T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.mock.push(Expectation::Action {
            id: self.id,
            response: Ok(result),
        });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.mock.push(Expectation::Action {
            id: self.id,
            response: Err(error),
        });
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests land on the returned receiver.
///
/// The test plays the actor: it pulls each request with one of the `expect_*` helpers,
/// asserts on the payload and answers through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Pallet {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct PalletCreate {
        label: String,
    }

    #[derive(Debug)]
    struct PalletUpdate;

    #[derive(Debug)]
    enum PalletAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Pallet error")]
    struct PalletError;

    #[async_trait]
    impl ActorEntity for Pallet {
        type Id = u32;
        type Create = PalletCreate;
        type Update = PalletUpdate;
        type Action = PalletAction;
        type ActionResult = ();
        type Context = ();
        type Error = PalletError;

        fn assign_id(seq: u32, _params: &PalletCreate) -> u32 {
            seq
        }

        fn from_create_params(id: u32, params: PalletCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _update: PalletUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            _action: PalletAction,
            _ctx: &(),
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn sample(id: u32, label: &str) -> Pallet {
        Pallet {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Pallet>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(PalletCreate {
                    label: "bolts".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.label, "bolts");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(1)));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Pallet>::new();

        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(sample(1, "bolts")));
        mock.expect_list()
            .return_ok(vec![sample(1, "bolts"), sample(2, "nuts")]);
        mock.expect_delete(2).return_err(FrameworkError::NotFound("2".to_string()));

        let client = mock.client();

        let id = client
            .create(PalletCreate {
                label: "bolts".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched, Some(sample(1, "bolts")));

        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 2);

        let deleted = client.delete(2).await;
        assert!(matches!(deleted, Err(FrameworkError::NotFound(id)) if id == "2"));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_fails_on_unused_expectation() {
        let mut mock = MockClient::<Pallet>::new();
        mock.expect_get(7).return_ok(None);
        mock.verify();
    }
}
