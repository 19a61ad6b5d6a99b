//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from
//! a queue of expectations instead of an actor. Use it to test orchestration that lives
//! in typed clients, such as a checkout that must call `BeginSubmit` before
//! `CompleteSubmit`, without spawning the actor under it.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | none, scripted answers | real store |
//! | Error injection | `return_err` | needs the right state |
//! | Use | logic around a client | the entity itself, whole system |
//!
//! Two styles are available:
//!
//! - **Scripted**: `MockClient::new()` + `expect_*().return_ok(..)` + `verify()`.
//!   Expectations are consumed in order; a request of another kind panics the mock task.
//! - **Inspecting**: [`create_mock_client`] + [`expect_create`] / [`expect_get`] /
//!   [`expect_action`] hand you the raw payload and the responder, so the test can assert
//!   on what was sent before answering.
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Food { id: u32, name: String }
//! #[derive(Debug)] struct FoodCreate;
//! #[derive(Debug)] struct FoodUpdate;
//! #[derive(Debug)] enum FoodAction {}
//! #[derive(Debug, thiserror::Error)] #[error("food error")] struct FoodError;
//!
//! #[async_trait]
//! impl ActorEntity for Food {
//!     type Id = u32; type Create = FoodCreate; type Update = FoodUpdate;
//!     type Action = FoodAction; type ActionResult = (); type Context = (); type Error = FoodError;
//!     fn from_create_params(id: u32, _: FoodCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: String::new() })
//!     }
//!     async fn on_update(&mut self, _: FoodUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: FoodAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Food>::new();
//!     mock.expect_list().return_ok(vec![Food { id: 4, name: "Grilled Salmon".into() }]);
//!     mock.expect_get(9).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.list().await.unwrap()[0].name, "Grilled Salmon");
//!     assert!(matches!(client.get(9).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// One scripted answer. Ids are recorded for `Debug` output only; matching is by kind.
enum Expectation<T: ActorEntity> {
    Create(Result<T::Id, FrameworkError>),
    Get(T::Id, Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
    Action(T::Id, Result<T::ActionResult, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn kind(&self) -> String {
        match self {
            Expectation::Create(_) => "Create".to_string(),
            Expectation::Get(id, _) => format!("Get({id})"),
            Expectation::List(_) => "List".to_string(),
            Expectation::Update(id, _) => format!("Update({id})"),
            Expectation::Delete(id, _) => format!("Delete({id})"),
            Expectation::Action(id, _) => format!("Action({id})"),
        }
    }
}

/// A mock client with expectation tracking for fluent testing.
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
    /// Creates a new mock client with no expectations. Must run inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = queue.lock().unwrap().pop_front();
                answer(request, next);
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

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Expectation::Create)
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |r| Expectation::Get(id, r))
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |r| Expectation::Update(id, r))
    }

    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |r| Expectation::Delete(id, r))
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |r| Expectation::Action(id, r))
    }

    /// Panics if any scripted answer was never requested.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<String> = exps.iter().map(Expectation::kind).collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                exps.len(),
                pending
            );
        }
    }

    fn builder<R>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap: Box::new(wrap),
            expectations: self.expectations.clone(),
        }
    }
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
    fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
        let _ = respond_to.send(response);
    }

    match (request, expectation) {
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
            reply(respond_to, r)
        }
        (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(_, r))) => {
            reply(respond_to, r)
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List(r))) => reply(respond_to, r),
        (ResourceRequest::Update { respond_to, .. }, Some(Expectation::Update(_, r))) => {
            reply(respond_to, r)
        }
        (ResourceRequest::Delete { respond_to, .. }, Some(Expectation::Delete(_, r))) => {
            reply(respond_to, r)
        }
        (ResourceRequest::Action { respond_to, .. }, Some(Expectation::Action(_, r))) => {
            reply(respond_to, r)
        }
        (request, expectation) => panic!(
            "Unexpected {} request; next expectation was {:?}",
            request.label(),
            expectation.as_ref().map(Expectation::kind)
        ),
    }
}

/// Finishes an `expect_*` call with the answer the mock should give.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// INSPECTING HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
