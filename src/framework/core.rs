//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the actor system.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all resource types must implement.
//! - [`ResourceActor`]: The generic actor that manages an ordered collection of entities.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound).

use std::fmt::{Debug, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any resource entity must implement to be managed by [`ResourceActor`].
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our resource types (CartLine,
/// Favorite) must satisfy, we can write the `ResourceActor` logic *once* and reuse
/// it everywhere.
///
/// We use "Associated Types" (type Id, type CreateParams, etc.) to enforce type
/// safety. A `CartLine` entity requires a `CartLineCreate` payload, and you can't
/// accidentally send it a `FavoriteCreate` payload. The compiler prevents this
/// class of bugs entirely.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// It also defines a `Context` type, which is injected into every hook. This allows
/// "Late Binding" of dependencies (passing channels or clients to `run()` instead
/// of `new()`).
///
/// # Provided Methods (Hooks)
/// The lifecycle hooks have default implementations that do nothing:
/// - [`ActorEntity::on_create`]
/// - [`ActorEntity::on_delete`]
/// - [`ActorEntity::on_last_removed`]
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., String, Uuid, u64).
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type CreateParams: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `AdjustQuantity`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Called after a delete that left the store empty.
    ///
    /// The store-went-empty transition is a first-class event: consumers must be
    /// able to react exactly once per transition rather than re-deriving it from
    /// the store length on every read. The hook runs on the entity that was just
    /// removed, so it can carry identifying details into the notification.
    async fn on_last_removed(&self, _ctx: &Self::Context) {}

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one kind of resource (the [`ActorEntity`]). Instead of
/// defining ad-hoc messages for every operation, we standardize around a small
/// set of lifecycle operations:
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::CreateParams`] to initialize
///   a new resource at the *end* of the store (insertion order is part of the
///   contract — a cart is an ordered sequence, not a set).
/// - **Get (Read)**: Fetches the current state of one resource by ID.
/// - **List (Read)**: Fetches all resources in insertion order.
/// - **Delete**: Lifecycle end. Removes the resource.
/// - **Action**: Extensibility. Executes a custom [`ActorEntity::Action`].
///
/// The enum is generic over `T: ActorEntity` and uses the trait's associated
/// types, so you can't send a "CartLine Create" payload to a "Favorite" actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages an ordered collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially* in a loop, so
/// we don't need `Mutex` or `RwLock` for the `store`. Rapid repeated requests
/// (e.g., a user hammering "add to cart") are serialized by the channel; each
/// operation is atomic with respect to the loop.
///
/// **Ordered store**:
/// The store is a `Vec<(Id, T)>` rather than a map. The collections we manage
/// here are small, user-visible sequences where insertion order matters (cart
/// lines render in the order they were added), so a linear scan per operation
/// is the right trade.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<(T::Id, T)>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn find(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|(entry_id, _)| entry_id == id)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows
    /// entities to access external dependencies (like event channels) that were
    /// created *after* the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "CartLine" instead of "cafe_cart::model::cart::CartLine")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                                continue;
                            }
                            self.store.push((id.clone(), item));
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.find(&id).map(|idx| self.store[idx].1.clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items = self.store.iter().map(|(_, item)| item.clone()).collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(idx) = self.find(&id) {
                        if let Err(e) = self.store[idx].1.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        let (_, removed) = self.store.remove(idx);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        if self.store.is_empty() {
                            // Fires at most once per one-to-zero transition: a repeat
                            // delete for the same id is NotFound and never reaches here.
                            info!(entity_type, %id, "Store emptied");
                            removed.on_last_removed(&context).await;
                        }
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(idx) = self.find(&id) {
                        let result = self.store[idx]
                            .1
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::Custom);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Sticker {
        id: String,
        label: String,
        count: u32,
    }

    #[derive(Debug)]
    struct StickerCreate {
        label: String,
    }

    // Custom Actions
    #[derive(Debug)]
    enum StickerAction {
        Bump(u32),
    }

    #[async_trait]
    impl ActorEntity for Sticker {
        type Id = String;
        type CreateParams = StickerCreate;
        type Action = StickerAction;
        type ActionResult = u32;
        type Context = UnboundedSender<String>;

        fn from_create_params(id: String, params: StickerCreate) -> Result<Self, String> {
            Ok(Self {
                id,
                label: params.label,
                count: 0,
            })
        }

        async fn on_last_removed(&self, ctx: &Self::Context) {
            let _ = ctx.send(self.id.clone());
        }

        async fn handle_action(
            &mut self,
            action: StickerAction,
            _ctx: &Self::Context,
        ) -> Result<u32, String> {
            match action {
                StickerAction::Bump(by) => {
                    self.count += by;
                    Ok(self.count)
                }
            }
        }
    }

    fn spawn_sticker_actor() -> (
        ResourceClient<Sticker>,
        tokio::sync::mpsc::UnboundedReceiver<String>,
    ) {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("sticker_{}", id)
        };
        let (actor, client) = ResourceActor::new(10, next_id);
        let (tx, rx) = unbounded_channel();
        tokio::spawn(actor.run(tx));
        (client, rx)
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let (client, _rx) = spawn_sticker_actor();

        for label in ["first", "second", "third"] {
            client
                .create(StickerCreate { label: label.into() })
                .await
                .unwrap();
        }

        let all = client.list().await.unwrap();
        let labels: Vec<_> = all.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);

        // Duplicate payloads still append distinct entries.
        client
            .create(StickerCreate { label: "first".into() })
            .await
            .unwrap();
        assert_eq!(client.list().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_actions_and_unknown_ids() {
        let (client, _rx) = spawn_sticker_actor();

        let id = client
            .create(StickerCreate { label: "a".into() })
            .await
            .unwrap();

        let count = client
            .perform_action(id.clone(), StickerAction::Bump(3))
            .await
            .unwrap();
        assert_eq!(count, 3);

        let err = client
            .perform_action("sticker_999".to_string(), StickerAction::Bump(1))
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("sticker_999".to_string()));
    }

    #[tokio::test]
    async fn test_last_removed_hook_fires_once() {
        let (client, mut rx) = spawn_sticker_actor();

        let a = client
            .create(StickerCreate { label: "a".into() })
            .await
            .unwrap();
        let b = client
            .create(StickerCreate { label: "b".into() })
            .await
            .unwrap();

        // Removing down to one entry: no notification yet.
        client.delete(a).await.unwrap();
        assert!(rx.try_recv().is_err());

        // Removing the last entry notifies with the removed id.
        client.delete(b.clone()).await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), b.clone());

        // Deleting again is NotFound and produces no second notification.
        let err = client.delete(b).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(_)));
        assert!(rx.try_recv().is_err());
    }
}
