use cafe_cart::cart_actor::{CartContext, CartEvent};
use cafe_cart::clients::CartClient;
use cafe_cart::framework::mock::MockClient;
use cafe_cart::framework::FrameworkError;
use cafe_cart::model::{CartLine, CartLineCreate};
use rust_decimal_macros::dec;
use tokio::sync::mpsc;

fn spawn_cart() -> (
    CartClient,
    mpsc::UnboundedReceiver<CartEvent>,
    tokio::task::JoinHandle<()>,
) {
    let (cart_actor, cart_client) = cafe_cart::cart_actor::new();
    let (events, event_rx) = mpsc::unbounded_channel();
    let handle = tokio::spawn(cart_actor.run(CartContext { events }));
    (cart_client, event_rx, handle)
}

fn line_for(name: &str, price: rust_decimal::Decimal) -> CartLineCreate {
    CartLineCreate {
        item_id: 1,
        name: name.to_string(),
        unit_price: price,
        customizations: vec![],
    }
}

/// Real cart actor: repeated adds for the same item append duplicate lines in
/// tap order, they are never merged.
#[tokio::test]
async fn test_repeated_adds_append_duplicate_lines() {
    let (client, _events, handle) = spawn_cart();

    let first = client
        .add_line(line_for("Caramel Macchiato", dec!(5.50)))
        .await
        .unwrap();
    let second = client
        .add_line(line_for("Caramel Macchiato", dec!(5.50)))
        .await
        .unwrap();
    assert_ne!(first, second);

    let lines = client.lines().await.unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].id, first);
    assert_eq!(lines[1].id, second);
    assert!(lines.iter().all(|l| l.quantity == 1));

    drop(client);
    handle.await.unwrap();
}

/// Quantity adjustments are floor-clamped at 1: a decrement on a
/// single-quantity line is a no-op, not a removal.
#[tokio::test]
async fn test_quantity_floor_clamp() {
    let (client, _events, handle) = spawn_cart();

    let id = client
        .add_line(line_for("Flat White", dec!(4.95)))
        .await
        .unwrap();

    assert_eq!(
        client.adjust_quantity(id.clone(), 2).await.unwrap(),
        Some(3)
    );
    assert_eq!(
        client.adjust_quantity(id.clone(), -1).await.unwrap(),
        Some(2)
    );
    // Large negative deltas bottom out at 1.
    assert_eq!(
        client.adjust_quantity(id.clone(), -1000).await.unwrap(),
        Some(1)
    );
    assert_eq!(client.adjust_quantity(id, -1).await.unwrap(), Some(1));

    drop(client);
    handle.await.unwrap();
}

/// An extreme positive delta saturates at u32::MAX instead of panicking the
/// actor; the cart keeps serving requests afterwards.
#[tokio::test]
async fn test_extreme_delta_does_not_kill_the_actor() {
    let (client, _events, handle) = spawn_cart();

    let id = client
        .add_line(line_for("Red Eye", dec!(4.75)))
        .await
        .unwrap();

    let quantity = client.adjust_quantity(id.clone(), i64::MAX).await.unwrap();
    assert_eq!(quantity, Some(u32::MAX));

    // The actor is still alive and the line is still adjustable.
    let quantity = client.adjust_quantity(id, i64::MIN).await.unwrap();
    assert_eq!(quantity, Some(1));
    assert_eq!(client.lines().await.unwrap().len(), 1);

    drop(client);
    handle.await.unwrap();
}

/// Operations on unknown line ids are silent no-ops at the client edge.
#[tokio::test]
async fn test_unknown_ids_are_silent_noops() {
    let (client, _events, handle) = spawn_cart();

    let adjusted = client
        .adjust_quantity("line_999".to_string(), 1)
        .await
        .unwrap();
    assert_eq!(adjusted, None);

    let removed = client.remove_line("line_999".to_string()).await.unwrap();
    assert!(!removed);

    drop(client);
    handle.await.unwrap();
}

/// The empty-cart event fires exactly once per one-to-zero transition, and a
/// repeat removal of the same line neither fails loudly nor re-fires it.
#[tokio::test]
async fn test_emptied_event_fires_exactly_once() {
    let (client, mut events, handle) = spawn_cart();

    let first = client
        .add_line(line_for("Iced Mocha", dec!(5.75)))
        .await
        .unwrap();
    let last = client
        .add_line(line_for("Cortado", dec!(4.25)))
        .await
        .unwrap();

    // Down to one line: no event yet.
    assert!(client.remove_line(first).await.unwrap());
    assert!(events.try_recv().is_err());

    // Removing the final line publishes the transition with the line's id.
    assert!(client.remove_line(last.clone()).await.unwrap());
    assert_eq!(
        events.recv().await.unwrap(),
        CartEvent::Emptied {
            last_line_id: last.clone()
        }
    );

    // The line is gone, so this is a no-op and the event does not repeat.
    assert!(!client.remove_line(last).await.unwrap());
    assert!(events.try_recv().is_err());

    drop(client);
    handle.await.unwrap();
}

/// Adding to an emptied cart and emptying it again produces a second event:
/// once per transition, not once per session.
#[tokio::test]
async fn test_emptied_event_fires_per_transition() {
    let (client, mut events, handle) = spawn_cart();

    let id = client
        .add_line(line_for("Doppio", dec!(4.25)))
        .await
        .unwrap();
    client.remove_line(id).await.unwrap();
    assert!(matches!(
        events.recv().await.unwrap(),
        CartEvent::Emptied { .. }
    ));

    let id = client
        .add_line(line_for("Doppio", dec!(4.25)))
        .await
        .unwrap();
    client.remove_line(id).await.unwrap();
    assert!(matches!(
        events.recv().await.unwrap(),
        CartEvent::Emptied { .. }
    ));

    drop(client);
    handle.await.unwrap();
}

/// Client test with a mocked actor: the framework's NotFound errors are
/// absorbed into the no-op return values, other errors surface.
///
/// Pattern 2: Client + Mock
/// - Real CartClient (tests the error-mapping logic)
/// - Mocked actor channel (no real cart actor)
#[tokio::test]
async fn test_cart_client_absorbs_not_found() {
    let mut mock = MockClient::<CartLine>::new();
    mock.expect_action("line_1".to_string())
        .return_err(FrameworkError::NotFound("line_1".to_string()));
    mock.expect_delete("line_1".to_string())
        .return_err(FrameworkError::NotFound("line_1".to_string()));
    mock.expect_delete("line_2".to_string())
        .return_err(FrameworkError::Custom("boom".to_string()));

    let client = CartClient::new(mock.client());

    let adjusted = client.adjust_quantity("line_1".to_string(), 1).await;
    assert_eq!(adjusted.unwrap(), None);

    let removed = client.remove_line("line_1".to_string()).await;
    assert!(!removed.unwrap());

    // Non-NotFound failures are real errors.
    let result = client.remove_line("line_2".to_string()).await;
    assert!(result.is_err());

    mock.verify();
}
