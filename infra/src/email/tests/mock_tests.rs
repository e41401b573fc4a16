//! Unit tests for the mock email delivery channel

use wf_core::DeliveryChannel;

use crate::email::MockEmailDelivery;

#[tokio::test]
async fn test_mock_send_success() {
    let delivery = MockEmailDelivery::new();
    let result = delivery.send_code("user@example.com", "123456").await;

    assert!(result.is_ok());
    assert_eq!(delivery.sent_count(), 1);
}

#[tokio::test]
async fn test_mock_records_last_delivery() {
    let delivery = MockEmailDelivery::new();
    let _ = delivery.send_code("user@example.com", "654321").await;

    let last = delivery.last_sent().await;
    assert_eq!(
        last,
        Some(("user@example.com".to_string(), "654321".to_string()))
    );
}

#[tokio::test]
async fn test_mock_simulate_failure() {
    let delivery = MockEmailDelivery::new();
    delivery.set_simulate_failure(true);

    let result = delivery.send_code("user@example.com", "123456").await;
    assert!(result.is_err());
    assert_eq!(delivery.sent_count(), 0);

    delivery.set_simulate_failure(false);
    let result = delivery.send_code("user@example.com", "123456").await;
    assert!(result.is_ok());
    assert_eq!(delivery.sent_count(), 1);
}

#[tokio::test]
async fn test_mock_counter() {
    let delivery = MockEmailDelivery::new();

    for i in 1..=3 {
        let _ = delivery.send_code("user@example.com", "123456").await;
        assert_eq!(delivery.sent_count(), i);
    }

    delivery.reset_counter();
    assert_eq!(delivery.sent_count(), 0);
}

#[test]
fn test_mock_channel_name() {
    let delivery = MockEmailDelivery::new();
    assert_eq!(delivery.channel_name(), "MockEmail");
}
