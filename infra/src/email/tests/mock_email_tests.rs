use cva_core::Notifier;

use crate::email::{MockEmailNotifier, OUTBOX_CAPACITY};

#[tokio::test]
async fn test_records_last_code_per_recipient() {
    let notifier = MockEmailNotifier::new();

    notifier.send("a@x.com", "111111").await.unwrap();
    notifier.send("b@x.com", "222222").await.unwrap();
    notifier.send("a@x.com", "333333").await.unwrap();

    assert_eq!(notifier.last_code_for("a@x.com").as_deref(), Some("333333"));
    assert_eq!(notifier.last_code_for("c@x.com"), None);
    assert_eq!(notifier.sent_count(), 3);
}

#[tokio::test]
async fn test_simulated_failure() {
    let notifier = MockEmailNotifier::new();
    notifier.set_should_fail(true);

    assert!(notifier.send("a@x.com", "111111").await.is_err());
    assert_eq!(notifier.sent_count(), 0);
}

#[tokio::test]
async fn test_outbox_is_bounded() {
    let notifier = MockEmailNotifier::new();

    for i in 0..10_000 {
        notifier
            .send(&format!("user{}@x.com", i), &format!("{:06}", i))
            .await
            .unwrap();
    }

    assert_eq!(notifier.sent_count(), 10_000);
    assert_eq!(notifier.outbox_len(), OUTBOX_CAPACITY);
    assert_eq!(notifier.last_code_for("user9999@x.com").as_deref(), Some("009999"));
    assert_eq!(notifier.last_code_for("user0@x.com"), None);
}

#[tokio::test]
async fn test_console_output_still_records() {
    let notifier = MockEmailNotifier::with_console_output(true);

    notifier.send("a@x.com", "123456").await.unwrap();

    assert_eq!(notifier.last_code_for("a@x.com").as_deref(), Some("123456"));
}
