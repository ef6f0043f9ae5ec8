//! Custom assertion macros

/// Assert the status of a `TestResponse`, printing the body on failure
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        assert_eq!(
            response.status, $status,
            "unexpected status, body: {}",
            response.body
        );
    }};
}

/// Assert that no change event is waiting on a receiver
#[macro_export]
macro_rules! assert_no_event {
    ($receiver:expr) => {
        match $receiver.try_recv() {
            Err(tokio::sync::broadcast::error::TryRecvError::Empty) => {}
            other => panic!("Expected no event, got {:?}", other),
        }
    };
}
