// helpers.rs: logging and mock setup shared by the integration tests

use pn532_link::transport::MockTransport;

/// Route `log` output through the test harness; repeated calls are fine.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Raw I2C read of a ready chip carrying `frame`.
pub fn ready_read(frame: &[u8]) -> Vec<u8> {
    let mut raw = vec![0x01];
    raw.extend_from_slice(frame);
    raw
}

/// Mock that ACKs the next command and answers with `data`.
pub fn acked_response(data: &[u8]) -> MockTransport {
    let mut mock = MockTransport::new();
    mock.push_ack();
    mock.push_frame(data).unwrap();
    mock
}
