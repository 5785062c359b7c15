#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use anyhow::Result;
use pn532_link::channel::CommandChannel;
use pn532_link::config::{LinkConfig, RetryPolicy};
use pn532_link::constants::{ACK_FRAME, TFI_HOST_TO_PN532};
use pn532_link::link::CancelToken;
use pn532_link::protocol::Frame;
use pn532_link::test_support;
use pn532_link::transport::MockTransport;
use pn532_link::Error;

#[test]
fn firmware_exchange_on_the_wire() -> Result<()> {
    common::helpers::init_logging();
    let mock = common::helpers::acked_response(&common::fixtures::firmware_payload());
    let mut ch = CommandChannel::new(mock);

    let data = ch.exchange(&[0x02], 5)?;
    assert_eq!(data, common::fixtures::firmware_payload());

    let mock = ch.into_inner();
    assert_eq!(
        mock.sent,
        vec![common::fixtures::firmware_command_frame(), ACK_FRAME.to_vec()]
    );
    // handshake read, then the response read
    assert_eq!(mock.read_sizes, vec![7, 13]);
    Ok(())
}

#[test]
fn busy_chip_is_read_again() -> Result<()> {
    let mut mock = MockTransport::new();
    mock.push_busy();
    mock.push_busy();
    mock.push_frame(&[0x15])?;
    let mut ch = CommandChannel::new(mock);

    assert_eq!(ch.read(1)?, vec![0x15]);
    assert_eq!(ch.transport().read_sizes.len(), 3);
    Ok(())
}

#[test]
fn nack_after_write_is_reported() {
    let mut mock = MockTransport::new();
    mock.push_nack();
    let mut ch = CommandChannel::new(mock);

    match ch.write(&[0x02]) {
        Err(Error::WriteNotAcknowledged { received }) => {
            assert_eq!(received, [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00]);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn silent_chip_times_out() {
    let mut mock = MockTransport::new();
    mock.script_ready(&[false; 64]);
    let config = LinkConfig::new().with_retry(RetryPolicy {
        max_ready_polls: None,
        timeout: Some(Duration::from_millis(5)),
        ready_poll_interval: Duration::from_millis(1),
        ..RetryPolicy::default()
    });
    let mut ch = CommandChannel::with_config(mock, config);
    assert!(matches!(ch.read(5), Err(Error::Timeout)));
}

#[test]
fn cancel_token_from_another_thread() {
    let mut mock = MockTransport::new();
    mock.script_ready(&[false; 100_000]);
    let token = CancelToken::new();
    let config = LinkConfig::new().with_retry(RetryPolicy {
        ready_poll_interval: Duration::from_micros(50),
        ..RetryPolicy::unbounded()
    });
    let mut ch = CommandChannel::with_config(mock, config).with_cancel_token(token.clone());

    let canceller = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(2));
        token.cancel();
    });
    assert!(matches!(ch.read(5), Err(Error::Cancelled)));
    canceller.join().unwrap();
}

#[test]
fn sam_exchange_ends_with_ack() -> Result<()> {
    let mock = test_support::mock_with_exchanges(&[&[0x15][..]])?;
    let mut ch = CommandChannel::new(mock);
    let payload = common::fixtures::sam_command_payload();
    assert_eq!(ch.exchange(&payload, 1)?, vec![0x15]);

    let mock = ch.transport_mut();
    assert_eq!(mock.pop_sent(), Some(ACK_FRAME.to_vec()));
    assert_eq!(mock.pop_sent(), Some(Frame::encode(&payload, TFI_HOST_TO_PN532)?));
    assert_eq!(mock.pop_sent(), None);
    Ok(())
}
