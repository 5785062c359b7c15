#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use pn532_link::config::{LinkConfig, RetryPolicy};
use pn532_link::constants::{ACK_FRAME, BUFFER_LEN, NACK_FRAME};
use pn532_link::link::Link;
use pn532_link::transport::MockTransport;
use pn532_link::Error;

fn bounded() -> LinkConfig {
    LinkConfig::new().with_retry(RetryPolicy {
        max_ready_polls: Some(16),
        max_busy_reads: 4,
        max_nack_retries: 2,
        ready_poll_interval: std::time::Duration::ZERO,
        ..RetryPolicy::default()
    })
}

#[test]
fn valid_response_is_acked() -> Result<()> {
    common::helpers::init_logging();
    let mut mock = MockTransport::new();
    mock.push_read(common::helpers::ready_read(
        &common::fixtures::firmware_response_frame(),
    ));
    let config = bounded();
    let mut buf = [0u8; BUFFER_LEN];
    let mut out = [0u8; 5];

    let n = Link::new(&mut mock, &mut buf, &config, None).receive(&mut out)?;
    assert_eq!(&out[..n], &common::fixtures::firmware_payload()[..]);
    assert_eq!(mock.sent, vec![ACK_FRAME.to_vec()]);
    // capacity + 7 frame bytes + status byte
    assert_eq!(mock.read_sizes, vec![13]);
    Ok(())
}

#[test]
fn corrupted_then_clean_response() -> Result<()> {
    common::helpers::init_logging();
    let mut corrupted = common::fixtures::firmware_response_frame();
    corrupted[7] ^= 0x40;
    let mut mock = MockTransport::new();
    mock.push_read(common::helpers::ready_read(&corrupted));
    mock.push_read(common::helpers::ready_read(
        &common::fixtures::firmware_response_frame(),
    ));
    let config = bounded();
    let mut buf = [0u8; BUFFER_LEN];
    let mut out = [0u8; 5];

    let mut link = Link::new(&mut mock, &mut buf, &config, None);
    assert_eq!(link.receive(&mut out)?, 5);
    assert_eq!(link.nacks_sent(), 1);
    assert_eq!(mock.sent, vec![NACK_FRAME.to_vec(), ACK_FRAME.to_vec()]);
    Ok(())
}

#[test]
fn application_error_sends_no_handshake() {
    let mut mock = MockTransport::new();
    mock.push_read(common::helpers::ready_read(&common::fixtures::error_frame()));
    let config = bounded();
    let mut buf = [0u8; BUFFER_LEN];
    let mut out = [0u8; 5];

    let res = Link::new(&mut mock, &mut buf, &config, None).receive(&mut out);
    assert!(matches!(res, Err(Error::ApplicationError)));
    assert!(mock.sent.is_empty());
}

#[test]
fn noise_without_start_code_is_desynchronized() {
    let mut mock = MockTransport::new();
    mock.push_read(vec![0x01; 32]);
    let config = bounded();
    let mut buf = [0u8; BUFFER_LEN];
    let mut out = [0u8; 5];

    let res = Link::new(&mut mock, &mut buf, &config, None).receive(&mut out);
    assert!(matches!(res, Err(Error::Desynchronized { .. })));
    assert!(mock.sent.is_empty());
}

#[test]
fn oversized_response_is_a_size_mismatch() {
    let mut mock = MockTransport::new();
    mock.push_frame(&[0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, 0x04]).unwrap();
    let config = bounded();
    let mut buf = [0u8; BUFFER_LEN];
    let mut out = [0u8; 2];

    let res = Link::new(&mut mock, &mut buf, &config, None).receive(&mut out);
    assert!(matches!(
        res,
        Err(Error::CapacityExceeded {
            capacity: 2,
            actual: 7
        })
    ));
}
