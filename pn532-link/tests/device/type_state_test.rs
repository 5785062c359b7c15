#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use pn532_link::device::{Device, DeviceBuilder};
use pn532_link::protocol::{Command, Response};
use pn532_link::test_support;
use pn532_link::transport::MockTransport;
use pn532_link::Error;

#[test]
fn initialize_then_execute() -> Result<()> {
    common::helpers::init_logging();
    let firmware = common::fixtures::firmware_payload();
    let mut dev = test_support::initialized_mock_device(&[&firmware[..]])?;

    match dev.execute(Command::GetFirmwareVersion)? {
        Response::FirmwareVersion(fw) => assert_eq!(fw.to_string(), "PN532 v1.6 (support 0x07)"),
        other => panic!("unexpected response: {:?}", other),
    }
    Ok(())
}

#[test]
fn initialize_fails_on_application_error() {
    let mut mock = MockTransport::new();
    mock.push_ack();
    mock.push_read(common::helpers::ready_read(&common::fixtures::error_frame()));
    let res = Device::new(mock).initialize();
    assert!(matches!(res, Err(Error::ApplicationError)));
}

#[test]
fn builder_runs_initialization() -> Result<()> {
    let mut mock = MockTransport::new();
    test_support::seed_init(&mut mock)?;
    let mut dev = DeviceBuilder::new().with_transport(mock).build()?;
    assert_eq!(dev.cached_firmware().map(|fw| fw.version), Some(1));
    assert!(dev.channel_mut().transport().responses.is_empty());
    Ok(())
}

#[test]
fn listen_then_read_tag() -> Result<()> {
    let in_list = common::fixtures::in_list_payload();
    let mut dev = test_support::initialized_mock_device(&[&in_list[..]])?;
    dev.listen_for_tag()?;
    let target = dev.read_tag()?.expect("one target");
    assert_eq!(target.uid.to_string(), "deadbeef");
    Ok(())
}
