#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use pn532_link::test_support;
use pn532_link::types::KeySlot;
use pn532_link::Error;

#[test]
fn authenticate_and_read_block() -> Result<()> {
    common::helpers::init_logging();
    let mut block_answer = vec![0x41, 0x00];
    block_answer.extend_from_slice(&[0xA5; 16]);
    let mut dev = test_support::initialized_mock_device(&[
        &common::fixtures::in_list_payload()[..],
        &[0x41, 0x00][..],
        &block_answer[..],
    ])?;

    let target = dev.list_passive_target()?.expect("one target");
    dev.authenticate_mifare(target.target, 4, KeySlot::A, &[0xFF; 6], &target.uid)?;
    assert_eq!(dev.read_mifare_block(target.target, 4)?, [0xA5; 16]);
    Ok(())
}

#[test]
fn rejected_key_is_command_status() -> Result<()> {
    let mut dev = test_support::initialized_mock_device(&[
        &common::fixtures::in_list_payload()[..],
        &[0x41, 0x14][..],
    ])?;
    let target = dev.list_passive_target()?.expect("one target");
    let res = dev.authenticate_mifare(target.target, 4, KeySlot::B, &[0x00; 6], &target.uid);
    assert!(matches!(res, Err(Error::CommandStatus { status: 0x14 })));
    Ok(())
}
