#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use pn532_link::protocol::commands::mifare_authenticate;
use pn532_link::protocol::{Command, Response};
use pn532_link::types::{KeySlot, SamMode, Uid};
use pn532_link::Error;

#[test]
fn sam_configuration_payload() {
    let cmd = Command::SamConfiguration {
        mode: SamMode::Normal,
        timeout: 0x14,
        use_irq: true,
    };
    assert_eq!(cmd.encode(), common::fixtures::sam_command_payload());
}

#[test]
fn in_list_response_decodes_target() -> Result<()> {
    let payload = common::fixtures::in_list_payload();
    match Response::decode(0x4A, &payload)? {
        Response::InListPassiveTarget(Some(target)) => {
            assert_eq!(target.sel_res, 0x08);
            assert_eq!(target.uid.as_bytes(), &common::fixtures::sample_uid()[..]);
        }
        other => panic!("unexpected response: {:?}", other),
    }
    Ok(())
}

#[test]
fn wrong_echo_is_rejected() {
    let payload = common::fixtures::firmware_payload();
    assert!(matches!(
        Response::decode(0x4A, &payload),
        Err(Error::UnexpectedResponse {
            expected: 0x4B,
            actual: 0x03
        })
    ));
}

#[test]
fn mifare_authenticate_exchange_payload() -> Result<()> {
    let uid = Uid::try_from(&common::fixtures::sample_uid()[..])?;
    let data = mifare_authenticate(4, KeySlot::A, &[0xFF; 6], &uid)?;
    let cmd = Command::InDataExchange {
        target: 1,
        data,
        response_len: 0,
    };
    assert_eq!(
        cmd.encode(),
        common::fixtures::bytes("40 01 60 04 ff ff ff ff ff ff de ad be ef")
    );
    Ok(())
}
