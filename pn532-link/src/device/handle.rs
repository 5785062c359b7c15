// pn532-link-rs/pn532-link/src/device/handle.rs

//! `Device` and its initialization states.

use std::marker::PhantomData;

use log::{debug, info, warn};

use crate::channel::CommandChannel;
use crate::config::LinkConfig;
use crate::constants::{BRTY_ISO14443A, MIFARE_BLOCK_LEN, MIFARE_DEFAULT_KEY};
use crate::link::CancelToken;
use crate::protocol::commands::{mifare_authenticate, mifare_read};
use crate::protocol::responses::exchange::STATUS_AUTH_FAILED;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::types::{FirmwareVersion, KeySlot, SamMode, TargetInfo, Uid};
use crate::{Error, Result};

/// Marker: constructed, not yet initialized
pub struct Uninitialized;
/// Marker: SAM configured, commands allowed
pub struct Initialized;

/// SAM timeout used during initialization, in 50 ms units (1 s)
const INIT_SAM_TIMEOUT: u8 = 0x14;

/// PN532 handle that enforces initialization state at compile time.
pub struct Device<T: Transport, State = Uninitialized> {
    channel: CommandChannel<T>,
    firmware: Option<FirmwareVersion>,
    _state: PhantomData<State>,
}

impl<T: Transport, S> Device<T, S> {
    /// The command channel underneath.
    pub fn channel(&self) -> &CommandChannel<T> {
        &self.channel
    }

    /// Mutable access to the command channel.
    pub fn channel_mut(&mut self) -> &mut CommandChannel<T> {
        &mut self.channel
    }

    /// Tear the handle down and give the transport back.
    pub fn into_inner(self) -> T {
        self.channel.into_inner()
    }

    fn run(&mut self, cmd: &Command) -> Result<Response> {
        debug!("execute {:?}", cmd);
        let data = self.channel.exchange(&cmd.encode(), cmd.response_capacity())?;
        Response::decode(cmd.command_code(), &data)
    }

    fn query_firmware(&mut self) -> Result<FirmwareVersion> {
        match self.run(&Command::GetFirmwareVersion)? {
            Response::FirmwareVersion(fw) => Ok(fw),
            other => Err(unexpected(&Command::GetFirmwareVersion, &other)),
        }
    }
}

impl<T: Transport> Device<T, Uninitialized> {
    /// Wrap `transport` with the default link configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, LinkConfig::default())
    }

    /// Wrap `transport` with `config`.
    pub fn with_config(transport: T, config: LinkConfig) -> Self {
        Self::from_channel(CommandChannel::with_config(transport, config))
    }

    /// Wrap an existing channel.
    pub fn from_channel(channel: CommandChannel<T>) -> Self {
        Self {
            channel,
            firmware: None,
            _state: PhantomData,
        }
    }

    /// Attach a cancel token to the channel.
    pub fn with_cancel_token(self, token: CancelToken) -> Self {
        Self::from_channel(self.channel.with_cancel_token(token))
    }

    /// Check the chip answers, then switch the SAM to normal mode.
    pub fn initialize(mut self) -> Result<Device<T, Initialized>> {
        let fw = self.query_firmware()?;
        info!("found {}", fw);

        let sam = Command::SamConfiguration {
            mode: SamMode::Normal,
            timeout: INIT_SAM_TIMEOUT,
            use_irq: true,
        };
        match self.run(&sam)? {
            Response::SamConfiguration => {}
            other => return Err(unexpected(&sam, &other)),
        }

        Ok(Device {
            channel: self.channel,
            firmware: Some(fw),
            _state: PhantomData,
        })
    }
}

impl<T: Transport> Device<T, Initialized> {
    /// Execute a command and return the parsed Response.
    pub fn execute(&mut self, cmd: Command) -> Result<Response> {
        self.run(&cmd)
    }

    /// Version reported during `initialize`.
    pub fn cached_firmware(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    /// Query the firmware version again and refresh the cache.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        let fw = self.query_firmware()?;
        self.firmware = Some(fw);
        Ok(fw)
    }

    /// Look for one ISO14443A tag and wait for the answer.
    pub fn list_passive_target(&mut self) -> Result<Option<TargetInfo>> {
        self.listen_for_tag()?;
        self.read_tag()
    }

    /// Start a tag search without waiting for it to finish. Pair with
    /// [`Device::read_tag`] once the IRQ line reports the answer.
    pub fn listen_for_tag(&mut self) -> Result<()> {
        let cmd = Command::InListPassiveTarget {
            brty: BRTY_ISO14443A,
        };
        self.channel.write(&cmd.encode())
    }

    /// Collect the answer to [`Device::listen_for_tag`].
    pub fn read_tag(&mut self) -> Result<Option<TargetInfo>> {
        let cmd = Command::InListPassiveTarget {
            brty: BRTY_ISO14443A,
        };
        let data = self.channel.read(cmd.response_capacity())?;
        match Response::decode(cmd.command_code(), &data)? {
            Response::InListPassiveTarget(target) => {
                if let Some(t) = &target {
                    debug!("target {} uid {}", t.target, t.uid);
                }
                Ok(target)
            }
            other => Err(unexpected(&cmd, &other)),
        }
    }

    /// Forward `data` to `target` and return up to `response_len` answer bytes.
    pub fn in_data_exchange(
        &mut self,
        target: u8,
        data: &[u8],
        response_len: u8,
    ) -> Result<Vec<u8>> {
        let cmd = Command::InDataExchange {
            target,
            data: data.to_vec(),
            response_len,
        };
        match self.run(&cmd)? {
            Response::InDataExchange(answer) => Ok(answer),
            other => Err(unexpected(&cmd, &other)),
        }
    }

    /// MIFARE Classic authentication of `block` with a 6-byte key.
    /// A rejected key surfaces as `Error::CommandStatus { status: 0x14 }`.
    pub fn authenticate_mifare(
        &mut self,
        target: u8,
        block: u8,
        slot: KeySlot,
        key: &[u8; 6],
        uid: &Uid,
    ) -> Result<()> {
        let data = mifare_authenticate(block, slot, key, uid)?;
        match self.in_data_exchange(target, &data, 0) {
            Ok(_) => Ok(()),
            Err(Error::CommandStatus { status }) if status & 0x3F == STATUS_AUTH_FAILED => {
                warn!("authentication of block {} rejected", block);
                Err(Error::CommandStatus { status })
            }
            Err(e) => Err(e),
        }
    }

    /// Read one 16-byte MIFARE Classic block; the sector must be authenticated.
    pub fn read_mifare_block(&mut self, target: u8, block: u8) -> Result<[u8; MIFARE_BLOCK_LEN]> {
        let answer = self.in_data_exchange(target, &mifare_read(block), MIFARE_BLOCK_LEN as u8)?;
        <[u8; MIFARE_BLOCK_LEN]>::try_from(answer.as_slice()).map_err(|_| Error::InvalidLength {
            expected: MIFARE_BLOCK_LEN,
            actual: answer.len(),
        })
    }

    /// Find a tag, authenticate `block` with the factory key in slot B and
    /// read it. `None` when no tag is in the field.
    pub fn read_block_with_default_key(
        &mut self,
        block: u8,
    ) -> Result<Option<[u8; MIFARE_BLOCK_LEN]>> {
        let Some(tag) = self.list_passive_target()? else {
            return Ok(None);
        };
        self.authenticate_mifare(tag.target, block, KeySlot::B, &MIFARE_DEFAULT_KEY, &tag.uid)?;
        self.read_mifare_block(tag.target, block).map(Some)
    }
}

fn unexpected(cmd: &Command, resp: &Response) -> Error {
    debug!("{:?} answered with {:?}", cmd, resp);
    Error::UnexpectedResponse {
        expected: cmd.command_code().wrapping_add(1),
        actual: match resp {
            Response::FirmwareVersion(_) => 0x03,
            Response::SamConfiguration => 0x15,
            Response::InListPassiveTarget(_) => 0x4B,
            Response::InDataExchange(_) => 0x41,
        },
    }
}
