//! Second-stage firmware configuration block
//!
//! Development boards may carry a 64-byte block that substitutes a fake
//! IMS or fake VID/PID for the fused values:
//!
//! | offset | size | field |
//! |-------:|-----:|-------|
//! | 0      | 16   | `"2ndStageFWConfig"` |
//! | 16     | 1    | use fake IMS |
//! | 17     | 35   | fake IMS |
//! | 52     | 1    | use fake VID/PID |
//! | 56     | 4    | VID, little-endian |
//! | 60     | 4    | PID, little-endian |

use byteorder::{ByteOrder, LittleEndian};
use log::warn;
use params::device::{IMS_SIZE, SECOND_STAGE_CONFIG_SIZE, SECOND_STAGE_SENTINEL};

use crate::error::{self, Result};
use crate::ims::Ims;

const USE_FAKE_IMS: usize = 16;
const FAKE_IMS: usize = 17;
const USE_FAKE_VIDPID: usize = 52;
const VID: usize = 56;
const PID: usize = 60;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SecondStageConfig {
    pub use_fake_ims: bool,
    pub fake_ims: Ims,
    pub use_fake_vidpid: bool,
    pub fake_vid: u32,
    pub fake_pid: u32,
}

impl SecondStageConfig {
    /// Parse a configuration block
    ///
    /// Returns `Ok(None)` when the sentinel is absent, which is the normal
    /// state of production parts.
    pub fn parse(block: &[u8]) -> Result<Option<Self>> {
        error::length("second-stage config", block.len(), SECOND_STAGE_CONFIG_SIZE)?;
        if &block[..SECOND_STAGE_SENTINEL.len()] != SECOND_STAGE_SENTINEL {
            return Ok(None);
        }
        Ok(Some(Self {
            use_fake_ims: block[USE_FAKE_IMS] != 0,
            fake_ims: Ims::from_slice(&block[FAKE_IMS..FAKE_IMS + IMS_SIZE])?,
            use_fake_vidpid: block[USE_FAKE_VIDPID] != 0,
            fake_vid: LittleEndian::read_u32(&block[VID..VID + 4]),
            fake_pid: LittleEndian::read_u32(&block[PID..PID + 4]),
        }))
    }

    /// Serialise back into the 64-byte layout
    pub fn to_bytes(&self) -> [u8; SECOND_STAGE_CONFIG_SIZE] {
        let mut b = [0u8; SECOND_STAGE_CONFIG_SIZE];
        b[..SECOND_STAGE_SENTINEL.len()].copy_from_slice(SECOND_STAGE_SENTINEL);
        b[USE_FAKE_IMS] = self.use_fake_ims as u8;
        b[FAKE_IMS..FAKE_IMS + IMS_SIZE].copy_from_slice(self.fake_ims.as_bytes());
        b[USE_FAKE_VIDPID] = self.use_fake_vidpid as u8;
        LittleEndian::write_u32(&mut b[VID..VID + 4], self.fake_vid);
        LittleEndian::write_u32(&mut b[PID..PID + 4], self.fake_pid);
        b
    }

    /// The IMS to derive keys from: the fake one if enabled, else `real`
    pub fn select_ims(config: Option<&Self>, real: Ims) -> Ims {
        match config {
            Some(cfg) if cfg.use_fake_ims => {
                warn!("using fake IMS from second-stage config");
                cfg.fake_ims.clone()
            }
            _ => real,
        }
    }

    /// VID and PID to report, if the block overrides them
    pub fn vid_pid(&self) -> Option<(u32, u32)> {
        if !self.use_fake_vidpid {
            return None;
        }
        warn!(
            "using fake VID/PID {:#06x}/{:#06x} from second-stage config",
            self.fake_vid, self.fake_pid
        );
        Some((self.fake_vid, self.fake_pid))
    }
}
