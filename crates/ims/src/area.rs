//! Derived keys held for the lifetime of a boot stage
//!
//! A [`CommunicationArea`] is built once from the IMS and only read after
//! that. Every operation that touches a secret fails once [`kill`] has run.
//!
//! [`kill`]: CommunicationArea::kill

use algorithms::{C25519, Csprng, Ed25519, Goldilocks};
use kem::{key_pair_from_secret, public_key_validate, svdp_dh};
use log::debug;
use params::traditional::ecc::{ED25519_PUBLIC_KEY_SIZE, GOLDILOCKS_PUBLIC_KEY_SIZE};
use rand::{CryptoRng, RngCore};
use sign::{sp_dsa, vp_dsa};
use zeroize::Zeroize;

use crate::derive::{calculate_epuid, calculate_es3_epuid, key_generation, DerivedKeys, Epuid, ErrkPublicKey};
use crate::error::{Error, Result};
use crate::ims::Ims;

/// Curve of the primary signing key
pub type EpskCurve = Goldilocks;
/// Curve of the secondary signing key
pub type EsskCurve = Ed25519;
/// Curve used for agreement with the secondary key
pub type EsskDhCurve = C25519;

pub struct CommunicationArea {
    epuid: Epuid,
    es3_epuid: Epuid,
    keys: DerivedKeys,
    killed: bool,
}

impl CommunicationArea {
    /// Run the whole derivation for `ims`
    pub fn new(ims: &Ims) -> Result<Self> {
        let area = Self {
            epuid: calculate_epuid(ims)?,
            es3_epuid: calculate_es3_epuid(ims)?,
            keys: key_generation(ims)?,
            killed: false,
        };
        debug!("communication area ready for device {}", area.epuid);
        Ok(area)
    }

    pub fn epuid(&self) -> Epuid {
        self.epuid
    }

    pub fn es3_epuid(&self) -> Epuid {
        self.es3_epuid
    }

    /// Public half of the RSA alias key
    pub fn errk_public(&self) -> &ErrkPublicKey {
        self.keys.errk()
    }

    fn keys(&self) -> Result<&DerivedKeys> {
        if self.killed {
            return Err(Error::Killed);
        }
        Ok(&self.keys)
    }

    pub fn epck(&self) -> Result<&[u8; 32]> {
        Ok(self.keys()?.epck())
    }

    /// A generator seeded with ERGS
    ///
    /// Every call starts the same stream. Keep one generator per boot
    /// rather than asking for a new one per signature.
    pub fn rng(&self) -> Result<Csprng> {
        Ok(Csprng::new(self.keys()?.ergs()))
    }

    /// EPSK public key on GOLDILOCKS
    pub fn epsk_public_key(&self, w: &mut [u8], compress: bool) -> Result<()> {
        key_pair_from_secret::<9, EpskCurve>(self.keys()?.epsk(), w, compress)?;
        Ok(())
    }

    /// ESSK public key on ED25519
    pub fn essk_public_key(&self, w: &mut [u8], compress: bool) -> Result<()> {
        key_pair_from_secret::<5, EsskCurve>(self.keys()?.essk(), w, compress)?;
        Ok(())
    }

    /// ESSK public key on C25519, for agreement
    pub fn essk_dh_public_key(&self, w: &mut [u8]) -> Result<()> {
        key_pair_from_secret::<5, EsskDhCurve>(self.keys()?.essk(), w, false)?;
        Ok(())
    }

    /// ECDSA signature `(c, d)` on `msg` with the EPSK
    pub fn epsk_sign<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        msg: &[u8],
        c: &mut [u8],
        d: &mut [u8],
    ) -> Result<()> {
        sp_dsa::<9, EpskCurve, R>(rng, self.keys()?.epsk(), msg, c, d)?;
        Ok(())
    }

    pub fn epsk_verify(&self, msg: &[u8], c: &[u8], d: &[u8]) -> Result<()> {
        let mut w = [0u8; GOLDILOCKS_PUBLIC_KEY_SIZE];
        self.epsk_public_key(&mut w, false)?;
        vp_dsa::<9, EpskCurve>(&w, msg, c, d)?;
        Ok(())
    }

    /// ECDSA signature `(c, d)` on `msg` with the ESSK
    pub fn essk_sign<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        msg: &[u8],
        c: &mut [u8],
        d: &mut [u8],
    ) -> Result<()> {
        sp_dsa::<5, EsskCurve, R>(rng, self.keys()?.essk(), msg, c, d)?;
        Ok(())
    }

    pub fn essk_verify(&self, msg: &[u8], c: &[u8], d: &[u8]) -> Result<()> {
        let mut w = [0u8; ED25519_PUBLIC_KEY_SIZE];
        self.essk_public_key(&mut w, false)?;
        vp_dsa::<5, EsskCurve>(&w, msg, c, d)?;
        Ok(())
    }

    /// Agreed C25519 secret with a validated peer key, into `z`
    pub fn essk_shared_secret(&self, peer: &[u8], z: &mut [u8]) -> Result<()> {
        let essk = self.keys()?.essk();
        public_key_validate::<5, EsskDhCurve>(peer)?;
        svdp_dh::<5, EsskDhCurve>(essk, peer, z)?;
        Ok(())
    }

    /// Zero every derived secret
    pub fn kill(&mut self) {
        self.keys.zeroize();
        self.killed = true;
        debug!("communication area for device {} destroyed", self.epuid);
    }

    pub fn is_killed(&self) -> bool {
        self.killed
    }
}

impl core::fmt::Debug for CommunicationArea {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CommunicationArea")
            .field("epuid", &self.epuid)
            .field("killed", &self.killed)
            .finish_non_exhaustive()
    }
}
