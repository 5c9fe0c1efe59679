//! Replay of CAVP AES-GCM response files
//!
//! Encrypt files carry `Key`, `IV`, `PT`, `AAD`, `CT` and `Tag` for every
//! record. Decrypt files carry `Key`, `IV`, `CT`, `AAD` and `Tag`, then
//! either the expected `PT` or `FAIL`. The section's `Taglen` is in bits.

use algorithms::{gcm_decrypt, gcm_encrypt};

use super::error::{mismatch, Result, VectorError};
use super::{parse, Record, Report, Section};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

fn check_lengths(sec: &Section, key: &[u8], iv: &[u8], tag: &[u8]) -> Result<()> {
    for (name, bytes) in [("Keylen", key), ("IVlen", iv), ("Taglen", tag)] {
        let bits = sec.param(name)?;
        if bits != bytes.len() * 8 {
            return Err(VectorError::InvalidData(format!(
                "{} is {} bits but the field holds {}",
                name,
                bits,
                bytes.len() * 8
            )));
        }
    }
    Ok(())
}

fn encrypt_case(sec: &Section, rec: &Record) -> Result<()> {
    let (key, iv, pt, aad) = (rec.hex("Key")?, rec.hex("IV")?, rec.hex("PT")?, rec.hex("AAD")?);
    let (ct, tag) = (rec.hex("CT")?, rec.hex("Tag")?);
    check_lengths(sec, &key, &iv, &tag)?;

    let mut out = vec![0u8; pt.len()];
    let full = gcm_encrypt(&key, &iv, &aad, &pt, &mut out)?;
    if out != ct {
        return Err(mismatch("CT", &ct, &out));
    }
    let got = &full.as_ref()[..tag.len()];
    if got != tag.as_slice() {
        return Err(mismatch("Tag", &tag, got));
    }
    Ok(())
}

fn decrypt_case(sec: &Section, rec: &Record) -> Result<()> {
    let (key, iv, ct, aad, tag) = (
        rec.hex("Key")?,
        rec.hex("IV")?,
        rec.hex("CT")?,
        rec.hex("AAD")?,
        rec.hex("Tag")?,
    );
    check_lengths(sec, &key, &iv, &tag)?;

    let mut out = vec![0u8; ct.len()];
    let res = gcm_decrypt(&key, &iv, &aad, &ct, &tag, &mut out);
    match (rec.fail, res) {
        (true, Err(algorithms::Error::Authentication { .. })) => Ok(()),
        (true, Err(e)) => Err(e.into()),
        (true, Ok(())) => Err(VectorError::InvalidData("forged tag was accepted".into())),
        (false, Err(e)) => Err(e.into()),
        (false, Ok(())) => {
            let pt = rec.hex("PT")?;
            if out != pt {
                return Err(mismatch("PT", &pt, &out));
            }
            Ok(())
        }
    }
}

/// Replay every record of a response file
///
/// Only a malformed file is an error; per-record failures land in the
/// returned [`Report`].
pub fn run(text: &str, direction: Direction) -> Result<Report> {
    let mut report = Report::default();
    for sec in parse(text)? {
        for rec in &sec.records {
            let res = match direction {
                Direction::Encrypt => encrypt_case(&sec, rec),
                Direction::Decrypt => decrypt_case(&sec, rec),
            };
            report.record(rec.line, res);
        }
    }
    Ok(report)
}
