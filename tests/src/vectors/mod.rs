//! NIST CAVP response-file model and parser
//!
//! A `.rsp` file is a run of sections. Each section opens with bracketed
//! parameters such as `[Keylen = 128]` and holds records that start at a
//! `Count = n` line and continue with `Name = hex` fields. A bare `FAIL`
//! line marks a record whose authentication is expected to fail. Blank
//! lines and `#` comments are ignored.

pub mod error;
pub mod gcm;

use std::collections::BTreeMap;

pub use error::{Result, VectorError};

/// One `Count = n` block
#[derive(Debug, Clone, Default)]
pub struct Record {
    /// Line of the `Count` field
    pub line: usize,
    pub fail: bool,
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Hex-decode a field; an empty value is an empty byte string
    pub fn hex(&self, name: &'static str) -> Result<Vec<u8>> {
        let v = self.get(name).ok_or(VectorError::MissingField(name))?;
        hex::decode(v).map_err(|source| VectorError::Hex { field: name, source })
    }

    pub fn count(&self) -> Option<usize> {
        self.get("Count").and_then(|c| c.parse().ok())
    }
}

/// Bracketed parameters and the records that follow them
#[derive(Debug, Clone, Default)]
pub struct Section {
    pub params: BTreeMap<String, String>,
    pub records: Vec<Record>,
}

impl Section {
    /// Numeric parameter, e.g. `Taglen`
    pub fn param(&self, name: &'static str) -> Result<usize> {
        let v = self.params.get(name).ok_or(VectorError::MissingField(name))?;
        v.parse()
            .map_err(|_| VectorError::InvalidData(format!("{} = {}", name, v)))
    }
}

fn split_assignment(s: &str) -> Option<(&str, &str)> {
    let (k, v) = s.split_once('=')?;
    Some((k.trim(), v.trim()))
}

/// Parse the text of a response file
pub fn parse(text: &str) -> Result<Vec<Section>> {
    let mut sections: Vec<Section> = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let s = raw.trim();
        if s.is_empty() || s.starts_with('#') {
            continue;
        }

        if let Some(inner) = s.strip_prefix('[') {
            let inner = inner
                .strip_suffix(']')
                .ok_or(VectorError::Syntax { line, reason: "unterminated parameter" })?;
            let (k, v) = split_assignment(inner)
                .ok_or(VectorError::Syntax { line, reason: "parameter without a value" })?;
            if sections.last().map_or(true, |sec| !sec.records.is_empty()) {
                sections.push(Section::default());
            }
            if let Some(sec) = sections.last_mut() {
                sec.params.insert(k.to_string(), v.to_string());
            }
            continue;
        }

        if sections.is_empty() {
            sections.push(Section::default());
        }
        let records = match sections.last_mut() {
            Some(sec) => &mut sec.records,
            None => continue,
        };

        if s == "FAIL" {
            let rec = records
                .last_mut()
                .ok_or(VectorError::Syntax { line, reason: "FAIL outside a record" })?;
            rec.fail = true;
            continue;
        }

        let (k, v) = split_assignment(s).ok_or(VectorError::Syntax { line, reason: "expected Name = value" })?;
        if k == "Count" {
            records.push(Record { line, ..Record::default() });
        }
        let rec = records
            .last_mut()
            .ok_or(VectorError::Syntax { line, reason: "field outside a record" })?;
        rec.fields.push((k.to_string(), v.to_string()));
    }

    Ok(sections)
}

/// Outcome of replaying a file
#[derive(Debug, Default)]
pub struct Report {
    pub passed: usize,
    /// Line of the failing record and what went wrong
    pub failures: Vec<(usize, VectorError)>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub(crate) fn record(&mut self, line: usize, res: Result<()>) {
        match res {
            Ok(()) => self.passed += 1,
            Err(e) => self.failures.push((line, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# CAVS 14.0
[Keylen = 128]
[Taglen = 96]

Count = 0
Key = 00ff
AAD =
FAIL

Count = 1
Key = 0102

[Keylen = 256]
Count = 0
Key = aa
";

    #[test]
    fn test_sections_and_records() {
        let secs = parse(SAMPLE).unwrap();
        assert_eq!(secs.len(), 2);
        assert_eq!(secs[0].param("Keylen").unwrap(), 128);
        assert_eq!(secs[0].param("Taglen").unwrap(), 96);
        assert_eq!(secs[0].records.len(), 2);
        assert!(secs[0].records[0].fail);
        assert!(!secs[0].records[1].fail);
        assert_eq!(secs[0].records[0].hex("Key").unwrap(), vec![0x00, 0xff]);
        assert_eq!(secs[0].records[0].hex("AAD").unwrap(), Vec::<u8>::new());
        assert_eq!(secs[0].records[1].count(), Some(1));
        assert_eq!(secs[0].records[1].line, 10);
        assert_eq!(secs[1].param("Keylen").unwrap(), 256);
    }

    #[test]
    fn test_missing_and_malformed_fields() {
        let secs = parse(SAMPLE).unwrap();
        let rec = &secs[1].records[0];
        assert!(matches!(rec.hex("IV"), Err(VectorError::MissingField("IV"))));
        assert!(matches!(secs[1].param("Taglen"), Err(VectorError::MissingField(_))));

        let bad = parse("Count = 0\nKey = 0g\n").unwrap();
        assert!(matches!(bad[0].records[0].hex("Key"), Err(VectorError::Hex { field: "Key", .. })));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(parse("Key = 00\n"), Err(VectorError::Syntax { line: 1, .. })));
        assert!(matches!(parse("FAIL\n"), Err(VectorError::Syntax { line: 1, .. })));
        assert!(matches!(parse("[Keylen = 128\n"), Err(VectorError::Syntax { .. })));
        assert!(matches!(parse("Count = 0\ngarbage\n"), Err(VectorError::Syntax { line: 2, .. })));
    }
}
