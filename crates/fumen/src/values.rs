//! The base-64 value stream fumen data is written in.

use crate::error::DecodeError;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Values are read least-significant digit first.
#[derive(Debug, Clone)]
pub struct Values {
    digits: Vec<u8>,
    pos: usize,
}

impl Values {
    /// Parse fumen data. `?` separators are skipped.
    pub fn parse(data: &str) -> Result<Self, DecodeError> {
        let mut digits = Vec::with_capacity(data.len());
        for ch in data.chars().filter(|&ch| ch != '?') {
            let digit = ALPHABET
                .iter()
                .position(|&b| b as char == ch)
                .ok_or(DecodeError::InvalidCharacter(ch))?;
            digits.push(digit as u8);
        }
        Ok(Self { digits, pos: 0 })
    }

    /// Read an `n`-digit number.
    pub fn poll(&mut self, n: usize) -> Result<u32, DecodeError> {
        let end = self.pos + n;
        let digits = self
            .digits
            .get(self.pos..end)
            .ok_or(DecodeError::UnexpectedEnd)?;
        let value = digits
            .iter()
            .rev()
            .fold(0u32, |acc, &digit| acc * 64 + digit as u32);
        self.pos = end;
        Ok(value)
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.digits.len()
    }
}
