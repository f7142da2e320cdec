use std::io::Read;
use std::str;

use crate::{
    error::CodecError,
    float::from_wire_bits,
    varint::{decode_var_int, decode_var_uint, MAX_VARINT_LEN},
};

/// A Kiwi reader over any byte source.
///
/// Every method either returns a complete primitive or an error; a source
/// that runs out mid-primitive surfaces as an unexpected-EOF I/O error.
///
/// ```
/// let mut reader = kiwi_wire_codec::Reader::new(&[240, 159, 141, 149, 0, 133, 242, 210, 237][..]);
/// assert_eq!(reader.read_string().unwrap(), "🍕");
/// assert_eq!(reader.read_var_float().unwrap(), 123.456);
/// ```
///
pub struct Reader<R> {
    source: R,
    buf:    [u8; MAX_VARINT_LEN],
}

impl<R: Read> Reader<R> {
    pub fn new(source: R) -> Reader<R> {
        Reader {
            source,
            buf: [0; MAX_VARINT_LEN],
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.source
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Gives the source back. For a `&[u8]` source this is whatever has not
    /// been read yet.
    pub fn into_inner(self) -> R {
        self.source
    }

    /// Read a single byte.
    pub fn read_byte(&mut self) -> Result<u8, CodecError> {
        self.source.read_exact(&mut self.buf[..1])?;
        Ok(self.buf[0])
    }

    /// Read a boolean. Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool, CodecError> {
        Ok(self.read_byte()? != 0)
    }

    /// Read a variable-length unsigned 32-bit integer.
    pub fn read_var_uint(&mut self) -> Result<u32, CodecError> {
        decode_var_uint(|| self.read_byte())
    }

    /// Read a variable-length signed 32-bit integer.
    pub fn read_var_int(&mut self) -> Result<i32, CodecError> {
        decode_var_int(|| self.read_byte())
    }

    /// Read a variable-length 32-bit floating-point number. A leading zero
    /// byte is the whole value.
    pub fn read_var_float(&mut self) -> Result<f32, CodecError> {
        self.source.read_exact(&mut self.buf[..1])?;
        if self.buf[0] == 0 {
            return Ok(0.0);
        }

        self.source.read_exact(&mut self.buf[1..4])?;
        let bits = u32::from_le_bytes([self.buf[0], self.buf[1], self.buf[2], self.buf[3]]);
        Ok(from_wire_bits(bits))
    }

    /// Read a varint length followed by that many raw bytes.
    pub fn read_byte_array(&mut self) -> Result<Vec<u8>, CodecError> {
        let len = self.read_var_uint()? as usize;

        // Never allocate more than the source actually delivers
        let mut bytes = Vec::new();
        (&mut self.source).take(len as u64).read_to_end(&mut bytes)?;
        if bytes.len() != len {
            return Err(CodecError::Io(std::io::ErrorKind::UnexpectedEof.into()));
        }
        Ok(bytes)
    }

    /// Read one UTF-8 encoded code point. The width comes from the lead
    /// byte alone, so a bad sequence still consumes its full width and comes
    /// back as U+FFFD. A lone byte below `0xC0` is taken as its own code point.
    pub fn read_char(&mut self) -> Result<char, CodecError> {
        let lead = self.read_byte()?;
        let width = utf8_width(lead);
        if width == 1 {
            return Ok(lead as char);
        }

        self.source.read_exact(&mut self.buf[1..width])?;
        Ok(str::from_utf8(&self.buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Read a null-terminated UTF-8 string. The terminator is consumed but
    /// not returned.
    pub fn read_string(&mut self) -> Result<String, CodecError> {
        let mut value = String::new();
        loop {
            match self.read_char()? {
                '\0' => return Ok(value),
                c => value.push(c),
            }
        }
    }
}

/// Sequence length implied by a UTF-8 lead byte. Continuation bytes count
/// as one byte and everything from `0xF0` up as four.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0xBF => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}
