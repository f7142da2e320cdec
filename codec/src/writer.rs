use std::io::Write;

use crate::{
    error::CodecError,
    float::put_var_float,
    varint::{put_var_int, put_var_uint, MAX_VARINT_LEN},
};

/// A Kiwi writer over any byte sink.
///
/// Each primitive is staged in a small scratch buffer and handed to the sink
/// in one `write_all`, so a primitive is never split across sink writes.
///
/// ```
/// let mut writer = kiwi_wire_codec::Writer::new(Vec::new());
/// writer.write_string("🍕").unwrap();
/// writer.write_var_float(123.456).unwrap();
/// assert_eq!(writer.into_inner(), [240, 159, 141, 149, 0, 133, 242, 210, 237]);
/// ```
///
pub struct Writer<W> {
    sink: W,
    buf:  [u8; MAX_VARINT_LEN],
    size: usize,
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W) -> Writer<W> {
        Writer {
            sink,
            buf: [0; MAX_VARINT_LEN],
            size: 0,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Write a byte.
    pub fn write_byte(&mut self, value: u8) -> Result<(), CodecError> {
        self.buf[0] = value;
        self.size = 1;
        self.flush()
    }

    /// Write a boolean as `1` or `0`.
    pub fn write_bool(&mut self, value: bool) -> Result<(), CodecError> {
        self.write_byte(if value { 1 } else { 0 })
    }

    /// Write a variable-length unsigned 32-bit integer.
    pub fn write_var_uint(&mut self, value: u32) -> Result<(), CodecError> {
        self.size = put_var_uint(&mut self.buf, value);
        self.flush()
    }

    /// Write a variable-length signed 32-bit integer.
    pub fn write_var_int(&mut self, value: i32) -> Result<(), CodecError> {
        self.size = put_var_int(&mut self.buf, value);
        self.flush()
    }

    /// Write a variable-length 32-bit floating-point number. Zero and
    /// subnormals take a single byte.
    pub fn write_var_float(&mut self, value: f32) -> Result<(), CodecError> {
        self.size = put_var_float(&mut self.buf, value);
        self.flush()
    }

    /// Write a varint length prefix followed by the raw bytes.
    pub fn write_byte_array(&mut self, value: &[u8]) -> Result<(), CodecError> {
        self.write_var_uint(byte_array_len(value.len())?)?;
        self.sink.write_all(value)?;
        Ok(())
    }

    /// Write a UTF-8 string followed by a zero byte. The string must not
    /// contain `'\0'` or it will be cut short when read back.
    pub fn write_string(&mut self, value: &str) -> Result<(), CodecError> {
        let mut bytes = Vec::with_capacity(value.len() + 1);
        bytes.extend_from_slice(value.as_bytes());
        bytes.push(0);
        self.sink.write_all(&bytes)?;
        Ok(())
    }

    /// Hand the staged primitive to the sink. The stage is emptied whether or
    /// not the sink accepts it.
    pub fn flush(&mut self) -> Result<(), CodecError> {
        let size = std::mem::take(&mut self.size);
        self.sink.write_all(&self.buf[..size])?;
        Ok(())
    }
}

fn byte_array_len(len: usize) -> Result<u32, CodecError> {
    u32::try_from(len).map_err(|_| CodecError::ByteArrayTooLong(len))
}
