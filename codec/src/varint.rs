use crate::error::CodecError;

/// Longest encoding of a 32-bit value: five 7-bit groups.
pub const MAX_VARINT_LEN: usize = 5;

/// Encode `value` as base-128 groups, least significant group first, into
/// `buf`. Returns the number of bytes used.
pub fn put_var_uint(buf: &mut [u8; MAX_VARINT_LEN], mut value: u32) -> usize {
    let mut len = 0;
    loop {
        let byte = value as u8 & 127;
        value >>= 7;

        if value == 0 {
            buf[len] = byte;
            return len + 1;
        }

        buf[len] = byte | 128;
        len += 1;
    }
}

/// Signed values go out as their raw two's-complement bits, so any negative
/// number takes the full five bytes.
pub fn put_var_int(buf: &mut [u8; MAX_VARINT_LEN], value: i32) -> usize {
    put_var_uint(buf, value as u32)
}

/// Decode an unsigned varint, pulling bytes one at a time from `next_byte`.
/// Stops at the first byte without the continuation bit.
pub fn decode_var_uint<F>(mut next_byte: F) -> Result<u32, CodecError>
where
    F: FnMut() -> Result<u8, CodecError>,
{
    let mut result: u32 = 0;

    for group in 0..MAX_VARINT_LEN {
        let byte = next_byte()?;

        // Only the low four bits of the fifth group still fit in a u32
        if group == MAX_VARINT_LEN - 1 && byte > 0x0F {
            return Err(CodecError::VarintOverflow);
        }

        result |= ((byte & 127) as u32) << (7 * group);
        if (byte & 128) == 0 {
            return Ok(result);
        }
    }

    Err(CodecError::VarintOverflow)
}

pub fn decode_var_int<F>(next_byte: F) -> Result<i32, CodecError>
where
    F: FnMut() -> Result<u8, CodecError>,
{
    decode_var_uint(next_byte).map(|value| value as i32)
}
