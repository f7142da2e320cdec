//! Byte-compacted 32-bit floats.
//!
//! The IEEE bit pattern is rotated so the 8 exponent bits land in the first
//! byte on the wire. An exponent of zero (±0 and every subnormal) is written
//! as a single `0x00`, everything else as four little-endian bytes. Subnormals
//! therefore decode as `0.0`; that collapse is part of the format.

use crate::varint::MAX_VARINT_LEN;

/// Rotate the exponent into the low byte.
pub fn to_wire_bits(value: f32) -> u32 {
    value.to_bits().rotate_right(23)
}

/// Move the exponent back into place.
pub fn from_wire_bits(bits: u32) -> f32 {
    f32::from_bits(bits.rotate_left(23))
}

/// Encode `value` into `buf`, returning the number of bytes used (1 or 4).
pub fn put_var_float(buf: &mut [u8; MAX_VARINT_LEN], value: f32) -> usize {
    let bits = to_wire_bits(value);

    if (bits & 255) == 0 {
        buf[0] = 0;
        return 1;
    }

    buf[..4].copy_from_slice(&bits.to_le_bytes());
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: f32) -> Vec<u8> {
        let mut buf = [0; MAX_VARINT_LEN];
        let len = put_var_float(&mut buf, value);
        buf[..len].to_vec()
    }

    #[test]
    fn zero_and_subnormals_collapse() {
        assert_eq!(encode(0.0), [0]);
        assert_eq!(encode(-0.0), [0]);
        assert_eq!(encode(1.0e-40), [0]);
        assert_eq!(encode(-1.0e-40), [0]);
        assert_eq!(encode(f32::from_bits(1)), [0]);
        assert_eq!(encode(f32::from_bits(0x007F_FFFF)), [0]);
    }

    #[test]
    fn normals() {
        assert_eq!(encode(123.456), [133, 242, 210, 237]);
        assert_eq!(encode(-123.456), [133, 243, 210, 237]);
        assert_eq!(encode(f32::MIN), [254, 255, 255, 255]);
        assert_eq!(encode(f32::MAX), [254, 254, 255, 255]);
        assert_eq!(encode(f32::MIN_POSITIVE), [1, 0, 0, 0]);
        assert_eq!(encode(-f32::MIN_POSITIVE), [1, 1, 0, 0]);
        assert_eq!(encode(f32::INFINITY), [255, 0, 0, 0]);
        assert_eq!(encode(f32::NEG_INFINITY), [255, 1, 0, 0]);
        assert_eq!(encode(f32::NAN), [255, 0, 0, 128]);
    }

    #[test]
    fn rotation_is_inverse() {
        for value in [1.0f32, -2.5, 0.1, 1.0e30, -1.0e-30, f32::MIN_POSITIVE, f32::MAX] {
            assert_eq!(from_wire_bits(to_wire_bits(value)).to_bits(), value.to_bits());
        }
    }
}
