use kiwi_wire_codec::{CodecError, Reader, Writer};

fn encode(cb: impl FnOnce(&mut Writer<Vec<u8>>) -> Result<(), CodecError>) -> Vec<u8> {
    let mut writer = Writer::new(Vec::new());
    cb(&mut writer).expect("write failed");
    writer.into_inner()
}

#[test]
fn var_uint_round_trip() {
    let mut value: u64 = 0;
    while value <= u32::MAX as u64 {
        let v = value as u32;
        let bytes = encode(|w| w.write_var_uint(v));
        assert!(bytes.len() <= 5);
        assert_eq!(Reader::new(bytes.as_slice()).read_var_uint().ok(), Some(v));
        value = value * 3 + 1;
    }
}

#[test]
fn var_int_round_trip() {
    for v in [0, 1, -1, 63, -64, 1000, -1000, i32::MAX, i32::MIN, i32::MIN + 1] {
        let bytes = encode(|w| w.write_var_int(v));
        assert_eq!(Reader::new(bytes.as_slice()).read_var_int().ok(), Some(v));
    }
}

#[test]
fn float_round_trip_for_normals() {
    let samples = [
        1.0f32,
        -1.0,
        0.5,
        3.25,
        -2.75,
        1.0e-37,
        6.0e37,
        f32::MIN_POSITIVE,
        f32::MAX,
        f32::MIN,
        f32::INFINITY,
        f32::NEG_INFINITY,
    ];
    for v in samples {
        let bytes = encode(|w| w.write_var_float(v));
        assert_eq!(bytes.len(), 4);
        let got = Reader::new(bytes.as_slice()).read_var_float().unwrap();
        assert_eq!(got.to_bits(), v.to_bits());
    }
}

#[test]
fn subnormal_floats_decode_as_zero() {
    for bits in [1u32, 0x0000_FFFF, 0x007F_FFFF, 0x8000_0001, 0x8000_0000] {
        let v = f32::from_bits(bits);
        let bytes = encode(|w| w.write_var_float(v));
        assert_eq!(bytes, [0]);
        let got = Reader::new(bytes.as_slice()).read_var_float().unwrap();
        assert_eq!(got.to_bits(), 0);
    }
}

#[test]
fn byte_array_round_trip() {
    for len in [0usize, 1, 2, 127, 128, 300, 20000] {
        let data: Vec<u8> = (0..len).map(|i| (i * 7 % 256) as u8).collect();
        let bytes = encode(|w| w.write_byte_array(&data));

        let mut prefix = Writer::new(Vec::new());
        prefix.write_var_uint(len as u32).unwrap();
        let prefix = prefix.into_inner();
        assert_eq!(&bytes[..prefix.len()], prefix.as_slice());

        assert_eq!(Reader::new(bytes.as_slice()).read_byte_array().ok(), Some(data));
    }
}

#[test]
fn string_round_trip() {
    for s in ["", "ab", "hello, world", "λx → y", "🍕🍕", "\u{7FF}\u{800}\u{FFFF}\u{10000}"] {
        let bytes = encode(|w| w.write_string(s));
        assert_eq!(bytes.len(), s.len() + 1);
        assert_eq!(bytes.last(), Some(&0));

        let mut source = bytes.as_slice();
        let mut reader = Reader::new(&mut source);
        assert_eq!(reader.read_string().ok().as_deref(), Some(s));
        assert!(source.is_empty());
    }
}

#[test]
fn mixed_record() {
    let bytes = encode(|w| {
        w.write_bool(true)?;
        w.write_byte(0xAB)?;
        w.write_var_uint(300)?;
        w.write_var_int(-5)?;
        w.write_var_float(0.0)?;
        w.write_var_float(2.5)?;
        w.write_byte_array(b"raw")?;
        w.write_string("name")
    });

    let mut reader = Reader::new(bytes.as_slice());
    assert_eq!(reader.read_bool().ok(), Some(true));
    assert_eq!(reader.read_byte().ok(), Some(0xAB));
    assert_eq!(reader.read_var_uint().ok(), Some(300));
    assert_eq!(reader.read_var_int().ok(), Some(-5));
    assert_eq!(reader.read_var_float().ok(), Some(0.0));
    assert_eq!(reader.read_var_float().ok(), Some(2.5));
    assert_eq!(reader.read_byte_array().ok(), Some(b"raw".to_vec()));
    assert_eq!(reader.read_string().ok(), Some("name".to_owned()));
    assert!(reader.read_byte().unwrap_err().is_unexpected_eof());
}
