//! Primitive value codec for the Kiwi serialization format. See
//! [https://github.com/evanw/kiwi](https://github.com/evanw/kiwi) for
//! documentation about the format.
//!
//! [`Reader`] and [`Writer`] wrap any `std::io::Read` / `std::io::Write` and
//! expose the wire primitives: bytes, booleans, variable-length integers,
//! compacted floats, length-prefixed byte arrays and null-terminated strings.
//!
//! ```
//! use kiwi_wire_codec::*;
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_string("🍕").unwrap();
//! writer.write_var_float(123.456).unwrap();
//! let bytes = writer.into_inner();
//! assert_eq!(bytes, [240, 159, 141, 149, 0, 133, 242, 210, 237]);
//!
//! let mut reader = Reader::new(bytes.as_slice());
//! assert_eq!(reader.read_string().unwrap(), "🍕");
//! assert_eq!(reader.read_var_float().unwrap(), 123.456);
//! ```

pub mod error;
pub mod float;
pub mod reader;
pub mod varint;
pub mod writer;

pub use error::CodecError;
pub use reader::Reader;
pub use writer::Writer;
