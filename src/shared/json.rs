//! JSON pretty-printing with ECMAScript number formatting.
//!
//! Integral floats are written without a fractional part (`1.0` → `1`,
//! `1e2` → `100`) and magnitudes of 1e21 and above keep exponent notation
//! with an explicit sign (`1e+21`).

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, Write};

/// Threshold above which ECMAScript switches integral numbers to exponent notation.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Two-space pretty formatter that writes floats like `JSON.stringify`.
pub struct EcmaPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl Default for EcmaPrettyFormatter<'_> {
    fn default() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl EcmaPrettyFormatter<'_> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Formatter for EcmaPrettyFormatter<'_> {
    fn write_f64<W: ?Sized + Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        if !value.is_finite() || value.fract() != 0.0 {
            return self.inner.write_f64(writer, value);
        }
        if value == 0.0 {
            // -0 prints as 0
            return writer.write_all(b"0");
        }
        if value.abs() < EXPONENT_THRESHOLD {
            write!(writer, "{}", value)
        } else {
            let exponent = format!("{:e}", value);
            writer.write_all(exponent.replacen('e', "e+", 1).as_bytes())
        }
    }

    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

/// Serializes `value` with two-space indentation and ECMAScript number formatting.
pub fn to_ecma_pretty_string<T: ?Sized + Serialize>(value: &T) -> serde_json::Result<String> {
    let mut out = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, EcmaPrettyFormatter::new());
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(serde_json::Error::custom)
}
