//! Quantization codec: maps float attribute values to fixed-width wire
//! encodings and back.
//!
//! `Float32` is a lossless bit-reinterpretation. Integer types clamp into
//! the type's exact range and round to the nearest integer; out-of-range
//! input silently saturates and never errors. This is the documented lossy
//! half of the codec, so `decode(encode(v))` equals `clamp(round(v))`
//! rather than `v`.
//!
//! Byte order is chosen by the concrete format variant, hence the
//! [`ByteOrder`] type parameter on the stream functions.

use std::io::{Read, Write};

use byteorder::{ByteOrder, ReadBytesExt, WriteBytesExt};
use num_traits::clamp;

use crate::wire_type::ScalarWireType;

/// Applies the lossy half of the codec without encoding: clamps into the
/// type's range and rounds to the nearest integer. Identity for `Float32`.
pub fn saturate(wire_type: ScalarWireType, value: f32) -> f32 {
    match wire_type.integer_range() {
        None => value,
        Some((min, max)) => clamp((value as f64).round(), min, max) as f32,
    }
}

fn quantize(value: f32, min: f64, max: f64) -> i64 {
    clamp((value as f64).round(), min, max) as i64
}

/// Encodes one scalar at the type's byte width in `B` order.
pub fn write_datum<W, B>(writer: &mut W, wire_type: ScalarWireType, value: f32) -> std::io::Result<()>
where
    W: Write + ?Sized,
    B: ByteOrder,
{
    match wire_type.integer_range() {
        None => writer.write_f32::<B>(value),
        Some((min, max)) => write_raw_integer::<W, B>(writer, wire_type, quantize(value, min, max)),
    }
}

/// Decodes one scalar, widening to f32.
pub fn read_datum<R, B>(reader: &mut R, wire_type: ScalarWireType) -> std::io::Result<f32>
where
    R: Read + ?Sized,
    B: ByteOrder,
{
    match wire_type {
        ScalarWireType::Float32 => reader.read_f32::<B>(),
        other => Ok(read_raw_integer::<R, B>(reader, other)? as f32),
    }
}

/// Encodes one exact integer (face list count or vertex index) at the
/// type's byte width, saturating into the type's range.
///
/// Indices must stay exact up to 32 bits, which the f32 widening of
/// [`write_datum`] cannot guarantee, hence the separate entry point.
pub fn write_index<W, B>(writer: &mut W, wire_type: ScalarWireType, value: i64) -> std::io::Result<()>
where
    W: Write + ?Sized,
    B: ByteOrder,
{
    match wire_type.integer_range() {
        None => writer.write_f32::<B>(value as f32),
        Some((min, max)) => {
            let clamped = clamp(value, min as i64, max as i64);
            write_raw_integer::<W, B>(writer, wire_type, clamped)
        }
    }
}

/// Decodes one exact integer value.
pub fn read_index<R, B>(reader: &mut R, wire_type: ScalarWireType) -> std::io::Result<i64>
where
    R: Read + ?Sized,
    B: ByteOrder,
{
    match wire_type {
        ScalarWireType::Float32 => Ok(reader.read_f32::<B>()? as i64),
        other => read_raw_integer::<R, B>(reader, other),
    }
}

fn write_raw_integer<W, B>(writer: &mut W, wire_type: ScalarWireType, value: i64) -> std::io::Result<()>
where
    W: Write + ?Sized,
    B: ByteOrder,
{
    match wire_type {
        ScalarWireType::Float32 => unreachable!("integer write with float wire type"),
        ScalarWireType::Int8 => writer.write_i8(value as i8),
        ScalarWireType::Uint8 => writer.write_u8(value as u8),
        ScalarWireType::Int16 => writer.write_i16::<B>(value as i16),
        ScalarWireType::Uint16 => writer.write_u16::<B>(value as u16),
        ScalarWireType::Int32 => writer.write_i32::<B>(value as i32),
        ScalarWireType::Uint32 => writer.write_u32::<B>(value as u32),
    }
}

fn read_raw_integer<R, B>(reader: &mut R, wire_type: ScalarWireType) -> std::io::Result<i64>
where
    R: Read + ?Sized,
    B: ByteOrder,
{
    let value = match wire_type {
        ScalarWireType::Float32 => unreachable!("integer read with float wire type"),
        ScalarWireType::Int8 => reader.read_i8()? as i64,
        ScalarWireType::Uint8 => reader.read_u8()? as i64,
        ScalarWireType::Int16 => reader.read_i16::<B>()? as i64,
        ScalarWireType::Uint16 => reader.read_u16::<B>()? as i64,
        ScalarWireType::Int32 => reader.read_i32::<B>()? as i64,
        ScalarWireType::Uint32 => reader.read_u32::<B>()? as i64,
    };
    Ok(value)
}
