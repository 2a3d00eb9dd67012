//! Precision-5 polyline codec.
//!
//! Each coordinate axis is scaled by 1e5, rounded to an integer, and stored
//! as the delta from the previous point. A delta is zig-zag folded (left
//! shift, inverted when negative) and written in 5-bit little-endian chunks,
//! each offset by 63 into printable ASCII, with `0x20` flagging that another
//! chunk follows.

use crate::models::LatLon;
use thiserror::Error;

const FACTOR: f64 = 1e5;
const CHUNK_MASK: i64 = 0x1f;
const CONTINUATION: i64 = 0x20;
const OFFSET: u8 = 63;
/// A 64-bit value spans at most 13 five-bit chunks.
const MAX_SHIFT: u32 = 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolylineError {
    #[error("invalid polyline byte {byte:#04x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },

    #[error("polyline ends in the middle of a value at position {position}")]
    Truncated { position: usize },

    #[error("polyline value overflows at position {position}")]
    Overflow { position: usize },
}

/// Decode an encoded polyline into `(lat, lon)` points.
///
/// The empty string decodes to an empty path.
pub fn decode(encoded: &str) -> Result<Vec<LatLon>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;
    let mut path = Vec::new();

    while index < bytes.len() {
        let start = index;
        lat = lat
            .checked_add(next_delta(bytes, &mut index)?)
            .ok_or(PolylineError::Overflow { position: start })?;
        let start = index;
        lon = lon
            .checked_add(next_delta(bytes, &mut index)?)
            .ok_or(PolylineError::Overflow { position: start })?;
        path.push(LatLon(lat as f64 / FACTOR, lon as f64 / FACTOR));
    }

    Ok(path)
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let position = *index;
        let byte = *bytes
            .get(position)
            .ok_or(PolylineError::Truncated { position })?;
        if !(OFFSET..=OFFSET + 63).contains(&byte) {
            return Err(PolylineError::InvalidCharacter { position, byte });
        }
        if shift > MAX_SHIFT {
            return Err(PolylineError::Overflow { position });
        }
        *index += 1;

        let chunk = i64::from(byte - OFFSET);
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        if chunk & CONTINUATION == 0 {
            break;
        }
    }

    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

/// Encode `(lat, lon)` points as a polyline string.
pub fn encode(path: &[LatLon]) -> String {
    let mut out = String::with_capacity(path.len() * 8);
    let mut prev_lat: i64 = 0;
    let mut prev_lon: i64 = 0;

    for point in path {
        let lat = scale(point.lat());
        let lon = scale(point.lon());
        push_delta(&mut out, lat - prev_lat);
        push_delta(&mut out, lon - prev_lon);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

fn scale(coordinate: f64) -> i64 {
    (coordinate * FACTOR).round() as i64
}

fn push_delta(out: &mut String, delta: i64) {
    let folded = if delta < 0 { !(delta << 1) } else { delta << 1 };
    let mut value = folded as u64;
    while value >= CONTINUATION as u64 {
        out.push(char::from(
            ((CONTINUATION as u64 | (value & CHUNK_MASK as u64)) as u8) + OFFSET,
        ));
        value >>= 5;
    }
    out.push(char::from(value as u8 + OFFSET));
}
