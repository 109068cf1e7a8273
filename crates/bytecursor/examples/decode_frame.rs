//! Decodes a small sensor report with a [`ByteCursor`].
//!
//! Layout: `u8` version, big-endian `u16` sensor id, big-endian `f64`
//! timestamp, `u8` width of the sample count, the count itself
//! (little-endian), then that many little-endian `f32` samples and a trailing
//! label prefixed by a one-byte length.
#![allow(missing_docs)]

use bytecursor::{ByteCursor, Result};

#[derive(Debug)]
struct Report<'a> {
    version: u8,
    sensor: u16,
    timestamp: f64,
    samples: Vec<f32>,
    label: &'a [u8],
}

fn decode(bytes: &[u8]) -> Result<Report<'_>> {
    let mut cursor = ByteCursor::new(bytes);
    let version = cursor.read_u8()?;
    let sensor = cursor.read_u16()?;
    let timestamp = cursor.read_f64()?;
    let width = usize::from(cursor.read_u8()?);
    let count = cursor.read_uint_x(width)?;
    let samples = (0..count)
        .map(|_| cursor.read_f32_le())
        .collect::<Result<Vec<_>>>()?;
    let label_len = usize::from(cursor.read_u8()?);
    let label = cursor.read_buffer(label_len)?;
    Ok(Report {
        version,
        sensor,
        timestamp,
        samples,
        label,
    })
}

fn encode() -> Vec<u8> {
    let mut out = vec![1u8];
    out.extend_from_slice(&0x2a01u16.to_be_bytes());
    out.extend_from_slice(&1_700_000_000.5f64.to_be_bytes());
    out.push(2);
    out.extend_from_slice(&3u16.to_le_bytes());
    for sample in [20.5f32, 21.0, 21.25] {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out.push(7);
    out.extend_from_slice(b"kitchen");
    out
}

fn main() {
    let bytes = encode();
    match decode(&bytes) {
        Ok(report) => {
            println!("version   {}", report.version);
            println!("sensor    {:#06x}", report.sensor);
            println!("timestamp {}", report.timestamp);
            println!("samples   {:?}", report.samples);
            println!("label     {}", String::from_utf8_lossy(report.label));
        }
        Err(err) => eprintln!("decode failed: {err}"),
    }

    // Cutting the report short surfaces the position that could not be read.
    if let Err(err) = decode(&bytes[..bytes.len() - 3]) {
        println!("truncated: {err}");
    }
}
