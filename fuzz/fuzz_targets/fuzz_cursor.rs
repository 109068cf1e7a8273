#![no_main]
use arbitrary::Arbitrary;
use bytecursor::ByteCursor;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    PeekU8(usize),
    PeekU16(usize),
    PeekU32(usize),
    PeekUIntX(usize, usize),
    ReadU8,
    ReadU16,
    ReadU16Le,
    ReadU32,
    ReadU32Le,
    ReadF32,
    ReadF32Le,
    ReadF64,
    ReadUIntX(usize),
    ReadBuffer(usize),
}

#[derive(Arbitrary, Debug)]
struct Input {
    bytes: Vec<u8>,
    ops: Vec<Op>,
}

/// Width the dispatching accessors settle on for `size`.
fn uint_x_width(size: usize) -> usize {
    match size {
        2 | 4 => size,
        _ => 1,
    }
}

fuzz_target!(|input: Input| {
    let Input { bytes, ops } = input;
    let mut cursor = ByteCursor::new(&bytes);

    for op in ops {
        let before = cursor.offset();
        let advanced_by = match op {
            Op::PeekU8(rel) => {
                let _ = cursor.peek_u8(rel);
                None
            }
            Op::PeekU16(rel) => {
                let _ = cursor.peek_u16(rel);
                None
            }
            Op::PeekU32(rel) => {
                let _ = cursor.peek_u32(rel);
                None
            }
            Op::PeekUIntX(size, rel) => {
                let peeked = cursor.peek_uint_x(size, rel);
                if rel == 0 {
                    let mut probe = cursor.clone();
                    assert_eq!(peeked, probe.read_uint_x(size));
                }
                None
            }
            Op::ReadU8 => Some((cursor.read_u8().is_ok(), 1)),
            Op::ReadU16 => Some((cursor.read_u16().is_ok(), 2)),
            Op::ReadU16Le => Some((cursor.read_u16_le().is_ok(), 2)),
            Op::ReadU32 => Some((cursor.read_u32().is_ok(), 4)),
            Op::ReadU32Le => Some((cursor.read_u32_le().is_ok(), 4)),
            Op::ReadF32 => Some((cursor.read_f32().is_ok(), 4)),
            Op::ReadF32Le => Some((cursor.read_f32_le().is_ok(), 4)),
            Op::ReadF64 => Some((cursor.read_f64().is_ok(), 8)),
            Op::ReadUIntX(size) => Some((cursor.read_uint_x(size).is_ok(), uint_x_width(size))),
            Op::ReadBuffer(len) => match cursor.read_buffer(len) {
                Ok(slice) => {
                    assert_eq!(slice.len(), len);
                    Some((true, len))
                }
                Err(err) => {
                    assert_eq!(err.offset(), before);
                    assert_eq!(err.length(), len);
                    assert_eq!(err.buffer_len(), bytes.len());
                    Some((false, len))
                }
            },
        };

        match advanced_by {
            None => assert_eq!(cursor.offset(), before),
            Some((true, width)) => assert_eq!(cursor.offset(), before + width),
            Some((false, width)) => {
                assert!(before.saturating_add(width) > bytes.len());
                assert_eq!(cursor.offset(), before);
            }
        }
        cursor.assert_invariants();
    }
});
