use std::vec::Vec;

use quickcheck_macros::quickcheck;

use crate::ByteCursor;

/// Property: peeking at relative offset 0 yields what the matching read then
/// returns; the peek does not move the cursor and the read moves it by the
/// value width.
#[quickcheck]
fn peek_then_read_agree(bytes: Vec<u8>, prefix: u8) -> bool {
    let mut cursor = ByteCursor::new(&bytes);
    let prefix = usize::from(prefix).min(bytes.len());
    if cursor.read_buffer(prefix).is_err() {
        return false;
    }

    let mut ok = true;
    let mut probe = cursor.clone();
    if let Ok(peeked) = probe.peek_u8(0) {
        ok &= probe.offset() == prefix;
        ok &= probe.read_u8() == Ok(peeked) && probe.offset() == prefix + 1;
    }
    let mut probe = cursor.clone();
    if let Ok(peeked) = probe.peek_u16(0) {
        ok &= probe.offset() == prefix;
        ok &= probe.read_u16_le() == Ok(peeked) && probe.offset() == prefix + 2;
    }
    let mut probe = cursor.clone();
    if let Ok(peeked) = probe.peek_u32(0) {
        ok &= probe.offset() == prefix;
        ok &= probe.read_u32_le() == Ok(peeked) && probe.offset() == prefix + 4;
    }
    for size in 0..6 {
        let mut probe = cursor.clone();
        if let Ok(peeked) = probe.peek_uint_x(size, 0) {
            ok &= probe.read_uint_x(size) == Ok(peeked);
        }
    }
    ok && cursor.offset() == prefix && cursor.read_buffer(0).is_ok()
}

#[quickcheck]
fn big_and_little_endian_are_byte_reversals(value: u32) -> bool {
    let be = value.to_be_bytes();
    let le = value.to_le_bytes();
    ByteCursor::new(&be).read_u32() == Ok(value)
        && ByteCursor::new(&le).read_u32_le() == Ok(value)
        && ByteCursor::new(&be[2..]).read_u16() == ByteCursor::new(&le[..2]).read_u16_le()
}

#[quickcheck]
fn float_orders_match_bit_for_bit(bits: u32) -> bool {
    let be = bits.to_be_bytes();
    let mut reversed = be;
    reversed.reverse();
    let a = ByteCursor::new(&be).read_f32().map(f32::to_bits);
    let b = ByteCursor::new(&reversed).read_f32_le().map(f32::to_bits);
    a == Ok(bits) && a == b
}

#[quickcheck]
fn double_is_big_endian_bit_for_bit(bits: u64) -> bool {
    let be = bits.to_be_bytes();
    ByteCursor::new(&be).read_f64().map(f64::to_bits) == Ok(bits)
}

#[quickcheck]
fn peek_rel_matches_sequential_reads(bytes: Vec<u8>) -> bool {
    let cursor = ByteCursor::new(&bytes);
    let mut reader = cursor.clone();
    (0..bytes.len()).all(|rel| cursor.peek_u8(rel) == reader.read_u8())
        && cursor.peek_u8(bytes.len()).is_err()
        && reader.has_ended()
}
