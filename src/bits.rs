//! Bit packing for the mirrored-letter codec.
//!
//! Messages are hidden one bit at a time, so encoding starts by expanding
//! bytes into bits (most significant bit first) and decoding ends by packing
//! them back.

/// Expands a byte message into its bits, most significant bit first.
pub fn to_bits(message: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(message.len() * 8);
    for byte in message {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 0x01);
        }
    }
    bits
}

/// Packs bits (most significant first) back into bytes.
///
/// The output buffer is sized to `bits.len() / 8` up front: an incomplete
/// trailing group of fewer than 8 bits is dropped, and slots that never
/// receive a full byte stay zero. This is the decoder's lossy-truncation
/// contract, not an error case.
pub fn from_bits(bits: &[u8]) -> Vec<u8> {
    let mut message = vec![0u8; bits.len() / 8];
    for (slot, group) in bits.chunks_exact(8).enumerate() {
        let mut byte = 0u8;
        for bit in group {
            byte = (byte << 1) | (bit & 0x01);
        }
        message[slot] = byte;
    }
    message
}
