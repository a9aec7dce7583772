/// Bytes needed to hold `n` packed bits.
pub fn packed_len(n: usize) -> usize {
    (n + 7) / 8
}

/// Packs flags 8 per byte, least significant bit first. Unused high bits of
/// the last byte stay zero.
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut packed: Vec<u8> = vec![0; packed_len(bits.len())];

    for (i, &lit) in bits.iter().enumerate() {
        packed[i / 8] |= (lit as u8) << (i % 8);
    }

    return packed;
}

/// Inverse of [`pack_bits`]: reads the first `n` bits back. Missing bytes
/// read as zero.
pub fn unpack_bits(packed: &[u8], n: usize) -> Vec<bool> {
    (0..n)
        .map(|i| packed.get(i / 8).map_or(false, |b| (b >> (i % 8)) & 0x1 == 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(n: usize) -> Vec<bool> {
        (0..n).map(|i| i % 3 == 0 || i % 7 == 2).collect()
    }

    #[test]
    fn test_round_trip() {
        for n in [0, 1, 7, 8, 9, 64] {
            let bits = pattern(n);
            let packed = pack_bits(&bits);
            assert_eq!(packed.len(), packed_len(n), "n = {}", n);
            assert_eq!(unpack_bits(&packed, n), bits, "n = {}", n);
        }
    }

    #[test]
    fn test_lsb_first() {
        let mut bits = vec![false; 8];
        bits[0] = true;
        assert_eq!(pack_bits(&bits), vec![0x01]);

        bits[0] = false;
        bits[7] = true;
        assert_eq!(pack_bits(&bits), vec![0x80]);

        let bits = [true, true, false, true, false, false, false, false, true];
        assert_eq!(pack_bits(&bits), vec![0x0b, 0x01]);
    }

    #[test]
    fn test_padding_is_zero() {
        let packed = pack_bits(&vec![true; 100]);
        assert_eq!(packed.len(), 13);
        assert!(packed[..12].iter().all(|b| *b == 0xff));
        assert_eq!(packed[12], 0x0f);
    }

    #[test]
    fn test_empty() {
        assert!(pack_bits(&[]).is_empty());
        assert!(unpack_bits(&[], 0).is_empty());
    }
}
