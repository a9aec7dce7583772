pub mod bitpack;
pub mod mask;

pub use bitpack::{pack_bits, packed_len, unpack_bits};
pub use mask::{build_mask, is_lit};
