pub mod validators;

pub use validators::{is_alphanumeric, is_valid_url};

/// Base-36 alphabet used for generated short codes
pub const CODE_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    // 从 base-36 字符集中随机选择
    iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
        .take(length)
        .collect()
}
