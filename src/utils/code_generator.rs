use rand::Rng;

const VOUCHER_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const VOUCHER_CODE_LEN: usize = 10;

/// Generate a 10-character uppercase alphanumeric voucher code.
///
/// Codes are drawn uniformly; a unique index on `vouchers.code` is the
/// only collision defense.
pub fn generate_voucher_code() -> String {
    let mut rng = rand::thread_rng();
    (0..VOUCHER_CODE_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..VOUCHER_ALPHABET.len());
            VOUCHER_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voucher_code_shape() {
        let code = generate_voucher_code();
        assert_eq!(code.len(), 10);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_voucher_codes_vary() {
        // Collisions are possible in principle; this mainly guards against
        // a constant output.
        let codes: std::collections::HashSet<String> =
            (0..32).map(|_| generate_voucher_code()).collect();
        assert!(codes.len() > 1);
    }
}
