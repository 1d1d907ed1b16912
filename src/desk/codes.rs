use rand::Rng;

/// Random six digit code the recipient shows at the desk.
pub fn generate_withdrawal_code() -> String {
    rand::rng().random_range(100_000..=999_999).to_string()
}

/// Draws codes until one is not in `taken`, giving up after `attempts` draws.
pub fn unused_withdrawal_code(taken: &[String], attempts: usize) -> Option<String> {
    (0..attempts)
        .map(|_| generate_withdrawal_code())
        .find(|code| !taken.contains(code))
}
