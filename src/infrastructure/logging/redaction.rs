/// Number of leading characters of a token kept visible in logs.
const VISIBLE_PREFIX: usize = 4;

/// Mask a token for logging, keeping a short prefix so entries can still be
/// told apart: `abcd****`. Tokens no longer than the prefix are fully masked.
pub fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(VISIBLE_PREFIX).collect();
    if token.chars().count() <= VISIBLE_PREFIX {
        return "****".to_string();
    }
    format!("{visible}****")
}
