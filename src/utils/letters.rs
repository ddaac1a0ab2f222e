use rand::Rng;

/// Letters used both for words and for filler cells.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Draw a filler letter, uniformly from A-Z.
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())] as char
}

pub fn is_grid_letter(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

/// Trim and uppercase a word. Returns `None` if anything other than
/// ASCII letters remains.
pub fn normalize_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_ascii_uppercase();
    if word.is_empty() || !word.chars().all(is_grid_letter) {
        return None;
    }
    Some(word)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_random_letter_is_uppercase() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert!(is_grid_letter(random_letter(&mut rng)));
        }
    }

    #[test]
    fn test_random_letter_covers_alphabet() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = [false; 26];
        for _ in 0..5_000 {
            let ch = random_letter(&mut rng);
            seen[(ch as u8 - b'A') as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  kiwi ").as_deref(), Some("KIWI"));
        assert_eq!(normalize_word("ice-cream"), None);
        assert_eq!(normalize_word("CAFÉ"), None);
        assert_eq!(normalize_word("   "), None);
    }
}
