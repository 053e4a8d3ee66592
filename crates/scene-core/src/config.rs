/// Per-mount configuration for the coin ring scene.
///
/// Supplied once by the caller and never mutated afterwards. Multipliers are
/// not validated; 1.0 is the tuned baseline for all three.
#[derive(Clone, Debug)]
pub struct RingConfig {
    /// Glyph rendered at the center of the coin.
    pub symbol: String,
    /// Characters sampled for the stream particles.
    pub alphabet: String,
    /// Scales initial particle speed and center attraction.
    pub speed: f32,
    /// Scales emission probability and batch size.
    pub density: f32,
    /// Scales ring rotation rates.
    pub spin: f32,
}

pub const DEFAULT_SYMBOL: &str = "\u{20bf}";
pub const DEFAULT_ALPHABET: &str = "010101100110";
pub const FALLBACK_ALPHABET: &str = "01";

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            alphabet: DEFAULT_ALPHABET.to_string(),
            speed: 1.0,
            density: 1.0,
            spin: 1.0,
        }
    }
}

impl RingConfig {
    /// Glyphs to sample per particle. An empty or whitespace-only alphabet
    /// falls back to plain binary rather than failing.
    pub fn glyphs(&self) -> Vec<char> {
        let trimmed = self.alphabet.trim();
        if trimmed.is_empty() {
            FALLBACK_ALPHABET.chars().collect()
        } else {
            trimmed.chars().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_baseline() {
        let cfg = RingConfig::default();
        assert_eq!(cfg.symbol, "\u{20bf}");
        assert_eq!(cfg.alphabet, "010101100110");
        assert_eq!(cfg.speed, 1.0);
        assert_eq!(cfg.density, 1.0);
        assert_eq!(cfg.spin, 1.0);
    }

    #[test]
    fn empty_alphabet_falls_back_to_binary() {
        let cfg = RingConfig {
            alphabet: "   ".to_string(),
            ..RingConfig::default()
        };
        assert_eq!(cfg.glyphs(), vec!['0', '1']);
    }

    #[test]
    fn alphabet_is_trimmed() {
        let cfg = RingConfig {
            alphabet: " AB ".to_string(),
            ..RingConfig::default()
        };
        assert_eq!(cfg.glyphs(), vec!['A', 'B']);
    }
}
