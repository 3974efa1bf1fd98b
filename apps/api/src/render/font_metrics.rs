//! Static font metrics for the built-in PDF font.
//!
//! Character widths are in em units (relative to font size), taken from the
//! Helvetica AFM tables, so line-wrap decisions match what the PDF viewer
//! will actually draw. The table covers ASCII 0x20..=0x7E (95 printable
//! characters); index = (char as usize) - 32. Non-ASCII falls back to an
//! average width, which is tolerable for guidance prose.

/// Static character-width table for one font face.
pub struct FontMetricTable {
    widths: [f32; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Greedy word-wrap at `max_width_em`. A single word wider than the limit
    /// gets a line of its own rather than being split mid-word.
    pub fn wrap_text(&self, text: &str, max_width_em: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in text.split_whitespace() {
            let word_width = self.measure_str(word);

            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + self.space_width + word_width > max_width_em {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += self.space_width + word_width;
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Helvetica — the face embedded by every conforming PDF reader.
/// Widths are the AFM values divided by 1000.
pub static HELVETICA: FontMetricTable = FontMetricTable {
    #[rustfmt::skip]
    widths: [
        // sp     !      "      #      $      %      &      '      (      )      *      +      ,      -      .      /
        0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278,
        // 0      1      2      3      4      5      6      7      8      9
        0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
        // :      ;      <      =      >      ?      @
        0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
        // A      B      C      D      E      F      G      H      I      J      K      L      M
        0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
        // N      O      P      Q      R      S      T      U      V      W      X      Y      Z
        0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
        // [      \      ]      ^      _      `
        0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
        // a      b      c      d      e      f      g      h      i      j      k      l      m
        0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
        // n      o      p      q      r      s      t      u      v      w      x      y      z
        0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
        // {      |      }      ~
        0.334, 0.260, 0.334, 0.584,
    ],
    average_char_width: 0.513,
    space_width: 0.278,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        assert_eq!(HELVETICA.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_str_matches_afm_sum() {
        // "Asha" = A(0.667) + s(0.500) + h(0.556) + a(0.556) = 2.279
        let width = HELVETICA.measure_str("Asha");
        assert!((width - 2.279).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_measure_str_non_ascii_falls_back() {
        let width = HELVETICA.measure_str("é");
        assert!((width - HELVETICA.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = HELVETICA.wrap_text("Career guidance", 40.0);
        assert_eq!(lines, vec!["Career guidance"]);
    }

    #[test]
    fn test_wrap_long_text_breaks_lines() {
        let text = "word ".repeat(60);
        let lines = HELVETICA.wrap_text(&text, 10.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                HELVETICA.measure_str(line) <= 10.0 + 1e-3,
                "line too wide: {line}"
            );
        }
    }

    #[test]
    fn test_wrap_preserves_every_word() {
        let text = "Focus on mathematics olympiads and weekend robotics clubs this year";
        let lines = HELVETICA.wrap_text(text, 12.0);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_oversized_word_gets_own_line() {
        let text = "a pneumonoultramicroscopicsilicovolcanoconiosis b";
        let lines = HELVETICA.wrap_text(text, 5.0);
        assert!(lines.iter().any(|l| l.starts_with("pneumono")));
    }

    #[test]
    fn test_wrap_empty_text_is_empty() {
        assert!(HELVETICA.wrap_text("   ", 10.0).is_empty());
    }
}
