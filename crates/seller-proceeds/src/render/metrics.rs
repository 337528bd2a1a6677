//! Advance widths for the standard Helvetica face, in 1/1000 em.

const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const FALLBACK_WIDTH: u16 = 556;

fn glyph_width(ch: char) -> u16 {
    match ch {
        ' '..='~' => HELVETICA_ASCII[ch as usize - 0x20],
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` in points at `font_size`. Oblique shares these metrics;
/// bold text is slightly wider and only used where exact width is not needed.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(glyph_width(ch))).sum();
    units as f32 * font_size / 1000.0
}

/// Greedy word wrap to `max_width` points. Words longer than a line are kept
/// whole on their own line.
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    wrap_with(text, max_width, |line| text_width(line, font_size))
}

/// Greedy word wrap where `measure` gives the width of a candidate line.
pub fn wrap_with<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_share_a_width() {
        assert_eq!(text_width("0", 10.0), text_width("9", 10.0));
        assert!((text_width("$1,000.00", 10.0) - 44.48).abs() < 0.01);
    }

    #[test]
    fn table_covers_printable_ascii() {
        assert_eq!(glyph_width(' '), 278);
        assert_eq!(glyph_width('@'), 1015);
        assert_eq!(glyph_width('W'), 944);
        assert_eq!(glyph_width('~'), 584);
        assert_eq!(glyph_width('é'), FALLBACK_WIDTH);
    }

    #[test]
    fn wrap_respects_width() {
        let text = "The above figures are approximate and are to be used as a guide only.";
        let lines = wrap_text(text, 9.0, 150.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 9.0) <= 150.0, "line too wide: {line}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_with_character_counts() {
        let lines = wrap_with("aaa bbb ccc dddd", 7.0, |line| line.chars().count() as f32);
        assert_eq!(lines, vec!["aaa bbb", "ccc", "dddd"]);
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        let lines = wrap_text("Supercalifragilistic", 9.0, 10.0);
        assert_eq!(lines, vec!["Supercalifragilistic"]);
        assert!(wrap_text("   ", 9.0, 100.0).is_empty());
    }
}
