// src/mathtext.rs

// Minimal math-text support: `$...$` segments are rewritten into plain Unicode
// so they can go through the regular text renderer. Covers Greek letters,
// a handful of symbols, and single-level super/subscripts.

use crate::font_config::MathTextMode;

const GREEK: &[(&str, char)] = &[
    ("alpha", 'α'),
    ("beta", 'β'),
    ("gamma", 'γ'),
    ("delta", 'δ'),
    ("epsilon", 'ε'),
    ("zeta", 'ζ'),
    ("eta", 'η'),
    ("theta", 'θ'),
    ("kappa", 'κ'),
    ("lambda", 'λ'),
    ("mu", 'μ'),
    ("nu", 'ν'),
    ("xi", 'ξ'),
    ("pi", 'π'),
    ("rho", 'ρ'),
    ("sigma", 'σ'),
    ("tau", 'τ'),
    ("phi", 'φ'),
    ("chi", 'χ'),
    ("psi", 'ψ'),
    ("omega", 'ω'),
    ("Gamma", 'Γ'),
    ("Delta", 'Δ'),
    ("Theta", 'Θ'),
    ("Lambda", 'Λ'),
    ("Pi", 'Π'),
    ("Sigma", 'Σ'),
    ("Phi", 'Φ'),
    ("Psi", 'Ψ'),
    ("Omega", 'Ω'),
    ("pm", '±'),
    ("times", '×'),
    ("cdot", '·'),
    ("circ", '°'),
    ("infty", '∞'),
    ("approx", '≈'),
    ("leq", '≤'),
    ("geq", '≥'),
    ("neq", '≠'),
];

fn superscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        'n' => 'ⁿ',
        'i' => 'ⁱ',
        _ => return None,
    })
}

fn subscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        _ => return None,
    })
}

/// Rewrites the `$...$` segments of `text` for display.
///
/// Text outside dollar signs is returned unchanged. An unmatched `$` is kept
/// literally. `\$` outside math is an escaped dollar.
pub fn render_mathtext(text: &str, mode: MathTextMode) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = find_unescaped_dollar(rest) {
        out.push_str(&rest[..start].replace("\\$", "$"));
        let after = &rest[start + 1..];
        match after.find('$') {
            Some(end) => {
                let converted = convert_math(&after[..end]);
                match mode {
                    MathTextMode::Regular => out.push_str(&converted),
                    MathTextMode::Italic => out.extend(converted.chars().map(math_italic)),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push('$');
                rest = after;
            }
        }
    }
    out.push_str(&rest.replace("\\$", "$"));
    out
}

/// Maps ASCII letters to the Unicode mathematical italic block.
fn math_italic(c: char) -> char {
    let mapped = match c {
        // Planck constant sits outside the block.
        'h' => Some('\u{210E}'),
        'a'..='z' => char::from_u32(0x1D44E + (c as u32 - 'a' as u32)),
        'A'..='Z' => char::from_u32(0x1D434 + (c as u32 - 'A' as u32)),
        _ => None,
    };
    mapped.unwrap_or(c)
}

fn find_unescaped_dollar(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (0..bytes.len()).find(|&i| bytes[i] == b'$' && (i == 0 || bytes[i - 1] != b'\\'))
}

fn convert_math(math: &str) -> String {
    let mut out = String::with_capacity(math.len());
    let chars: Vec<char> = math.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                let name: String = chars[i + 1..]
                    .iter()
                    .take_while(|c| c.is_ascii_alphabetic())
                    .collect();
                if name.is_empty() {
                    // Escaped punctuation such as `\%` or `\,`.
                    if let Some(&next) = chars.get(i + 1) {
                        if next != ',' && next != ';' && next != '!' {
                            out.push(next);
                        }
                    }
                    i += 2;
                    continue;
                }
                match GREEK.iter().find(|(n, _)| *n == name) {
                    Some((_, c)) => out.push(*c),
                    None => out.push_str(&name),
                }
                i += 1 + name.chars().count();
            }
            marker @ ('^' | '_') => {
                let (group, consumed) = script_group(&chars[i + 1..]);
                let map = if marker == '^' { superscript } else { subscript };
                let mapped: Option<String> = group.chars().map(map).collect();
                match mapped {
                    Some(s) => out.push_str(&s),
                    None => {
                        out.push(marker);
                        out.push_str(&group);
                    }
                }
                i += 1 + consumed;
            }
            '{' | '}' => i += 1,
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Returns the script argument (`{...}` or a single char) and how many chars it used.
fn script_group(chars: &[char]) -> (String, usize) {
    match chars.first() {
        Some('{') => {
            let body: String = chars[1..].iter().take_while(|&&c| c != '}').collect();
            let len = body.chars().count();
            let consumed = len + if chars.len() > len + 1 { 2 } else { 1 };
            (body, consumed)
        }
        Some(&c) => (c.to_string(), 1),
        None => (String::new(), 0),
    }
}
