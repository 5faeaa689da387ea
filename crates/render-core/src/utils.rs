use rollbook_style::FontWeight;

/// Get PDF base font name with weight suffix
pub fn get_styled_font_name(base_name: &str, weight: FontWeight) -> String {
    let mut name = base_name.to_string();
    if weight.is_bold() {
        name.push_str("-Bold");
    }
    name
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Characters WinAnsiEncoding places in 0x80..=0x9F, where Latin-1 has C1 controls.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201C}', 0x93),
    ('\u{201D}', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

fn win_ansi_byte(c: char) -> Option<u8> {
    match u32::from(c) {
        0x80..=0x9F => None,
        code @ 0..=0xFF => u8::try_from(code).ok(),
        _ => WIN_ANSI_HIGH.iter().find(|(ch, _)| *ch == c).map(|(_, byte)| *byte),
    }
}

/// Encodes text for a WinAnsi simple font. Characters the encoding lacks,
/// including the C1 control range, become `?`.
/// Returns the bytes and whether any character had to be replaced.
pub fn to_win_ansi(s: &str) -> (Vec<u8>, bool) {
    let mut lossy = false;
    let bytes = s
        .chars()
        .map(|c| {
            win_ansi_byte(c).unwrap_or_else(|| {
                lossy = true;
                b'?'
            })
        })
        .collect();
    (bytes, lossy)
}
