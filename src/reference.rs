//! 자주 쓰는 환산값을 보여주는 정적 참고표. 변환 엔진과는 독립적이다.

/// 참고표의 한 행.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub category: &'static str,
    pub conversion: &'static str,
}

pub const REFERENCE_TABLE: &[ReferenceEntry] = &[
    ReferenceEntry { category: "Length", conversion: "1 meter = 3.281 feet" },
    ReferenceEntry { category: "Length", conversion: "1 kilometer = 0.621 miles" },
    ReferenceEntry { category: "Weight", conversion: "1 kilogram = 2.205 pounds" },
    ReferenceEntry { category: "Weight", conversion: "1 gram = 0.035 ounces" },
    ReferenceEntry { category: "Temperature", conversion: "0°C = 32°F" },
    ReferenceEntry { category: "Temperature", conversion: "100°C = 212°F" },
    ReferenceEntry { category: "Volume", conversion: "1 liter = 4.227 cups" },
    ReferenceEntry { category: "Volume", conversion: "1 gallon = 3.785 liters" },
];

/// 분류 이름(대소문자 무시)으로 행을 거른다.
pub fn entries_for(category: &str) -> Vec<ReferenceEntry> {
    let wanted = category.trim();
    REFERENCE_TABLE
        .iter()
        .copied()
        .filter(|e| e.category.eq_ignore_ascii_case(wanted))
        .collect()
}

/// 두 열 표 형태의 문자열을 만든다.
pub fn render_table(entries: &[ReferenceEntry]) -> String {
    const HEADER: (&str, &str) = ("Category", "Conversion");
    let width = entries
        .iter()
        .map(|e| e.category.chars().count())
        .chain(std::iter::once(HEADER.0.len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<width$}  {}\n", HEADER.0, HEADER.1);
    out.push_str(&format!("{}  {}\n", "-".repeat(width), "-".repeat(HEADER.1.len())));
    for e in entries {
        out.push_str(&format!("{:<width$}  {}\n", e.category, e.conversion));
    }
    out
}
