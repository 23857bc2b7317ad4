/// Render a statistic with up to six decimals, trimming trailing zeros but keeping one.
///
/// NaN renders as `NaN`, matching how undefined statistics are reported.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let mut text = format!("{value:.6}");
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    if text == "-0.0" {
        text = "0.0".to_string();
    }
    text
}

/// Right-align `text` in a column of `width` display characters.
pub fn pad_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", " ".repeat(width.saturating_sub(len)), text)
}

/// Left-align `text` in a column of `width` display characters.
pub fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
