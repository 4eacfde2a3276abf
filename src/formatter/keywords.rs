/// Persian keywords that get an emoji in front of every occurrence, in replacement order.
pub const KEYWORD_EMOJIS: &[(&str, &str)] = &[
    ("بیت‌کوین", "💰"),
    ("اتریوم", "🔷"),
    ("اخبار", "📰"),
    ("هشدار", "🚨"),
    ("آموزش", "📚"),
    ("معامله", "📈"),
    ("سرگرمی", "😄"),
];

/// Final pass over a whole message: `keyword` becomes `emoji keyword`.
pub fn add_emojis(text: &str) -> String {
    let mut result = text.to_string();
    for (keyword, emoji) in KEYWORD_EMOJIS {
        if result.contains(keyword) {
            result = result.replace(keyword, &format!("{} {}", emoji, keyword));
        }
    }
    result
}

/// Color dot for a 24h change in percent. Boundaries are neutral.
pub fn price_change_emoji(change: f64) -> &'static str {
    if change < -2.0 {
        "🔴"
    } else if change <= 2.0 {
        "⚪️"
    } else {
        "🟢"
    }
}
