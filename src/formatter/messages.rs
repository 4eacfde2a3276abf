// Persian channel messages for each post type
use crate::analyzer::IndicatorSnapshot;
use crate::formatter::keywords::price_change_emoji;
use crate::model::{CoinSummary, NewsArticle, TrendingCoin};
use crate::utils::{format_money, truncate_chars};

pub const MARKET_LIMIT: usize = 10;
pub const NEWS_LIMIT: usize = 3;
pub const TRENDING_LIMIT: usize = 5;
pub const NEWS_BODY_CHARS: usize = 200;

pub fn market_update(coins: &[CoinSummary]) -> String {
    let mut message = String::from("📊 گزارش بازار ارزهای دیجیتال:\n\n");
    for coin in coins.iter().take(MARKET_LIMIT) {
        let change = coin.price_change_24h;
        message.push_str(&format!("🪙 {} (${}):\n", coin.name, coin.symbol.to_uppercase()));
        message.push_str(&format!("💵 قیمت: ${}\n", format_money(coin.current_price)));
        message.push_str(&format!(
            "📈 تغییر 24 ساعته: {} {:.2}%\n\n",
            price_change_emoji(change),
            change
        ));
    }
    message.push_str("#گزارش_بازار #ارز_دیجیتال");
    message
}

pub fn bitcoin_analysis(snapshot: &IndicatorSnapshot) -> String {
    let rsi_text = snapshot.rsi.map_or_else(|| "N/A".to_string(), |v| format!("{:.2}", v));
    let ma_text = snapshot
        .moving_average
        .map_or_else(|| "N/A".to_string(), |v| format!("${}", format_money(v)));

    let mut message = String::from("📊 تحلیل بیت‌کوین:\n\n");
    message.push_str(&format!("💰 قیمت فعلی: ${}\n", format_money(snapshot.price)));
    message.push_str(&format!("📈 RSI: {}\n", rsi_text));
    message.push_str(&format!("➖ میانگین متحرک 120 روزه: {}\n\n", ma_text));

    if let Some(ma) = snapshot.moving_average {
        if snapshot.price > ma {
            message.push_str("🔼 قیمت بالای میانگین متحرک 120 روزه است.\n");
        } else {
            message.push_str("🔽 قیمت زیر میانگین متحرک 120 روزه است.\n");
        }
    }

    if let Some(rsi) = snapshot.rsi {
        if rsi > 70.0 {
            message.push_str("⚠️ RSI در منطقه اشباع خرید است.\n");
        } else if rsi < 30.0 {
            message.push_str("⚠️ RSI در منطقه اشباع فروش است.\n");
        } else {
            message.push_str("✅ RSI در محدوده نرمال است.\n");
        }
    }

    message.push_str("\n#بیت_کوین #تحلیل_تکنیکال");
    message
}

pub fn news_article(article: &NewsArticle) -> String {
    let mut message = String::from("📰 اخبار ارزهای دیجیتال:\n\n");
    message.push_str(&format!("<b>{}</b>\n\n", article.title));
    message.push_str(&format!("{}...\n\n", truncate_chars(&article.body, NEWS_BODY_CHARS)));
    message.push_str(&format!("<a href='{}'>ادامه مطلب</a>\n\n", article.url));
    message.push_str("#اخبار_کریپتو");
    message
}

pub fn trending_coins(coins: &[TrendingCoin]) -> String {
    let mut message = String::from("🔥 ارزهای دیجیتال پرطرفدار:\n\n");
    for coin in coins.iter().take(TRENDING_LIMIT) {
        let rank = coin
            .market_cap_rank
            .map_or_else(|| "N/A".to_string(), |r| r.to_string());
        message.push_str(&format!("🪙 {} (${}):\n", coin.name, coin.symbol));
        message.push_str(&format!("🏅 رتبه در بازار: {}\n", rank));
        message.push_str(&format!("💹 امتیاز CoinGecko: {}\n\n", coin.score));
    }
    message.push_str("#ترند_کریپتو #ارزهای_محبوب");
    message
}
