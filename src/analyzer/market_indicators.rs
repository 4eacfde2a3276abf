use crate::model::PricePoint;
use chrono::{DateTime, Utc};

pub const RSI_WINDOW: usize = 14;
pub const MA_WINDOW: usize = 120;

/// Latest price with the tail values of RSI(14) and SMA(120).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSnapshot {
    pub as_of: DateTime<Utc>,
    pub price: f64,
    pub rsi: Option<f64>,
    pub moving_average: Option<f64>,
}

pub struct MarketAnalyzer;

impl MarketAnalyzer {
    /// RSI with Wilder smoothing (alpha = 1/window), one value per input price.
    /// The first delta counts as zero; values before index `window - 1` are `None`.
    pub fn compute_rsi(prices: &[f64], window: usize) -> Vec<Option<f64>> {
        if window == 0 {
            return vec![None; prices.len()];
        }

        let alpha = 1.0 / window as f64;
        let mut avg_gain = 0.0;
        let mut avg_loss = 0.0;
        let mut out = Vec::with_capacity(prices.len());

        for (i, price) in prices.iter().enumerate() {
            let delta = if i == 0 { 0.0 } else { price - prices[i - 1] };
            let gain = delta.max(0.0);
            let loss = (-delta).max(0.0);

            if i == 0 {
                avg_gain = gain;
                avg_loss = loss;
            } else {
                avg_gain = (1.0 - alpha) * avg_gain + alpha * gain;
                avg_loss = (1.0 - alpha) * avg_loss + alpha * loss;
            }

            if i + 1 < window {
                out.push(None);
                continue;
            }

            let rsi = if avg_loss == 0.0 {
                100.0
            } else {
                let rs = avg_gain / avg_loss;
                100.0 - (100.0 / (1.0 + rs))
            };
            out.push(Some(rsi));
        }

        out
    }

    /// Simple moving average aligned with the input; `None` until `window` points exist.
    pub fn moving_average(data: &[f64], window: usize) -> Vec<Option<f64>> {
        if window == 0 || data.len() < window {
            return vec![None; data.len()];
        }

        let mut out = vec![None; window - 1];
        out.extend(
            data.windows(window)
                .map(|w| Some(w.iter().sum::<f64>() / window as f64)),
        );
        out
    }

    /// Tail values of both indicators. `None` for an empty series.
    pub fn snapshot(history: &[PricePoint]) -> Option<IndicatorSnapshot> {
        let last = history.last()?;
        let prices: Vec<f64> = history.iter().map(|p| p.price).collect();

        let rsi = Self::compute_rsi(&prices, RSI_WINDOW).last().copied().flatten();
        let moving_average = Self::moving_average(&prices, MA_WINDOW)
            .last()
            .copied()
            .flatten();

        Some(IndicatorSnapshot {
            as_of: last.timestamp,
            price: last.price,
            rsi,
            moving_average,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn series(prices: &[f64]) -> Vec<PricePoint> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                timestamp: start + Duration::days(i as i64),
                price,
            })
            .collect()
    }

    fn zigzag(len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 15.0 + (i % 5) as f64)
            .collect()
    }

    #[test]
    fn rsi_is_undefined_before_window() {
        let rsi = MarketAnalyzer::compute_rsi(&zigzag(20), RSI_WINDOW);
        assert_eq!(rsi.len(), 20);
        assert!(rsi[..13].iter().all(Option::is_none));
        assert!(rsi[13..].iter().all(Option::is_some));
    }

    #[test]
    fn rsi_stays_within_bounds() {
        for len in [14, 30, 121, 400] {
            for value in MarketAnalyzer::compute_rsi(&zigzag(len), RSI_WINDOW).into_iter().flatten() {
                assert!((0.0..=100.0).contains(&value), "rsi {} out of range", value);
            }
        }
    }

    #[test]
    fn rsi_extremes_for_monotonic_series() {
        let rising: Vec<f64> = (0..30).map(|i| 10.0 + i as f64).collect();
        let falling: Vec<f64> = rising.iter().rev().copied().collect();

        assert_eq!(MarketAnalyzer::compute_rsi(&rising, RSI_WINDOW).last(), Some(&Some(100.0)));
        let low = MarketAnalyzer::compute_rsi(&falling, RSI_WINDOW).last().copied().flatten().unwrap();
        assert!(low.abs() < 1e-9);
    }

    #[test]
    fn rsi_matches_wilder_recurrence() {
        // 14 points: one +1 move then flat, alpha = 1/14.
        let mut prices = vec![10.0, 11.0];
        prices.extend(std::iter::repeat(11.0).take(12));
        let rsi = MarketAnalyzer::compute_rsi(&prices, RSI_WINDOW);
        // avg_loss stays 0, so RSI saturates at 100.
        assert_eq!(rsi[13], Some(100.0));

        prices.push(10.5);
        let rsi = MarketAnalyzer::compute_rsi(&prices, RSI_WINDOW);
        let alpha: f64 = 1.0 / 14.0;
        let gain = alpha * (1.0 - alpha).powi(13);
        let loss = alpha * 0.5;
        let expected = 100.0 - 100.0 / (1.0 + gain / loss);
        assert!((rsi[14].unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn moving_average_uses_trailing_window() {
        let data = zigzag(150);
        let ma = MarketAnalyzer::moving_average(&data, MA_WINDOW);
        assert_eq!(ma.len(), data.len());
        assert!(ma[118].is_none());

        for idx in 119..data.len() {
            let expected = data[idx + 1 - MA_WINDOW..=idx].iter().sum::<f64>() / MA_WINDOW as f64;
            assert!((ma[idx].unwrap() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn moving_average_short_series_is_undefined() {
        assert!(MarketAnalyzer::moving_average(&[1.0, 2.0], MA_WINDOW).iter().all(Option::is_none));
    }

    #[test]
    fn snapshot_takes_tail_values() {
        let prices = zigzag(121);
        let snap = MarketAnalyzer::snapshot(&series(&prices)).unwrap();
        assert_eq!(snap.price, prices[120]);
        assert_eq!(snap.as_of, series(&prices)[120].timestamp);
        assert!(snap.rsi.is_some());
        let expected_ma = prices[1..].iter().sum::<f64>() / 120.0;
        assert!((snap.moving_average.unwrap() - expected_ma).abs() < 1e-9);
    }

    #[test]
    fn snapshot_of_empty_series_is_none() {
        assert!(MarketAnalyzer::snapshot(&[]).is_none());
    }

    #[test]
    fn snapshot_without_enough_history_lacks_ma() {
        let snap = MarketAnalyzer::snapshot(&series(&zigzag(30))).unwrap();
        assert!(snap.rsi.is_some());
        assert!(snap.moving_average.is_none());
    }
}
