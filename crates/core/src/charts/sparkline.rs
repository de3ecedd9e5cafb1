use super::{bounds, span, Frame};

/// Builds the SVG path for a watchlist sparkline.
///
/// Non-finite values are dropped. Fewer than two remaining values yields `""`. The series is
/// stretched over the full frame width and normalised between its min and max.
pub fn sparkline_path(values: &[f64], frame: Frame) -> String {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let Some((min, max)) = bounds(finite.iter().copied()).filter(|_| finite.len() >= 2) else {
        tracing::debug!("sparkline needs at least two finite values, got {}", finite.len());
        return String::new();
    };

    let range = span(min, max);
    let last = (finite.len() - 1) as f64;

    finite
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 / last * frame.width;
            let y = frame.height - (v - min) / range * frame.height;
            format!("{} {} {}", if i == 0 { "M" } else { "L" }, x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_rising_series() {
        let path = sparkline_path(&[0.0, 1.0, 2.0], Frame::SPARKLINE);
        assert_eq!(path, "M 0 30 L 200 15 L 400 0");
    }

    #[test]
    fn test_sparkline_flat_series_sits_on_baseline() {
        let path = sparkline_path(&[5.0, 5.0], Frame::SPARKLINE);
        assert_eq!(path, "M 0 30 L 400 30");
    }

    #[test]
    fn test_sparkline_too_short() {
        assert_eq!(sparkline_path(&[], Frame::SPARKLINE), "");
        assert_eq!(sparkline_path(&[1.0], Frame::SPARKLINE), "");
        assert_eq!(sparkline_path(&[1.0, f64::NAN], Frame::SPARKLINE), "");
    }

    #[test]
    fn test_sparkline_drops_non_finite() {
        let path = sparkline_path(&[0.0, f64::NAN, 2.0], Frame::SPARKLINE);
        assert_eq!(path, "M 0 30 L 400 0");
    }
}
