use crate::core::LinearScale;
use crate::core::scale::tick_increment;

/// Pixel position of a tick along its axis, and its label.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct AxisTick {
    pub pixel: f64,
    pub label: String,
}

pub(super) fn axis_ticks(scale: LinearScale, count: usize) -> Vec<AxisTick> {
    let (d0, d1) = scale.domain();
    let decimals = tick_decimals(d0.min(d1), d0.max(d1), count);

    scale
        .ticks(count)
        .into_iter()
        .filter_map(|value| {
            let pixel = scale.to_pixel(value).ok()?;
            Some(AxisTick {
                pixel,
                label: format_tick(value, decimals),
            })
        })
        .collect()
}

/// Decimals needed to tell adjacent ticks apart.
pub(super) fn tick_decimals(lo: f64, hi: f64, count: usize) -> usize {
    if count == 0 || hi.is_nan() || lo.is_nan() || hi <= lo {
        return 0;
    }
    let increment = tick_increment(lo, hi, count);
    if increment >= 0.0 || !increment.is_finite() {
        return 0;
    }
    let step = 1.0 / -increment;
    (-step.log10().floor()).max(0.0) as usize
}

pub(super) fn format_tick(value: f64, decimals: usize) -> String {
    let text = format!("{value:.decimals$}");
    // Avoid "-0" / "-0.0" labels.
    if text.starts_with('-') && text[1..].chars().all(|ch| ch == '0' || ch == '.') {
        return text[1..].to_owned();
    }
    text
}
