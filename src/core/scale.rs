use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Domain used when there is nothing to measure.
pub const PLACEHOLDER_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Default tick count used when rounding a domain outward.
pub const DEFAULT_NICE_TICK_COUNT: usize = 10;

const NICE_MAX_ITERATIONS: usize = 10;

/// Linear mapping from a numeric domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// vertical axis maps larger values closer to the top of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> PlotResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(PlotError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(PlotError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Fits a scale to the extent of `values`, rounded outward to nice bounds.
    ///
    /// Non-finite values are ignored. An empty input yields
    /// [`PLACEHOLDER_DOMAIN`]; a single distinct value is widened by 0.5 on
    /// both sides (more for magnitudes where 0.5 is below one ulp) before
    /// rounding.
    pub fn from_extent<I>(values: I, range: (f64, f64), tick_count: usize) -> PlotResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (lo, hi) = match extent(values) {
            None => PLACEHOLDER_DOMAIN,
            Some((min, max)) if min == max => widen_single_value(min),
            Some(bounds) => bounds,
        };
        let (nice_lo, nice_hi) = nice_domain(lo, hi, tick_count);
        // Rounding the step product can shave an ulp off the true extent.
        Self::new((nice_lo.min(lo), nice_hi.max(hi)), range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        value >= lo && value <= hi
    }

    pub fn to_pixel(self, value: f64) -> PlotResult<f64> {
        if !value.is_finite() {
            return Err(PlotError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = normalize(value, self.domain_start, self.domain_end);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn to_domain(self, pixel: f64) -> PlotResult<f64> {
        if !pixel.is_finite() {
            return Err(PlotError::InvalidData("pixel must be finite".to_owned()));
        }
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(PlotError::InvalidData(
                "cannot invert a scale with an empty pixel range".to_owned(),
            ));
        }

        let normalized = (pixel - self.range_start) / range_span;
        Ok(lerp(self.domain_start, self.domain_end, normalized))
    }

    /// Round tick values inside the domain, ascending.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain_start, self.domain_end);
        ticks(lo, hi, count)
    }
}

/// Minimum and maximum of the finite values, or `None` when there are none.
#[must_use]
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

/// Expands `[lo, hi]` outward so both bounds land on a round tick step.
///
/// The step is re-derived from the expanded interval until it stops changing.
#[must_use]
pub fn nice_domain(lo: f64, hi: f64, tick_count: usize) -> (f64, f64) {
    let (mut start, mut stop) = ordered(lo, hi);
    if !start.is_finite() || !stop.is_finite() || start == stop || tick_count == 0 {
        return (start, stop);
    }

    let mut previous_step = None;
    for _ in 0..NICE_MAX_ITERATIONS {
        let step = tick_increment(start, stop, tick_count);
        if previous_step == Some(step) || !step.is_finite() || step == 0.0 {
            break;
        }
        let (next_start, next_stop) = if step > 0.0 {
            ((start / step).floor() * step, (stop / step).ceil() * step)
        } else {
            let inverse = -step;
            (
                (start * inverse).floor() / inverse,
                (stop * inverse).ceil() / inverse,
            )
        };
        // Spans near f64::MAX have no representable round bounds.
        if !next_start.is_finite() || !next_stop.is_finite() {
            break;
        }
        start = next_start;
        stop = next_stop;
        previous_step = Some(step);
    }

    (start, stop)
}

/// Signed tick increment: positive values are the step itself, negative
/// values are the negated reciprocal of a step below one.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    TickSpec::new(start, stop, count as f64).increment
}

/// Round tick values in `[lo, hi]`.
#[must_use]
pub fn ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if count == 0 || !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if lo == hi {
        return vec![lo];
    }

    let spec = TickSpec::new(lo, hi, count as f64);
    if spec.last < spec.first || spec.increment == 0.0 || !spec.increment.is_finite() {
        return Vec::new();
    }

    (spec.first..=spec.last)
        .map(|index| {
            let index = index as f64;
            if spec.increment < 0.0 {
                index / -spec.increment
            } else {
                index * spec.increment
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
struct TickSpec {
    first: i64,
    last: i64,
    increment: f64,
}

impl TickSpec {
    fn new(start: f64, stop: f64, count: f64) -> Self {
        const E10: f64 = 7.071_067_811_865_476;
        const E5: f64 = 3.162_277_660_168_379_5;
        const E2: f64 = std::f64::consts::SQRT_2;

        let step = (stop - start) / count.max(0.0);
        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= E10 {
            10.0
        } else if error >= E5 {
            5.0
        } else if error >= E2 {
            2.0
        } else {
            1.0
        };

        let (mut first, mut last, increment);
        if power < 0.0 {
            let inc = 10f64.powf(-power) / factor;
            first = (start * inc).round();
            last = (stop * inc).round();
            if first / inc < start {
                first += 1.0;
            }
            if last / inc > stop {
                last -= 1.0;
            }
            increment = -inc;
        } else {
            let inc = 10f64.powf(power) * factor;
            first = (start / inc).round();
            last = (stop / inc).round();
            if first * inc < start {
                first += 1.0;
            }
            if last * inc > stop {
                last -= 1.0;
            }
            increment = inc;
        }

        if last < first && (0.5..2.0).contains(&count) {
            return Self::new(start, stop, count * 2.0);
        }

        Self {
            first: first as i64,
            last: last as i64,
            increment,
        }
    }
}

/// Position of `value` within `[start, end]` as a fraction.
///
/// Falls back to halved operands when the span overflows.
pub(crate) fn normalize(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span.is_finite() {
        (value - start) / span
    } else {
        (value * 0.5 - start * 0.5) / (end * 0.5 - start * 0.5)
    }
}

/// Value at fraction `t` of `[start, end]`.
pub(crate) fn lerp(start: f64, end: f64, t: f64) -> f64 {
    let span = end - start;
    if span.is_finite() {
        start + t * span
    } else {
        start * (1.0 - t) + end * t
    }
}

/// Opens a zero-width extent around `value`.
///
/// The pad grows with magnitude so both bounds stay distinct from `value`;
/// a side that would overflow stays at `value`.
fn widen_single_value(value: f64) -> (f64, f64) {
    let pad = (value.abs() * f64::EPSILON * 4.0).max(0.5);
    let lo = value - pad;
    let hi = value + pad;
    (
        if lo.is_finite() { lo } else { value },
        if hi.is_finite() { hi } else { value },
    )
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
