use crate::animation::ease::Ease;

/// Behavior for inputs outside the first/last breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Pin to the edge output value.
    #[default]
    Clamp,
    /// Continue the edge segment linearly.
    Extend,
    /// Return the input value unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Handling of inputs below the first breakpoint.
    #[serde(default)]
    pub extrapolate_left: Extrapolate,
    /// Handling of inputs above the last breakpoint.
    #[serde(default)]
    pub extrapolate_right: Extrapolate,
    /// Easing applied within each segment.
    #[serde(default)]
    pub easing: Ease,
}

impl InterpolateOpts {
    /// Clamp on both sides with the given easing.
    pub fn eased(easing: Ease) -> Self {
        Self {
            easing,
            ..Self::default()
        }
    }
}

/// Map `value` through piecewise breakpoints `input -> output`.
///
/// With [`Extrapolate::Clamp`] the result is exactly `output[0]` for every `value <= input[0]`
/// and exactly `output[last]` for every `value >= input[last]`, whatever the easing. That is
/// what keeps every sub-animation defined for frames before its start and after its end.
///
/// Never panics: mismatched slice lengths use the common prefix, fewer than two points return
/// the lone output (or `0.0`), zero-width segments jump to their end value and a NaN `value`
/// maps to `output[0]`.
pub fn interpolate(value: f64, input: &[f64], output: &[f64], opts: InterpolateOpts) -> f64 {
    let n = input.len().min(output.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 || value.is_nan() {
        return output[0];
    }
    let input = &input[..n];
    let output = &output[..n];

    if value <= input[0] {
        return match opts.extrapolate_left {
            Extrapolate::Clamp => output[0],
            Extrapolate::Identity => value,
            Extrapolate::Extend => linear_segment(value, input[0], input[1], output[0], output[1]),
        };
    }
    if value >= input[n - 1] {
        return match opts.extrapolate_right {
            Extrapolate::Clamp => output[n - 1],
            Extrapolate::Identity => value,
            Extrapolate::Extend => linear_segment(
                value,
                input[n - 2],
                input[n - 1],
                output[n - 2],
                output[n - 1],
            ),
        };
    }

    // input[0] < value < input[n-1] here, so 1 <= idx <= n-1.
    let idx = input.partition_point(|&x| x <= value).clamp(1, n - 1);
    let (a_in, b_in) = (input[idx - 1], input[idx]);
    let (a_out, b_out) = (output[idx - 1], output[idx]);
    let width = b_in - a_in;
    if width <= 0.0 {
        return b_out;
    }
    let t = (value - a_in) / width;
    a_out + (b_out - a_out) * opts.easing.apply(t)
}

fn linear_segment(value: f64, a_in: f64, b_in: f64, a_out: f64, b_out: f64) -> f64 {
    let width = b_in - a_in;
    if width == 0.0 {
        return a_out;
    }
    a_out + (b_out - a_out) * (value - a_in) / width
}

/// Ease `from -> to` across frames `[start, end]` with cubic ease-out, clamped on both sides.
///
/// The animated value of score rings, bars and counters.
pub fn ease(frame: f64, from: f64, to: f64, start: f64, end: f64) -> f64 {
    interpolate(
        frame,
        &[start, end],
        &[from, to],
        InterpolateOpts::eased(Ease::OutCubic),
    )
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
pub fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Linear progress through `[start, start + duration]` in `[0, 1]`.
///
/// A non-positive `duration` is a step at `start`.
pub fn progress(frame: f64, start: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return if frame >= start { 1.0 } else { 0.0 };
    }
    clamp01((frame - start) / duration)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
