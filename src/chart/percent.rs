//! Pie percentage math and label overlay geometry
//!
//! The overlay and the tooltip both go through [`percentage_of`], so the
//! number drawn next to a slice always equals the one shown on hover.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Slices start at 12 o'clock
pub const START_ANGLE: f64 = -FRAC_PI_2;

/// `value / total * 100`, rounded to one decimal. A zero total yields 0.
pub fn percentage_of(value: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() {
        return 0.0;
    }
    round1(value / total * 100.0)
}

pub fn percentages(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    values.iter().map(|&v| percentage_of(v, total)).collect()
}

pub fn format_percent(percentage: f64) -> String {
    format!("{percentage:.1}%")
}

pub fn tooltip_label(label: &str, value: f64, values: &[f64]) -> String {
    let total: f64 = values.iter().sum();
    format!("{label}: {}", format_percent(percentage_of(value, total)))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Angular extent of one slice, in radians, screen orientation (y grows down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Slice {
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + (self.end_angle - self.start_angle) / 2.0
    }

    pub fn contains(&self, angle: f64) -> bool {
        let sweep = self.end_angle - self.start_angle;
        if sweep <= 0.0 {
            return false;
        }
        let offset = (angle - self.start_angle).rem_euclid(TAU);
        offset < sweep
    }
}

pub fn slices(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().sum();
    let mut angle = START_ANGLE;
    values
        .iter()
        .map(|&value| {
            let sweep = if total == 0.0 || !total.is_finite() {
                0.0
            } else {
                value / total * TAU
            };
            let slice = Slice {
                start_angle: angle,
                end_angle: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

/// Index of the slice covering `angle`
pub fn slice_at(slices: &[Slice], angle: f64) -> Option<usize> {
    slices.iter().position(|slice| slice.contains(angle))
}

/// Drawing rectangle of the chart, screen orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl DrawArea {
    pub fn center(&self) -> (f64, f64) {
        ((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Place one percentage label per slice at its angular midpoint,
/// `margin` units past `outer_radius`.
pub fn overlay_labels(
    values: &[f64],
    area: DrawArea,
    outer_radius: f64,
    margin: f64,
) -> Vec<OverlayLabel> {
    let (cx, cy) = area.center();
    let radius = outer_radius + margin;
    let percents = percentages(values);
    slices(values)
        .iter()
        .zip(percents)
        .map(|(slice, percentage)| {
            let angle = slice.mid_angle();
            OverlayLabel {
                text: format_percent(percentage),
                x: cx + angle.cos() * radius,
                y: cy + angle.sin() * radius,
            }
        })
        .collect()
}
