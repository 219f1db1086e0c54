//! Vertical bar chart with rotated category labels

use super::scale::Axis;
use super::{ChartFrame, Legend, LegendItem};
use crate::shared::number_format::{format_compact, format_money};
use leptos::prelude::*;

/// Share of a category band taken by its bar
const BAR_FILL: f64 = 0.7;
const LABEL_ANGLE: f64 = -45.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlottedBar {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Anchor of the rotated label under the bar
    pub label_x: f64,
    pub label_y: f64,
}

impl PlottedBar {
    pub fn label_transform(&self) -> String {
        format!(
            "rotate({} {:.1} {:.1})",
            LABEL_ANGLE, self.label_x, self.label_y
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartModel {
    pub frame: ChartFrame,
    pub y_ticks: Vec<(f64, String)>,
    pub bars: Vec<PlottedBar>,
    /// y of the zero line
    pub baseline: f64,
    pub legend: LegendItem,
}

impl BarChartModel {
    /// Bars keep the given order. `None` when there is nothing to draw.
    pub fn build(series_label: &'static str, color: &'static str, data: &[(String, f64)]) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let frame = ChartFrame::BAR;
        let axis = Axis::for_values(data.iter().map(|(_, v)| *v))?;
        let y_at = |value: f64| frame.plot_bottom() - frame.plot_height() * axis.fraction(value);
        let baseline = y_at(0.0);

        let band = frame.plot_width() / data.len() as f64;
        let bar_width = band * BAR_FILL;

        let bars = data
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let value = if value.is_finite() { *value } else { 0.0 };
                let center = frame.plot_left() + band * (i as f64 + 0.5);
                let top = y_at(value);
                PlottedBar {
                    label: label.clone(),
                    value,
                    x: center - bar_width / 2.0,
                    y: top.min(baseline),
                    width: bar_width,
                    height: (baseline - top).abs(),
                    label_x: center,
                    label_y: frame.plot_bottom() + 14.0,
                }
            })
            .collect();

        let y_ticks = axis
            .ticks()
            .into_iter()
            .map(|t| (y_at(t), format_compact(t)))
            .collect();

        Some(Self {
            frame,
            y_ticks,
            bars,
            baseline,
            legend: LegendItem {
                label: series_label,
                color,
            },
        })
    }
}

#[component]
pub fn BarChart(model: BarChartModel) -> impl IntoView {
    let frame = model.frame;
    let color = model.legend.color;
    let hovered = RwSignal::new(None::<usize>);

    let grid = model
        .y_ticks
        .iter()
        .map(|(y, text)| {
            let y = format!("{:.1}", y);
            view! {
                <line
                    x1=format!("{:.1}", frame.plot_left())
                    x2=format!("{:.1}", frame.plot_right())
                    y1=y.clone()
                    y2=y.clone()
                    stroke="#e0e0e0"
                    stroke-dasharray="3 3"
                />
                <text
                    x=format!("{:.1}", frame.plot_left() - 8.0)
                    y=y
                    text-anchor="end"
                    dominant-baseline="middle"
                    font-size="12"
                    fill="#666"
                >
                    {text.clone()}
                </text>
            }
        })
        .collect_view();

    let bars = model
        .bars
        .iter()
        .enumerate()
        .map(|(index, bar)| {
            view! {
                <rect
                    x=format!("{:.1}", bar.x)
                    y=format!("{:.1}", bar.y)
                    width=format!("{:.1}", bar.width)
                    height=format!("{:.1}", bar.height)
                    fill=color
                    fill-opacity=move || if hovered.get() == Some(index) { "1" } else { "0.85" }
                    on:mouseenter=move |_| hovered.set(Some(index))
                    on:mouseleave=move |_| hovered.set(None)
                />
                <text
                    x=format!("{:.1}", bar.label_x)
                    y=format!("{:.1}", bar.label_y)
                    transform=bar.label_transform()
                    text-anchor="end"
                    font-size="12"
                    fill="#666"
                >
                    {bar.label.clone()}
                </text>
            }
        })
        .collect_view();

    let hovered_bars = model.bars.clone();
    let tooltip = move || {
        hovered
            .get()
            .and_then(|i| hovered_bars.get(i).cloned())
            .map(|bar| {
                view! {
                    <div class="chart-tooltip" style=format!("left: {:.2}%;", frame.x_percent(bar.label_x))>
                        <div class="chart-tooltip__title">{bar.label}</div>
                        <div class="chart-tooltip__row">{format_money(bar.value)}</div>
                    </div>
                }
            })
    };

    view! {
        <div class="chart chart--bar">
            <svg width="100%" viewBox=frame.view_box() preserveAspectRatio="xMidYMid meet">
                {grid}
                {bars}
                <line
                    x1=format!("{:.1}", frame.plot_left())
                    x2=format!("{:.1}", frame.plot_right())
                    y1=format!("{:.1}", model.baseline)
                    y2=format!("{:.1}", model.baseline)
                    stroke="#999"
                />
            </svg>
            {tooltip}
            <Legend items=vec![model.legend] />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(values: &[(&str, f64)]) -> Vec<(String, f64)> {
        values.iter().map(|(l, v)| (l.to_string(), *v)).collect()
    }

    #[test]
    fn test_no_bars_without_data() {
        assert!(BarChartModel::build("Revenue", "#8884d8", &[]).is_none());
    }

    #[test]
    fn test_bars_keep_order_and_scale() {
        let model =
            BarChartModel::build("Revenue", "#8884d8", &data(&[("Tea", 50.0), ("Coffee", 200.0)]))
                .unwrap();
        let frame = model.frame;

        assert_eq!(model.bars[0].label, "Tea");
        assert_eq!(model.bars[1].label, "Coffee");
        assert!(model.bars[0].x < model.bars[1].x);
        assert_eq!(model.baseline, frame.plot_bottom());
        assert_eq!(model.bars[1].y, frame.plot_top());
        assert_eq!(model.bars[1].height, frame.plot_height());
        assert_eq!(model.bars[0].height, frame.plot_height() / 4.0);
    }

    #[test]
    fn test_negative_bar_hangs_below_zero() {
        let model =
            BarChartModel::build("Revenue", "#8884d8", &data(&[("Refunds", -40.0), ("Tea", 80.0)]))
                .unwrap();
        let refunds = &model.bars[0];
        assert_eq!(refunds.y, model.baseline);
        assert!(refunds.height > 0.0);
        assert!(model.baseline < model.frame.plot_bottom());
    }

    #[test]
    fn test_tooltip_anchor_follows_bar_center() {
        let model =
            BarChartModel::build("Revenue", "#8884d8", &data(&[("Tea", 1.0), ("Coffee", 2.0)]))
                .unwrap();
        let frame = model.frame;
        let center = frame.plot_left() + frame.plot_width() / 4.0;
        assert_eq!(model.bars[0].label_x, center);
        assert!((frame.x_percent(center) - center / frame.width * 100.0).abs() < 1e-9);
        assert_eq!(frame.x_percent(frame.width), 100.0);
        assert_eq!(frame.x_percent(0.0), 0.0);
    }

    #[test]
    fn test_label_transform() {
        let model = BarChartModel::build("Revenue", "#8884d8", &data(&[("Tea", 1.0)])).unwrap();
        let bar = &model.bars[0];
        assert_eq!(
            bar.label_transform(),
            format!("rotate(-45 {:.1} {:.1})", bar.label_x, bar.label_y)
        );
    }
}
