//! Multi-series line chart over a categorical x axis.
//!
//! `LineChartModel` holds all geometry and is computed without touching the
//! DOM; `LineChart` only maps it to SVG elements.

use super::scale::Axis;
use super::{ChartFrame, Legend, LegendItem};
use crate::shared::number_format::{format_compact, format_money};
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    /// One value per category, `None` leaves a gap in the line
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlottedPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlottedLine {
    pub key: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    /// `points` attribute of each unbroken run of values
    pub segments: Vec<String>,
    pub points: Vec<PlottedPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub position: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipRow {
    pub label: &'static str,
    pub color: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub title: String,
    /// Horizontal anchor as a share of the chart width, so it follows the
    /// scaled SVG rather than viewBox units
    pub left_percent: f64,
    pub rows: Vec<TooltipRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartModel {
    pub frame: ChartFrame,
    pub y_ticks: Vec<AxisLabel>,
    pub x_labels: Vec<AxisLabel>,
    pub lines: Vec<PlottedLine>,
    categories: Vec<String>,
    series: Vec<LineSeries>,
}

impl LineChartModel {
    /// `None` when there are no categories or no finite value to plot
    pub fn build(categories: &[String], series: Vec<LineSeries>) -> Option<Self> {
        Self::build_in(ChartFrame::LINE, categories, series)
    }

    pub fn build_in(
        frame: ChartFrame,
        categories: &[String],
        series: Vec<LineSeries>,
    ) -> Option<Self> {
        if categories.is_empty() {
            return None;
        }
        let axis = Axis::for_values(
            series
                .iter()
                .flat_map(|s| s.values.iter().flatten().copied()),
        )?;

        let count = categories.len();
        let x_at = |index: usize| -> f64 {
            if count == 1 {
                frame.plot_left() + frame.plot_width() / 2.0
            } else {
                frame.plot_left() + frame.plot_width() * index as f64 / (count - 1) as f64
            }
        };
        let y_at = |value: f64| frame.plot_bottom() - frame.plot_height() * axis.fraction(value);

        let y_ticks = axis
            .ticks()
            .into_iter()
            .map(|tick| AxisLabel {
                position: y_at(tick),
                text: format_compact(tick),
            })
            .collect();

        let x_labels = categories
            .iter()
            .enumerate()
            .map(|(i, c)| AxisLabel {
                position: x_at(i),
                text: c.clone(),
            })
            .collect();

        let lines = series
            .iter()
            .map(|s| {
                let points: Vec<PlottedPoint> = s
                    .values
                    .iter()
                    .take(count)
                    .enumerate()
                    .filter_map(|(index, v)| {
                        v.filter(|v| v.is_finite()).map(|value| PlottedPoint {
                            index,
                            x: x_at(index),
                            y: y_at(value),
                            value,
                        })
                    })
                    .collect();
                PlottedLine {
                    key: s.key,
                    label: s.label,
                    color: s.color,
                    segments: segments(&points),
                    points,
                }
            })
            .collect();

        Some(Self {
            frame,
            y_ticks,
            x_labels,
            lines,
            categories: categories.to_vec(),
            series,
        })
    }

    /// Width of the hover band around one category
    pub fn band_width(&self) -> f64 {
        self.frame.plot_width() / self.categories.len().max(1) as f64
    }

    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let title = self.categories.get(index)?.clone();
        let x = self.x_labels.get(index)?.position;
        let rows = self
            .series
            .iter()
            .filter_map(|s| {
                let value = s.values.get(index).copied().flatten()?;
                Some(TooltipRow {
                    label: s.label,
                    color: s.color,
                    value: format_money(value),
                })
            })
            .collect();
        Some(Tooltip {
            title,
            left_percent: self.frame.x_percent(x),
            rows,
        })
    }

    pub fn legend(&self) -> Vec<LegendItem> {
        self.lines
            .iter()
            .map(|l| LegendItem {
                label: l.label,
                color: l.color,
            })
            .collect()
    }
}

/// Split plotted points into runs of consecutive indices
fn segments(points: &[PlottedPoint]) -> Vec<String> {
    let mut runs: Vec<Vec<&PlottedPoint>> = Vec::new();
    for point in points {
        match runs.last_mut() {
            Some(run) if run.last().map(|p| p.index + 1) == Some(point.index) => run.push(point),
            _ => runs.push(vec![point]),
        }
    }
    runs.into_iter()
        .map(|run| {
            run.iter()
                .map(|p| format!("{:.1},{:.1}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[component]
pub fn LineChart(model: LineChartModel) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let frame = model.frame;
    let legend = model.legend();

    let grid = model
        .y_ticks
        .iter()
        .map(|tick| {
            let y = format!("{:.1}", tick.position);
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
                    {tick.text.clone()}
                </text>
            }
        })
        .collect_view();

    let x_labels = model
        .x_labels
        .iter()
        .map(|label| {
            view! {
                <text
                    x=format!("{:.1}", label.position)
                    y=format!("{:.1}", frame.plot_bottom() + 20.0)
                    text-anchor="middle"
                    font-size="12"
                    fill="#666"
                >
                    {label.text.clone()}
                </text>
            }
        })
        .collect_view();

    let lines = model
        .lines
        .iter()
        .map(|line| {
            let color = line.color;
            let segments = line
                .segments
                .iter()
                .map(|points| {
                    view! {
                        <polyline
                            points=points.clone()
                            fill="none"
                            stroke=color
                            stroke-width="2"
                        />
                    }
                })
                .collect_view();
            let markers = line
                .points
                .iter()
                .map(|p| {
                    let index = p.index;
                    view! {
                        <circle
                            cx=format!("{:.1}", p.x)
                            cy=format!("{:.1}", p.y)
                            r=move || if hovered.get() == Some(index) { "5" } else { "3" }
                            fill="#fff"
                            stroke=color
                            stroke-width="2"
                        />
                    }
                })
                .collect_view();
            view! {
                <g data-series=line.key>
                    {segments}
                    {markers}
                </g>
            }
        })
        .collect_view();

    let band = model.band_width();
    let hover_bands = model
        .x_labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            view! {
                <rect
                    x=format!("{:.1}", label.position - band / 2.0)
                    y=format!("{:.1}", frame.plot_top())
                    width=format!("{:.1}", band)
                    height=format!("{:.1}", frame.plot_height())
                    fill="transparent"
                    on:mouseenter=move |_| hovered.set(Some(index))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    let tooltip_model = model.clone();
    let tooltip = move || {
        hovered
            .get()
            .and_then(|index| tooltip_model.tooltip(index))
            .map(|tip| {
                let left = format!("left: {:.2}%;", tip.left_percent);
                let rows = tip
                    .rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="chart-tooltip__row" style=format!("color: {};", row.color)>
                                {format!("{}: {}", row.label, row.value)}
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="chart-tooltip" style=left>
                        <div class="chart-tooltip__title">{tip.title}</div>
                        {rows}
                    </div>
                }
            })
    };

    view! {
        <div class="chart chart--line">
            <svg
                width="100%"
                viewBox=frame.view_box()
                preserveAspectRatio="xMidYMid meet"
            >
                {grid}
                <line
                    x1=format!("{:.1}", frame.plot_left())
                    x2=format!("{:.1}", frame.plot_right())
                    y1=format!("{:.1}", frame.plot_bottom())
                    y2=format!("{:.1}", frame.plot_bottom())
                    stroke="#999"
                />
                {x_labels}
                {lines}
                {hover_bands}
            </svg>
            {tooltip}
            <Legend items=legend />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(n: usize) -> Vec<String> {
        (1..=n).map(|m| format!("2024-{:02}", m)).collect()
    }

    fn series(values: Vec<Option<f64>>) -> LineSeries {
        LineSeries {
            key: "total",
            label: "Total Revenue",
            color: "#8884d8",
            values,
        }
    }

    #[test]
    fn test_empty_inputs_give_no_model() {
        assert!(LineChartModel::build(&[], vec![series(vec![])]).is_none());
        assert!(LineChartModel::build(&months(2), vec![series(vec![None, None])]).is_none());
    }

    #[test]
    fn test_points_span_plot_area() {
        let model =
            LineChartModel::build(&months(3), vec![series(vec![Some(0.0), Some(100.0), Some(200.0)])])
                .unwrap();
        let frame = model.frame;
        let points = &model.lines[0].points;

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].x, frame.plot_left());
        assert_eq!(points[2].x, frame.plot_right());
        assert_eq!(points[0].y, frame.plot_bottom());
        assert_eq!(points[2].y, frame.plot_top());
        assert_eq!(model.lines[0].segments.len(), 1);
        assert_eq!(model.y_ticks.len(), 5);
        assert_eq!(model.y_ticks[4].text, "200");
    }

    #[test]
    fn test_missing_values_break_the_line() {
        let model = LineChartModel::build(
            &months(5),
            vec![series(vec![Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)])],
        )
        .unwrap();
        assert_eq!(model.lines[0].points.len(), 4);
        assert_eq!(model.lines[0].segments.len(), 2);
    }

    #[test]
    fn test_single_category_is_centered() {
        let model = LineChartModel::build(&months(1), vec![series(vec![Some(5.0)])]).unwrap();
        let frame = model.frame;
        assert_eq!(
            model.lines[0].points[0].x,
            frame.plot_left() + frame.plot_width() / 2.0
        );
    }

    #[test]
    fn test_tooltip_lists_present_values() {
        let mut sma = series(vec![None, Some(150.0)]);
        sma.key = "sma";
        sma.label = "SMA";
        let model =
            LineChartModel::build(&months(2), vec![series(vec![Some(100.0), Some(200.0)]), sma])
                .unwrap();

        let first = model.tooltip(0).unwrap();
        assert_eq!(first.title, "2024-01");
        assert_eq!(first.rows.len(), 1);
        assert_eq!(first.rows[0].value, "100.00");

        let second = model.tooltip(1).unwrap();
        assert_eq!(second.rows.len(), 2);
        assert_eq!(second.rows[1].label, "SMA");

        assert!(model.tooltip(2).is_none());
        assert_eq!(model.legend().len(), 2);
    }

    #[test]
    fn test_tooltip_anchor_is_relative_to_chart_width() {
        let model =
            LineChartModel::build(&months(3), vec![series(vec![Some(1.0), Some(2.0), Some(3.0)])])
                .unwrap();
        let frame = model.frame;

        let first = model.tooltip(0).unwrap();
        let last = model.tooltip(2).unwrap();
        assert!((first.left_percent - frame.plot_left() / frame.width * 100.0).abs() < 1e-9);
        assert!((last.left_percent - frame.plot_right() / frame.width * 100.0).abs() < 1e-9);
        assert!(first.left_percent > 0.0 && last.left_percent < 100.0);
    }
}
