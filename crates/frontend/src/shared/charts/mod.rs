//! Inline SVG charts for the dashboards
pub mod bar_chart;
pub mod line_chart;
pub mod scale;

pub use bar_chart::{BarChart, BarChartModel};
pub use line_chart::{LineChart, LineChartModel, LineSeries};

use leptos::prelude::*;

/// Drawing area of a chart in SVG user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl ChartFrame {
    pub const LINE: ChartFrame = ChartFrame {
        width: 800.0,
        height: 360.0,
        margin_top: 20.0,
        margin_right: 30.0,
        margin_bottom: 40.0,
        margin_left: 60.0,
    };

    /// Extra bottom space for the rotated product names
    pub const BAR: ChartFrame = ChartFrame {
        width: 800.0,
        height: 400.0,
        margin_top: 20.0,
        margin_right: 30.0,
        margin_bottom: 110.0,
        margin_left: 60.0,
    };

    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn plot_width(&self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    pub fn plot_height(&self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// viewBox x as a percentage of the rendered width. HTML overlays use
    /// this since the SVG is scaled to its container.
    pub fn x_percent(&self, x: f64) -> f64 {
        x / self.width * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendItem {
    pub label: &'static str,
    pub color: &'static str,
}

#[component]
pub fn Legend(items: Vec<LegendItem>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <span class="chart-legend__item">
                            <span
                                class="chart-legend__swatch"
                                style=format!("background-color: {};", item.color)
                            ></span>
                            {item.label}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
