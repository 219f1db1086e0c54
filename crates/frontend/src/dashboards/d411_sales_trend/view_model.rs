use super::api;
use super::state::SalesTrendState;
use contracts::enums::TrendType;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the sales analysis dashboard
#[derive(Clone, Copy)]
pub struct SalesTrendViewModel {
    pub state: RwSignal<SalesTrendState>,
}

impl SalesTrendViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SalesTrendState::default()),
        }
    }

    pub fn set_range(&self, start: String, end: String) {
        self.state.update(|s| s.set_range(start, end));
    }

    pub fn set_trend_type(&self, code: &str) {
        match TrendType::from_code(code) {
            Some(trend_type) => self.state.update(|s| s.trend_type = trend_type),
            None => log::warn!("Unknown trend type: {}", code),
        }
    }

    /// Validate the inputs and load the series
    pub fn display_command(&self) {
        let state = self.state;
        let begun = state.try_update(|s| s.begin_fetch());

        match begun {
            Some(Ok((token, query))) => spawn_local(async move {
                let result = api::fetch_sales_trend(&query).await;
                state.update(|s| {
                    s.apply_response(token, result);
                });
            }),
            Some(Err(e)) => log::debug!("Trend request not sent: {}", e),
            None => log::warn!("Sales trend state is disposed"),
        }
    }

    pub fn clear_command(&self) {
        self.state.update(|s| s.clear());
    }
}

impl Default for SalesTrendViewModel {
    fn default() -> Self {
        Self::new()
    }
}
