use super::api;
use super::state::SalesOverviewState;
use contracts::enums::RangeKeyword;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct SalesOverviewViewModel {
    pub state: RwSignal<SalesOverviewState>,
}

impl SalesOverviewViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SalesOverviewState::default()),
        }
    }

    /// Switch the range keyword (by id or wire code) and reload
    pub fn select_range(&self, code: &str) {
        let Some(range) = RangeKeyword::from_code(code) else {
            log::warn!("Unknown date range: {}", code);
            return;
        };
        if self.state.with_untracked(|s| s.range) == range {
            return;
        }
        self.state.update(|s| s.set_range(range));
        self.load_command();
    }

    pub fn load_command(&self) {
        let state = self.state;
        let Some((token, query)) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_sales_overview(&query).await;
            state.update(|s| {
                s.apply_response(token, result);
            });
        });
    }
}

impl Default for SalesOverviewViewModel {
    fn default() -> Self {
        Self::new()
    }
}
