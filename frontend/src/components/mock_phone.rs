use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::models::BusSummary;

pub const TICK_MS: u32 = 50;

// Progress is kept in half-percent steps so it never drifts.
const STEPS_PER_LAP: u16 = 200;

/// Position of the bus marker along the mock route, in `[0, 100)` percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RouteProgress {
    half_steps: u16,
}

impl RouteProgress {
    pub fn percent(&self) -> f64 {
        f64::from(self.half_steps) / 2.0
    }

    pub fn advance(self) -> Self {
        Self {
            half_steps: (self.half_steps + 1) % STEPS_PER_LAP,
        }
    }

    /// Marker offset from the top of the map, between the first and last stop.
    pub fn marker_top(&self) -> f64 {
        20.0 + self.percent() * 0.6
    }
}

pub enum ProgressAction {
    Tick,
}

impl Reducible for RouteProgress {
    type Action = ProgressAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ProgressAction::Tick => Rc::new(self.advance()),
        }
    }
}

#[function_component(MockPhoneApp)]
pub fn mock_phone_app() -> Html {
    let progress = use_reducer(RouteProgress::default);
    let nearby = use_state(|| None::<Vec<BusSummary>>);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(TICK_MS, move || {
                    progress.dispatch(ProgressAction::Tick);
                });
                move || drop(interval)
            },
            (),
        );
    }

    {
        let nearby = nearby.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    if let Ok(buses) = api::get_all_buses().await {
                        nearby.set(Some(buses.into_iter().take(3).collect()));
                    }
                });
                || ()
            },
            (),
        );
    }

    let marker_style = format!("top: {:.1}%;", progress.marker_top());

    html! {
        <div class="phone-frame">
            <div class="phone-button left top"></div>
            <div class="phone-button left bottom"></div>
            <div class="phone-button right"></div>
            <div class="phone-screen">
                <div class="mock-header">
                    <div class="mock-header-row">
                        <div class="mock-brand">
                            <span>{"🚌"}</span>
                            <span class="mock-brand-name">{"RideForYou"}</span>
                        </div>
                        <div class="mock-line-badge">{"Line 42"}</div>
                    </div>
                    <div class="mock-arrival">
                        <p class="mock-arrival-label">{"Arriving in"}</p>
                        <p class="mock-arrival-eta">{"4 mins"}</p>
                    </div>
                </div>

                <div class="mock-map">
                    <div class="mock-map-grid"></div>
                    <div class="mock-route-track"></div>
                    <div class="mock-route-line"></div>

                    <div class="mock-stop active" style="top: 20%;"></div>
                    <div class="mock-stop" style="top: 50%;"></div>
                    <div class="mock-stop" style="top: 80%;"></div>

                    <div class="mock-bus" style={marker_style}>
                        <div class="mock-bus-icon">{"🚌"}</div>
                        <div class="mock-bus-tooltip">{"Next Stop: Downtown"}</div>
                    </div>
                </div>

                <div class="mock-sheet">
                    {
                        if let Some(buses) = nearby.as_ref() {
                            html! {
                                <ul class="mock-nearby">
                                    { for buses.iter().map(|bus| html! {
                                        <li key={bus.id}>
                                            {format!("Line {} · {} · {}", bus.route, bus.destination, bus.eta)}
                                        </li>
                                    }) }
                                </ul>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <button class="mock-track-button">{"Track My Ride"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_starts_at_zero() {
        let progress = RouteProgress::default();
        assert_eq!(progress.percent(), 0.0);
        assert_eq!(progress.marker_top(), 20.0);
    }

    #[test]
    fn each_tick_advances_half_a_percent() {
        let progress = RouteProgress::default().advance().advance().advance();
        assert_eq!(progress.percent(), 1.5);
    }

    #[test]
    fn progress_wraps_before_reaching_100() {
        let mut progress = RouteProgress::default();
        for _ in 0..199 {
            progress = progress.advance();
        }
        assert_eq!(progress.percent(), 99.5);
        assert_eq!(progress.advance().percent(), 0.0);
    }

    #[test]
    fn progress_stays_in_range_over_many_laps() {
        let mut progress = RouteProgress::default();
        for _ in 0..10_000 {
            progress = progress.advance();
            let percent = progress.percent();
            assert!((0.0..100.0).contains(&percent), "out of range: {percent}");
            assert!((20.0..80.0).contains(&progress.marker_top()));
        }
    }

    #[test]
    fn reducer_tick_matches_advance() {
        let state = Rc::new(RouteProgress::default());
        let next = state.clone().reduce(ProgressAction::Tick);
        assert_eq!(*next, state.advance());
    }
}
