use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod config;
mod connection;
mod content;
mod models;
mod components {
    pub mod mock_phone;
    pub mod status_pill;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use content::NAV_LINKS;
use pages::{landing::Landing, not_found::NotFound};

/// Scroll offset after which the nav bar switches to its solid style.
const SCROLL_THRESHOLD: f64 = 20.0;

fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled_state = use_state(|| false);

    {
        let is_scrolled_state = is_scrolled_state.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let scroll_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                        is_scrolled_state.set(is_scrolled(scroll_y));
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::error!("Failed to register scroll listener");
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled_state).then(|| "scrolled"))}>
            <div class="container nav-content">
                <Link<Route> to={Route::Home} classes="brand">
                    <div class="brand-icon">{"🚌"}</div>
                    <span class="brand-name">{"RideForYou"}</span>
                </Link<Route>>

                <div class="nav-desktop">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} class="nav-link">{ link.label }</a>
                    }) }
                    <button class="nav-download">{"Download App"}</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="nav-mobile">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a key={link.label} href={link.href} class="nav-mobile-link" onclick={close_menu.clone()}>
                                    { link.label }
                                </a>
                            }) }
                            <button class="nav-mobile-download">{"Download App"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        background: #f8fafc;
                        color: #0f172a;
                    }
                    ::selection { background: #dbeafe; color: #1e40af; }
                    .container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; box-sizing: border-box; }
                    .btn {
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        font-size: 1rem;
                        cursor: pointer;
                        text-decoration: none;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        transition: background 0.2s;
                    }
                    .btn-dark { background: #0f172a; color: #fff; border: none; }
                    .btn-dark:hover { background: #1e293b; }
                    .btn-light { background: #fff; color: #334155; border: 1px solid #e2e8f0; }
                    .btn-light:hover { background: #f8fafc; }
                    .btn-white { background: #fff; color: #2563eb; border: none; }
                    .btn-white:hover { background: #eff6ff; }
                    .btn-blue { background: #1d4ed8; color: #fff; border: 1px solid #3b82f6; }
                    .btn-blue:hover { background: #1e40af; }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1.25rem 0;
                        background: transparent;
                        transition: all 0.3s;
                    }
                    .top-nav.scrolled {
                        background: #fff;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        padding: 0.75rem 0;
                    }
                    .nav-content { display: flex; justify-content: space-between; align-items: center; }
                    .brand { display: flex; align-items: center; gap: 0.5rem; text-decoration: none; color: #0f172a; }
                    .brand-icon { background: #2563eb; padding: 0.5rem; border-radius: 0.5rem; }
                    .brand-name { font-size: 1.25rem; font-weight: 700; letter-spacing: -0.025em; }
                    .nav-desktop { display: none; align-items: center; gap: 2rem; }
                    .nav-link { font-size: 0.875rem; font-weight: 500; color: #475569; text-decoration: none; }
                    .nav-link:hover { color: #2563eb; }
                    .nav-download {
                        background: #2563eb;
                        color: #fff;
                        border: none;
                        padding: 0.625rem 1.25rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .burger-menu { background: none; border: none; font-size: 1.5rem; color: #334155; cursor: pointer; }
                    .nav-mobile {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        box-sizing: border-box;
                        background: #fff;
                        border-top: 1px solid #f1f5f9;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .nav-mobile-link { color: #475569; font-weight: 500; padding: 0.5rem; text-decoration: none; border-radius: 0.25rem; }
                    .nav-mobile-link:hover { background: #f8fafc; }
                    .nav-mobile-download {
                        background: #2563eb;
                        color: #fff;
                        border: none;
                        width: 100%;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                    }
                    @media (min-width: 768px) {
                        .nav-desktop { display: flex; }
                        .burger-menu, .nav-mobile { display: none; }
                    }

                    .status-pill-anchor { position: fixed; bottom: 1rem; right: 1rem; z-index: 50; }
                    .status-pill {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 600;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .status-pill.online { background: #22c55e; }
                    .status-pill.offline { background: #ef4444; }
                    .status-dot { position: relative; display: flex; width: 0.75rem; height: 0.75rem; }
                    .status-dot-ping, .status-dot-core { border-radius: 9999px; }
                    .status-dot-ping {
                        position: absolute;
                        width: 100%;
                        height: 100%;
                        opacity: 0.75;
                        animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    .status-dot-core { position: relative; width: 0.75rem; height: 0.75rem; }
                    .online .status-dot-ping { background: #86efac; }
                    .online .status-dot-core { background: #bbf7d0; }
                    .offline .status-dot-ping { background: #fca5a5; }
                    .offline .status-dot-core { background: #fecaca; }
                    @keyframes ping {
                        75%, 100% { transform: scale(2); opacity: 0; }
                    }

                    .not-found { padding: 12rem 1.5rem; text-align: center; }
                    .not-found p { color: #475569; margin-bottom: 2rem; }
                "#}
            </style>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting RideForYou landing page");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_stays_transparent_near_top() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
    }

    #[test]
    fn nav_turns_solid_past_threshold() {
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(800.0));
    }
}
