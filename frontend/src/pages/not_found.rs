use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"This stop doesn't exist"}</h1>
            <p>{"The page you were looking for has left the route."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-dark">
                {"Back to RideForYou"}
            </Link<Route>>
        </div>
    }
}
