use yew::prelude::*;

use crate::connection::Connection;

#[derive(Properties, PartialEq)]
pub struct StatusPillProps {
    pub connection: Connection,
}

#[function_component(StatusPill)]
pub fn status_pill(props: &StatusPillProps) -> Html {
    html! {
        <div class="status-pill-anchor">
            <div class={props.connection.pill_class()}>
                <span class="status-dot">
                    <span class="status-dot-ping"></span>
                    <span class="status-dot-core"></span>
                </span>
                { props.connection.label() }
            </div>
        </div>
    }
}
