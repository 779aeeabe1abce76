use shared::models::session::{GuardDecision, guard_admin};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::components::loading::Loading;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct ReplaceRedirectProps<R: Routable + 'static> {
    pub to: R,
}

/// Navigate to `to`, replacing the current history entry so the back button
/// cannot return to the page being left.
#[function_component(ReplaceRedirect)]
pub fn replace_redirect<R: Routable + 'static>(props: &ReplaceRedirectProps<R>) -> Html {
    let navigator = use_navigator();
    use_effect_with(props.to.clone(), move |target| {
        match navigator {
            Some(navigator) => navigator.replace(target),
            None => tracing::warn!("redirect rendered outside of a router"),
        }
        || ()
    });
    html! {}
}

#[derive(Properties, PartialEq)]
pub struct AdminGuardProps {
    pub children: Children,
}

/// Renders its children only for a signed-in admin.
#[function_component(AdminGuard)]
pub fn admin_guard(props: &AdminGuardProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    match guard_admin(&session) {
        GuardDecision::Pending => html! { <Loading /> },
        GuardDecision::RedirectHome => {
            tracing::info!("admin screen refused, returning home");
            html! { <ReplaceRedirect<MainRoute> to={MainRoute::Home} /> }
        }
        GuardDecision::Allow => html! { <>{ props.children.clone() }</> },
    }
}
