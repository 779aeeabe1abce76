use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::routes::AdminRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct SidebarNavItemProps {
    pub route: AdminRoute,
    pub current_route: AdminRoute,
}

#[function_component(SidebarNavItem)]
pub fn sidebar_nav_item(props: &SidebarNavItemProps) -> Html {
    let (i18n, ..) = use_translation();
    let active = (props.route == props.current_route).then_some("menu-active");

    html! {
      <li>
          <Link<AdminRoute> to={props.route.clone()} classes={classes!("gap-2", active)}>
              <i class={classes!("fa-solid", "fa-fw", format!("fa-{}", props.route.icon()))}></i>
              {i18n.t(props.route.title_key())}
          </Link<AdminRoute>>
      </li>
    }
}
