use crate::routes::AdminRoute;
use i18nrs::yew::use_translation;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PlaceholderPageProps {
    pub route: AdminRoute,
}

/// Admin section that has no content yet.
#[function_component(PlaceholderPage)]
pub fn placeholder_page(props: &PlaceholderPageProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{i18n.t(props.route.title_key())}</h1>
            <div class="card bg-base-200 shadow">
                <div class="card-body items-center text-center py-16">
                    <i class={format!("fa-solid fa-{} text-5xl text-base-content/40", props.route.icon())}></i>
                    <h2 class="card-title">{i18n.t("placeholder.title")}</h2>
                    <p class="text-base-content/70">{i18n.t("placeholder.description")}</p>
                </div>
            </div>
        </div>
    }
}
