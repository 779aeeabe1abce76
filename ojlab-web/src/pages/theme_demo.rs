use crate::components::{
    color_theme_selector::ColorThemeSelector, language_selector::LanguageSelector,
    theme_switcher::ThemeSwitcher,
};
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

const BUTTONS: [&str; 6] = [
    "btn-primary",
    "btn-secondary",
    "btn-accent",
    "btn-neutral",
    "btn-outline",
    "btn-ghost",
];

const BADGES: [&str; 5] = [
    "badge-primary",
    "badge-secondary",
    "badge-success",
    "badge-warning",
    "badge-error",
];

const PROGRESS: [(&str, u8); 3] = [
    ("progress-primary", 30),
    ("progress-secondary", 60),
    ("progress-accent", 90),
];

/// Showcase of the theme controls and the components they restyle.
#[function_component(ThemeDemoPage)]
pub fn theme_demo_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{i18n.t("themeDemo.title")}</h1>
                <p class="text-base-content/70">{i18n.t("themeDemo.subtitle")}</p>
            </div>

            <div class="card bg-base-200 shadow">
                <div class="card-body">
                    <h2 class="card-title">{i18n.t("themeDemo.controls")}</h2>
                    <div class="flex flex-wrap items-center gap-4">
                        <ThemeSwitcher />
                        <ColorThemeSelector />
                        <LanguageSelector />
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-200 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{i18n.t("themeDemo.buttons")}</h2>
                        <div class="flex flex-wrap gap-2">
                            { for BUTTONS.iter().map(|class| html! {
                                <button class={format!("btn {class}")}>{class.trim_start_matches("btn-")}</button>
                            }) }
                        </div>
                        <h2 class="card-title mt-4">{i18n.t("themeDemo.badges")}</h2>
                        <div class="flex flex-wrap gap-2">
                            { for BADGES.iter().map(|class| html! {
                                <span class={format!("badge {class}")}>{class.trim_start_matches("badge-")}</span>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="card bg-base-200 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{i18n.t("themeDemo.progress")}</h2>
                        { for PROGRESS.iter().map(|(class, value)| html! {
                            <progress class={format!("progress {class} w-full")} value={value.to_string()} max="100"></progress>
                        }) }
                        <h2 class="card-title mt-4">{i18n.t("themeDemo.typography")}</h2>
                        <h1 class="text-4xl font-bold">{i18n.t("themeDemo.heading")}</h1>
                        <p>{i18n.t("themeDemo.body")}</p>
                        <p class="text-sm text-base-content/60">{i18n.t("themeDemo.muted")}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
