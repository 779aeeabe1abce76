use crate::routes::AdminRoute;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

struct Stat {
    key: &'static str,
    value: &'static str,
    icon: &'static str,
    trend: &'static str,
}

const STATS: [Stat; 4] = [
    Stat {
        key: "dashboard.stats.users",
        value: "1,234",
        icon: "users",
        trend: "+12%",
    },
    Stat {
        key: "dashboard.stats.problems",
        value: "456",
        icon: "list-check",
        trend: "+5%",
    },
    Stat {
        key: "dashboard.stats.submissions",
        value: "12,345",
        icon: "paper-plane",
        trend: "+23%",
    },
    Stat {
        key: "dashboard.stats.contests",
        value: "7",
        icon: "trophy",
        trend: "+2",
    },
];

/// Recent activity rows: translation key and how long ago.
const ACTIVITY: [(&str, &str); 4] = [
    ("dashboard.activity.registered", "2m"),
    ("dashboard.activity.submitted", "5m"),
    ("dashboard.activity.problemAdded", "1h"),
    ("dashboard.activity.contestEnded", "3h"),
];

/// Health indicators: translation key and load percentage.
const SYSTEM: [(&str, u8); 3] = [
    ("dashboard.system.cpu", 45),
    ("dashboard.system.memory", 62),
    ("dashboard.system.judges", 80),
];

/// Admin dashboard with static figures.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{i18n.t("dashboard.title")}</h1>
                <p class="text-base-content/70">{i18n.t("dashboard.subtitle")}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
                { for STATS.iter().map(|stat| html! {
                    <div class="stats shadow bg-base-200">
                        <div class="stat">
                            <div class="stat-figure text-primary">
                                <i class={format!("fa-solid fa-{} text-2xl", stat.icon)}></i>
                            </div>
                            <div class="stat-title">{i18n.t(stat.key)}</div>
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-desc text-success">{stat.trend}</div>
                        </div>
                    </div>
                }) }
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow lg:col-span-2">
                    <div class="card-body">
                        <h2 class="card-title">{i18n.t("dashboard.activity.title")}</h2>
                        <ul class="divide-y divide-base-300">
                            { for ACTIVITY.iter().map(|(key, ago)| html! {
                                <li class="flex justify-between py-2">
                                    <span>{i18n.t(key)}</span>
                                    <span class="text-sm text-base-content/60">{*ago}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="space-y-6">
                    <div class="card bg-base-200 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{i18n.t("dashboard.actions.title")}</h2>
                            <div class="flex flex-col gap-2">
                                <Link<AdminRoute> to={AdminRoute::Users} classes="btn btn-primary btn-sm">
                                    {i18n.t("dashboard.actions.manageUsers")}
                                </Link<AdminRoute>>
                                <Link<AdminRoute> to={AdminRoute::Settings} classes="btn btn-outline btn-sm">
                                    {i18n.t("dashboard.actions.settings")}
                                </Link<AdminRoute>>
                                <Link<AdminRoute> to={AdminRoute::ThemeDemo} classes="btn btn-ghost btn-sm">
                                    {i18n.t("dashboard.actions.theme")}
                                </Link<AdminRoute>>
                            </div>
                        </div>
                    </div>

                    <div class="card bg-base-200 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{i18n.t("dashboard.system.title")}</h2>
                            { for SYSTEM.iter().map(|(key, load)| html! {
                                <div>
                                    <div class="flex justify-between text-sm">
                                        <span>{i18n.t(key)}</span>
                                        <span>{format!("{load}%")}</span>
                                    </div>
                                    <progress class="progress progress-primary w-full" value={load.to_string()} max="100"></progress>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
