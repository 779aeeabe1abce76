use crate::components::admin_guard::{AdminGuard, ReplaceRedirect};
use crate::containers::{admin_layout::AdminLayout, layout::Layout};
use crate::pages::*;
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/auth/callback")]
    AuthCallback,
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The admin console routes, all behind [`AdminGuard`].
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/admin/dashboard")]
    Dashboard,
    #[at("/admin/users")]
    Users,
    #[at("/admin/permissions")]
    Permissions,
    #[at("/admin/data")]
    Data,
    #[at("/admin/settings")]
    Settings,
    #[at("/admin/analytics")]
    Analytics,
    #[at("/admin/theme-demo")]
    ThemeDemo,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

/// Sidebar section an admin route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AdminSection {
    Overview,
    UserManagement,
    System,
}

impl AdminSection {
    /// Translation key of the section heading.
    pub fn title_key(self) -> &'static str {
        match self {
            Self::Overview => "nav.overview",
            Self::UserManagement => "nav.userManagement",
            Self::System => "nav.systemManagement",
        }
    }

    /// Routes listed under this section, in sidebar order.
    pub fn routes(self) -> Vec<AdminRoute> {
        AdminRoute::iter()
            .filter(|route| route.section() == Some(self))
            .collect()
    }
}

impl AdminRoute {
    /// Sidebar section, `None` for routes not shown in the sidebar.
    pub fn section(&self) -> Option<AdminSection> {
        match self {
            Self::Dashboard => Some(AdminSection::Overview),
            Self::Users | Self::Permissions => Some(AdminSection::UserManagement),
            Self::Data | Self::Settings | Self::Analytics | Self::ThemeDemo => {
                Some(AdminSection::System)
            }
            Self::NotFound => None,
        }
    }

    /// Translation key of the route's title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Self::Dashboard | Self::NotFound => "nav.dashboard",
            Self::Users => "nav.users",
            Self::Permissions => "nav.permissions",
            Self::Data => "nav.data",
            Self::Settings => "nav.settings",
            Self::Analytics => "nav.analytics",
            Self::ThemeDemo => "nav.themeDemo",
        }
    }

    /// Font Awesome icon name of the route.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Dashboard | Self::NotFound => "gauge",
            Self::Users => "users",
            Self::Permissions => "shield-halved",
            Self::Data => "database",
            Self::Settings => "gear",
            Self::Analytics => "chart-line",
            Self::ThemeDemo => "palette",
        }
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    tracing::debug!(?route, "switching main route");
    match route {
        MainRoute::Home => html! {
            <Layout>
                <LandingPage />
            </Layout>
        },
        MainRoute::AdminRoot | MainRoute::Admin => html! {
            <AdminGuard>
                <Switch<AdminRoute> render={switch_admin} />
            </AdminGuard>
        },
        MainRoute::AuthCallback | MainRoute::NotFound => html! {
            <ReplaceRedirect<MainRoute> to={MainRoute::Home} />
        },
    }
}

/// Switch function for the admin routes. Unknown admin paths show the
/// dashboard.
fn switch_admin(route: AdminRoute) -> Html {
    tracing::debug!(?route, "switching admin route");
    let current = match route {
        AdminRoute::NotFound => AdminRoute::Dashboard,
        other => other,
    };
    let page = match current {
        AdminRoute::Dashboard | AdminRoute::NotFound => html! { <DashboardPage /> },
        AdminRoute::Users => html! { <UsersPage /> },
        AdminRoute::ThemeDemo => html! { <ThemeDemoPage /> },
        AdminRoute::Permissions
        | AdminRoute::Data
        | AdminRoute::Settings
        | AdminRoute::Analytics => html! { <PlaceholderPage route={current.clone()} /> },
    };
    html! {
        <AdminLayout current_route={current}>
            {page}
        </AdminLayout>
    }
}
