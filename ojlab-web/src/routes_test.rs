//! Tests for the routing system
//!
//! Validates the path table, the admin sidebar grouping and the metadata
//! each admin route carries.

#[cfg(test)]
mod tests {
    use crate::routes::{AdminRoute, AdminSection, MainRoute};
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    /// Tests main route recognition
    #[test]
    fn test_main_route_recognition() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(
            MainRoute::recognize("/auth/callback"),
            Some(MainRoute::AuthCallback)
        );
        assert_eq!(MainRoute::recognize("/admin"), Some(MainRoute::AdminRoot));
        assert_eq!(MainRoute::recognize("/admin/users"), Some(MainRoute::Admin));
        assert_eq!(
            MainRoute::recognize("/no/such/page"),
            Some(MainRoute::NotFound)
        );
    }

    /// Tests admin route recognition, unknown paths included
    #[test]
    fn test_admin_route_recognition() {
        assert_eq!(
            AdminRoute::recognize("/admin/dashboard"),
            Some(AdminRoute::Dashboard)
        );
        assert_eq!(
            AdminRoute::recognize("/admin/theme-demo"),
            Some(AdminRoute::ThemeDemo)
        );
        assert_eq!(
            AdminRoute::recognize("/admin/unknown"),
            Some(AdminRoute::NotFound)
        );
    }

    /// Tests that every route recognizes its own path
    #[test]
    fn test_paths_round_trip() {
        for route in AdminRoute::iter() {
            assert_eq!(AdminRoute::recognize(&route.to_path()), Some(route));
        }
        assert_eq!(AdminRoute::Users.to_path(), "/admin/users");
    }

    /// Tests sidebar grouping and order
    #[test]
    fn test_sidebar_sections() {
        assert_eq!(AdminSection::Overview.routes(), vec![AdminRoute::Dashboard]);
        assert_eq!(
            AdminSection::UserManagement.routes(),
            vec![AdminRoute::Users, AdminRoute::Permissions]
        );
        assert_eq!(
            AdminSection::System.routes(),
            vec![
                AdminRoute::Data,
                AdminRoute::Settings,
                AdminRoute::Analytics,
                AdminRoute::ThemeDemo,
            ]
        );
        assert_eq!(AdminRoute::NotFound.section(), None);
    }

    /// Tests that every listed route has distinct metadata
    #[test]
    fn test_route_metadata() {
        let listed: Vec<_> = AdminSection::iter()
            .flat_map(AdminSection::routes)
            .collect();
        let mut titles: Vec<_> = listed.iter().map(AdminRoute::title_key).collect();
        let mut icons: Vec<_> = listed.iter().map(AdminRoute::icon).collect();
        titles.sort_unstable();
        titles.dedup();
        icons.sort_unstable();
        icons.dedup();
        assert_eq!(titles.len(), listed.len());
        assert_eq!(icons.len(), listed.len());
        assert_eq!(AdminRoute::NotFound.title_key(), "nav.dashboard");
    }
}
