mod dashboard;
mod landing;
mod placeholder;
mod theme_demo;
mod users;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use placeholder::PlaceholderPage;
pub use theme_demo::ThemeDemoPage;
pub use users::UsersPage;

#[cfg(all(test, target_arch = "wasm32"))]
mod pages_test;
