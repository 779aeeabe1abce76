use shared::models::Session;
use yewdux::Store;

/// Application-wide state shared through the yewdux root.
///
/// Only [`crate::session::SessionStore`] writes `session`; screens read it.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: Session,
}
