//! Rules of the admin user directory that do not depend on the UI.

use thiserror::Error;

use super::{User, UserId};

/// Page requested when the directory screen opens or resyncs.
pub const DEFAULT_PAGE: u32 = 1;
/// Rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters of a list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A mutation waiting for the operator to confirm it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Delete { id: UserId, name: String },
    Promote { id: UserId, name: String },
}

impl UserAction {
    #[must_use]
    pub fn target(&self) -> UserId {
        match self {
            Self::Delete { id, .. } | Self::Promote { id, .. } => *id,
        }
    }

    #[must_use]
    pub fn target_name(&self) -> &str {
        match self {
            Self::Delete { name, .. } | Self::Promote { name, .. } => name,
        }
    }
}

/// Client-side refusals. The backend enforces the same rules on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserActionError {
    #[error("you cannot delete your own account")]
    CannotDeleteSelf,
}

/// Refuse deleting the signed-in account.
///
/// # Errors
/// Returns [`UserActionError::CannotDeleteSelf`] when `target` is `current`.
pub fn ensure_deletable(current: Option<UserId>, target: UserId) -> Result<(), UserActionError> {
    if current == Some(target) {
        Err(UserActionError::CannotDeleteSelf)
    } else {
        Ok(())
    }
}

/// Narrow an already fetched page to users whose name or email contains
/// `query`, ignoring case. The query is matched as typed, whitespace
/// included. Only the given page is searched.
#[must_use]
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return users.iter().collect();
    }
    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Number of admins among `users`.
#[must_use]
pub fn count_admins(users: &[User]) -> usize {
    users.iter().filter(|user| user.is_admin()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn page() -> Vec<User> {
        vec![
            User {
                id: 1,
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
                ..User::default()
            },
            User {
                id: 2,
                name: "Bob".to_string(),
                email: "b@x.com".to_string(),
                role: UserRole::Admin,
                ..User::default()
            },
        ]
    }

    fn names(users: &[&User]) -> Vec<String> {
        users.iter().map(|user| user.name.clone()).collect()
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let users = page();
        assert_eq!(names(&filter_users(&users, "ali")), vec!["Alice"]);
        assert_eq!(names(&filter_users(&users, "BOB")), vec!["Bob"]);
    }

    #[test]
    fn empty_query_keeps_order() {
        let users = page();
        assert_eq!(names(&filter_users(&users, "")), vec!["Alice", "Bob"]);
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let users = page();
        assert!(filter_users(&users, "ice ").is_empty());
        assert!(filter_users(&users, "   ").is_empty());
        assert_eq!(names(&filter_users(&users, "ice")), vec!["Alice"]);
    }

    #[test]
    fn query_matches_email() {
        let users = page();
        assert_eq!(names(&filter_users(&users, "b@X")), vec!["Bob"]);
        assert_eq!(names(&filter_users(&users, "x.com")), vec!["Alice", "Bob"]);
    }

    #[test]
    fn unmatched_query_is_empty() {
        assert!(filter_users(&page(), "carol").is_empty());
    }

    #[test]
    fn self_delete_is_refused() {
        assert_eq!(
            ensure_deletable(Some(7), 7),
            Err(UserActionError::CannotDeleteSelf)
        );
        assert_eq!(ensure_deletable(Some(7), 8), Ok(()));
        assert_eq!(ensure_deletable(None, 7), Ok(()));
    }

    #[test]
    fn default_page_request() {
        assert_eq!(
            PageRequest::default(),
            PageRequest {
                page: 1,
                page_size: 10
            }
        );
    }

    #[test]
    fn counts_admins() {
        assert_eq!(count_admins(&page()), 1);
        assert_eq!(count_admins(&[]), 0);
    }

    #[test]
    fn action_accessors() {
        let action = UserAction::Promote {
            id: 9,
            name: "Zed".to_string(),
        };
        assert_eq!(action.target(), 9);
        assert_eq!(action.target_name(), "Zed");
    }
}
