//! Admin user directory: page loading and the mutate-then-refetch actions.
//!
//! Mutations never patch the displayed list. After the backend accepts a
//! change the first page is requested again and replaces what is on screen.

use std::ops::Deref;
use std::rc::Rc;

use async_trait::async_trait;
use shared::models::directory::ensure_deletable;
use shared::models::{PageRequest, UserActionError, UserId, UserList};
use thiserror::Error;

use crate::api::ApiError;

/// Backend operations of the user directory.
#[async_trait(?Send)]
pub trait UserDirectory {
    async fn list(&self, page: PageRequest) -> Result<UserList, ApiError>;
    async fn delete(&self, id: UserId) -> Result<(), ApiError>;
    async fn promote(&self, id: UserId) -> Result<(), ApiError>;
}

/// Shared [`UserDirectory`] handed to the screens through a Yew context.
#[derive(Clone)]
pub struct DirectoryHandle(Rc<dyn UserDirectory>);

impl DirectoryHandle {
    pub fn new(directory: Rc<dyn UserDirectory>) -> Self {
        Self(directory)
    }
}

impl Deref for DirectoryHandle {
    type Target = dyn UserDirectory;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for DirectoryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Why a directory action did not complete.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Refused(#[from] UserActionError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Fetch one page, replacing whatever was shown before.
pub async fn load_page<D>(directory: &D, page: PageRequest) -> Result<UserList, DirectoryError>
where
    D: UserDirectory + ?Sized,
{
    let list = directory.list(page).await?;
    tracing::debug!(
        total = list.total,
        rows = list.users.len(),
        "user page loaded"
    );
    Ok(list)
}

/// Delete `target` and resync the first page.
///
/// Deleting the signed-in account (`current`) is refused before any request
/// is made.
pub async fn delete_user<D>(
    directory: &D,
    current: Option<UserId>,
    target: UserId,
) -> Result<UserList, DirectoryError>
where
    D: UserDirectory + ?Sized,
{
    ensure_deletable(current, target)?;
    directory.delete(target).await?;
    load_page(directory, PageRequest::default()).await
}

/// Grant admin to `target` and resync the first page.
pub async fn promote_user<D>(directory: &D, target: UserId) -> Result<UserList, DirectoryError>
where
    D: UserDirectory + ?Sized,
{
    directory.promote(target).await?;
    load_page(directory, PageRequest::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use shared::models::User;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List(PageRequest),
        Delete(UserId),
        Promote(UserId),
    }

    #[derive(Default)]
    struct FakeDirectory {
        calls: RefCell<Vec<Call>>,
        fail_mutations: bool,
    }

    impl FakeDirectory {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn mutation_result(&self) -> Result<(), ApiError> {
            if self.fail_mutations {
                Err(ApiError::from_status(403, r#"{"message":"Permission denied"}"#))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl UserDirectory for FakeDirectory {
        async fn list(&self, page: PageRequest) -> Result<UserList, ApiError> {
            self.calls.borrow_mut().push(Call::List(page));
            Ok(UserList {
                total: 1,
                users: vec![User {
                    id: 1,
                    name: "Alice".to_string(),
                    ..User::default()
                }],
            })
        }

        async fn delete(&self, id: UserId) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Delete(id));
            self.mutation_result()
        }

        async fn promote(&self, id: UserId) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(Call::Promote(id));
            self.mutation_result()
        }
    }

    #[test]
    fn delete_refetches_first_page() {
        let directory = FakeDirectory::default();
        let list = block_on(delete_user(&directory, Some(7), 3)).unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(
            directory.calls(),
            vec![Call::Delete(3), Call::List(PageRequest::default())]
        );
    }

    #[test]
    fn deleting_self_issues_no_request() {
        let directory = FakeDirectory::default();
        let err = block_on(delete_user(&directory, Some(7), 7)).unwrap_err();
        assert!(matches!(
            err,
            DirectoryError::Refused(UserActionError::CannotDeleteSelf)
        ));
        assert_eq!(err.to_string(), "you cannot delete your own account");
        assert!(directory.calls().is_empty());
    }

    #[test]
    fn promote_refetches_first_page() {
        let directory = FakeDirectory::default();
        block_on(promote_user(&directory, 4)).unwrap();
        assert_eq!(
            directory.calls(),
            vec![Call::Promote(4), Call::List(PageRequest::default())]
        );
    }

    #[test]
    fn failed_mutation_skips_refetch() {
        let directory = FakeDirectory {
            fail_mutations: true,
            ..FakeDirectory::default()
        };
        let err = block_on(promote_user(&directory, 4)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "request failed with status 403: Permission denied"
        );
        assert_eq!(directory.calls(), vec![Call::Promote(4)]);
    }

    #[test]
    fn handle_forwards_to_the_shared_directory() {
        let directory = Rc::new(FakeDirectory::default());
        let handle = DirectoryHandle::new(directory.clone());
        assert!(handle == handle.clone());
        assert!(handle != DirectoryHandle::new(Rc::new(FakeDirectory::default())));

        block_on(promote_user(&*handle, 9)).unwrap();
        assert_eq!(
            directory.calls(),
            vec![Call::Promote(9), Call::List(PageRequest::default())]
        );
    }

    #[test]
    fn load_page_passes_pagination_through() {
        let directory = FakeDirectory::default();
        let page = PageRequest {
            page: 3,
            page_size: 25,
        };
        block_on(load_page(&directory, page)).unwrap();
        assert_eq!(directory.calls(), vec![Call::List(page)]);
    }
}
