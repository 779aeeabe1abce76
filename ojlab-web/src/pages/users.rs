use std::rc::Rc;

use i18nrs::yew::use_translation;
use shared::models::directory::{count_admins, ensure_deletable, filter_users};
use shared::models::timestamp::display_date;
use shared::models::{PageRequest, User, UserAction, UserId, UserList};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_mount;
use yewdux::prelude::use_selector;

use crate::{
    components::{confirm_dialog::ConfirmDialog, loading::Loading},
    directory::{self, DirectoryError, DirectoryHandle},
    models::app_state::AppState,
};

/// What the inline panel above the table reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// Deleting the signed-in account was refused before any request.
    SelfDelete,
    /// A backend call failed.
    Failed(String),
}

impl From<&DirectoryError> for PanelError {
    fn from(err: &DirectoryError) -> Self {
        match err {
            DirectoryError::Refused(_) => Self::SelfDelete,
            DirectoryError::Api(api) => Self::Failed(api.to_string()),
        }
    }
}

/// State of the user management screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersView {
    /// Last page the backend returned; kept when a mutation fails.
    pub list: Option<UserList>,
    pub error: Option<PanelError>,
    /// Action waiting in the confirmation dialog.
    pub pending: Option<UserAction>,
    pub busy: bool,
}

pub enum UsersEvent {
    Loaded(UserList),
    Failed(PanelError),
    /// The operator picked an action on a row.
    Request {
        action: UserAction,
        current: Option<UserId>,
    },
    Cancel,
    Submitting,
    Dismiss,
}

impl Reducible for UsersView {
    type Action = UsersEvent;

    fn reduce(self: Rc<Self>, event: UsersEvent) -> Rc<Self> {
        let mut next = (*self).clone();
        match event {
            UsersEvent::Loaded(list) => {
                next.list = Some(list);
                next.error = None;
                next.pending = None;
                next.busy = false;
            }
            UsersEvent::Failed(error) => {
                next.error = Some(error);
                next.pending = None;
                next.busy = false;
            }
            UsersEvent::Request { action, current } => {
                let refused = match &action {
                    UserAction::Delete { id, .. } => ensure_deletable(current, *id).is_err(),
                    UserAction::Promote { .. } => false,
                };
                if refused {
                    next.error = Some(PanelError::SelfDelete);
                    next.pending = None;
                } else {
                    next.error = None;
                    next.pending = Some(action);
                }
            }
            UsersEvent::Cancel => next.pending = None,
            UsersEvent::Submitting => next.busy = true,
            UsersEvent::Dismiss => next.error = None,
        }
        Rc::new(next)
    }
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().reload() {
            tracing::warn!(?err, "could not reload page");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub error: PanelError,
    pub on_dismiss: Callback<()>,
}

/// Inline alert. Failed requests offer a reload, every error can be
/// dismissed.
#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    let (i18n, ..) = use_translation();
    let (message, reloadable) = match &props.error {
        PanelError::SelfDelete => (i18n.t("users.cannotDeleteSelf"), false),
        PanelError::Failed(message) => (message.clone(), true),
    };
    let on_dismiss = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div role="alert" class="alert alert-error">
            <i class="fa-solid fa-circle-exclamation"></i>
            <span>{message}</span>
            <div class="flex gap-2">
                if reloadable {
                    <button class="btn btn-sm" onclick={Callback::from(|_: MouseEvent| reload_page())}>
                        {i18n.t("users.reload")}
                    </button>
                }
                <button class="btn btn-sm btn-ghost" onclick={on_dismiss}>
                    {i18n.t("common.dismiss")}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct UserRowProps {
    user: User,
    on_action: Callback<UserAction>,
}

#[function_component(UserRow)]
fn user_row(props: &UserRowProps) -> Html {
    let (i18n, ..) = use_translation();
    let user = &props.user;

    let on_delete = {
        let action = UserAction::Delete {
            id: user.id,
            name: user.display_name().to_string(),
        };
        props.on_action.reform(move |_: MouseEvent| action.clone())
    };
    let on_promote = {
        let action = UserAction::Promote {
            id: user.id,
            name: user.display_name().to_string(),
        };
        props.on_action.reform(move |_: MouseEvent| action.clone())
    };
    let badge = if user.is_admin() {
        classes!("badge", "badge-primary")
    } else {
        classes!("badge", "badge-ghost")
    };

    html! {
        <tr>
            <td>
                <div class="flex items-center gap-3">
                    <div class="avatar placeholder">
                        <div class="bg-neutral text-neutral-content w-8 rounded-full">
                            <span>{user.initial()}</span>
                        </div>
                    </div>
                    <span class="font-medium">{user.display_name()}</span>
                </div>
            </td>
            <td>{&user.email}</td>
            <td><span class={badge}>{i18n.t(&format!("users.roles.{}", user.role))}</span></td>
            <td>{display_date(user.created_at)}</td>
            <td class="flex justify-end gap-2">
                if !user.is_admin() {
                    <button class="btn btn-ghost btn-xs" onclick={on_promote}>
                        {i18n.t("users.promote")}
                    </button>
                }
                <button class="btn btn-ghost btn-xs text-error" onclick={on_delete}>
                    {i18n.t("users.delete")}
                </button>
            </td>
        </tr>
    }
}

/// Admin user management: first page of users, local search, delete and
/// promote.
#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let (i18n, ..) = use_translation();
    let user_directory = use_context::<DirectoryHandle>();
    let current_user = use_selector(|state: &AppState| state.session.user_id());
    let view = use_reducer(UsersView::default);
    let query = use_state(String::new);

    {
        let user_directory = user_directory.clone();
        let dispatcher = view.dispatcher();
        use_mount(move || {
            let Some(user_directory) = user_directory else {
                tracing::error!("no user directory in context");
                dispatcher.dispatch(UsersEvent::Failed(PanelError::Failed(
                    "user directory unavailable".to_string(),
                )));
                return;
            };
            spawn_local(async move {
                match directory::load_page(&*user_directory, PageRequest::default()).await {
                    Ok(page) => dispatcher.dispatch(UsersEvent::Loaded(page)),
                    Err(err) => dispatcher.dispatch(UsersEvent::Failed(PanelError::from(&err))),
                }
            });
        });
    }

    let on_search = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_action = {
        let dispatcher = view.dispatcher();
        let current = *current_user;
        Callback::from(move |action: UserAction| {
            dispatcher.dispatch(UsersEvent::Request { action, current });
        })
    };
    let on_cancel = {
        let dispatcher = view.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(UsersEvent::Cancel))
    };
    let on_dismiss = {
        let dispatcher = view.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(UsersEvent::Dismiss))
    };

    let on_confirm = {
        let pending = view.pending.clone();
        let dispatcher = view.dispatcher();
        let current = *current_user;
        Callback::from(move |()| {
            let (Some(action), Some(user_directory)) = (pending.clone(), user_directory.clone())
            else {
                return;
            };
            let dispatcher = dispatcher.clone();
            dispatcher.dispatch(UsersEvent::Submitting);
            spawn_local(async move {
                let result = match &action {
                    UserAction::Delete { id, .. } => {
                        directory::delete_user(&*user_directory, current, *id).await
                    }
                    UserAction::Promote { id, .. } => {
                        directory::promote_user(&*user_directory, *id).await
                    }
                };
                match result {
                    Ok(page) => {
                        tracing::info!(?action, "user action applied");
                        dispatcher.dispatch(UsersEvent::Loaded(page));
                    }
                    Err(err) => {
                        tracing::warn!(?action, error = %err, "user action failed");
                        dispatcher.dispatch(UsersEvent::Failed(PanelError::from(&err)));
                    }
                }
            });
        })
    };

    let dialog = view.pending.as_ref().map_or_else(
        || html! {},
        |action| {
            let (title, message, confirm_label, danger) = match action {
                UserAction::Delete { .. } => (
                    i18n.t("users.confirmDelete.title"),
                    i18n.t("users.confirmDelete.message"),
                    i18n.t("users.delete"),
                    true,
                ),
                UserAction::Promote { .. } => (
                    i18n.t("users.confirmPromote.title"),
                    i18n.t("users.confirmPromote.message"),
                    i18n.t("users.promote"),
                    false,
                ),
            };
            html! {
                <ConfirmDialog
                    {title}
                    message={format!("{message} {}", action.target_name())}
                    {confirm_label}
                    {danger}
                    busy={view.busy}
                    on_confirm={on_confirm.clone()}
                    on_cancel={on_cancel.clone()}
                />
            }
        },
    );

    let error_panel = view.error.clone().map_or_else(
        || html! {},
        |error| html! { <ErrorPanel {error} on_dismiss={on_dismiss.clone()} /> },
    );

    let body = match view.list.as_ref() {
        None if view.error.is_none() => html! { <Loading full_screen={false} /> },
        None => html! {},
        Some(page) => {
            let rows = filter_users(&page.users, &query);
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="stat bg-base-200 rounded-box">
                            <div class="stat-title">{i18n.t("users.summary.total")}</div>
                            <div class="stat-value">{page.total}</div>
                        </div>
                        <div class="stat bg-base-200 rounded-box">
                            <div class="stat-title">{i18n.t("users.summary.admins")}</div>
                            <div class="stat-value">{count_admins(&page.users)}</div>
                        </div>
                    </div>
                    <div class="overflow-x-auto bg-base-200 rounded-box">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{i18n.t("users.columns.name")}</th>
                                    <th>{i18n.t("users.columns.email")}</th>
                                    <th>{i18n.t("users.columns.role")}</th>
                                    <th>{i18n.t("users.columns.created")}</th>
                                    <th class="text-right">{i18n.t("users.columns.actions")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                if rows.is_empty() {
                                    <tr>
                                        <td colspan="5" class="text-center text-base-content/60">
                                            {i18n.t("users.empty")}
                                        </td>
                                    </tr>
                                }
                                { for rows.into_iter().map(|user| html! {
                                    <UserRow key={user.id} user={user.clone()} on_action={on_action.clone()} />
                                }) }
                            </tbody>
                        </table>
                    </div>
                </>
            }
        }
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-bold">{i18n.t("users.title")}</h1>
                    <p class="text-base-content/70">{i18n.t("users.subtitle")}</p>
                </div>
                <input
                    type="search"
                    class="input input-bordered w-full max-w-xs"
                    placeholder={i18n.t("users.search")}
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </div>
            {error_panel}
            {body}
            {dialog}
        </div>
    }
}
