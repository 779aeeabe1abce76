use i18nrs::yew::use_translation;
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    /// Style the confirm button as destructive.
    #[prop_or_default]
    pub danger: bool,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Modal asking the operator to confirm a mutation.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let (i18n, ..) = use_translation();
    let on_confirm = props.on_confirm.reform(|_: yew::MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: yew::MouseEvent| ());
    let confirm_class = classes!(
        "btn",
        if props.danger { "btn-error" } else { "btn-primary" }
    );

    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{&props.title}</h3>
                <p class="py-4">{&props.message}</p>
                <div class="modal-action">
                    <button class="btn btn-ghost" onclick={on_cancel} disabled={props.busy}>
                        {i18n.t("common.cancel")}
                    </button>
                    <button class={confirm_class} onclick={on_confirm} disabled={props.busy}>
                        if props.busy {
                            <span class="loading loading-spinner loading-sm"></span>
                        }
                        {&props.confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
