use yew::{Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Fill the viewport instead of the parent box.
    #[prop_or(true)]
    pub full_screen: bool,
}

/// Neutral spinner shown while something is still being resolved.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let container = if props.full_screen {
        classes!("min-h-screen", "flex", "items-center", "justify-center")
    } else {
        classes!("flex", "items-center", "justify-center", "p-6")
    };
    html! {
        <div class={container} role="status" aria-busy="true">
            <span class="loading loading-spinner loading-md text-primary"></span>
        </div>
    }
}
