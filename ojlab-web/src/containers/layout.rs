use crate::containers::header::Header;
use i18nrs::yew::use_translation;
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Frame of the public pages: header, content, footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Header />
            <main class="flex-1">
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <p>{i18n.t("layout.footer")}</p>
            </footer>
        </div>
    }
}
