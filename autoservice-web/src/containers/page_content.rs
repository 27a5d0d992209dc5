use yew::{Children, Classes, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PageContentProps {
    #[prop_or_default]
    pub children: Children,

    #[prop_or_default]
    pub class: Classes,

    /// Page heading, rendered above the content when set
    #[prop_or_default]
    pub title: Option<String>,

    #[prop_or(true)]
    pub container: bool,
}

/// Page content container component
#[function_component(PageContent)]
pub fn page_content(props: &PageContentProps) -> Html {
    let container_classes = classes!(
        if props.container {
            classes!(
                "bg-base-100",
                "rounded-box",
                "shadow-sm",
                "border",
                "border-base-300",
                "p-4",
                "md:p-6"
            )
        } else {
            Classes::new()
        },
        props.class.clone()
    );

    html! {
        <div class={container_classes}>
            if let Some(title) = &props.title {
                <h1 class="text-2xl font-bold mb-4">{ title.clone() }</h1>
            }
            {props.children.clone()}
        </div>
    }
}
