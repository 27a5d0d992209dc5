use yew::{Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    #[prop_or_default]
    pub message: Option<String>,
}

/// Inline failure text for a single request or form.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };
    html! {
        <div role="alert" class="alert alert-error my-2">
            <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-5 h-5" />
            <span>{message}</span>
        </div>
    }
}
