use yew::{Callback, Html, MouseEvent, Properties, function_component, html};
use yew_icons::{Icon, IconId};

use crate::language::LanguageInfo;

#[derive(Properties, PartialEq)]
pub struct LanguageOptionProps {
    pub info: LanguageInfo,
    pub selected: bool,
    pub on_select: Callback<&'static str>,
}

/// One entry of the language menu, labelled in its own language.
#[function_component(LanguageOption)]
pub fn language_option(props: &LanguageOptionProps) -> Html {
    let LanguageInfo {
        code,
        flag,
        native_name,
        ..
    } = props.info;
    let onclick = {
        let on_select = props.on_select.clone();
        move |event: MouseEvent| {
            event.prevent_default();
            on_select.emit(code);
        }
    };
    html! {
        <li>
            <a
                lang={code}
                class={if props.selected { "active justify-between" } else { "justify-between" }}
                aria-current={props.selected.then_some("true")}
                {onclick}>
                <span>{ flag }{" "}{ native_name }</span>
                if props.selected {
                    <Icon icon_id={IconId::HeroiconsSolidCheck} class="w-4 h-4" />
                }
            </a>
        </li>
    }
}
