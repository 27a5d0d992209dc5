use gloo_storage::{LocalStorage, Storage};
use i18nrs::yew::use_translation;
use yew::{Callback, function_component, html, use_effect_with, use_state_eq};

use crate::components::language_option::LanguageOption;
use crate::language::{self, LANGUAGE_KEY};

#[function_component(LanguageSelector)]
pub fn language_selector() -> yew::Html {
    let (i18n, set_language) = use_translation();
    let language_state = use_state_eq(|| i18n.get_current_language().to_string());

    {
        let language_state = language_state.clone();
        use_effect_with(i18n.clone(), move |i18n| {
            language_state.set(i18n.get_current_language().to_string());
            || ()
        });
    }

    let on_select = {
        let language_state = language_state.clone();
        Callback::from(move |code: &'static str| {
            if let Err(err) = LocalStorage::set(LANGUAGE_KEY, code) {
                log::debug!("language not saved: {err}");
            }
            language_state.set(code.to_string());
            set_language.emit(code.to_string());
        })
    };

    let lang_code = &*language_state;
    let active_lang_flag = language::get_language_info(lang_code)
        .map_or("🌐", |info| info.flag);

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1"
                aria-label={i18n.t("header.language")}>
                <span>{active_lang_flag}</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
            {
                for language::sorted_languages().into_iter().map(|info| {
                    html! {
                        <LanguageOption
                            selected={info.code == lang_code}
                            info={info}
                            on_select={on_select.clone()}
                        />
                    }
                })
            }
            </ul>
        </div>
    }
}
