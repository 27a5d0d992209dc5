use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{
    AttrValue, Callback, Html, InputEvent, Properties, TargetCast, UseStateHandle, function_component,
    html,
};

/// Callback that copies an input's value into a string state.
pub fn bind(handle: &UseStateHandle<String>) -> Callback<String> {
    let handle = handle.clone();
    Callback::from(move |value: String| handle.set(value))
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: String,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(true)]
    pub required: bool,
    #[prop_or_default]
    pub multiline: bool,
}

/// Labelled input with its inline validation message.
#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_change = props.on_change.clone();
    let oninput = Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            on_change.emit(input.value());
        } else if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
            on_change.emit(area.value());
        }
    });
    let input_class = if props.error.is_some() {
        "input input-bordered input-error w-full"
    } else {
        "input input-bordered w-full"
    };

    html! {
        <div class="form-control mb-2">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            if props.multiline {
                <textarea
                    id={props.id.clone()}
                    class="textarea textarea-bordered w-full"
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    {oninput}
                />
            } else {
                <input
                    id={props.id.clone()}
                    class={input_class}
                    type={props.input_type.clone()}
                    required={props.required}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    {oninput}
                />
            }
            if let Some(error) = &props.error {
                <span class="label-text-alt text-error mt-1">{ error.clone() }</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: String,
    pub value: String,
    pub on_change: Callback<String>,
    /// `(value, label)` pairs
    pub options: Vec<(String, String)>,
    #[prop_or_default]
    pub placeholder: Option<String>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let on_change = props.on_change.clone();
    let onchange = Callback::from(move |event: yew::Event| {
        if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
            on_change.emit(select.value());
        }
    });

    html! {
        <div class="form-control mb-2">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            <select id={props.id.clone()} class="select select-bordered w-full" {onchange}>
                if let Some(placeholder) = &props.placeholder {
                    <option value="" selected={props.value.is_empty()}>{ placeholder.clone() }</option>
                }
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>{ label.clone() }</option>
                }) }
            </select>
            if let Some(error) = &props.error {
                <span class="label-text-alt text-error mt-1">{ error.clone() }</span>
            }
        </div>
    }
}
