use yew::prelude::*;
use web_sys::MouseEvent;

/// Visual weight of the confirm button.
#[derive(Clone, Copy, PartialEq, Default)]
pub enum ConfirmTone {
    #[default]
    Primary,
    Danger,
    Success,
}

impl ConfirmTone {
    fn button_class(self) -> &'static str {
        match self {
            ConfirmTone::Primary => "action-button primary-button",
            ConfirmTone::Danger => "action-button danger-button",
            ConfirmTone::Success => "action-button success-button",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub confirm_label: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub tone: ConfirmTone,
    #[prop_or_default]
    pub children: Html,
}

/// Modal confirmation popup. Clicking the backdrop or the close button
/// cancels; only the confirm button proceeds.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };

    let on_card_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| {
            on_cancel.emit(());
        })
    };

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            on_confirm.emit(());
        })
    };

    html! {
        <div class="confirmation-popup-overlay" onclick={on_backdrop_click}>
            <div class="confirmation-popup-card" onclick={on_card_click}>
                <div class="confirmation-popup-header">
                    <h3 class="confirmation-popup-title">{ &props.title }</h3>
                    <button class="confirmation-popup-close" onclick={on_close_click}>{"\u{d7}"}</button>
                </div>

                <div class="confirmation-popup-content">
                    { props.children.clone() }
                </div>

                <div class="confirmation-popup-actions">
                    <button class="action-button secondary-button" onclick={on_cancel_click}>
                        {"Cancel"}
                    </button>
                    <button class={props.tone.button_class()} onclick={on_confirm_click}>
                        { &props.confirm_label }
                    </button>
                </div>
            </div>
        </div>
    }
}
