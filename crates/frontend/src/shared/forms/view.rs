use super::controller::FormController;
use super::transport::SubmitTransport;
use crate::shared::icons::icon_class;
use contracts::forms::{FieldKind, FieldSpec};
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full px-4 py-3 border rounded-lg focus:ring-2 focus:ring-arivas-red focus:border-transparent transition-colors";

/// One labelled control bound to the controller's field model.
///
/// Ids follow the server form convention (`id_<name>`).
#[component]
pub fn FormField<T: SubmitTransport + Send + Sync + 'static>(
    controller: FormController<T>,
    spec: FieldSpec,
) -> impl IntoView {
    let name = spec.name;
    let id = format!("id_{}", name);

    if spec.kind == FieldKind::Hidden {
        let vm = controller.clone();
        return view! {
            <input type="hidden" id=id name=name prop:value=move || vm.value(name) />
        }
        .into_any();
    }

    let vm_value = controller.clone();
    let vm_input = controller.clone();
    let vm_blur = controller.clone();
    let vm_class = controller.clone();

    let class = move || format!("{} {}", INPUT_CLASS, vm_class.marker(name).border_class());
    let required = spec.required;

    let control = if spec.kind == FieldKind::TextArea {
        view! {
            <textarea
                id=id.clone()
                name=name
                rows="5"
                required=spec.required
                class=class
                prop:value=move || vm_value.value(name)
                on:input=move |ev| vm_input.set_value(name, event_target_value(&ev))
                on:blur=move |_| {
                    if required {
                        vm_blur.blur_command(name);
                    }
                }
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=spec.kind.input_type()
                id=id.clone()
                name=name
                required=spec.required
                class=class
                prop:value=move || vm_value.value(name)
                on:input=move |ev| vm_input.set_value(name, event_target_value(&ev))
                on:blur=move |_| {
                    if required {
                        vm_blur.blur_command(name);
                    }
                }
            />
        }
        .into_any()
    };

    view! {
        <div class="form__group">
            <label class="block text-sm font-medium text-gray-700 mb-2" for=id>
                {spec.label}
                {spec.required.then(|| view! { <span class="text-arivas-red">" *"</span> })}
            </label>
            {control}
        </div>
    }
    .into_any()
}

/// How the button shows progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusyIndicator {
    /// The icon turns into a spinner (`#submit-icon`).
    SwapIcon,
    /// A separate spinner is revealed (`#loading-spinner`).
    Spinner,
}

#[component]
pub fn SubmitButton<T: SubmitTransport + Send + Sync + 'static>(
    controller: FormController<T>,
    indicator: BusyIndicator,
) -> impl IntoView {
    let vm_disabled = controller.clone();
    let vm_label = controller.clone();
    let vm_busy = controller.clone();

    let busy_view = match indicator {
        BusyIndicator::SwapIcon => view! {
            <i
                id="submit-icon"
                class=move || if vm_busy.view().busy { icon_class("spinner") } else { icon_class("send") }
                aria-hidden="true"
            ></i>
        }
        .into_any(),
        BusyIndicator::Spinner => view! {
            <i
                id="loading-spinner"
                class=move || {
                    if vm_busy.view().busy {
                        icon_class("spinner").to_string()
                    } else {
                        format!("{} hidden", icon_class("spinner"))
                    }
                }
                aria-hidden="true"
            ></i>
        }
        .into_any(),
    };

    view! {
        <button
            type="submit"
            id="submit-btn"
            class="w-full bg-arivas-red text-white py-3 px-6 rounded-lg font-semibold hover:bg-red-700 disabled:opacity-60 disabled:cursor-not-allowed flex items-center justify-center gap-2"
            disabled=move || !vm_disabled.view().control_enabled
        >
            <span id="submit-text">{move || vm_label.view().label}</span>
            {busy_view}
        </button>
    }
}
