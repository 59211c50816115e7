use shared::models::calendar_date;
use shared::Field;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppointmentFormProps {
    pub edit_mode: bool,
    pub patient_name: AttrValue,
    pub doctor_name: AttrValue,
    pub date: AttrValue,
    pub on_change: Callback<(Field, String)>,
    pub on_submit: Callback<()>,
}

/// Heading and submit label for the current mode
pub fn labels(edit_mode: bool) -> (&'static str, &'static str) {
    if edit_mode {
        ("Edit Appointment", "Update Appointment")
    } else {
        ("Add New Appointment", "Add Appointment")
    }
}

fn on_field_input(on_change: &Callback<(Field, String)>, field: Field) -> Callback<InputEvent> {
    let on_change = on_change.clone();
    Callback::from(move |e: InputEvent| {
        let input = e
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = input {
            on_change.emit((field, input.value()));
        }
    })
}

#[function_component(AppointmentForm)]
pub fn appointment_form(props: &AppointmentFormProps) -> Html {
    let (heading, submit_label) = labels(props.edit_mode);

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <div class="flex-column">
            <div class="add-form">
                <h4>{ heading }</h4>
                <form class="appointment-form" {onsubmit}>
                    <label>{ "Patient Name:" }</label>
                    <input
                        type="text"
                        value={props.patient_name.clone()}
                        oninput={on_field_input(&props.on_change, Field::PatientName)}
                    />

                    <label>{ "Doctor Name:" }</label>
                    <input
                        type="text"
                        value={props.doctor_name.clone()}
                        oninput={on_field_input(&props.on_change, Field::DoctorName)}
                    />

                    <label>{ "Date:" }</label>
                    <input
                        type="date"
                        value={calendar_date(&props.date)}
                        oninput={on_field_input(&props.on_change, Field::Date)}
                    />

                    <button type="submit">{ submit_label }</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mode_labels() {
        assert_eq!(labels(false), ("Add New Appointment", "Add Appointment"));
    }

    #[test]
    fn test_edit_mode_labels() {
        assert_eq!(labels(true), ("Edit Appointment", "Update Appointment"));
    }
}
