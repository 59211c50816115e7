use shared::models::display_date;
use shared::Appointment;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppointmentCardProps {
    pub appointment: Appointment,
    pub on_edit: Callback<Appointment>,
    pub on_delete: Callback<String>,
}

#[function_component(AppointmentCard)]
pub fn appointment_card(props: &AppointmentCardProps) -> Html {
    let appointment = &props.appointment;

    let edit = {
        let on_edit = props.on_edit.clone();
        let appointment = appointment.clone();
        Callback::from(move |_| on_edit.emit(appointment.clone()))
    };

    let delete = {
        let on_delete = props.on_delete.clone();
        let id = appointment.id.clone();
        Callback::from(move |_| on_delete.emit(id.clone()))
    };

    html! {
        <div class="appointment-card">
            <p><span>{ "Patient: " }</span>{ &appointment.patient_name }</p>
            <p><span>{ "Doctor: " }</span>{ &appointment.doctor_name }</p>
            <p><span>{ "Date: " }</span>{ display_date(&appointment.date) }</p>
            <div class="btn-container">
                <button type="button" onclick={edit}>{ "Edit" }</button>
                <button type="button" onclick={delete}>{ "Delete" }</button>
            </div>
        </div>
    }
}
