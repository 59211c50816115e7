use shared::Appointment;
use yew::prelude::*;

use crate::components::appointment_card::AppointmentCard;

#[derive(Properties, PartialEq)]
pub struct AppointmentListProps {
    pub appointments: Vec<Appointment>,
    pub on_edit: Callback<Appointment>,
    pub on_delete: Callback<String>,
}

/// Heading showing how many appointments are displayed
pub fn list_heading(count: usize) -> String {
    format!("Appointments ({})", count)
}

#[function_component(AppointmentList)]
pub fn appointment_list(props: &AppointmentListProps) -> Html {
    html! {
        <div class="appointments">
            <h3>{ list_heading(props.appointments.len()) }</h3>
            if props.appointments.is_empty() {
                <div class="empty-state">
                    <p>{ "No appointments scheduled yet." }</p>
                </div>
            } else {
                <div class="appointment-list">
                    { for props.appointments.iter().map(|appointment| html! {
                        <AppointmentCard
                            key={appointment.id.clone()}
                            appointment={appointment.clone()}
                            on_edit={props.on_edit.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    })}
                </div>
            }
        </div>
    }
}
