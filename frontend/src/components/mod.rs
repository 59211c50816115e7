pub mod appointment_card;
pub mod appointment_form;
pub mod appointment_list;
pub mod header;
