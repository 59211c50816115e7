use crate::models::{Appointment, AppointmentDraft, Field};

/// Which record the form is bound to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    /// Holds the edit buffer, a copy of the entry being modified
    Edit(Appointment),
}

/// What submitting the form should do in the current mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(AppointmentDraft),
    Update { id: String, fields: AppointmentDraft },
}

/// State transitions of the appointment manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A list fetch succeeded; replaces the whole list
    Loaded(Vec<Appointment>),
    /// A create succeeded with the server's record
    Created(Appointment),
    /// An update succeeded; `fields` are the values that were submitted
    Updated { id: String, fields: AppointmentDraft },
    /// A delete succeeded
    Deleted(String),
    /// The edit action of a list entry was invoked
    BeginEdit(Appointment),
    /// A form input changed
    SetField(Field, String),
}

/// View state of the appointment manager.
///
/// The list is a cache of server state and is patched after each mutation
/// rather than re-fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagerState {
    appointments: Vec<Appointment>,
    draft: AppointmentDraft,
    mode: FormMode,
}

impl ManagerState {
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn edit_buffer(&self) -> Option<&Appointment> {
        match &self.mode {
            FormMode::Edit(buffer) => Some(buffer),
            FormMode::Create => None,
        }
    }

    /// Current value of a form field in whichever record the form is bound to
    pub fn field(&self, field: Field) -> &str {
        match &self.mode {
            FormMode::Edit(buffer) => buffer.field(field),
            FormMode::Create => self.draft.field(field),
        }
    }

    pub fn submission(&self) -> Submission {
        match &self.mode {
            FormMode::Edit(buffer) => Submission::Update {
                id: buffer.id.clone(),
                fields: buffer.fields(),
            },
            FormMode::Create => Submission::Create(self.draft.clone()),
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Loaded(appointments) => {
                self.appointments = appointments;
            }
            Action::Created(appointment) => {
                self.appointments.push(appointment);
                self.draft = AppointmentDraft::default();
            }
            Action::Updated { id, fields } => {
                let updated = Appointment::from_fields(id, fields);
                for appointment in self.appointments.iter_mut() {
                    if appointment.id == updated.id {
                        *appointment = updated.clone();
                    }
                }
                self.mode = FormMode::Create;
            }
            Action::Deleted(id) => {
                self.appointments.retain(|appointment| appointment.id != id);
            }
            Action::BeginEdit(appointment) => {
                self.mode = FormMode::Edit(appointment);
            }
            Action::SetField(field, value) => match &mut self.mode {
                FormMode::Edit(buffer) => buffer.set_field(field, value),
                FormMode::Create => self.draft.set_field(field, value),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(id: &str, patient: &str, doctor: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            patient_name: patient.to_string(),
            doctor_name: doctor.to_string(),
            date: "2024-01-01".to_string(),
        }
    }

    fn loaded(appointments: Vec<Appointment>) -> ManagerState {
        let mut state = ManagerState::default();
        state.apply(Action::Loaded(appointments));
        state
    }

    #[test]
    fn test_starts_in_create_mode_with_empty_draft() {
        let state = ManagerState::default();
        assert!(!state.is_edit_mode());
        assert!(state.edit_buffer().is_none());
        assert!(state.appointments().is_empty());
        assert_eq!(state.draft(), &AppointmentDraft::default());
    }

    #[test]
    fn test_loaded_replaces_list() {
        let mut state = loaded(vec![appointment("old", "X", "Y")]);
        state.apply(Action::Loaded(vec![
            appointment("1", "A", "B"),
            appointment("2", "C", "D"),
        ]));
        assert_eq!(state.appointments().len(), 2);
        assert_eq!(state.appointments()[0].id, "1");
    }

    #[test]
    fn test_set_field_writes_draft_in_create_mode() {
        let mut state = ManagerState::default();
        state.apply(Action::SetField(Field::PatientName, "A".to_string()));
        state.apply(Action::SetField(Field::Date, "2024-01-01".to_string()));
        assert_eq!(state.draft().patient_name, "A");
        assert_eq!(state.field(Field::Date), "2024-01-01");
        assert_eq!(
            state.submission(),
            Submission::Create(AppointmentDraft {
                patient_name: "A".to_string(),
                doctor_name: String::new(),
                date: "2024-01-01".to_string(),
            })
        );
    }

    #[test]
    fn test_created_appends_and_clears_draft() {
        let mut state = ManagerState::default();
        state.apply(Action::SetField(Field::PatientName, "A".to_string()));
        state.apply(Action::Created(appointment("1", "A", "B")));
        assert_eq!(state.appointments(), &[appointment("1", "A", "B")]);
        assert_eq!(state.draft(), &AppointmentDraft::default());
    }

    #[test]
    fn test_begin_edit_copies_entry_into_buffer() {
        let entry = appointment("1", "A", "B");
        let mut state = loaded(vec![entry.clone()]);
        state.apply(Action::BeginEdit(entry.clone()));
        assert!(state.is_edit_mode());
        assert_eq!(state.edit_buffer(), Some(&entry));
        assert_eq!(state.field(Field::DoctorName), "B");
    }

    #[test]
    fn test_edits_go_to_buffer_not_draft() {
        let entry = appointment("1", "A", "B");
        let mut state = loaded(vec![entry.clone()]);
        state.apply(Action::SetField(Field::PatientName, "draft".to_string()));
        state.apply(Action::BeginEdit(entry));
        state.apply(Action::SetField(Field::DoctorName, "C".to_string()));

        assert_eq!(state.draft().patient_name, "draft");
        assert_eq!(state.draft().doctor_name, "");
        // the list keeps the server's values until the update succeeds
        assert_eq!(state.appointments()[0].doctor_name, "B");
        assert_eq!(
            state.submission(),
            Submission::Update {
                id: "1".to_string(),
                fields: AppointmentDraft {
                    patient_name: "A".to_string(),
                    doctor_name: "C".to_string(),
                    date: "2024-01-01".to_string(),
                },
            }
        );
    }

    #[test]
    fn test_updated_patches_entry_and_leaves_edit_mode() {
        let first = appointment("1", "A", "B");
        let second = appointment("2", "D", "E");
        let mut state = loaded(vec![first.clone(), second.clone()]);
        state.apply(Action::BeginEdit(first));
        state.apply(Action::SetField(Field::DoctorName, "C".to_string()));

        let Submission::Update { id, fields } = state.submission() else {
            panic!("expected an update submission");
        };
        state.apply(Action::Updated { id, fields });

        assert_eq!(state.appointments()[0], appointment("1", "A", "C"));
        assert_eq!(state.appointments()[1], second);
        assert!(!state.is_edit_mode());
        assert!(state.edit_buffer().is_none());
    }

    #[test]
    fn test_updated_for_unknown_id_leaves_list_alone() {
        let entry = appointment("1", "A", "B");
        let mut state = loaded(vec![entry.clone()]);
        state.apply(Action::Updated {
            id: "missing".to_string(),
            fields: AppointmentDraft::default(),
        });
        assert_eq!(state.appointments(), &[entry]);
    }

    #[test]
    fn test_deleted_removes_only_matching_entry() {
        let mut state = loaded(vec![
            appointment("1", "A", "B"),
            appointment("2", "C", "D"),
            appointment("3", "E", "F"),
        ]);
        state.apply(Action::Deleted("1".to_string()));
        assert_eq!(
            state.appointments(),
            &[appointment("2", "C", "D"), appointment("3", "E", "F")]
        );
    }

    #[test]
    fn test_deleting_entry_under_edit_keeps_buffer() {
        let entry = appointment("1", "A", "B");
        let mut state = loaded(vec![entry.clone()]);
        state.apply(Action::BeginEdit(entry.clone()));
        state.apply(Action::Deleted("1".to_string()));
        assert!(state.appointments().is_empty());
        assert_eq!(state.edit_buffer(), Some(&entry));
    }
}
