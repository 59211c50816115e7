use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%a, %b %-d %Y";

/// A persisted appointment as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Server-assigned identifier
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub patient_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub doctor_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
}

/// Field values of an appointment without an identifier.
///
/// Used both as the create draft and as the update request body, so a
/// draft can never carry an `_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub patient_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub doctor_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
}

/// Treats a `null` text field as empty; missing fields are covered by `default`
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One editable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PatientName,
    DoctorName,
    Date,
}

impl Appointment {
    pub fn fields(&self) -> AppointmentDraft {
        AppointmentDraft {
            patient_name: self.patient_name.clone(),
            doctor_name: self.doctor_name.clone(),
            date: self.date.clone(),
        }
    }

    /// Builds the entry stored locally after a successful update
    pub fn from_fields(id: impl Into<String>, fields: AppointmentDraft) -> Self {
        Self {
            id: id.into(),
            patient_name: fields.patient_name,
            doctor_name: fields.doctor_name,
            date: fields.date,
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::PatientName => &self.patient_name,
            Field::DoctorName => &self.doctor_name,
            Field::Date => &self.date,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::PatientName => self.patient_name = value,
            Field::DoctorName => self.doctor_name = value,
            Field::Date => self.date = value,
        }
    }
}

impl AppointmentDraft {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::PatientName => &self.patient_name,
            Field::DoctorName => &self.doctor_name,
            Field::Date => &self.date,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::PatientName => self.patient_name = value,
            Field::DoctorName => self.doctor_name = value,
            Field::Date => self.date = value,
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, CALENDAR_DATE_FORMAT)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Normalizes a stored date to `YYYY-MM-DD` for a date input.
///
/// Unparseable text is returned as-is.
pub fn calendar_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(CALENDAR_DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Human-readable form of a stored date, e.g. `Mon, Jan 1 2024`
pub fn display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Appointment {
        Appointment {
            id: "1".to_string(),
            patient_name: "A".to_string(),
            doctor_name: "B".to_string(),
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_appointment_uses_backend_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "_id": "1",
                "patientName": "A",
                "doctorName": "B",
                "date": "2024-01-01",
            })
        );
    }

    #[test]
    fn test_appointment_ignores_extra_server_fields() {
        let json = r#"{"_id":"abc","patientName":"A","doctorName":"B","date":"2024-01-01","__v":0}"#;
        let parsed: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "abc");
        assert_eq!(parsed.doctor_name, "B");
    }

    #[test]
    fn test_list_tolerates_null_and_missing_fields() {
        let json = r#"[
            {"_id":"1","patientName":"A","doctorName":"B","date":"2024-01-01"},
            {"_id":"2","patientName":"C","doctorName":null,"date":null},
            {"_id":"3","patientName":"E"}
        ]"#;
        let parsed: Vec<Appointment> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[1].doctor_name, "");
        assert_eq!(parsed[1].date, "");
        assert_eq!(parsed[2].patient_name, "E");
        assert_eq!(parsed[2].doctor_name, "");
        assert_eq!(parsed[2].date, "");
    }

    #[test]
    fn test_draft_tolerates_null_fields() {
        let parsed: AppointmentDraft =
            serde_json::from_str(r#"{"patientName":null,"date":"2024-01-01"}"#).unwrap();
        assert_eq!(parsed.patient_name, "");
        assert_eq!(parsed.doctor_name, "");
        assert_eq!(parsed.date, "2024-01-01");
    }

    #[test]
    fn test_draft_never_serializes_an_id() {
        let json = serde_json::to_value(sample().fields()).unwrap();
        assert!(json.get("_id").is_none());
        assert_eq!(json["patientName"], "A");
    }

    #[test]
    fn test_from_fields_merges_id() {
        let mut fields = sample().fields();
        fields.set_field(Field::DoctorName, "C".to_string());
        let merged = Appointment::from_fields("1", fields);
        assert_eq!(merged.id, "1");
        assert_eq!(merged.field(Field::DoctorName), "C");
        assert_eq!(merged.field(Field::PatientName), "A");
    }

    #[test]
    fn test_calendar_date_normalizes_timestamps() {
        assert_eq!(calendar_date("2024-01-01"), "2024-01-01");
        assert_eq!(calendar_date("2024-03-05T00:00:00.000Z"), "2024-03-05");
        assert_eq!(calendar_date("next tuesday"), "next tuesday");
        assert_eq!(calendar_date(""), "");
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-01-01"), "Mon, Jan 1 2024");
        assert_eq!(display_date("not a date"), "not a date");
    }
}
