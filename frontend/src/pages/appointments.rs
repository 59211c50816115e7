use std::ops::Deref;
use std::rc::Rc;

use shared::{operations, Action, Appointment, ClientConfig, Field, ManagerState};
use yew::prelude::*;

use crate::components::appointment_form::AppointmentForm;
use crate::components::appointment_list::AppointmentList;
use crate::services::api::ApiService;

/// Reducer wrapper so view state can live in `use_reducer`
#[derive(Default)]
struct Store(ManagerState);

impl Deref for Store {
    type Target = ManagerState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for Store {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Store(next))
    }
}

fn client_config() -> ClientConfig {
    ClientConfig::from_override(option_env!("APPOINTMENTS_API_BASE_URL"))
}

#[function_component(AppointmentManager)]
pub fn appointment_manager() -> Html {
    let store = use_reducer(Store::default);
    let api = use_memo((), |_| ApiService::new(&client_config()));

    // Fetch the list once on mount
    {
        let store = store.clone();
        let api = api.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(action) = operations::list_appointments(&*api).await {
                    store.dispatch(action);
                }
            });
            || ()
        });
    }

    let on_change = {
        let store = store.clone();
        Callback::from(move |(field, value): (Field, String)| {
            store.dispatch(Action::SetField(field, value));
        })
    };

    let on_submit = {
        let store = store.clone();
        let api = api.clone();
        Callback::from(move |_| {
            let submission = store.submission();
            let store = store.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(action) = operations::submit(&*api, submission).await {
                    store.dispatch(action);
                }
            });
        })
    };

    let on_edit = {
        let store = store.clone();
        Callback::from(move |appointment: Appointment| {
            store.dispatch(Action::BeginEdit(appointment));
        })
    };

    let on_delete = {
        let store = store.clone();
        let api = api.clone();
        Callback::from(move |id: String| {
            let store = store.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(action) = operations::delete_appointment(&*api, id).await {
                    store.dispatch(action);
                }
            });
        })
    };

    html! {
        <div class="flex-row" style="width: 100%">
            <AppointmentForm
                edit_mode={store.is_edit_mode()}
                patient_name={AttrValue::from(store.field(Field::PatientName).to_string())}
                doctor_name={AttrValue::from(store.field(Field::DoctorName).to_string())}
                date={AttrValue::from(store.field(Field::Date).to_string())}
                {on_change}
                {on_submit}
            />
            <AppointmentList
                appointments={store.appointments().to_vec()}
                {on_edit}
                {on_delete}
            />
        </div>
    }
}
