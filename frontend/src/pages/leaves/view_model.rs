use crate::api::{
    ApiClient, ApiError, CreateLeaveRequest, Leave, LeavePage, LeaveQuery, UpdateLeaveRequest,
};
use crate::pages::leaves::{
    repository::LeavesRepository,
    utils::{LeaveFormState, MessageState, RecordsFilterState},
};
use leptos::*;

pub const RECORDS_PAGE_SIZE: i64 = 10;

/// Counter shared by every tab; bumping it refetches leave lists.
#[derive(Clone, Copy)]
pub struct LeavesReload(pub RwSignal<u32>);

pub fn use_leaves_reload() -> RwSignal<u32> {
    match use_context::<LeavesReload>() {
        Some(LeavesReload(signal)) => signal,
        None => {
            let signal = create_rw_signal(0u32);
            provide_context(LeavesReload(signal));
            signal
        }
    }
}

pub fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

#[derive(Clone)]
pub struct EditPayload {
    pub id: i64,
    pub changes: UpdateLeaveRequest,
}

#[derive(Clone, Copy)]
pub struct ApplyLeaveViewModel {
    pub form: LeaveFormState,
    pub message: RwSignal<MessageState>,
    pub apply_action: Action<CreateLeaveRequest, Result<Leave, ApiError>>,
}

fn apply_optional_submit_result(
    result: Option<Result<Leave, ApiError>>,
    form: LeaveFormState,
    message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(leave) => {
                message.update(|msg| {
                    msg.set_success(format!(
                        "Leave application submitted for {}.",
                        leave.employee_name
                    ))
                });
                form.reset();
                bump(reload);
            }
            Err(err) => message.update(|msg| msg.set_error(err)),
        }
    }
}

impl ApplyLeaveViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let repository = store_value(LeavesRepository::new(api));
        let reload = use_leaves_reload();
        let form = LeaveFormState::default();
        let message = create_rw_signal(MessageState::default());

        let apply_action = create_action(move |payload: &CreateLeaveRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.apply(payload).await }
        });

        create_effect(move |_| {
            apply_optional_submit_result(apply_action.value().get(), form, message, reload);
        });

        Self {
            form,
            message,
            apply_action,
        }
    }

    pub fn submit(&self) {
        match self.form.to_payload() {
            Ok(payload) => {
                self.message.update(|msg| msg.clear());
                self.apply_action.dispatch(payload);
            }
            Err(err) => self.message.update(|msg| msg.set_error(err)),
        }
    }
}

#[derive(Clone, Copy)]
pub struct RecordsViewModel {
    pub filter: RecordsFilterState,
    pub edit_form: LeaveFormState,
    pub message: RwSignal<MessageState>,
    pub edit_message: RwSignal<MessageState>,
    pub selected: RwSignal<Option<Leave>>,
    pub editing: RwSignal<Option<Leave>>,
    pub leaves_resource: Resource<(LeaveQuery, u32), Result<LeavePage, ApiError>>,
    pub update_action: Action<EditPayload, Result<Leave, ApiError>>,
}

fn apply_optional_update_result(
    result: Option<Result<Leave, ApiError>>,
    message: RwSignal<MessageState>,
    edit_message: RwSignal<MessageState>,
    editing: RwSignal<Option<Leave>>,
    reload: RwSignal<u32>,
) {
    if let Some(result) = result {
        match result {
            Ok(_) => {
                message.update(|msg| msg.set_success("Leave request updated."));
                edit_message.update(|msg| msg.clear());
                editing.set(None);
                bump(reload);
            }
            Err(err) => edit_message.update(|msg| msg.set_error(err)),
        }
    }
}

impl RecordsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_default();
        let repository = store_value(LeavesRepository::new(api));
        let reload = use_leaves_reload();
        let filter = RecordsFilterState::default();
        let edit_form = LeaveFormState::default();
        let message = create_rw_signal(MessageState::default());
        let edit_message = create_rw_signal(MessageState::default());
        let selected = create_rw_signal(None::<Leave>);
        let editing = create_rw_signal(None::<Leave>);

        let status = filter.status_signal();
        let page = filter.page_signal();
        let leaves_resource = create_resource(
            move || {
                (
                    LeaveQuery {
                        page: page.get(),
                        limit: RECORDS_PAGE_SIZE,
                        status: status.get(),
                    },
                    reload.get(),
                )
            },
            move |(query, _)| {
                let repo = repository.get_value();
                async move { repo.list(query).await }
            },
        );

        let update_action = create_action(move |payload: &EditPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.update(payload.id, payload.changes).await }
        });

        create_effect(move |_| {
            apply_optional_update_result(
                update_action.value().get(),
                message,
                edit_message,
                editing,
                reload,
            );
        });

        Self {
            filter,
            edit_form,
            message,
            edit_message,
            selected,
            editing,
            leaves_resource,
            update_action,
        }
    }

    pub fn page(&self) -> Signal<Option<LeavePage>> {
        let resource = self.leaves_resource;
        Signal::derive(move || resource.get().and_then(|result| result.ok()))
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.leaves_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }

    pub fn on_view(&self) -> Callback<Leave> {
        let selected = self.selected;
        Callback::new(move |leave: Leave| selected.set(Some(leave)))
    }

    pub fn on_edit(&self) -> Callback<Leave> {
        let editing = self.editing;
        let edit_form = self.edit_form;
        let edit_message = self.edit_message;
        Callback::new(move |leave: Leave| {
            edit_message.update(|msg| msg.clear());
            edit_form.load_from_leave(&leave);
            editing.set(Some(leave));
        })
    }

    pub fn save_edit(&self) {
        let Some(current) = self.editing.get_untracked() else {
            return;
        };
        match self.edit_form.to_changes(&current) {
            Ok(changes) => {
                self.edit_message.update(|msg| msg.clear());
                self.update_action.dispatch(EditPayload {
                    id: current.id,
                    changes,
                });
            }
            Err(err) => self.edit_message.update(|msg| msg.set_error(err)),
        }
    }

    pub fn cancel_edit(&self) {
        self.editing.set(None);
        self.edit_message.update(|msg| msg.clear());
    }
}
