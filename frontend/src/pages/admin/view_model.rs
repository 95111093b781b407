use super::{
    repository::AdminRepository,
    utils::{AdminOverview, PendingDecision},
};
use crate::api::{ApiClient, ApiError, Leave};
use crate::components::guard::is_admin_user;
use crate::pages::leaves::{
    utils::MessageState,
    view_model::{bump, use_leaves_reload},
};
use crate::state::auth::use_auth;
use leptos::*;
use std::rc::Rc;

/// The decided target travels with its outcome so the effect can word the message.
pub type DecisionOutcome = (PendingDecision, Result<Leave, ApiError>);

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub overview_resource: Resource<(bool, u32), Result<AdminOverview, ApiError>>,
    pub dialog: RwSignal<Option<PendingDecision>>,
    pub message: RwSignal<MessageState>,
    pub decision_action: Action<PendingDecision, DecisionOutcome>,
}

fn apply_decision_result(
    result: Option<DecisionOutcome>,
    dialog: RwSignal<Option<PendingDecision>>,
    message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    let Some((target, result)) = result else {
        return;
    };
    dialog.set(None);
    match result {
        Ok(leave) => {
            message.update(|msg| msg.set_success(target.decision.success_message(&leave)));
        }
        Err(err) => message.update(|msg| msg.set_error(err)),
    }
    // A conflict means someone else decided first; refetch either way.
    bump(reload);
}

pub fn use_admin_view_model() -> AdminViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_default();
    let repository = store_value(AdminRepository::new_with_client(Rc::new(api)));
    let reload = use_leaves_reload();
    let admin_allowed = create_memo(move |_| is_admin_user(auth.get().user.as_ref()));

    let overview_resource = create_resource(
        move || (admin_allowed.get(), reload.get()),
        move |(allowed, _)| {
            let repo = repository.get_value();
            async move {
                if allowed {
                    repo.overview().await
                } else {
                    Ok(AdminOverview::default())
                }
            }
        },
    );

    let dialog = create_rw_signal(None::<PendingDecision>);
    let message = create_rw_signal(MessageState::default());
    let decision_action = create_action(move |target: &PendingDecision| {
        let repo = repository.get_value();
        let target = target.clone();
        async move {
            let result = repo.decide(target.leave.id, target.decision).await;
            (target, result)
        }
    });

    create_effect(move |_| {
        apply_decision_result(decision_action.value().get(), dialog, message, reload);
    });

    AdminViewModel {
        overview_resource,
        dialog,
        message,
        decision_action,
    }
}

impl AdminViewModel {
    pub fn overview(&self) -> Signal<AdminOverview> {
        let resource = self.overview_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.overview_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }

    pub fn confirm(&self) {
        if let Some(target) = self.dialog.get_untracked() {
            self.message.update(|msg| msg.clear());
            self.decision_action.dispatch(target);
        }
    }
}
