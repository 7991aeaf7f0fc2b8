use taskdeck_client::{ApiClient, ClientError};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use crate::command::{Command, MutationKind};
use crate::events::{ApiEvent, AppEvent};

/// Run `command` in the background and post its result to the event loop.
pub fn spawn(client: &ApiClient, command: Command, sender: UnboundedSender<AppEvent>) {
    let client = client.clone();
    tokio::spawn(async move {
        let event = execute(&client, command).await;
        if sender.send(AppEvent::Api(event)).is_err() {
            debug!("Event loop closed before an API result arrived");
        }
    });
}

/// Perform the single API call a command stands for.
pub async fn execute(client: &ApiClient, command: Command) -> ApiEvent {
    match command {
        Command::LoadTasks { generation } => ApiEvent::TasksLoaded {
            generation,
            result: client.tasks().get_all().await.map_err(describe),
        },
        Command::LoadUsers { generation } => ApiEvent::UsersLoaded {
            generation,
            result: client.users().get_all().await.map_err(describe),
        },
        Command::LoadPanelUsers { generation } => ApiEvent::PanelUsersLoaded {
            generation,
            result: client.users().get_all().await.map_err(describe),
        },
        Command::CreateTask(request) => mutation(
            MutationKind::Create,
            client.tasks().create(&request).await.map(drop),
        ),
        Command::UpdateTask { task_id, request } => mutation(
            MutationKind::Update,
            client.tasks().update(&task_id, &request).await.map(drop),
        ),
        Command::DeleteTask { task_id } => {
            mutation(MutationKind::Delete, client.tasks().delete(&task_id).await)
        }
        Command::AssignUser { task_id, user_id } => mutation(
            MutationKind::Assign,
            client.tasks().assign_user(&task_id, &user_id).await.map(drop),
        ),
        Command::UnassignUser { task_id, user_id } => mutation(
            MutationKind::Unassign,
            client
                .tasks()
                .unassign_user(&task_id, &user_id)
                .await
                .map(drop),
        ),
        Command::CreateUser(request) => ApiEvent::UserCreated {
            result: client.users().create(&request).await.map_err(describe),
        },
    }
}

fn mutation(kind: MutationKind, result: Result<(), ClientError>) -> ApiEvent {
    ApiEvent::MutationFinished {
        kind,
        result: result.map_err(describe),
    }
}

fn describe(err: ClientError) -> String {
    warn!("API call failed: {}", err);
    err.to_string()
}
