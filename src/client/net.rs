use std::{thread, time::Duration};

use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

use super::api::{GameApi, HttpGameApi};
use super::service::{Command, GameId, GameService, Session};
use super::store::ViewModelStore;
use super::view_model::{ViewModel, alphabet};
use crate::config::ClientConfig;

pub fn spawn_network(
    config: ClientConfig,
) -> (
    mpsc::UnboundedSender<Command>,
    watch::Receiver<ViewModel>,
) {
    let (to_net_tx, to_net_rx) = mpsc::unbounded_channel::<Command>();
    let store = ViewModelStore::new(ViewModel::new(&alphabet(config.umlauts)));
    let vm_rx = store.subscribe();

    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("failed to build network runtime: {}", e);
                store.update(|vm| vm.last_message = format!("Network unavailable: {}", e));
                return;
            }
        };

        let api = match HttpGameApi::new(&config) {
            Ok(api) => api,
            Err(e) => {
                log::error!("failed to build http client: {}", e);
                store.update(|vm| vm.last_message = format!("Network unavailable: {}", e));
                return;
            }
        };

        let service = GameService::new(api, store, &config);
        runtime.block_on(command_loop(service, to_net_rx, config.auto_restart));
        log::debug!("network thread finished");
    });

    (to_net_tx, vm_rx)
}

// A finished game restarts once, `auto_restart` after it ended.
pub async fn command_loop<A: GameApi>(
    mut service: GameService<A>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    auto_restart: Option<Duration>,
) {
    let mut finished: Option<GameId> = None;
    let mut deadline: Option<Instant> = None;
    loop {
        let over = match service.session() {
            Session::Over(id, _) => Some(id.clone()),
            _ => None,
        };
        if over != finished {
            deadline = over
                .as_ref()
                .and(auto_restart)
                .map(|delay| Instant::now() + delay);
            finished = over;
        }

        let command = match deadline {
            Some(at) => tokio::select! {
                cmd = commands.recv() => cmd,
                _ = tokio::time::sleep_until(at) => {
                    deadline = None;
                    Some(Command::Restart)
                }
            },
            None => commands.recv().await,
        };
        let Some(command) = command else {
            break;
        };
        log::debug!("handling {:?}", command);
        service.handle(command).await;
    }
}
