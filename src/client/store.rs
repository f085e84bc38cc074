use tokio::sync::watch;

use super::view_model::ViewModel;

pub struct ViewModelStore {
    tx: watch::Sender<ViewModel>,
}

impl ViewModelStore {
    pub fn new(initial: ViewModel) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn snapshot(&self) -> ViewModel {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.tx.subscribe()
    }

    pub fn publish(&self, vm: ViewModel) {
        self.tx.send_replace(vm);
    }

    pub fn update(&self, apply: impl FnOnce(&mut ViewModel)) {
        let mut next = self.snapshot();
        apply(&mut next);
        self.publish(next);
    }
}
