use crate::models::GameSnapshot;

/// Receives a fresh snapshot after every event the controller handles
pub trait GameObserver {
    fn on_update(&mut self, snapshot: &GameSnapshot);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameSnapshot),
{
    fn on_update(&mut self, snapshot: &GameSnapshot) {
        self(snapshot)
    }
}
