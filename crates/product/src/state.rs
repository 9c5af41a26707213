use crate::di::DependenciesInject;
use shared::config::ConnectionPool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        Self {
            di_container: DependenciesInject::new(pool),
        }
    }
}
