/// Fetch lifecycle of one view.
///
/// `Idle -> Loading -> Loaded | Failed`; every retry or page change goes
/// back through `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_variant() {
        let loaded: LoadState<u32> = LoadState::Loaded(3);
        assert_eq!(loaded.data(), Some(&3));
        assert_eq!(loaded.error(), None);

        let failed: LoadState<u32> = LoadState::Failed("Error 500".to_string());
        assert_eq!(failed.data(), None);
        assert_eq!(failed.error(), Some("Error 500"));

        assert!(LoadState::<u32>::Loading.is_loading());
        assert_eq!(LoadState::<u32>::default(), LoadState::Idle);
    }

    #[test]
    fn result_maps_to_terminal_state() {
        let ok: Result<u32, String> = Ok(1);
        assert_eq!(LoadState::from_result(ok), LoadState::Loaded(1));
        let err: Result<u32, String> = Err("sin conexión".to_string());
        assert_eq!(
            LoadState::from_result(err),
            LoadState::Failed("sin conexión".to_string())
        );
    }
}
