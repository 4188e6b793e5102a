use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    /// A `before_save` hook refused the save.
    #[error("save vetoed by hook '{hook}': {reason}")]
    Vetoed { hook: String, reason: String },
}
