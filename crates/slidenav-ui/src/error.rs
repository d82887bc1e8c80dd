use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlideError {
    #[error("no element matches selector `{0}`")]
    SelectorNotFound(String),

    #[error("wrapper has no slide elements")]
    NoSlides,

    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("slide controller used before init()")]
    NotInitialized,

    #[error("slide controller already initialized")]
    AlreadyInitialized,

    #[error("platform call failed: {0}")]
    Platform(String),
}
