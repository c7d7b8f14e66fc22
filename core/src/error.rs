use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaybeError {
    #[error("cannot build Some from an absent value of type `{type_name}`")]
    AbsentValue { type_name: &'static str },
}
