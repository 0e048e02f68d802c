use commander_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("validation: {0}")]
    Validation(String),

    #[error("authorization: {0}")]
    Authorization(String),

    #[error("infra: {0}")]
    Infra(String),

    #[error("command handler [{0}] does not exist")]
    HandlerNotRegistered(String),

    #[error("invalid decorator: [{identifier}] is not a command decorator")]
    InvalidDecorator { identifier: String },

    #[error("binding not found: {0}")]
    BindingNotFound(String),

    #[error("service not found: {0}")]
    ServiceNotFound(&'static str),

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unable to map input to command: {field}")]
    UnmappableInput { field: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("config: {0}")]
    Config(String),
}

impl AppError {
    pub fn validation(reason: impl Into<String>) -> Self {
        AppError::Validation(reason.into())
    }

    /// 是否为校验类错误（包括领域层的非法命令/值）
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::Domain(DomainError::InvalidCommand { .. })
                | AppError::Domain(DomainError::InvalidValue { .. })
        )
    }
}

impl From<figment::Error> for AppError {
    fn from(err: figment::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
