use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    General(String),
    #[error("store not found: {}", .0.display())]
    StoreNotFound(PathBuf),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    #[cfg(feature = "zarrs")]
    #[error(transparent)]
    StoreCreate(#[from] zarrs::filesystem::FilesystemStoreCreateError),
    #[cfg(feature = "zarrs")]
    #[error(transparent)]
    Storage(#[from] zarrs::storage::StorageError),
    #[cfg(feature = "zarrs")]
    #[error(transparent)]
    GroupCreate(#[from] zarrs::group::GroupCreateError),
    #[cfg(feature = "zarrs")]
    #[error(transparent)]
    ArrayCreate(#[from] zarrs::array::ArrayCreateError),
    #[cfg(feature = "zarrs")]
    #[error(transparent)]
    Array(#[from] zarrs::array::ArrayError),
    #[cfg(feature = "zarrs")]
    #[error(transparent)]
    NodeCreate(#[from] zarrs::node::NodeCreateError),
    #[error(transparent)]
    Wrapped(Box<dyn std::error::Error>),
}

impl Error {
    pub fn general(message: impl Into<String>) -> Self {
        Self::General(message.into())
    }

    pub fn wrap(error: impl std::error::Error + 'static) -> Self {
        Self::Wrapped(Box::new(error))
    }

    /// Categorical name of the underlying error, used in failure diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::General(_) => "General",
            Error::StoreNotFound(_) => "StoreNotFound",
            Error::SerdeJson(_) => "SerdeJson",
            #[cfg(feature = "zarrs")]
            Error::StoreCreate(_) => "FilesystemStoreCreateError",
            #[cfg(feature = "zarrs")]
            Error::Storage(_) => "StorageError",
            #[cfg(feature = "zarrs")]
            Error::GroupCreate(_) => "GroupCreateError",
            #[cfg(feature = "zarrs")]
            Error::ArrayCreate(_) => "ArrayCreateError",
            #[cfg(feature = "zarrs")]
            Error::Array(_) => "ArrayError",
            #[cfg(feature = "zarrs")]
            Error::NodeCreate(_) => "NodeCreateError",
            Error::Wrapped(_) => "Wrapped",
        }
    }
}
