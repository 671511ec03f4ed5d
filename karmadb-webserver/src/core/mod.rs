pub use karmadb_core::{db, repositories};

pub mod entities {
    pub use karmadb_core::entities::*;
    #[cfg(test)]
    pub use karmadb_entities::builders::*;
}

pub mod usecases {
    pub use karmadb_core::usecases::*;
}

pub mod prelude {

    use std::result;

    pub use karmadb_application::error::*;

    pub use super::{db::*, entities::*, repositories::*};

    pub type Result<T> = result::Result<T, karmadb_application::error::AppError>;
}
