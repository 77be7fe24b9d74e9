//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the conversions live here instead of next to either side.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

#[cfg(feature = "server")]
mod server {
    use crate::domain::types::TypeConstraintError;
    use crate::forms::contacts::{AddContactFormError, UpdateReminderFormError};
    use crate::services::ServiceError;

    impl From<TypeConstraintError> for ServiceError {
        fn from(val: TypeConstraintError) -> Self {
            ServiceError::TypeConstraint(val.to_string())
        }
    }

    impl From<AddContactFormError> for ServiceError {
        fn from(val: AddContactFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }

    impl From<UpdateReminderFormError> for ServiceError {
        fn from(val: UpdateReminderFormError) -> Self {
            ServiceError::Form(val.to_string())
        }
    }
}
