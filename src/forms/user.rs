use serde::Deserialize;
use validator::Validate;

use crate::controller::ControllerError;
use crate::domain::user::{NewUser, UpdateUser, User, UserRole};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
/// Form data for creating or editing a back-office user.
pub struct UserForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}

impl UserForm {
    #[must_use]
    pub fn for_edit(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                name: user.name.clone(),
                email: user.email.clone(),
                phone: user.phone.clone(),
                role: user.role.to_string(),
            },
            None => Self {
                role: UserRole::default().to_string(),
                ..Self::default()
            },
        }
    }

    fn parsed_role(&self) -> Result<UserRole, ControllerError> {
        self.role
            .parse()
            .map_err(|err| ControllerError::Form(format!("{err}")))
    }

    pub fn to_new(&self) -> Result<NewUser, ControllerError> {
        Ok(NewUser::new(
            self.name.clone(),
            self.email.clone(),
            self.phone.clone().filter(|p| !p.trim().is_empty()),
            self.parsed_role()?,
        ))
    }

    pub fn to_update(&self) -> Result<UpdateUser, ControllerError> {
        Ok(UpdateUser {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_lowercase()),
            phone: self.phone.clone().filter(|p| !p.trim().is_empty()),
            role: Some(self.parsed_role()?),
        })
    }
}
