//! Login page slice.

mod field;
mod render;
mod update;

pub use field::TextField;
pub use render::render_login_page;
use sodhpuch_core::pages::login::{Credentials, LoginForm};
pub use update::{LoginAction, handle_key, handle_paste};

/// Which input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// Login page state: the editable fields plus the form flow.
#[derive(Debug, Clone)]
pub struct LoginPageState {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
    pub form: LoginForm,
}

impl Default for LoginPageState {
    fn default() -> Self {
        Self {
            email: TextField::default(),
            password: TextField::masked(),
            focus: LoginField::Email,
            form: LoginForm::new(),
        }
    }
}

impl LoginPageState {
    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    /// Copies field contents into the form and starts a submit.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if !self.form.is_pending() {
            self.form.email = self.email.text().to_string();
            self.form.password = self.password.text().to_string();
        }
        self.form.begin_submit()
    }
}
