//! Application shell: a view-state switch driven by session presence.

use std::sync::Arc;

use tracing::info;

use crate::models::User;
use crate::services::auth::{AuthError, Credentials, RegistrationForm};
use crate::services::AuthService;
use crate::storage::{StorageError, StorageService};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Landing,
    Login,
    Register,
    Dashboard,
}

pub struct AppShell {
    storage: Arc<dyn StorageService>,
    auth: AuthService,
    current_user: Option<User>,
    view: ViewState,
}

impl AppShell {
    pub fn new(storage: Arc<dyn StorageService>) -> Self {
        Self {
            auth: AuthService::new(storage.clone()),
            storage,
            current_user: None,
            view: ViewState::Landing,
        }
    }

    /// Startup session check: straight to the dashboard when a session is
    /// already stored, landing page otherwise.
    pub async fn start(&mut self) -> Result<(), StorageError> {
        self.current_user = self.storage.get_session().await?;
        self.view = if self.current_user.is_some() {
            ViewState::Dashboard
        } else {
            ViewState::Landing
        };
        Ok(())
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn open_login(&mut self) {
        if self.current_user.is_none() {
            self.view = ViewState::Login;
        }
    }

    pub fn open_register(&mut self) {
        if self.current_user.is_none() {
            self.view = ViewState::Register;
        }
    }

    pub fn back_to_landing(&mut self) {
        if self.current_user.is_none() {
            self.view = ViewState::Landing;
        }
    }

    pub async fn login(&mut self, credentials: &Credentials) -> Result<User, AuthError> {
        let user = self.auth.login(credentials).await?;
        self.storage.set_session(&user).await?;
        self.current_user = Some(user.clone());
        self.view = ViewState::Dashboard;
        Ok(user)
    }

    /// Registration doubles as an immediate login.
    pub async fn register(&mut self, form: RegistrationForm) -> Result<User, AuthError> {
        let user = self.auth.register(form).await?;
        self.storage.set_session(&user).await?;
        self.current_user = Some(user.clone());
        self.view = ViewState::Dashboard;
        Ok(user)
    }

    pub async fn logout(&mut self) -> Result<(), StorageError> {
        self.storage.clear_session().await?;
        if let Some(user) = self.current_user.take() {
            info!(email = %user.email, "logged out");
        }
        self.view = ViewState::Landing;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use crate::storage::MemoryStorage;

    async fn store_with_john() -> Arc<MemoryStorage> {
        let store = Arc::new(MemoryStorage::new());
        let john = User {
            id: "u-john".into(),
            role: UserRole::Student,
            is_blocked: false,
            name: "John".into(),
            email: "john@student.edu".into(),
            password: "pass".into(),
            student_id: "S-100".into(),
            department: "CS".into(),
            year_section: "3-A".into(),
            mobile: "0123456789".into(),
        };
        store.save_user(&john).await.unwrap();
        store
    }

    fn john_credentials() -> Credentials {
        Credentials {
            email: "john@student.edu".into(),
            password: "pass".into(),
        }
    }

    #[tokio::test]
    async fn cold_start_lands_on_landing() {
        let mut shell = AppShell::new(store_with_john().await);
        shell.start().await.unwrap();
        assert_eq!(shell.view(), ViewState::Landing);
        assert!(shell.current_user().is_none());
    }

    #[tokio::test]
    async fn login_stores_the_session_and_opens_the_dashboard() {
        let store = store_with_john().await;
        let mut shell = AppShell::new(store.clone());
        shell.start().await.unwrap();
        shell.open_login();
        assert_eq!(shell.view(), ViewState::Login);

        let user = shell.login(&john_credentials()).await.unwrap();
        assert_eq!(shell.view(), ViewState::Dashboard);
        assert_eq!(store.get_session().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn a_stored_session_resumes_to_the_dashboard() {
        let store = store_with_john().await;
        {
            let mut shell = AppShell::new(store.clone());
            shell.start().await.unwrap();
            shell.login(&john_credentials()).await.unwrap();
        }
        let mut shell = AppShell::new(store);
        shell.start().await.unwrap();
        assert_eq!(shell.view(), ViewState::Dashboard);
        assert_eq!(
            shell.current_user().map(|u| u.email.as_str()),
            Some("john@student.edu")
        );
    }

    #[tokio::test]
    async fn logout_clears_the_session_and_returns_to_landing() {
        let store = store_with_john().await;
        let mut shell = AppShell::new(store.clone());
        shell.start().await.unwrap();
        shell.login(&john_credentials()).await.unwrap();

        shell.logout().await.unwrap();
        assert_eq!(shell.view(), ViewState::Landing);
        assert_eq!(store.get_session().await.unwrap(), None);
    }

    #[tokio::test]
    async fn failed_login_stays_on_the_form() {
        let mut shell = AppShell::new(store_with_john().await);
        shell.start().await.unwrap();
        shell.open_login();
        let err = shell
            .login(&Credentials {
                email: "john@student.edu".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(shell.view(), ViewState::Login);
        assert!(shell.current_user().is_none());
    }

    #[tokio::test]
    async fn registration_logs_straight_in() {
        let store = store_with_john().await;
        let mut shell = AppShell::new(store.clone());
        shell.start().await.unwrap();
        shell.open_register();

        let user = shell
            .register(RegistrationForm {
                name: "Jane Doe".into(),
                email: "jane@student.edu".into(),
                password: "secret".into(),
                student_id: "S-200".into(),
                department: "EE".into(),
                year_section: "2-B".into(),
                mobile: "9876543210".into(),
            })
            .await
            .unwrap();
        assert_eq!(shell.view(), ViewState::Dashboard);
        assert_eq!(store.get_session().await.unwrap(), Some(user));
    }

    #[tokio::test]
    async fn view_switches_are_ignored_while_logged_in() {
        let mut shell = AppShell::new(store_with_john().await);
        shell.start().await.unwrap();
        shell.login(&john_credentials()).await.unwrap();
        shell.open_login();
        shell.back_to_landing();
        assert_eq!(shell.view(), ViewState::Dashboard);
    }
}
