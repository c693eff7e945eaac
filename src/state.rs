//! Application State
//!
//! Global state managed by Tauri. The wizard, prospect store, and
//! generator are constructed once at startup and handed to every
//! command by reference; there is no ambient global lookup. Mutation
//! only ever happens synchronously in response to a single user action,
//! so the locks serialize one logical actor rather than true
//! concurrency.

use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use leadflow_personalization::{TemplateCatalog, TemplateEngine};

use crate::models::catalog::WizardCatalog;
use crate::services::generation::{MessageGenerator, TemplateGenerator};
use crate::services::prospects::ProspectStore;
use crate::services::wizard::CampaignWizard;
use crate::storage::CredentialStore;
use crate::utils::error::{AppError, AppResult};

/// Application state managed by Tauri
pub struct AppState {
    wizard: Arc<RwLock<CampaignWizard>>,
    prospects: Arc<RwLock<ProspectStore>>,
    engine: Arc<TemplateEngine>,
    generator: Arc<dyn MessageGenerator>,
    /// RNG backing bulk generation template picks
    rng: Arc<Mutex<StdRng>>,
    /// Credential slot, opened during initialization
    credentials: Arc<RwLock<Option<CredentialStore>>>,
    initialized: Arc<RwLock<bool>>,
}

impl AppState {
    /// Create the state with the built-in catalogs and sample data
    pub fn new() -> Self {
        let engine = Arc::new(TemplateEngine::new(
            TemplateCatalog::connection_request_defaults(),
        ));
        let generator: Arc<dyn MessageGenerator> =
            Arc::new(TemplateGenerator::new(Arc::clone(&engine)));

        Self {
            wizard: Arc::new(RwLock::new(CampaignWizard::new(WizardCatalog::default()))),
            prospects: Arc::new(RwLock::new(ProspectStore::with_sample_data())),
            engine,
            generator,
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
            credentials: Arc::new(RwLock::new(None)),
            initialized: Arc::new(RwLock::new(false)),
        }
    }

    /// Initialize services that touch the filesystem
    pub async fn initialize(&self) -> AppResult<()> {
        let mut initialized = self.initialized.write().await;
        if *initialized {
            return Ok(());
        }

        {
            let store = CredentialStore::new()?;
            let mut credentials_lock = self.credentials.write().await;
            *credentials_lock = Some(store);
        }

        *initialized = true;
        Ok(())
    }

    pub async fn wizard(&self) -> RwLockReadGuard<'_, CampaignWizard> {
        self.wizard.read().await
    }

    pub async fn wizard_mut(&self) -> RwLockWriteGuard<'_, CampaignWizard> {
        self.wizard.write().await
    }

    pub async fn prospects(&self) -> RwLockReadGuard<'_, ProspectStore> {
        self.prospects.read().await
    }

    pub async fn prospects_mut(&self) -> RwLockWriteGuard<'_, ProspectStore> {
        self.prospects.write().await
    }

    pub fn engine(&self) -> &Arc<TemplateEngine> {
        &self.engine
    }

    pub fn generator(&self) -> &Arc<dyn MessageGenerator> {
        &self.generator
    }

    /// Run a closure with the shared RNG
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> AppResult<T> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::internal("RNG lock poisoned"))?;
        Ok(f(&mut rng))
    }

    /// Access the credential slot for reading
    pub async fn with_credentials<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&CredentialStore) -> AppResult<T>,
    {
        let guard = self.credentials.read().await;
        match &*guard {
            Some(store) => f(store),
            None => Err(AppError::config("Credential store not initialized")),
        }
    }

    /// Access the credential slot for writing
    pub async fn with_credentials_mut<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut CredentialStore) -> AppResult<T>,
    {
        let mut guard = self.credentials.write().await;
        match &mut *guard {
            Some(store) => f(store),
            None => Err(AppError::config("Credential store not initialized")),
        }
    }

    /// Check if the credential slot is reachable
    pub fn is_credentials_healthy(&self) -> bool {
        if let Ok(guard) = self.credentials.try_read() {
            if let Some(ref store) = *guard {
                return store.is_healthy();
            }
        }
        false
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("initialized", &self.initialized)
            .finish()
    }
}
