//! Application controller: view routing, access gating, and derived feed
//! state.
//!
//! `App` is the explicit application context: it owns the managers and the
//! per-session UI state (current view, search term, active filter, sign-in
//! prompt). It is constructed once at process start and threaded to every
//! surface that needs it; there are no ambient singletons.
//!
//! Navigation is a small state machine over [`View`]. Entering a protected
//! view while unauthenticated redirects back to the feed and raises the
//! sign-in prompt; that is a recoverable outcome, not an error. The map is
//! readable without signing in.

use crate::catalog::{
    CatalogError, HelpRequest, NewHelpRequest, PaymentType, RequestCatalog, RequestId,
};
use crate::feed::{visible, Filter};
use crate::identity::{IdentityError, SessionManager, User, UserUpdate};
use crate::locale::LocaleManager;
use crate::payment::{Payment, PaymentError, PaymentManager, PaymentPurpose};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Application errors
#[derive(Debug, Error)]
pub enum AppError {
    /// The intent requires a signed-in user
    #[error("sign in to continue")]
    SignInRequired,

    /// Request validation or lookup failed
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Sign-in failed
    #[error("identity error: {0}")]
    Identity(#[from] IdentityError),

    /// Payment failed
    #[error("payment error: {0}")]
    Payment(#[from] PaymentError),
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

/// The navigable views.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Feed,
    CreateRequest,
    Profile,
    Map,
    MyRequests,
}

impl View {
    /// Whether entering this view requires a signed-in user. The feed and
    /// the map are readable by anyone.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, View::Feed | View::Map)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Feed => write!(f, "feed"),
            View::CreateRequest => write!(f, "create-request"),
            View::Profile => write!(f, "profile"),
            View::Map => write!(f, "map"),
            View::MyRequests => write!(f, "my-requests"),
        }
    }
}

/// Outcome of a navigation intent.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Navigation {
    /// The view actually entered
    pub view: View,
    /// Whether the intent was redirected and the sign-in prompt raised
    pub sign_in_required: bool,
}

/// A map pin for a request that carries coordinates.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MapMarker {
    pub request_id: RequestId,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
}

#[derive(Debug, Default)]
struct UiState {
    view: View,
    search_term: String,
    filter: Filter,
    sign_in_prompt: bool,
}

/// The application context.
#[derive(Clone)]
pub struct App {
    pub sessions: SessionManager,
    pub catalog: RequestCatalog,
    pub payments: PaymentManager,
    pub locale: LocaleManager,
    ui: Arc<RwLock<UiState>>,
}

impl App {
    /// Assemble the application from its managers. Initial view is the
    /// feed.
    pub fn new(
        sessions: SessionManager,
        catalog: RequestCatalog,
        payments: PaymentManager,
        locale: LocaleManager,
    ) -> Self {
        Self {
            sessions,
            catalog,
            payments,
            locale,
            ui: Arc::new(RwLock::new(UiState::default())),
        }
    }

    /// The view currently shown.
    pub async fn current_view(&self) -> View {
        self.ui.read().await.view
    }

    /// Whether the sign-in prompt is raised.
    pub async fn sign_in_prompt(&self) -> bool {
        self.ui.read().await.sign_in_prompt
    }

    /// Dismiss the sign-in prompt without signing in.
    pub async fn dismiss_sign_in_prompt(&self) {
        self.ui.write().await.sign_in_prompt = false;
    }

    /// Handle a navigation intent.
    ///
    /// Protected views redirect to the feed and raise the sign-in prompt
    /// when no user is signed in. The transition itself is synchronous;
    /// there is no intermediate loading state.
    pub async fn navigate(&self, view: View) -> Navigation {
        let authenticated = self.sessions.is_authenticated().await;
        let mut ui = self.ui.write().await;

        if view.requires_auth() && !authenticated {
            debug!("redirecting unauthenticated navigation to {view}");
            ui.view = View::Feed;
            ui.sign_in_prompt = true;
            return Navigation {
                view: View::Feed,
                sign_in_required: true,
            };
        }

        ui.view = view;
        Navigation {
            view,
            sign_in_required: false,
        }
    }

    /// Sign in and clear the sign-in prompt.
    pub async fn sign_in(&self, credential: &str) -> AppResult<User> {
        let user = self.sessions.sign_in(credential).await?;
        self.ui.write().await.sign_in_prompt = false;
        Ok(user)
    }

    /// Sign out. A protected view cannot outlive its session, so the view
    /// snaps back to the feed if it required one.
    pub async fn sign_out(&self) {
        self.sessions.sign_out().await;
        let mut ui = self.ui.write().await;
        if ui.view.requires_auth() {
            ui.view = View::Feed;
        }
    }

    /// Merge a profile update into the session user.
    pub async fn update_profile(&self, update: UserUpdate) -> AppResult<User> {
        match self.sessions.update_user(update).await? {
            Some(user) => Ok(user),
            None => Err(AppError::SignInRequired),
        }
    }

    /// Replace the feed search term.
    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.ui.write().await.search_term = term.into();
    }

    /// The current feed search term.
    pub async fn search_term(&self) -> String {
        self.ui.read().await.search_term.clone()
    }

    /// Replace the active filter.
    pub async fn set_filter(&self, filter: Filter) {
        self.ui.write().await.filter = filter;
    }

    /// The active filter.
    pub async fn filter(&self) -> Filter {
        self.ui.read().await.filter.clone()
    }

    /// Clear the search term and every filter field.
    pub async fn clear_filters(&self) {
        let mut ui = self.ui.write().await;
        ui.search_term.clear();
        ui.filter = Filter::default();
    }

    /// The feed as derived from the catalog, the search term, and the
    /// active filter. Catalog order is preserved.
    pub async fn visible_requests(&self) -> Vec<HelpRequest> {
        let (search_term, filter) = {
            let ui = self.ui.read().await;
            (ui.search_term.clone(), ui.filter.clone())
        };
        let requests = self.catalog.list().await;
        visible(&requests, &search_term, &filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Requests owned by the session user; empty when signed out.
    pub async fn my_requests(&self) -> Vec<HelpRequest> {
        match self.sessions.current_user().await {
            Some(user) => self.catalog.list_by_owner(&user.id).await,
            None => Vec::new(),
        }
    }

    /// Map pins for the currently visible requests that carry coordinates.
    /// Requests without coordinates are display-only on the feed.
    pub async fn map_markers(&self) -> Vec<MapMarker> {
        self.visible_requests()
            .await
            .into_iter()
            .filter_map(|request| {
                request.coordinates.map(|point| MapMarker {
                    request_id: request.id,
                    latitude: point.latitude,
                    longitude: point.longitude,
                    title: request.title,
                })
            })
            .collect()
    }

    /// Submit a new request. Requires a session; the authored request goes
    /// to the front of the catalog and the view returns to the feed.
    pub async fn create_request(&self, form: NewHelpRequest) -> AppResult<HelpRequest> {
        let Some(user) = self.sessions.current_user().await else {
            self.ui.write().await.sign_in_prompt = true;
            return Err(AppError::SignInRequired);
        };

        let request = HelpRequest::create(form, user.id, user.preferred_language)?;
        self.catalog.add(request.clone()).await;
        self.ui.write().await.view = View::Feed;
        Ok(request)
    }

    /// Pay or tip for a request. The receiver is the request owner; the
    /// purpose follows the request's payment terms.
    pub async fn pay_for_request(&self, request_id: RequestId, amount: f64) -> AppResult<Payment> {
        let Some(payer) = self.sessions.current_user().await else {
            self.ui.write().await.sign_in_prompt = true;
            return Err(AppError::SignInRequired);
        };

        let request = self
            .catalog
            .get(request_id)
            .await
            .ok_or(CatalogError::RequestNotFound(request_id))?;

        let purpose = match request.payment_type {
            PaymentType::Paid => PaymentPurpose::Service,
            PaymentType::Donation => PaymentPurpose::Donation,
            PaymentType::Free => PaymentPurpose::Tip,
        };
        let currency = request.currency.clone().unwrap_or_else(|| "USD".to_string());

        let payment = self
            .payments
            .process_payment(
                request_id,
                amount,
                payer.id,
                request.requester_id.clone(),
                purpose,
                &currency,
            )
            .await?;
        Ok(payment)
    }
}
