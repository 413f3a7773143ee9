//! The admin panel facade.

use std::fs;
use std::path::{Path, PathBuf};

use bunian_model::{
    AgricultureProject, AgricultureProjectPatch, AgricultureType, MarketTrend, MarketTrendPatch,
    NewAgricultureProject, NewProject, NewPropertyRequest, Project, ProjectCategory, ProjectPatch,
    PropertyRequest, RequestStatus,
};
use bunian_session::{Credentials, Session, SessionGate};
use bunian_store::{keys, Collection, Document, RecordStore};
use bunian_types::{month_year, today, RecordId};
use serde::Serialize;
use tracing::debug;

use crate::error::AdminResult;
use crate::export;

/// Counts shown on the admin dashboard, computed from the live collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_requests: usize,
    pub pending_requests: usize,
    pub handled_requests: usize,
    pub agriculture_projects: usize,
}

/// Owns the content store and the in-memory image of every admin collection.
///
/// All site content flows through this type: the public pages read via its
/// query methods, the admin surface mutates via its command methods, and
/// each mutation persists the affected key before returning.
pub struct AdminPanel {
    store: RecordStore,
    gate: SessionGate,
    projects: Collection<Project>,
    agriculture: Collection<AgricultureProject>,
    requests: Collection<PropertyRequest>,
    trends: Document<MarketTrend>,
    sidebar: Document<bool>,
}

impl AdminPanel {
    /// Opens the panel over a data directory, resolving credentials from the
    /// environment or the built-in pair.
    pub fn open(dir: impl AsRef<Path>) -> AdminResult<Self> {
        Self::open_with(dir, Credentials::resolve(None))
    }

    /// Opens the panel over a data directory with explicit credentials.
    pub fn open_with(dir: impl AsRef<Path>, credentials: Credentials) -> AdminResult<Self> {
        let store = RecordStore::open(dir.as_ref())?;
        Ok(Self::with_store(store, SessionGate::new(credentials)))
    }

    /// Opens an in-memory panel. Nothing is persisted beyond the value.
    #[must_use]
    pub fn open_in_memory() -> Self {
        Self::with_store(
            RecordStore::open_in_memory(),
            SessionGate::new(Credentials::builtin()),
        )
    }

    fn with_store(store: RecordStore, gate: SessionGate) -> Self {
        let projects = Collection::load(&store, keys::ADMIN_PROJECTS, bunian_fixtures::projects);
        let agriculture = Collection::load(
            &store,
            keys::ADMIN_AGRI_PROJECTS,
            bunian_fixtures::agriculture_projects,
        );
        let requests = Collection::load(
            &store,
            keys::ADMIN_REQUESTS,
            bunian_fixtures::property_requests,
        );
        let trends = Document::load(&store, keys::ADMIN_TRENDS, bunian_fixtures::market_trend);
        let sidebar = Document::load(&store, keys::SIDEBAR_COLLAPSED, || false);
        Self {
            store,
            gate,
            projects,
            agriculture,
            requests,
            trends,
            sidebar,
        }
    }

    // ── Session ──────────────────────────────────────────────────

    /// Attempts an admin login. `Ok(false)` on a credential mismatch.
    pub fn login(&self, email: &str, password: &str) -> AdminResult<bool> {
        Ok(self.gate.login(&self.store, email, password)?)
    }

    /// Ends the current session, if any.
    pub fn logout(&self) -> AdminResult<()> {
        Ok(self.gate.logout(&self.store)?)
    }

    /// Whether a live admin session exists.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.gate.is_authenticated(&self.store)
    }

    /// The persisted session record, live or not.
    #[must_use]
    pub fn current_session(&self) -> Option<Session> {
        self.gate.current_session(&self.store)
    }

    // ── Projects ─────────────────────────────────────────────────

    /// All projects, in insertion order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        self.projects.records()
    }

    /// Looks up one project.
    #[must_use]
    pub fn project(&self, id: &RecordId) -> Option<&Project> {
        self.projects.get(id)
    }

    /// Projects flagged for the homepage.
    #[must_use]
    pub fn featured_projects(&self) -> Vec<&Project> {
        self.projects.records().iter().filter(|p| p.featured).collect()
    }

    /// Projects in one category.
    #[must_use]
    pub fn projects_by_category(&self, category: ProjectCategory) -> Vec<&Project> {
        self.projects
            .records()
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Adds a project under a fresh id and persists the collection.
    pub fn add_project(&mut self, new: NewProject) -> AdminResult<RecordId> {
        let id = self.projects.next_id();
        self.projects.insert(&self.store, new.into_record(id.clone()))?;
        debug!(id = %id, "project added");
        Ok(id)
    }

    /// Merges a patch over one project. Fails with `NotFound` when absent.
    pub fn update_project(&mut self, id: &RecordId, patch: ProjectPatch) -> AdminResult<()> {
        self.projects.modify(&self.store, id, |p| patch.apply(p))?;
        Ok(())
    }

    /// Deletes one project. Fails with `NotFound` when absent.
    pub fn delete_project(&mut self, id: &RecordId) -> AdminResult<()> {
        self.projects.remove(&self.store, id)?;
        debug!(id = %id, "project deleted");
        Ok(())
    }

    // ── Agriculture projects ─────────────────────────────────────

    /// All agriculture projects, in insertion order.
    #[must_use]
    pub fn agriculture_projects(&self) -> &[AgricultureProject] {
        self.agriculture.records()
    }

    /// Looks up one agriculture project.
    #[must_use]
    pub fn agriculture_project(&self, id: &RecordId) -> Option<&AgricultureProject> {
        self.agriculture.get(id)
    }

    /// Agriculture projects flagged for the homepage.
    #[must_use]
    pub fn featured_agriculture_projects(&self) -> Vec<&AgricultureProject> {
        self.agriculture
            .records()
            .iter()
            .filter(|p| p.featured)
            .collect()
    }

    /// Agriculture projects of one type.
    #[must_use]
    pub fn agriculture_projects_by_type(&self, kind: AgricultureType) -> Vec<&AgricultureProject> {
        self.agriculture
            .records()
            .iter()
            .filter(|p| p.kind == kind)
            .collect()
    }

    /// Adds an agriculture project under a fresh id and persists.
    pub fn add_agriculture_project(
        &mut self,
        new: NewAgricultureProject,
    ) -> AdminResult<RecordId> {
        let id = self.agriculture.next_id();
        self.agriculture
            .insert(&self.store, new.into_record(id.clone()))?;
        debug!(id = %id, "agriculture project added");
        Ok(id)
    }

    /// Merges a patch over one agriculture project.
    pub fn update_agriculture_project(
        &mut self,
        id: &RecordId,
        patch: AgricultureProjectPatch,
    ) -> AdminResult<()> {
        self.agriculture.modify(&self.store, id, |p| patch.apply(p))?;
        Ok(())
    }

    /// Deletes one agriculture project.
    pub fn delete_agriculture_project(&mut self, id: &RecordId) -> AdminResult<()> {
        self.agriculture.remove(&self.store, id)?;
        debug!(id = %id, "agriculture project deleted");
        Ok(())
    }

    // ── Property requests ────────────────────────────────────────

    /// All property requests, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[PropertyRequest] {
        self.requests.records()
    }

    /// Looks up one request.
    #[must_use]
    pub fn request(&self, id: &RecordId) -> Option<&PropertyRequest> {
        self.requests.get(id)
    }

    /// Requests still awaiting triage.
    #[must_use]
    pub fn pending_requests(&self) -> Vec<&PropertyRequest> {
        self.requests
            .records()
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .collect()
    }

    /// Requests already handled.
    #[must_use]
    pub fn handled_requests(&self) -> Vec<&PropertyRequest> {
        self.requests
            .records()
            .iter()
            .filter(|r| r.status == RequestStatus::Handled)
            .collect()
    }

    /// Files a visitor request: fresh id, today's date stamp, `pending`
    /// status. This is the one mutation reachable without a session, since
    /// the public contact form produces it.
    pub fn submit_request(&mut self, new: NewPropertyRequest) -> AdminResult<RecordId> {
        let id = self.requests.next_id();
        let record = new.into_record(id.clone(), today());
        self.requests.insert(&self.store, record)?;
        debug!(id = %id, "property request submitted");
        Ok(id)
    }

    /// Moves one request to a new triage status.
    pub fn update_request_status(
        &mut self,
        id: &RecordId,
        status: RequestStatus,
    ) -> AdminResult<()> {
        self.requests.modify(&self.store, id, |r| r.status = status)?;
        Ok(())
    }

    // ── Market trends ────────────────────────────────────────────

    /// The current market-trends document.
    #[must_use]
    pub fn trends(&self) -> &MarketTrend {
        self.trends.get()
    }

    /// Merges a patch over the trends document and restamps `lastUpdated`
    /// with the current month, whether or not the patch changed anything.
    pub fn update_trends(&mut self, patch: MarketTrendPatch) -> AdminResult<()> {
        self.trends.update(&self.store, |t| {
            patch.apply(t);
            t.last_updated = month_year();
        })?;
        Ok(())
    }

    // ── Dashboard ────────────────────────────────────────────────

    /// Counts for the dashboard cards.
    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            total_projects: self.projects.len(),
            total_requests: self.requests.len(),
            pending_requests: self.pending_requests().len(),
            handled_requests: self.handled_requests().len(),
            agriculture_projects: self.agriculture.len(),
        }
    }

    // ── Preferences ──────────────────────────────────────────────

    /// Whether the admin sidebar is collapsed.
    #[must_use]
    pub fn sidebar_collapsed(&self) -> bool {
        *self.sidebar.get()
    }

    /// Persists the sidebar preference.
    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) -> AdminResult<()> {
        self.sidebar.set(&self.store, collapsed)?;
        Ok(())
    }

    // ── CSV export ───────────────────────────────────────────────

    /// Renders all requests as CSV.
    pub fn export_requests_csv(&self) -> AdminResult<String> {
        export::requests_to_csv(self.requests.records())
    }

    /// Writes today's export file into `dir` and returns its path.
    pub fn write_requests_csv(&self, dir: impl AsRef<Path>) -> AdminResult<PathBuf> {
        let csv = self.export_requests_csv()?;
        let path = dir.as_ref().join(export::export_filename());
        fs::write(&path, csv)?;
        Ok(path)
    }
}
