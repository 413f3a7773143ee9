//! Fixed blob names for everything the admin panel persists.
//!
//! These names are inherited from earlier deployments and existing stored
//! data depends on them; renaming one orphans every blob written under it.

/// Admin session record.
pub const ADMIN_AUTH: &str = "adminAuth";

/// Real-estate project collection.
pub const ADMIN_PROJECTS: &str = "adminProjects";

/// Property request collection.
pub const ADMIN_REQUESTS: &str = "adminRequests";

/// The single market-trend record.
pub const ADMIN_TRENDS: &str = "adminTrends";

/// Agriculture project collection.
pub const ADMIN_AGRI_PROJECTS: &str = "adminAgriProjects";

/// Sidebar collapse preference.
pub const SIDEBAR_COLLAPSED: &str = "sidebarCollapsed";
