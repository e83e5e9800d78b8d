//! UI Components
//!
//! Reusable Leptos components, one view per file.

mod activities_view;
mod activity_form;
mod case_preview;
mod cases_view;
mod confirm_delete;
mod dashboard;
mod performance_card;
mod reports_view;
mod requests_view;
mod role_notice;
mod toast_host;

pub use activities_view::ActivitiesView;
pub use activity_form::ActivityForm;
pub use case_preview::CasePreviewPanel;
pub use cases_view::CasesView;
pub use confirm_delete::ConfirmDelete;
pub use dashboard::DashboardView;
pub use performance_card::PerformanceCard;
pub use reports_view::ReportsView;
pub use requests_view::RequestsView;
pub use role_notice::RoleNotice;
pub use toast_host::ToastHost;
