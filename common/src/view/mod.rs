pub mod aggregate;
pub mod dashboard;
pub mod export;
pub mod filter;
pub mod load_state;
pub mod lookup;
pub mod pagination;
pub mod sequence;

pub use aggregate::RowTotals;
pub use dashboard::{DashboardSummary, TierShare, LATEST_USERS_SHOWN};
pub use export::{export_csv, export_file_name, CsvExport, ExportError};
pub use filter::{CustomerRow, RowFilter, TierFilter, ALL_TIERS_VALUE};
pub use load_state::LoadState;
pub use lookup::{recent_transactions, LookupKind, EMPTY_ID_MESSAGE};
pub use pagination::{Pagination, DASHBOARD_PAGE_SIZE, READY_PAGE_SIZE, USERS_PAGE_SIZE};
pub use sequence::{RequestSequence, Ticket};
