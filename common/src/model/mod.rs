pub mod points;
pub mod tier;
pub mod transaction;
pub mod upload;
pub mod user;

pub use points::{PointsSummary, ReadyCustomersPage, ReadyUsersPage};
pub use tier::{StageState, Tier, TierInfo};
pub use transaction::{Transaction, UPLOAD_COLUMNS};
pub use upload::{check_file_name, UploadRejection, UploadResult, ALLOWED_EXTENSIONS};
pub use user::{TransactionSummary, UserRecord, UsersPage};
